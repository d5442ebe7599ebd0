mod client;

pub use client::{parse_estimate, GeminiClient, GiEstimate, GiProvider};
