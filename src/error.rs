use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("Model output failed schema validation: {0}")]
    InvalidModelOutput(String),

    #[error("Completion service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Missing API key: set GEMINI_API_KEY")]
    MissingApiKey,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, NutriError>;
