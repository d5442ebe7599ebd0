pub mod cli;
pub mod error;
pub mod gi;
pub mod interface;
pub mod models;
pub mod nutrition;
pub mod session;
pub mod state;

pub use error::{NutriError, Result};
pub use models::{derive_id, FoodItem, NutritionRecord};
