mod food;

pub use food::{derive_id, FoodItem, NutritionRecord};
