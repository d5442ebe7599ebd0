mod manager;
mod persistence;

pub use manager::{SavedFoods, SAVED_FOODS_SLOT};
pub use persistence::{FileStore, KeyValueStore, MemoryStore};
