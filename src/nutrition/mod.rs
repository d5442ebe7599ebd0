mod mock;
mod summary;

pub use mock::generate_nutrition;
pub use summary::generate_summary;
