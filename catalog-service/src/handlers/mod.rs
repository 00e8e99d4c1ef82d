pub mod health;
pub mod perfumes;

pub use health::{root, test_database};
pub use perfumes::{create_perfume, get_perfume, list_perfumes};
