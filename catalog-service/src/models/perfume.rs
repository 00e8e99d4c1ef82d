use serde::{Deserialize, Serialize};
use validator::Validate;

/// Collection holding the catalog documents.
pub const PERFUME_COLLECTION: &str = "perfume";

fn default_stock() -> i64 {
    10
}

/// A catalog item as submitted by clients and stored in the collection.
///
/// The store assigns the identifier at insert time, so the model carries no
/// id field of its own.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Perfume {
    pub name: String,
    pub brand: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: f64,
    #[validate(url(message = "image must be a valid URL"))]
    pub image: Option<String>,
    pub notes: Option<Vec<String>>,
    pub category: Option<String>,
    pub gender: Option<String>,
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: Option<f64>,
    #[serde(default = "default_stock")]
    #[validate(range(min = 0, message = "stock must be non-negative"))]
    pub stock: i64,
}
