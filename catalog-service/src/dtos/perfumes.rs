use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ListPerfumesParams {
    pub q: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreatePerfumeResponse {
    pub id: String,
}

/// Response shape for a catalog item. Every field serializes
/// unconditionally, so absent optionals show up as JSON null.
#[derive(Debug, Serialize)]
pub struct PerfumeResponse {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub notes: Option<Vec<String>>,
    pub category: Option<String>,
    pub gender: Option<String>,
    pub rating: Option<f64>,
    pub stock: i64,
}

// Decode step for raw store documents: known fields are copied, missing or
// mistyped ones fall back to defaults, anything else in the document is
// dropped. The mapping is total and never fails.
impl From<Document> for PerfumeResponse {
    fn from(mut doc: Document) -> Self {
        Self {
            id: id_string(doc.remove("_id")),
            name: take_string(&mut doc, "name").unwrap_or_default(),
            brand: take_string(&mut doc, "brand").unwrap_or_default(),
            description: take_string(&mut doc, "description"),
            price: take_f64(&mut doc, "price").unwrap_or(0.0),
            image: take_string(&mut doc, "image"),
            notes: take_string_list(&mut doc, "notes"),
            category: take_string(&mut doc, "category"),
            gender: take_string(&mut doc, "gender"),
            rating: take_f64(&mut doc, "rating"),
            stock: take_i64(&mut doc, "stock").unwrap_or(0),
        }
    }
}

fn id_string(value: Option<Bson>) -> String {
    match value {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(s)) => s,
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn take_string(doc: &mut Document, key: &str) -> Option<String> {
    match doc.remove(key) {
        Some(Bson::String(s)) => Some(s),
        _ => None,
    }
}

fn take_f64(doc: &mut Document, key: &str) -> Option<f64> {
    match doc.remove(key) {
        Some(Bson::Double(v)) => Some(v),
        Some(Bson::Int32(v)) => Some(f64::from(v)),
        Some(Bson::Int64(v)) => Some(v as f64),
        _ => None,
    }
}

fn take_i64(doc: &mut Document, key: &str) -> Option<i64> {
    match doc.remove(key) {
        Some(Bson::Int32(v)) => Some(i64::from(v)),
        Some(Bson::Int64(v)) => Some(v),
        // Matches an integer cast: fractional stock values truncate.
        Some(Bson::Double(v)) => Some(v as i64),
        _ => None,
    }
}

fn take_string_list(doc: &mut Document, key: &str) -> Option<Vec<String>> {
    match doc.remove(key) {
        Some(Bson::Array(values)) => Some(
            values
                .into_iter()
                .filter_map(|value| match value {
                    Bson::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    }
}
