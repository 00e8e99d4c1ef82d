use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::env;

/// Longest error snippet the diagnostic endpoint will surface in-band.
const ERROR_SNIPPET_CHARS: usize = 50;

/// Collections listed by the diagnostic endpoint, at most.
const MAX_LISTED_COLLECTIONS: usize = 10;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Perfume Shop API is running" }))
}

/// Operational diagnostic: reports store connectivity and configuration
/// inside a 200 body. Internal errors are reported as truncated status
/// strings, never as a failed request.
pub async fn test_database(State(state): State<AppState>) -> impl IntoResponse {
    let mut response = json!({
        "backend": "✅ Running",
        "database": "❌ Not Available",
        "database_url": env_presence("DATABASE_URL"),
        "database_name": env_presence("DATABASE_NAME"),
        "connection_status": "Not Connected",
        "collections": [],
    });

    match state.db.health_check().await {
        Ok(()) => {
            response["connection_status"] = json!("Connected");
            response["database"] = json!("✅ Available");

            match state.db.collection_names().await {
                Ok(mut names) => {
                    names.truncate(MAX_LISTED_COLLECTIONS);
                    response["collections"] = json!(names);
                    response["database"] = json!("✅ Connected & Working");
                }
                Err(e) => {
                    response["database"] = json!(format!(
                        "⚠️  Connected but Error: {}",
                        truncate_chars(&e.to_string(), ERROR_SNIPPET_CHARS)
                    ));
                }
            }
        }
        Err(e) => {
            response["database"] = json!(format!(
                "❌ Error: {}",
                truncate_chars(&e.to_string(), ERROR_SNIPPET_CHARS)
            ));
        }
    }

    Json(response)
}

// Mirrors truthiness reporting: an empty value counts as unset.
fn env_presence(key: &str) -> &'static str {
    match env::var(key) {
        Ok(value) if !value.is_empty() => "✅ Set",
        _ => "❌ Not Set",
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
