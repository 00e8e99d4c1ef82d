use crate::dtos::{CreatePerfumeResponse, ListPerfumesParams, PerfumeResponse};
use crate::models::{Perfume, PERFUME_COLLECTION};
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use mongodb::bson::{doc, Document};
use shop_core::error::AppError;
use validator::Validate;

const DEFAULT_LIST_LIMIT: i64 = 50;

pub async fn list_perfumes(
    State(state): State<AppState>,
    Query(params): Query<ListPerfumesParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let filter = match params.q.as_deref() {
        Some(q) if !q.is_empty() => search_filter(q),
        _ => doc! {},
    };

    let docs = state.db.find(PERFUME_COLLECTION, filter, limit).await?;
    let perfumes: Vec<PerfumeResponse> = docs.into_iter().map(PerfumeResponse::from).collect();

    Ok(Json(perfumes))
}

pub async fn create_perfume(
    State(state): State<AppState>,
    Json(perfume): Json<Perfume>,
) -> Result<impl IntoResponse, AppError> {
    perfume.validate()?;

    let id = state.db.insert(PERFUME_COLLECTION, &perfume).await?;
    tracing::info!(perfume_id = %id, name = %perfume.name, "Perfume created");

    Ok(Json(CreatePerfumeResponse { id }))
}

pub async fn get_perfume(
    State(state): State<AppState>,
    Path(perfume_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let document = state
        .db
        .find_one(PERFUME_COLLECTION, &perfume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Perfume not found")))?;

    Ok(Json(PerfumeResponse::from(document)))
}

/// Case-insensitive substring match on name or brand.
fn search_filter(q: &str) -> Document {
    doc! {
        "$or": [
            { "name": { "$regex": q, "$options": "i" } },
            { "brand": { "$regex": q, "$options": "i" } },
        ]
    }
}
