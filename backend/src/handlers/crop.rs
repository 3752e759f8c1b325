//! Crop HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::{CreateCropInput, Crop};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::CropService;
use crate::AppState;

/// Register a new crop with its moisture and temperature thresholds
pub async fn create_crop(
    State(state): State<AppState>,
    Json(input): Json<CreateCropInput>,
) -> AppResult<(StatusCode, Json<Crop>)> {
    let service = CropService::new(state.store);
    let crop = service.register_crop(input).await?;
    Ok((StatusCode::CREATED, Json(crop)))
}

/// List all registered crops
pub async fn list_crops(State(state): State<AppState>) -> AppResult<Json<Vec<Crop>>> {
    let service = CropService::new(state.store);
    Ok(Json(service.list_crops().await?))
}

/// Get a specific crop
pub async fn get_crop(
    State(state): State<AppState>,
    Path(crop_id): Path<Uuid>,
) -> AppResult<Json<Crop>> {
    let service = CropService::new(state.store);
    Ok(Json(service.get_crop(crop_id).await?))
}
