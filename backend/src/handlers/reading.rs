//! Sensor reading HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use shared::{CreateSensorReadingInput, ListQuery, SensorReading};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::ReadingService;
use crate::AppState;

/// Submit a new sensor reading for a crop
pub async fn submit_reading(
    State(state): State<AppState>,
    Json(input): Json<CreateSensorReadingInput>,
) -> AppResult<(StatusCode, Json<SensorReading>)> {
    let service = ReadingService::new(state.store);
    let reading = service.record_reading(input).await?;
    Ok((StatusCode::CREATED, Json(reading)))
}

/// List sensor readings, optionally filtered by crop
pub async fn list_readings(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<SensorReading>>> {
    let service = ReadingService::new(state.store);
    Ok(Json(service.list_readings(query).await?))
}

pub async fn get_reading(
    State(state): State<AppState>,
    Path(reading_id): Path<Uuid>,
) -> AppResult<Json<SensorReading>> {
    let service = ReadingService::new(state.store);
    Ok(Json(service.get_reading(reading_id).await?))
}
