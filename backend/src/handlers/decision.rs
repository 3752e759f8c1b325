//! Irrigation decision HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use shared::{IrrigationDecision, ListQuery, UpdateDecisionStatusInput};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::DecisionService;
use crate::AppState;

fn decision_service(state: AppState) -> DecisionService<crate::store::PgStore> {
    DecisionService::new(state.store, state.config.scoring)
}

/// Analyze a sensor reading and store an irrigation decision
pub async fn evaluate_reading(
    State(state): State<AppState>,
    Path(reading_id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<IrrigationDecision>)> {
    let decision = decision_service(state)
        .evaluate_and_store(reading_id)
        .await?;
    Ok((StatusCode::CREATED, Json(decision)))
}

/// Analyze the most recent reading of a crop
pub async fn evaluate_latest(
    State(state): State<AppState>,
    Path(crop_id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<IrrigationDecision>)> {
    let decision = decision_service(state).evaluate_latest(crop_id).await?;
    Ok((StatusCode::CREATED, Json(decision)))
}

/// List irrigation decisions
pub async fn list_decisions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<IrrigationDecision>>> {
    Ok(Json(decision_service(state).list_decisions(query).await?))
}

pub async fn get_decision(
    State(state): State<AppState>,
    Path(decision_id): Path<Uuid>,
) -> AppResult<Json<IrrigationDecision>> {
    Ok(Json(decision_service(state).get_decision(decision_id).await?))
}

/// Update the status of an irrigation decision (approve, complete, or skip)
pub async fn update_decision_status(
    State(state): State<AppState>,
    Path(decision_id): Path<Uuid>,
    Json(input): Json<UpdateDecisionStatusInput>,
) -> AppResult<Json<IrrigationDecision>> {
    let decision = decision_service(state)
        .update_status(decision_id, input.status)
        .await?;
    Ok(Json(decision))
}
