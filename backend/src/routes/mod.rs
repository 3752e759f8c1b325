//! Route definitions for the Irrigation Decision Engine

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/crops", crop_routes())
        .nest("/sensor-data", reading_routes())
        .nest("/decisions", decision_routes())
}

/// Crop registration routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_crops).post(handlers::create_crop))
        .route("/:crop_id", get(handlers::get_crop))
        .route("/:crop_id/evaluate-latest", post(handlers::evaluate_latest))
}

/// Sensor reading routes
fn reading_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_readings).post(handlers::submit_reading))
        .route("/:reading_id", get(handlers::get_reading))
}

/// Irrigation decision routes
fn decision_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_decisions))
        .route("/evaluate/:reading_id", post(handlers::evaluate_reading))
        .route(
            "/:decision_id",
            get(handlers::get_decision).patch(handlers::update_decision_status),
        )
}
