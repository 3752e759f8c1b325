//! Data access for crops, readings and decisions
//!
//! Services receive a store handle explicitly; there is no global session.
//! `PgStore` backs the running server, `MemoryStore` backs unit tests.

use std::future::Future;

use shared::{
    CreateCropInput, CreateSensorReadingInput, Crop, DecisionStatus, IrrigationDecision,
    ScoreResult, SensorReading,
};
use uuid::Uuid;

use crate::error::AppResult;

mod postgres;

#[cfg(test)]
mod memory;

pub use postgres::PgStore;

#[cfg(test)]
pub use memory::MemoryStore;

/// A decision about to be appended for a reading
#[derive(Debug, Clone)]
pub struct NewDecision {
    pub crop_id: Uuid,
    pub sensor_reading_id: Uuid,
    pub score: ScoreResult,
}

/// Load-by-id and append-only creation for the irrigation records
pub trait IrrigationStore: Clone + Send + Sync + 'static {
    fn insert_crop(&self, input: CreateCropInput) -> impl Future<Output = AppResult<Crop>> + Send;

    fn find_crop(&self, crop_id: Uuid) -> impl Future<Output = AppResult<Option<Crop>>> + Send;

    fn list_crops(&self) -> impl Future<Output = AppResult<Vec<Crop>>> + Send;

    fn insert_reading(
        &self,
        input: CreateSensorReadingInput,
    ) -> impl Future<Output = AppResult<SensorReading>> + Send;

    fn find_reading(
        &self,
        reading_id: Uuid,
    ) -> impl Future<Output = AppResult<Option<SensorReading>>> + Send;

    /// Most recent reading for a crop by `recorded_at`
    fn latest_reading(
        &self,
        crop_id: Uuid,
    ) -> impl Future<Output = AppResult<Option<SensorReading>>> + Send;

    /// Newest first
    fn list_readings(
        &self,
        crop_id: Option<Uuid>,
        limit: i64,
    ) -> impl Future<Output = AppResult<Vec<SensorReading>>> + Send;

    /// Appends a decision in the `pending` state
    fn insert_decision(
        &self,
        decision: NewDecision,
    ) -> impl Future<Output = AppResult<IrrigationDecision>> + Send;

    fn find_decision(
        &self,
        decision_id: Uuid,
    ) -> impl Future<Output = AppResult<Option<IrrigationDecision>>> + Send;

    /// Newest first
    fn list_decisions(
        &self,
        crop_id: Option<Uuid>,
        limit: i64,
    ) -> impl Future<Output = AppResult<Vec<IrrigationDecision>>> + Send;

    /// Only touches a decision that is still `pending`; `None` otherwise
    fn set_decision_status(
        &self,
        decision_id: Uuid,
        status: DecisionStatus,
    ) -> impl Future<Output = AppResult<Option<IrrigationDecision>>> + Send;
}
