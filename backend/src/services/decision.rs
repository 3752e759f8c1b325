//! Irrigation decision service
//!
//! Wraps the pure water stress scoring from `shared::stress` with the
//! load-then-append persistence step, and owns the approval workflow.

use shared::{
    stress, Crop, DecisionStatus, IrrigationDecision, ListQuery, ScoreResult, SensorReading,
    StressParameters,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::store::{IrrigationStore, NewDecision};

/// Decision service for evaluating readings and tracking approvals
#[derive(Clone)]
pub struct DecisionService<S> {
    store: S,
    params: StressParameters,
}

impl<S: IrrigationStore> DecisionService<S> {
    /// Create a new DecisionService over the given store and scoring parameters
    pub fn new(store: S, params: StressParameters) -> Self {
        Self { store, params }
    }

    /// Score a reading against its crop without touching the store
    pub fn score(&self, reading: &SensorReading, crop: &Crop) -> ScoreResult {
        stress::score(reading, crop, &self.params)
    }

    /// Load a reading and its crop, score it, and append a pending decision.
    ///
    /// Every call appends a new decision, even for a reading that was
    /// evaluated before.
    pub async fn evaluate_and_store(&self, reading_id: Uuid) -> AppResult<IrrigationDecision> {
        let reading = self
            .store
            .find_reading(reading_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sensor reading".to_string()))?;

        let crop = self
            .store
            .find_crop(reading.crop_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Crop".to_string()))?;

        self.store_evaluation(&reading, &crop).await
    }

    /// Evaluate the most recent reading recorded for a crop
    pub async fn evaluate_latest(&self, crop_id: Uuid) -> AppResult<IrrigationDecision> {
        let crop = self
            .store
            .find_crop(crop_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Crop".to_string()))?;

        let reading = self
            .store
            .latest_reading(crop_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sensor reading".to_string()))?;

        self.store_evaluation(&reading, &crop).await
    }

    async fn store_evaluation(
        &self,
        reading: &SensorReading,
        crop: &Crop,
    ) -> AppResult<IrrigationDecision> {
        let score = self.score(reading, crop);

        tracing::info!(
            reading_id = %reading.id,
            crop_id = %crop.id,
            stress_index = score.water_stress_index,
            stress_level = %score.stress_level,
            should_irrigate = score.should_irrigate,
            "Evaluated water stress"
        );

        self.store
            .insert_decision(NewDecision {
                crop_id: crop.id,
                sensor_reading_id: reading.id,
                score,
            })
            .await
    }

    /// Get a decision by ID
    pub async fn get_decision(&self, decision_id: Uuid) -> AppResult<IrrigationDecision> {
        self.store
            .find_decision(decision_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Decision".to_string()))
    }

    /// List decisions newest first, optionally filtered by crop
    pub async fn list_decisions(&self, query: ListQuery) -> AppResult<Vec<IrrigationDecision>> {
        query.validate()?;
        self.store
            .list_decisions(query.crop_id, query.effective_limit())
            .await
    }

    /// Move a pending decision to approved, completed or skipped
    pub async fn update_status(
        &self,
        decision_id: Uuid,
        next: DecisionStatus,
    ) -> AppResult<IrrigationDecision> {
        let current = self.get_decision(decision_id).await?;

        if !current.status.can_transition_to(next) {
            tracing::warn!(
                decision_id = %decision_id,
                from = %current.status,
                to = %next,
                "Rejected decision status change"
            );
            return Err(AppError::InvalidStateTransition(format!(
                "cannot move decision from {} to {}",
                current.status, next
            )));
        }

        // Another request may have settled the decision since it was loaded
        let updated = self
            .store
            .set_decision_status(decision_id, next)
            .await?
            .ok_or_else(|| {
                AppError::InvalidStateTransition(format!(
                    "decision is no longer {}",
                    DecisionStatus::Pending
                ))
            })?;

        tracing::info!(decision_id = %decision_id, status = %next, "Updated decision status");
        Ok(updated)
    }
}
