//! Sensor reading service

use shared::{CreateSensorReadingInput, ListQuery, SensorReading};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::store::IrrigationStore;

/// Reading service for recording and browsing sensor data
#[derive(Clone)]
pub struct ReadingService<S> {
    store: S,
}

impl<S: IrrigationStore> ReadingService<S> {
    /// Create a new ReadingService over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record a new sensor reading for an existing crop
    pub async fn record_reading(&self, input: CreateSensorReadingInput) -> AppResult<SensorReading> {
        input.validate()?;

        if self.store.find_crop(input.crop_id).await?.is_none() {
            return Err(AppError::NotFound("Crop".to_string()));
        }

        let reading = self.store.insert_reading(input).await?;
        tracing::debug!(
            reading_id = %reading.id,
            crop_id = %reading.crop_id,
            soil_moisture = reading.soil_moisture,
            "Recorded sensor reading"
        );

        Ok(reading)
    }

    /// Get a sensor reading by ID
    pub async fn get_reading(&self, reading_id: Uuid) -> AppResult<SensorReading> {
        self.store
            .find_reading(reading_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sensor reading".to_string()))
    }

    /// List sensor readings newest first, optionally filtered by crop
    pub async fn list_readings(&self, query: ListQuery) -> AppResult<Vec<SensorReading>> {
        query.validate()?;
        self.store
            .list_readings(query.crop_id, query.effective_limit())
            .await
    }
}
