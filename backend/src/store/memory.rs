//! In-memory store for service tests

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Duration, Utc};
use shared::{
    CreateCropInput, CreateSensorReadingInput, Crop, DecisionStatus, IrrigationDecision,
    SensorReading,
};
use uuid::Uuid;

use super::{IrrigationStore, NewDecision};
use crate::error::{AppError, AppResult};

#[derive(Default)]
struct Tables {
    crops: Vec<Crop>,
    readings: Vec<SensorReading>,
    decisions: Vec<IrrigationDecision>,
    // Monotonic clock so "newest first" is stable within a test
    tick: i64,
}

impl Tables {
    fn now(&mut self) -> chrono::DateTime<Utc> {
        self.tick += 1;
        Utc::now() + Duration::milliseconds(self.tick)
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| AppError::Internal("memory store poisoned".to_string()))
    }

    /// Drop a crop to simulate a reading whose crop has gone away
    pub fn remove_crop(&self, crop_id: Uuid) {
        if let Ok(mut tables) = self.lock() {
            tables.crops.retain(|c| c.id != crop_id);
        }
    }
}

impl IrrigationStore for MemoryStore {
    async fn insert_crop(&self, input: CreateCropInput) -> AppResult<Crop> {
        let mut tables = self.lock()?;
        let now = tables.now();
        let crop = Crop {
            id: Uuid::new_v4(),
            name: input.name,
            species: input.species,
            min_soil_moisture: input.min_soil_moisture,
            max_soil_moisture: input.max_soil_moisture,
            optimal_temperature_min: input.optimal_temperature_min,
            optimal_temperature_max: input.optimal_temperature_max,
            water_requirement_mm: input.water_requirement_mm,
            created_at: now,
            updated_at: now,
        };
        tables.crops.push(crop.clone());
        Ok(crop)
    }

    async fn find_crop(&self, crop_id: Uuid) -> AppResult<Option<Crop>> {
        Ok(self.lock()?.crops.iter().find(|c| c.id == crop_id).cloned())
    }

    async fn list_crops(&self) -> AppResult<Vec<Crop>> {
        let mut crops = self.lock()?.crops.clone();
        crops.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(crops)
    }

    async fn insert_reading(&self, input: CreateSensorReadingInput) -> AppResult<SensorReading> {
        let mut tables = self.lock()?;
        let reading = SensorReading {
            id: Uuid::new_v4(),
            crop_id: input.crop_id,
            soil_moisture: input.soil_moisture,
            temperature: input.temperature,
            humidity: input.humidity,
            rainfall_mm: input.rainfall_mm,
            wind_speed: input.wind_speed,
            solar_radiation: input.solar_radiation,
            recorded_at: tables.now(),
        };
        tables.readings.push(reading.clone());
        Ok(reading)
    }

    async fn find_reading(&self, reading_id: Uuid) -> AppResult<Option<SensorReading>> {
        Ok(self
            .lock()?
            .readings
            .iter()
            .find(|r| r.id == reading_id)
            .cloned())
    }

    async fn latest_reading(&self, crop_id: Uuid) -> AppResult<Option<SensorReading>> {
        Ok(self
            .lock()?
            .readings
            .iter()
            .filter(|r| r.crop_id == crop_id)
            .max_by_key(|r| r.recorded_at)
            .cloned())
    }

    async fn list_readings(&self, crop_id: Option<Uuid>, limit: i64) -> AppResult<Vec<SensorReading>> {
        let mut readings: Vec<_> = self
            .lock()?
            .readings
            .iter()
            .filter(|r| crop_id.map_or(true, |id| r.crop_id == id))
            .cloned()
            .collect();
        readings.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        readings.truncate(limit.max(0) as usize);
        Ok(readings)
    }

    async fn insert_decision(&self, decision: NewDecision) -> AppResult<IrrigationDecision> {
        let mut tables = self.lock()?;
        let score = decision.score;
        let record = IrrigationDecision {
            id: Uuid::new_v4(),
            crop_id: decision.crop_id,
            sensor_reading_id: decision.sensor_reading_id,
            water_stress_index: score.water_stress_index,
            stress_level: score.stress_level,
            should_irrigate: score.should_irrigate,
            recommended_water_mm: score.recommended_water_mm,
            reason: score.reason,
            status: DecisionStatus::Pending,
            decided_at: tables.now(),
        };
        tables.decisions.push(record.clone());
        Ok(record)
    }

    async fn find_decision(&self, decision_id: Uuid) -> AppResult<Option<IrrigationDecision>> {
        Ok(self
            .lock()?
            .decisions
            .iter()
            .find(|d| d.id == decision_id)
            .cloned())
    }

    async fn list_decisions(
        &self,
        crop_id: Option<Uuid>,
        limit: i64,
    ) -> AppResult<Vec<IrrigationDecision>> {
        let mut decisions: Vec<_> = self
            .lock()?
            .decisions
            .iter()
            .filter(|d| crop_id.map_or(true, |id| d.crop_id == id))
            .cloned()
            .collect();
        decisions.sort_by(|a, b| b.decided_at.cmp(&a.decided_at));
        decisions.truncate(limit.max(0) as usize);
        Ok(decisions)
    }

    async fn set_decision_status(
        &self,
        decision_id: Uuid,
        status: DecisionStatus,
    ) -> AppResult<Option<IrrigationDecision>> {
        let mut tables = self.lock()?;
        Ok(tables
            .decisions
            .iter_mut()
            .find(|d| d.id == decision_id && d.status == DecisionStatus::Pending)
            .map(|d| {
                d.status = status;
                d.clone()
            }))
    }
}
