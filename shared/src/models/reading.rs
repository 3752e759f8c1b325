//! Sensor reading models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A single field observation for one crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    pub id: Uuid,
    pub crop_id: Uuid,
    /// Soil moisture percentage (0-100)
    pub soil_moisture: f64,
    /// Air temperature in °C
    pub temperature: f64,
    /// Air humidity percentage (0-100)
    pub humidity: Option<f64>,
    /// Rainfall in mm
    pub rainfall_mm: Option<f64>,
    /// Wind speed in km/h
    pub wind_speed: Option<f64>,
    /// Solar radiation in W/m²
    pub solar_radiation: Option<f64>,
    pub recorded_at: DateTime<Utc>,
}

/// Input for submitting a sensor reading
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSensorReadingInput {
    pub crop_id: Uuid,
    #[validate(range(min = 0.0, max = 100.0))]
    pub soil_moisture: f64,
    pub temperature: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: Option<f64>,
    #[validate(range(min = 0.0))]
    pub rainfall_mm: Option<f64>,
    #[validate(range(min = 0.0))]
    pub wind_speed: Option<f64>,
    #[validate(range(min = 0.0))]
    pub solar_radiation: Option<f64>,
}
