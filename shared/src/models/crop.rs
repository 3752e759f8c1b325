//! Crop threshold models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::validation::validate_crop_bounds;

/// A registered crop and the soil and climate window it tolerates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Crop {
    pub id: Uuid,
    pub name: String,
    pub species: Option<String>,
    /// Minimum acceptable soil moisture percentage
    pub min_soil_moisture: f64,
    /// Maximum acceptable soil moisture percentage
    pub max_soil_moisture: f64,
    /// Optimal min temperature (°C)
    pub optimal_temperature_min: Option<f64>,
    /// Optimal max temperature (°C)
    pub optimal_temperature_max: Option<f64>,
    /// Daily water requirement in mm
    pub water_requirement_mm: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Crop {
    /// Average of the min and max soil moisture, the stress-free target
    pub fn moisture_midpoint(&self) -> f64 {
        (self.min_soil_moisture + self.max_soil_moisture) / 2.0
    }

    /// Optimal temperature range, only when both bounds are known
    pub fn optimal_temperature_range(&self) -> Option<(f64, f64)> {
        match (self.optimal_temperature_min, self.optimal_temperature_max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }
}

/// Input for registering a crop
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_crop_bounds", skip_on_field_errors = true))]
pub struct CreateCropInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 150))]
    pub species: Option<String>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub min_soil_moisture: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub max_soil_moisture: f64,
    pub optimal_temperature_min: Option<f64>,
    pub optimal_temperature_max: Option<f64>,
    #[validate(range(min = 0.0))]
    pub water_requirement_mm: Option<f64>,
}
