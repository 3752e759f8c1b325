//! Water stress scoring
//!
//! Combines three sub-scores into a single index in `[0, 1]`:
//!
//! | Component   | Weight | Source                                   |
//! |-------------|--------|------------------------------------------|
//! | Moisture    | 0.60   | soil moisture vs. the crop's window      |
//! | Temperature | 0.25   | degrees outside the optimal range / 10   |
//! | Humidity    | 0.15   | dry-air evaporation risk                 |
//!
//! The index is bucketed into a [`StressLevel`], which drives the
//! irrigation flag unless recent rainfall overrides it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Crop, SensorReading, StressLevel};

pub const MOISTURE_WEIGHT: f64 = 0.6;
pub const TEMPERATURE_WEIGHT: f64 = 0.25;
pub const HUMIDITY_WEIGHT: f64 = 0.15;

/// Degrees outside the optimal range that produce full temperature stress
pub const TEMPERATURE_SPAN_C: f64 = 10.0;

pub const CRITICAL_THRESHOLD: f64 = 0.7;
pub const HIGH_THRESHOLD: f64 = 0.5;
pub const MODERATE_THRESHOLD: f64 = 0.3;

/// Floor applied to the moisture deficit when sizing a recommendation
pub const MIN_DEFICIT_RATIO: f64 = 0.3;

/// Tunable scoring constants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StressParameters {
    /// Moisture stress assigned when soil is wetter than the crop maximum
    pub over_saturation_penalty: f64,
    /// Humidity below this percentage adds evaporation stress
    pub dry_air_humidity_pct: f64,
    /// Rainfall above this many mm suppresses irrigation
    pub rainfall_skip_mm: f64,
}

impl Default for StressParameters {
    fn default() -> Self {
        Self {
            over_saturation_penalty: 0.2,
            dry_air_humidity_pct: 30.0,
            rainfall_skip_mm: 5.0,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParameterError {
    #[error("over_saturation_penalty must be within 0..=1, got {0}")]
    OverSaturationPenalty(f64),
    #[error("dry_air_humidity_pct must be within 0..=100, got {0}")]
    DryAirHumidity(f64),
    #[error("rainfall_skip_mm must be non-negative, got {0}")]
    RainfallSkip(f64),
}

impl StressParameters {
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(0.0..=1.0).contains(&self.over_saturation_penalty) {
            return Err(ParameterError::OverSaturationPenalty(
                self.over_saturation_penalty,
            ));
        }
        if !(0.0..=100.0).contains(&self.dry_air_humidity_pct) {
            return Err(ParameterError::DryAirHumidity(self.dry_air_humidity_pct));
        }
        if self.rainfall_skip_mm.is_nan() || self.rainfall_skip_mm < 0.0 {
            return Err(ParameterError::RainfallSkip(self.rainfall_skip_mm));
        }
        Ok(())
    }
}

/// Unweighted sub-scores, each in `[0, 1]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct StressComponents {
    pub moisture: f64,
    pub temperature: f64,
    pub humidity: f64,
}

impl StressComponents {
    pub fn weighted_index(&self) -> f64 {
        let raw = self.moisture * MOISTURE_WEIGHT
            + self.temperature * TEMPERATURE_WEIGHT
            + self.humidity * HUMIDITY_WEIGHT;
        round_to(raw.clamp(0.0, 1.0), 3)
    }
}

/// Outcome of scoring one reading against its crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreResult {
    pub water_stress_index: f64,
    pub stress_level: StressLevel,
    pub should_irrigate: bool,
    pub recommended_water_mm: Option<f64>,
    pub reason: String,
    pub components: StressComponents,
}

/// Score a reading against its crop's thresholds.
///
/// Pure: the same reading, crop and parameters always give the same result.
pub fn score(reading: &SensorReading, crop: &Crop, params: &StressParameters) -> ScoreResult {
    let components = StressComponents {
        moisture: moisture_stress(reading.soil_moisture, crop, params),
        temperature: temperature_stress(reading.temperature, crop),
        humidity: humidity_factor(reading.humidity, params),
    };

    let water_stress_index = components.weighted_index();
    let stress_level = classify_stress(water_stress_index);
    let mut should_irrigate = stress_level.requires_irrigation();
    let mut reason = level_reason(stress_level).to_string();

    if let Some(rain) = reading.rainfall_mm.filter(|mm| *mm > params.rainfall_skip_mm) {
        should_irrigate = false;
        reason.push_str(&format!(
            " Recent rainfall ({:?}mm) detected, irrigation skipped.",
            rain
        ));
    }

    let recommended_water_mm = if should_irrigate {
        recommended_volume(components.moisture, crop)
    } else {
        None
    };

    ScoreResult {
        water_stress_index,
        stress_level,
        should_irrigate,
        recommended_water_mm,
        reason,
        components,
    }
}

/// Moisture deficit relative to the crop's window
pub fn moisture_stress(soil_moisture: f64, crop: &Crop, params: &StressParameters) -> f64 {
    let min = crop.min_soil_moisture;
    let max = crop.max_soil_moisture;
    let midpoint = crop.moisture_midpoint();

    if soil_moisture < min {
        1.0
    } else if soil_moisture < midpoint {
        (midpoint - soil_moisture) / (midpoint - min)
    } else if soil_moisture <= max {
        0.0
    } else {
        params.over_saturation_penalty
    }
}

/// Temperature deviation from the optimal range, zero when no range is set
pub fn temperature_stress(temperature: f64, crop: &Crop) -> f64 {
    let Some((low, high)) = crop.optimal_temperature_range() else {
        return 0.0;
    };

    if temperature < low {
        ((low - temperature) / TEMPERATURE_SPAN_C).min(1.0)
    } else if temperature > high {
        ((temperature - high) / TEMPERATURE_SPAN_C).min(1.0)
    } else {
        0.0
    }
}

/// Evaporation risk from dry air
pub fn humidity_factor(humidity: Option<f64>, params: &StressParameters) -> f64 {
    match humidity {
        Some(h) if h < params.dry_air_humidity_pct => (params.dry_air_humidity_pct - h) / 100.0,
        _ => 0.0,
    }
}

/// Bucket an index into a stress level (first match wins, descending)
pub fn classify_stress(index: f64) -> StressLevel {
    if index >= CRITICAL_THRESHOLD {
        StressLevel::Critical
    } else if index >= HIGH_THRESHOLD {
        StressLevel::High
    } else if index >= MODERATE_THRESHOLD {
        StressLevel::Moderate
    } else {
        StressLevel::Low
    }
}

pub fn level_reason(level: StressLevel) -> &'static str {
    match level {
        StressLevel::Critical => "Critical water stress detected. Immediate irrigation required.",
        StressLevel::High => "High water stress. Irrigation recommended within 2 hours.",
        StressLevel::Moderate => "Moderate water stress. Irrigation recommended within 6 hours.",
        StressLevel::Low => "Soil moisture and conditions are within acceptable range.",
    }
}

/// Water to apply, scaled by the moisture deficit. `None` without a positive requirement.
pub fn recommended_volume(moisture_stress: f64, crop: &Crop) -> Option<f64> {
    let requirement = crop.water_requirement_mm.filter(|mm| *mm > 0.0)?;
    Some(round_to(requirement * moisture_stress.max(MIN_DEFICIT_RATIO), 1))
}

/// Half-to-even, so 1.25 becomes 1.2
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
