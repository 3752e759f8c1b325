//! WebAssembly module for the Irrigation Decision Engine
//!
//! Lets a field client score readings offline with the same rules the
//! server applies:
//! - Water stress scoring
//! - Stress level classification
//! - Decision status transitions
//! - Crop input validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::stress::*;
pub use shared::types::*;

use validator::Validate;

/// Score a sensor reading against a crop using the default parameters.
///
/// Both arguments are JSON in the same shape the API returns. The result is
/// the serialized score.
#[wasm_bindgen]
pub fn score_reading(reading_json: &str, crop_json: &str) -> Result<String, JsValue> {
    let reading: SensorReading = serde_json::from_str(reading_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid reading JSON: {}", e)))?;
    let crop: Crop = serde_json::from_str(crop_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid crop JSON: {}", e)))?;

    let result = score(&reading, &crop, &StressParameters::default());
    serde_json::to_string(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Classify a stress index into its level name
#[wasm_bindgen]
pub fn classify_stress_index(index: f64) -> String {
    classify_stress(index).to_string()
}

/// Whether a decision may move from one status to another.
/// Unknown status names are never valid.
#[wasm_bindgen]
pub fn can_transition(from: &str, to: &str) -> bool {
    match (from.parse::<DecisionStatus>(), to.parse::<DecisionStatus>()) {
        (Ok(from), Ok(to)) => from.can_transition_to(to),
        _ => false,
    }
}

/// Check a crop registration form before it is submitted
#[wasm_bindgen]
pub fn validate_crop_input(input_json: &str) -> bool {
    serde_json::from_str::<CreateCropInput>(input_json)
        .map(|input| input.validate().is_ok())
        .unwrap_or(false)
}
