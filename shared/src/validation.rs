//! Validation rules that span more than one field
//!
//! Single-field ranges live on the input structs as `validator` attributes.

use std::borrow::Cow;

use validator::ValidationError;

use crate::models::CreateCropInput;

/// Soil moisture window must be non-empty and temperature bounds ordered
pub fn validate_crop_bounds(input: &CreateCropInput) -> Result<(), ValidationError> {
    if input.min_soil_moisture >= input.max_soil_moisture {
        return Err(bounds_error(
            "moisture_bounds",
            "min_soil_moisture must be less than max_soil_moisture",
        ));
    }

    if let (Some(low), Some(high)) = (input.optimal_temperature_min, input.optimal_temperature_max)
    {
        if low > high {
            return Err(bounds_error(
                "temperature_bounds",
                "optimal_temperature_min must not exceed optimal_temperature_max",
            ));
        }
    }

    Ok(())
}

fn bounds_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}
