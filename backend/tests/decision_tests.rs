//! Decision lifecycle and input validation tests
//!
//! Verifies:
//! - Status transitions (pending -> approved / completed / skipped only)
//! - Status and level wire format
//! - Crop and reading input validation

use proptest::prelude::*;
use shared::{
    CreateCropInput, CreateSensorReadingInput, DecisionStatus, ListQuery, StressLevel,
    UpdateDecisionStatusInput,
};
use uuid::Uuid;
use validator::Validate;

const ALL_STATUSES: [DecisionStatus; 4] = [
    DecisionStatus::Pending,
    DecisionStatus::Approved,
    DecisionStatus::Completed,
    DecisionStatus::Skipped,
];

fn crop_input(min: f64, max: f64) -> CreateCropInput {
    CreateCropInput {
        name: "Maize".to_string(),
        species: Some("Zea mays".to_string()),
        min_soil_moisture: min,
        max_soil_moisture: max,
        optimal_temperature_min: Some(18.0),
        optimal_temperature_max: Some(32.0),
        water_requirement_mm: Some(6.0),
    }
}

fn reading_input(soil_moisture: f64) -> CreateSensorReadingInput {
    CreateSensorReadingInput {
        crop_id: Uuid::new_v4(),
        soil_moisture,
        temperature: 24.0,
        humidity: Some(55.0),
        rainfall_mm: None,
        wind_speed: None,
        solar_radiation: None,
    }
}

// =============================================================================
// Status Transitions
// =============================================================================

mod status_transitions {
    use super::*;

    #[test]
    fn pending_moves_to_every_terminal_status() {
        for next in [
            DecisionStatus::Approved,
            DecisionStatus::Completed,
            DecisionStatus::Skipped,
        ] {
            assert!(DecisionStatus::Pending.can_transition_to(next), "{next}");
        }
    }

    #[test]
    fn terminal_statuses_are_final() {
        for from in ALL_STATUSES.iter().filter(|s| s.is_terminal()) {
            for to in ALL_STATUSES {
                assert!(!from.can_transition_to(to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn pending_to_pending_is_rejected() {
        assert!(!DecisionStatus::Pending.can_transition_to(DecisionStatus::Pending));
    }

    #[test]
    fn default_status_is_pending() {
        assert_eq!(DecisionStatus::default(), DecisionStatus::Pending);
    }
}

// =============================================================================
// Wire Format
// =============================================================================

mod wire_format {
    use super::*;

    #[test]
    fn status_body_parses_lowercase() {
        let input: UpdateDecisionStatusInput =
            serde_json::from_str(r#"{"status":"approved"}"#).unwrap();
        assert_eq!(input.status, DecisionStatus::Approved);
    }

    #[test]
    fn unknown_status_body_is_rejected() {
        let parsed = serde_json::from_str::<UpdateDecisionStatusInput>(r#"{"status":"cancelled"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn stress_level_text_round_trips_through_from_str() {
        for level in [
            StressLevel::Low,
            StressLevel::Moderate,
            StressLevel::High,
            StressLevel::Critical,
        ] {
            assert_eq!(level.as_str().parse::<StressLevel>().unwrap(), level);
        }
        assert!("severe".parse::<StressLevel>().is_err());
    }
}

// =============================================================================
// Input Validation
// =============================================================================

mod input_validation {
    use super::*;

    #[test]
    fn valid_crop_passes() {
        assert!(crop_input(25.0, 65.0).validate().is_ok());
    }

    #[test]
    fn equal_moisture_bounds_fail() {
        assert!(crop_input(40.0, 40.0).validate().is_err());
    }

    #[test]
    fn empty_name_fails() {
        let mut input = crop_input(25.0, 65.0);
        input.name = String::new();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn reversed_temperature_window_fails() {
        let mut input = crop_input(25.0, 65.0);
        input.optimal_temperature_min = Some(35.0);
        input.optimal_temperature_max = Some(20.0);
        assert!(input.validate().is_err());
    }

    #[test]
    fn negative_rainfall_fails() {
        let mut input = reading_input(40.0);
        input.rainfall_mm = Some(-1.0);
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rainfall_mm"));
    }

    #[test]
    fn list_limit_bounds() {
        let query = |limit| ListQuery {
            crop_id: None,
            limit: Some(limit),
        };
        assert!(query(1).validate().is_ok());
        assert!(query(200).validate().is_ok());
        assert!(query(0).validate().is_err());
        assert!(query(201).validate().is_err());
        assert_eq!(ListQuery::default().effective_limit(), 50);
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================

mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any soil moisture percentage within 0..=100 is accepted
        #[test]
        fn prop_moisture_in_range_accepted(tenths in 0u32..=1000) {
            let input = reading_input(tenths as f64 / 10.0);
            prop_assert!(input.validate().is_ok());
        }

        /// Moisture above 100% is rejected
        #[test]
        fn prop_moisture_above_range_rejected(tenths in 1001u32..=5000) {
            let input = reading_input(tenths as f64 / 10.0);
            prop_assert!(input.validate().is_err());
        }

        /// A crop window is valid exactly when min < max
        #[test]
        fn prop_crop_window_ordering(min in 0u32..=100, max in 0u32..=100) {
            let result = crop_input(min as f64, max as f64).validate();
            prop_assert_eq!(result.is_ok(), min < max);
        }
    }
}
