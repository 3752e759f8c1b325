//! Irrigation decision models

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error returned when a stored enum label is not recognised
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} value: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Qualitative water stress bucket, in ascending order of severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl StressLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Moderate => "moderate",
            StressLevel::High => "high",
            StressLevel::Critical => "critical",
        }
    }

    /// Every level except `Low` calls for irrigation
    pub fn requires_irrigation(&self) -> bool {
        !matches!(self, StressLevel::Low)
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StressLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(StressLevel::Low),
            "moderate" => Ok(StressLevel::Moderate),
            "high" => Ok(StressLevel::High),
            "critical" => Ok(StressLevel::Critical),
            other => Err(ParseEnumError {
                kind: "stress level",
                value: other.to_string(),
            }),
        }
    }
}

/// Approval workflow state of a decision
///
/// ```text
/// pending ──▶ approved
///    │──────▶ completed
///    └──────▶ skipped
/// ```
///
/// The three targets are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    #[default]
    Pending,
    Approved,
    Completed,
    Skipped,
}

impl DecisionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStatus::Pending => "pending",
            DecisionStatus::Approved => "approved",
            DecisionStatus::Completed => "completed",
            DecisionStatus::Skipped => "skipped",
        }
    }

    pub fn can_transition_to(&self, next: DecisionStatus) -> bool {
        matches!(
            (self, next),
            (
                DecisionStatus::Pending,
                DecisionStatus::Approved | DecisionStatus::Completed | DecisionStatus::Skipped
            )
        )
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, DecisionStatus::Pending)
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecisionStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(DecisionStatus::Pending),
            "approved" => Ok(DecisionStatus::Approved),
            "completed" => Ok(DecisionStatus::Completed),
            "skipped" => Ok(DecisionStatus::Skipped),
            other => Err(ParseEnumError {
                kind: "decision status",
                value: other.to_string(),
            }),
        }
    }
}

/// A scored recommendation derived from one sensor reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IrrigationDecision {
    pub id: Uuid,
    pub crop_id: Uuid,
    pub sensor_reading_id: Uuid,
    /// Water stress index (0-1, 3 decimals)
    pub water_stress_index: f64,
    pub stress_level: StressLevel,
    pub should_irrigate: bool,
    /// Recommended irrigation amount in mm
    pub recommended_water_mm: Option<f64>,
    pub reason: String,
    pub status: DecisionStatus,
    pub decided_at: DateTime<Utc>,
}

/// Input for moving a decision through the approval workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDecisionStatusInput {
    pub status: DecisionStatus,
}
