//! Measurement definitions and computed result shapes.
//!
//! # Responsibility
//! - Define the static formula shapes evaluated by the measurement engine.
//! - Define the result records returned to UI collaborators.
//!
//! # Invariants
//! - Definitions never change at runtime; only result values do.
//! - A missing-landmark result is a designed `None`, not an error.

use crate::model::landmark::LandmarkId;
use serde::Serialize;

/// Measurement unit for reported values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "degrees")]
    Degrees,
}

/// Inclusive normal range for one measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
}

impl NormalRange {
    /// Classifies a value against this range.
    ///
    /// Boundary values are `Normal`: the range is inclusive on both ends.
    pub fn classify(&self, value: f64) -> RangeStatus {
        if value < self.min {
            RangeStatus::Low
        } else if value > self.max {
            RangeStatus::High
        } else {
            RangeStatus::Normal
        }
    }
}

/// Position of a computed value relative to its normal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeStatus {
    Low,
    Normal,
    High,
}

/// Canned interpretation text keyed by range status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub low: &'static str,
    pub normal: &'static str,
    pub high: &'static str,
}

impl Interpretation {
    pub fn for_status(&self, status: RangeStatus) -> &'static str {
        match status {
            RangeStatus::Low => self.low,
            RangeStatus::Normal => self.normal,
            RangeStatus::High => self.high,
        }
    }
}

/// Static definition of a two-landmark distance measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMeasurementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub landmarks: [LandmarkId; 2],
    pub normal_range: NormalRange,
}

/// Static definition of a three-landmark interior angle measurement.
///
/// Landmark order is `[point, vertex, point]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularMeasurementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub landmarks: [LandmarkId; 3],
    pub normal_range: NormalRange,
    pub interpretation: Interpretation,
}

/// Why a measurement value is present or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementStatus {
    /// All referenced landmarks placed; value computed.
    Computed,
    /// At least one referenced landmark is unplaced. Not an error.
    MissingLandmarks,
    /// Two referenced landmarks coincide; the formula is undefined for
    /// this placement. Isolated to this measurement only.
    DegenerateGeometry,
}

/// Computed linear measurement, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearMeasurement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub landmarks: [LandmarkId; 2],
    pub unit: Unit,
    pub normal_range: NormalRange,
    pub value: Option<f64>,
    pub status: MeasurementStatus,
}

impl LinearMeasurement {
    pub fn classification(&self) -> Option<RangeStatus> {
        self.value.map(|v| self.normal_range.classify(v))
    }
}

/// Computed angular measurement, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngularMeasurement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub landmarks: [LandmarkId; 3],
    pub unit: Unit,
    pub normal_range: NormalRange,
    pub interpretation: Interpretation,
    pub value: Option<f64>,
    pub status: MeasurementStatus,
}

impl AngularMeasurement {
    pub fn classification(&self) -> Option<RangeStatus> {
        self.value.map(|v| self.normal_range.classify(v))
    }

    /// Interpretation text for the computed value, `None` until computed.
    pub fn interpretation_text(&self) -> Option<&'static str> {
        self.classification()
            .map(|status| self.interpretation.for_status(status))
    }
}

/// Count of computed measurements inside vs outside their normal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MeasurementSummary {
    pub normal: usize,
    pub abnormal: usize,
}

/// Full recompute output for the active analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MeasurementReport {
    pub linear: Vec<LinearMeasurement>,
    pub angular: Vec<AngularMeasurement>,
}

impl MeasurementReport {
    /// Empty report, used while the session is uncalibrated.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Finds one angular result by measurement id.
    pub fn angular(&self, id: &str) -> Option<&AngularMeasurement> {
        self.angular.iter().find(|m| m.id == id)
    }

    /// Computed value of one angular measurement, `None` when absent or
    /// not yet calculable.
    pub fn angular_value(&self, id: &str) -> Option<f64> {
        self.angular(id).and_then(|m| m.value)
    }

    /// Tallies computed values against their normal ranges.
    pub fn summary(&self) -> MeasurementSummary {
        let mut summary = MeasurementSummary::default();
        let statuses = self
            .linear
            .iter()
            .filter_map(LinearMeasurement::classification)
            .chain(self.angular.iter().filter_map(AngularMeasurement::classification));
        for status in statuses {
            if status == RangeStatus::Normal {
                summary.normal += 1;
            } else {
                summary.abnormal += 1;
            }
        }
        summary
    }
}
