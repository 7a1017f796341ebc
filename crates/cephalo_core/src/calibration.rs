//! Pixel-to-millimeter calibration state machine.
//!
//! # Responsibility
//! - Derive and validate the pixels-per-millimeter scale factor.
//! - Gate measurement computation behind a committed scale.
//!
//! # Invariants
//! - A committed scale is strictly positive and finite.
//! - Starting or cancelling a re-calibration never loses a committed scale.
//! - Failed scale computation leaves the state machine untouched.

use crate::geometry;
use crate::model::point::Point;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for calibration operations.
pub type CalibrationResult<T> = Result<T, CalibrationError>;

/// Calibration input rejected at the mutation boundary; no state changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalibrationError {
    /// Known distance was non-positive or not a finite number.
    InvalidDistance { value: f64 },
    /// Manual scale was non-positive or not a finite number.
    InvalidScale { value: f64 },
    /// Two points are already recorded; compute or cancel first.
    CalibrationComplete,
    /// Scale computation needs exactly two recorded points.
    PointsMissing { recorded: usize },
    /// Point recording or scale computation outside the two-point flow.
    NotCalibrating,
    /// The two recorded points coincide; the scale would be zero.
    CoincidentPoints,
}

impl Display for CalibrationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDistance { value } => {
                write!(f, "known distance must be a positive number, got {value}")
            }
            Self::InvalidScale { value } => {
                write!(f, "manual scale must be a positive number, got {value}")
            }
            Self::CalibrationComplete => {
                write!(f, "two calibration points already recorded; compute or cancel first")
            }
            Self::PointsMissing { recorded } => {
                write!(f, "scale computation needs two recorded points, have {recorded}")
            }
            Self::NotCalibrating => write!(f, "no calibration in progress"),
            Self::CoincidentPoints => {
                write!(f, "calibration points coincide; scale would be zero")
            }
        }
    }
}

impl Error for CalibrationError {}

/// Where the two-point calibration flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationPhase {
    Uncalibrated,
    CalibratingInProgress,
    Calibrated,
}

/// Owns the scale factor and the two-point calibration flow.
#[derive(Debug, Clone)]
pub struct CalibrationManager {
    phase: CalibrationPhase,
    pending: Vec<Point>,
    scale: Option<f64>,
}

impl Default for CalibrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CalibrationManager {
    pub fn new() -> Self {
        Self {
            phase: CalibrationPhase::Uncalibrated,
            pending: Vec::with_capacity(2),
            scale: None,
        }
    }

    pub fn phase(&self) -> CalibrationPhase {
        self.phase
    }

    /// Committed pixels-per-millimeter scale, if any.
    ///
    /// A committed scale survives an in-progress re-calibration attempt
    /// until `compute_scale` or `set_manual_scale` overwrites it.
    pub fn scale(&self) -> Option<f64> {
        self.scale
    }

    pub fn is_calibrated(&self) -> bool {
        self.scale.is_some()
    }

    /// Points recorded so far in the current two-point flow.
    pub fn recorded_points(&self) -> &[Point] {
        &self.pending
    }

    /// Starts (or restarts) the two-point flow, clearing pending points.
    pub fn begin_calibration(&mut self) {
        self.pending.clear();
        self.phase = CalibrationPhase::CalibratingInProgress;
    }

    /// Records one calibration point, in arrival order.
    ///
    /// # Errors
    /// - `NotCalibrating` outside the two-point flow.
    /// - `CalibrationComplete` when two points are already recorded.
    pub fn record_point(&mut self, point: Point) -> CalibrationResult<()> {
        if self.phase != CalibrationPhase::CalibratingInProgress {
            return Err(CalibrationError::NotCalibrating);
        }
        if self.pending.len() == 2 {
            return Err(CalibrationError::CalibrationComplete);
        }
        self.pending.push(point);
        Ok(())
    }

    /// Computes and commits the scale from the two recorded points and a
    /// known real-world distance in millimeters. Returns the new scale.
    ///
    /// Re-running a calibration simply overwrites the prior scale; the
    /// resulting state is `Calibrated` either way.
    ///
    /// # Errors
    /// Any failure leaves the phase and any committed scale unchanged:
    /// - `NotCalibrating` outside the two-point flow.
    /// - `PointsMissing` with fewer than two recorded points.
    /// - `InvalidDistance` for a non-positive or non-finite distance.
    /// - `CoincidentPoints` when the recorded points are identical.
    pub fn compute_scale(&mut self, known_distance_mm: f64) -> CalibrationResult<f64> {
        if self.phase != CalibrationPhase::CalibratingInProgress {
            return Err(CalibrationError::NotCalibrating);
        }
        if self.pending.len() != 2 {
            return Err(CalibrationError::PointsMissing {
                recorded: self.pending.len(),
            });
        }
        if !known_distance_mm.is_finite() || known_distance_mm <= 0.0 {
            return Err(CalibrationError::InvalidDistance {
                value: known_distance_mm,
            });
        }

        let pixel_distance = geometry::distance(self.pending[0], self.pending[1]);
        if pixel_distance == 0.0 {
            return Err(CalibrationError::CoincidentPoints);
        }

        let scale = pixel_distance / known_distance_mm;
        self.commit(scale);
        Ok(scale)
    }

    /// Commits a directly entered pixels-per-millimeter scale, bypassing
    /// the two-point flow. Valid from any state.
    ///
    /// # Errors
    /// `InvalidScale` for a non-positive or non-finite value; state unchanged.
    pub fn set_manual_scale(&mut self, scale: f64) -> CalibrationResult<()> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(CalibrationError::InvalidScale { value: scale });
        }
        self.commit(scale);
        Ok(())
    }

    /// Abandons an in-progress flow.
    ///
    /// Falls back to `Calibrated` at the prior scale when one was committed,
    /// otherwise to `Uncalibrated`.
    pub fn cancel(&mut self) {
        self.pending.clear();
        self.phase = if self.scale.is_some() {
            CalibrationPhase::Calibrated
        } else {
            CalibrationPhase::Uncalibrated
        };
    }

    fn commit(&mut self, scale: f64) {
        self.pending.clear();
        self.scale = Some(scale);
        self.phase = CalibrationPhase::Calibrated;
    }
}
