//! Measurement engine: full recompute over the active analysis.
//!
//! # Responsibility
//! - Turn placements + scale into measurement values for one analysis.
//! - Isolate per-measurement failures so one bad formula never poisons
//!   the rest of the report.
//!
//! # Invariants
//! - `compute_all` is a pure function of its inputs; no hidden state.
//! - Every call recomputes every definition from scratch (total recompute).
//! - No values are produced before calibration; that is policy, not error.

use crate::calibration::CalibrationManager;
use crate::geometry;
use crate::model::analysis::AnalysisId;
use crate::model::measurement::{
    AngularMeasurement, AngularMeasurementDef, LinearMeasurement, LinearMeasurementDef,
    MeasurementReport, MeasurementStatus, Unit,
};
use crate::registry::analyses::analysis;
use crate::store::history::PositionMap;
use log::warn;

/// Recomputes every measurement of the active analysis.
///
/// Returns [`MeasurementReport::empty`] while no scale is committed:
/// placing landmarks before calibration is permitted but yields no numeric
/// output. Individual formulas with unplaced landmarks report `None` with
/// `MissingLandmarks`; coincident placements report `None` with
/// `DegenerateGeometry` and leave every other measurement intact.
pub fn compute_all(
    landmarks: &PositionMap,
    calibration: &CalibrationManager,
    analysis_id: AnalysisId,
) -> MeasurementReport {
    let Some(scale) = calibration.scale() else {
        return MeasurementReport::empty();
    };

    let definition = analysis(analysis_id);
    MeasurementReport {
        linear: definition
            .linear
            .iter()
            .map(|def| compute_linear(def, landmarks, scale))
            .collect(),
        angular: definition
            .angular
            .iter()
            .map(|def| compute_angular(def, landmarks))
            .collect(),
    }
}

fn compute_linear(
    def: &LinearMeasurementDef,
    landmarks: &PositionMap,
    scale: f64,
) -> LinearMeasurement {
    let [id1, id2] = def.landmarks;
    let placed = landmarks.get(&id1).copied().flatten().zip(
        landmarks.get(&id2).copied().flatten(),
    );

    let (value, status) = match placed {
        Some((p1, p2)) => (
            Some(geometry::distance(p1, p2) / scale),
            MeasurementStatus::Computed,
        ),
        None => (None, MeasurementStatus::MissingLandmarks),
    };

    LinearMeasurement {
        id: def.id,
        name: def.name,
        description: def.description,
        landmarks: def.landmarks,
        unit: Unit::Millimeters,
        normal_range: def.normal_range,
        value,
        status,
    }
}

fn compute_angular(def: &AngularMeasurementDef, landmarks: &PositionMap) -> AngularMeasurement {
    let [id1, vertex_id, id3] = def.landmarks;
    let placed = landmarks
        .get(&id1)
        .copied()
        .flatten()
        .zip(landmarks.get(&vertex_id).copied().flatten())
        .zip(landmarks.get(&id3).copied().flatten())
        .map(|((p1, vertex), p3)| (p1, vertex, p3));

    let (value, status) = match placed {
        Some((p1, vertex, p3)) => match geometry::interior_angle(p1, vertex, p3) {
            Ok(angle) => (Some(angle), MeasurementStatus::Computed),
            Err(err) => {
                warn!(
                    "event=measurement_degenerate module=measure status=skipped id={} vertex={} detail={err}",
                    def.id, vertex_id
                );
                (None, MeasurementStatus::DegenerateGeometry)
            }
        },
        None => (None, MeasurementStatus::MissingLandmarks),
    };

    AngularMeasurement {
        id: def.id,
        name: def.name,
        description: def.description,
        landmarks: def.landmarks,
        unit: Unit::Degrees,
        normal_range: def.normal_range,
        interpretation: def.interpretation,
        value,
        status,
    }
}
