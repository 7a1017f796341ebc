//! Core cephalometric analysis engine.
//! This crate is the single source of truth for tracing invariants:
//! landmark placement, calibration, measurement and diagnosis.

pub mod calibration;
pub mod diagnosis;
pub mod geometry;
pub mod logging;
pub mod measure;
pub mod model;
pub mod registry;
pub mod session;
pub mod store;

pub use calibration::{
    CalibrationError, CalibrationManager, CalibrationPhase, CalibrationResult,
};
pub use diagnosis::{diagnose, Diagnosis, SkeletalClass};
pub use logging::{default_log_level, init_logging, logging_status};
pub use measure::compute_all;
pub use model::analysis::{AnalysisDefinition, AnalysisId, UnknownAnalysisError};
pub use model::landmark::{
    Landmark, LandmarkCategory, LandmarkDef, LandmarkId, UnknownLandmarkError,
};
pub use model::measurement::{
    AngularMeasurement, LinearMeasurement, MeasurementReport, MeasurementStatus,
    MeasurementSummary, NormalRange, RangeStatus, Unit,
};
pub use model::point::Point;
pub use registry::{analysis, landmark_def, LANDMARK_CATALOG};
pub use session::{AnalysisSession, SessionId};
pub use store::LandmarkStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
