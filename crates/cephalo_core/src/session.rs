//! Analysis session facade.
//!
//! # Responsibility
//! - Own one tracing session: placements, calibration, active analysis.
//! - Recompute the measurement report and diagnosis after every mutation.
//!
//! # Invariants
//! - The report and diagnosis are never stale: every successful mutation
//!   ends in a full recompute.
//! - Failed calibration calls change nothing, so no recompute happens.
//! - Switching analyses never touches placements or the committed scale.

use crate::calibration::{CalibrationManager, CalibrationPhase, CalibrationResult};
use crate::diagnosis::{diagnose, Diagnosis};
use crate::measure::compute_all;
use crate::model::analysis::AnalysisId;
use crate::model::landmark::{Landmark, LandmarkId};
use crate::model::measurement::MeasurementReport;
use crate::model::point::Point;
use crate::store::LandmarkStore;
use log::{debug, info};
use uuid::Uuid;

/// Opaque session identifier, unique per opened session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One cephalometric tracing session over a single radiograph.
///
/// All mutation goes through this type so the derived state (report and
/// diagnosis) can be kept in lockstep with the inputs.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    id: SessionId,
    store: LandmarkStore,
    calibration: CalibrationManager,
    analysis: AnalysisId,
    report: MeasurementReport,
    diagnosis: Option<Diagnosis>,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSession {
    /// Opens a fresh session: no placements, no scale, Steiner analysis.
    pub fn new() -> Self {
        let session = Self {
            id: SessionId::new(),
            store: LandmarkStore::new(),
            calibration: CalibrationManager::new(),
            analysis: AnalysisId::Steiner,
            report: MeasurementReport::empty(),
            diagnosis: None,
        };
        info!(
            "event=session_open module=session status=ok id={} analysis={}",
            session.id, session.analysis
        );
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    // ---- landmarks -------------------------------------------------------

    /// Rendered catalog with current placements, in display order.
    pub fn landmarks(&self) -> Vec<Landmark> {
        self.store.landmarks()
    }

    pub fn landmark(&self, id: LandmarkId) -> Landmark {
        self.store.landmark(id)
    }

    pub fn placed_count(&self) -> usize {
        self.store.placed_count()
    }

    pub fn catalog_len(&self) -> usize {
        self.store.catalog_len()
    }

    pub fn active_landmark(&self) -> Option<LandmarkId> {
        self.store.active_landmark()
    }

    pub fn set_active_landmark(&mut self, id: Option<LandmarkId>) {
        self.store.set_active_landmark(id);
    }

    /// Places a landmark at image coordinates and recomputes.
    pub fn place_landmark(&mut self, id: LandmarkId, position: Point) {
        self.store.place(id, position);
        debug!(
            "event=landmark_place module=session status=ok id={id} placed={}/{}",
            self.store.placed_count(),
            self.store.catalog_len()
        );
        self.recompute();
    }

    /// Moves an already-placed landmark (drag) and recomputes.
    pub fn move_landmark(&mut self, id: LandmarkId, position: Point) {
        self.store.move_to(id, position);
        self.recompute();
    }

    /// Clears one landmark placement and recomputes.
    pub fn remove_landmark(&mut self, id: LandmarkId) {
        self.store.remove(id);
        debug!(
            "event=landmark_remove module=session status=ok id={id} placed={}/{}",
            self.store.placed_count(),
            self.store.catalog_len()
        );
        self.recompute();
    }

    /// Steps placements one snapshot back. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        let changed = self.store.undo();
        if changed {
            self.recompute();
        }
        changed
    }

    /// Steps placements one snapshot forward. Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        let changed = self.store.redo();
        if changed {
            self.recompute();
        }
        changed
    }

    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    /// Clears every placement and starts placement history over.
    /// Calibration and the active analysis are untouched.
    pub fn reset_landmarks(&mut self) {
        self.store.reset_all();
        info!("event=landmarks_reset module=session status=ok id={}", self.id);
        self.recompute();
    }

    // ---- calibration -----------------------------------------------------

    pub fn calibration_phase(&self) -> CalibrationPhase {
        self.calibration.phase()
    }

    pub fn scale(&self) -> Option<f64> {
        self.calibration.scale()
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_calibrated()
    }

    pub fn calibration_points(&self) -> &[Point] {
        self.calibration.recorded_points()
    }

    /// Starts (or restarts) the two-point calibration flow.
    pub fn begin_calibration(&mut self) {
        self.calibration.begin_calibration();
    }

    /// Records one calibration point in arrival order.
    ///
    /// # Errors
    /// Propagates [`crate::calibration::CalibrationError`] unchanged; the
    /// session state is untouched on failure.
    pub fn record_calibration_point(&mut self, point: Point) -> CalibrationResult<()> {
        self.calibration.record_point(point)
    }

    /// Commits the scale from the two recorded points and a known distance
    /// in millimeters, then recomputes. Returns the committed scale.
    ///
    /// # Errors
    /// Propagates [`crate::calibration::CalibrationError`]; nothing is
    /// recomputed and no state changes on failure.
    pub fn apply_calibration(&mut self, known_distance_mm: f64) -> CalibrationResult<f64> {
        let scale = self.calibration.compute_scale(known_distance_mm)?;
        info!(
            "event=scale_set module=session status=ok id={} scale={scale} source=two_point",
            self.id
        );
        self.recompute();
        Ok(scale)
    }

    /// Commits a directly entered pixels-per-millimeter scale, then
    /// recomputes.
    ///
    /// # Errors
    /// Propagates [`crate::calibration::CalibrationError`]; nothing is
    /// recomputed and no state changes on failure.
    pub fn set_manual_scale(&mut self, scale: f64) -> CalibrationResult<()> {
        self.calibration.set_manual_scale(scale)?;
        info!(
            "event=scale_set module=session status=ok id={} scale={scale} source=manual",
            self.id
        );
        self.recompute();
        Ok(())
    }

    /// Abandons an in-progress calibration flow. Any previously committed
    /// scale stays in effect, so no recompute is needed.
    pub fn cancel_calibration(&mut self) {
        self.calibration.cancel();
    }

    // ---- analysis --------------------------------------------------------

    pub fn active_analysis(&self) -> AnalysisId {
        self.analysis
    }

    /// Switches the active analysis and recomputes under its definitions.
    /// Placements and scale carry over unchanged.
    pub fn set_analysis(&mut self, analysis: AnalysisId) {
        if self.analysis == analysis {
            return;
        }
        let previous = self.analysis;
        self.analysis = analysis;
        info!(
            "event=analysis_switch module=session status=ok id={} from={previous} to={analysis}",
            self.id
        );
        self.recompute();
    }

    // ---- derived state ---------------------------------------------------

    /// Current measurement report. Empty until a scale is committed.
    pub fn report(&self) -> &MeasurementReport {
        &self.report
    }

    /// Current diagnosis, `None` until SNA and SNB are both computed.
    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        self.diagnosis.as_ref()
    }

    fn recompute(&mut self) {
        self.report = compute_all(self.store.positions(), &self.calibration, self.analysis);
        self.diagnosis = diagnose(&self.report);
        debug!(
            "event=recompute module=session status=ok id={} analysis={} linear={} angular={} diagnosis={}",
            self.id,
            self.analysis,
            self.report.linear.len(),
            self.report.angular.len(),
            self.diagnosis.is_some()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::AnalysisSession;
    use crate::model::analysis::AnalysisId;
    use crate::model::landmark::LandmarkId;
    use crate::model::point::Point;

    #[test]
    fn fresh_session_defaults_to_steiner_and_empty_report() {
        let session = AnalysisSession::new();
        assert_eq!(session.active_analysis(), AnalysisId::Steiner);
        assert!(session.report().linear.is_empty());
        assert!(session.report().angular.is_empty());
        assert!(session.diagnosis().is_none());
        assert!(!session.is_calibrated());
    }

    #[test]
    fn analysis_switch_keeps_placements() {
        let mut session = AnalysisSession::new();
        session.place_landmark(LandmarkId::Sella, Point::new(100.0, 100.0));

        session.set_analysis(AnalysisId::Downs);
        assert_eq!(session.placed_count(), 1);
        assert_eq!(
            session.landmark(LandmarkId::Sella).position,
            Some(Point::new(100.0, 100.0))
        );
    }

    #[test]
    fn failed_manual_scale_leaves_session_uncalibrated() {
        let mut session = AnalysisSession::new();
        assert!(session.set_manual_scale(f64::NAN).is_err());
        assert!(session.set_manual_scale(-2.0).is_err());
        assert!(!session.is_calibrated());
        assert!(session.report().angular.is_empty());
    }
}
