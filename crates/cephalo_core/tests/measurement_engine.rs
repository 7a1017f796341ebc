//! Integration tests for the measurement engine.

use cephalo_core::geometry;
use cephalo_core::{
    compute_all, AnalysisId, CalibrationManager, LandmarkId, LandmarkStore, MeasurementStatus,
    Point,
};

fn calibrated(scale: f64) -> CalibrationManager {
    let mut cal = CalibrationManager::new();
    cal.set_manual_scale(scale).expect("scale should commit");
    cal
}

#[test]
fn uncalibrated_session_yields_an_empty_report() {
    let mut store = LandmarkStore::new();
    store.place(LandmarkId::Sella, Point::new(100.0, 100.0));
    store.place(LandmarkId::Nasion, Point::new(150.0, 80.0));

    let report = compute_all(
        store.positions(),
        &CalibrationManager::new(),
        AnalysisId::Steiner,
    );
    assert!(report.linear.is_empty());
    assert!(report.angular.is_empty());
}

#[test]
fn sna_matches_the_interior_angle_at_nasion() {
    let sella = Point::new(100.0, 100.0);
    let nasion = Point::new(150.0, 80.0);
    let a_point = Point::new(160.0, 140.0);

    let mut store = LandmarkStore::new();
    store.place(LandmarkId::Sella, sella);
    store.place(LandmarkId::Nasion, nasion);
    store.place(LandmarkId::APoint, a_point);

    let report = compute_all(store.positions(), &calibrated(2.0), AnalysisId::Steiner);
    let expected = geometry::interior_angle(sella, nasion, a_point).expect("angle is defined");

    let sna = report.angular("sna").expect("steiner defines sna");
    assert_eq!(sna.status, MeasurementStatus::Computed);
    assert_eq!(sna.value, Some(expected));
    assert!(expected > 0.0 && expected < 180.0);
}

#[test]
fn removing_one_landmark_nulls_only_its_measurements() {
    let mut store = LandmarkStore::new();
    store.place(LandmarkId::Sella, Point::new(100.0, 100.0));
    store.place(LandmarkId::Nasion, Point::new(150.0, 80.0));
    store.place(LandmarkId::APoint, Point::new(160.0, 140.0));
    store.place(LandmarkId::BPoint, Point::new(158.0, 170.0));
    let cal = calibrated(2.0);

    let before = compute_all(store.positions(), &cal, AnalysisId::Steiner);
    let snb_before = before.angular_value("snb").expect("snb computed");

    store.remove(LandmarkId::APoint);
    let after = compute_all(store.positions(), &cal, AnalysisId::Steiner);

    let sna = after.angular("sna").expect("steiner defines sna");
    assert_eq!(sna.value, None);
    assert_eq!(sna.status, MeasurementStatus::MissingLandmarks);
    assert_eq!(after.angular_value("snb"), Some(snb_before));
}

#[test]
fn linear_values_are_reported_in_millimeters() {
    let mut store = LandmarkStore::new();
    store.place(LandmarkId::Sella, Point::new(0.0, 0.0));
    store.place(LandmarkId::Nasion, Point::new(100.0, 0.0));

    // 100 px at 2 px/mm -> 50 mm.
    let report = compute_all(store.positions(), &calibrated(2.0), AnalysisId::Steiner);
    let base = report
        .linear
        .iter()
        .find(|m| m.id == "anterior-cranial-base")
        .expect("steiner defines the cranial base length");
    assert_eq!(base.value, Some(50.0));
    assert_eq!(base.status, MeasurementStatus::Computed);
}

#[test]
fn degenerate_placement_is_isolated_to_one_measurement() {
    let shared = Point::new(150.0, 80.0);
    let mut store = LandmarkStore::new();
    // A point on top of nasion makes the SNA vertex ray zero-length.
    store.place(LandmarkId::Sella, Point::new(100.0, 100.0));
    store.place(LandmarkId::Nasion, shared);
    store.place(LandmarkId::APoint, shared);
    store.place(LandmarkId::BPoint, Point::new(158.0, 170.0));

    let report = compute_all(store.positions(), &calibrated(2.0), AnalysisId::Steiner);

    let sna = report.angular("sna").expect("steiner defines sna");
    assert_eq!(sna.status, MeasurementStatus::DegenerateGeometry);
    assert_eq!(sna.value, None);

    let snb = report.angular("snb").expect("steiner defines snb");
    assert_eq!(snb.status, MeasurementStatus::Computed);
    assert!(snb.value.is_some());
}

#[test]
fn analysis_switch_changes_definitions_not_placements() {
    let mut store = LandmarkStore::new();
    store.place(LandmarkId::Sella, Point::new(100.0, 100.0));
    store.place(LandmarkId::Nasion, Point::new(150.0, 80.0));
    store.place(LandmarkId::APoint, Point::new(160.0, 140.0));
    let cal = calibrated(2.0);

    let steiner = compute_all(store.positions(), &cal, AnalysisId::Steiner);
    let downs = compute_all(store.positions(), &cal, AnalysisId::Downs);

    assert!(steiner.angular("sna").is_some());
    assert!(downs.angular("sna").is_none(), "downs has no sna formula");
    assert!(downs.angular("facial-angle").is_some());
    assert_eq!(store.placed_count(), 3, "recompute never mutates the store");
}

#[test]
fn summary_tallies_only_computed_measurements() {
    let mut store = LandmarkStore::new();
    // 100 px at 2 px/mm -> S-N = 50 mm, below the 66-74 normal range.
    store.place(LandmarkId::Sella, Point::new(0.0, 0.0));
    store.place(LandmarkId::Nasion, Point::new(100.0, 0.0));

    let report = compute_all(store.positions(), &calibrated(2.0), AnalysisId::Steiner);
    let summary = report.summary();
    assert_eq!(summary.normal, 0);
    assert_eq!(summary.abnormal, 1, "only the cranial base is computed");
}

#[test]
fn every_definition_appears_in_the_report_regardless_of_placement() {
    let store = LandmarkStore::new();
    let cal = calibrated(1.0);

    for id in [AnalysisId::Steiner, AnalysisId::Downs, AnalysisId::Mcnamara] {
        let def = cephalo_core::analysis(id);
        let report = compute_all(store.positions(), &cal, id);
        assert_eq!(report.angular.len(), def.angular.len());
        assert_eq!(report.linear.len(), def.linear.len());
        assert!(report
            .angular
            .iter()
            .all(|m| m.status == MeasurementStatus::MissingLandmarks));
    }
}
