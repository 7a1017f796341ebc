//! Integration tests for the diagnostic rules.

use cephalo_core::diagnosis::{diagnose, skeletal_class, skeletal_class_from_anb};
use cephalo_core::model::measurement::{
    AngularMeasurement, AngularMeasurementDef, MeasurementReport, MeasurementStatus, Unit,
};
use cephalo_core::{analysis, AnalysisId, SkeletalClass};

fn angular_result(def: &AngularMeasurementDef, value: Option<f64>) -> AngularMeasurement {
    AngularMeasurement {
        id: def.id,
        name: def.name,
        description: def.description,
        landmarks: def.landmarks,
        unit: Unit::Degrees,
        normal_range: def.normal_range,
        interpretation: def.interpretation,
        value,
        status: match value {
            Some(_) => MeasurementStatus::Computed,
            None => MeasurementStatus::MissingLandmarks,
        },
    }
}

/// Steiner report with chosen values per measurement id, everything else
/// left uncomputed.
fn steiner_report(values: &[(&str, f64)]) -> MeasurementReport {
    let def = analysis(AnalysisId::Steiner);
    MeasurementReport {
        linear: Vec::new(),
        angular: def
            .angular
            .iter()
            .map(|m| {
                let value = values
                    .iter()
                    .find(|(id, _)| *id == m.id)
                    .map(|(_, v)| *v);
                angular_result(m, value)
            })
            .collect(),
    }
}

#[test]
fn anb_boundaries_belong_to_class_i() {
    assert_eq!(skeletal_class_from_anb(0.0), SkeletalClass::ClassI);
    assert_eq!(skeletal_class_from_anb(4.0), SkeletalClass::ClassI);
    assert_eq!(skeletal_class_from_anb(3.5), SkeletalClass::ClassI);
    assert_eq!(skeletal_class_from_anb(-0.5), SkeletalClass::ClassIII);
    assert_eq!(skeletal_class_from_anb(6.0), SkeletalClass::ClassII);
}

#[test]
fn missing_component_angles_give_undetermined() {
    assert_eq!(skeletal_class(None, None), SkeletalClass::Undetermined);
    assert_eq!(skeletal_class(Some(82.0), None), SkeletalClass::Undetermined);
    assert_eq!(skeletal_class(None, Some(78.0)), SkeletalClass::Undetermined);
}

#[test]
fn diagnosis_requires_both_sna_and_snb() {
    let report = steiner_report(&[("sna", 82.0)]);
    assert!(diagnose(&report).is_none());

    let report = steiner_report(&[("sna", 82.0), ("snb", 79.0)]);
    let diagnosis = diagnose(&report).expect("both angles computed");
    assert_eq!(diagnosis.anb, 3.0);
    assert_eq!(diagnosis.skeletal_class, SkeletalClass::ClassI);
}

#[test]
fn normal_values_produce_the_default_finding() {
    let report = steiner_report(&[("sna", 82.0), ("snb", 80.0)]);
    let diagnosis = diagnose(&report).expect("diagnosis available");
    assert_eq!(
        diagnosis.findings,
        vec!["Normal skeletal and dental relationships".to_string()]
    );
}

#[test]
fn abnormal_values_collect_interpretation_text() {
    // SNA high, SNB low -> Class II with two findings.
    let report = steiner_report(&[("sna", 88.0), ("snb", 75.0)]);
    let diagnosis = diagnose(&report).expect("diagnosis available");

    assert_eq!(diagnosis.skeletal_class, SkeletalClass::ClassII);
    assert_eq!(
        diagnosis.findings,
        vec![
            "Maxillary prognathism (upper jaw positioned anteriorly)".to_string(),
            "Mandibular retrognathism (lower jaw positioned posteriorly)".to_string(),
        ]
    );
}

#[test]
fn findings_include_growth_pattern_and_incisor_inclination() {
    let report = steiner_report(&[
        ("sna", 82.0),
        ("snb", 80.0),
        ("gonial-angle", 135.0),
        ("upper-incisor-sn", 96.0),
    ]);
    let diagnosis = diagnose(&report).expect("diagnosis available");

    assert_eq!(
        diagnosis.findings,
        vec![
            "Vertical growth pattern with increased lower facial height".to_string(),
            "Retroclined upper incisors".to_string(),
        ]
    );
}

#[test]
fn skeletal_class_labels_are_stable() {
    assert_eq!(
        SkeletalClass::ClassI.label(),
        "Class I (Normal skeletal relationship)"
    );
    assert_eq!(SkeletalClass::ClassII.label(), "Class II (Skeletal overbite)");
    assert_eq!(SkeletalClass::ClassIII.label(), "Class III (Skeletal underbite)");
    assert_eq!(SkeletalClass::Undetermined.label(), "Cannot determine");
}
