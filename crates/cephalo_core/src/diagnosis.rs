//! Diagnostic engine: skeletal classification and textual findings.
//!
//! # Responsibility
//! - Derive the skeletal class from the ANB angle.
//! - Assemble ordered findings by looking computed values up against their
//!   interpretation tables.
//!
//! # Invariants
//! - No geometry happens here; everything is a lookup over an existing
//!   measurement report.
//! - A diagnosis exists only when SNA, SNB and ANB are all available.

use crate::model::measurement::{MeasurementReport, RangeStatus};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// ANB thresholds: below zero is Class III, above four is Class II.
const ANB_CLASS_I_MIN: f64 = 0.0;
const ANB_CLASS_I_MAX: f64 = 4.0;

/// Fixed subset of angular measurements that contribute findings, in
/// report order: maxillary position, mandibular position, growth pattern,
/// incisor inclination.
const FINDING_MEASUREMENT_IDS: &[&str] = &["sna", "snb", "gonial-angle", "upper-incisor-sn"];

const DEFAULT_FINDING: &str = "Normal skeletal and dental relationships";

/// Categorical jaw-relationship diagnosis derived from ANB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkeletalClass {
    ClassI,
    ClassII,
    ClassIII,
    /// SNA or SNB is not yet calculable.
    Undetermined,
}

impl SkeletalClass {
    /// User-facing label, matching the wording shown in the results panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::ClassI => "Class I (Normal skeletal relationship)",
            Self::ClassII => "Class II (Skeletal overbite)",
            Self::ClassIII => "Class III (Skeletal underbite)",
            Self::Undetermined => "Cannot determine",
        }
    }
}

impl Display for SkeletalClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a known ANB angle. Boundary values are Class I.
pub fn skeletal_class_from_anb(anb: f64) -> SkeletalClass {
    if anb < ANB_CLASS_I_MIN {
        SkeletalClass::ClassIII
    } else if anb > ANB_CLASS_I_MAX {
        SkeletalClass::ClassII
    } else {
        SkeletalClass::ClassI
    }
}

/// Classifies from SNA/SNB, `Undetermined` when either is missing.
///
/// ANB is the difference SNA - SNB, so it can be negative even though the
/// underlying interior angles never are.
pub fn skeletal_class(sna: Option<f64>, snb: Option<f64>) -> SkeletalClass {
    match (sna, snb) {
        (Some(sna), Some(snb)) => skeletal_class_from_anb(sna - snb),
        _ => SkeletalClass::Undetermined,
    }
}

/// Diagnosis snapshot for the results panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    pub skeletal_class: SkeletalClass,
    pub sna: f64,
    pub snb: f64,
    pub anb: f64,
    /// Ordered findings; never empty (falls back to the normal message).
    pub findings: Vec<String>,
}

/// Derives a diagnosis from the current report, or `None` while SNA/SNB
/// are not both computed (e.g. under an analysis that lacks them).
pub fn diagnose(report: &MeasurementReport) -> Option<Diagnosis> {
    let sna = report.angular_value("sna")?;
    let snb = report.angular_value("snb")?;
    let anb = sna - snb;

    Some(Diagnosis {
        skeletal_class: skeletal_class_from_anb(anb),
        sna,
        snb,
        anb,
        findings: findings(report),
    })
}

/// Collects non-normal interpretation strings over the fixed finding
/// subset, falling back to a single normal-relationships message.
pub fn findings(report: &MeasurementReport) -> Vec<String> {
    let mut collected = Vec::new();
    for id in FINDING_MEASUREMENT_IDS.iter().copied() {
        let Some(measurement) = report.angular(id) else {
            continue;
        };
        let Some(status) = measurement.classification() else {
            continue;
        };
        if status != RangeStatus::Normal {
            collected.push(
                measurement
                    .interpretation
                    .for_status(status)
                    .to_string(),
            );
        }
    }

    if collected.is_empty() {
        collected.push(DEFAULT_FINDING.to_string());
    }
    collected
}
