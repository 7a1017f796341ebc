//! Declarative measurement catalogs for the supported analyses.
//!
//! Normal ranges and interpretation text are fixed reference values, not a
//! medical inference system; the diagnostic layer only looks values up here.
//!
//! The mandibular plane angle is evaluated from Go-Me against nasion only,
//! omitting sella. That mirrors the reference implementation's simplified
//! formula; true SN/MP plane-intersection geometry is pending domain
//! confirmation (see DESIGN.md).

use crate::model::analysis::{AnalysisDefinition, AnalysisId};
use crate::model::landmark::LandmarkId::{self, *};
use crate::model::measurement::{
    AngularMeasurementDef, Interpretation, LinearMeasurementDef, NormalRange,
};

const SNA: AngularMeasurementDef = AngularMeasurementDef {
    id: "sna",
    name: "SNA",
    description: "Anteroposterior position of the maxilla relative to the cranial base",
    landmarks: [Sella, Nasion, APoint],
    normal_range: NormalRange { min: 80.0, max: 84.0 },
    interpretation: Interpretation {
        low: "Maxillary retrognathism (upper jaw positioned posteriorly)",
        normal: "Maxilla is normally positioned relative to the cranial base",
        high: "Maxillary prognathism (upper jaw positioned anteriorly)",
    },
};

const SNB: AngularMeasurementDef = AngularMeasurementDef {
    id: "snb",
    name: "SNB",
    description: "Anteroposterior position of the mandible relative to the cranial base",
    landmarks: [Sella, Nasion, BPoint],
    normal_range: NormalRange { min: 78.0, max: 82.0 },
    interpretation: Interpretation {
        low: "Mandibular retrognathism (lower jaw positioned posteriorly)",
        normal: "Mandible is normally positioned relative to the cranial base",
        high: "Mandibular prognathism (lower jaw positioned anteriorly)",
    },
};

const MANDIBULAR_PLANE_ANGLE: AngularMeasurementDef = AngularMeasurementDef {
    id: "mandibular-plane-angle",
    name: "Mandibular Plane Angle",
    description: "Inclination of the mandibular plane (Go-Me) to the anterior cranial base",
    landmarks: [Gonion, Menton, Nasion],
    normal_range: NormalRange { min: 28.0, max: 36.0 },
    interpretation: Interpretation {
        low: "Horizontal growth pattern with reduced lower facial height",
        normal: "Average vertical growth pattern",
        high: "Vertical growth pattern with increased lower facial height",
    },
};

const UPPER_INCISOR_SN: AngularMeasurementDef = AngularMeasurementDef {
    id: "upper-incisor-sn",
    name: "U1 to SN",
    description: "Inclination of the upper incisor long axis to the cranial base",
    landmarks: [UpperIncisorTip, UpperIncisorRoot, Nasion],
    normal_range: NormalRange { min: 100.0, max: 110.0 },
    interpretation: Interpretation {
        low: "Retroclined upper incisors",
        normal: "Upper incisor inclination within normal limits",
        high: "Proclined upper incisors",
    },
};

const GONIAL_ANGLE: AngularMeasurementDef = AngularMeasurementDef {
    id: "gonial-angle",
    name: "Gonial Angle",
    description: "Angle between the ramus (Ar-Go) and the mandibular body (Go-Me)",
    landmarks: [Articulare, Gonion, Menton],
    normal_range: NormalRange { min: 120.0, max: 130.0 },
    interpretation: Interpretation {
        low: "Horizontal growth pattern with reduced lower facial height",
        normal: "Balanced mandibular form and growth direction",
        high: "Vertical growth pattern with increased lower facial height",
    },
};

const FACIAL_ANGLE: AngularMeasurementDef = AngularMeasurementDef {
    id: "facial-angle",
    name: "Facial Angle",
    description: "Prominence of the chin: facial plane (N-Pog) against Frankfort horizontal",
    landmarks: [Nasion, Pogonion, Porion],
    normal_range: NormalRange { min: 82.0, max: 95.0 },
    interpretation: Interpretation {
        low: "Retrognathic facial profile with a recessive chin",
        normal: "Orthognathic facial profile",
        high: "Prognathic facial profile with a prominent chin",
    },
};

const Y_AXIS_ANGLE: AngularMeasurementDef = AngularMeasurementDef {
    id: "y-axis-angle",
    name: "Y-Axis Angle",
    description: "Growth direction of the chin relative to Frankfort horizontal",
    landmarks: [Orbitale, Porion, Gnathion],
    normal_range: NormalRange { min: 53.0, max: 66.0 },
    interpretation: Interpretation {
        low: "Horizontal (counterclockwise) growth tendency",
        normal: "Average downward and forward growth direction",
        high: "Vertical (clockwise) growth tendency",
    },
};

const INTERINCISAL_ANGLE: AngularMeasurementDef = AngularMeasurementDef {
    id: "interincisal-angle",
    name: "Interincisal Angle",
    description: "Angle between the upper and lower incisor long axes",
    landmarks: [UpperIncisorRoot, UpperIncisorTip, LowerIncisorRoot],
    normal_range: NormalRange { min: 130.0, max: 150.0 },
    interpretation: Interpretation {
        low: "Bimaxillary proclination with a reduced interincisal angle",
        normal: "Incisor axes within normal limits",
        high: "Upright incisors with an increased interincisal angle",
    },
};

const FACIAL_AXIS_ANGLE: AngularMeasurementDef = AngularMeasurementDef {
    id: "facial-axis-angle",
    name: "Facial Axis Angle",
    description: "Direction of chin growth relative to the cranial base (Ba-N)",
    landmarks: [Basion, Nasion, Gnathion],
    normal_range: NormalRange { min: 87.0, max: 93.0 },
    interpretation: Interpretation {
        low: "Vertical growth direction with a downward-rotating chin",
        normal: "Balanced facial growth direction",
        high: "Horizontal growth direction with a forward-rotating chin",
    },
};

const NASOLABIAL_ANGLE: AngularMeasurementDef = AngularMeasurementDef {
    id: "nasolabial-angle",
    name: "Nasolabial Angle",
    description: "Soft-tissue angle at subnasale between the nasal base and the upper lip",
    landmarks: [SoftTissueNasion, Subnasale, LabraleSuperius],
    normal_range: NormalRange { min: 90.0, max: 110.0 },
    interpretation: Interpretation {
        low: "Acute nasolabial angle with a protrusive upper lip",
        normal: "Balanced nasolabial soft-tissue relationship",
        high: "Obtuse nasolabial angle with a retrusive upper lip",
    },
};

const ANTERIOR_CRANIAL_BASE: LinearMeasurementDef = LinearMeasurementDef {
    id: "anterior-cranial-base",
    name: "Anterior Cranial Base (S-N)",
    description: "Length of the anterior cranial base from sella to nasion",
    landmarks: [Sella, Nasion],
    normal_range: NormalRange { min: 66.0, max: 74.0 },
};

const MANDIBULAR_BODY_LENGTH: LinearMeasurementDef = LinearMeasurementDef {
    id: "mandibular-body-length",
    name: "Mandibular Body Length (Go-Me)",
    description: "Length of the mandibular body from gonion to menton",
    landmarks: [Gonion, Menton],
    normal_range: NormalRange { min: 70.0, max: 80.0 },
};

const RAMUS_HEIGHT: LinearMeasurementDef = LinearMeasurementDef {
    id: "ramus-height",
    name: "Ramus Height (Ar-Go)",
    description: "Height of the mandibular ramus from articulare to gonion",
    landmarks: [Articulare, Gonion],
    normal_range: NormalRange { min: 40.0, max: 50.0 },
};

const LOWER_FACIAL_HEIGHT: LinearMeasurementDef = LinearMeasurementDef {
    id: "lower-facial-height",
    name: "Lower Anterior Facial Height (ANS-Me)",
    description: "Anterior facial height from the anterior nasal spine to menton",
    landmarks: [AnteriorNasalSpine, Menton],
    normal_range: NormalRange { min: 60.0, max: 70.0 },
};

const EFFECTIVE_MIDFACIAL_LENGTH: LinearMeasurementDef = LinearMeasurementDef {
    id: "effective-midfacial-length",
    name: "Effective Midfacial Length (Ar-A)",
    description: "Effective length of the midface from articulare to A point",
    landmarks: [Articulare, APoint],
    normal_range: NormalRange { min: 85.0, max: 99.0 },
};

const EFFECTIVE_MANDIBULAR_LENGTH: LinearMeasurementDef = LinearMeasurementDef {
    id: "effective-mandibular-length",
    name: "Effective Mandibular Length (Ar-Gn)",
    description: "Effective length of the mandible from articulare to gnathion",
    landmarks: [Articulare, Gnathion],
    normal_range: NormalRange { min: 105.0, max: 125.0 },
};

pub static STEINER_ANALYSIS: AnalysisDefinition = AnalysisDefinition {
    id: AnalysisId::Steiner,
    required_landmarks: &[
        Sella,
        Nasion,
        APoint,
        BPoint,
        Gonion,
        Menton,
        Articulare,
        UpperIncisorTip,
        UpperIncisorRoot,
    ],
    angular: &[
        SNA,
        SNB,
        MANDIBULAR_PLANE_ANGLE,
        UPPER_INCISOR_SN,
        GONIAL_ANGLE,
    ],
    linear: &[ANTERIOR_CRANIAL_BASE, MANDIBULAR_BODY_LENGTH],
};

pub static DOWNS_ANALYSIS: AnalysisDefinition = AnalysisDefinition {
    id: AnalysisId::Downs,
    required_landmarks: &[
        Nasion,
        Pogonion,
        Porion,
        Orbitale,
        Gnathion,
        Articulare,
        Gonion,
        Menton,
        AnteriorNasalSpine,
        UpperIncisorTip,
        UpperIncisorRoot,
        LowerIncisorRoot,
    ],
    angular: &[FACIAL_ANGLE, GONIAL_ANGLE, Y_AXIS_ANGLE, INTERINCISAL_ANGLE],
    linear: &[LOWER_FACIAL_HEIGHT, RAMUS_HEIGHT],
};

pub static MCNAMARA_ANALYSIS: AnalysisDefinition = AnalysisDefinition {
    id: AnalysisId::Mcnamara,
    required_landmarks: &[
        Basion,
        Nasion,
        Gnathion,
        Articulare,
        APoint,
        AnteriorNasalSpine,
        Menton,
        SoftTissueNasion,
        Subnasale,
        LabraleSuperius,
    ],
    angular: &[FACIAL_AXIS_ANGLE, NASOLABIAL_ANGLE],
    linear: &[
        EFFECTIVE_MIDFACIAL_LENGTH,
        EFFECTIVE_MANDIBULAR_LENGTH,
        LOWER_FACIAL_HEIGHT,
    ],
};

/// Definition set for one analysis id.
pub fn analysis(id: AnalysisId) -> &'static AnalysisDefinition {
    match id {
        AnalysisId::Steiner => &STEINER_ANALYSIS,
        AnalysisId::Downs => &DOWNS_ANALYSIS,
        AnalysisId::Mcnamara => &MCNAMARA_ANALYSIS,
    }
}
