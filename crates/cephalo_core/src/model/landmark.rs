//! Landmark vocabulary and catalog entry shapes.
//!
//! # Responsibility
//! - Define the closed set of anatomical landmark identifiers.
//! - Provide the stable wire ids used by UI collaborators.
//!
//! # Invariants
//! - Every `LandmarkId` variant has exactly one wire id and vice versa.
//! - The vocabulary is analysis-independent; analyses only reference it.

use crate::model::point::Point;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Closed identifier set for anatomical reference points.
///
/// Wire ids are kebab-case (`a-point`, `soft-tissue-nasion`) to stay
/// compatible with the ids collaborators already render.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum LandmarkId {
    Sella,
    Nasion,
    APoint,
    BPoint,
    Pogonion,
    Menton,
    Gonion,
    Orbitale,
    Porion,
    Gnathion,
    AnteriorNasalSpine,
    PosteriorNasalSpine,
    Articulare,
    Basion,
    UpperIncisorTip,
    LowerIncisorTip,
    UpperIncisorRoot,
    LowerIncisorRoot,
    SoftTissueNasion,
    Subnasale,
    LabraleSuperius,
    SoftTissuePogonion,
}

impl LandmarkId {
    /// Stable wire id used by collaborators and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sella => "sella",
            Self::Nasion => "nasion",
            Self::APoint => "a-point",
            Self::BPoint => "b-point",
            Self::Pogonion => "pogonion",
            Self::Menton => "menton",
            Self::Gonion => "gonion",
            Self::Orbitale => "orbitale",
            Self::Porion => "porion",
            Self::Gnathion => "gnathion",
            Self::AnteriorNasalSpine => "anterior-nasal-spine",
            Self::PosteriorNasalSpine => "posterior-nasal-spine",
            Self::Articulare => "articulare",
            Self::Basion => "basion",
            Self::UpperIncisorTip => "upper-incisor-tip",
            Self::LowerIncisorTip => "lower-incisor-tip",
            Self::UpperIncisorRoot => "upper-incisor-root",
            Self::LowerIncisorRoot => "lower-incisor-root",
            Self::SoftTissueNasion => "soft-tissue-nasion",
            Self::Subnasale => "subnasale",
            Self::LabraleSuperius => "labrale-superius",
            Self::SoftTissuePogonion => "soft-tissue-pogonion",
        }
    }

    /// Parses one landmark id from its wire form.
    ///
    /// This is the `UnknownLandmark` boundary: requests referencing ids
    /// outside the vocabulary are rejected here, before any state change.
    pub fn parse(value: &str) -> Result<Self, UnknownLandmarkError> {
        ALL_LANDMARK_IDS
            .iter()
            .copied()
            .find(|id| id.as_str() == value.trim())
            .ok_or_else(|| UnknownLandmarkError(value.trim().to_string()))
    }
}

impl Display for LandmarkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every landmark id, in catalog display order.
pub const ALL_LANDMARK_IDS: &[LandmarkId] = &[
    LandmarkId::Sella,
    LandmarkId::Nasion,
    LandmarkId::APoint,
    LandmarkId::BPoint,
    LandmarkId::Pogonion,
    LandmarkId::Menton,
    LandmarkId::Gonion,
    LandmarkId::Orbitale,
    LandmarkId::Porion,
    LandmarkId::Gnathion,
    LandmarkId::AnteriorNasalSpine,
    LandmarkId::PosteriorNasalSpine,
    LandmarkId::Articulare,
    LandmarkId::Basion,
    LandmarkId::UpperIncisorTip,
    LandmarkId::LowerIncisorTip,
    LandmarkId::UpperIncisorRoot,
    LandmarkId::LowerIncisorRoot,
    LandmarkId::SoftTissueNasion,
    LandmarkId::Subnasale,
    LandmarkId::LabraleSuperius,
    LandmarkId::SoftTissuePogonion,
];

/// Request referenced a landmark id outside the fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLandmarkError(pub String);

impl Display for UnknownLandmarkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown landmark id: {}", self.0)
    }
}

impl Error for UnknownLandmarkError {}

/// Display grouping for the landmark panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LandmarkCategory {
    Skeletal,
    Dental,
    SoftTissue,
}

impl LandmarkCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Skeletal => "skeletal",
            Self::Dental => "dental",
            Self::SoftTissue => "soft-tissue",
        }
    }
}

/// Static catalog entry for one landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandmarkDef {
    pub id: LandmarkId,
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub description: &'static str,
    pub category: LandmarkCategory,
    /// Marker color as a hex string, consumed verbatim by renderers.
    pub color: &'static str,
}

/// Rendered landmark view: catalog entry joined with its placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Landmark {
    pub id: LandmarkId,
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub description: &'static str,
    pub category: LandmarkCategory,
    pub color: &'static str,
    /// `None` until the analyst places the point on the image.
    pub position: Option<Point>,
}

impl Landmark {
    pub fn from_def(def: &LandmarkDef, position: Option<Point>) -> Self {
        Self {
            id: def.id,
            name: def.name,
            abbreviation: def.abbreviation,
            description: def.description,
            category: def.category,
            color: def.color,
            position,
        }
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{LandmarkId, UnknownLandmarkError, ALL_LANDMARK_IDS};

    #[test]
    fn wire_ids_round_trip_through_parse() {
        for id in ALL_LANDMARK_IDS.iter().copied() {
            assert_eq!(LandmarkId::parse(id.as_str()).expect("known id"), id);
        }
    }

    #[test]
    fn parse_rejects_unknown_id() {
        let err = LandmarkId::parse("condylion").expect_err("id outside vocabulary must fail");
        assert_eq!(err, UnknownLandmarkError("condylion".to_string()));
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        assert_eq!(
            LandmarkId::parse(" a-point ").expect("trimmed id should parse"),
            LandmarkId::APoint
        );
    }

    #[test]
    fn serde_wire_form_matches_as_str() {
        for id in ALL_LANDMARK_IDS.iter().copied() {
            let json = serde_json::to_value(id).expect("serialize id");
            assert_eq!(json, serde_json::json!(id.as_str()));
        }
    }
}
