//! Fixed landmark catalog.
//!
//! One entry per [`LandmarkId`], in panel display order: skeletal, then
//! dental, then soft tissue. Colors are marker hues consumed verbatim by
//! renderers.

use crate::model::landmark::{LandmarkCategory, LandmarkDef, LandmarkId};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

pub static LANDMARK_CATALOG: &[LandmarkDef] = &[
    LandmarkDef {
        id: LandmarkId::Sella,
        name: "Sella",
        abbreviation: "S",
        description: "Center of the pituitary fossa (sella turcica)",
        category: LandmarkCategory::Skeletal,
        color: "#3b82f6",
    },
    LandmarkDef {
        id: LandmarkId::Nasion,
        name: "Nasion",
        abbreviation: "N",
        description: "Most anterior point of the frontonasal suture",
        category: LandmarkCategory::Skeletal,
        color: "#2563eb",
    },
    LandmarkDef {
        id: LandmarkId::APoint,
        name: "A Point",
        abbreviation: "A",
        description: "Deepest point on the anterior maxillary concavity",
        category: LandmarkCategory::Skeletal,
        color: "#0ea5e9",
    },
    LandmarkDef {
        id: LandmarkId::BPoint,
        name: "B Point",
        abbreviation: "B",
        description: "Deepest point on the anterior mandibular concavity",
        category: LandmarkCategory::Skeletal,
        color: "#06b6d4",
    },
    LandmarkDef {
        id: LandmarkId::Pogonion,
        name: "Pogonion",
        abbreviation: "Pog",
        description: "Most anterior point of the bony chin",
        category: LandmarkCategory::Skeletal,
        color: "#14b8a6",
    },
    LandmarkDef {
        id: LandmarkId::Menton,
        name: "Menton",
        abbreviation: "Me",
        description: "Most inferior point of the mandibular symphysis",
        category: LandmarkCategory::Skeletal,
        color: "#22c55e",
    },
    LandmarkDef {
        id: LandmarkId::Gonion,
        name: "Gonion",
        abbreviation: "Go",
        description: "Most posterior-inferior point of the mandibular angle",
        category: LandmarkCategory::Skeletal,
        color: "#84cc16",
    },
    LandmarkDef {
        id: LandmarkId::Orbitale,
        name: "Orbitale",
        abbreviation: "Or",
        description: "Most inferior point of the infraorbital rim",
        category: LandmarkCategory::Skeletal,
        color: "#eab308",
    },
    LandmarkDef {
        id: LandmarkId::Porion,
        name: "Porion",
        abbreviation: "Po",
        description: "Most superior point of the external auditory meatus",
        category: LandmarkCategory::Skeletal,
        color: "#f59e0b",
    },
    LandmarkDef {
        id: LandmarkId::Gnathion,
        name: "Gnathion",
        abbreviation: "Gn",
        description: "Midpoint between pogonion and menton on the chin contour",
        category: LandmarkCategory::Skeletal,
        color: "#f97316",
    },
    LandmarkDef {
        id: LandmarkId::AnteriorNasalSpine,
        name: "Anterior Nasal Spine",
        abbreviation: "ANS",
        description: "Tip of the anterior nasal spine",
        category: LandmarkCategory::Skeletal,
        color: "#ef4444",
    },
    LandmarkDef {
        id: LandmarkId::PosteriorNasalSpine,
        name: "Posterior Nasal Spine",
        abbreviation: "PNS",
        description: "Tip of the posterior nasal spine",
        category: LandmarkCategory::Skeletal,
        color: "#dc2626",
    },
    LandmarkDef {
        id: LandmarkId::Articulare,
        name: "Articulare",
        abbreviation: "Ar",
        description: "Intersection of the cranial base and the condylar neck",
        category: LandmarkCategory::Skeletal,
        color: "#be123c",
    },
    LandmarkDef {
        id: LandmarkId::Basion,
        name: "Basion",
        abbreviation: "Ba",
        description: "Most anterior point of the foramen magnum",
        category: LandmarkCategory::Skeletal,
        color: "#9f1239",
    },
    LandmarkDef {
        id: LandmarkId::UpperIncisorTip,
        name: "Upper Incisor Tip",
        abbreviation: "U1",
        description: "Incisal edge of the most prominent upper central incisor",
        category: LandmarkCategory::Dental,
        color: "#a855f7",
    },
    LandmarkDef {
        id: LandmarkId::LowerIncisorTip,
        name: "Lower Incisor Tip",
        abbreviation: "L1",
        description: "Incisal edge of the most prominent lower central incisor",
        category: LandmarkCategory::Dental,
        color: "#9333ea",
    },
    LandmarkDef {
        id: LandmarkId::UpperIncisorRoot,
        name: "Upper Incisor Apex",
        abbreviation: "U1A",
        description: "Root apex of the upper central incisor",
        category: LandmarkCategory::Dental,
        color: "#7c3aed",
    },
    LandmarkDef {
        id: LandmarkId::LowerIncisorRoot,
        name: "Lower Incisor Apex",
        abbreviation: "L1A",
        description: "Root apex of the lower central incisor",
        category: LandmarkCategory::Dental,
        color: "#6d28d9",
    },
    LandmarkDef {
        id: LandmarkId::SoftTissueNasion,
        name: "Soft Tissue Nasion",
        abbreviation: "N'",
        description: "Deepest point of the soft-tissue nasal bridge concavity",
        category: LandmarkCategory::SoftTissue,
        color: "#ec4899",
    },
    LandmarkDef {
        id: LandmarkId::Subnasale,
        name: "Subnasale",
        abbreviation: "Sn",
        description: "Junction of the columella and the upper lip",
        category: LandmarkCategory::SoftTissue,
        color: "#db2777",
    },
    LandmarkDef {
        id: LandmarkId::LabraleSuperius,
        name: "Labrale Superius",
        abbreviation: "Ls",
        description: "Most anterior point of the upper lip vermilion",
        category: LandmarkCategory::SoftTissue,
        color: "#be185d",
    },
    LandmarkDef {
        id: LandmarkId::SoftTissuePogonion,
        name: "Soft Tissue Pogonion",
        abbreviation: "Pog'",
        description: "Most anterior point of the soft-tissue chin",
        category: LandmarkCategory::SoftTissue,
        color: "#9d174d",
    },
];

static CATALOG_BY_ID: Lazy<BTreeMap<LandmarkId, &'static LandmarkDef>> = Lazy::new(|| {
    LANDMARK_CATALOG
        .iter()
        .map(|def| (def.id, def))
        .collect()
});

/// Catalog entry for one landmark id.
///
/// Total over [`LandmarkId`]: the catalog carries exactly one entry per
/// variant, which the registry tests enforce.
pub fn landmark_def(id: LandmarkId) -> &'static LandmarkDef {
    CATALOG_BY_ID
        .get(&id)
        .copied()
        .unwrap_or_else(|| panic!("landmark catalog is missing entry for `{id}`"))
}
