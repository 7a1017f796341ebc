//! Named analysis identifiers and definition shape.
//!
//! # Responsibility
//! - Define the closed set of supported analyses.
//! - Define the declarative shape one analysis contributes to the registry.
//!
//! # Invariants
//! - Exactly one analysis is active per session at any time.
//! - Switching analyses never touches landmark placements.

use crate::model::landmark::LandmarkId;
use crate::model::measurement::{AngularMeasurementDef, LinearMeasurementDef};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Supported cephalometric analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisId {
    Steiner,
    Downs,
    Mcnamara,
}

impl AnalysisId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Steiner => "steiner",
            Self::Downs => "downs",
            Self::Mcnamara => "mcnamara",
        }
    }

    /// Parses one analysis id from its wire form.
    pub fn parse(value: &str) -> Result<Self, UnknownAnalysisError> {
        match value.trim() {
            "steiner" => Ok(Self::Steiner),
            "downs" => Ok(Self::Downs),
            "mcnamara" => Ok(Self::Mcnamara),
            other => Err(UnknownAnalysisError(other.to_string())),
        }
    }
}

impl Display for AnalysisId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request referenced an analysis outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAnalysisError(pub String);

impl Display for UnknownAnalysisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown analysis id: {}", self.0)
    }
}

impl Error for UnknownAnalysisError {}

/// Declarative catalog of formulas for one named analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisDefinition {
    pub id: AnalysisId,
    /// Every landmark any formula in this analysis references.
    pub required_landmarks: &'static [LandmarkId],
    pub angular: &'static [AngularMeasurementDef],
    pub linear: &'static [LinearMeasurementDef],
}

#[cfg(test)]
mod tests {
    use super::{AnalysisId, UnknownAnalysisError};

    #[test]
    fn parses_all_supported_analyses() {
        assert_eq!(AnalysisId::parse("steiner").unwrap(), AnalysisId::Steiner);
        assert_eq!(AnalysisId::parse("downs").unwrap(), AnalysisId::Downs);
        assert_eq!(AnalysisId::parse("mcnamara").unwrap(), AnalysisId::Mcnamara);
    }

    #[test]
    fn rejects_unknown_analysis() {
        let err = AnalysisId::parse("ricketts").expect_err("unsupported analysis must fail");
        assert_eq!(err, UnknownAnalysisError("ricketts".to_string()));
    }
}
