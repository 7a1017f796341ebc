//! Static catalogs: landmark vocabulary and analysis formula sets.
//!
//! # Responsibility
//! - Define the closed landmark catalog once at process start.
//! - Define the declarative measurement sets for each named analysis.
//!
//! # Invariants
//! - Catalog contents never change at runtime.
//! - Every landmark a measurement references exists in the catalog.

pub mod analyses;
pub mod landmarks;

pub use analyses::{analysis, DOWNS_ANALYSIS, MCNAMARA_ANALYSIS, STEINER_ANALYSIS};
pub use landmarks::{landmark_def, LANDMARK_CATALOG};
