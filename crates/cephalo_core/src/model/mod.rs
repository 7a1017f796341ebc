//! Domain model for cephalometric analysis.
//!
//! # Responsibility
//! - Define canonical data structures used by the measurement engine.
//! - Keep one closed landmark/analysis vocabulary shared by all layers.
//!
//! # Invariants
//! - The landmark vocabulary is a closed enum fixed at compile time.
//! - Measurement definitions are static configuration, never runtime state.

pub mod analysis;
pub mod landmark;
pub mod measurement;
pub mod point;
