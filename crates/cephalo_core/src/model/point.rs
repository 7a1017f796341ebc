//! Image-space point value type.

use serde::{Deserialize, Serialize};

/// A position in image pixel coordinates.
///
/// Collaborators translate pointer events into this space before calling the
/// engine; the core never sees screen or canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
