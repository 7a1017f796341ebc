//! Pure 2D geometry kernel.
//!
//! # Responsibility
//! - Provide the distance/angle primitives every measurement reduces to.
//! - Surface degenerate inputs as typed errors instead of silent `NaN`.
//!
//! # Invariants
//! - `distance(a, b) == distance(b, a)`; `distance(p, p) == 0`.
//! - `interior_angle` is symmetric in its outer points and lies in [0, 180].
//! - No function here reads session state; everything is a pure function.

use crate::model::point::Point;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for geometry primitives that can degenerate.
pub type GeometryResult<T> = Result<T, DegenerateGeometry>;

/// A formula was requested on coincident points, leaving it undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DegenerateGeometry {
    /// An angle ray has zero length: an outer point coincides with the vertex.
    ZeroLengthRay { vertex: Point },
    /// A reference line has zero length: its endpoints coincide.
    ZeroLengthLine { start: Point },
}

impl Display for DegenerateGeometry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLengthRay { vertex } => write!(
                f,
                "angle undefined: landmark coincides with vertex ({}, {})",
                vertex.x, vertex.y
            ),
            Self::ZeroLengthLine { start } => write!(
                f,
                "line undefined: endpoints coincide at ({}, {})",
                start.x, start.y
            ),
        }
    }
}

impl Error for DegenerateGeometry {}

/// Euclidean distance between two points, in pixels.
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// Interior (non-reflex) angle at `vertex` in degrees, range [0, 180].
///
/// Computed from the dot product of the vertex rays; the cosine is clamped
/// to [-1, 1] before `acos` to absorb floating-point overshoot on collinear
/// placements.
///
/// # Errors
/// Returns [`DegenerateGeometry::ZeroLengthRay`] when either outer point
/// coincides with the vertex.
pub fn interior_angle(p1: Point, vertex: Point, p3: Point) -> GeometryResult<f64> {
    let (ux, uy) = (p1.x - vertex.x, p1.y - vertex.y);
    let (vx, vy) = (p3.x - vertex.x, p3.y - vertex.y);

    let mag_u = ux.hypot(uy);
    let mag_v = vx.hypot(vy);
    if mag_u == 0.0 || mag_v == 0.0 {
        return Err(DegenerateGeometry::ZeroLengthRay { vertex });
    }

    let cos = ((ux * vx + uy * vy) / (mag_u * mag_v)).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees())
}

/// Directed angle from ray `vertex -> p1` to ray `vertex -> p3`, in degrees,
/// range [0, 360).
///
/// Only used where sweep direction matters; clinical angle measurements are
/// always interior angles. Zero-length rays yield 0 rather than an error
/// because `atan2(0, 0)` is defined and callers treat the result as a
/// display hint, not a measurement.
pub fn signed_angle(p1: Point, vertex: Point, p3: Point) -> f64 {
    let a1 = (p1.y - vertex.y).atan2(p1.x - vertex.x);
    let a3 = (p3.y - vertex.y).atan2(p3.x - vertex.x);
    let mut deg = (a3 - a1).to_degrees();
    if deg < 0.0 {
        deg += 360.0;
    }
    deg
}

/// Perpendicular distance from `point` to the infinite line through
/// `line_start` and `line_end`, in pixels.
///
/// # Errors
/// Returns [`DegenerateGeometry::ZeroLengthLine`] when the line endpoints
/// coincide; the quotient is undefined in that case.
pub fn point_to_line_distance(
    point: Point,
    line_start: Point,
    line_end: Point,
) -> GeometryResult<f64> {
    let length = distance(line_start, line_end);
    if length == 0.0 {
        return Err(DegenerateGeometry::ZeroLengthLine { start: line_start });
    }

    let numerator = ((line_end.y - line_start.y) * point.x
        - (line_end.x - line_start.x) * point.y
        + line_end.x * line_start.y
        - line_end.y * line_start.x)
        .abs();
    Ok(numerator / length)
}

#[cfg(test)]
mod tests {
    use super::{distance, interior_angle, point_to_line_distance, signed_angle, DegenerateGeometry};
    use crate::model::point::Point;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_identity() {
        let a = p(3.0, -2.0);
        let b = p(-1.5, 7.25);
        assert_eq!(distance(a, b), distance(b, a));
        assert_eq!(distance(a, a), 0.0);
        assert_eq!(distance(p(0.0, 0.0), p(3.0, 4.0)), 5.0);
    }

    #[test]
    fn interior_angle_right_angle() {
        let angle = interior_angle(p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0)).unwrap();
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn interior_angle_is_symmetric_in_outer_points() {
        let (a, v, b) = (p(10.0, 3.0), p(4.0, 4.0), p(-2.0, 9.0));
        let lhs = interior_angle(a, v, b).unwrap();
        let rhs = interior_angle(b, v, a).unwrap();
        assert!((lhs - rhs).abs() < 1e-12);
    }

    #[test]
    fn interior_angle_clamps_collinear_overshoot() {
        // Opposite collinear rays: the raw cosine can drift past -1.
        let angle = interior_angle(p(-5.0, 0.0), p(0.0, 0.0), p(5.0, 0.0)).unwrap();
        assert_eq!(angle, 180.0);
        // Same-direction rays.
        let angle = interior_angle(p(2.0, 2.0), p(0.0, 0.0), p(4.0, 4.0)).unwrap();
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn interior_angle_rejects_coincident_vertex() {
        let v = p(1.0, 1.0);
        let err = interior_angle(v, v, p(2.0, 2.0)).unwrap_err();
        assert_eq!(err, DegenerateGeometry::ZeroLengthRay { vertex: v });
    }

    #[test]
    fn signed_angle_is_directional() {
        let quarter = signed_angle(p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0));
        let reverse = signed_angle(p(0.0, 1.0), p(0.0, 0.0), p(1.0, 0.0));
        assert!((quarter - 90.0).abs() < 1e-9);
        assert!((reverse - 270.0).abs() < 1e-9);
    }

    #[test]
    fn point_to_line_distance_matches_hand_computation() {
        // Horizontal line y = 0, point 3 above it.
        let d = point_to_line_distance(p(7.0, 3.0), p(0.0, 0.0), p(10.0, 0.0)).unwrap();
        assert!((d - 3.0).abs() < 1e-12);
    }

    #[test]
    fn point_to_line_distance_rejects_zero_length_line() {
        let s = p(2.0, 2.0);
        let err = point_to_line_distance(p(0.0, 0.0), s, s).unwrap_err();
        assert_eq!(err, DegenerateGeometry::ZeroLengthLine { start: s });
    }
}
