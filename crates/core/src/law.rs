//! Field laws: one source's contribution at one sample point.
//!
//! A [`FieldLaw`] maps a sample point and a source to a free vector (starting
//! at the origin). [`RotatedInverseSquare`] is the law used for charge fields:
//! an inverse-square falloff rotated 90 degrees from the radial direction,
//! with the rotation sense set by the sign of the magnitude.
//!
//! All implementations are pure: same inputs produce the same output.

use crate::geometry::{Point, Vector};
use crate::source::Source;

/// Base field coefficient.
pub const K0: f64 = 1e-7;

/// Strength scale applied to every contribution (11^9).
pub const MU: f64 = 2_357_947_691.0;

/// Computes one source's contribution to the field at a sample point.
pub trait FieldLaw: Send + Sync {
    /// Free vector (start at the origin) contributed by `source` at `sample`.
    fn contribution(&self, sample: Point, source: &Source) -> Vector;
}

/// Inverse-square field rotated a quarter turn around the source.
///
/// For a non-negative magnitude the contribution at offset `(dx, dy)` from
/// the source is `(dy, -dx) * k * MU` with `k = K0 * |magnitude| / dist²`;
/// a negative magnitude flips the rotation sense. A sample point exactly on
/// the source contributes the zero vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotatedInverseSquare;

impl FieldLaw for RotatedInverseSquare {
    fn contribution(&self, sample: Point, source: &Source) -> Vector {
        contribution(sample, source)
    }
}

/// [`RotatedInverseSquare`] as a free function.
pub fn contribution(sample: Point, source: &Source) -> Vector {
    let dx = sample.x - source.position.x;
    let dy = sample.y - source.position.y;
    let dist = (dx * dx + dy * dy).sqrt();
    // Also false for NaN distances, which propagate through the else branch.
    if dist == 0.0 {
        return Vector::ZERO;
    }

    let k = K0 * source.magnitude.abs() / (dist * dist);
    if source.magnitude >= 0.0 {
        Vector::free(
            (sample.y - source.position.y) * k * MU,
            (source.position.x - sample.x) * k * MU,
        )
    } else {
        Vector::free(
            (source.position.y - sample.y) * k * MU,
            (sample.x - source.position.x) * k * MU,
        )
    }
}
