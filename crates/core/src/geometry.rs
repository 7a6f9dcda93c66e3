//! Points, arrows, and the superposition combinator.
//!
//! A [`Vector`] is a directed arrow from `start` to `end`. Per-source field
//! contributions are free vectors (`start` at the origin); a grid sample's
//! resultant is anchored at its grid point. Superposition adds `start` and
//! `end` component-wise, so folding free vectors into an anchored
//! accumulator keeps the anchor fixed while `end` collects the field.
//!
//! Points serialize as `{"x": .., "y": ..}` objects via [`point_serde`].

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A 2D coordinate.
pub type Point = DVec2;

/// Serde adapter writing a [`Point`] as an `{x, y}` object.
///
/// Use with `#[serde(with = "crate::geometry::point_serde")]`.
pub mod point_serde {
    use super::Point;
    use glam::DVec2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Xy {
        x: f64,
        y: f64,
    }

    pub fn serialize<S: Serializer>(point: &Point, serializer: S) -> Result<S::Ok, S::Error> {
        Xy {
            x: point.x,
            y: point.y,
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Point, D::Error> {
        let Xy { x, y } = Xy::deserialize(deserializer)?;
        Ok(DVec2::new(x, y))
    }
}

/// A directed arrow from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    #[serde(with = "point_serde")]
    pub start: Point,
    #[serde(with = "point_serde")]
    pub end: Point,
}

impl Vector {
    /// The zero vector: both endpoints at the origin.
    pub const ZERO: Vector = Vector {
        start: DVec2::ZERO,
        end: DVec2::ZERO,
    };

    /// Creates an arrow from `start` to `end`.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// A free vector starting at the origin with the given components.
    pub fn free(dx: f64, dy: f64) -> Self {
        Self {
            start: DVec2::ZERO,
            end: DVec2::new(dx, dy),
        }
    }

    /// A zero-length arrow anchored at `point`.
    pub fn anchored_at(point: Point) -> Self {
        Self {
            start: point,
            end: point,
        }
    }

    /// Displacement from `start` to `end`.
    pub fn delta(&self) -> DVec2 {
        self.end - self.start
    }

    /// Arrow length.
    pub fn length(&self) -> f64 {
        self.delta().length()
    }
}

/// Component-wise sum of two arrows: starts add, ends add.
pub fn superpose(a: Vector, b: Vector) -> Vector {
    Vector {
        start: a.start + b.start,
        end: a.end + b.end,
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        superpose(self, rhs)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        *self = superpose(*self, rhs);
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
        iter.fold(Vector::ZERO, superpose)
    }
}
