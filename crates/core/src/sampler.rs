//! Uniform grid sampling of the superposed field.
//!
//! A [`GridSampler`] enumerates grid points over a `width x height` domain at
//! a fixed step, x outer and y inner. For each point it anchors a zero-length
//! arrow there and folds every source's contribution into it, so each
//! [`FieldSample`] carries an arrow from the grid point to the grid point
//! displaced by the resultant field.

use crate::error::FieldError;
use crate::geometry::{superpose, Point, Vector};
use crate::law::{FieldLaw, RotatedInverseSquare};
use crate::source::Source;
use glam::DVec2;
use log::trace;
use serde::{Deserialize, Serialize};

/// Reference domain width.
pub const REFERENCE_WIDTH: usize = 1450;
/// Reference domain height.
pub const REFERENCE_HEIGHT: usize = 850;
/// Reference grid step.
pub const REFERENCE_STEP: usize = 50;

/// Rectangular sampling domain anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub width: usize,
    pub height: usize,
}

impl Domain {
    /// The reference 1450 x 850 domain.
    pub const REFERENCE: Domain = Domain {
        width: REFERENCE_WIDTH,
        height: REFERENCE_HEIGHT,
    };

    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// One grid point and the resultant arrow anchored there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSample {
    #[serde(with = "crate::geometry::point_serde")]
    pub point: Point,
    pub resultant: Vector,
}

impl FieldSample {
    /// The superposed field vector at this point.
    pub fn field(&self) -> DVec2 {
        self.resultant.delta()
    }
}

/// Enumerates grid points and folds source contributions at each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSampler {
    domain: Domain,
    step: usize,
}

impl GridSampler {
    /// Creates a sampler for `domain` with the given grid step.
    ///
    /// Returns `FieldError::InvalidStep` if `step` is zero, or
    /// `FieldError::InvalidConfig` if the sample count overflows `usize`.
    pub fn new(domain: Domain, step: usize) -> Result<Self, FieldError> {
        if step == 0 {
            return Err(FieldError::InvalidStep);
        }
        let sampler = Self { domain, step };
        sampler
            .columns()
            .checked_mul(sampler.rows())
            .ok_or_else(|| {
                FieldError::InvalidConfig(format!(
                    "{} x {} grid at step {step} has too many samples",
                    domain.width, domain.height
                ))
            })?;
        Ok(sampler)
    }

    /// Sampler over the reference domain at the reference step.
    pub fn reference() -> Self {
        Self {
            domain: Domain::REFERENCE,
            step: REFERENCE_STEP,
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of grid columns (distinct x values).
    pub fn columns(&self) -> usize {
        self.domain.width.div_ceil(self.step)
    }

    /// Number of grid rows (distinct y values).
    pub fn rows(&self) -> usize {
        self.domain.height.div_ceil(self.step)
    }

    /// Total number of samples produced per recomputation.
    pub fn len(&self) -> usize {
        // Cannot overflow: `new` rejects grids whose product does.
        self.columns() * self.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid points in sampling order: x outer, y inner.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (columns, rows, step) = (self.columns(), self.rows(), self.step);
        (0..columns).flat_map(move |col| {
            (0..rows).map(move |row| grid_point(col, row, step))
        })
    }

    /// Samples the charge field for `sources` over the whole grid.
    pub fn sample(&self, sources: &[Source]) -> Vec<FieldSample> {
        self.sample_with(&RotatedInverseSquare, sources)
    }

    /// Samples the field produced by `law` over the whole grid.
    pub fn sample_with<L: FieldLaw + ?Sized>(&self, law: &L, sources: &[Source]) -> Vec<FieldSample> {
        trace!(
            "sampling {} points x {} sources",
            self.len(),
            sources.len()
        );
        self.points()
            .map(|point| FieldSample {
                point,
                resultant: resultant_at(law, point, sources),
            })
            .collect()
    }

    /// Resultant charge-field arrow at a single point, on or off the grid.
    pub fn sample_at(&self, point: Point, sources: &[Source]) -> Vector {
        resultant_at(&RotatedInverseSquare, point, sources)
    }

    /// Parallel [`GridSampler::sample`].
    ///
    /// Columns are distributed across the rayon pool against the shared
    /// `sources` slice; output order and values match `sample` exactly.
    #[cfg(feature = "parallel")]
    pub fn sample_par(&self, sources: &[Source]) -> Vec<FieldSample> {
        self.sample_par_with(&RotatedInverseSquare, sources)
    }

    /// Parallel [`GridSampler::sample_with`].
    #[cfg(feature = "parallel")]
    pub fn sample_par_with<L: FieldLaw + ?Sized>(
        &self,
        law: &L,
        sources: &[Source],
    ) -> Vec<FieldSample> {
        use rayon::prelude::*;

        trace!(
            "sampling {} points x {} sources in parallel",
            self.len(),
            sources.len()
        );
        let (rows, step) = (self.rows(), self.step);
        (0..self.columns())
            .into_par_iter()
            .flat_map_iter(|col| {
                (0..rows).map(move |row| {
                    let point = grid_point(col, row, step);
                    FieldSample {
                        point,
                        resultant: resultant_at(law, point, sources),
                    }
                })
            })
            .collect()
    }
}

/// Samples the charge field over `domain` at `step`.
///
/// Returns `FieldError::InvalidStep` if `step` is zero.
pub fn sample(domain: Domain, step: usize, sources: &[Source]) -> Result<Vec<FieldSample>, FieldError> {
    Ok(GridSampler::new(domain, step)?.sample(sources))
}

fn grid_point(col: usize, row: usize, step: usize) -> Point {
    DVec2::new((col * step) as f64, (row * step) as f64)
}

/// Folds every source's contribution, in order, into an arrow anchored at `point`.
fn resultant_at<L: FieldLaw + ?Sized>(law: &L, point: Point, sources: &[Source]) -> Vector {
    sources
        .iter()
        .fold(Vector::anchored_at(point), |acc, source| {
            superpose(acc, law.contribution(point, source))
        })
}
