//! The session's source collection.
//!
//! A [`FieldStore`] owns a fixed-length, ordered list of [`Source`] values.
//! Slots are replaced whole by index; read-modify-write helpers cover the two
//! edit signals a front end produces (dragging a source and typing a
//! magnitude). A failed edit leaves the store untouched.

use crate::error::FieldError;
use crate::geometry::Point;
use crate::sampler::{FieldSample, GridSampler};
use crate::source::{parse_magnitude, Source};
use log::debug;

/// Number of sources in the reference session.
pub const REFERENCE_SOURCE_COUNT: usize = 5;

/// Fixed-length, index-addressed collection of sources.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStore {
    sources: Vec<Source>,
}

impl FieldStore {
    /// Creates a store of `len` default sources. Zero is allowed.
    pub fn new(len: usize) -> Self {
        Self {
            sources: vec![Source::default(); len],
        }
    }

    /// Creates a store holding `sources` in the given order.
    pub fn from_sources(sources: Vec<Source>) -> Self {
        Self { sources }
    }

    /// Read-only view of the current sources.
    pub fn get(&self) -> &[Source] {
        &self.sources
    }

    /// Owned copy of the current sources.
    pub fn snapshot(&self) -> Vec<Source> {
        self.sources.clone()
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Replaces the source at `index`.
    ///
    /// Returns `FieldError::IndexOutOfRange` if `index >= len()`, in which
    /// case nothing changes.
    pub fn update(&mut self, index: usize, source: Source) -> Result<(), FieldError> {
        let len = self.sources.len();
        let slot = self
            .sources
            .get_mut(index)
            .ok_or(FieldError::IndexOutOfRange { index, len })?;
        *slot = source;
        debug!("source {index} updated: {source:?}");
        Ok(())
    }

    /// Moves the source at `index`, keeping its radius and magnitude.
    pub fn move_source(&mut self, index: usize, position: Point) -> Result<(), FieldError> {
        let current = self.source(index)?;
        self.update(index, current.with_position(position))
    }

    /// Parses `text` and sets it as the magnitude of the source at `index`.
    ///
    /// The index is checked and the text parsed before anything is written,
    /// so a `FieldError::Parse` leaves the store exactly as it was.
    pub fn set_magnitude_text(&mut self, index: usize, text: &str) -> Result<(), FieldError> {
        let current = self.source(index)?;
        let magnitude = parse_magnitude(text)?;
        self.update(index, current.with_magnitude(magnitude))
    }

    /// Restores every slot to [`Source::default`], keeping the length.
    pub fn reset(&mut self) {
        self.sources.fill(Source::default());
        debug!("store reset to {} default sources", self.sources.len());
    }

    /// Sources a presentation layer should draw, with their indices.
    pub fn active(&self) -> impl Iterator<Item = (usize, &Source)> + '_ {
        self.sources
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_active())
    }

    /// Samples the field of the current sources with `sampler`.
    pub fn sample(&self, sampler: &GridSampler) -> Vec<FieldSample> {
        sampler.sample(&self.sources)
    }

    fn source(&self, index: usize) -> Result<Source, FieldError> {
        self.sources
            .get(index)
            .copied()
            .ok_or(FieldError::IndexOutOfRange {
                index,
                len: self.sources.len(),
            })
    }
}

impl Default for FieldStore {
    fn default() -> Self {
        Self::new(REFERENCE_SOURCE_COUNT)
    }
}
