//! Scene configuration: domain, grid step, and initial sources.
//!
//! A [`SceneConfig`] is read from JSON (every field optional) and turned into
//! a [`GridSampler`] and a [`FieldStore`]. Missing fields take the reference
//! values: a 1450 x 850 domain, step 50, and five default sources.

use crate::error::FieldError;
use crate::sampler::{Domain, GridSampler, REFERENCE_HEIGHT, REFERENCE_STEP, REFERENCE_WIDTH};
use crate::source::Source;
use crate::store::{FieldStore, REFERENCE_SOURCE_COUNT};
use serde::{Deserialize, Serialize};

/// Domain, grid step, and initial sources for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub width: usize,
    pub height: usize,
    pub step: usize,
    pub sources: Vec<Source>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: REFERENCE_WIDTH,
            height: REFERENCE_HEIGHT,
            step: REFERENCE_STEP,
            sources: vec![Source::default(); REFERENCE_SOURCE_COUNT],
        }
    }
}

impl SceneConfig {
    /// Parses and validates a JSON scene description.
    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        let config: SceneConfig =
            serde_json::from_str(json).map_err(|e| FieldError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks for a usable grid (non-zero step, sample count fits in
    /// `usize`) and finite source fields.
    pub fn validate(&self) -> Result<(), FieldError> {
        self.sampler()?;
        if let Some(index) = self.sources.iter().position(|s| !s.is_finite()) {
            return Err(FieldError::InvalidConfig(format!(
                "source {index} has a non-finite field"
            )));
        }
        Ok(())
    }

    pub fn domain(&self) -> Domain {
        Domain::new(self.width, self.height)
    }

    /// Sampler for this scene's domain and step.
    pub fn sampler(&self) -> Result<GridSampler, FieldError> {
        GridSampler::new(self.domain(), self.step)
    }

    /// Store seeded with this scene's sources.
    pub fn store(&self) -> FieldStore {
        FieldStore::from_sources(self.sources.clone())
    }
}
