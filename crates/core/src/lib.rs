#![deny(unsafe_code)]
//! Core types for the charge-field system.
//!
//! Provides `Source` and magnitude parsing, the `FieldLaw` trait with the
//! rotated inverse-square charge law, `Vector` superposition, the
//! `GridSampler`, the `FieldStore` holding a session's sources, and
//! `SceneConfig` for loading scenes from JSON.

pub mod config;
pub mod error;
pub mod geometry;
pub mod law;
pub mod sampler;
pub mod source;
pub mod store;

pub use config::SceneConfig;
pub use error::FieldError;
pub use geometry::{superpose, Point, Vector};
pub use law::{contribution, FieldLaw, RotatedInverseSquare};
pub use sampler::{Domain, FieldSample, GridSampler};
pub use source::{parse_magnitude, Source};
pub use store::FieldStore;
