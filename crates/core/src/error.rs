//! Error types for the charge-field core.

use thiserror::Error;

/// Errors produced by store mutations, sampling setup, and configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// Magnitude text could not be read as a finite number.
    #[error("invalid magnitude '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// A store index was outside the source collection.
    #[error("source index {index} out of range for {len} sources")]
    IndexOutOfRange { index: usize, len: usize },

    /// The grid step was zero.
    #[error("invalid grid step: step must be non-zero")]
    InvalidStep,

    /// A scene configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
