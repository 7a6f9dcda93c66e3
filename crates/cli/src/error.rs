//! Failures of a `charge-field` invocation and the exit code each maps to.
//!
//! | code | cause |
//! |------|-------|
//! | 2    | clap rejected the arguments (before `run`) |
//! | 10   | a store edit or grid setup failed in the core |
//! | 11   | a scene file could not be read or output could not be written |
//! | 12   | the scene JSON or a `--set` / `--move` edit is malformed |
//! | 13   | samples could not be encoded as JSON |

use charge_field_core::FieldError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Field(FieldError),

    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Scene or edit text the user supplied that cannot be used as given.
    #[error("{0}")]
    Input(String),

    #[error("encoding JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Wraps a filesystem failure with what was being done and to which path.
    pub fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        CliError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Field(_) => 10,
            CliError::Io { .. } => 11,
            CliError::Input(_) => 12,
            CliError::Json(_) => 13,
        }
    }
}

// A rejected scene description is bad user input, not a failed edit.
impl From<FieldError> for CliError {
    fn from(e: FieldError) -> Self {
        match e {
            FieldError::InvalidConfig(_) => CliError::Input(e.to_string()),
            other => CliError::Field(other),
        }
    }
}
