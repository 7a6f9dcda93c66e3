//! Rendering sample sets as text or JSON.

use crate::error::CliError;
use charge_field_core::FieldSample;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// One line per sample: `x y dx dy`, in sampling order.
pub fn format_table(samples: &[FieldSample]) -> String {
    let mut out = String::with_capacity(samples.len() * 48);
    for s in samples {
        let field = s.field();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{} {} {:.6e} {:.6e}", s.point.x, s.point.y, field.x, field.y);
    }
    out
}

/// Pretty-printed JSON array of samples.
pub fn to_json(samples: &[FieldSample]) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(samples)?)
}

/// Writes the JSON array of samples to `path`.
pub fn write_json(samples: &[FieldSample], path: &Path) -> Result<(), CliError> {
    let json = to_json(samples)?;
    fs::write(path, json).map_err(|e| CliError::io("writing", path, e))
}
