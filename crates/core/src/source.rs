//! Point sources ("charges") and magnitude parsing.

use crate::error::FieldError;
use crate::geometry::Point;
use glam::DVec2;
use log::warn;
use serde::{Deserialize, Serialize};

/// Default source position.
pub const DEFAULT_POSITION: Point = DVec2::new(100.0, 100.0);
/// Default source radius. Display-only; does not affect field strength.
pub const DEFAULT_RADIUS: f64 = 10.0;

/// A point source with position, display radius, and signed magnitude.
///
/// A magnitude of zero marks the source inactive for drawing; it still takes
/// part in sampling and contributes a zero vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    #[serde(with = "crate::geometry::point_serde")]
    pub position: Point,
    pub radius: f64,
    pub magnitude: f64,
}

impl Default for Source {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            radius: DEFAULT_RADIUS,
            magnitude: 0.0,
        }
    }
}

impl Source {
    /// Creates a source from its three fields.
    pub fn new(position: Point, radius: f64, magnitude: f64) -> Self {
        Self {
            position,
            radius,
            magnitude,
        }
    }

    /// Copy of this source moved to `position`.
    pub fn with_position(self, position: Point) -> Self {
        Self { position, ..self }
    }

    /// Copy of this source with a new magnitude.
    pub fn with_magnitude(self, magnitude: f64) -> Self {
        Self { magnitude, ..self }
    }

    /// Whether a presentation layer should draw this source.
    pub fn is_active(&self) -> bool {
        self.magnitude != 0.0
    }

    /// Whether every field is a finite number.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.radius.is_finite() && self.magnitude.is_finite()
    }
}

/// Parses user-entered magnitude text.
///
/// Surrounding whitespace is ignored. Empty input, non-numeric text, and
/// non-finite values (`NaN`, `inf`) are rejected with [`FieldError::Parse`].
pub fn parse_magnitude(text: &str) -> Result<f64, FieldError> {
    let trimmed = text.trim();
    let fail = |reason: String| {
        warn!("rejected magnitude input {text:?}: {reason}");
        FieldError::Parse {
            input: text.to_string(),
            reason,
        }
    };
    if trimmed.is_empty() {
        return Err(fail("empty input".into()));
    }
    let value: f64 = trimmed.parse().map_err(|e| fail(format!("{e}")))?;
    if !value.is_finite() {
        return Err(fail("value must be finite".into()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_source_matches_session_start_values() {
        let s = Source::default();
        assert_eq!(s.position, DVec2::new(100.0, 100.0));
        assert_eq!(s.radius, 10.0);
        assert_eq!(s.magnitude, 0.0);
        assert!(!s.is_active());
    }

    #[test]
    fn with_position_preserves_other_fields() {
        let s = Source::new(DVec2::new(1.0, 2.0), 7.0, -3.0);
        let moved = s.with_position(DVec2::new(40.0, 50.0));
        assert_eq!(moved.position, DVec2::new(40.0, 50.0));
        assert_eq!(moved.radius, 7.0);
        assert_eq!(moved.magnitude, -3.0);
    }

    #[test]
    fn with_magnitude_preserves_other_fields() {
        let s = Source::new(DVec2::new(1.0, 2.0), 7.0, -3.0);
        let edited = s.with_magnitude(4.5);
        assert_eq!(edited.position, s.position);
        assert_eq!(edited.radius, 7.0);
        assert_eq!(edited.magnitude, 4.5);
        assert!(edited.is_active());
    }

    #[test]
    fn negative_magnitude_is_active() {
        assert!(Source::default().with_magnitude(-0.5).is_active());
    }

    #[test]
    fn is_finite_detects_nan_fields() {
        assert!(Source::default().is_finite());
        assert!(!Source::default().with_magnitude(f64::NAN).is_finite());
        assert!(!Source::default()
            .with_position(DVec2::new(f64::INFINITY, 0.0))
            .is_finite());
    }

    #[test]
    fn deserialize_fills_missing_fields_with_defaults() {
        let s: Source = serde_json::from_str(r#"{"magnitude": 2.0}"#).unwrap();
        assert_eq!(s.position, DEFAULT_POSITION);
        assert_eq!(s.radius, DEFAULT_RADIUS);
        assert_eq!(s.magnitude, 2.0);
    }

    #[test]
    fn position_serializes_as_xy_object() {
        let s = Source::new(DVec2::new(250.0, 75.0), 10.0, 1.0);
        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["position"], serde_json::json!({"x": 250.0, "y": 75.0}));
    }

    // -- parse_magnitude --

    #[test]
    fn parse_accepts_integers_and_decimals() {
        assert_eq!(parse_magnitude("1").unwrap(), 1.0);
        assert_eq!(parse_magnitude("-2.5").unwrap(), -2.5);
        assert_eq!(parse_magnitude("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(parse_magnitude("  3.25\n").unwrap(), 3.25);
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(
            parse_magnitude("   "),
            Err(FieldError::Parse { .. })
        ));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_magnitude("twelve").unwrap_err();
        match err {
            FieldError::Parse { input, .. } => assert_eq!(input, "twelve"),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_non_finite() {
        assert!(parse_magnitude("NaN").is_err());
        assert!(parse_magnitude("inf").is_err());
        assert!(parse_magnitude("-infinity").is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parse_never_panics(text in ".*") {
                let _ = parse_magnitude(&text);
            }

            #[test]
            fn finite_values_parse_back_exactly(v in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
                let parsed = parse_magnitude(&v.to_string()).unwrap();
                prop_assert_eq!(parsed.to_bits(), v.to_bits());
            }
        }
    }
}
