//! Scene loading and command-line source edits.
//!
//! Edits arrive as `INDEX=VALUE` (magnitude text) and `INDEX=X,Y` (position)
//! strings. Magnitude text goes through the store's own parser so a bad
//! number surfaces as a field error, not an input error.

use crate::error::CliError;
use charge_field_core::{FieldStore, GridSampler, Point, SceneConfig};
use clap::Args;
use glam::DVec2;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Scene source and edits shared by the sampling subcommands.
#[derive(Args, Debug, Default)]
pub struct SceneArgs {
    /// Scene JSON file (width, height, step, sources).
    #[arg(long, conflicts_with = "scene_json")]
    pub scene: Option<PathBuf>,

    /// Scene as an inline JSON string.
    #[arg(long)]
    pub scene_json: Option<String>,

    /// Set a source magnitude from text, e.g. `--set 0=1.5` (repeatable).
    #[arg(long = "set", value_name = "INDEX=VALUE", allow_hyphen_values = true)]
    pub set: Vec<String>,

    /// Move a source, e.g. `--move 0=300,200` (repeatable).
    #[arg(long = "move", value_name = "INDEX=X,Y", allow_hyphen_values = true)]
    pub moves: Vec<String>,
}

impl SceneArgs {
    /// Loads the scene and applies magnitude edits, then moves, in argument order.
    pub fn build(&self) -> Result<(GridSampler, FieldStore), CliError> {
        let config = self.load()?;
        let sampler = config.sampler()?;
        let mut store = config.store();
        for arg in &self.set {
            let (index, text) = split_index(arg, "--set")?;
            store.set_magnitude_text(index, text)?;
        }
        for arg in &self.moves {
            let (index, position) = parse_move(arg)?;
            store.move_source(index, position)?;
        }
        info!(
            "scene ready: {} sources ({} active), {} grid points",
            store.len(),
            store.active().count(),
            sampler.len()
        );
        Ok((sampler, store))
    }

    fn load(&self) -> Result<SceneConfig, CliError> {
        if let Some(path) = &self.scene {
            let json = fs::read_to_string(path).map_err(|e| CliError::io("reading", path, e))?;
            return Ok(SceneConfig::from_json(&json)?);
        }
        if let Some(json) = &self.scene_json {
            return Ok(SceneConfig::from_json(json)?);
        }
        Ok(SceneConfig::default())
    }
}

/// Splits `INDEX=REST` into a parsed index and the untouched remainder.
fn split_index<'a>(arg: &'a str, flag: &str) -> Result<(usize, &'a str), CliError> {
    let (index, rest) = arg
        .split_once('=')
        .ok_or_else(|| CliError::Input(format!("{flag} expects INDEX=..., got '{arg}'")))?;
    let index = index
        .trim()
        .parse()
        .map_err(|_| CliError::Input(format!("{flag}: invalid index '{index}'")))?;
    Ok((index, rest))
}

/// Parses `INDEX=X,Y` into an index and a position.
fn parse_move(arg: &str) -> Result<(usize, Point), CliError> {
    let (index, rest) = split_index(arg, "--move")?;
    let (x, y) = rest
        .split_once(',')
        .ok_or_else(|| CliError::Input(format!("--move expects X,Y, got '{rest}'")))?;
    let coord = |s: &str| {
        s.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CliError::Input(format!("--move: invalid coordinate '{s}'")))
    };
    Ok((index, DVec2::new(coord(x)?, coord(y)?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_scene_is_reference() {
        let (sampler, store) = SceneArgs::default().build().unwrap();
        assert_eq!(sampler.len(), 493);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn set_and_move_apply_through_store() {
        let args = SceneArgs {
            set: vec!["1=2.5".into(), "3=-1".into()],
            moves: vec!["1=300,-40".into()],
            ..Default::default()
        };
        let (_, store) = args.build().unwrap();
        let s = store.get();
        assert_eq!(s[1].magnitude, 2.5);
        assert_eq!(s[1].position, DVec2::new(300.0, -40.0));
        assert_eq!(s[3].magnitude, -1.0);
        assert_eq!(s[3].position, DVec2::new(100.0, 100.0));
    }

    #[test]
    fn bad_magnitude_is_field_error() {
        let args = SceneArgs {
            set: vec!["0=abc".into()],
            ..Default::default()
        };
        let err = args.build().unwrap_err();
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn out_of_range_index_is_field_error() {
        let args = SceneArgs {
            moves: vec!["7=1,1".into()],
            ..Default::default()
        };
        assert_eq!(args.build().unwrap_err().exit_code(), 10);
    }

    #[test]
    fn malformed_edits_are_input_errors() {
        for (set, moves) in [
            (vec!["no-equals".to_string()], vec![]),
            (vec!["x=1".to_string()], vec![]),
            (vec![], vec!["0=5".to_string()]),
            (vec![], vec!["0=a,b".to_string()]),
        ] {
            let args = SceneArgs {
                set,
                moves,
                ..Default::default()
            };
            assert_eq!(args.build().unwrap_err().exit_code(), 12);
        }
    }

    #[test]
    fn inline_scene_json_is_used() {
        let args = SceneArgs {
            scene_json: Some(r#"{"width": 100, "height": 100, "step": 50, "sources": []}"#.into()),
            ..Default::default()
        };
        let (sampler, store) = args.build().unwrap();
        assert_eq!(sampler.len(), 4);
        assert!(store.is_empty());
    }

    #[test]
    fn scene_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        let mut f = fs::File::create(&path).unwrap();
        write!(f, r#"{{"step": 25, "sources": [{{"magnitude": 3.0}}]}}"#).unwrap();
        let args = SceneArgs {
            scene: Some(path),
            ..Default::default()
        };
        let (sampler, store) = args.build().unwrap();
        assert_eq!(sampler.step(), 25);
        assert_eq!(store.get()[0].magnitude, 3.0);
    }

    #[test]
    fn missing_scene_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = SceneArgs {
            scene: Some(dir.path().join("nope.json")),
            ..Default::default()
        };
        let err = args.build().unwrap_err();
        assert_eq!(err.exit_code(), 11);
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn zero_step_scene_is_field_error() {
        let args = SceneArgs {
            scene_json: Some(r#"{"step": 0}"#.into()),
            ..Default::default()
        };
        assert_eq!(args.build().unwrap_err().exit_code(), 10);
    }

    #[test]
    fn malformed_scene_json_is_input_error() {
        let args = SceneArgs {
            scene_json: Some("{\"step\": 25,".into()),
            ..Default::default()
        };
        assert_eq!(args.build().unwrap_err().exit_code(), 12);
    }

    #[test]
    fn oversized_scene_grid_is_input_error() {
        let args = SceneArgs {
            scene_json: Some(format!(
                r#"{{"width": {max}, "height": {max}, "step": 1}}"#,
                max = usize::MAX
            )),
            ..Default::default()
        };
        let err = args.build().unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("too many samples"));
    }

    #[test]
    fn array_position_in_scene_is_input_error() {
        let args = SceneArgs {
            scene_json: Some(r#"{"sources": [{"position": [1.0, 2.0]}]}"#.into()),
            ..Default::default()
        };
        assert_eq!(args.build().unwrap_err().exit_code(), 12);
    }
}
