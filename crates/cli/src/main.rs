#![deny(unsafe_code)]
//! CLI binary for the charge-field system.
//!
//! Subcommands:
//! - `sample` — sample the field over the scene's grid
//! - `probe <x> <y>` — resultant field arrow at one point
//! - `defaults` — print the reference scene as JSON

mod error;
mod output;
mod scene;

use charge_field_core::{FieldSample, FieldStore, GridSampler, SceneConfig};
use clap::{Parser, Subcommand};
use error::CliError;
use glam::DVec2;
use log::info;
use scene::SceneArgs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "charge-field", about = "Charge field sampler")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sample the field on the scene grid.
    Sample {
        #[command(flatten)]
        scene: SceneArgs,

        /// Write the JSON sample array to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Split the grid across worker threads.
        #[arg(long)]
        parallel: bool,
    },
    /// Print the resultant field arrow at a single point.
    Probe {
        /// Sample point x.
        #[arg(allow_negative_numbers = true)]
        x: f64,

        /// Sample point y.
        #[arg(allow_negative_numbers = true)]
        y: f64,

        #[command(flatten)]
        scene: SceneArgs,
    },
    /// Print the reference scene configuration.
    Defaults,
}

#[cfg(feature = "parallel")]
fn sample_grid(sampler: &GridSampler, store: &FieldStore, parallel: bool) -> Vec<FieldSample> {
    if parallel {
        sampler.sample_par(store.get())
    } else {
        store.sample(sampler)
    }
}

#[cfg(not(feature = "parallel"))]
fn sample_grid(sampler: &GridSampler, store: &FieldStore, parallel: bool) -> Vec<FieldSample> {
    if parallel {
        log::warn!("built without the `parallel` feature; sampling sequentially");
    }
    store.sample(sampler)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Defaults => {
            println!("{}", serde_json::to_string_pretty(&SceneConfig::default())?);
        }
        Command::Sample {
            scene,
            output: out_path,
            parallel,
        } => {
            let (sampler, store) = scene.build()?;
            let samples = sample_grid(&sampler, &store, parallel);
            info!("sampled {} points", samples.len());

            if let Some(path) = &out_path {
                output::write_json(&samples, path)?;
            }

            if cli.json {
                if out_path.is_none() {
                    println!("{}", output::to_json(&samples)?);
                } else {
                    let info = serde_json::json!({
                        "samples": samples.len(),
                        "sources": store.len(),
                        "active": store.active().count(),
                        "output": out_path.as_ref().map(|p| p.display().to_string()),
                    });
                    println!("{}", serde_json::to_string_pretty(&info)?);
                }
            } else {
                match &out_path {
                    Some(path) => eprintln!(
                        "sampled {} points from {} sources -> {}",
                        samples.len(),
                        store.len(),
                        path.display()
                    ),
                    None => print!("{}", output::format_table(&samples)),
                }
            }
        }
        Command::Probe { x, y, scene } => {
            let (sampler, store) = scene.build()?;
            let point = DVec2::new(x, y);
            let resultant = sampler.sample_at(point, store.get());
            let field = resultant.delta();
            if cli.json {
                let info = serde_json::json!({
                    "point": {"x": point.x, "y": point.y},
                    "resultant": resultant,
                    "field": {"x": field.x, "y": field.y},
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("({x}, {y}) -> ({:.6e}, {:.6e})", field.x, field.y);
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
