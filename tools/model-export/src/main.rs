//! model-export - OBJ to C data table exporter
//!
//! Run from the project root with no arguments: reads the capacity
//! ceilings from `source/model.h`, converts every `assets/models/*.obj`,
//! and writes the generated `.h`/`.c` pairs to `data-models/`.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use model_export::{codegen, limits::ModelLimits, obj::Model};

/// Renderer header carrying the capacity defines, relative to the
/// project root.
const MODEL_HEADER: &str = "source/model.h";
/// Where the authored meshes live.
const MODEL_DIR: &str = "assets/models";
/// Where generated pairs are written.
const OUT_DIR: &str = "data-models";

#[derive(Parser)]
#[command(name = "model-export")]
#[command(about = "Converts Wavefront OBJ meshes to fixed-point C data tables")]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    Cli::parse();

    let limits = ModelLimits::from_header(Path::new(MODEL_HEADER))?;
    let inputs = collect_inputs(Path::new(MODEL_DIR))?;

    let mut models = Vec::new();
    for path in &inputs {
        let model = Model::from_obj(path, &limits)
            .with_context(|| format!("failed to convert {}", path.display()))?;
        models.push(model);
    }

    let mut outputs: Vec<PathBuf> = Vec::new();
    let mut written = 0;
    if !models.is_empty() {
        fs::create_dir_all(OUT_DIR)
            .with_context(|| format!("failed to create {OUT_DIR}"))?;
    }
    for model in &models {
        let (header_name, data_name) = codegen::artifact_names(model);
        let header_path = Path::new(OUT_DIR).join(header_name);
        let data_path = Path::new(OUT_DIR).join(data_name);

        fs::write(&header_path, codegen::header_artifact(model)?)
            .with_context(|| format!("failed to write {}", header_path.display()))?;
        fs::write(&data_path, codegen::data_artifact(model)?)
            .with_context(|| format!("failed to write {}", data_path.display()))?;

        outputs.push(header_path);
        outputs.push(data_path);
        written += 1;
    }

    if models.is_empty() {
        tracing::info!("Nothing to be done.");
    } else if written >= models.len() {
        tracing::info!("In: {}", join(&inputs));
        tracing::info!("Out: {}", join(&outputs));
        tracing::info!("Converted all models");
    } else {
        // Unreachable while every conversion failure aborts the run
        // above; kept so a future soft-failure path cannot fall through
        // silently.
        tracing::warn!(
            "Some models could not be converted, but no specific error was caught. This is a bug."
        );
    }

    Ok(())
}

/// Enumerate `*.obj` files, sorted by path for deterministic ordering.
/// A missing input directory is treated as having nothing to convert.
fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut inputs: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to read {}", dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("obj"))
        .collect();
    inputs.sort();
    Ok(inputs)
}

fn join(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
