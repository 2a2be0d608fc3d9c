//! Capacity ceilings recovered from the renderer's configuration
//!
//! The renderer statically sizes its per-model buffers with
//! `MAX_MODEL_VERTS` and `MAX_MODEL_FACES` in `source/model.h`. The
//! exporter reads those defines back out of the C header so a mesh that
//! would blow the buffers fails at export time instead of on hardware.

use regex::Regex;
use std::path::Path;

use crate::error::ExportError;

/// Per-model capacity ceilings baked into the renderer build.
#[derive(Debug, Clone, Copy)]
pub struct ModelLimits {
    pub max_verts: usize,
    pub max_faces: usize,
}

impl ModelLimits {
    /// Recover both ceilings from the renderer's model header.
    pub fn from_header(path: &Path) -> Result<Self, ExportError> {
        let code = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
            file: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            max_verts: find_define(&code, path, "MAX_MODEL_VERTS")?,
            max_faces: find_define(&code, path, "MAX_MODEL_FACES")?,
        })
    }
}

fn find_define(code: &str, file: &Path, symbol: &'static str) -> Result<usize, ExportError> {
    let pattern =
        Regex::new(&format!(r"#define\s+{symbol}\s+(\d+)")).expect("static pattern");
    pattern
        .captures(code)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or(ExportError::MissingDefine {
            file: file.to_path_buf(),
            symbol,
        })
}
