//! Sidecar material table loading
//!
//! A mesh may ship with a `.mtl` file sharing its base name. Only the
//! diffuse color (`Kd`) of each named material is kept; everything else
//! in the file is ignored. Faces that never select a material render at
//! full intensity.

use fx_common::Rgb15;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ExportError;

/// Load the material table for an OBJ file.
///
/// Looks for the sidecar by swapping the extension to `.mtl`. An absent
/// sidecar yields an empty table. Lines are trimmed, lowercased, and
/// whitespace-tokenized; malformed or unrecognized lines are silently
/// skipped.
pub fn load_table(obj_path: &Path) -> Result<HashMap<String, Rgb15>, ExportError> {
    let mtl_path = obj_path.with_extension("mtl");
    let mut table = HashMap::new();

    if !mtl_path.exists() {
        return Ok(table);
    }

    let file = File::open(&mtl_path).map_err(|source| ExportError::Io {
        file: mtl_path.clone(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut current: Option<String> = None;
    for line in reader.lines() {
        let line = line.map_err(|source| ExportError::Io {
            file: mtl_path.clone(),
            source,
        })?;
        let line = line.trim().to_lowercase();
        let toks: Vec<&str> = line.split_whitespace().collect();

        if toks.len() == 2 && toks[0] == "newmtl" {
            let name = toks[1].to_string();
            table.insert(name.clone(), Rgb15::BLACK);
            current = Some(name);
        } else if toks.len() >= 4 && toks[0] == "kd" {
            let Some(name) = &current else { continue };
            let channels: Vec<f64> = toks[1..4].iter().filter_map(|t| t.parse().ok()).collect();
            if let [r, g, b] = channels[..] {
                table.insert(name.clone(), Rgb15::from_unit(r, g, b));
            }
        }
    }

    Ok(table)
}
