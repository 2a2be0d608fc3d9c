//! Wavefront OBJ parsing into the renderer's model shape
//!
//! Single pass, line oriented. Only triangles are accepted; the renderer
//! has no triangulation step, so quads and n-gons must be split before
//! export. Every face must reference a vertex normal, since the renderer
//! lights faces with the normal baked into the face table.

use fx_common::{to_fx8, FxVec3, Rgb15};
use regex::Regex;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ExportError;
use crate::limits::ModelLimits;
use crate::material;

/// One triangle: three 0-based vertex indices, one 0-based normal index,
/// and the color snapshotted from the material active at parse time.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    pub vertex_index: [usize; 3],
    pub normal_index: usize,
    pub color: Rgb15,
}

/// A fully parsed mesh, ready for code generation.
///
/// Grows during one linear pass over the input and is read-only
/// afterwards. Indices are 0-based internally; the file format is
/// 1-based.
#[derive(Debug)]
pub struct Model {
    /// Sanitized identifier derived from the input file stem.
    pub name: String,
    pub verts: Vec<FxVec3>,
    pub normals: Vec<FxVec3>,
    pub faces: Vec<Face>,
}

impl Model {
    /// Parse one OBJ file (and its optional `.mtl` sidecar) and enforce
    /// the renderer's capacity ceilings on the result.
    pub fn from_obj(path: &Path, limits: &ModelLimits) -> Result<Self, ExportError> {
        let name = sanitize_name(path)?;
        let materials = material::load_table(path)?;

        let file = File::open(path).map_err(|source| ExportError::Io {
            file: path.to_path_buf(),
            source,
        })?;
        let model = parse_obj(BufReader::new(file), path, name, &materials)?;

        if model.verts.len() > limits.max_verts {
            return Err(ExportError::CapacityExceeded {
                element: "vertices",
                actual: model.verts.len(),
                allowed: limits.max_verts,
            });
        }
        if model.faces.len() > limits.max_faces {
            return Err(ExportError::CapacityExceeded {
                element: "faces",
                actual: model.faces.len(),
                allowed: limits.max_faces,
            });
        }

        Ok(model)
    }
}

/// Derive the C identifier for a model from its file stem by stripping
/// every non-word character.
fn sanitize_name(path: &Path) -> Result<String, ExportError> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = Regex::new(r"\W")
        .expect("static pattern")
        .replace_all(&stem, "")
        .into_owned();
    if name.is_empty() {
        return Err(ExportError::InvalidName(stem));
    }
    Ok(name)
}

fn parse_obj(
    reader: impl BufRead,
    path: &Path,
    name: String,
    materials: &HashMap<String, Rgb15>,
) -> Result<Model, ExportError> {
    let mut verts: Vec<FxVec3> = Vec::new();
    let mut normals: Vec<FxVec3> = Vec::new();
    let mut faces: Vec<Face> = Vec::new();
    let mut current_mtl = String::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.map_err(|source| ExportError::Io {
            file: path.to_path_buf(),
            source,
        })?;
        let line = line.trim().to_lowercase();
        let toks: Vec<&str> = line.split_whitespace().collect();
        let Some(&first) = toks.first() else {
            continue;
        };
        if first.starts_with('#') {
            continue;
        }

        match first {
            // Shading groups and named objects are not treated separately.
            "s" | "o" => {}

            "usemtl" => {
                current_mtl = toks[1..].concat();
            }

            "v" => {
                verts.push(parse_triplet(&toks, path, line_num, "vertex")?);
            }

            "vn" => {
                normals.push(parse_triplet(&toks, path, line_num, "vertex-normal")?);
            }

            "f" => {
                // Faces with no material selected render at full
                // intensity; a selected name the table does not have is
                // an error, not a fallback.
                let color = if current_mtl.is_empty() {
                    Rgb15::WHITE
                } else {
                    *materials.get(&current_mtl).ok_or_else(|| {
                        ExportError::UnknownMaterial {
                            file: path.to_path_buf(),
                            line: line_num,
                            name: current_mtl.clone(),
                        }
                    })?
                };
                faces.push(parse_face(&toks, path, line_num, verts.len(), color)?);
            }

            // Anything else (vt, g, mtllib, ...) is silently skipped.
            _ => {}
        }
    }

    Ok(Model {
        name,
        verts,
        normals,
        faces,
    })
}

/// Parse the three coordinates of a `v` or `vn` statement into 24.8
/// fixed point.
fn parse_triplet(
    toks: &[&str],
    path: &Path,
    line: usize,
    element: &'static str,
) -> Result<FxVec3, ExportError> {
    if toks.len() != 4 {
        return Err(ExportError::TokenCount {
            file: path.to_path_buf(),
            line,
            element,
            found: toks.len() - 1,
        });
    }

    let mut fixed = [0i32; 3];
    for (i, tok) in toks[1..].iter().enumerate() {
        let value: f64 = tok.parse().map_err(|_| ExportError::NumericFormat {
            file: path.to_path_buf(),
            line,
            element,
        })?;
        fixed[i] = to_fx8(value).ok_or_else(|| ExportError::Fx8Overflow {
            file: path.to_path_buf(),
            line,
            value,
        })?;
    }

    Ok(FxVec3::new(fixed[0], fixed[1], fixed[2]))
}

/// Parse an `f` statement. Tokens take the forms `i`, `i//n`, and
/// `i/t/n`, all 1-based.
fn parse_face(
    toks: &[&str],
    path: &Path,
    line: usize,
    verts_so_far: usize,
    color: Rgb15,
) -> Result<Face, ExportError> {
    if toks.len() != 4 {
        return Err(ExportError::TokenCount {
            file: path.to_path_buf(),
            line,
            element: "face",
            found: toks.len() - 1,
        });
    }

    let mut vertex_index = [0usize; 3];
    let mut normal_index: Option<usize> = None;

    for (i, tok) in toks[1..].iter().enumerate() {
        let fields: Vec<&str> = tok.split('/').collect();

        let raw: i64 = fields[0].parse().map_err(|_| ExportError::NumericFormat {
            file: path.to_path_buf(),
            line,
            element: "face index",
        })?;
        // Deliberately `>` rather than `>=`: the 0-based index exactly
        // one past the vertices declared so far is accepted. Known
        // defect, preserved as-is.
        if raw < 1 || raw as usize - 1 > verts_so_far {
            return Err(ExportError::IndexRange {
                file: path.to_path_buf(),
                line,
                element: "vertex",
            });
        }
        vertex_index[i] = raw as usize - 1;

        // Third subfield, when present, names the face normal. The last
        // one seen among the three tokens wins.
        if fields.len() == 3 {
            let raw: i64 = fields[2].parse().map_err(|_| ExportError::NumericFormat {
                file: path.to_path_buf(),
                line,
                element: "face index",
            })?;
            if raw < 1 {
                return Err(ExportError::IndexRange {
                    file: path.to_path_buf(),
                    line,
                    element: "normal",
                });
            }
            normal_index = Some((raw - 1) as usize);
        }
    }

    let Some(normal_index) = normal_index else {
        return Err(ExportError::MissingNormal {
            file: path.to_path_buf(),
            line,
        });
    };

    Ok(Face {
        vertex_index,
        normal_index,
        color,
    })
}
