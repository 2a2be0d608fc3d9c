//! C source generation for parsed models
//!
//! Each model becomes a declaration header and a data file. The data
//! arrays live in `EWRAM_DATA` and are wired into the renderer's generic
//! `Model` handle by a generated init function. Output depends only on
//! the model, so re-exporting an unchanged mesh is byte-identical.

use anyhow::{bail, Result};
use std::fmt::Write;

use crate::obj::Model;

/// Names of the two artifacts generated for a model.
pub fn artifact_names(model: &Model) -> (String, String) {
    (
        format!("{}Model.h", model.name),
        format!("{}Model.c", model.name),
    )
}

/// Generate the declaration header: include guard, the extern model
/// handle, and the init prototype.
pub fn header_artifact(model: &Model) -> Result<String> {
    let name = &model.name;
    let mut out = String::new();

    writeln!(out, "#ifndef {name}Model_H")?;
    writeln!(out, "#define {name}Model_H")?;
    writeln!(out, "#include \"../source/model.h\"")?;
    writeln!(out)?;
    writeln!(out, "extern Model {name}Model;")?;
    writeln!(out, "void {name}ModelInit(void);")?;
    writeln!(out)?;
    writeln!(out, "#endif")?;

    Ok(out)
}

/// Generate the data file: vertex array, face array with colors packed
/// and normals inlined by value, and the init function.
pub fn data_artifact(model: &Model) -> Result<String> {
    let name = &model.name;
    let num_verts = model.verts.len();
    let num_faces = model.faces.len();
    let mut out = String::new();

    writeln!(out, "#include \"{name}Model.h\"")?;
    writeln!(out)?;
    writeln!(out, "Model {name}Model;")?;
    writeln!(out)?;

    write!(out, "EWRAM_DATA Vec3 {name}Verts[{num_verts}] = {{")?;
    for vert in &model.verts {
        write!(out, "{{.x={},.y={},.z={}}}, ", vert.x, vert.y, vert.z)?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;

    write!(out, "EWRAM_DATA Face {name}Faces[{num_faces}] = {{")?;
    for (i, face) in model.faces.iter().enumerate() {
        // Normal indices are not range-checked at parse time (the file
        // may reference a normal declared later), so resolve them here.
        let Some(normal) = model.normals.get(face.normal_index) else {
            bail!(
                "face {} references normal {} but the model has only {} normals",
                i + 1,
                face.normal_index + 1,
                model.normals.len()
            );
        };
        write!(
            out,
            "{{.vertexIndex = {{{}, {}, {}}}, .color = {}, .normal={{{}, {}, {}}}, .type=TriangleFace}}, ",
            face.vertex_index[0],
            face.vertex_index[1],
            face.vertex_index[2],
            face.color.pack(),
            normal.x,
            normal.y,
            normal.z,
        )?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;

    writeln!(
        out,
        "void {name}ModelInit(void) {{ {name}Model = modelNew({name}Verts, {name}Faces, {num_verts}, {num_faces}); }}"
    )?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obj::Face;
    use fx_common::{FxVec3, Rgb15};

    fn triangle() -> Model {
        Model {
            name: "tri".to_string(),
            verts: vec![
                FxVec3::new(256, 512, 768),
                FxVec3::new(0, 0, 0),
                FxVec3::new(256, 0, 0),
            ],
            normals: vec![FxVec3::new(0, 0, 256)],
            faces: vec![Face {
                vertex_index: [0, 1, 2],
                normal_index: 0,
                color: Rgb15::WHITE,
            }],
        }
    }

    #[test]
    fn test_header_shape() {
        let header = header_artifact(&triangle()).unwrap();
        assert_eq!(
            header,
            "#ifndef triModel_H\n\
             #define triModel_H\n\
             #include \"../source/model.h\"\n\
             \n\
             extern Model triModel;\n\
             void triModelInit(void);\n\
             \n\
             #endif\n"
        );
    }

    #[test]
    fn test_data_shape() {
        let data = data_artifact(&triangle()).unwrap();
        assert!(data.starts_with("#include \"triModel.h\"\n"));
        assert!(data.contains("Model triModel;\n"));
        assert!(data.contains(
            "EWRAM_DATA Vec3 triVerts[3] = {{.x=256,.y=512,.z=768}, {.x=0,.y=0,.z=0}, {.x=256,.y=0,.z=0}, };"
        ));
        assert!(data.contains(
            "EWRAM_DATA Face triFaces[1] = {{.vertexIndex = {0, 1, 2}, .color = 32767, .normal={0, 0, 256}, .type=TriangleFace}, };"
        ));
        assert!(data.contains(
            "void triModelInit(void) { triModel = modelNew(triVerts, triFaces, 3, 1); }"
        ));
    }

    #[test]
    fn test_emission_is_deterministic() {
        let model = triangle();
        assert_eq!(
            header_artifact(&model).unwrap(),
            header_artifact(&model).unwrap()
        );
        assert_eq!(
            data_artifact(&model).unwrap(),
            data_artifact(&model).unwrap()
        );
    }

    #[test]
    fn test_artifact_names() {
        let (header, data) = artifact_names(&triangle());
        assert_eq!(header, "triModel.h");
        assert_eq!(data, "triModel.c");
    }

    #[test]
    fn test_unresolvable_normal_fails() {
        let mut model = triangle();
        model.faces[0].normal_index = 7;
        let err = data_artifact(&model).unwrap_err();
        assert!(err.to_string().contains("references normal 8"));
    }
}
