//! model-export library
//!
//! Converts Wavefront OBJ triangle meshes into 24.8 fixed-point C data
//! tables compiled into the renderer's read-only data. One `.obj` input
//! yields a declaration header and a data file wired into the renderer's
//! `Model` runtime type.

pub mod codegen;
pub mod error;
pub mod limits;
pub mod material;
pub mod obj;

pub use error::ExportError;
pub use limits::ModelLimits;
pub use obj::{Face, Model};
