//! Typed failure conditions for the export pipeline.
//!
//! Every variant that arises while scanning a file carries the path and
//! the 1-based line number; the first error aborts the affected run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The input file stem contained no word characters at all.
    #[error("'{0}' is not a valid model name; it must sanitize to a usable C identifier")]
    InvalidName(String),

    /// A statement had the wrong number of values.
    #[error("problem in {} on line {line}: {element} has {found} values, but must have exactly 3", .file.display())]
    TokenCount {
        file: PathBuf,
        line: usize,
        element: &'static str,
        found: usize,
    },

    /// A value that should be numeric did not parse.
    #[error("problem in {} on line {line}: {element} contains a non-numeric value", .file.display())]
    NumericFormat {
        file: PathBuf,
        line: usize,
        element: &'static str,
    },

    /// A coordinate failed the conservative 24.8 magnitude check.
    #[error("problem in {} on line {line}: value {value} overflows the 24.8 signed fixed-point format", .file.display())]
    Fx8Overflow {
        file: PathBuf,
        line: usize,
        value: f64,
    },

    /// A face referenced an index outside the accepted range.
    #[error("problem in {} on line {line}: {element} index out of range", .file.display())]
    IndexRange {
        file: PathBuf,
        line: usize,
        element: &'static str,
    },

    /// A face selected a material name the sidecar table does not have.
    #[error("problem in {} on line {line}: face uses unknown material '{name}'", .file.display())]
    UnknownMaterial {
        file: PathBuf,
        line: usize,
        name: String,
    },

    /// A face carried no normal reference on any of its three tokens.
    #[error("problem in {} on line {line}: face has no normal", .file.display())]
    MissingNormal { file: PathBuf, line: usize },

    /// The parsed model exceeds a capacity ceiling baked into the renderer.
    #[error("model has {actual} {element} while the limit is {allowed}")]
    CapacityExceeded {
        element: &'static str,
        actual: usize,
        allowed: usize,
    },

    /// The renderer's configuration header is missing a required define.
    #[error("{} does not define {symbol}", .file.display())]
    MissingDefine {
        file: PathBuf,
        symbol: &'static str,
    },

    #[error("failed to read {}", .file.display())]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
