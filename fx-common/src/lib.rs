//! fx-common - numeric vocabulary shared by the asset pipeline
//!
//! The target renderer does all of its arithmetic in 24.8 signed fixed
//! point and stores face colors as packed 15-bit RGB. This crate holds the
//! conversions from authoring-time floats into those representations.

pub mod color;
pub mod fixed;

pub use color::Rgb15;
pub use fixed::{to_fx8, FxVec3, FX8_MAX_MAGNITUDE};
