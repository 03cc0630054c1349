//! Color space transformations for image colorization
//!
//! This crate implements:
//! - sRGB <-> Linear RGB transfer functions
//! - RGB <-> CIE L*a*b* conversion, per pixel and over channel-last arrays
//! - LAB channel normalization for neural network inputs and outputs

pub mod converter;
pub mod lab;
pub mod normalize;
pub mod srgb;

pub use converter::*;
pub use lab::*;
pub use normalize::*;
pub use srgb::*;
