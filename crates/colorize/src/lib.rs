//! # colorize - LAB helpers for image colorization models
//!
//! This crate provides the numeric glue between RGB images and the LAB
//! tensors a colorization network consumes and produces.
//!
//! ## Quick Start
//!
//! ```
//! use colorize::{denormalize_lab, lab_to_rgb, normalize_lab, rgb_to_lab};
//! use ndarray::Array3;
//!
//! let rgb = Array3::<f64>::from_elem((4, 4, 3), 0.5);
//!
//! // RGB -> LAB -> network range
//! let lab = rgb_to_lab(&rgb).unwrap();
//! let lab_norm = normalize_lab(&lab).unwrap();
//!
//! // network range -> LAB -> RGB
//! let lab_back = denormalize_lab(&lab_norm).unwrap();
//! let rgb_back = lab_to_rgb(&lab_back).unwrap();
//! assert_eq!(rgb_back.shape(), &[4, 4, 3]);
//! ```
//!
//! ## Tensors
//!
//! Every operation takes a channel-last `ndarray` tensor with at least two
//! axes and a trailing axis of length 3, and returns a fresh tensor of the
//! same shape. Anything else fails with [`ColorError::Shape`].
//!
//! ## Ranges
//!
//! - RGB: `[0, 1]` per channel
//! - LAB: L in `[0, 100]`, a and b in `[-128, 127]`
//! - normalized LAB: L in `[0, 1]`, a and b in `[-1, 127/128]`
//!
//! Normalization never clamps; out-of-range values are rescaled as-is.

// Re-export core types
pub use colorize_core::consts;
pub use colorize_core::{
    check_channels_last, Channel, ColorError, ColorResult, Component, Illuminant, LabRanges,
};

// Re-export conversion and normalization
pub use colorize_lab::{
    denormalize_lab, lab_pixel_to_rgb, lab_to_rgb, lab_to_rgb8, normalize_lab, rgb8_to_lab,
    rgb_pixel_to_lab, rgb_to_lab, CieLabConverter, ColorSpaceConverter, LabNormalizer,
    PARALLEL_THRESHOLD,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
