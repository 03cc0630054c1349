//! Core types and utilities for LAB colorization helpers
//!
//! This crate provides the fundamental types shared by the conversion and
//! normalization crates: the error type, channel and illuminant descriptions,
//! the floating-point component trait, shape validation and the normalization
//! configuration.

pub mod config;
pub mod consts;
pub mod error;
pub mod shape;
pub mod types;

pub use config::*;
pub use error::{ColorError, ColorResult};
pub use shape::*;
pub use types::*;
