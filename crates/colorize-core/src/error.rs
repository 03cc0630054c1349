//! Error types for color conversion and normalization

use thiserror::Error;

/// Result type for colorization helpers
pub type ColorResult<T> = Result<T, ColorError>;

/// Errors that can occur while converting or normalizing image tensors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("Invalid shape {shape:?}: expected at least 2 axes with a trailing channel axis of length {expected}")]
    Shape { shape: Vec<usize>, expected: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown illuminant: {0}")]
    UnknownIlluminant(String),
}
