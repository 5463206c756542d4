use std::fmt;

use crate::texture::Shape;

/// The main error type for the brighter crate
#[derive(Debug)]
pub enum BrighterError {
    /// Output buffer shape differs from the input shape
    ShapeMismatch { expected: Shape, found: Shape },

    /// Kernel is specialized to 3 channels and got something else
    InvalidChannelCount(usize),

    /// Extent does not fit the u32 texture dimensions
    ShapeTooLarge(Shape),

    /// Backing slice length does not match the declared shape
    BufferLength { expected: usize, found: usize },

    /// No kernel registered under the requested name
    UnknownKernel(String),

    /// Kernel configuration is missing a key or holds an invalid value
    Config(String),

    /// Kernel configuration is not valid JSON
    Json(json::Error),
}

impl fmt::Display for BrighterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrighterError::ShapeMismatch { expected, found } => write!(
                f,
                "Shape mismatch: expected {}x{}x{}, found {}x{}x{}",
                expected.0, expected.1, expected.2, found.0, found.1, found.2
            ),
            BrighterError::InvalidChannelCount(planes) => {
                write!(f, "Invalid channel count: expected 3, found {}", planes)
            }
            BrighterError::ShapeTooLarge(shape) => write!(
                f,
                "Shape too large: {}x{}x{} exceeds u32 extents",
                shape.0, shape.1, shape.2
            ),
            BrighterError::BufferLength { expected, found } => write!(
                f,
                "Buffer length error: shape needs {} samples, buffer holds {}",
                expected, found
            ),
            BrighterError::UnknownKernel(name) => write!(f, "Unknown kernel: {}", name),
            BrighterError::Config(msg) => write!(f, "Config error: {}", msg),
            BrighterError::Json(e) => write!(f, "Config parse error: {}", e),
        }
    }
}

impl std::error::Error for BrighterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BrighterError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<json::Error> for BrighterError {
    fn from(err: json::Error) -> Self {
        BrighterError::Json(err)
    }
}

// Convenience type alias for Results using BrighterError
pub type Result<T = ()> = std::result::Result<T, BrighterError>;
