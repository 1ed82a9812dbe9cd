//! Error types for BoxDim

use thiserror::Error;

/// Main error type for BoxDim operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot parse input: {0}")]
    Parse(String),

    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometry(String),

    #[error("Geometry contains no coordinate points")]
    EmptyInput,

    #[error("Degenerate input: {axis} axis has zero range, normalization is undefined")]
    DegenerateAxis { axis: &'static str },

    #[error("Insufficient scales for log-log fit: {available} nonzero-count scale(s), need at least 2")]
    InsufficientScales { available: usize },

    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Index out of bounds: ({row}, {col}) in grid of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Algorithm error: {0}")]
    Algorithm(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for BoxDim operations
pub type Result<T> = std::result::Result<T, Error>;
