//! Error types for the LOS palette library
//!
//! The geometry and color functions are total for well-formed numeric input;
//! errors only arise from degenerate vectors, malformed color strings, and the
//! range checks performed on behalf of interactive callers.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the LOS palette library
#[derive(Error, Debug)]
pub enum LosError {
    /// A vector had zero (or non-finite) length and could not be normalized
    #[error("Degenerate vector ({x}, {y}, {z}) cannot be normalized")]
    DegenerateVector {
        /// X-component of the offending vector
        x: f64,
        /// Y-component of the offending vector
        y: f64,
        /// Z-component of the offending vector
        z: f64,
    },

    /// A color string was not of the form `#RRGGBB`
    #[error("Invalid hex color: {0:?}")]
    InvalidHexColor(String),

    /// An input angle fell outside the range accepted by the caller
    #[error("{name} {value} is outside the accepted range ({min}..={max})")]
    OutOfRange {
        /// Name of the parameter
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Lower bound, inclusive
        min: f64,
        /// Upper bound, inclusive
        max: f64,
    },

    /// A preset name did not match any entry of the preset table
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// A channel order string was neither direct nor swapped
    #[error("Invalid channel order: {0}")]
    InvalidChannelOrder(String),

    /// A look direction string was neither left nor right
    #[error("Unknown look direction: {0}")]
    UnknownLookDirection(String),

    /// Error when a file I/O operation fails
    #[error("File I/O error on {path:?}: {source}")]
    FileError {
        /// The path of the file that caused the error
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// I/O error without an associated path
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for LOS palette operations
pub type Result<T> = std::result::Result<T, LosError>;

/// Helper function to convert a std::io::Error to LosError
pub fn io_err(path: impl Into<PathBuf>, err: std::io::Error) -> LosError {
    LosError::FileError {
        path: path.into(),
        source: err,
    }
}
