//! Centralized error handling for nimbostat
//!
//! This module provides structured error types instead of a generic
//! `Box<dyn Error>`, so every failure carries enough context (usually the
//! offending file name) to diagnose a broken aggregation run.

use std::fmt;
use std::path::PathBuf;

/// Main error type for nimbostat operations
#[derive(Debug)]
pub enum NimbostatError {
    /// NetCDF file operation errors
    NetCDFError(netcdf::Error),

    /// I/O operation errors
    IoError(std::io::Error),

    /// Invalid glob pattern for input discovery
    PatternError(glob::PatternError),

    /// A path matched by the pattern could not be read
    GlobError(glob::GlobError),

    /// No input files matched the discovery pattern
    NoInputFiles { pattern: String },

    /// Observation variable not found in an input file
    VariableNotFound { file: PathBuf, var: String },

    /// Input grid shape disagrees with the expected global grid
    ShapeMismatch {
        file: PathBuf,
        expected: (usize, usize),
        found: Vec<usize>,
    },

    /// Stacking was attempted on an empty set of grids
    EmptyStack,

    /// Thread pool configuration error
    ThreadPoolError(String),

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Generic error for anything without a dedicated variant
    Generic(String),
}

impl fmt::Display for NimbostatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NimbostatError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            NimbostatError::IoError(e) => write!(f, "I/O error: {}", e),
            NimbostatError::PatternError(e) => write!(f, "Invalid glob pattern: {}", e),
            NimbostatError::GlobError(e) => write!(f, "Discovery error: {}", e),
            NimbostatError::NoInputFiles { pattern } => {
                write!(f, "No input files matched pattern '{}'", pattern)
            }
            NimbostatError::VariableNotFound { file, var } => {
                write!(f, "Variable '{}' not found in '{}'", var, file.display())
            }
            NimbostatError::ShapeMismatch {
                file,
                expected,
                found,
            } => write!(
                f,
                "Grid in '{}' has shape {:?}, expected ({}, {})",
                file.display(),
                found,
                expected.0,
                expected.1
            ),
            NimbostatError::EmptyStack => write!(f, "Cannot reduce an empty grid stack"),
            NimbostatError::ThreadPoolError(msg) => write!(f, "Thread pool error: {}", msg),
            NimbostatError::ArrayError(e) => write!(f, "Array error: {}", e),
            NimbostatError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for NimbostatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NimbostatError::NetCDFError(e) => Some(e),
            NimbostatError::IoError(e) => Some(e),
            NimbostatError::PatternError(e) => Some(e),
            NimbostatError::GlobError(e) => Some(e),
            NimbostatError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for NimbostatError {
    fn from(error: netcdf::Error) -> Self {
        NimbostatError::NetCDFError(error)
    }
}

impl From<std::io::Error> for NimbostatError {
    fn from(error: std::io::Error) -> Self {
        NimbostatError::IoError(error)
    }
}

impl From<glob::PatternError> for NimbostatError {
    fn from(error: glob::PatternError) -> Self {
        NimbostatError::PatternError(error)
    }
}

impl From<glob::GlobError> for NimbostatError {
    fn from(error: glob::GlobError) -> Self {
        NimbostatError::GlobError(error)
    }
}

impl From<ndarray::ShapeError> for NimbostatError {
    fn from(error: ndarray::ShapeError) -> Self {
        NimbostatError::ArrayError(error)
    }
}

impl From<String> for NimbostatError {
    fn from(error: String) -> Self {
        NimbostatError::Generic(error)
    }
}

impl From<&str> for NimbostatError {
    fn from(error: &str) -> Self {
        NimbostatError::Generic(error.to_string())
    }
}

/// Result type alias for nimbostat operations
pub type Result<T> = std::result::Result<T, NimbostatError>;
