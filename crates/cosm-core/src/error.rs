//! Error types for Cosm

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CosmError>;

/// Main error type for Cosm
#[derive(Debug, Error)]
pub enum CosmError {
    #[error("Malformed grid: {0}")]
    MalformedGrid(#[from] GridError),

    /// A zero-length run reached the shape generator; the scanner never emits one.
    #[error("Degenerate run at row {row}, column {start}")]
    DegenerateRun { row: usize, start: usize },

    #[error("Unmappable glyph name: {0}")]
    UnmappableGlyphName(#[from] NameError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to decode bitmap {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pixel grid shape errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("row {row} has {actual} pixels, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("pixel buffer holds {actual} values, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("{width}x{height} pixels do not fit in memory")]
    TooLarge { width: usize, height: usize },

    #[error("zero dimension: {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("unexpected character {ch:?} at row {row}, column {column}")]
    InvalidCell { ch: char, row: usize, column: usize },
}

/// Glyph naming errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("empty bitmap stem")]
    Empty,

    #[error("stem {0:?} names more than one character")]
    MultipleCharacters(String),

    #[error("escaped stem {0:?} must be the marker followed by one character")]
    InvalidEscape(String),

    #[error("{0:?} has no single-character uppercase form")]
    NoUppercase(char),
}
