use std::path::PathBuf;
use thiserror::Error;

/// The main error type for gpxrte operations.
///
/// Every variant is fatal to the command that raised it; nothing here is
/// retried, and no output file is written once a validation variant fires.
#[derive(Debug, Error)]
pub enum GpxrteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no loadable GPX document at {path}: {message}")]
    NoDocument { path: PathBuf, message: String },

    #[error("document {path} contains no route segments")]
    NoSegments { path: PathBuf },

    #[error("segment index {index} out of range (document has {count} segment(s))")]
    IllegalSegmentIndex { index: usize, count: usize },

    #[error("segment {index} contains no route points")]
    NoPoints { index: usize },

    #[error("segment {index} has no name element to rewrite")]
    NoName { index: usize },

    #[error("resolved point range is degenerate: begin {begin} is not before end {end}")]
    InvalidRange { begin: usize, end: usize },
}
