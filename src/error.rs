//! Error types for the I/O boundary.
//!
//! Stage-level oddities (stray code points, mixed scripts) never raise
//! errors — the script filter handles them as deletions. Only file access
//! and decoding failures propagate, and every one of them is fatal and
//! deterministic for a given input.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreprocessError {
    /// Raw corpus or stopword file is missing.
    #[error("input file not found: {path}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid UTF-8. `valid_up_to` is the byte offset of
    /// the first invalid sequence.
    #[error("{path}: invalid UTF-8 at byte offset {valid_up_to}")]
    Decoding { path: PathBuf, valid_up_to: usize },

    /// Destination path is unwritable (permissions, unwritable parent).
    #[error("cannot write output file {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other I/O failure on an input path.
    #[error("i/o error reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PreprocessError>;
