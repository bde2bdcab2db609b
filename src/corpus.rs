//! Corpus file I/O.
//!
//! Reading decodes strictly as UTF-8 and reports the byte offset of the
//! first invalid sequence; writing creates missing parent directories and
//! never silently drops output.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{PreprocessError, Result};
use crate::pipeline::artifacts::CleanedCorpus;

/// Read a file and decode it as UTF-8.
///
/// A missing file maps to [`PreprocessError::InputNotFound`]; invalid UTF-8
/// maps to [`PreprocessError::Decoding`] with the offending byte offset.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PreprocessError::InputNotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => PreprocessError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    String::from_utf8(bytes).map_err(|err| PreprocessError::Decoding {
        path: path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })
}

/// Write a cleaned corpus to `path`, one sentence per line with a trailing
/// newline at end of file. Missing parent directories are created.
pub fn write_cleaned(path: &Path, corpus: &CleanedCorpus) -> Result<()> {
    let wrap = |source| PreprocessError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(wrap)?;
        }
    }
    fs::write(path, corpus.to_text()).map_err(wrap)
}
