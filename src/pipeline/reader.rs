//! Safe file reading with classified failure modes.
//!
//! This module defines the `ReadError` enum and the `read_file` function.
//! Each variant captures a distinct failure mode so callers can report
//! missing files, directories, permission problems, and undecodable bytes
//! with separate messages instead of one generic I/O error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur when reading a text file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The path does not exist.
    #[error("File '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    /// The path exists but is not a regular file (e.g. a directory).
    #[error("'{}' is not a regular file", .path.display())]
    NotAFile { path: PathBuf },

    /// The current user lacks permission to read the file.
    #[error("Permission denied reading '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    /// The file's bytes are not valid UTF-8.
    ///
    /// `offset` is the byte position of the first invalid sequence.
    #[error("File '{}' is not valid UTF-8 (invalid byte at offset {offset})", .path.display())]
    Encoding { path: PathBuf, offset: usize },

    /// Any other I/O failure.
    #[error("Unexpected error reading '{}': {source}", .path.display())]
    Unexpected {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    /// Short heading used when reporting this error to the user.
    pub fn label(&self) -> &'static str {
        match self {
            ReadError::NotFound { .. } => "File Error",
            ReadError::NotAFile { .. } => "Directory Error",
            ReadError::PermissionDenied { .. } => "Permission Error",
            ReadError::Encoding { .. } => "Encoding Error",
            ReadError::Unexpected { .. } => "Unexpected Error",
        }
    }
}

/// Read the entire contents of a UTF-8 text file.
///
/// Checks existence and file type before reading, then classifies any
/// failure into a `ReadError` variant. The file handle never outlives
/// this call.
pub fn read_file(path: &Path) -> Result<String, ReadError> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound {
            path: path.to_path_buf(),
        },
        io::ErrorKind::PermissionDenied => ReadError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ReadError::Unexpected {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if !metadata.is_file() {
        return Err(ReadError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound {
            path: path.to_path_buf(),
        },
        io::ErrorKind::PermissionDenied => ReadError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ReadError::Unexpected {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    String::from_utf8(bytes).map_err(|e| ReadError::Encoding {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })
}
