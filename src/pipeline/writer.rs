//! Safe file writing and output path derivation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Suffix inserted before the extension of derived output filenames.
pub const OUTPUT_SUFFIX: &str = "_modified";

/// Errors that can occur when writing the output file.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The current user lacks permission to write at the path.
    #[error("Permission denied writing '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    /// An OS-level failure (disk full, missing directory, invalid path).
    #[error("OS error writing '{}': {source}", .path.display())]
    Os {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other failure, including an empty output path.
    #[error("Unexpected error writing '{}': {message}", .path.display())]
    Unexpected { path: PathBuf, message: String },
}

impl WriteError {
    /// Short heading used when reporting this error to the user.
    pub fn label(&self) -> &'static str {
        match self {
            WriteError::PermissionDenied { .. } => "Permission Error",
            WriteError::Os { .. } => "OS Error",
            WriteError::Unexpected { .. } => "Unexpected Error",
        }
    }
}

/// Derive the output path for an input file.
///
/// The suffix is appended to the file stem and the original extension is
/// kept, so `data.txt` becomes `data_modified.txt` and `README` becomes
/// `README_modified`. The result lives in the input's directory.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(extension) => format!("{}{}.{}", stem, suffix, extension),
        None => format!("{}{}", stem, suffix),
    };
    input.with_file_name(name)
}

/// Write `content` to `path`, classifying any failure.
///
/// An empty path is rejected before any filesystem call is made. The file
/// handle never outlives this call.
pub fn write_file(path: &Path, content: &str) -> Result<(), WriteError> {
    if path.as_os_str().is_empty() {
        return Err(WriteError::Unexpected {
            path: path.to_path_buf(),
            message: "output filename is empty".to_string(),
        });
    }

    fs::write(path, content).map_err(|e| {
        if e.kind() == io::ErrorKind::PermissionDenied {
            WriteError::PermissionDenied {
                path: path.to_path_buf(),
            }
        } else if e.raw_os_error().is_some() {
            WriteError::Os {
                path: path.to_path_buf(),
                source: e,
            }
        } else {
            WriteError::Unexpected {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    })
}
