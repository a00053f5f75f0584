//! Shared test utilities and fixture generators

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Three-line sample used across tests
pub const SAMPLE_CONTENT: &str = "alpha\nbeta\ngamma";

/// Create a temporary directory containing a text file with `content`
pub fn create_temp_text_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

/// Create a temporary directory containing a file with raw bytes
/// (used for non-UTF-8 fixtures)
pub fn create_temp_binary_file(name: &str, bytes: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    (temp_dir, path)
}
