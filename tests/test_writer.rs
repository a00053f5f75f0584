//! Unit tests for output path derivation and the safe file writer

use retext::pipeline::{derive_output_path, write_file, WriteError, OUTPUT_SUFFIX};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_derive_simple_extension() {
    let derived = derive_output_path(Path::new("/tmp/data.txt"), OUTPUT_SUFFIX);
    assert_eq!(derived, PathBuf::from("/tmp/data_modified.txt"));
}

#[test]
fn test_derive_no_extension() {
    let derived = derive_output_path(Path::new("/tmp/README"), OUTPUT_SUFFIX);
    assert_eq!(derived, PathBuf::from("/tmp/README_modified"));
}

#[test]
fn test_derive_multiple_dots() {
    let derived = derive_output_path(Path::new("archive.tar.gz"), OUTPUT_SUFFIX);
    assert_eq!(
        derived,
        PathBuf::from("archive.tar_modified.gz"),
        "Only the final extension is re-appended"
    );
}

#[test]
fn test_derive_hidden_file() {
    let derived = derive_output_path(Path::new(".bashrc"), OUTPUT_SUFFIX);
    assert_eq!(
        derived,
        PathBuf::from(".bashrc_modified"),
        "A leading dot is part of the stem, not an extension"
    );
}

#[test]
fn test_derive_stays_in_parent_directory() {
    let derived = derive_output_path(Path::new("/some/dir/notes.txt"), OUTPUT_SUFFIX);
    assert_eq!(derived.parent(), Some(Path::new("/some/dir")));
}

#[test]
fn test_write_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");

    write_file(&path, "alpha\nbeta").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "alpha\nbeta");
}

#[test]
fn test_write_overwrites_existing() {
    let (_dir, path) = common::create_temp_text_file("out.txt", "old");

    write_file(&path, "new").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn test_write_empty_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty_out.txt");

    write_file(&path, "").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_write_empty_path_rejected() {
    let err = write_file(Path::new(""), "content").unwrap_err();

    assert!(
        matches!(err, WriteError::Unexpected { .. }),
        "Expected Unexpected, got {:?}",
        err
    );
    assert_eq!(err.label(), "Unexpected Error");
}

#[test]
fn test_write_missing_directory_is_os_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("out.txt");

    let err = write_file(&path, "content").unwrap_err();

    assert!(
        matches!(err, WriteError::Os { .. }),
        "Expected Os, got {:?}",
        err
    );
    assert_eq!(err.label(), "OS Error");
}

#[cfg(unix)]
#[test]
fn test_write_into_readonly_directory() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o555)).unwrap();
    let path = dir.path().join("out.txt");

    // Privileged processes bypass permission bits; nothing to assert then
    if fs::write(&path, "probe").is_ok() {
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let err = write_file(&path, "content").unwrap_err();

    assert!(
        matches!(err, WriteError::PermissionDenied { .. }),
        "Expected PermissionDenied, got {:?}",
        err
    );
    assert_eq!(err.label(), "Permission Error");

    // Restore so the TempDir can clean up
    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();
}
