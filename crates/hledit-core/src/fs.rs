//! Filesystem utilities for atomic writes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write `contents` to `destination` through a sibling temp file and a rename.
///
/// Readers see either the old or the new contents, never a partial write.
/// On platforms where `fs::rename` refuses to replace an existing file
/// (notably Windows) the destination is removed first and the rename retried.
/// The temp file is cleaned up if the write or rename fails.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or the rename fails
/// even after the fallback attempt.
pub fn write_atomic(destination: &Path, contents: &str) -> io::Result<()> {
    let temp_path = temp_path_for(destination);
    if let Err(err) = fs::write(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    if let Err(initial_err) = fs::rename(&temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(&temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(&temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename to {} failed (initial: {}, retry: {})",
                    destination.display(),
                    initial_err,
                    retry_err
                ),
            )
        })?;
    }
    Ok(())
}

fn temp_path_for(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    destination.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}
