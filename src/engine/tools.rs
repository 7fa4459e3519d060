//! Directory listing and path checks

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RunError;

/// Names of the regular files directly under `dir`, in the order the OS returns them.
///
/// Entries are stat-ed without following symlinks, so symlinks, subdirectories, sockets and
/// devices are left out. Any read or stat failure aborts the listing; there is no partial result.
pub fn list_regular_files(dir: &Path) -> crate::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| RunError::enumeration(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RunError::enumeration(dir, e))?;
        let path = entry.path();
        let meta = fs::symlink_metadata(&path).map_err(|e| RunError::enumeration(&path, e))?;
        if meta.file_type().is_file() {
            files.push(PathBuf::from(entry.file_name()));
        }
    }
    Ok(files)
}

/// Fail with a configuration error unless `dir` exists and is a directory.
pub fn ensure_dir_exists(dir: &Path) -> crate::Result<()> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(RunError::Config(format!(
            "{} is not a directory",
            dir.display()
        ))),
        Err(e) => Err(RunError::Config(format!(
            "can't find directory {}: {}",
            dir.display(),
            e
        ))),
    }
}

/// Available hardware parallelism, or 1 when it cannot be determined.
pub fn available_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
