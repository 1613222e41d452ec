//! Common file system operations with unified error handling

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{self, Result};

/// Create the parent directory of `path` if it is missing
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| error::fs::write_failed(parent, e))?;
    }
    Ok(())
}

/// Copy a directory recursively
///
/// Returns the copied files as `/`-separated paths relative to `src`, in
/// walk order. Existing files in `dst` are overwritten.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<Vec<String>> {
    let mut copied = Vec::new();

    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.map_err(|e| error::fs::read_failed(src, e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(relative);
        ensure_parent_dir(&target)?;
        fs::copy(entry.path(), &target).map_err(|e| error::fs::write_failed(&target, e))?;

        copied.push(relative_string(relative));
    }

    Ok(copied)
}

/// Render a relative path with `/` separators on every platform
pub fn relative_string(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Remove `dir` and then each ancestor up to (not including) `stop` while empty
pub fn prune_empty_dirs(dir: &Path, stop: &Path) {
    let mut current: Option<PathBuf> = Some(dir.to_path_buf());

    while let Some(path) = current {
        if path == stop || !path.starts_with(stop) {
            break;
        }
        let is_empty = fs::read_dir(&path)
            .map(|mut d| d.next().is_none())
            .unwrap_or(false);
        if !is_empty || fs::remove_dir(&path).is_err() {
            break;
        }
        current = path.parent().map(Path::to_path_buf);
    }
}

/// Remove a directory tree if it exists
pub fn remove_dir_if_exists(path: &Path) -> Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path).map_err(|e| error::fs::write_failed(path, e))?;
    }
    Ok(())
}
