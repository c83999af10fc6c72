// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{Result, ToolError};

/// Read a whole text file, keeping the path in the error.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ToolError::Read { path: path.to_path_buf(), source })
}

/// Write `contents` to `path`, creating parent directories first.
/// Returns the path written to.
pub fn write_text(path: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|source| ToolError::Write { path: path.to_path_buf(), source })?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ToolError::Write {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        });
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ToolError::Write { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
