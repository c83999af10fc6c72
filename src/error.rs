// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{} not found", .0.display())]
    EnvFileNotFound(PathBuf),

    #[error("Missing required env var {0}")]
    MissingEnvVar(String),

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to launch `{program}`: {source}")]
    CommandSpawn { program: String, source: io::Error },

    #[error("`{program}` wrote output that is not UTF-8")]
    NonUtf8Output { program: String },

    #[error("`{program}` exited with {status}{}", fmt_stderr(.stderr))]
    CommandFailed { program: String, status: String, stderr: String },
}

fn fmt_stderr(stderr: &str) -> String {
    let t = stderr.trim();
    if t.is_empty() { s!() } else { format!(": {t}") }
}

pub type Result<T> = std::result::Result<T, ToolError>;
