// src/deploy/env_file.rs
use std::{collections::HashMap, path::Path};

use crate::error::{Result, ToolError};
use crate::file;

/// `KEY=value` lines. Blank lines, `#` comments and lines without `=` are
/// ignored; the value is everything after the first `=`, verbatim.
/// A repeated key keeps its last value.
pub fn parse_env(text: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            vars.insert(s!(key), s!(value));
        }
    }
    vars
}

pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        return Err(ToolError::EnvFileNotFound(path.to_path_buf()));
    }
    let vars = parse_env(&file::read_text(path)?);
    logd!(path = %path.display(), keys = vars.len(), "loaded env file");
    Ok(vars)
}

/// Values for `keys`, in the order given. The first absent key is an error.
pub fn require_keys<'k>(
    vars: &HashMap<String, String>,
    keys: &[&'k str],
) -> Result<Vec<(&'k str, String)>> {
    keys.iter()
        .map(|&key| {
            vars.get(key)
                .map(|v| (key, v.clone()))
                .ok_or_else(|| ToolError::MissingEnvVar(s!(key)))
        })
        .collect()
}
