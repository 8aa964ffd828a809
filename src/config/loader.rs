//! Configuration file discovery and loading.

use crate::config::schema::ReportConfig;
use crate::error::{ReportError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File names searched for in the project directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["report.yml", ".ansys-report.yml"];

/// Find a config file in `project_root`.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ReportConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReportError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReportError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config. Blank files parse as the default.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ReportConfig> {
    if content.trim().is_empty() {
        return Ok(ReportConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ReportError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Otherwise the project directory is searched
/// and a missing file means the defaults.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ReportConfig> {
    if let Some(path) = config_override {
        return load_config_file(path);
    }

    match find_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => Ok(ReportConfig::default()),
    }
}
