use super::SyncConfig;
use crate::SyncError;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read the projects configuration from a JSON file
///
/// # Errors
///
/// Returns `SyncError::Config` if:
/// - Unable to read the file
/// - Unable to parse the JSON content
pub fn read_config<P: AsRef<Path>>(path: P) -> crate::Result<SyncConfig> {
    let path_ref = path.as_ref();

    let content = fs::read_to_string(path_ref).map_err(|e| {
        SyncError::Config(format!("Failed to read {}: {e}", path_ref.display()))
    })?;

    let config: SyncConfig = serde_json::from_str(&content).map_err(|e| {
        SyncError::Config(format!("Failed to parse {}: {e}", path_ref.display()))
    })?;

    debug!("Loaded {} project(s) from {}", config.projects.len(), path_ref.display());
    for name in config.duplicate_project_names() {
        warn!("Project '{}' is listed more than once in {}", name, path_ref.display());
    }

    Ok(config)
}
