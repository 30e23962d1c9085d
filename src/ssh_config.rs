use crate::SyncError;
use chrono::Local;
use directories::BaseDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Replace a leading `~` or `~/` with the invoking user's home directory.
///
/// # Errors
///
/// Returns `SyncError::File` if the path starts with `~` and the home
/// directory cannot be determined.
pub fn expand_home<P: AsRef<Path>>(path: P) -> crate::Result<PathBuf> {
    let path_ref = path.as_ref();
    let Some(raw) = path_ref.to_str() else {
        return Ok(path_ref.to_path_buf());
    };

    let rest = if raw == "~" {
        ""
    } else if let Some(rest) = raw.strip_prefix("~/") {
        rest
    } else {
        return Ok(path_ref.to_path_buf());
    };

    let home = BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| SyncError::File("Can't detect home directory".to_string()))?;

    let expanded = if rest.is_empty() { home } else { home.join(rest) };
    debug!("Expanded {} to {}", raw, expanded.display());
    Ok(expanded)
}

/// Read the SSH config file.
///
/// # Errors
///
/// Returns `SyncError::File` if the file is missing or unreadable.
pub fn read_ssh_config<P: AsRef<Path>>(path: P) -> crate::Result<String> {
    let path_ref = path.as_ref();
    fs::read_to_string(path_ref)
        .map_err(|e| SyncError::File(format!("Failed to read {}: {e}", path_ref.display())))
}

/// Create or truncate the SSH config file, write `content` and flush it to disk.
///
/// # Errors
///
/// Returns `SyncError::Write` if the file cannot be created, written or synced.
pub fn write_ssh_config<P: AsRef<Path>>(path: P, content: &str) -> crate::Result<()> {
    let path_ref = path.as_ref();
    let to_write_error =
        |source: std::io::Error| SyncError::Write { path: path_ref.display().to_string(), source };

    let mut file = fs::File::create(path_ref).map_err(to_write_error)?;
    file.write_all(content.as_bytes()).map_err(to_write_error)?;
    file.sync_all().map_err(to_write_error)?;

    Ok(())
}

/// Create a backup of a file with timestamp
///
/// # Errors
///
/// Returns `SyncError::File` if unable to copy the file
pub fn backup_file<P: AsRef<Path>>(path: P) -> crate::Result<Option<PathBuf>> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        return Ok(None);
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = path_ref.with_file_name(format!(
        "{}.backup.{}",
        path_ref.file_name().and_then(|n| n.to_str()).unwrap_or("config"),
        timestamp
    ));

    fs::copy(path_ref, &backup_path).map_err(|e| {
        SyncError::File(format!("Failed to back up {}: {e}", path_ref.display()))
    })?;

    Ok(Some(backup_path))
}
