use crate::config::{reader, SyncConfig};
use crate::marker::{self, EditMode, Marker};
use crate::provider::ServerDirectory;
use crate::render::render_project;
use crate::ssh_config::{backup_file, expand_home, read_ssh_config, write_ssh_config};
use crate::SyncError;
use std::path::PathBuf;
use tracing::{debug, info};

/// Options for a single sync run
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub config_file: PathBuf,
    /// May start with `~/`; expanded before the file is read.
    pub ssh_config_file: PathBuf,
    pub marker: Marker,
    pub print_only: bool,
    pub backup: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from("config.json"),
            ssh_config_file: PathBuf::from("~/.ssh/config"),
            marker: Marker::default(),
            print_only: false,
            backup: false,
        }
    }
}

/// What a completed run did
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    /// SSH config path after home expansion
    pub path: PathBuf,
    pub mode: EditMode,
    /// Full new content of the SSH config file
    pub content: String,
    /// False in print-only mode
    pub persisted: bool,
    pub backup: Option<PathBuf>,
}

/// Fetch the servers of every project and concatenate their `Host` blocks,
/// in configuration order.
///
/// # Errors
///
/// Returns `SyncError::Provider` naming the project whose listing failed.
/// No further projects are queried after a failure.
pub fn build_content<D: ServerDirectory + ?Sized>(
    config: &SyncConfig,
    directory: &D,
) -> crate::Result<String> {
    let mut content = String::new();

    for project in &config.projects {
        info!("Fetching servers for project '{}'", project.name);
        let servers = directory
            .list_servers(&project.token)
            .map_err(|source| SyncError::Provider { project: project.name.clone(), source })?;

        content.push_str(&render_project(project, &servers));
    }

    Ok(content)
}

/// Run a full sync: load the projects, build the host blocks, splice them
/// into the SSH config and either write it or hand it back for preview.
///
/// Nothing is written unless every step before the write succeeded.
///
/// # Errors
///
/// Returns an error if:
/// - The projects file cannot be read or parsed
/// - Listing the servers of any project fails
/// - The home directory cannot be determined or the SSH config cannot be read
/// - The existing managed region is unterminated
/// - The backup or the write fails
pub fn run_sync<D: ServerDirectory + ?Sized>(
    options: &SyncOptions,
    directory: &D,
) -> crate::Result<SyncOutcome> {
    let config = reader::read_config(&options.config_file)?;
    debug!("Configuration loaded from {}", options.config_file.display());

    let block = build_content(&config, directory)?;

    let path = expand_home(&options.ssh_config_file)?;
    let original = read_ssh_config(&path)?;
    let edit = marker::apply(&options.marker, &original, &block)?;
    debug!("Marker '{}' {} in {}", options.marker.name(), edit.mode, path.display());

    if options.print_only {
        return Ok(SyncOutcome {
            path,
            mode: edit.mode,
            content: edit.content,
            persisted: false,
            backup: None,
        });
    }

    let backup = if options.backup { backup_file(&path)? } else { None };
    if let Some(ref backup_path) = backup {
        info!("Backed up {} to {}", path.display(), backup_path.display());
    }

    write_ssh_config(&path, &edit.content)?;
    info!("Wrote {} byte(s) to {}", edit.content.len(), path.display());

    Ok(SyncOutcome { path, mode: edit.mode, content: edit.content, persisted: true, backup })
}
