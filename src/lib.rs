#![allow(missing_docs)]

pub mod cli;
pub mod config;
pub mod marker;
pub mod provider;
pub mod render;
pub mod resolve;
pub mod ssh_config;
pub mod sync;

pub use config::{Project, ServerOverride, SyncConfig};
pub use marker::{EditMode, Marker};
pub use provider::{HcloudClient, ProviderError, Server, ServerDirectory};
pub use sync::{run_sync, SyncOptions, SyncOutcome};

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Error retrieving servers for project '{project}': {source}")]
    Provider {
        project: String,
        #[source]
        source: ProviderError,
    },

    #[error("File error: {0}")]
    File(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Marker error: {0}")]
    Marker(String),
}

pub type Result<T> = std::result::Result<T, SyncError>;
