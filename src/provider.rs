#![allow(clippy::self_named_module_files)]

//! Server directory: where the list of servers for a project comes from.

use std::net::Ipv4Addr;

pub mod hcloud;

pub use hcloud::HcloudClient;

/// A server as reported by the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub name: String,
    /// Public IPv4 address, absent for servers without one.
    pub ipv4: Option<Ipv4Addr>,
}

/// Errors returned by a server directory.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Lists the servers visible to a credential.
pub trait ServerDirectory {
    /// Return every server for `token`, in the order the directory reports them.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` if the servers cannot be listed.
    fn list_servers(&self, token: &str) -> Result<Vec<Server>, ProviderError>;
}
