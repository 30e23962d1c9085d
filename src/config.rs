#![allow(clippy::self_named_module_files)]

use serde::{Deserialize, Serialize};

pub mod reader;

/// Top-level shape of the projects file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncConfig {
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// One Hetzner Cloud project and the SSH defaults for its servers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub token: String,
    #[serde(default)]
    pub default_key: String,
    #[serde(default)]
    pub default_user: String,
    #[serde(default)]
    pub default_additional: String,
    #[serde(default)]
    pub custom_map: Vec<ServerOverride>,
}

/// Per-server values taking precedence over the project defaults.
///
/// An empty field means "no override".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerOverride {
    pub name: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub additional: String,
}

impl Project {
    /// Returns the first override whose name matches `server_name` exactly,
    /// or an all-empty override when none does.
    #[must_use]
    pub fn find_override(&self, server_name: &str) -> ServerOverride {
        self.custom_map
            .iter()
            .find(|entry| entry.name == server_name)
            .cloned()
            .unwrap_or_default()
    }
}

impl SyncConfig {
    /// Names that appear more than once in the project list, in first-seen order.
    #[must_use]
    pub fn duplicate_project_names(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for project in &self.projects {
            if !seen.insert(project.name.as_str()) && !duplicates.contains(&project.name.as_str()) {
                duplicates.push(project.name.as_str());
            }
        }
        duplicates
    }
}
