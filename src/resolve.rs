use crate::config::{Project, ServerOverride};
use crate::provider::Server;
use std::net::Ipv4Addr;

/// A field that can come from either a server override or the project defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    User,
    Key,
    Additional,
}

/// Pick the effective value for `field`: the override when non-empty,
/// otherwise the project default (which may itself be empty).
#[must_use]
pub fn resolve<'a>(project: &'a Project, custom: &'a ServerOverride, field: Field) -> &'a str {
    let (overridden, default) = match field {
        Field::User => (&custom.user, &project.default_user),
        Field::Key => (&custom.key, &project.default_key),
        Field::Additional => (&custom.additional, &project.default_additional),
    };

    if overridden.is_empty() {
        default
    } else {
        overridden
    }
}

/// Final values for one server, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedServerEntry {
    pub name: String,
    pub ipv4: Ipv4Addr,
    pub user: String,
    pub key: String,
    pub additional: String,
}

impl ResolvedServerEntry {
    /// Resolve every field for `server` against `project`.
    ///
    /// Returns `None` when the server has no public IPv4 address.
    #[must_use]
    pub fn resolve(project: &Project, server: &Server) -> Option<Self> {
        let ipv4 = server.ipv4?;
        let custom = project.find_override(&server.name);

        Some(Self {
            name: server.name.clone(),
            ipv4,
            user: resolve(project, &custom, Field::User).to_string(),
            key: resolve(project, &custom, Field::Key).to_string(),
            additional: resolve(project, &custom, Field::Additional).to_string(),
        })
    }
}
