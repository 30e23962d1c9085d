use crate::config::Project;
use crate::provider::Server;
use crate::resolve::ResolvedServerEntry;
use tracing::{debug, warn};

/// Render one `Host` block, terminated by a blank line.
#[must_use]
pub fn render_entry(entry: &ResolvedServerEntry) -> String {
    let mut block = format!("Host {}\n\tUser {}\n\tHostName {}\n", entry.name, entry.user, entry.ipv4);

    if !entry.key.is_empty() {
        block.push_str("\tIdentityFile ");
        block.push_str(&entry.key);
        block.push('\n');
    }
    if !entry.additional.is_empty() {
        block.push('\t');
        block.push_str(&entry.additional);
        block.push('\n');
    }

    block.push('\n');
    block
}

/// Render the `Host` blocks for every server of a project, in provider order.
///
/// Servers without a public IPv4 address are skipped.
#[must_use]
pub fn render_project(project: &Project, servers: &[Server]) -> String {
    let mut content = String::new();

    for server in servers {
        match ResolvedServerEntry::resolve(project, server) {
            Some(entry) => content.push_str(&render_entry(&entry)),
            None => warn!(
                "Skipping server '{}' in project '{}': no public IPv4 address",
                server.name, project.name
            ),
        }
    }

    debug!("Rendered {} server(s) for project '{}'", servers.len(), project.name);
    content
}
