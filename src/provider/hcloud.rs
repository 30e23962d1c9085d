//! Hetzner Cloud API client.
//!
//! API Documentation: <https://docs.hetzner.cloud/#servers-get-all-servers>

use std::net::Ipv4Addr;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{ProviderError, Server, ServerDirectory};

/// Base URL for the Hetzner Cloud API.
pub const DEFAULT_ENDPOINT: &str = "https://api.hetzner.cloud/v1";

/// Page size requested when listing servers (the API maximum).
const PER_PAGE: u32 = 50;

#[derive(Debug, Deserialize)]
struct ServerListResponse {
    #[serde(default)]
    servers: Vec<HcloudServer>,
    #[serde(default)]
    meta: Option<Meta>,
}

#[derive(Debug, Deserialize)]
struct HcloudServer {
    name: String,
    #[serde(default)]
    public_net: Option<PublicNet>,
}

#[derive(Debug, Deserialize)]
struct PublicNet {
    #[serde(default)]
    ipv4: Option<Ipv4Info>,
}

#[derive(Debug, Deserialize)]
struct Ipv4Info {
    ip: String,
}

#[derive(Debug, Deserialize)]
struct Meta {
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    next_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    message: String,
}

/// Blocking client for the Hetzner Cloud server listing.
#[derive(Debug, Clone)]
pub struct HcloudClient {
    client: Client,
    endpoint: String,
}

impl HcloudClient {
    /// Create a new client.
    ///
    /// Without a `timeout` a request may block indefinitely.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn fetch_page(&self, token: &str, page: u32) -> Result<(Vec<Server>, Option<u32>), ProviderError> {
        let url = format!("{}/servers", self.endpoint);
        debug!(url = %url, page, "GET request");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[("page", page), ("per_page", PER_PAGE)])
            .send()?;

        let status = response.status();
        let text = response.text()?;

        if status.is_success() {
            parse_page(&text)
        } else {
            Err(ProviderError::Api { status: status.as_u16(), message: error_message(&text) })
        }
    }
}

impl ServerDirectory for HcloudClient {
    fn list_servers(&self, token: &str) -> Result<Vec<Server>, ProviderError> {
        let mut servers = Vec::new();
        let mut page = 1;

        loop {
            let (batch, next_page) = self.fetch_page(token, page)?;
            servers.extend(batch);

            match next_page {
                Some(next) if next > page => page = next,
                _ => break,
            }
        }

        debug!("Listed {} server(s)", servers.len());
        Ok(servers)
    }
}

/// Decode one page of `GET /servers`, returning the servers and the next page number.
fn parse_page(text: &str) -> Result<(Vec<Server>, Option<u32>), ProviderError> {
    let response: ServerListResponse = serde_json::from_str(text).map_err(|e| {
        warn!(error = %e, "Failed to parse server list response");
        ProviderError::Serialization(e)
    })?;

    let next_page = response.meta.and_then(|m| m.pagination).and_then(|p| p.next_page);
    let servers = response.servers.into_iter().map(to_server).collect();

    Ok((servers, next_page))
}

fn to_server(server: HcloudServer) -> Server {
    let ipv4 = server
        .public_net
        .and_then(|net| net.ipv4)
        .and_then(|info| match info.ip.parse::<Ipv4Addr>() {
            Ok(ip) => Some(ip),
            Err(e) => {
                warn!("Server '{}' has an invalid IPv4 address '{}': {e}", server.name, info.ip);
                None
            },
        });

    Server { name: server.name, ipv4 }
}

/// Extract a readable message from an API error body, falling back to the raw text.
fn error_message(text: &str) -> String {
    serde_json::from_str::<ErrorResponse>(text).map_or_else(
        |_| text.to_string(),
        |body| format!("{} ({})", body.error.message, body.error.code),
    )
}
