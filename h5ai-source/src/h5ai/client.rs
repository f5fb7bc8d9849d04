//! h5ai HTTP Client
//!
//! Fetches JSON directory listings and turns server links into absolute URLs.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, trace};
use url::Url;

use super::types::{parse_listing, ListingResult};
use crate::config::SourceConfig;
use crate::error::{body_with_limit, check_response, H5aiError};

/// Append the flag that makes h5ai answer with JSON instead of HTML.
#[must_use]
pub fn json_listing_url(url: &str) -> String {
    if url.contains('?') {
        format!("{url}&json=true")
    } else {
        format!("{url}?json=true")
    }
}

/// Turn a server link into an absolute URL.
///
/// Links starting with `http` are returned untouched. Anything else is an
/// encoded path placed on `base`'s scheme, host and port.
#[must_use]
pub fn resolve_link(base: &Url, href: &str) -> String {
    if href.starts_with("http") {
        return href.to_string();
    }
    let mut url = base.clone();
    url.set_path(href);
    url.to_string()
}

/// h5ai HTTP Client
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct H5aiClient {
    base_url: Url,
    client: Client,
}

impl H5aiClient {
    /// Create a client for the tree rooted at `config.base_url`.
    ///
    /// Fails if the base URL does not parse or cannot carry a path.
    pub fn new(config: &SourceConfig) -> Result<Self, H5aiError> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(H5aiError::InvalidConfig(format!(
                "base URL cannot carry a path: {base_url}"
            )));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.read_timeout_secs))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| H5aiError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { base_url, client })
    }

    /// Root of the server-exposed tree
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a server link against the configured base URL.
    #[must_use]
    pub fn resolve(&self, href: &str) -> String {
        resolve_link(&self.base_url, href)
    }

    /// List a directory
    ///
    /// # Arguments
    /// * `url` - Absolute directory URL, with or without a query string
    pub async fn list_directory(&self, url: &str) -> Result<ListingResult, H5aiError> {
        let url = json_listing_url(url);
        debug!(url = %url, "fetching h5ai listing");

        let response = self.client.get(&url).send().await?;
        let response = check_response(response)?;
        let body = body_with_limit(response).await?;
        let entries = parse_listing(&body)?;

        trace!(url = %url, entries = entries.len(), "decoded h5ai listing");
        Ok(entries)
    }
}
