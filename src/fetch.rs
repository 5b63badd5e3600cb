// src/fetch.rs
// =============================================================================
// Fetch-or-cache: the one place where the network and the disk cache meet.
//
// How it works:
// 1. Look for the key in the cache directory
// 2. If it's there, return it (no network access at all)
// 3. Otherwise GET the URL, save the body under the key, and return it
//
// The network side sits behind the `Fetch` trait. The real implementation
// wraps a reqwest::Client; tests plug in a stub that serves canned pages and
// records every URL it was asked for.
//
// Calls are made one at a time. Nothing here retries: a failed request is
// returned to the caller as-is and nothing is written to the cache.
// =============================================================================

use std::time::Duration;

use reqwest::Client;
use tracing::info;
use url::Url;

use crate::cache::{CacheKey, FileCache};
use crate::error::{Result, ScrapeError};

/// Something that can download a URL as text
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn get_text(&self, url: &Url) -> Result<String>;
}

/// `Fetch` over real HTTP
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a client with the given per-request timeout.
    /// Redirects are followed (reqwest's default policy).
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn get_text(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

/// Returns the body of `url`, served from `cache` when possible.
///
/// On a miss the freshly downloaded body is written under `key` before it is
/// returned, so the next call for the same key never touches the network.
pub async fn fetch_or_cache<F: Fetch>(
    fetcher: &F,
    cache: &FileCache,
    key: &CacheKey,
    url: &Url,
) -> Result<String> {
    if let Some(body) = cache.read(key)? {
        info!(%url, "Using cache");
        return Ok(body);
    }

    info!(%url, "Fetching");
    let body = fetcher.get_text(url).await?;
    cache.write(key, &body)?;
    Ok(body)
}
