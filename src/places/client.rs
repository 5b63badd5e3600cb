// src/places/client.rs
// =============================================================================
// Nearby places for a national site, via the MapQuest radius search API.
//
// The query is always the same shape: the site's postal code as origin, a
// 10 mile radius, at most 10 matches, ambiguous origins ignored, JSON out.
//
// Responses are cached per postal code. The cache file holds the response
// re-serialized with sorted keys and 4-space indentation, which keeps cached
// files diffable and readable.
//
// Reading the cache has three outcomes (see `CacheLookup`):
//   Hit      -> use it, no network
//   Miss     -> fetch
//   Corrupt  -> the file is there but doesn't read back as a response;
//               log it and fetch
// Any other I/O error (permissions, a directory in the way) is returned to
// the caller rather than being treated as a miss.
// =============================================================================

use std::collections::BTreeMap;
use std::io::ErrorKind;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

use super::response::NearbyPlaces;
use crate::cache::{CacheKey, FileCache};
use crate::config::Config;
use crate::error::{Result, ScrapeError};
use crate::fetch::Fetch;
use crate::nps::NationalSite;

/// Search radius around the origin, in miles
pub const SEARCH_RADIUS: u32 = 10;
/// Most results MapQuest should return
pub const MAX_MATCHES: u32 = 10;
const AMBIGUITIES: &str = "ignore";
const OUT_FORMAT: &str = "json";

/// Outcome of looking for a cached response
#[derive(Debug)]
pub enum CacheLookup {
    Hit(NearbyPlaces),
    Miss,
    /// The file exists but can't be used; the string says why
    Corrupt(String),
}

#[derive(Debug, Clone)]
pub struct PlacesClient {
    endpoint: Url,
    api_key: String,
    cache: FileCache,
}

impl PlacesClient {
    pub fn new(endpoint: Url, api_key: impl Into<String>, cache: FileCache) -> Self {
        Self {
            endpoint,
            api_key: api_key.into(),
            cache,
        }
    }

    pub fn from_config(config: &Config, cache: FileCache) -> Self {
        Self::new(config.places_endpoint.clone(), config.api_key.clone(), cache)
    }

    /// Full request URL for a search around `origin`, API key included
    pub fn query_url(&self, origin: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("origin", origin)
            .append_pair("radius", &SEARCH_RADIUS.to_string())
            .append_pair("maxMatches", &MAX_MATCHES.to_string())
            .append_pair("ambiguities", AMBIGUITIES)
            .append_pair("outFormat", OUT_FORMAT)
            .append_pair("key", &self.api_key);
        url
    }

    /// Looks up places near `site`'s postal code, from cache when possible.
    pub async fn get_nearby_places<F: Fetch>(
        &self,
        fetcher: &F,
        site: &NationalSite,
    ) -> Result<NearbyPlaces> {
        let origin = site.zipcode();
        let key = CacheKey::nearby_places(origin);

        let places = match self.lookup(&key)? {
            CacheLookup::Hit(places) => {
                info!(origin, "Using cache");
                places
            }
            CacheLookup::Miss => self.fetch_and_store(fetcher, &key, origin).await?,
            CacheLookup::Corrupt(reason) => {
                warn!(origin, %reason, "ignoring unreadable cached response");
                self.fetch_and_store(fetcher, &key, origin).await?
            }
        };

        if let Some(status) = places.info.as_ref().filter(|info| info.is_error()) {
            warn!(
                origin,
                statuscode = status.statuscode,
                messages = ?status.messages,
                "places API reported an error"
            );
        }
        Ok(places)
    }

    /// Reads the cached response for `key`, classifying what we find
    pub fn lookup(&self, key: &CacheKey) -> Result<CacheLookup> {
        match self.cache.read(key) {
            Ok(Some(text)) => Ok(match serde_json::from_str::<NearbyPlaces>(&text) {
                Ok(places) => CacheLookup::Hit(places),
                Err(e) => CacheLookup::Corrupt(e.to_string()),
            }),
            Ok(None) => Ok(CacheLookup::Miss),
            Err(ScrapeError::Io { source, .. }) if source.kind() == ErrorKind::InvalidData => {
                Ok(CacheLookup::Corrupt(source.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    async fn fetch_and_store<F: Fetch>(
        &self,
        fetcher: &F,
        key: &CacheKey,
        origin: &str,
    ) -> Result<NearbyPlaces> {
        info!(origin, "Fetching");
        let body = fetcher
            .get_text(&self.query_url(origin))
            .await
            .map_err(|e| self.redact(e))?;

        // Only responses we can read back are worth caching
        let value: Value = serde_json::from_str(&body)?;
        let places: NearbyPlaces = serde_json::from_value(value.clone())?;
        self.cache.write(key, &pretty_json(&value)?)?;
        Ok(places)
    }

    /// Keeps the API key out of error messages
    fn redact(&self, error: ScrapeError) -> ScrapeError {
        match error {
            ScrapeError::Http(e) => ScrapeError::Http(e.without_url()),
            ScrapeError::Status { url, status } => ScrapeError::Status {
                url: self.redact_url(&url),
                status,
            },
            other => other,
        }
    }

    /// Masks the `key` query parameter. Works on the decoded query, so keys
    /// with characters that get percent-encoded are masked too.
    fn redact_url(&self, raw: &str) -> String {
        let Ok(mut url) = Url::parse(raw) else {
            return raw.replace(&self.api_key, "***");
        };
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .into_owned()
            .map(|(name, value)| {
                if name == "key" {
                    (name, "***".to_string())
                } else {
                    (name, value)
                }
            })
            .collect();
        url.query_pairs_mut().clear().extend_pairs(pairs);
        url.to_string()
    }
}

/// Sorted keys, 4-space indentation
fn pretty_json(value: &Value) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    sort_keys(value.clone()).serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

// serde_json keeps insertion order when its preserve_order feature is on
// anywhere in the dependency graph, so sort explicitly.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, sort_keys(v))).collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
