// src/error.rs
// =============================================================================
// Error types for the library side of the crate.
//
// The binary uses anyhow::Result at the top level (see main.rs), but the
// scraping and API code returns these typed errors so callers can tell
// "the network failed" apart from "the page didn't have what we expected".
//
// Recovery policy lives with the caller:
// - optional page fields never produce an error (they become placeholders)
// - a missing/corrupt places cache file is not an error (it means "fetch")
// - everything in this enum propagates up to the interactive loop
// =============================================================================

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while fetching, caching or parsing remote data.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The request never got a response (DNS, connect, timeout, TLS...)
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with a 2xx status
    #[error("failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// Reading or writing a cache file failed
    #[error("cache I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A response body (or cached copy) wasn't valid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A required element is not on the page
    #[error("page is missing required element `{0}`")]
    MissingElement(&'static str),

    /// One of our own CSS selectors failed to parse
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector {
        selector: &'static str,
        message: String,
    },

    /// A link on the page couldn't be turned into an absolute URL
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ScrapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrapeError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while assembling the startup configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("MAPQUEST_API_KEY is not set (export it or put it in a .env file)")]
    MissingApiKey,

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("invalid URL for {name}: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Convenience alias used throughout the library
pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
