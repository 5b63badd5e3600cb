// src/config.rs
// =============================================================================
// Runtime configuration.
//
// Everything that used to be "ambient" (the API key, where the cache lives,
// which site we scrape) is gathered here once at startup and then passed
// explicitly to the components that need it.
//
// Priority for each value: command-line flag -> environment variable -> default
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::cli::Cli;
use crate::error::ConfigError;

/// Application name used for the cache directory
const APP_NAME: &str = "nps-explorer";

/// The park site we scrape
pub const DEFAULT_BASE_URL: &str = "https://www.nps.gov";

/// MapQuest radius search endpoint
pub const DEFAULT_PLACES_ENDPOINT: &str = "http://www.mapquestapi.com/search/v2/radius";

/// Used when neither a flag nor NPS_TIMEOUT_SECS is given
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_KEY: &str = "MAPQUEST_API_KEY";
pub const ENV_CACHE_DIR: &str = "NPS_CACHE_DIR";
pub const ENV_TIMEOUT_SECS: &str = "NPS_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the park site; state and site links are resolved against it
    pub base_url: Url,
    /// Geolocation search endpoint
    pub places_endpoint: Url,
    /// Credential for the geolocation API
    pub api_key: String,
    /// Directory holding cached pages and API responses
    pub cache_dir: PathBuf,
    /// Per-request timeout for the HTTP client
    pub timeout: Duration,
}

impl Config {
    /// Builds the configuration from parsed CLI flags and the process environment.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Self::resolve(cli, |name| std::env::var(name).ok())
    }

    /// Same as `from_cli`, but reads environment variables through `env`
    /// so tests don't have to mutate the real process environment.
    pub fn resolve<F>(cli: &Cli, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = env(ENV_API_KEY)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let cache_dir = cli
            .cache_dir
            .clone()
            .or_else(|| env(ENV_CACHE_DIR).filter(|dir| !dir.is_empty()).map(PathBuf::from))
            .unwrap_or_else(default_cache_dir);

        let timeout_secs = match cli.timeout_secs {
            Some(secs) => secs,
            None => match env(ENV_TIMEOUT_SECS) {
                Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    name: ENV_TIMEOUT_SECS,
                    value: raw,
                })?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };

        Ok(Self {
            base_url: parse_url("base URL", DEFAULT_BASE_URL)?,
            places_endpoint: parse_url("places endpoint", DEFAULT_PLACES_ENDPOINT)?,
            api_key,
            cache_dir,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// `~/.cache/nps-explorer` on Linux, or `./cache` if there's no home directory
fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join(APP_NAME))
        .unwrap_or_else(|| PathBuf::from("./cache"))
}

fn parse_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { name, source })
}
