// src/lib.rs
// =============================================================================
// nps-explorer as a library.
//
// Modules, roughly in the order data flows through them:
// - config / cli: what the user asked for and where things live
// - cache: on-disk storage for pages and API responses
// - fetch: fetch-or-cache on top of an HTTP client
// - nps: scraping nps.gov (state index, site lists, site details)
// - places: nearby places from the MapQuest API
// - repl: the interactive loop tying it all together
// =============================================================================

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod nps;
pub mod places;
pub mod repl;

pub use config::Config;
pub use error::{ConfigError, ScrapeError};
pub use fetch::{Fetch, HttpFetcher};
pub use repl::Repl;
