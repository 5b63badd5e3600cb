// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The program itself is interactive (it asks for a state, then a site), so
// there are no subcommands. The flags only tune where things are cached, how
// long a request may take, and how chatty the logs are.
//
// The MapQuest API key is deliberately NOT a flag: command lines end up in
// shell history and `ps` output. It comes from MAPQUEST_API_KEY instead.
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug, Default)]
#[command(
    name = "nps-explorer",
    version,
    about = "Browse national park sites by state and find places nearby",
    long_about = "nps-explorer scrapes nps.gov for the national sites in a state, lets you pick one, \
                  and lists nearby places using the MapQuest radius search API. \
                  Pages and API responses are cached on disk, so repeat lookups work offline."
)]
pub struct Cli {
    /// Directory for cached pages and API responses
    ///
    /// Falls back to NPS_CACHE_DIR, then to the platform cache directory
    #[arg(long, value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// Give up on a request after this many seconds (default: 30)
    ///
    /// Falls back to NPS_TIMEOUT_SECS
    #[arg(long, value_name = "N")]
    pub timeout_secs: Option<u64>,

    /// Log cache hits and network fetches to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_is_valid() {
        let cli = Cli::try_parse_from(["nps-explorer"]).unwrap();
        assert!(cli.cache_dir.is_none());
        assert!(cli.timeout_secs.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "nps-explorer",
            "--cache-dir",
            "./cache",
            "--timeout-secs",
            "12",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.cache_dir, Some(PathBuf::from("./cache")));
        assert_eq!(cli.timeout_secs, Some(12));
        assert!(cli.verbose);
    }

    #[test]
    fn test_timeout_must_be_a_number() {
        assert!(Cli::try_parse_from(["nps-explorer", "--timeout-secs", "abc"]).is_err());
    }
}
