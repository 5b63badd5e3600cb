// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Load a .env file if there is one (that's where MAPQUEST_API_KEY usually lives)
// 2. Parse command-line arguments using clap
// 3. Set up logging to stderr
// 4. Build the configuration and the HTTP client
// 5. Hand stdin/stdout to the interactive loop
// 6. Exit with proper code (0 = normal exit, 2 = error)
//
// All the real work lives in the library (src/lib.rs); this file only wires
// it to the terminal.
// =============================================================================

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nps_explorer::cli::Cli;
use nps_explorer::{Config, HttpFetcher, Repl};

#[tokio::main]
async fn main() {
    // Silently ignore a missing .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(&cli)?;
    info!(cache_dir = %config.cache_dir.display(), "starting");

    let fetcher = HttpFetcher::new(config.timeout)?;
    let repl = Repl::from_config(fetcher, &config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl.run(stdin.lock(), &mut stdout).await
}

/// Logs go to stderr so they never mix into the menus on stdout.
/// RUST_LOG wins over --verbose when both are given.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "nps_explorer=info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}
