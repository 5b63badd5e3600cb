// src/repl.rs
// =============================================================================
// The interactive loop.
//
//   Enter a state name (e.g. Michigan, michigan) or "exit": michigan
//   -------------------------------------
//   List of national sites in michigan
//   -------------------------------------
//   [1] Isle Royale (National Park): Houghton, MI 49931
//   [2] Keweenaw (National Historical Park): Calumet, MI 49913
//   Choose the number for detail search or "exit" or "back": 1
//   ------------------------------
//   Places near Isle Royale
//   ------------------------------
//   - Keweenaw Brewing (Bars): 408 Shelden Ave, Houghton
//
// Input and output are generic (BufRead / Write) so tests can drive a whole
// session from a string and inspect everything that was printed.
//
// Bad input is never fatal: it prints an error and asks again. Fetch and
// parse errors are not handled here; they end the session and surface in
// main.rs.
// =============================================================================

use std::io::{self, BufRead, Write};

use anyhow::Result;
use url::Url;

use crate::cache::FileCache;
use crate::config::Config;
use crate::fetch::Fetch;
use crate::nps::{build_state_index, get_sites_for_state, NationalSite};
use crate::places::{NearbyPlaces, PlacesClient};

const STATE_PROMPT: &str = "Enter a state name (e.g. Michigan, michigan) or \"exit\": ";
const SITE_PROMPT: &str = "Choose the number for detail search or \"exit\" or \"back\": ";
const BAD_STATE: &str = "[Error] Enter proper state name";
const BAD_CHOICE: &str = "[Error] Invalid input";

/// What the site menu wants the state menu to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    /// Ask for another state
    Back,
    /// End the session
    Exit,
}

pub struct Repl<F> {
    fetcher: F,
    cache: FileCache,
    base_url: Url,
    places: PlacesClient,
}

impl<F: Fetch> Repl<F> {
    pub fn new(fetcher: F, cache: FileCache, base_url: Url, places: PlacesClient) -> Self {
        Self {
            fetcher,
            cache,
            base_url,
            places,
        }
    }

    pub fn from_config(fetcher: F, config: &Config) -> Self {
        let cache = FileCache::new(&config.cache_dir);
        let places = PlacesClient::from_config(config, cache.clone());
        Self::new(fetcher, cache, config.base_url.clone(), places)
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Runs until the user types "exit" or input ends
    pub async fn run<R: BufRead, W: Write>(&self, mut input: R, output: &mut W) -> Result<()> {
        loop {
            let Some(state_name) = prompt(&mut input, output, STATE_PROMPT)? else {
                return Ok(());
            };
            if state_name == "exit" {
                return Ok(());
            }

            // Rebuilt every time round; the page itself comes from cache
            let index = build_state_index(&self.fetcher, &self.cache, &self.base_url).await?;
            let Some(state_url) = index.lookup(&state_name) else {
                writeln!(output, "{}", BAD_STATE)?;
                continue;
            };

            let sites = get_sites_for_state(&self.fetcher, &self.cache, state_url).await?;
            print_sites(output, &state_name, &sites)?;

            match self.choose_site(&mut input, output, &sites).await? {
                Next::Back => continue,
                Next::Exit => return Ok(()),
            }
        }
    }

    async fn choose_site<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        sites: &[NationalSite],
    ) -> Result<Next> {
        loop {
            let Some(choice) = prompt(input, output, SITE_PROMPT)? else {
                return Ok(Next::Exit);
            };

            match choice.as_str() {
                "exit" => return Ok(Next::Exit),
                "back" => return Ok(Next::Back),
                _ => match parse_selection(&choice, sites.len()) {
                    Some(number) => {
                        let site = &sites[number - 1];
                        let places = self.places.get_nearby_places(&self.fetcher, site).await?;
                        print_places(output, site, &places)?;
                    }
                    None => writeln!(output, "{}", BAD_CHOICE)?,
                },
            }
        }
    }
}

/// Prints `text`, then reads one trimmed line. `None` means end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// A 1-based menu number, if `choice` is one
///
/// Only plain digits count ("+1" and "-1" don't), and the number has to be
/// between 1 and `count`, both included.
fn parse_selection(choice: &str, count: usize) -> Option<usize> {
    if choice.is_empty() || !choice.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    choice
        .parse::<usize>()
        .ok()
        .filter(|number| (1..=count).contains(number))
}

fn print_sites<W: Write>(output: &mut W, state_name: &str, sites: &[NationalSite]) -> io::Result<()> {
    let rule = "-".repeat(37);
    writeln!(output, "{}", rule)?;
    writeln!(output, "List of national sites in {}", state_name)?;
    writeln!(output, "{}", rule)?;
    for (i, site) in sites.iter().enumerate() {
        writeln!(output, "[{}] {}", i + 1, site.info())?;
    }
    Ok(())
}

fn print_places<W: Write>(output: &mut W, site: &NationalSite, places: &NearbyPlaces) -> io::Result<()> {
    let rule = "-".repeat(30);
    writeln!(output, "{}", rule)?;
    writeln!(output, "Places near {}", site.name())?;
    writeln!(output, "{}", rule)?;
    for place in &places.search_results {
        writeln!(output, "- {}", place.summary())?;
    }
    Ok(())
}
