// src/nps/state_index.rs
// =============================================================================
// The state index: which URL lists the national sites of which state.
//
// nps.gov's home page has a "find a park" dropdown menu with one <li> per
// state:
//
//   <ul class="dropdown-menu SearchBar-keywordSearch">
//     <li><a href="/state/mi/index.htm">Michigan</a></li>
//     ...
//
// We turn that into a map from lower-cased state name to absolute URL.
// The map is rebuilt every time it's needed; only the HTML is cached.
// =============================================================================

use std::collections::BTreeMap;

use scraper::Html;
use tracing::debug;
use url::Url;

use super::html::{element_text, resolve, selector};
use crate::cache::{CacheKey, FileCache};
use crate::error::{Result, ScrapeError};
use crate::fetch::{fetch_or_cache, Fetch};

/// The dropdown that lists every state
const STATE_MENU: &str = ".dropdown-menu.SearchBar-keywordSearch";

/// Lower-cased state name -> state listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateIndex {
    states: BTreeMap<String, Url>,
}

impl StateIndex {
    /// Case-insensitive lookup: "Michigan", "michigan" and " MICHIGAN " all match
    pub fn lookup(&self, name: &str) -> Option<&Url> {
        self.states.get(&name.trim().to_lowercase())
    }
}

/// Extracts the state index from the home page HTML.
///
/// Fails with `MissingElement` if the state menu isn't on the page.
/// Menu items without a link are skipped.
pub fn parse_state_index(html: &str, base_url: &Url) -> Result<StateIndex> {
    let document = Html::parse_document(html);

    let menu_selector = selector(STATE_MENU)?;
    let item_selector = selector("li")?;
    let link_selector = selector("a[href]")?;

    let menu = document
        .select(&menu_selector)
        .next()
        .ok_or(ScrapeError::MissingElement(STATE_MENU))?;

    let mut states = BTreeMap::new();
    for item in menu.select(&item_selector) {
        let Some(link) = item.select(&link_selector).next() else {
            debug!("skipping state menu item without a link");
            continue;
        };
        let Some(href) = link.value().attr("href") else {
            continue;
        };

        let name = element_text(link).to_lowercase();
        if name.is_empty() {
            debug!(href, "skipping state link without a name");
            continue;
        }

        states.insert(name, resolve(base_url, href)?);
    }

    Ok(StateIndex { states })
}

/// Downloads (or reads from cache) the home page and parses the state index
pub async fn build_state_index<F: Fetch>(
    fetcher: &F,
    cache: &FileCache,
    base_url: &Url,
) -> Result<StateIndex> {
    let key = CacheKey::state_index(base_url);
    let html = fetch_or_cache(fetcher, cache, &key, base_url).await?;
    parse_state_index(&html, base_url)
}
