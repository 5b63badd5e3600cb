// src/nps/site_list.rs
// =============================================================================
// A state's list of national sites (e.g. https://www.nps.gov/state/mi/index.htm).
//
// The page has a list with id "list_parks", one <li> per site:
//
//   <ul id="list_parks">
//     <li class="clearfix">
//       <h2>National Park</h2>
//       <h3><a href="/isro/">Isle Royale</a></h3>
//       ...
//
// Each href points at the site's directory; the detail page is "index.htm"
// inside it. Sites come back in the order the page lists them.
//
// Entries without an <h3> link are skipped (and logged). nps.gov sometimes
// has placeholder items in the list, and a site we can't link to is a site
// we can't describe.
// =============================================================================

use scraper::{ElementRef, Html};
use tracing::{debug, warn};
use url::Url;

use super::html::{resolve, selector};
use super::site::NationalSite;
use super::site_detail::get_site_instance;
use crate::cache::{CacheKey, FileCache};
use crate::error::{Result, ScrapeError};
use crate::fetch::{fetch_or_cache, Fetch};

const PARK_LIST: &str = "#list_parks";

/// Extracts the detail page URL of every site on a state's listing page.
pub fn parse_site_list(html: &str, page_url: &Url) -> Result<Vec<Url>> {
    let document = Html::parse_document(html);

    let list_selector = selector(PARK_LIST)?;
    let link_selector = selector("h3 a[href]")?;

    let list = document
        .select(&list_selector)
        .next()
        .ok_or(ScrapeError::MissingElement(PARK_LIST))?;

    let mut urls = Vec::new();
    // Only direct children count; text nodes (whitespace) aren't elements
    for entry in list.children().filter_map(ElementRef::wrap) {
        if entry.value().name() != "li" {
            debug!(tag = entry.value().name(), "skipping non-list child of {}", PARK_LIST);
            continue;
        }

        let href = entry
            .select(&link_selector)
            .next()
            .and_then(|link| link.value().attr("href"));

        match href {
            Some(href) => urls.push(detail_url(page_url, href)?),
            None => warn!("skipping site entry without a link"),
        }
    }

    Ok(urls)
}

/// "/isro/" -> "https://www.nps.gov/isro/index.htm"
///
/// A missing trailing slash is added first, so "/isro" ends up in the same place.
fn detail_url(page_url: &Url, href: &str) -> Result<Url> {
    let mut site_dir = resolve(page_url, href)?;
    if !site_dir.path().ends_with('/') {
        let path = format!("{}/", site_dir.path());
        site_dir.set_path(&path);
    }
    resolve(&site_dir, "index.htm")
}

/// Downloads (or reads from cache) a state's listing page, then every site
/// on it, one after another.
pub async fn get_sites_for_state<F: Fetch>(
    fetcher: &F,
    cache: &FileCache,
    state_url: &Url,
) -> Result<Vec<NationalSite>> {
    let key = CacheKey::state_page(state_url);
    let html = fetch_or_cache(fetcher, cache, &key, state_url).await?;

    let mut sites = Vec::new();
    for site_url in parse_site_list(&html, state_url)? {
        sites.push(get_site_instance(fetcher, cache, &site_url).await?);
    }
    Ok(sites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::StubFetcher;
    use crate::nps::site_detail::sample_detail_page;
    use tempfile::TempDir;

    const STATE_URL: &str = "https://www.nps.gov/state/mi/index.htm";

    const MICHIGAN: &str = r#"
        <html><body>
          <ul id="list_parks">
            <li class="clearfix">
              <h2>National Park</h2>
              <h3><a href="/isro/">Isle Royale</a></h3>
            </li>
            <li class="clearfix">
              <h2>National Historical Park</h2>
              <h3><a href="/kewe/">Keweenaw</a></h3>
            </li>
            <li class="clearfix">
              <h2>National Lakeshore</h2>
              <h3><a href="/piro">Pictured Rocks</a></h3>
            </li>
          </ul>
        </body></html>
    "#;

    fn state_url() -> Url {
        Url::parse(STATE_URL).unwrap()
    }

    #[test]
    fn test_one_url_per_entry_in_document_order() {
        let urls = parse_site_list(MICHIGAN, &state_url()).unwrap();
        let urls: Vec<&str> = urls.iter().map(Url::as_str).collect();
        assert_eq!(
            urls,
            vec![
                "https://www.nps.gov/isro/index.htm",
                "https://www.nps.gov/kewe/index.htm",
                "https://www.nps.gov/piro/index.htm",
            ]
        );
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        // Presence check: an entry without an <h3> link is dropped rather
        // than aborting the whole list.
        let html = r#"
            <ul id="list_parks">
              <li><h2>National Park</h2><h3><a href="/isro/">Isle Royale</a></h3></li>
              <li><h2>Coming soon</h2></li>
              <li><h3>No link here</h3></li>
              <li><h3><a href="/kewe/">Keweenaw</a></h3></li>
            </ul>
        "#;

        let urls = parse_site_list(html, &state_url()).unwrap();

        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0].as_str(), "https://www.nps.gov/isro/index.htm");
        assert_eq!(urls[1].as_str(), "https://www.nps.gov/kewe/index.htm");
    }

    #[test]
    fn test_nested_lists_do_not_add_entries() {
        let html = r#"
            <ul id="list_parks">
              <li>
                <h3><a href="/isro/">Isle Royale</a></h3>
                <ul><li><h3><a href="/other/">Not a site</a></h3></li></ul>
              </li>
            </ul>
        "#;

        let urls = parse_site_list(html, &state_url()).unwrap();
        assert_eq!(urls.len(), 1);
    }

    #[test]
    fn test_empty_list() {
        let html = r#"<ul id="list_parks"></ul>"#;
        assert!(parse_site_list(html, &state_url()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_list_is_an_error() {
        let html = r#"<ul id="list_monuments"><li><h3><a href="/x/">X</a></h3></li></ul>"#;
        let result = parse_site_list(html, &state_url());
        assert!(matches!(result, Err(ScrapeError::MissingElement(PARK_LIST))));
    }

    #[tokio::test]
    async fn test_get_sites_for_state_builds_records_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileCache::new(temp_dir.path());
        let fetcher = StubFetcher::new()
            .with_page(STATE_URL, MICHIGAN)
            .with_page(
                "https://www.nps.gov/isro/index.htm",
                &sample_detail_page("Isle Royale", "National Park", "Houghton", "MI", "49931"),
            )
            .with_page(
                "https://www.nps.gov/kewe/index.htm",
                &sample_detail_page("Keweenaw", "National Historical Park", "Calumet", "MI", "49913"),
            )
            .with_page(
                "https://www.nps.gov/piro/index.htm",
                &sample_detail_page("Pictured Rocks", "National Lakeshore", "Munising", "MI", "49862"),
            );

        let sites = get_sites_for_state(&fetcher, &cache, &state_url()).await.unwrap();

        let names: Vec<&str> = sites.iter().map(NationalSite::name).collect();
        assert_eq!(names, vec!["Isle Royale", "Keweenaw", "Pictured Rocks"]);
        assert_eq!(fetcher.call_count(), 4);

        // Everything is cached now: a second pass is fully offline
        let again = get_sites_for_state(&fetcher, &cache, &state_url()).await.unwrap();
        assert_eq!(again, sites);
        assert_eq!(fetcher.call_count(), 4);
    }

    #[tokio::test]
    async fn test_a_failing_site_page_fails_the_state() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileCache::new(temp_dir.path());
        // No detail pages: the first site fetch answers 404
        let fetcher = StubFetcher::new().with_page(STATE_URL, MICHIGAN);

        let result = get_sites_for_state(&fetcher, &cache, &state_url()).await;

        assert!(matches!(result, Err(ScrapeError::Status { .. })));
    }
}
