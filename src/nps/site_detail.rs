// src/nps/site_detail.rs
// =============================================================================
// Parses a national site's detail page (e.g. https://www.nps.gov/isro/index.htm)
// into a `NationalSite`.
//
// What we read:
//   name      .Hero-titleContainer a               (required)
//   category  .Hero-designation
//   phone     .tel
//   address   .adr [itemprop=addressLocality] + ", " + [itemprop=addressRegion]
//   zipcode   .adr [itemprop=postalCode]
//
// Only the name is required. Each optional lookup yields an Option, and
// `NationalSite::new` swaps a None for that field's placeholder. Missing
// markup for one field never affects the others.
// =============================================================================

use scraper::Html;
use url::Url;

use super::html::{element_text, first_text, selector};
use super::site::NationalSite;
use crate::cache::{CacheKey, FileCache};
use crate::error::{Result, ScrapeError};
use crate::fetch::{fetch_or_cache, Fetch};

const TITLE_CONTAINER: &str = ".Hero-titleContainer";
const TITLE_LINK: &str = ".Hero-titleContainer a";

/// Extracts a site record from its detail page HTML.
///
/// Fails with `MissingElement` when the title (and so the name) is missing;
/// every other field falls back to a placeholder.
pub fn parse_site_detail(html: &str) -> Result<NationalSite> {
    let document = Html::parse_document(html);

    let title_selector = selector(TITLE_CONTAINER)?;
    let link_selector = selector("a")?;
    let title = document
        .select(&title_selector)
        .next()
        .ok_or(ScrapeError::MissingElement(TITLE_CONTAINER))?;
    let name = title
        .select(&link_selector)
        .next()
        .map(element_text)
        .ok_or(ScrapeError::MissingElement(TITLE_LINK))?;

    let category = first_text(document.select(&selector(".Hero-designation")?));
    let phone = first_text(document.select(&selector(".tel")?));

    // City, region and postal code all live in the first address block
    let adr_selector = selector(".adr")?;
    let locality_selector = selector(r#"[itemprop="addressLocality"]"#)?;
    let region_selector = selector(r#"[itemprop="addressRegion"]"#)?;
    let postal_selector = selector(r#"[itemprop="postalCode"]"#)?;

    let adr = document.select(&adr_selector).next();

    let address = adr.and_then(|adr| {
        let city = first_text(adr.select(&locality_selector))?;
        let region = first_text(adr.select(&region_selector))?;
        Some(format!("{}, {}", city, region))
    });
    let zipcode = adr.and_then(|adr| first_text(adr.select(&postal_selector)));

    Ok(NationalSite::new(name, category, address, zipcode, phone))
}

/// Downloads (or reads from cache) one site's detail page and parses it
pub async fn get_site_instance<F: Fetch>(
    fetcher: &F,
    cache: &FileCache,
    site_url: &Url,
) -> Result<NationalSite> {
    let key = CacheKey::site_page(site_url);
    let html = fetch_or_cache(fetcher, cache, &key, site_url).await?;
    parse_site_detail(&html)
}

/// Builds a detail page the way nps.gov lays it out. Shared with the other
/// parser tests so they don't each carry a copy of the markup.
#[cfg(test)]
pub(crate) fn sample_detail_page(
    name: &str,
    category: &str,
    city: &str,
    region: &str,
    zipcode: &str,
) -> String {
    format!(
        r#"<html><body>
        <div class="Hero-titleContainer clearfix">
          <a href="/" class="Hero-title">{name}</a>
          <div class="Hero-designationContainer">
            <span class="Hero-designation">{category}</span>
          </div>
        </div>
        <div class="vcard">
          <p class="adr" itemprop="address" itemscope>
            <span itemprop="streetAddress">800 East Lakeshore Drive</span><br>
            <span itemprop="addressLocality">{city}</span>,
            <span itemprop="addressRegion" class="region">{region} </span>
            <span itemprop="postalCode" class="postal-code">{zipcode} </span>
          </p>
          <span itemprop="telephone" class="tel">
            (906) 482-0984
          </span>
        </div>
        </body></html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::StubFetcher;
    use crate::nps::site::placeholder;
    use tempfile::TempDir;

    #[test]
    fn test_parses_all_fields() {
        let html = sample_detail_page("Isle Royale", "National Park", "Houghton", "MI", "49931");
        let site = parse_site_detail(&html).unwrap();

        assert_eq!(site.name(), "Isle Royale");
        assert_eq!(site.category(), "National Park");
        assert_eq!(site.address(), "Houghton, MI");
        assert_eq!(site.zipcode(), "49931");
        assert_eq!(site.phone(), "(906) 482-0984");
        assert_eq!(site.info(), "Isle Royale (National Park): Houghton, MI 49931");
    }

    #[test]
    fn test_zipcode_keeps_plus_four_format() {
        let html = sample_detail_page("Yellowstone", "National Park", "Yellowstone National Park", "WY", "82190-0168");
        let site = parse_site_detail(&html).unwrap();
        assert_eq!(site.zipcode(), "82190-0168");
    }

    #[test]
    fn test_missing_optional_fields_become_placeholders() {
        let html = r#"<html><body>
            <div class="Hero-titleContainer clearfix"><a href="/">Bare Site</a></div>
        </body></html>"#;

        let site = parse_site_detail(html).unwrap();

        assert_eq!(site.name(), "Bare Site");
        assert_eq!(site.category(), placeholder::CATEGORY);
        assert_eq!(site.address(), placeholder::ADDRESS);
        assert_eq!(site.zipcode(), placeholder::ZIPCODE);
        assert_eq!(site.phone(), placeholder::PHONE);
    }

    #[test]
    fn test_fields_are_independent() {
        // Region is missing, so the address falls back, but the zipcode in
        // the same block is still picked up.
        let html = r#"<html><body>
            <div class="Hero-titleContainer clearfix"><a href="/">Half Site</a></div>
            <p class="adr">
              <span itemprop="addressLocality">Calumet</span>
              <span itemprop="postalCode">49913</span>
            </p>
        </body></html>"#;

        let site = parse_site_detail(html).unwrap();

        assert_eq!(site.address(), placeholder::ADDRESS);
        assert_eq!(site.zipcode(), "49913");
        assert_eq!(site.category(), placeholder::CATEGORY);
    }

    #[test]
    fn test_missing_title_container_is_an_error() {
        let html = r#"<html><body><span class="Hero-designation">National Park</span></body></html>"#;
        let result = parse_site_detail(html);
        assert!(matches!(result, Err(ScrapeError::MissingElement(TITLE_CONTAINER))));
    }

    #[test]
    fn test_title_container_without_link_is_an_error() {
        let html = r#"<html><body><div class="Hero-titleContainer clearfix">Isle Royale</div></body></html>"#;
        let result = parse_site_detail(html);
        assert!(matches!(result, Err(ScrapeError::MissingElement(TITLE_LINK))));
    }

    #[tokio::test]
    async fn test_get_site_instance_fetches_once() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileCache::new(temp_dir.path());
        let url = "https://www.nps.gov/isro/index.htm";
        let fetcher = StubFetcher::new().with_page(
            url,
            &sample_detail_page("Isle Royale", "National Park", "Houghton", "MI", "49931"),
        );
        let site_url = Url::parse(url).unwrap();

        let first = get_site_instance(&fetcher, &cache, &site_url).await.unwrap();
        let second = get_site_instance(&fetcher, &cache, &site_url).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(fetcher.call_count(), 1);
    }
}
