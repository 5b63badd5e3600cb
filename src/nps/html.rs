// src/nps/html.rs
// =============================================================================
// Small helpers shared by the page parsers.
//
// We use the `scraper` crate, which parses HTML into a DOM (html5ever under
// the hood) and lets us query it with CSS selectors. Parsing never fails:
// broken markup just produces a DOM without the elements we look for, and
// that shows up as `None` from the lookups below.
// =============================================================================

use scraper::{ElementRef, Selector};
use url::Url;

use crate::error::{Result, ScrapeError};

/// Parses one of our constant CSS selectors
pub(crate) fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::InvalidSelector {
        selector: css,
        message: format!("{:?}", e),
    })
}

/// All text inside an element, with surrounding whitespace removed
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first match, or `None` if nothing matched
pub(crate) fn first_text<'a>(mut matches: impl Iterator<Item = ElementRef<'a>>) -> Option<String> {
    matches.next().map(element_text)
}

/// Resolves an href from a page against that page's URL
pub(crate) fn resolve(base: &Url, href: &str) -> Result<Url> {
    base.join(href).map_err(|source| ScrapeError::InvalidUrl {
        url: href.to_string(),
        source,
    })
}
