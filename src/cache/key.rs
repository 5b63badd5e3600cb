// src/cache/key.rs
// =============================================================================
// Cache keys.
//
// A key is (kind of resource, identifier). Pages are identified by their full
// URL, API responses by the postal code they were queried for. The file name
// is a SHA-256 of both parts, so two different resources can never land in
// the same file, no matter how similar their URLs look.
//
// The kind prefix stays readable in the file name, which makes a cache
// directory listing easy to eyeball:
//
//   state_index_3f1c....html
//   state_9a0b....html
//   site_77de....html
//   places_c41e....json
// =============================================================================

use sha2::{Digest, Sha256};
use url::Url;

/// What sort of resource a cache file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// The top-level page that lists every state
    StateIndex,
    /// One state's list of national sites
    StatePage,
    /// One national site's detail page
    SitePage,
    /// A geolocation API response for one postal code
    NearbyPlaces,
}

impl ResourceKind {
    fn prefix(self) -> &'static str {
        match self {
            ResourceKind::StateIndex => "state_index",
            ResourceKind::StatePage => "state",
            ResourceKind::SitePage => "site",
            ResourceKind::NearbyPlaces => "places",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ResourceKind::NearbyPlaces => "json",
            _ => "html",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    kind: ResourceKind,
    id: String,
}

impl CacheKey {
    pub fn new(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }

    pub fn state_index(url: &Url) -> Self {
        Self::new(ResourceKind::StateIndex, url.as_str())
    }

    pub fn state_page(url: &Url) -> Self {
        Self::new(ResourceKind::StatePage, url.as_str())
    }

    pub fn site_page(url: &Url) -> Self {
        Self::new(ResourceKind::SitePage, url.as_str())
    }

    pub fn nearby_places(zipcode: &str) -> Self {
        Self::new(ResourceKind::NearbyPlaces, zipcode)
    }

    /// File name for this key inside the cache directory
    pub fn file_name(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.kind.prefix().as_bytes());
        hasher.update(b"\n");
        hasher.update(self.id.as_bytes());
        format!(
            "{}_{}.{}",
            self.kind.prefix(),
            hex::encode(hasher.finalize()),
            self.kind.extension()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn test_file_name_is_stable() {
        let a = CacheKey::site_page(&url("https://www.nps.gov/isro/index.htm"));
        let b = CacheKey::site_page(&url("https://www.nps.gov/isro/index.htm"));
        assert_eq!(a.file_name(), b.file_name());
    }

    #[test]
    fn test_urls_sharing_a_prefix_do_not_collide() {
        // "isro" and "isrx" share the first three letters of the park code;
        // any fixed-width slice of the URL would risk mapping them together.
        let a = CacheKey::site_page(&url("https://www.nps.gov/isro/index.htm"));
        let b = CacheKey::site_page(&url("https://www.nps.gov/isrx/index.htm"));
        assert_ne!(a.file_name(), b.file_name());

        let mi = CacheKey::state_page(&url("https://www.nps.gov/state/mi/index.htm"));
        let mn = CacheKey::state_page(&url("https://www.nps.gov/state/mn/index.htm"));
        assert_ne!(mi.file_name(), mn.file_name());
    }

    #[test]
    fn test_same_id_different_kind_do_not_collide() {
        let page = url("https://www.nps.gov/");
        let index = CacheKey::state_index(&page);
        let state = CacheKey::state_page(&page);
        assert_ne!(index.file_name(), state.file_name());
    }

    #[test]
    fn test_file_name_format() {
        let key = CacheKey::nearby_places("82190-0168");
        let name = key.file_name();
        assert!(name.starts_with("places_"));
        assert!(name.ends_with(".json"));

        let digest = name
            .trim_start_matches("places_")
            .trim_end_matches(".json");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_pages_use_html_extension() {
        let key = CacheKey::state_index(&url("https://www.nps.gov"));
        assert!(key.file_name().starts_with("state_index_"));
        assert!(key.file_name().ends_with(".html"));
    }

    #[test]
    fn test_postal_codes_with_odd_characters_are_safe() {
        // "no zipcode" is what a site without an address ends up with
        let key = CacheKey::nearby_places("no zipcode");
        assert!(!key.file_name().contains(' '));
        assert!(!CacheKey::nearby_places("../../etc").file_name().contains('/'));
    }
}
