// src/places/mod.rs
// =============================================================================
// Nearby places from the MapQuest radius search API.
//
// Submodules:
// - client: builds the query, handles the per-postal-code cache
// - response: the parts of the JSON response we care about
// =============================================================================

mod client;
mod response;

pub use client::{CacheLookup, PlacesClient, MAX_MATCHES, SEARCH_RADIUS};
pub use response::{placeholder, NearbyPlaces, PlaceFields, ResponseInfo, SearchResult};
