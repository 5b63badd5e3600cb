// src/places/response.rs
// =============================================================================
// Typed view of a MapQuest radius search response.
//
// Only the parts we print are modelled. A trimmed-down response looks like:
//
//   {
//     "info": { "statuscode": 0, "messages": [] },
//     "searchResults": [
//       { "fields": { "name": "Keweenaw Brewing", "group_sic_code_name": "Bars",
//                     "address": "408 Shelden Ave", "city": "Houghton" } }
//     ]
//   }
//
// Any of the four place fields can be missing, null or empty. We keep them as
// Option<String> here and let the display side decide what to print instead.
// =============================================================================

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// What to print for a place field that's missing or empty
pub mod placeholder {
    pub const NAME: &str = "no name";
    pub const CATEGORY: &str = "no category";
    pub const ADDRESS: &str = "no address";
    pub const CITY: &str = "no city";
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NearbyPlaces {
    /// A response without results (or without the key at all) has no places
    #[serde(rename = "searchResults", default, deserialize_with = "null_as_empty")]
    pub search_results: Vec<SearchResult>,

    /// Status block; MapQuest reports errors such as a bad key here
    #[serde(default)]
    pub info: Option<ResponseInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub fields: PlaceFields,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlaceFields {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    /// Category label, e.g. "Restaurants"
    #[serde(default, deserialize_with = "lenient_string")]
    pub group_sic_code_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseInfo {
    /// 0 means success
    #[serde(default)]
    pub statuscode: i64,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub messages: Vec<String>,
}

impl ResponseInfo {
    pub fn is_error(&self) -> bool {
        self.statuscode != 0
    }
}

impl SearchResult {
    /// `Keweenaw Brewing (Bars): 408 Shelden Ave, Houghton`
    pub fn summary(&self) -> String {
        let fields = &self.fields;
        format!(
            "{} ({}): {}, {}",
            or_placeholder(&fields.name, placeholder::NAME),
            or_placeholder(&fields.group_sic_code_name, placeholder::CATEGORY),
            or_placeholder(&fields.address, placeholder::ADDRESS),
            or_placeholder(&fields.city, placeholder::CITY),
        )
    }
}

/// Empty strings count as missing
fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    match value.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => placeholder,
    }
}

/// `null` reads as an empty list
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a string, a number or a bool; anything else (null, objects...) is None
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}
