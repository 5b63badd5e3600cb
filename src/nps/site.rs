// src/nps/site.rs
// =============================================================================
// The national site record.
//
// Every field is a plain String and is always present. When a detail page
// doesn't have the markup for an optional field we store a fixed placeholder
// instead (see `placeholder`), so printing a site never needs to care about
// what was missing.
// =============================================================================

use std::fmt;

/// Text used for optional fields whose markup is absent from the page
pub mod placeholder {
    pub const CATEGORY: &str = "no Category";
    pub const ADDRESS: &str = "no address";
    pub const ZIPCODE: &str = "no zipcode";
    pub const PHONE: &str = "no phone";
}

/// One national site, as scraped from its nps.gov detail page
///
/// Fields are private so a record can't change after it's built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NationalSite {
    /// e.g. "National Park"; some sites have an empty designation
    category: String,
    /// e.g. "Isle Royale"
    name: String,
    /// City and state, e.g. "Houghton, MI"
    address: String,
    /// Kept as text: "49931", "82190-0168"
    zipcode: String,
    /// e.g. "(906) 482-0984"
    phone: String,
}

impl NationalSite {
    /// Builds a record, substituting placeholders for absent optional fields.
    ///
    /// `None` means "the page had no markup for this field". A field that was
    /// present but empty stays empty.
    pub fn new(
        name: impl Into<String>,
        category: Option<String>,
        address: Option<String>,
        zipcode: Option<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.unwrap_or_else(|| placeholder::CATEGORY.to_string()),
            address: address.unwrap_or_else(|| placeholder::ADDRESS.to_string()),
            zipcode: zipcode.unwrap_or_else(|| placeholder::ZIPCODE.to_string()),
            phone: phone.unwrap_or_else(|| placeholder::PHONE.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// One-line summary: `Isle Royale (National Park): Houghton, MI 49931`
    pub fn info(&self) -> String {
        format!(
            "{} ({}): {} {}",
            self.name, self.category, self.address, self.zipcode
        )
    }
}

impl fmt::Display for NationalSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}
