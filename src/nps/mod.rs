// src/nps/mod.rs
// =============================================================================
// Scraping nps.gov.
//
// The site is read in two levels:
//   home page   -> which URL lists each state's sites  (state_index)
//   state page  -> which URL describes each site       (site_list)
//   site page   -> the site's name, address, ...       (site_detail)
//
// Every page goes through fetch::fetch_or_cache, so each one is downloaded
// at most once.
// =============================================================================

mod html;
mod site;
mod site_detail;
mod site_list;
mod state_index;

pub use site::{placeholder, NationalSite};
pub use site_detail::{get_site_instance, parse_site_detail};
pub use site_list::{get_sites_for_state, parse_site_list};
pub use state_index::{build_state_index, parse_state_index, StateIndex};

#[cfg(test)]
pub(crate) use site_detail::sample_detail_page;
