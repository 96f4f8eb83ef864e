//! Listing browse pipeline: filter, then sort, then paginate.
//!
//! Everything is recomputed from the full catalogue on each call; the
//! catalogue holds a few dozen records at most.

pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::{haversine_km, ListingFilter};
pub use paginate::{paginate, total_pages, PAGE_SIZE};
pub use sort::{sort_listings, SortConfig, SortDirection, SortKey};

use crate::models::{GeoPoint, Listing};
use thiserror::Error;
use tracing::{debug, info};

/// Range of the distance slider (km)
pub const MIN_DISTANCE_KM: f64 = 1.0;
pub const MAX_DISTANCE_KM: f64 = 100.0;

/// Why the user's position could not be obtained
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Geolokace není vaším prohlížečem podporována.")]
    Unsupported,

    #[error("Nepodařilo se získat vaši polohu. Zkontrolujte prosím oprávnění.")]
    PermissionDenied,
}

/// One page of browse results
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub items: Vec<&'a Listing>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

/// Browse inputs. Changing any of them sends the user back to page 1.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    filter: ListingFilter,
    sort: Option<SortConfig>,
    page: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            filter: ListingFilter::default(),
            sort: Some(SortConfig::default()),
            page: 1,
        }
    }
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &ListingFilter {
        &self.filter
    }

    pub fn sort(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn is_location_active(&self) -> bool {
        self.filter.distance_enabled
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.page = 1;
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.filter.category = category;
        self.page = 1;
    }

    /// Column-header behaviour, see [`SortConfig::toggle`]
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = Some(SortConfig::toggle(self.sort.as_ref(), key));
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: Option<SortConfig>) {
        self.sort = sort;
        self.page = 1;
    }

    /// Clamped to the slider range; NaN falls back to the default radius
    pub fn set_max_distance(&mut self, km: f64) {
        self.filter.max_distance_km = if km.is_nan() {
            ListingFilter::default().max_distance_km
        } else {
            km.clamp(MIN_DISTANCE_KM, MAX_DISTANCE_KM)
        };
        self.page = 1;
    }

    /// Outcome of a position request. On failure the filter is left as it
    /// was and the notice for the user is handed back.
    pub fn apply_location_fix(&mut self, fix: Result<GeoPoint, LocationError>) -> Result<(), LocationError> {
        let point = fix?;
        info!("Distance filter centred on {:.4}, {:.4}", point.lat, point.lng);
        self.filter.user_location = Some(point);
        self.filter.distance_enabled = true;
        self.page = 1;
        Ok(())
    }

    pub fn clear_location(&mut self) {
        self.filter.user_location = None;
        self.filter.distance_enabled = false;
        self.page = 1;
    }

    /// Drops search, category and the distance filter
    pub fn clear_filters(&mut self) {
        self.filter.search.clear();
        self.filter.category = None;
        self.filter.distance_enabled = false;
        self.page = 1;
    }

    /// Moves to `page`, kept within `1..=total_pages`
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Filtered and sorted listings, all pages
    pub fn results<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        let filtered = self.filter.apply(listings);
        debug!("{} of {} listings match", filtered.len(), listings.len());
        sort_listings(filtered, self.sort.as_ref())
    }

    pub fn page<'a>(&self, listings: &'a [Listing]) -> PageView<'a> {
        let results = self.results(listings);
        PageView {
            items: paginate(&results, self.page).to_vec(),
            page: self.page,
            total_pages: total_pages(results.len()),
            total_matches: results.len(),
        }
    }
}
