use crate::models::{GeoPoint, Listing};
use serde::{Deserialize, Serialize};

/// Mean Earth radius used for distances (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometres (Haversine)
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Criteria for narrowing down the catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingFilter {
    /// Matched case-insensitively against the title; empty matches everything
    pub search: String,
    /// Exact category tag
    pub category: Option<String>,
    /// Position of the user, when known
    pub user_location: Option<GeoPoint>,
    /// Radius for the distance filter (km)
    pub max_distance_km: f64,
    /// Distance filter switch; ignored without a user location
    pub distance_enabled: bool,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            user_location: None,
            max_distance_km: 50.0,
            distance_enabled: false,
        }
    }
}

impl ListingFilter {
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_category(listing) && self.matches_search(listing) && self.matches_distance(listing)
    }

    fn matches_category(&self, listing: &Listing) -> bool {
        match &self.category {
            Some(category) => listing.category == *category,
            None => true,
        }
    }

    fn matches_search(&self, listing: &Listing) -> bool {
        listing
            .title
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    fn matches_distance(&self, listing: &Listing) -> bool {
        match (self.distance_enabled, self.user_location) {
            (true, Some(user)) => haversine_km(user, listing.location.point()) <= self.max_distance_km,
            _ => true,
        }
    }

    /// Keeps the matching listings in their original order
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }
}
