pub mod booking;
pub mod category;
pub mod user;

pub use booking::{Booking, BookingStatus};
pub use category::{category_display, is_known_category, CategoryDisplay, CATEGORIES};
pub use user::User;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A point on the map, in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Location information for a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

impl Location {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Rental rates offered by a listing. At least one rate must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Pricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly: Option<u64>,
}

impl Pricing {
    pub fn daily(rate: u64) -> Self {
        Self {
            daily: Some(rate),
            ..Self::default()
        }
    }

    pub fn hourly(rate: u64) -> Self {
        Self {
            hourly: Some(rate),
            ..Self::default()
        }
    }

    pub fn has_rate(&self) -> bool {
        self.hourly.is_some() || self.daily.is_some() || self.monthly.is_some()
    }

    /// The "price from" figure: daily rate, else hourly, else zero.
    /// A zero rate counts as unset.
    pub fn headline(&self) -> u64 {
        self.daily
            .filter(|rate| *rate > 0)
            .or(self.hourly.filter(|rate| *rate > 0))
            .unwrap_or(0)
    }

    /// Hourly listings are booked by the hour; anything with a daily rate is booked by the day.
    pub fn is_hourly(&self) -> bool {
        self.hourly.is_some() && self.daily.is_none()
    }

    pub fn unit_label(&self) -> &'static str {
        if self.daily.is_some() {
            "den"
        } else {
            "hod"
        }
    }
}

/// How the usage manual of an item is provided
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ManualKind {
    Link,
    Pdf,
    Text,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manual {
    #[serde(rename = "type")]
    pub kind: ManualKind,
    pub content: String,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub pricing: Pricing,
    pub deposit: u64,
    pub location: Location,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual: Option<Manual>,
    /// Dates the item can be picked up; empty means always available
    #[serde(default)]
    pub availability: Vec<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    pub fn earliest_availability(&self) -> Option<NaiveDate> {
        self.availability.iter().min().copied()
    }

    pub fn category_display(&self) -> CategoryDisplay {
        category_display(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn headline_prefers_daily_then_hourly() {
        assert_eq!(Pricing::daily(300).headline(), 300);
        assert_eq!(Pricing::hourly(100).headline(), 100);

        let both = Pricing {
            hourly: Some(50),
            daily: Some(400),
            monthly: None,
        };
        assert_eq!(both.headline(), 400);
        assert!(!both.is_hourly());

        let monthly_only = Pricing {
            monthly: Some(5000),
            ..Pricing::default()
        };
        assert_eq!(monthly_only.headline(), 0);
        assert!(monthly_only.has_rate());
        assert!(!Pricing::default().has_rate());
    }

    #[test]
    fn listing_serializes_with_camel_case_fields() {
        let listing = Listing {
            id: "l-1".to_string(),
            owner_id: "user-2".to_string(),
            title: "Vrtačka".to_string(),
            description: String::new(),
            category: "tools".to_string(),
            pricing: Pricing::daily(300),
            deposit: 2000,
            location: Location {
                lat: 50.0755,
                lng: 14.4378,
                address: "Praha 1".to_string(),
            },
            images: vec![],
            manual: None,
            availability: vec![NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()],
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["ownerId"], "user-2");
        assert_eq!(value["availability"][0], "2024-05-15");
        assert_eq!(value["pricing"]["daily"], 300);
        assert!(value["pricing"].get("hourly").is_none());
        assert!(value.get("createdAt").is_some());
    }
}
