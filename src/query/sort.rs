use crate::models::Listing;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Field a listing collection is ordered by
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// Headline rate: daily, else hourly, else zero
    Price,
    CreatedAt,
    /// Raw category tag
    Category,
    /// Earliest available date; always-available listings go last
    Availability,
    /// Any other field of the listing's JSON form
    Field(String),
}

impl SortKey {
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Price => "price",
            SortKey::CreatedAt => "createdAt",
            SortKey::Category => "category",
            SortKey::Availability => "availability",
            SortKey::Field(name) => name.as_str(),
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "price" => SortKey::Price,
            "createdAt" => SortKey::CreatedAt,
            "category" => SortKey::Category,
            "availability" => SortKey::Availability,
            other => SortKey::Field(other.to_string()),
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SortKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.parse() {
            Ok(key) => Ok(key),
            Err(never) => match never {},
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }

    /// Clicking a column: the ascending key flips to descending,
    /// anything else starts ascending.
    pub fn toggle(current: Option<&SortConfig>, key: SortKey) -> SortConfig {
        match current {
            Some(config) if config.key == key && config.direction == SortDirection::Asc => {
                SortConfig::desc(key)
            }
            _ => SortConfig::asc(key),
        }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig::desc(SortKey::CreatedAt)
    }
}

/// Comparable projection of one listing field
#[derive(Debug, Clone, PartialEq)]
enum SortValue {
    Number(f64),
    Text(String),
    /// Present but neither number nor text
    Untyped,
    /// No value at all; ordered after everything else in both directions
    Absent,
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Number(_) => 0,
            SortValue::Text(_) => 1,
            SortValue::Untyped => 2,
            SortValue::Absent => 3,
        }
    }

    fn compare(&self, other: &SortValue, direction: SortDirection) -> Ordering {
        match (self, other) {
            (SortValue::Absent, SortValue::Absent) => Ordering::Equal,
            (SortValue::Absent, _) => Ordering::Greater,
            (_, SortValue::Absent) => Ordering::Less,
            (SortValue::Number(a), SortValue::Number(b)) => direction.apply(a.total_cmp(b)),
            (SortValue::Text(a), SortValue::Text(b)) => direction.apply(a.cmp(b)),
            (a, b) => direction.apply(a.rank().cmp(&b.rank())),
        }
    }
}

fn sort_value(listing: &Listing, key: &SortKey) -> SortValue {
    match key {
        SortKey::Price => SortValue::Number(listing.pricing.headline() as f64),
        SortKey::CreatedAt => SortValue::Number(listing.created_at.timestamp_millis() as f64),
        SortKey::Category => SortValue::Text(listing.category.clone()),
        SortKey::Availability => match listing.earliest_availability() {
            Some(date) => SortValue::Number(date.num_days_from_ce() as f64),
            None => SortValue::Absent,
        },
        SortKey::Field(name) => field_value(listing, name),
    }
}

fn field_value(listing: &Listing, name: &str) -> SortValue {
    let Ok(value) = serde_json::to_value(listing) else {
        return SortValue::Untyped;
    };
    match value.get(name) {
        Some(serde_json::Value::Number(n)) => n.as_f64().map_or(SortValue::Untyped, SortValue::Number),
        Some(serde_json::Value::String(s)) => SortValue::Text(s.clone()),
        _ => SortValue::Untyped,
    }
}

/// Stable sort; `None` keeps the incoming order
pub fn sort_listings<'a>(listings: Vec<&'a Listing>, config: Option<&SortConfig>) -> Vec<&'a Listing> {
    let Some(config) = config else {
        return listings;
    };

    let mut keyed: Vec<(SortValue, &'a Listing)> = listings
        .into_iter()
        .map(|listing| (sort_value(listing, &config.key), listing))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.compare(b, config.direction));
    keyed.into_iter().map(|(_, listing)| listing).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_listings;
    use crate::models::Pricing;
    use chrono::{Duration, Utc};

    fn ids(listings: &[&Listing]) -> Vec<String> {
        listings.iter().map(|l| l.id.clone()).collect()
    }

    fn priced(rates: &[u64]) -> Vec<Listing> {
        let template = mock_listings(Utc::now()).remove(0);
        rates
            .iter()
            .enumerate()
            .map(|(i, rate)| Listing {
                id: format!("p-{i}"),
                pricing: Pricing::daily(*rate),
                ..template.clone()
            })
            .collect()
    }

    #[test]
    fn price_sort_and_toggle() {
        let listings = priced(&[300, 800, 600]);
        let refs: Vec<&Listing> = listings.iter().collect();

        let config = SortConfig::toggle(None, SortKey::Price);
        assert_eq!(config, SortConfig::asc(SortKey::Price));
        let sorted = sort_listings(refs.clone(), Some(&config));
        let prices: Vec<u64> = sorted.iter().map(|l| l.pricing.headline()).collect();
        assert_eq!(prices, vec![300, 600, 800]);

        let config = SortConfig::toggle(Some(&config), SortKey::Price);
        assert_eq!(config.direction, SortDirection::Desc);
        let sorted = sort_listings(refs, Some(&config));
        let prices: Vec<u64> = sorted.iter().map(|l| l.pricing.headline()).collect();
        assert_eq!(prices, vec![800, 600, 300]);
    }

    #[test]
    fn toggle_resets_on_new_key_and_after_descending() {
        let current = SortConfig::desc(SortKey::Price);
        assert_eq!(
            SortConfig::toggle(Some(&current), SortKey::Price),
            SortConfig::asc(SortKey::Price)
        );

        let current = SortConfig::asc(SortKey::Price);
        assert_eq!(
            SortConfig::toggle(Some(&current), SortKey::Category),
            SortConfig::asc(SortKey::Category)
        );
    }

    #[test]
    fn ties_keep_original_order() {
        let listings = priced(&[250, 100, 250, 250]);
        let refs: Vec<&Listing> = listings.iter().collect();

        let sorted = sort_listings(refs.clone(), Some(&SortConfig::asc(SortKey::Price)));
        assert_eq!(ids(&sorted), vec!["p-1", "p-0", "p-2", "p-3"]);

        let sorted = sort_listings(refs, Some(&SortConfig::desc(SortKey::Price)));
        assert_eq!(ids(&sorted), vec!["p-0", "p-2", "p-3", "p-1"]);
    }

    #[test]
    fn no_directive_passes_through() {
        let listings = priced(&[3, 1, 2]);
        let refs: Vec<&Listing> = listings.iter().collect();
        assert_eq!(ids(&sort_listings(refs, None)), vec!["p-0", "p-1", "p-2"]);
    }

    #[test]
    fn always_available_sorts_last_in_both_directions() {
        let now = Utc::now();
        let today = now.date_naive();
        let mut listings = mock_listings(now);
        listings.truncate(4);
        listings[0].availability = vec![today + Duration::days(3), today + Duration::days(1)];
        listings[1].availability = vec![];
        listings[2].availability = vec![today + Duration::days(2)];
        listings[3].availability = vec![today];
        let refs: Vec<&Listing> = listings.iter().collect();

        let asc = sort_listings(refs.clone(), Some(&SortConfig::asc(SortKey::Availability)));
        assert_eq!(ids(&asc), vec!["l-4", "l-1", "l-3", "l-2"]);

        let desc = sort_listings(refs, Some(&SortConfig::desc(SortKey::Availability)));
        assert_eq!(ids(&desc), vec!["l-3", "l-1", "l-4", "l-2"]);
    }

    #[test]
    fn created_at_and_category_keys() {
        let listings = mock_listings(Utc::now());
        let refs: Vec<&Listing> = listings.iter().collect();

        let newest = sort_listings(refs.clone(), Some(&SortConfig::default()));
        assert_eq!(newest[0].id, "l-4");
        assert_eq!(newest[newest.len() - 1].id, "l-5");

        let by_category = sort_listings(refs, Some(&SortConfig::asc(SortKey::Category)));
        let tags: Vec<&str> = by_category.iter().map(|l| l.category.as_str()).collect();
        let mut expected = tags.clone();
        expected.sort();
        assert_eq!(tags, expected);
        assert_eq!(by_category[0].id, "l-2");
    }

    #[test]
    fn other_keys_look_up_the_json_field() {
        let listings = mock_listings(Utc::now());
        let refs: Vec<&Listing> = listings.iter().collect();

        let key: SortKey = "deposit".parse().unwrap();
        assert_eq!(key, SortKey::Field("deposit".to_string()));
        let sorted = sort_listings(refs.clone(), Some(&SortConfig::desc(key)));
        assert_eq!(sorted[0].id, "l-2");
        assert_eq!(sorted[0].deposit, 10000);

        let sorted = sort_listings(refs.clone(), Some(&SortConfig::asc("title".parse().unwrap())));
        assert_eq!(sorted[0].title, "Dron DJI Mini 3 Pro");

        let unknown = sort_listings(refs.clone(), Some(&SortConfig::asc("nope".parse().unwrap())));
        assert_eq!(ids(&unknown), ids(&refs));
    }
}
