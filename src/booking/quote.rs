use crate::models::Listing;
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

/// The period a borrower asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingWindow {
    /// Same-day rental, billed per started hour of the clock
    Hours {
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    },
    /// Billed per calendar day, both ends included
    Days { start: NaiveDate, end: NaiveDate },
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Quote {
    pub rent: u64,
    pub deposit: u64,
    pub total: u64,
}

/// `rate × max(1, end hour − start hour)`; minutes are ignored.
/// Amounts saturate at `u64::MAX`.
pub fn hourly_rent(rate: u64, start: NaiveTime, end: NaiveTime) -> u64 {
    let hours = (i64::from(end.hour()) - i64::from(start.hour())).max(1);
    rate.saturating_mul(hours as u64)
}

/// `rate × max(1, days from start to end inclusive)`
pub fn daily_rent(rate: u64, start: NaiveDate, end: NaiveDate) -> u64 {
    let days = ((end - start).num_days() + 1).max(1);
    rate.saturating_mul(days as u64)
}

pub fn quote(listing: &Listing, window: &BookingWindow) -> Quote {
    let rent = match *window {
        BookingWindow::Hours { start, end, .. } => hourly_rent(listing.pricing.hourly.unwrap_or(0), start, end),
        BookingWindow::Days { start, end } => daily_rent(listing.pricing.daily.unwrap_or(0), start, end),
    };

    Quote {
        rent,
        deposit: listing.deposit,
        total: rent.saturating_add(listing.deposit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_listings;
    use crate::models::Pricing;
    use chrono::{Duration, Utc};

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn hourly_rent_counts_whole_hours() {
        assert_eq!(hourly_rent(100, at(9, 0), at(17, 0)), 800);
        assert_eq!(hourly_rent(100, at(9, 45), at(10, 15)), 100);
        assert_eq!(hourly_rent(100, at(12, 0), at(12, 0)), 100);
        assert_eq!(hourly_rent(100, at(17, 0), at(9, 0)), 100);
    }

    #[test]
    fn daily_rent_counts_both_ends() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        assert_eq!(daily_rent(300, day, day + Duration::days(2)), 900);
        assert_eq!(daily_rent(300, day, day), 300);
        assert_eq!(daily_rent(300, day, day - Duration::days(3)), 300);

        let end_of_month = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let next_month = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(daily_rent(100, end_of_month, next_month), 300);
    }

    #[test]
    fn quote_adds_deposit() {
        let mut listing = mock_listings(Utc::now()).remove(0);
        let day = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();

        let daily = quote(
            &listing,
            &BookingWindow::Days {
                start: day,
                end: day + Duration::days(2),
            },
        );
        assert_eq!(daily, Quote { rent: 900, deposit: 2000, total: 2900 });

        listing.pricing = Pricing::hourly(100);
        let hourly = quote(
            &listing,
            &BookingWindow::Hours {
                date: day,
                start: at(9, 0),
                end: at(17, 0),
            },
        );
        assert_eq!(hourly.rent, 800);
        assert_eq!(hourly.total, 2800);
    }

    #[test]
    fn huge_rates_saturate_instead_of_overflowing() {
        let mut listing = mock_listings(Utc::now()).remove(0);
        listing.pricing = Pricing::daily(u64::MAX / 2);
        let day = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();

        let daily = quote(
            &listing,
            &BookingWindow::Days {
                start: day,
                end: day + Duration::days(2),
            },
        );
        assert_eq!(daily.rent, u64::MAX);
        assert_eq!(daily.total, u64::MAX);

        listing.pricing = Pricing::hourly(u64::MAX / 4);
        listing.deposit = u64::MAX;
        let hourly = quote(
            &listing,
            &BookingWindow::Hours {
                date: day,
                start: at(8, 0),
                end: at(20, 0),
            },
        );
        assert_eq!(hourly.rent, u64::MAX);
        assert_eq!(hourly.total, u64::MAX);
    }
}
