use crate::booking::quote::{quote, BookingWindow, Quote};
use crate::models::{Booking, BookingStatus, Listing};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// How long the simulated payment takes
pub const PAYMENT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStep {
    Selecting,
    Terms,
    Payment,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Vyberte datum {0}.")]
    MissingDate(&'static str),

    #[error("Datum {0} je v minulosti.")]
    DateInPast(NaiveDate),

    #[error("Konec výpůjčky ({end}) je před začátkem ({start}).")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("Nejdříve musíte souhlasit s podmínkami.")]
    TermsNotAccepted,

    #[error("Tento krok není možný ve fázi {0:?}.")]
    WrongStep(BookingStep),
}

/// What the booking flow hands over once payment went through
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub listing_id: String,
    pub total_rent: u64,
    pub deposit: u64,
    pub start: String,
    pub end: String,
}

impl BookingRequest {
    /// A fresh booking awaiting the owner's approval
    pub fn into_booking(self, id: impl Into<String>, borrower_id: impl Into<String>) -> Booking {
        Booking {
            id: id.into(),
            listing_id: self.listing_id,
            borrower_id: borrower_id.into(),
            start_date: self.start,
            end_date: self.end,
            total_price: self.total_rent,
            deposit: self.deposit,
            status: BookingStatus::Pending,
            handover_photos: None,
            return_photos: None,
        }
    }
}

/// Three-step booking flow: pick dates, accept terms, pay.
pub struct BookingWizard<'a> {
    listing: &'a Listing,
    today: NaiveDate,
    step: BookingStep,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    start_time: NaiveTime,
    end_time: NaiveTime,
    terms_accepted: bool,
}

impl<'a> BookingWizard<'a> {
    pub fn new(listing: &'a Listing, today: NaiveDate) -> Self {
        Self {
            listing,
            today,
            step: BookingStep::Selecting,
            start_date: None,
            end_date: None,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
            terms_accepted: false,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn is_hourly(&self) -> bool {
        self.listing.pricing.is_hourly()
    }

    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.start_date = Some(date);
    }

    pub fn set_end_date(&mut self, date: NaiveDate) {
        self.end_date = Some(date);
    }

    pub fn set_start_time(&mut self, time: NaiveTime) {
        self.start_time = time;
    }

    pub fn set_end_time(&mut self, time: NaiveTime) {
        self.end_time = time;
    }

    /// The selected period, once enough of it is filled in
    pub fn window(&self) -> Option<BookingWindow> {
        if self.is_hourly() {
            self.start_date.map(|date| BookingWindow::Hours {
                date,
                start: self.start_time,
                end: self.end_time,
            })
        } else {
            match (self.start_date, self.end_date) {
                (Some(start), Some(end)) => Some(BookingWindow::Days { start, end }),
                _ => None,
            }
        }
    }

    /// Running total; rent stays zero until the period is complete
    pub fn quote(&self) -> Quote {
        match self.window() {
            Some(window) => quote(self.listing, &window),
            None => Quote {
                rent: 0,
                deposit: self.listing.deposit,
                total: self.listing.deposit,
            },
        }
    }

    fn validate_selection(&self) -> Result<(), BookingError> {
        let start = self.start_date.ok_or(BookingError::MissingDate("začátku"))?;
        if start < self.today {
            return Err(BookingError::DateInPast(start));
        }
        if self.is_hourly() {
            return Ok(());
        }

        let end = self.end_date.ok_or(BookingError::MissingDate("konce"))?;
        if end < start {
            return Err(BookingError::EndBeforeStart { start, end });
        }
        Ok(())
    }

    /// Selecting → Terms
    pub fn review_terms(&mut self) -> Result<(), BookingError> {
        if self.step != BookingStep::Selecting {
            return Err(BookingError::WrongStep(self.step));
        }
        self.validate_selection()?;
        self.step = BookingStep::Terms;
        debug!("Booking {} moved to terms", self.listing.id);
        Ok(())
    }

    pub fn accept_terms(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    /// Terms → Payment, only with the terms accepted
    pub fn proceed_to_payment(&mut self) -> Result<(), BookingError> {
        if self.step != BookingStep::Terms {
            return Err(BookingError::WrongStep(self.step));
        }
        if !self.terms_accepted {
            return Err(BookingError::TermsNotAccepted);
        }
        self.step = BookingStep::Payment;
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            BookingStep::Selecting | BookingStep::Terms => BookingStep::Selecting,
            BookingStep::Payment => BookingStep::Terms,
        };
    }

    fn period_labels(&self) -> (String, String) {
        let start_date = self.start_date.map(|d| d.to_string()).unwrap_or_default();
        if self.is_hourly() {
            (
                format!("{} {}", start_date, self.start_time.format("%H:%M")),
                format!("{} {}", start_date, self.end_time.format("%H:%M")),
            )
        } else {
            let end_date = self.end_date.map(|d| d.to_string()).unwrap_or_default();
            (start_date, end_date)
        }
    }

    /// Simulated payment: waits `delay`, then produces the booking request.
    pub async fn pay(&self, delay: Duration) -> Result<BookingRequest, BookingError> {
        if self.step != BookingStep::Payment {
            return Err(BookingError::WrongStep(self.step));
        }

        let quote = self.quote();
        info!("Processing payment of {} CZK for {}", quote.total, self.listing.id);
        tokio::time::sleep(delay).await;

        let (start, end) = self.period_labels();
        Ok(BookingRequest {
            listing_id: self.listing.id.clone(),
            total_rent: quote.rent,
            deposit: quote.deposit,
            start,
            end,
        })
    }
}
