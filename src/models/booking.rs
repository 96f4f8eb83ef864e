use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a booking. Transitions are owned by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Approved,
    Active,
    HandoverIn,
    HandoverOut,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Active => "ACTIVE",
            BookingStatus::HandoverIn => "HANDOVER_IN",
            BookingStatus::HandoverOut => "HANDOVER_OUT",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Čeká na schválení",
            BookingStatus::Approved => "Schváleno",
            BookingStatus::Active => "Právě půjčeno",
            BookingStatus::HandoverIn => "Čeká na předání",
            BookingStatus::HandoverOut => "Čeká na vrácení",
            BookingStatus::Completed => "Dokončeno",
            BookingStatus::Cancelled => "Zrušeno",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub listing_id: String,
    pub borrower_id: String,
    pub start_date: String,
    pub end_date: String,
    pub total_price: u64,
    pub deposit: u64,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handover_photos: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_photos: Option<Vec<String>>,
}
