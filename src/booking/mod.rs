pub mod quote;
pub mod wizard;

pub use quote::{daily_rent, hourly_rent, quote, BookingWindow, Quote};
pub use wizard::{BookingError, BookingRequest, BookingStep, BookingWizard, PAYMENT_DELAY};
