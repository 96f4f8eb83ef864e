pub mod gemini;
pub mod traits;
pub mod types;

pub use gemini::GeminiClient;
pub use traits::ListingAssistant;
pub use types::{whole_amount, ListingSuggestion, SuggestedPricing, MAX_SUGGESTED_AMOUNT};
