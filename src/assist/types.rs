use serde::{Deserialize, Serialize};

/// Rates proposed by the assistant, in CZK
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SuggestedPricing {
    #[serde(default)]
    pub hourly: Option<f64>,
    #[serde(default)]
    pub daily: Option<f64>,
    #[serde(default)]
    pub monthly: Option<f64>,
}

/// Listing copy proposed for a title and category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingSuggestion {
    pub suggested_description: String,
    pub suggested_deposit: f64,
    pub suggested_pricing: SuggestedPricing,
}

/// Largest amount (CZK) taken over from a suggestion
pub const MAX_SUGGESTED_AMOUNT: u64 = 10_000_000;

/// Whole currency units, capped at [`MAX_SUGGESTED_AMOUNT`]; negative and
/// non-finite amounts are dropped
pub fn whole_amount(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 {
        Some((value.round() as u64).min(MAX_SUGGESTED_AMOUNT))
    } else {
        None
    }
}
