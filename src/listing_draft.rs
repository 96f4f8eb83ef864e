use crate::assist::{whole_amount, ListingAssistant, ListingSuggestion};
use crate::catalog::{DEFAULT_ADDRESS, DEFAULT_LOCATION};
use crate::models::{is_known_category, Listing, Location, Manual, ManualKind, Pricing};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Prosím vyplňte: {}.", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Neznámá kategorie: {0}")]
    UnknownCategory(String),

    #[error("Nejdříve zadejte název, aby vám AI mohla pomoci!")]
    TitleRequired,

    #[error("Generování obrázku selhalo. Zkuste to prosím znovu.")]
    ImageGenerationFailed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PricingType {
    #[default]
    Daily,
    Hourly,
}

/// The create-listing form before it is published
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub pricing_type: PricingType,
    pub price: Option<u64>,
    pub deposit: Option<u64>,
    pub address: String,
    pub always_available: bool,
    pub available_from: Option<NaiveDate>,
    pub available_to: Option<NaiveDate>,
    /// `None` when the owner provides no manual
    pub manual_kind: Option<ManualKind>,
    pub manual_data: String,
    /// Newest first
    pub images: Vec<String>,
}

impl ListingDraft {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: "tools".to_string(),
            pricing_type: PricingType::Daily,
            price: None,
            deposit: None,
            address: DEFAULT_ADDRESS.to_string(),
            always_available: true,
            available_from: Some(today),
            available_to: None,
            manual_kind: None,
            manual_data: String::new(),
            images: Vec::new(),
        }
    }

    fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Overwrites copy, deposit and price with the assistant's proposal
    pub fn apply_suggestion(&mut self, suggestion: &ListingSuggestion) {
        let rates = &suggestion.suggested_pricing;
        self.description = suggestion.suggested_description.clone();
        self.deposit = whole_amount(suggestion.suggested_deposit);
        self.price = match self.pricing_type {
            PricingType::Daily => rates.daily.or(rates.hourly),
            PricingType::Hourly => rates.hourly,
        }
        .and_then(whole_amount);
    }

    /// Returns `false` when the assistant had nothing usable; the draft is then untouched.
    pub async fn request_ai_help(&mut self, assistant: &dyn ListingAssistant) -> Result<bool, DraftError> {
        if !self.has_title() {
            return Err(DraftError::TitleRequired);
        }

        match assistant.suggest_listing(&self.title, &self.category).await {
            Some(suggestion) => {
                self.apply_suggestion(&suggestion);
                info!("Applied {} suggestion to '{}'", assistant.provider_name(), self.title);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Puts a generated photo in front of the existing ones
    pub async fn generate_image(&mut self, assistant: &dyn ListingAssistant) -> Result<(), DraftError> {
        if !self.has_title() {
            return Err(DraftError::TitleRequired);
        }

        let image = assistant
            .generate_image(&self.title, &self.category)
            .await
            .ok_or(DraftError::ImageGenerationFailed)?;
        self.images.insert(0, image);
        Ok(())
    }

    fn validate(&self) -> Result<(), DraftError> {
        let mut missing = Vec::new();
        if !self.has_title() {
            missing.push("název");
        }
        if self.price.is_none() {
            missing.push("cenu");
        }
        if self.deposit.is_none() {
            missing.push("kauci");
        }
        if !missing.is_empty() {
            return Err(DraftError::MissingFields(missing));
        }

        if !is_known_category(&self.category) {
            return Err(DraftError::UnknownCategory(self.category.clone()));
        }
        Ok(())
    }

    /// Validates the form and turns it into a published listing
    pub fn submit(&self, id: impl Into<String>, owner_id: impl Into<String>, now: DateTime<Utc>) -> Result<Listing, DraftError> {
        self.validate()?;

        let price = self.price.unwrap_or_default();
        let pricing = match self.pricing_type {
            PricingType::Daily => Pricing::daily(price),
            PricingType::Hourly => Pricing::hourly(price),
        };

        let availability = if self.always_available {
            Vec::new()
        } else {
            [self.available_from, self.available_to]
                .into_iter()
                .flatten()
                .collect()
        };

        let manual = self.manual_kind.map(|kind| Manual {
            kind,
            content: self.manual_data.clone(),
        });

        let listing = Listing {
            id: id.into(),
            owner_id: owner_id.into(),
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            category: self.category.clone(),
            pricing,
            deposit: self.deposit.unwrap_or_default(),
            location: Location {
                lat: DEFAULT_LOCATION.lat,
                lng: DEFAULT_LOCATION.lng,
                address: self.address.clone(),
            },
            images: self.images.clone(),
            manual,
            availability,
            created_at: now,
        };

        debug!("Draft '{}' published as {}", listing.title, listing.id);
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assist::SuggestedPricing;
    use async_trait::async_trait;
    use chrono::Duration;

    struct StubAssistant {
        suggestion: Option<ListingSuggestion>,
        image: Option<String>,
    }

    #[async_trait]
    impl ListingAssistant for StubAssistant {
        async fn suggest_listing(&self, _title: &str, _category: &str) -> Option<ListingSuggestion> {
            self.suggestion.clone()
        }

        async fn generate_image(&self, _title: &str, _category: &str) -> Option<String> {
            self.image.clone()
        }

        fn provider_name(&self) -> &'static str {
            "Stub"
        }
    }

    fn silent() -> StubAssistant {
        StubAssistant {
            suggestion: None,
            image: None,
        }
    }

    fn suggestion(hourly: Option<f64>, daily: Option<f64>) -> ListingSuggestion {
        ListingSuggestion {
            suggested_description: "Výkonná vrtačka s příslušenstvím.".to_string(),
            suggested_deposit: 1999.6,
            suggested_pricing: SuggestedPricing {
                hourly,
                daily,
                monthly: Some(4000.0),
            },
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
    }

    fn filled() -> ListingDraft {
        let mut draft = ListingDraft::new(today());
        draft.title = "Vrtačka Bosch".to_string();
        draft.price = Some(250);
        draft.deposit = Some(1500);
        draft
    }

    #[test]
    fn submit_requires_title_price_and_deposit() {
        let draft = ListingDraft::new(today());
        let err = draft.submit("l-13", "user-1", Utc::now()).unwrap_err();
        assert_eq!(err, DraftError::MissingFields(vec!["název", "cenu", "kauci"]));
        assert_eq!(err.to_string(), "Prosím vyplňte: název, cenu, kauci.");

        let mut draft = filled();
        draft.deposit = None;
        assert_eq!(
            draft.submit("l-13", "user-1", Utc::now()).unwrap_err(),
            DraftError::MissingFields(vec!["kauci"])
        );
    }

    #[test]
    fn submit_rejects_unknown_category() {
        let mut draft = filled();
        draft.category = "boats".to_string();
        assert_eq!(
            draft.submit("l-13", "user-1", Utc::now()).unwrap_err(),
            DraftError::UnknownCategory("boats".to_string())
        );
    }

    #[test]
    fn submit_builds_listing_from_form() {
        let now = Utc::now();
        let mut draft = filled();
        draft.pricing_type = PricingType::Hourly;
        draft.always_available = false;
        draft.available_to = Some(today() + Duration::days(7));
        draft.manual_kind = Some(ManualKind::Link);
        draft.manual_data = "https://example.cz/navod.pdf".to_string();

        let listing = draft.submit("l-13", "user-1", now).unwrap();
        assert_eq!(listing.pricing, Pricing::hourly(250));
        assert!(listing.pricing.is_hourly());
        assert_eq!(listing.deposit, 1500);
        assert_eq!(listing.availability, vec![today(), today() + Duration::days(7)]);
        assert_eq!(listing.manual.as_ref().unwrap().kind, ManualKind::Link);
        assert_eq!(listing.location.address, DEFAULT_ADDRESS);
        assert_eq!(listing.created_at, now);
    }

    #[test]
    fn always_available_and_partial_range() {
        let listing = filled().submit("l-13", "user-1", Utc::now()).unwrap();
        assert!(listing.availability.is_empty());
        assert!(listing.manual.is_none());

        let mut draft = filled();
        draft.always_available = false;
        let listing = draft.submit("l-14", "user-1", Utc::now()).unwrap();
        assert_eq!(listing.availability, vec![today()]);
    }

    #[tokio::test]
    async fn ai_help_fills_daily_form() {
        let assistant = StubAssistant {
            suggestion: Some(suggestion(Some(60.0), None)),
            image: None,
        };
        let mut draft = ListingDraft::new(today());
        draft.title = "Vrtačka".to_string();

        assert!(draft.request_ai_help(&assistant).await.unwrap());
        assert_eq!(draft.description, "Výkonná vrtačka s příslušenstvím.");
        assert_eq!(draft.deposit, Some(2000));
        // no daily rate suggested, so the hourly one is used
        assert_eq!(draft.price, Some(60));
    }

    #[tokio::test]
    async fn ai_help_on_hourly_form_ignores_daily_rate() {
        let assistant = StubAssistant {
            suggestion: Some(suggestion(None, Some(300.0))),
            image: None,
        };
        let mut draft = filled();
        draft.pricing_type = PricingType::Hourly;

        assert!(draft.request_ai_help(&assistant).await.unwrap());
        assert_eq!(draft.price, None);
    }

    #[tokio::test]
    async fn failed_ai_help_leaves_draft_untouched() {
        let mut draft = filled();
        draft.description = "Můj popis".to_string();

        assert!(!draft.request_ai_help(&silent()).await.unwrap());
        assert_eq!(draft.description, "Můj popis");
        assert_eq!(draft.price, Some(250));

        let mut untitled = ListingDraft::new(today());
        assert_eq!(
            untitled.request_ai_help(&silent()).await,
            Err(DraftError::TitleRequired)
        );
    }

    #[tokio::test]
    async fn generated_image_goes_first() {
        let assistant = StubAssistant {
            suggestion: None,
            image: Some("data:image/png;base64,QUJD".to_string()),
        };
        let mut draft = filled();
        draft.images.push("https://example.cz/old.jpg".to_string());

        draft.generate_image(&assistant).await.unwrap();
        assert_eq!(draft.images[0], "data:image/png;base64,QUJD");
        assert_eq!(draft.images.len(), 2);

        assert_eq!(
            draft.generate_image(&silent()).await,
            Err(DraftError::ImageGenerationFailed)
        );
        assert_eq!(draft.images.len(), 2);
    }
}
