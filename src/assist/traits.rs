use crate::assist::types::ListingSuggestion;
use async_trait::async_trait;

/// Generative helper for writing listings.
///
/// Both calls are single attempts. Failures are logged by the
/// implementation and come back as `None`.
#[async_trait]
pub trait ListingAssistant: Send + Sync {
    /// Description, deposit and rates proposed for an item
    async fn suggest_listing(&self, title: &str, category: &str) -> Option<ListingSuggestion>;

    /// Product photo as a `data:` URL
    async fn generate_image(&self, title: &str, category: &str) -> Option<String>;

    /// Get the name of the backing service
    fn provider_name(&self) -> &'static str;
}
