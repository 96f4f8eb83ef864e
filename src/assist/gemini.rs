use crate::assist::traits::ListingAssistant;
use crate::assist::types::ListingSuggestion;
use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

/// Client for the Generative Language `generateContent` endpoint
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    text_model: String,
    image_model: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

impl GenerateContentResponse {
    fn parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or(&[])
    }

    /// Text parts of the first candidate, joined
    pub fn text(&self) -> String {
        self.parts()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }

    /// First inline image of the first candidate as a `data:` URL
    pub fn inline_image(&self) -> Option<String> {
        self.parts().iter().find_map(|p| {
            p.inline_data.as_ref().map(|inline| {
                let mime = inline.mime_type.as_deref().unwrap_or("image/png");
                format!("data:{};base64,{}", mime, inline.data)
            })
        })
    }
}

/// Reads the structured suggestion out of a text response
pub fn parse_suggestion(text: &str) -> Result<ListingSuggestion> {
    serde_json::from_str(text.trim()).context("Failed to parse listing suggestion")
}

fn suggestion_prompt(title: &str, category: &str) -> String {
    format!(
        "Pomoz mi vytvořit profesionální inzerát pro P2P půjčovnu pro předmět \"{title}\" v kategorii \"{category}\". \
         Navrhni profesionální popis v češtině, ideální kauci a odhadovanou hodinovou, denní a měsíční sazbu v CZK."
    )
}

fn image_prompt(title: &str, category: &str) -> String {
    format!(
        "A high-quality, professional commercial product photograph of a \"{title}\" for a rental website. \
         The item should be clean, centered, and set against a neutral, minimal professional background. \
         Category: {category}. Style: modern, sharp focus, bright studio lighting."
    )
}

fn suggestion_request(title: &str, category: &str) -> Value {
    json!({
        "contents": [{ "role": "user", "parts": [{ "text": suggestion_prompt(title, category) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "suggestedDescription": { "type": "STRING" },
                    "suggestedDeposit": { "type": "NUMBER" },
                    "suggestedPricing": {
                        "type": "OBJECT",
                        "properties": {
                            "hourly": { "type": "NUMBER" },
                            "daily": { "type": "NUMBER" },
                            "monthly": { "type": "NUMBER" }
                        }
                    }
                },
                "required": ["suggestedDescription", "suggestedDeposit", "suggestedPricing"]
            }
        }
    })
}

fn image_request(title: &str, category: &str) -> Value {
    json!({
        "contents": [{ "role": "user", "parts": [{ "text": image_prompt(title, category) }] }]
    })
}

impl GeminiClient {
    /// Create a client from the configuration. Fails without an API key.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .context("GEMINI_API_KEY (or API_KEY) is not set")?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("sdilejto/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    async fn generate(&self, model: &str, body: &Value) -> Result<GenerateContentResponse> {
        let url = self.endpoint(model);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .context("Failed to reach the generative API")?;

        if !response.status().is_success() {
            warn!("Generative API returned status: {}", response.status());
            anyhow::bail!("Generative API request failed: {}", response.status());
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .context("Failed to read generateContent response")
    }

    pub async fn request_suggestion(&self, title: &str, category: &str) -> Result<ListingSuggestion> {
        let response = self
            .generate(&self.text_model, &suggestion_request(title, category))
            .await?;
        parse_suggestion(&response.text())
    }

    pub async fn request_image(&self, title: &str, category: &str) -> Result<Option<String>> {
        let response = self
            .generate(&self.image_model, &image_request(title, category))
            .await?;
        Ok(response.inline_image())
    }
}

#[async_trait]
impl ListingAssistant for GeminiClient {
    async fn suggest_listing(&self, title: &str, category: &str) -> Option<ListingSuggestion> {
        info!("Asking {} for listing copy: {}", self.provider_name(), title);
        match self.request_suggestion(title, category).await {
            Ok(suggestion) => Some(suggestion),
            Err(err) => {
                warn!("Listing suggestion failed: {:#}", err);
                None
            }
        }
    }

    async fn generate_image(&self, title: &str, category: &str) -> Option<String> {
        info!("Asking {} for a product photo: {}", self.provider_name(), title);
        match self.request_image(title, category).await {
            Ok(Some(image)) => {
                debug!("Received image payload of {} bytes", image.len());
                Some(image)
            }
            Ok(None) => {
                warn!("Response carried no image payload");
                None
            }
            Err(err) => {
                warn!("Image generation failed: {:#}", err);
                None
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "Gemini"
    }
}
