use crate::error::{PetDietError, Result};
use crate::llm::gateway::ModelGateway;
use crate::llm::models::PromptPart;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

/// Default vision-capable model used for food analysis
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Configuration for connecting to the Google Generative Language API
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub host: String,
    pub api_key: String,
    pub timeout: Option<std::time::Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        dotenv::dotenv().ok();
        Self {
            host: std::env::var("GEMINI_API_HOST")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            timeout: None,
        }
    }
}

/// Gateway for Google's hosted Gemini models
///
/// Sends prompt text plus optional inline images to the generateContent
/// endpoint and returns the raw response text. No retries, no streaming;
/// a failed call surfaces as a [`PetDietError`] and is never parsed.
pub struct GeminiGateway {
    client: Client,
    config: GeminiConfig,
}

impl GeminiGateway {
    /// Create a new Gemini gateway with configuration from the environment
    pub fn new() -> Self {
        Self::with_config(GeminiConfig::default())
    }

    /// Create a new Gemini gateway with custom configuration
    pub fn with_config(config: GeminiConfig) -> Self {
        let mut client_builder = Client::builder();

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build().unwrap();

        Self { client, config }
    }

    /// Create gateway with custom host, keeping the environment API key
    pub fn with_host(host: impl Into<String>) -> Self {
        Self::with_config(GeminiConfig {
            host: host.into(),
            ..Default::default()
        })
    }
}

impl Default for GeminiGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn generate(&self, model: &str, parts: &[PromptPart]) -> Result<String> {
        info!("Delegating to Gemini for content generation");
        debug!("Model: {}, Part count: {}", model, parts.len());

        let body = serde_json::json!({
            "contents": [{
                "parts": adapt_parts_to_gemini(parts)
            }]
        });

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.config.host, model
            ))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PetDietError::GatewayError(format!(
                "Gemini API error: {}",
                response.status()
            )));
        }

        let response_body: Value = response.json().await?;

        let text = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| PetDietError::GatewayError("No content in response".to_string()))?;

        Ok(text.to_string())
    }
}

// Part adapter for the generateContent wire format
fn adapt_parts_to_gemini(parts: &[PromptPart]) -> Vec<Value> {
    parts
        .iter()
        .map(|part| match part {
            PromptPart::Text(text) => serde_json::json!({ "text": text }),
            PromptPart::InlineImage { mime_type, data_base64 } => serde_json::json!({
                "inline_data": {
                    "mime_type": mime_type,
                    "data": data_base64
                }
            }),
        })
        .collect()
}
