use crate::analysis::models::{AnalysisResult, TextQueryResult};
use crate::analysis::parser::{parse_analysis, parse_text_query};
use crate::analysis::prompt::{image_prompt, text_prompt};
use crate::error::Result;
use crate::llm::gateway::ModelGateway;
use crate::llm::models::PromptPart;
use std::sync::Arc;
use tracing::info;

/// Main interface for food safety analysis
///
/// Ties the prompt builder, the model gateway, and the response parser
/// together. Gateway failures propagate unchanged to the caller; the parser
/// only runs on a successful response and itself never fails.
pub struct FoodSafetyAnalyzer {
    model: String,
    gateway: Arc<dyn ModelGateway>,
}

impl FoodSafetyAnalyzer {
    /// Create a new analyzer for the given model
    pub fn new(model: impl Into<String>, gateway: Arc<dyn ModelGateway>) -> Self {
        Self {
            model: model.into(),
            gateway,
        }
    }

    /// Analyze a food image for the given pet species.
    ///
    /// Accepts either a bare base64 payload or a `data:image/...;base64,`
    /// URL as produced by browser camera capture; the data-URL header is
    /// stripped before sending. The image travels as JPEG inline data.
    pub async fn analyze_image(
        &self,
        image_base64: &str,
        pet_type: &str,
    ) -> Result<AnalysisResult> {
        info!("Analyzing food image for pet type: {}", pet_type);

        let image_data = strip_data_url(image_base64);
        let parts = vec![
            PromptPart::text(image_prompt(pet_type)),
            PromptPart::inline_image("image/jpeg", image_data),
        ];

        let raw = self.gateway.generate(&self.model, &parts).await?;

        Ok(parse_analysis(&raw))
    }

    /// Answer a free-text food safety question for the given pet species.
    pub async fn analyze_text(
        &self,
        question: &str,
        pet_type: &str,
    ) -> Result<TextQueryResult> {
        info!("Answering food safety question for pet type: {}", pet_type);

        let parts = vec![PromptPart::text(text_prompt(question, pet_type))];

        let raw = self.gateway.generate(&self.model, &parts).await?;

        Ok(parse_text_query(&raw))
    }
}

/// Return the base64 payload of a data URL, or the input unchanged when it
/// carries no data-URL header.
fn strip_data_url(input: &str) -> &str {
    if input.starts_with("data:") {
        input.split_once(',').map(|(_, data)| data).unwrap_or(input)
    } else {
        input
    }
}
