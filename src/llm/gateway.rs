use crate::error::Result;
use crate::llm::models::PromptPart;
use async_trait::async_trait;

/// Abstract interface for hosted generative-AI providers.
///
/// The core treats the model as a black box: a prompt (text plus optional
/// inline images) goes in, raw unstructured text comes out. There is no
/// streaming, no partial results, and no cancellation contract; callers
/// either await a complete response or receive an error. Upstream failures
/// are propagated unchanged and the response parser is never invoked on a
/// failed call.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Generate a raw text response for the given prompt parts
    async fn generate(&self, model: &str, parts: &[PromptPart]) -> Result<String>;
}
