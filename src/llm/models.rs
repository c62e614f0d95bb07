use base64::Engine;
use serde::{Deserialize, Serialize};

/// One part of a model prompt: either instruction text or an inline image.
///
/// Images travel as base64 payloads with an explicit MIME type, matching how
/// the hosted vision APIs accept inline data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptPart {
    Text(String),
    InlineImage { mime_type: String, data_base64: String },
}

impl PromptPart {
    /// Create a text part
    pub fn text(content: impl Into<String>) -> Self {
        PromptPart::Text(content.into())
    }

    /// Create an inline image part from an already base64-encoded payload
    pub fn inline_image(mime_type: impl Into<String>, data_base64: impl Into<String>) -> Self {
        PromptPart::InlineImage {
            mime_type: mime_type.into(),
            data_base64: data_base64.into(),
        }
    }

    /// Create an inline image part from raw bytes, base64-encoding them
    pub fn inline_image_from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        PromptPart::InlineImage {
            mime_type: mime_type.into(),
            data_base64: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}
