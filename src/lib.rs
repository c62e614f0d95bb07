pub mod analysis;
pub mod error;
pub mod feedback;
pub mod llm;
pub mod reference;

pub use error::{PetDietError, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::analysis::{
        AnalysisResult, FoodSafetyAnalyzer, NutritionFacts, SafetyLevel, TextQueryResult,
    };
    pub use crate::error::{PetDietError, Result};
    pub use crate::feedback::{Feedback, FeedbackStore, InMemoryStore, JsonFileStore, NewFeedback};
    pub use crate::llm::gateways::{GeminiGateway, DEFAULT_GEMINI_MODEL};
    pub use crate::llm::{ModelGateway, PromptPart};
}
