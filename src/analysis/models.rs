use serde::{Deserialize, Serialize};

/// Advisory safety classification for a food item relative to a pet species.
///
/// `Error` is part of the public type so callers can represent a failed
/// upstream call in the same field the UI renders, but the parser itself
/// never produces it; an unparseable response degrades to `Caution`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyLevel {
    Safe,
    Caution,
    Unsafe,
    Error,
}

impl Default for SafetyLevel {
    fn default() -> Self {
        SafetyLevel::Caution
    }
}

/// Per-100g nutrition estimate extracted from the model response.
///
/// All numeric fields are non-negative; values the parser cannot read
/// resolve to `0.0`, never NaN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub protein: f64,
    pub fats: f64,
    pub carbs: f64,
    pub fiber: f64,
    pub calories: f64,
    pub vitamins: Vec<String>,
}

/// Structured result of an image-based food safety analysis.
///
/// Built in a single pass by the response parser and not mutated afterward.
/// Missing sections in the model response are represented by these defaults
/// rather than by absent fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub food_name: String,
    pub safety_level: SafetyLevel,
    pub explanation: String,
    pub nutrition: NutritionFacts,
    pub health_benefits: Vec<String>,
    pub risks: Vec<String>,
    pub alternatives: Vec<String>,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            food_name: "Unknown Food".to_string(),
            safety_level: SafetyLevel::Caution,
            explanation: String::new(),
            nutrition: NutritionFacts::default(),
            health_benefits: Vec::new(),
            risks: Vec::new(),
            alternatives: Vec::new(),
        }
    }
}

/// Result of a free-text safety question.
///
/// The response to a text question has no fixed section contract, so only
/// the safety level and alternatives are mined from it; the explanation is
/// the whole raw response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextQueryResult {
    pub food_name: String,
    pub safety_level: SafetyLevel,
    pub explanation: String,
    pub alternatives: Vec<String>,
}
