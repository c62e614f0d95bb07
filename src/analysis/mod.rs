pub mod analyzer;
pub mod classifier;
pub mod models;
pub mod parser;
pub mod prompt;

pub use analyzer::FoodSafetyAnalyzer;
pub use classifier::{classify_safety, extract_alternatives};
pub use models::{AnalysisResult, NutritionFacts, SafetyLevel, TextQueryResult};
pub use parser::{parse_analysis, parse_text_query};
