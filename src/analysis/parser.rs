//! Response parser and normalizer.
//!
//! Converts the model's raw free-text response into an [`AnalysisResult`] or
//! [`TextQueryResult`]. The parser never fails: missing, reordered, or
//! malformed sections degrade to the field defaults defined on the result
//! types. The worst outcome for any input, including the empty string, is an
//! all-default result classified `Caution`.
//!
//! The image-path response is processed as a small state machine over blocks
//! (maximal runs of non-blank lines): the first line of each block is its
//! header, the header is dispatched to a section by case-insensitive
//! substring containment, and the remaining lines are accumulated according
//! to the section's extraction rule. First match wins; unclaimed blocks are
//! silently discarded.

use crate::analysis::classifier::{classify_safety, extract_alternatives, strip_bullet};
use crate::analysis::models::{AnalysisResult, TextQueryResult};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Section a block is dispatched to, in header-matching precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    FoodName,
    SafetyLevel,
    Explanation,
    Nutrition,
    HealthBenefits,
    Risks,
    Alternatives,
}

/// Match a block header to a section by substring containment.
///
/// A header that merely mentions a marker anywhere claims the block; the
/// first marker in this order wins.
fn detect_section(header: &str) -> Option<Section> {
    let header = header.to_lowercase();

    const MARKERS: [(&str, Section); 7] = [
        ("food name", Section::FoodName),
        ("safety level", Section::SafetyLevel),
        ("explanation", Section::Explanation),
        ("nutritional information", Section::Nutrition),
        ("health benefits", Section::HealthBenefits),
        ("risks", Section::Risks),
        ("alternatives", Section::Alternatives),
    ];

    MARKERS
        .iter()
        .find(|(marker, _)| header.contains(marker))
        .map(|(_, section)| *section)
}

/// Split raw text into blocks: maximal runs of non-blank lines.
fn blocks(raw: &str) -> Vec<Vec<&str>> {
    let mut result = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        result.push(current);
    }

    result
}

fn non_numeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9.]").unwrap())
}

/// Parse a nutrition value: strip everything but digits and dots, then parse.
/// Unparsable values resolve to zero. Stripping removes any sign, so the
/// result is always non-negative.
fn numeric_value(value: &str) -> f64 {
    non_numeric().replace_all(value, "").parse::<f64>().unwrap_or(0.0)
}

/// Collect bullet-stripped, non-empty lines after the header.
fn list_items(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| strip_bullet(line)).filter(|item| !item.is_empty()).collect()
}

/// Parse the structured response of an image analysis.
///
/// Never returns an error and never panics; any field whose section is
/// missing keeps its default.
pub fn parse_analysis(raw: &str) -> AnalysisResult {
    debug!("Parsing analysis response ({} chars)", raw.len());

    let mut result = AnalysisResult::default();

    for block in blocks(raw) {
        let Some(section) = detect_section(block[0]) else {
            continue;
        };
        let body = &block[1..];

        match section {
            Section::FoodName => {
                if let Some(name) = body.first() {
                    let name = name.trim();
                    if !name.is_empty() {
                        result.food_name = name.to_string();
                    }
                }
            }
            Section::SafetyLevel => {
                result.safety_level = classify_safety(body.first().unwrap_or(&""));
            }
            Section::Explanation => {
                result.explanation = body.join("\n").trim().to_string();
            }
            Section::Nutrition => {
                for line in body {
                    let Some((key, value)) = line.split_once(':') else {
                        continue;
                    };
                    let key = key.trim().to_lowercase();
                    let value = value.trim();
                    if key.is_empty() || value.is_empty() {
                        continue;
                    }

                    if key.contains("protein") {
                        result.nutrition.protein = numeric_value(value);
                    } else if key.contains("fat") {
                        result.nutrition.fats = numeric_value(value);
                    } else if key.contains("carb") {
                        result.nutrition.carbs = numeric_value(value);
                    } else if key.contains("fiber") {
                        result.nutrition.fiber = numeric_value(value);
                    } else if key.contains("calor") {
                        result.nutrition.calories = numeric_value(value);
                    } else if key.contains("vitamin") {
                        result.nutrition.vitamins = value
                            .split([',', '&'])
                            .map(str::trim)
                            .filter(|v| !v.is_empty())
                            .map(String::from)
                            .collect();
                    }
                }
            }
            Section::HealthBenefits => {
                result.health_benefits = list_items(body);
            }
            Section::Risks => {
                result.risks = list_items(body);
            }
            Section::Alternatives => {
                result.alternatives = list_items(body);
            }
        }
    }

    result
}

/// Parse the unstructured response of a free-text question.
///
/// The whole response is the explanation; the safety level is classified
/// over the entire text and alternatives are mined by line scanning.
pub fn parse_text_query(raw: &str) -> TextQueryResult {
    debug!("Parsing text query response ({} chars)", raw.len());

    TextQueryResult {
        food_name: "Text Query".to_string(),
        safety_level: classify_safety(raw),
        explanation: raw.to_string(),
        alternatives: extract_alternatives(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::SafetyLevel;

    const WELL_FORMED: &str = "\
1. Food Name:
Carrot

2. Safety Level:
Safe for dogs in small amounts

3. Detailed Explanation:
Carrots are a healthy, crunchy treat.
They support dental health.

4. Nutritional Information (per 100g):
- Protein: 0.9%
- Fats: 0.2%
- Carbohydrates: 9.6%
- Fiber: 2.8%
- Calories: 41 kcal
- Vitamins & Minerals: Vitamin A, Vitamin K & Potassium

5. Health Benefits:
- Supports eye health
- Low in calories

6. Risks & Concerns:
- Choking hazard if fed whole

7. Safe Alternatives:
- Cucumber slices
- Green beans";

    #[test]
    fn test_well_formed_response_round_trip() {
        let result = parse_analysis(WELL_FORMED);

        assert_eq!(result.food_name, "Carrot");
        assert_eq!(result.safety_level, SafetyLevel::Safe);
        assert_eq!(
            result.explanation,
            "Carrots are a healthy, crunchy treat.\nThey support dental health."
        );
        assert_eq!(result.nutrition.protein, 0.9);
        assert_eq!(result.nutrition.fats, 0.2);
        assert_eq!(result.nutrition.carbs, 9.6);
        assert_eq!(result.nutrition.fiber, 2.8);
        assert_eq!(result.nutrition.calories, 41.0);
        assert_eq!(result.nutrition.vitamins, vec!["Vitamin A", "Vitamin K", "Potassium"]);
        assert_eq!(result.health_benefits, vec!["Supports eye health", "Low in calories"]);
        assert_eq!(result.risks, vec!["Choking hazard if fed whole"]);
        assert_eq!(result.alternatives, vec!["Cucumber slices", "Green beans"]);
    }

    #[test]
    fn test_no_recognized_headers_yields_defaults() {
        let result = parse_analysis("The weather is nice today.\n\nNothing to see here.");

        assert_eq!(result, AnalysisResult::default());
        assert_eq!(result.food_name, "Unknown Food");
        assert_eq!(result.safety_level, SafetyLevel::Caution);
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        assert_eq!(parse_analysis(""), AnalysisResult::default());
    }

    #[test]
    fn test_header_matching_is_substring_containment() {
        // The header merely mentions the marker; the block is still claimed.
        let result = parse_analysis("Here is the Food Name you asked about:\nBanana");
        assert_eq!(result.food_name, "Banana");
    }

    #[test]
    fn test_missing_food_name_line_keeps_default() {
        let result = parse_analysis("1. Food Name:\n\n2. Safety Level:\nSafe");
        assert_eq!(result.food_name, "Unknown Food");
        assert_eq!(result.safety_level, SafetyLevel::Safe);
    }

    #[test]
    fn test_safety_block_without_body_is_caution() {
        let result = parse_analysis("2. Safety Level:");
        assert_eq!(result.safety_level, SafetyLevel::Caution);
    }

    #[test]
    fn test_bullet_stripping_in_list_sections() {
        let result = parse_analysis("Risks\n- item one\n* item two\n• item three");
        assert_eq!(result.risks, vec!["item one", "item two", "item three"]);
    }

    #[test]
    fn test_list_sections_drop_empty_entries() {
        let result = parse_analysis("Health Benefits:\n- \n- real entry\n-");
        assert_eq!(result.health_benefits, vec!["real entry"]);
    }

    #[test]
    fn test_nutrition_values_never_negative() {
        let raw = "Nutritional Information:\n\
                   - Protein: -5%\n\
                   - Fats: garbage\n\
                   - Calories: 41 kcal\n\
                   - Fiber:\n\
                   - Carbohydrates: approx 9.6 g";
        let result = parse_analysis(raw);

        // The sign is stripped before parsing.
        assert_eq!(result.nutrition.protein, 5.0);
        assert_eq!(result.nutrition.fats, 0.0);
        assert_eq!(result.nutrition.calories, 41.0);
        assert_eq!(result.nutrition.fiber, 0.0);
        assert_eq!(result.nutrition.carbs, 9.6);
        for value in [
            result.nutrition.protein,
            result.nutrition.fats,
            result.nutrition.carbs,
            result.nutrition.fiber,
            result.nutrition.calories,
        ] {
            assert!(value >= 0.0);
            assert!(!value.is_nan());
        }
    }

    #[test]
    fn test_vitamins_split_on_comma_and_ampersand() {
        let result =
            parse_analysis("Nutritional Information:\n- Vitamins & Minerals: Vitamin A, Vitamin C & Potassium");
        assert_eq!(result.nutrition.vitamins, vec!["Vitamin A", "Vitamin C", "Potassium"]);
    }

    #[test]
    fn test_nutrition_lines_without_colon_are_skipped() {
        let result = parse_analysis("Nutritional Information:\nno colon here\n- Protein: 12%");
        assert_eq!(result.nutrition.protein, 12.0);
    }

    #[test]
    fn test_unmatched_blocks_are_discarded() {
        let raw = "Some preamble the model added.\n\n1. Food Name:\nApple";
        let result = parse_analysis(raw);
        assert_eq!(result.food_name, "Apple");
        assert!(result.explanation.is_empty());
    }

    #[test]
    fn test_later_block_overwrites_earlier_match() {
        let raw = "Food Name:\nApple\n\nFood Name:\nPear";
        assert_eq!(parse_analysis(raw).food_name, "Pear");
    }

    #[test]
    fn test_blocks_split_on_blank_lines() {
        let split = blocks("a\nb\n\n\nc\n   \nd");
        assert_eq!(split, vec![vec!["a", "b"], vec!["c"], vec!["d"]]);
    }

    #[test]
    fn test_detect_section_precedence_is_first_match() {
        // "risks" appears before "alternatives" in the marker table.
        assert_eq!(
            detect_section("Risks and Safe Alternatives"),
            Some(Section::Risks)
        );
    }

    #[test]
    fn test_numeric_value_scrubbing() {
        assert_eq!(numeric_value("41 kcal"), 41.0);
        assert_eq!(numeric_value("9.6%"), 9.6);
        assert_eq!(numeric_value("none"), 0.0);
        assert_eq!(numeric_value(""), 0.0);
    }

    #[test]
    fn test_parse_text_query() {
        let raw = "Grapes are toxic to dogs.\nOffer blueberries instead:\n- Blueberries";
        let result = parse_text_query(raw);

        assert_eq!(result.food_name, "Text Query");
        assert_eq!(result.safety_level, SafetyLevel::Unsafe);
        assert_eq!(result.explanation, raw);
        assert_eq!(result.alternatives, vec!["Blueberries"]);
    }

    #[test]
    fn test_parse_text_query_empty() {
        let result = parse_text_query("");
        assert_eq!(result.safety_level, SafetyLevel::Caution);
        assert!(result.alternatives.is_empty());
        assert!(result.explanation.is_empty());
    }
}
