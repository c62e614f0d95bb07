//! Prompt construction for the food safety model calls.
//!
//! The image prompt pins the response to a fixed seven-section layout so the
//! parser can pick sections apart by their headings. The text-question prompt
//! has no section contract; its response is mined with weaker heuristics.
//!
//! The species string is interpolated as-is. The set of species is open-ended
//! and nothing here validates it.

/// Build the instruction prompt for an image analysis request.
pub fn image_prompt(pet_type: &str) -> String {
    format!(
        "Analyze this food image and determine if it's safe for a {pet_type}. \
Provide your response in the following format:

1. Food Name:
[Name of the food item]

2. Safety Level:
[Safe/Unsafe/Caution]

3. Detailed Explanation:
[Comprehensive explanation about why it's safe or unsafe for the pet]

4. Nutritional Information (per 100g):
- Protein: [number]%
- Fats: [number]%
- Carbohydrates: [number]%
- Fiber: [number]%
- Calories: [number] kcal
- Vitamins & Minerals: [List key nutrients separated by commas]

5. Health Benefits:
[List any health benefits for the pet]

6. Risks & Concerns:
[List any potential risks or concerns]

7. Safe Alternatives:
[If unsafe or requires caution, list safe alternatives]

Please ensure all nutritional values are provided as numbers with appropriate units."
    )
}

/// Build the instruction prompt for a free-text safety question.
pub fn text_prompt(question: &str, pet_type: &str) -> String {
    format!(
        "You are a pet diet expert. Answer this question about pet food safety: \"{question}\". \
Analyze if it's safe for {pet_type}s. Include nutritional benefits or concerns. \
If unsafe, suggest safe alternatives."
    )
}
