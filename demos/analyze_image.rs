/// Image Analysis Demo
///
/// Analyzes a food photo for a given pet species with a vision-capable
/// Gemini model and prints the structured assessment.
///
/// Usage:
///   cargo run --example analyze_image -- <image-path> [species]
///
/// Requirements:
///   - GEMINI_API_KEY set in the environment (or a .env file)
use base64::Engine;
use petdiet::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let Some(image_path) = args.next() else {
        eprintln!("Usage: analyze_image <image-path> [species]");
        std::process::exit(1);
    };
    let species = args.next().unwrap_or_else(|| "dog".to_string());

    let bytes = std::fs::read(&image_path)?;
    let image = base64::engine::general_purpose::STANDARD.encode(&bytes);

    println!("Analyzing {image_path} for a {species}...");
    println!();

    let gateway = GeminiGateway::new();
    let analyzer = FoodSafetyAnalyzer::new(DEFAULT_GEMINI_MODEL, Arc::new(gateway));

    let result = analyzer.analyze_image(&image, &species).await?;

    println!("Food:         {}", result.food_name);
    println!("Safety level: {:?}", result.safety_level);
    println!();
    println!("{}", result.explanation);
    println!();
    println!(
        "Nutrition per 100g: protein {}%, fats {}%, carbs {}%, fiber {}%, {} kcal",
        result.nutrition.protein,
        result.nutrition.fats,
        result.nutrition.carbs,
        result.nutrition.fiber,
        result.nutrition.calories
    );
    if !result.nutrition.vitamins.is_empty() {
        println!("Vitamins: {}", result.nutrition.vitamins.join(", "));
    }
    for benefit in &result.health_benefits {
        println!("+ {benefit}");
    }
    for risk in &result.risks {
        println!("! {risk}");
    }
    for alternative in &result.alternatives {
        println!("> {alternative}");
    }

    Ok(())
}
