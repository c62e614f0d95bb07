/// Text Question Demo
///
/// Asks the model a free-text food safety question for a pet species and
/// prints the mined answer.
///
/// Usage:
///   cargo run --example ask_question -- "Can dogs eat grapes?" [species]
///
/// Requirements:
///   - GEMINI_API_KEY set in the environment (or a .env file)
use petdiet::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let Some(question) = args.next() else {
        eprintln!("Usage: ask_question <question> [species]");
        std::process::exit(1);
    };
    let species = args.next().unwrap_or_else(|| "dog".to_string());

    let gateway = GeminiGateway::new();
    let analyzer = FoodSafetyAnalyzer::new(DEFAULT_GEMINI_MODEL, Arc::new(gateway));

    let result = analyzer.analyze_text(&question, &species).await?;

    println!("Safety level: {:?}", result.safety_level);
    println!();
    println!("{}", result.explanation);

    if !result.alternatives.is_empty() {
        println!();
        println!("Suggested alternatives:");
        for alternative in &result.alternatives {
            println!("- {alternative}");
        }
    }

    Ok(())
}
