use serde::{Deserialize, Serialize};

/// Activity level used by the daily calorie calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

/// Per-species multipliers applied to the resting energy requirement,
/// ordered low/moderate/high.
fn activity_factors(species: &str) -> Option<[f64; 3]> {
    match species {
        "dog" => Some([1.2, 1.4, 1.8]),
        "cat" => Some([1.2, 1.4, 1.6]),
        "horse" => Some([1.2, 1.4, 1.6]),
        "chicken" => Some([1.0, 1.2, 1.4]),
        "cow" => Some([1.1, 1.3, 1.5]),
        "buffalo" => Some([1.1, 1.3, 1.5]),
        "pig" => Some([1.1, 1.3, 1.5]),
        "pigeon" => Some([1.0, 1.2, 1.4]),
        "parrot" => Some([1.0, 1.2, 1.4]),
        "turtle" => Some([0.8, 1.0, 1.2]),
        "fish" => Some([0.8, 1.0, 1.2]),
        _ => None,
    }
}

/// Estimate daily calories for a species at a given body weight.
///
/// RER = 70 * weight^0.75, scaled by the species activity factor and rounded
/// to the nearest whole kilocalorie. Unknown species yield `None`.
pub fn daily_calories(species: &str, weight: f64, activity: ActivityLevel) -> Option<f64> {
    if !weight.is_finite() || weight <= 0.0 {
        return None;
    }

    let factors = activity_factors(species)?;
    let factor = match activity {
        ActivityLevel::Low => factors[0],
        ActivityLevel::Moderate => factors[1],
        ActivityLevel::High => factors[2],
    };

    let rer = 70.0 * weight.powf(0.75);
    Some((rer * factor).round())
}
