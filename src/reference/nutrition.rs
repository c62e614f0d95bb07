use serde::Serialize;

/// One daily nutrient requirement line in the nutrition guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyNeed {
    pub nutrient: &'static str,
    pub amount: &'static str,
    pub description: &'static str,
}

/// Species nutrition guide: daily needs, meal frequency by life stage, and
/// general feeding tips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NutritionGuide {
    pub daily_needs: &'static [DailyNeed],
    pub meal_frequency: &'static [(&'static str, &'static str)],
    pub tips: &'static [&'static str],
}

const DOG: NutritionGuide = NutritionGuide {
    daily_needs: &[
        DailyNeed {
            nutrient: "Protein",
            amount: "18-25%",
            description: "Essential for muscle maintenance and growth",
        },
        DailyNeed {
            nutrient: "Fat",
            amount: "8-15%",
            description: "Provides energy and supports coat health",
        },
        DailyNeed {
            nutrient: "Carbohydrates",
            amount: "30-70%",
            description: "Energy source and fiber for digestion",
        },
        DailyNeed {
            nutrient: "Calcium",
            amount: "1.0-1.8%",
            description: "Important for bone health",
        },
        DailyNeed {
            nutrient: "Water",
            amount: "60ml/kg",
            description: "Daily water intake requirement",
        },
    ],
    meal_frequency: &[
        ("puppy", "3-4 times daily"),
        ("adult", "2 times daily"),
        ("senior", "2-3 times daily"),
    ],
    tips: &[
        "Feed according to size and activity level",
        "Maintain consistent feeding schedule",
        "Avoid table scraps",
        "Monitor weight regularly",
        "Adjust portions based on activity",
    ],
};

const CAT: NutritionGuide = NutritionGuide {
    daily_needs: &[
        DailyNeed {
            nutrient: "Protein",
            amount: "26-30%",
            description: "Critical for muscle maintenance",
        },
        DailyNeed {
            nutrient: "Fat",
            amount: "20-24%",
            description: "Energy source and coat health",
        },
        DailyNeed {
            nutrient: "Taurine",
            amount: "0.1-0.2%",
            description: "Essential amino acid for heart health",
        },
        DailyNeed {
            nutrient: "Water",
            amount: "40-60ml/kg",
            description: "Daily water requirement",
        },
    ],
    meal_frequency: &[
        ("kitten", "3-4 times daily"),
        ("adult", "2-3 times daily"),
        ("senior", "2-3 times daily"),
    ],
    tips: &[
        "Cats are obligate carnivores",
        "Provide fresh water away from food",
        "Avoid dairy despite popular belief",
        "Monitor for food sensitivities",
        "Keep a consistent feeding routine",
    ],
};

/// Look up the nutrition guide for a species
pub fn nutrition_guide(species: &str) -> Option<&'static NutritionGuide> {
    match species {
        "dog" => Some(&DOG),
        "cat" => Some(&CAT),
        _ => None,
    }
}
