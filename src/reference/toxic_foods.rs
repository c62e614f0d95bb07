use serde::Serialize;

/// A food known to be risky for a species, with advisory context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToxicFood {
    pub food: &'static str,
    pub reason: &'static str,
    pub risk_level: &'static str,
    pub symptoms: &'static str,
    pub notes: &'static str,
}

const DOG: &[ToxicFood] = &[
    ToxicFood {
        food: "Dairy Products",
        reason: "While not toxic, many dogs are lactose intolerant. Tolerance varies by breed and individual dog.",
        risk_level: "Moderate",
        symptoms: "Diarrhea, vomiting, stomach upset",
        notes: "Some dogs can handle small amounts, while others are highly sensitive. Start with tiny amounts if introducing.",
    },
    ToxicFood {
        food: "Rice",
        reason: "Generally safe but some dogs have grain sensitivities or allergies.",
        risk_level: "Low to Moderate",
        symptoms: "Itching, digestive issues, skin problems in sensitive dogs",
        notes: "Common in breeds like West Highland Terriers, Irish Setters. Consult vet if your breed is prone to grain sensitivity.",
    },
    ToxicFood {
        food: "Curry Leaves",
        reason: "Can cause severe digestive issues. Sensitivity varies by size and breed.",
        risk_level: "High",
        symptoms: "Vomiting, diarrhea, lethargy",
        notes: "Small breeds are generally more sensitive. Avoid completely if your dog has a sensitive stomach.",
    },
    ToxicFood {
        food: "Masala Spices",
        reason: "Many Indian spices can cause gastric irritation. Tolerance varies by dog.",
        risk_level: "High",
        symptoms: "Stomach upset, vomiting, diarrhea",
        notes: "Even small amounts can be problematic. Particularly risky for breeds prone to digestive issues.",
    },
    ToxicFood {
        food: "Mango",
        reason: "Flesh is generally safe but seeds and pit are toxic. Skin can cause issues in some dogs.",
        risk_level: "Moderate",
        symptoms: "Choking (from pit), digestive blockage, potential cyanide poisoning from seed",
        notes: "Remove pit and skin before feeding. Avoid completely if your dog has history of swallowing things whole.",
    },
];

const CAT: &[ToxicFood] = &[
    ToxicFood {
        food: "Raw Fish",
        reason: "May contain thiaminase and harmful bacteria",
        risk_level: "High",
        symptoms: "Thiamine deficiency, neurological issues, bacterial infection",
        notes: "Never feed raw fish. If giving fish, ensure it is thoroughly cooked.",
    },
    ToxicFood {
        food: "Milk/Lassi",
        reason: "Most cats are lactose intolerant",
        risk_level: "Moderate",
        symptoms: "Diarrhea, vomiting, stomach upset",
        notes: "Despite popular belief, adult cats cannot digest dairy well. Some cats may tolerate small amounts.",
    },
    ToxicFood {
        food: "Curry Leaves",
        reason: "Can cause digestive issues",
        risk_level: "Moderate",
        symptoms: "Vomiting, diarrhea, stomach discomfort",
        notes: "Cats are particularly sensitive to essential oils in curry leaves.",
    },
    ToxicFood {
        food: "Masala Tea",
        reason: "Contains caffeine which is toxic",
        risk_level: "High",
        symptoms: "Restlessness, rapid breathing, heart palpitations, muscle tremors",
        notes: "Even small amounts of caffeine can be dangerous for cats.",
    },
    ToxicFood {
        food: "Ghee",
        reason: "High fat content can cause pancreatitis",
        risk_level: "High",
        symptoms: "Vomiting, diarrhea, abdominal pain, lethargy",
        notes: "Even small amounts can trigger pancreatitis in sensitive cats.",
    },
];

/// Look up the toxic-food table for a species; unknown species get an
/// empty table.
pub fn toxic_foods(species: &str) -> &'static [ToxicFood] {
    match species {
        "dog" => DOG,
        "cat" => CAT,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_table() {
        let foods = toxic_foods("dog");
        assert_eq!(foods.len(), 5);
        assert!(foods.iter().any(|f| f.food == "Mango"));
    }

    #[test]
    fn test_cat_table() {
        let foods = toxic_foods("cat");
        assert_eq!(foods.len(), 5);
        assert!(foods.iter().any(|f| f.food == "Raw Fish"));
    }

    #[test]
    fn test_unknown_species_is_empty() {
        assert!(toxic_foods("axolotl").is_empty());
    }

    #[test]
    fn test_entries_have_all_fields_filled() {
        for species in ["dog", "cat"] {
            for entry in toxic_foods(species) {
                assert!(!entry.food.is_empty());
                assert!(!entry.reason.is_empty());
                assert!(!entry.risk_level.is_empty());
                assert!(!entry.symptoms.is_empty());
                assert!(!entry.notes.is_empty());
            }
        }
    }
}
