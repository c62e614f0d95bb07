use serde::Serialize;

/// One weight band of a species portion guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortionRow {
    pub weight: &'static str,
    pub daily_amount: &'static str,
}

const fn row(weight: &'static str, daily_amount: &'static str) -> PortionRow {
    PortionRow { weight, daily_amount }
}

const DOG: &[PortionRow] = &[
    row("1-10 lbs", "1/4 - 1 cup"),
    row("11-25 lbs", "1 - 2 cups"),
    row("26-50 lbs", "2 - 4 cups"),
    row("51-75 lbs", "4 - 6 cups"),
    row("76+ lbs", "6+ cups"),
];

const CAT: &[PortionRow] = &[
    row("5-9 lbs", "1/3 - 1/2 cup"),
    row("10-14 lbs", "1/2 - 2/3 cup"),
    row("15+ lbs", "2/3 - 1 cup"),
];

const HORSE: &[PortionRow] = &[
    row("400-500 kg", "10-12 kg hay"),
    row("500-600 kg", "12-14 kg hay"),
    row("600+ kg", "14-16 kg hay"),
];

const CHICKEN: &[PortionRow] = &[
    row("Chick (0-4 weeks)", "30-50g feed"),
    row("Grower (4-12 weeks)", "50-80g feed"),
    row("Layer", "100-120g feed"),
];

const COW: &[PortionRow] = &[
    row("200-300 kg", "6-8 kg feed"),
    row("300-400 kg", "8-10 kg feed"),
    row("400+ kg", "10-12 kg feed"),
];

const BUFFALO: &[PortionRow] = &[
    row("300-400 kg", "8-10 kg feed"),
    row("400-500 kg", "10-12 kg feed"),
    row("500+ kg", "12-15 kg feed"),
];

const PIG: &[PortionRow] = &[
    row("10-30 kg", "1-2 kg feed"),
    row("30-60 kg", "2-3 kg feed"),
    row("60+ kg", "3-4 kg feed"),
];

const PIGEON: &[PortionRow] = &[
    row("Young", "15-20g feed"),
    row("Adult", "30-40g feed"),
    row("Breeding", "40-50g feed"),
];

const PARROT: &[PortionRow] = &[
    row("Small (100-200g)", "10-15g feed"),
    row("Medium (200-500g)", "15-30g feed"),
    row("Large (500g+)", "30-50g feed"),
];

const TURTLE: &[PortionRow] = &[
    row("Small (<100g)", "5-10g food"),
    row("Medium (100-500g)", "10-20g food"),
    row("Large (500g+)", "20-30g food"),
];

const FISH: &[PortionRow] = &[
    row("Small (<5cm)", "2-3 times/day, tiny pinch"),
    row("Medium (5-10cm)", "2 times/day, small pinch"),
    row("Large (>10cm)", "1-2 times/day, medium pinch"),
];

/// Look up the portion guide for a species; unknown species get an empty
/// guide.
pub fn portion_guide(species: &str) -> &'static [PortionRow] {
    match species {
        "dog" => DOG,
        "cat" => CAT,
        "horse" => HORSE,
        "chicken" => CHICKEN,
        "cow" => COW,
        "buffalo" => BUFFALO,
        "pig" => PIG,
        "pigeon" => PIGEON,
        "parrot" => PARROT,
        "turtle" => TURTLE,
        "fish" => FISH,
        _ => &[],
    }
}
