//! Static reference data rendered by the presentation layer.
//!
//! Everything here is constant, species-keyed lookup data: toxic food
//! tables, portion guides, the daily calorie calculator, and the nutrition
//! guide. Species identifiers are lowercase strings; lookups for unknown
//! species return empty slices or `None` rather than failing.

pub mod calories;
pub mod nutrition;
pub mod portions;
pub mod toxic_foods;

pub use calories::{daily_calories, ActivityLevel};
pub use nutrition::{nutrition_guide, DailyNeed, NutritionGuide};
pub use portions::{portion_guide, PortionRow};
pub use toxic_foods::{toxic_foods, ToxicFood};
