use rand::Rng;

use crate::models::NutritionRecord;

/// Known foods with literal per-serving values, checked in order; first
/// substring match wins. Stands in for a real nutrition database.
const KNOWN_FOODS: &[(&str, NutritionRecord)] = &[
    (
        "apple",
        NutritionRecord {
            protein: 0.3,
            carbohydrates: 14.0,
            fats: 0.2,
            fiber: 2.4,
            calories: 52.0,
        },
    ),
    (
        "banana",
        NutritionRecord {
            protein: 1.1,
            carbohydrates: 23.0,
            fats: 0.3,
            fiber: 2.6,
            calories: 89.0,
        },
    ),
    (
        "chicken breast",
        NutritionRecord {
            protein: 31.0,
            carbohydrates: 0.0,
            fats: 3.6,
            fiber: 0.0,
            calories: 165.0,
        },
    ),
    (
        "bread",
        NutritionRecord {
            protein: 9.0,
            carbohydrates: 49.0,
            fats: 3.2,
            fiber: 2.7,
            calories: 265.0,
        },
    ),
];

/// Produce a nutrition record for a food name.
///
/// Names matching the lookup table (case-insensitive substring) get the
/// table's literal values. Everything else gets randomized figures from the
/// injected generator: protein in [0,30), carbohydrates in [0,50), fats in
/// [0,20), fiber in [0,10), calories in [50,250); one decimal place except
/// calories, which round to an integer.
pub fn generate_nutrition<R: Rng>(food_name: &str, rng: &mut R) -> NutritionRecord {
    let lower = food_name.to_lowercase();

    for (key, record) in KNOWN_FOODS {
        if lower.contains(key) {
            return *record;
        }
    }

    NutritionRecord {
        protein: round_tenth(rng.gen_range(0.0..30.0)),
        carbohydrates: round_tenth(rng.gen_range(0.0..50.0)),
        fats: round_tenth(rng.gen_range(0.0..20.0)),
        fiber: round_tenth(rng.gen_range(0.0..10.0)),
        calories: rng.gen_range(50.0f64..250.0).round(),
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
