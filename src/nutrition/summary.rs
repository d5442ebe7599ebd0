use crate::models::NutritionRecord;

// Placeholder thresholds carried over from the original tool; not
// domain-validated nutrition science.
pub const PROTEIN_CLAUSE_THRESHOLD: f64 = 15.0;
pub const CARB_CLAUSE_THRESHOLD: f64 = 20.0;
pub const FIBER_CLAUSE_THRESHOLD: f64 = 3.0;
pub const HIGH_CALORIE_THRESHOLD: f64 = 200.0;
pub const LOW_CALORIE_THRESHOLD: f64 = 100.0;

/// Compose a short description of a food from its nutrition figures.
///
/// Clauses are appended in fixed order when their threshold is exceeded; the
/// two calorie clauses are mutually exclusive and calories in [100,200]
/// trigger neither. Deterministic given its inputs.
pub fn generate_summary(food_name: &str, nutrition: &NutritionRecord) -> String {
    let mut summary = format!("{} is a food item. ", food_name);

    if nutrition.protein > PROTEIN_CLAUSE_THRESHOLD {
        summary.push_str("It's a good source of protein. ");
    }
    if nutrition.carbohydrates > CARB_CLAUSE_THRESHOLD {
        summary.push_str("It provides significant carbohydrates for energy. ");
    }
    if nutrition.fiber > FIBER_CLAUSE_THRESHOLD {
        summary.push_str("Contains a decent amount of fiber. ");
    }
    if nutrition.calories > HIGH_CALORIE_THRESHOLD {
        summary.push_str("It's relatively high in calories. ");
    } else if nutrition.calories < LOW_CALORIE_THRESHOLD {
        summary.push_str("It's relatively low in calories. ");
    }

    summary.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(protein: f64, carbohydrates: f64, fats: f64, fiber: f64, calories: f64) -> NutritionRecord {
        NutritionRecord {
            protein,
            carbohydrates,
            fats,
            fiber,
            calories,
        }
    }

    #[test]
    fn test_protein_only_midrange_calories() {
        // Chicken breast: only the protein clause fires; 165 kcal is in the
        // dead band between the calorie clauses.
        let summary = generate_summary("Chicken Breast", &record(31.0, 0.0, 3.6, 0.0, 165.0));
        assert_eq!(
            summary,
            "Chicken Breast is a food item. It's a good source of protein."
        );
    }

    #[test]
    fn test_no_clause_low_calorie() {
        let summary = generate_summary("Apple", &record(0.3, 14.0, 0.2, 2.4, 52.0));
        assert_eq!(
            summary,
            "Apple is a food item. It's relatively low in calories."
        );
    }

    #[test]
    fn test_all_clauses_high_calorie() {
        let summary = generate_summary("Feast", &record(20.0, 30.0, 10.0, 5.0, 300.0));
        assert_eq!(
            summary,
            "Feast is a food item. It's a good source of protein. \
             It provides significant carbohydrates for energy. \
             Contains a decent amount of fiber. It's relatively high in calories."
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Values exactly at a threshold do not trigger the clause
        let summary = generate_summary("Edge", &record(15.0, 20.0, 0.0, 3.0, 100.0));
        assert_eq!(summary, "Edge is a food item.");

        let summary = generate_summary("Edge", &record(15.0, 20.0, 0.0, 3.0, 200.0));
        assert_eq!(summary, "Edge is a food item.");
    }

    #[test]
    fn test_deterministic() {
        let r = record(9.0, 49.0, 3.2, 2.7, 265.0);
        assert_eq!(
            generate_summary("Bread", &r),
            generate_summary("Bread", &r)
        );
    }
}
