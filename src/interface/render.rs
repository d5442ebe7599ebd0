use crate::models::FoodItem;

/// Print the nutrition card for a food.
pub fn display_food_card(item: &FoodItem) {
    println!();
    println!("=== {} ===", item.name);
    println!();

    match item.gi_index {
        Some(gi) => println!("Glycemic Index: {:.0}", gi),
        None => println!("Glycemic Index: (not estimated)"),
    }
    if let Some(explanation) = &item.gi_explanation {
        println!("  {}", explanation);
    }

    println!();
    println!("Nutrition (per serving):");
    println!("  Calories:      {:>7.0} kcal", item.nutrition.calories);
    println!("  Protein:       {:>7.1} g", item.nutrition.protein);
    println!("  Carbohydrates: {:>7.1} g", item.nutrition.carbohydrates);
    println!("  Fats:          {:>7.1} g", item.nutrition.fats);
    println!("  Fiber:         {:>7.1} g", item.nutrition.fiber);

    if let Some(summary) = &item.summary {
        println!();
        println!("{}", summary);
    }

    println!();
    println!("Glycemic Index and nutritional information are estimates.");
    println!();
}

/// Print the saved list with GI at a glance.
pub fn display_saved_list(items: &[FoodItem]) {
    if items.is_empty() {
        println!("Saved foods: (none)");
        return;
    }

    println!();
    println!("=== Saved foods ({} items) ===", items.len());
    println!();

    let max_name_len = items.iter().map(|f| f.name.len()).max().unwrap_or(10);

    for (i, item) in items.iter().enumerate() {
        let gi = match item.gi_index {
            Some(gi) => format!("GI {:.0}", gi),
            None => "GI ?".to_string(),
        };

        println!(
            "{:>3}. {:<width$}  {:>6} | {:>4.0} kcal | id: {}",
            i + 1,
            item.name,
            gi,
            item.nutrition.calories,
            item.id,
            width = max_name_len
        );
    }

    println!();
}
