use std::fs;

use nutrisleuth::models::{derive_id, FoodItem, NutritionRecord};
use nutrisleuth::state::{FileStore, SavedFoods, SAVED_FOODS_SLOT};
use tempfile::tempdir;

fn make_item(name: &str) -> FoodItem {
    FoodItem {
        id: derive_id(name),
        name: name.to_string(),
        nutrition: NutritionRecord {
            protein: 1.1,
            carbohydrates: 23.0,
            fats: 0.3,
            fiber: 2.6,
            calories: 89.0,
        },
        gi_index: Some(51.0),
        gi_explanation: Some("Moderate sugars.".to_string()),
        summary: Some("Banana is a food item.".to_string()),
    }
}

#[test]
fn test_saved_list_survives_reload() {
    let dir = tempdir().unwrap();

    {
        let mut saved = SavedFoods::load(FileStore::new(dir.path()));
        saved.add(make_item("Banana")).unwrap();
        saved.add(make_item("Apple")).unwrap();
    }

    let reloaded = SavedFoods::load(FileStore::new(dir.path()));
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.contains("banana"));
    assert!(reloaded.contains("apple"));

    // Insertion order preserved across sessions
    let names: Vec<&str> = reloaded.list().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Banana", "Apple"]);
}

#[test]
fn test_add_remove_add_roundtrip_on_disk() {
    let dir = tempdir().unwrap();
    let mut saved = SavedFoods::load(FileStore::new(dir.path()));

    saved.add(make_item("Banana")).unwrap();
    assert!(saved.remove("banana").unwrap());
    assert!(!saved.contains("banana"));

    saved.add(make_item("Banana")).unwrap();

    let reloaded = SavedFoods::load(FileStore::new(dir.path()));
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.contains("banana"));
}

#[test]
fn test_duplicate_add_is_idempotent_on_disk() {
    let dir = tempdir().unwrap();
    let mut saved = SavedFoods::load(FileStore::new(dir.path()));

    assert!(saved.add(make_item("Banana")).unwrap());
    assert!(!saved.add(make_item("banana")).unwrap());

    let reloaded = SavedFoods::load(FileStore::new(dir.path()));
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn test_missing_slot_yields_empty_collection() {
    let dir = tempdir().unwrap();
    let saved = SavedFoods::load(FileStore::new(dir.path().join("never-written")));
    assert!(saved.is_empty());
}

#[test]
fn test_corrupt_slot_yields_empty_collection() {
    let dir = tempdir().unwrap();
    let slot = dir.path().join(format!("{}.json", SAVED_FOODS_SLOT));
    fs::write(&slot, "{ this is not a saved list").unwrap();

    let saved = SavedFoods::load(FileStore::new(dir.path()));
    assert!(saved.is_empty());
}

#[test]
fn test_persisted_json_uses_camel_case_fields() {
    let dir = tempdir().unwrap();
    let mut saved = SavedFoods::load(FileStore::new(dir.path()));
    saved.add(make_item("Banana")).unwrap();

    let slot = dir.path().join(format!("{}.json", SAVED_FOODS_SLOT));
    let raw = fs::read_to_string(slot).unwrap();
    assert!(raw.contains("\"giIndex\""));
    assert!(raw.contains("\"giExplanation\""));
}
