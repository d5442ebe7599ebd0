use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{derive_id, FoodItem};

/// Minimum jaro-winkler similarity for offering a saved item instead of a
/// fresh lookup.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Top-level actions in the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Search,
    ViewSaved,
    Quit,
}

/// Prompt for the next session action.
pub fn prompt_menu_action() -> Result<MenuAction> {
    let options = ["Search for a food", "View saved foods", "Quit"];

    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => MenuAction::Search,
        1 => MenuAction::ViewSaved,
        _ => MenuAction::Quit,
    })
}

/// Prompt for a food name to look up.
///
/// The empty-input guard lives here: a blank (or whitespace-only) entry is
/// treated as backing out, so an empty query never reaches the lookup
/// pipeline.
pub fn prompt_search_query() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Food to look up (Enter to go back)")
        .allow_empty(true)
        .interact_text()?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(trimmed.to_string()))
}

/// Find the saved item a query most likely refers to.
///
/// Exact id match wins; otherwise the highest-scoring fuzzy name match above
/// the threshold, if any.
pub fn suggest_saved_match<'a>(query: &str, saved: &'a [FoodItem]) -> Option<&'a FoodItem> {
    let id = derive_id(query);
    if let Some(item) = saved.iter().find(|f| f.id == id) {
        return Some(item);
    }

    saved
        .iter()
        .map(|f| {
            (
                f,
                jaro_winkler(&f.name.to_lowercase(), &query.to_lowercase()),
            )
        })
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(f, _)| f)
}

/// Let the user pick a saved item; returns its index, or None for "back".
pub fn prompt_saved_selection(saved: &[FoodItem]) -> Result<Option<usize>> {
    let mut options: Vec<String> = saved.iter().map(|f| f.name.clone()).collect();
    options.push("Back".to_string());

    let selection = Select::new()
        .with_prompt("Select a saved food")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < saved.len() {
        Ok(Some(selection))
    } else {
        Ok(None)
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
