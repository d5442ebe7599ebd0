use rand::Rng;

use crate::error::Result;
use crate::gi::{GiEstimate, GiProvider};
use crate::models::{derive_id, FoodItem, NutritionRecord};
use crate::nutrition::{generate_nutrition, generate_summary};

/// Build the display record for a successful lookup.
///
/// Only called once GI estimation has succeeded; a failed estimate never
/// produces a partial item.
pub fn assemble(
    query: &str,
    estimate: GiEstimate,
    nutrition: NutritionRecord,
    summary: String,
) -> FoodItem {
    FoodItem {
        id: derive_id(query),
        name: query.to_string(),
        nutrition,
        gi_index: Some(estimate.gi_index),
        gi_explanation: Some(estimate.explanation),
        summary: Some(summary),
    }
}

/// Run the full lookup pipeline: GI estimate, mock nutrition, summary,
/// assembly. Fails without side effects if the estimate fails.
pub fn perform_search<R: Rng>(
    provider: &dyn GiProvider,
    rng: &mut R,
    query: &str,
) -> Result<FoodItem> {
    let estimate = provider.estimate_gi(query)?;
    let nutrition = generate_nutrition(query, rng);
    let summary = generate_summary(query, &nutrition);
    Ok(assemble(query, estimate, nutrition, summary))
}

/// Holds the current-result slot and issues search tickets.
///
/// Each search takes a ticket from `begin_search`; only a result carrying
/// the latest ticket is applied, so a result from a superseded search is
/// discarded silently.
#[derive(Debug, Default)]
pub struct SearchSession {
    current: Option<FoodItem>,
    issued: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search, superseding any search still in flight.
    pub fn begin_search(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Apply a search result if its ticket is still the latest.
    ///
    /// Returns whether the result was applied.
    pub fn apply_result(&mut self, ticket: u64, item: FoodItem) -> bool {
        if ticket != self.issued {
            log::debug!(
                "discarding stale result for '{}' (ticket {} superseded by {})",
                item.name,
                ticket,
                self.issued
            );
            return false;
        }
        self.current = Some(item);
        true
    }

    /// Replace the current result directly, e.g. when the user selects a
    /// saved item.
    pub fn set_current(&mut self, item: FoodItem) {
        self.current = Some(item);
    }

    /// Clear the slot; used after a failed search.
    pub fn clear_current(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&FoodItem> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item(name: &str) -> FoodItem {
        FoodItem {
            id: derive_id(name),
            name: name.to_string(),
            nutrition: NutritionRecord {
                protein: 1.0,
                carbohydrates: 10.0,
                fats: 1.0,
                fiber: 1.0,
                calories: 80.0,
            },
            gi_index: Some(40.0),
            gi_explanation: Some("test".to_string()),
            summary: None,
        }
    }

    #[test]
    fn test_assemble_populates_all_fields() {
        let estimate = GiEstimate {
            gi_index: 39.0,
            explanation: "Low sugar fruit.".to_string(),
        };
        let nutrition = NutritionRecord {
            protein: 0.3,
            carbohydrates: 14.0,
            fats: 0.2,
            fiber: 2.4,
            calories: 52.0,
        };

        let item = assemble("Apple", estimate, nutrition, "A summary.".to_string());

        assert_eq!(item.id, "apple");
        assert_eq!(item.name, "Apple");
        assert_eq!(item.gi_index, Some(39.0));
        assert_eq!(item.gi_explanation.as_deref(), Some("Low sugar fruit."));
        assert_eq!(item.summary.as_deref(), Some("A summary."));
    }

    #[test]
    fn test_latest_ticket_applies() {
        let mut session = SearchSession::new();
        let ticket = session.begin_search();

        assert!(session.apply_result(ticket, sample_item("Apple")));
        assert_eq!(session.current().unwrap().id, "apple");
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut session = SearchSession::new();
        let stale = session.begin_search();
        let fresh = session.begin_search();

        assert!(!session.apply_result(stale, sample_item("Apple")));
        assert!(session.current().is_none());

        assert!(session.apply_result(fresh, sample_item("Banana")));
        assert_eq!(session.current().unwrap().id, "banana");

        // Late arrival from the superseded search leaves the slot untouched
        assert!(!session.apply_result(stale, sample_item("Apple")));
        assert_eq!(session.current().unwrap().id, "banana");
    }

    #[test]
    fn test_clear_current() {
        let mut session = SearchSession::new();
        let ticket = session.begin_search();
        session.apply_result(ticket, sample_item("Apple"));

        session.clear_current();
        assert!(session.current().is_none());
    }
}
