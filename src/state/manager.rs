use crate::error::Result;
use crate::models::FoodItem;
use crate::state::KeyValueStore;

/// Slot name for the serialized saved list, one key like the original's
/// browser storage entry.
pub const SAVED_FOODS_SLOT: &str = "saved_foods";

/// The persisted saved list: insertion-ordered, ids unique.
///
/// Every mutation writes the full serialized collection through the store
/// before the in-memory state is committed, so a failed write leaves the
/// collection unchanged.
pub struct SavedFoods<S: KeyValueStore> {
    store: S,
    items: Vec<FoodItem>,
}

impl<S: KeyValueStore> SavedFoods<S> {
    /// Load the collection from the store's slot.
    ///
    /// An absent or unparsable slot yields an empty collection rather than
    /// an error; a corrupt saved list should not brick the tool.
    pub fn load(store: S) -> Self {
        let items = match store.get(SAVED_FOODS_SLOT) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring unparsable saved foods: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("failed to read saved foods: {}", e);
                Vec::new()
            }
        };

        Self { store, items }
    }

    /// Append an item unless its id is already present.
    ///
    /// Returns whether the item was added; a duplicate id is a no-op and
    /// the first-added entry is retained.
    pub fn add(&mut self, item: FoodItem) -> Result<bool> {
        if self.contains(&item.id) {
            return Ok(false);
        }

        self.items.push(item);
        if let Err(e) = self.persist() {
            self.items.pop();
            return Err(e);
        }
        Ok(true)
    }

    /// Remove the entry with the given id, if present.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let Some(pos) = self.items.iter().position(|f| f.id == id) else {
            return Ok(false);
        };

        let removed = self.items.remove(pos);
        if let Err(e) = self.persist() {
            self.items.insert(pos, removed);
            return Err(e);
        }
        Ok(true)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|f| f.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|f| f.id == id)
    }

    /// Saved items in insertion order.
    pub fn list(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.items)?;
        self.store.set(SAVED_FOODS_SLOT, &json)
    }
}
