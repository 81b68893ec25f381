//! Inventory View-Model
//!
//! Owns the pantry item list and the single open detail popover.

use crate::models::FoodItem;
use crate::seed::SHELF_COUNT;

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryViewModel {
    seed: Vec<FoodItem>,
    items: Vec<FoodItem>,
    /// Item whose detail popover is open (at most one)
    selected: Option<String>,
}

impl Default for InventoryViewModel {
    fn default() -> Self {
        Self::new(crate::seed::pantry_items())
    }
}

impl InventoryViewModel {
    pub fn new(seed: Vec<FoodItem>) -> Self {
        Self {
            items: seed.clone(),
            seed,
            selected: None,
        }
    }

    /// Items grouped by shelf slot ascending, insertion order within a slot
    pub fn list_items(&self) -> Vec<FoodItem> {
        let mut items = self.items.clone();
        // sort_by_key is stable
        items.sort_by_key(|item| item.shelf_slot);
        items
    }

    /// One entry per shelf slot, including empty shelves
    pub fn shelves(&self) -> Vec<(u8, Vec<FoodItem>)> {
        (1..=SHELF_COUNT)
            .map(|slot| {
                let on_shelf = self
                    .items
                    .iter()
                    .filter(|item| item.shelf_slot == slot)
                    .cloned()
                    .collect();
                (slot, on_shelf)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Open the popover for `id`, or close it if it is already open.
    /// Unknown ids are ignored.
    pub fn toggle_selection(&mut self, id: &str) {
        if self.is_selected(id) {
            self.selected = None;
        } else if self.items.iter().any(|item| item.id == id) {
            self.selected = Some(id.to_string());
        }
    }

    /// Remove `id`. Returns false (no-op) if it is not present.
    pub fn delete_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed && self.is_selected(id) {
            self.selected = None;
        }
        removed
    }

    /// Restore the seed list, discarding deletions and selection
    pub fn reset_to_seed(&mut self) {
        self.items = self.seed.clone();
        self.selected = None;
    }
}
