//! Checklist state layered on top of the generated list.
//!
//! Generated and custom items live in one ordered vector, tagged by
//! `ItemOrigin`, so toggling, grouping and aggregation treat them the same.

use crate::core::generator;
use crate::errors::Rejection;
use crate::models::{Category, PackingItem, TripData};
use serde::Serialize;
use tracing::info;

/// Prefix of ids handed out to user-added items.
pub const CUSTOM_ID_PREFIX: &str = "custom-";

/// Checked vs total items, overall or for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub checked: usize,
    pub total: usize,
}

impl Progress {
    /// 0.0 ..= 100.0, and 0.0 for an empty list.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.checked as f64 / self.total as f64 * 100.0
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.checked == self.total
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Checklist {
    items: Vec<PackingItem>,
    #[serde(skip)]
    next_custom_id: u64,
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Checklist {
    pub fn new(items: Vec<PackingItem>) -> Self {
        Self {
            items,
            next_custom_id: 1,
        }
    }

    pub fn for_trip(trip: &TripData) -> Self {
        Self::new(generator::generate(trip))
    }

    pub fn items(&self) -> &[PackingItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&PackingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flip `checked` on one item and return its new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool, Rejection> {
        let slot = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Rejection::UnknownItem(id.to_string()))?;

        *slot = slot.toggled();
        Ok(slot.checked)
    }

    pub fn add_custom_item(
        &mut self,
        name: &str,
        category: &str,
    ) -> Result<&PackingItem, Rejection> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Rejection::EmptyItemName);
        }
        let category = Category::from_label(category)?;

        let id = self.allocate_custom_id();
        info!(%id, name, category = category.label(), "custom item added");

        self.items.push(PackingItem::custom(id, name, category));
        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Next `custom-<n>` id not already on the list.
    fn allocate_custom_id(&mut self) -> String {
        loop {
            let id = format!("{CUSTOM_ID_PREFIX}{}", self.next_custom_id);
            self.next_custom_id += 1;
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen: Vec<Category> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category) {
                seen.push(item.category.clone());
            }
        }
        seen
    }

    /// Categories offered when adding a custom item: those on the list, then "Other".
    pub fn add_category_choices(&self) -> Vec<Category> {
        let mut choices = self.categories();
        let other = Category::other();
        if !choices.contains(&other) {
            choices.push(other);
        }
        choices
    }

    pub fn group_by_category(&self, category: &Category) -> Vec<&PackingItem> {
        self.items
            .iter()
            .filter(|i| &i.category == category)
            .collect()
    }

    pub fn progress(&self) -> Progress {
        Self::count(self.items.iter())
    }

    pub fn category_progress(&self, category: &Category) -> Progress {
        Self::count(self.items.iter().filter(|i| &i.category == category))
    }

    fn count<'a>(items: impl Iterator<Item = &'a PackingItem>) -> Progress {
        items.fold(Progress::default(), |mut p, item| {
            p.total += 1;
            if item.checked {
                p.checked += 1;
            }
            p
        })
    }

    /// Drop every item, generated and custom.
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_custom_id = 1;
    }
}
