use super::category::Category;
use serde::{Deserialize, Serialize};

/// Where an item on the checklist came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemOrigin {
    Generated,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    pub essential: bool,
    pub checked: bool,
    pub origin: ItemOrigin,
}

impl PackingItem {
    /// Item produced by the list generator.
    pub fn generated(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        quantity: Option<u32>,
        essential: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            quantity,
            essential,
            checked: false,
            origin: ItemOrigin::Generated,
        }
    }

    /// User-added item: never essential, no quantity.
    pub fn custom(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            quantity: None,
            essential: false,
            checked: false,
            origin: ItemOrigin::Custom,
        }
    }

    /// Copy of this item with `checked` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            checked: !self.checked,
            ..self.clone()
        }
    }
}
