use crate::errors::Rejection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Packing list section. Generated items always use one of the builtin
/// categories; custom items may use any non-empty label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Clothing,
    Toiletries,
    Electronics,
    Documents,
    Medical,
    Accessories,
    Custom(String),
}

impl Category {
    pub const BUILTIN: [Category; 6] = [
        Category::Clothing,
        Category::Toiletries,
        Category::Electronics,
        Category::Documents,
        Category::Medical,
        Category::Accessories,
    ];

    /// Label offered by the add-item picker besides the categories already on the list.
    pub const OTHER: &'static str = "Other";

    pub fn label(&self) -> &str {
        match self {
            Category::Clothing => "Clothing",
            Category::Toiletries => "Toiletries",
            Category::Electronics => "Electronics",
            Category::Documents => "Documents",
            Category::Medical => "Medical",
            Category::Accessories => "Accessories",
            Category::Custom(label) => label.as_str(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Clothing => "👕",
            Category::Toiletries => "🧴",
            Category::Electronics => "🔌",
            Category::Documents => "📄",
            Category::Medical => "💊",
            Category::Accessories => "👜",
            Category::Custom(_) => "📦",
        }
    }

    pub fn other() -> Self {
        Category::Custom(Self::OTHER.to_string())
    }

    /// Builtin names match case-insensitively; anything else is kept as a
    /// custom label (trimmed).
    pub fn from_label(label: &str) -> Result<Self, Rejection> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(Rejection::EmptyCategory);
        }

        let builtin = Self::BUILTIN
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed));

        Ok(builtin.unwrap_or_else(|| Category::Custom(trimmed.to_string())))
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Category::Custom(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for Category {
    type Error = Rejection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Category::from_label(&value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.label().to_string()
    }
}
