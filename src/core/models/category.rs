//! Food categories
//!
//! The fixed set of categories an inventory record may carry. The validator
//! and the donation matcher both compare against this set by its display
//! names, so the display form is the canonical one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not a recognized category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid category: {}. Must be one of: {}", .name, Category::canonical_list())]
pub struct ParseCategoryError {
    /// The rejected category name
    pub name: String,
}

/// Food categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Fresh fruit and vegetables
    Produce,
    /// Milk, cheese, yogurt
    Dairy,
    /// Bread and baked goods
    Bakery,
    /// Fresh and cured meat
    Meat,
    /// Frozen goods
    Frozen,
    /// Canned goods
    Canned,
    /// Rice, pasta, flour, cereal
    #[serde(rename = "Dry Goods")]
    DryGoods,
    /// Ready-to-eat prepared food
    Prepared,
}

impl Category {
    /// All categories, in canonical order
    pub const ALL: [Self; 8] = [
        Self::Produce,
        Self::Dairy,
        Self::Bakery,
        Self::Meat,
        Self::Frozen,
        Self::Canned,
        Self::DryGoods,
        Self::Prepared,
    ];

    /// The display name of this category (e.g., "Dry Goods")
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::Dairy => "Dairy",
            Self::Bakery => "Bakery",
            Self::Meat => "Meat",
            Self::Frozen => "Frozen",
            Self::Canned => "Canned",
            Self::DryGoods => "Dry Goods",
            Self::Prepared => "Prepared",
        }
    }

    /// The canonical comma-joined list of category names, as surfaced in
    /// validation messages
    #[must_use]
    pub fn canonical_list() -> String {
        Self::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether `name` is one of the valid category names (exact match)
    #[must_use]
    pub fn is_valid_name(name: &str) -> bool {
        Self::ALL.iter().any(|c| c.name() == name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| ParseCategoryError {
                name: s.to_string(),
            })
    }
}
