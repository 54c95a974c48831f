//! Donation recipient model
//!
//! A recipient declares which food categories it will accept. A recipient
//! that accepts no categories matches nothing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Category;

/// A donation recipient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    /// Identifier (e.g., "R001")
    pub id: String,

    /// Display name (e.g., "City Food Bank")
    pub name: String,

    /// Categories this recipient accepts, in listed order
    pub accepts_categories: Vec<Category>,
}

impl Recipient {
    /// Create a new recipient
    #[must_use]
    pub fn new(id: &str, name: &str, accepts_categories: Vec<Category>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            accepts_categories,
        }
    }

    /// Convert to the untyped record form the donation matcher consumes
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "accepts_categories": self
                .accepts_categories
                .iter()
                .map(|c| c.name())
                .collect::<Vec<_>>(),
        })
    }
}
