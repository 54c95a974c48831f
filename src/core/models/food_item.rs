//! Food item model
//!
//! A typed builder for well-formed inventory records. The pipeline operations
//! consume untyped JSON records so they can degrade gracefully on malformed
//! input; this struct is the convenient way to produce records that are not
//! malformed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Category;

/// The required fields of a food record, in the order the validator checks them
pub const REQUIRED_FIELDS: [&str; 7] = [
    "id",
    "name",
    "category",
    "quantity",
    "unit",
    "expiration_date",
    "storage_location",
];

/// The fields the display formatter interpolates, in display order
pub const DISPLAY_FIELDS: [&str; 6] = [
    "id",
    "name",
    "quantity",
    "unit",
    "category",
    "expiration_date",
];

/// A food inventory record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Identifier, unique by caller convention (e.g., "F001")
    pub id: String,

    /// Display name (e.g., "Apples")
    pub name: String,

    /// Food category
    pub category: Category,

    /// Quantity on hand, non-negative
    pub quantity: f64,

    /// Unit label for the quantity (e.g., "kg", "loaf")
    pub unit: String,

    /// Expiration date in `YYYY-MM-DD` form
    pub expiration_date: String,

    /// Where the item is stored (e.g., "Cooler 3")
    pub storage_location: String,
}

impl FoodItem {
    /// Create a new food item
    #[must_use]
    pub fn new(
        id: &str,
        name: &str,
        category: Category,
        quantity: f64,
        unit: &str,
        expiration_date: &str,
        storage_location: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            quantity,
            unit: unit.to_string(),
            expiration_date: expiration_date.to_string(),
            storage_location: storage_location.to_string(),
        }
    }

    /// Convert to the untyped record form the pipeline operations consume
    ///
    /// The category serializes to its display name ("Dry Goods", not
    /// "DryGoods") and an integral quantity serializes without a fractional
    /// part, so the record round-trips through validation and formatting
    /// unchanged.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_value(&self) -> Value {
        let quantity = if self.quantity.fract() == 0.0 {
            Value::from(self.quantity as i64)
        } else {
            Value::from(self.quantity)
        };
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "category": self.category.name(),
            "quantity": quantity,
            "unit": self.unit,
            "expiration_date": self.expiration_date,
            "storage_location": self.storage_location,
        })
    }
}
