//! Record validator
//!
//! Structural and semantic validation of one food record against the fixed
//! schema. Checks run in a fixed order and the first failure wins; the
//! result messages are part of the contract and stay byte-exact.
//!
//! Expiration-date format is deliberately not checked here. Date parsing
//! belongs to the expiration arithmetic, which has its own sentinel.

use serde_json::Value;

use crate::core::models::{Category, REQUIRED_FIELDS, ValidationResult};

/// Validate a food record against the schema
///
/// Order of checks:
/// 1. The record must be a JSON object.
/// 2. Every required field must be present (`id, name, category, quantity,
///    unit, expiration_date, storage_location` — first missing field wins).
/// 3. `id` and `name` must be strings.
/// 4. `quantity` must be numeric and non-negative (zero is accepted).
/// 5. `category` must be a string and one of the fixed category set.
///
/// Never panics; malformed input yields a failing [`ValidationResult`].
#[must_use]
pub fn validate_food_item(item: &Value) -> ValidationResult {
    let Some(fields) = item.as_object() else {
        return ValidationResult::fail("Food item must be a dictionary");
    };

    for field in REQUIRED_FIELDS {
        if !fields.contains_key(field) {
            return ValidationResult::fail(format!("Missing required field: {field}"));
        }
    }

    if !fields["id"].is_string() {
        return ValidationResult::fail("ID must be a string");
    }

    if !fields["name"].is_string() {
        return ValidationResult::fail("Name must be a string");
    }

    // Non-negativity, despite the message wording: zero quantity is valid.
    match fields["quantity"].as_f64() {
        Some(q) if q >= 0.0 => {},
        _ => return ValidationResult::fail("Quantity must be a positive number"),
    }

    let Some(category) = fields["category"].as_str() else {
        return ValidationResult::fail("Category must be a string");
    };

    if !Category::is_valid_name(category) {
        return ValidationResult::fail(format!(
            "Invalid category. Must be one of: {}",
            Category::canonical_list()
        ));
    }

    ValidationResult::ok()
}
