//! Display formatter - renders one record as a human-readable line
//!
//! The one presentation helper in the pipeline. Anything unrenderable yields
//! the fixed sentinel string instead of erroring.

use serde_json::Value;

use crate::core::models::DISPLAY_FIELDS;

/// Sentinel returned for records that cannot be formatted
pub const INVALID_FORMAT: &str = "Invalid food item format";

/// Render a record as `"<id> | <name> | <quantity> <unit> | <category> | Expires: <date>"`
///
/// Returns the [`INVALID_FORMAT`] sentinel when the record is not an object
/// or any display field (`id, name, quantity, unit, category,
/// expiration_date`) is missing. Values are interpolated as-is: strings
/// render bare, numbers in their natural form. No validation beyond presence.
#[must_use]
pub fn format_food_item(item: &Value) -> String {
    let Some(fields) = item.as_object() else {
        return INVALID_FORMAT.to_string();
    };

    if DISPLAY_FIELDS.iter().any(|f| !fields.contains_key(*f)) {
        return INVALID_FORMAT.to_string();
    }

    format!(
        "{} | {} | {} {} | {} | Expires: {}",
        display(&fields["id"]),
        display(&fields["name"]),
        display(&fields["quantity"]),
        display(&fields["unit"]),
        display(&fields["category"]),
        display(&fields["expiration_date"]),
    )
}

/// Bare rendering: strings without JSON quotes, everything else via its JSON
/// form (integral numbers have no fractional part)
fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
