//! Expiration arithmetic, the expiring-items filter, and the urgency sort
//!
//! Dates are calendar dates in `YYYY-MM-DD` form; no time zones or sub-day
//! precision. "Today" defaults to the local calendar date, and every function
//! has an `_on` variant taking an explicit today so results are deterministic
//! under test.

use chrono::{Local, NaiveDate};
use serde_json::Value;

/// Date format accepted everywhere dates are consumed
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default days-until-expiration threshold for the expiring-items filter
pub const DEFAULT_THRESHOLD: i64 = 7;

/// Sort key assigned to records with no usable expiration date, so they
/// order last
const MAX_DATE: &str = "9999-12-31";

/// Days from today until `expiration_date`
///
/// Zero when the date is today, positive in the future, negative in the past.
/// `None` or an unparseable date yields the `-1` sentinel. Note the sentinel
/// collides with "expired exactly yesterday"; the numeric result alone cannot
/// distinguish the two.
#[must_use]
pub fn days_until_expiration(expiration_date: Option<&str>) -> i64 {
    days_until_expiration_on(expiration_date, Local::now().date_naive())
}

/// [`days_until_expiration`] against an explicit today
#[must_use]
pub fn days_until_expiration_on(expiration_date: Option<&str>, today: NaiveDate) -> i64 {
    let Some(raw) = expiration_date else {
        return -1;
    };
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_or(-1, |expiration| (expiration - today).num_days())
}

/// Records expiring within `threshold` days of today
///
/// Keeps records whose days-to-expire `d` satisfies `0 <= d <= threshold`:
/// day 0 (expires today) and day `threshold` are both included; already
/// expired records and unparseable dates are excluded. `None` threshold
/// defaults to 7. Non-array input yields an empty result; elements that are
/// not objects or lack `expiration_date` are skipped. Input order is
/// preserved.
#[must_use]
pub fn identify_expiring_items(items: &Value, threshold: Option<i64>) -> Vec<Value> {
    identify_expiring_items_on(items, threshold, Local::now().date_naive())
}

/// [`identify_expiring_items`] against an explicit today
#[must_use]
pub fn identify_expiring_items_on(
    items: &Value,
    threshold: Option<i64>,
    today: NaiveDate,
) -> Vec<Value> {
    let Some(items) = items.as_array() else {
        return Vec::new();
    };
    let threshold = threshold.unwrap_or(DEFAULT_THRESHOLD);

    items
        .iter()
        .filter(|item| {
            let Some(fields) = item.as_object() else {
                return false;
            };
            let Some(date) = fields.get("expiration_date") else {
                return false;
            };
            let days = days_until_expiration_on(date.as_str(), today);
            (0..=threshold).contains(&days)
        })
        .cloned()
        .collect()
}

/// A new ordering of `items`, soonest expiration first
///
/// Orders ascending by the `expiration_date` string; lexicographic order on
/// `YYYY-MM-DD` strings is chronological order. Records without a usable
/// date string sort last. The sort is stable and the input is not mutated.
/// Non-array input yields an empty result.
#[must_use]
pub fn sort_items_by_expiration(items: &Value) -> Vec<Value> {
    let Some(items) = items.as_array() else {
        return Vec::new();
    };

    let mut sorted = items.clone();
    sorted.sort_by(|a, b| sort_key(a).cmp(sort_key(b)));
    sorted
}

fn sort_key(item: &Value) -> &str {
    item.get("expiration_date")
        .and_then(Value::as_str)
        .unwrap_or(MAX_DATE)
}
