//! Donation matcher - pairs food items with recipients
//!
//! Greedy first-fit: each item takes the first recipient, in listed order,
//! whose `accepts_categories` contains the item's `category`. Not an optimal
//! assignment — a recipient may appear in many matches, there is no capacity,
//! and an item never displaces another item's match.

use serde_json::Value;

use crate::core::models::DonationMatch;

/// Pair each eligible item with the first recipient accepting its category
///
/// Items are visited in input order; for each, recipients are scanned in
/// input order and the scan stops at the first accepting one. Items that are
/// not objects or lack `category` are skipped, as are recipients that are not
/// objects or lack `accepts_categories`. Items with no accepting recipient
/// produce no entry. Either argument being a non-array yields an empty
/// result.
#[must_use]
pub fn match_donations(items: &Value, recipients: &Value) -> Vec<DonationMatch> {
    let (Some(items), Some(recipients)) = (items.as_array(), recipients.as_array()) else {
        return Vec::new();
    };

    let mut matches = Vec::new();

    for item in items {
        let Some(category) = item.as_object().and_then(|fields| fields.get("category")) else {
            continue;
        };

        for recipient in recipients {
            let Some(accepted) = recipient
                .as_object()
                .and_then(|fields| fields.get("accepts_categories"))
                .and_then(Value::as_array)
            else {
                continue;
            };

            if accepted.contains(category) {
                matches.push(DonationMatch {
                    item: item.clone(),
                    recipient: recipient.clone(),
                });
                break; // first suitable recipient wins
            }
        }
    }

    matches
}
