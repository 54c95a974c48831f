//! Donation match model
//!
//! Pairs one food item with at most one recipient. A match is a
//! recommendation, not a committed transaction: nothing tracks whether it was
//! acted on.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recommended donation: an item paired with a recipient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationMatch {
    /// The food record that was matched
    pub item: Value,

    /// The recipient that accepts the item's category
    pub recipient: Value,
}
