//! Validation result model
//!
//! The value type returned by record validation. Returned, never stored:
//! validation has no memory between calls.

use serde::{Deserialize, Serialize};

/// Outcome of validating a single food record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the record passed every check
    pub is_valid: bool,

    /// Human-readable outcome: the fixed success message, or the first
    /// failed check's message
    pub message: String,
}

impl ValidationResult {
    /// The passing result
    #[must_use]
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            message: "Food item data is valid".to_string(),
        }
    }

    /// A failing result with the given message
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}
