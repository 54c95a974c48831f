//! The pipeline operations
//!
//! Six pure functions over untyped records. Each takes its inputs by
//! reference, returns a new value, and degrades to a documented sentinel on
//! malformed input instead of erroring:
//!
//! - [`validator`] - Check a record against the schema
//! - [`expiration`] - Days-to-expire arithmetic, the expiring-items filter,
//!   and the urgency sort
//! - [`matcher`] - Greedy first-fit pairing of items with recipients
//! - [`formatter`] - Render one record as a display line

pub mod expiration;
pub mod formatter;
pub mod matcher;
pub mod validator;

pub use expiration::{
    days_until_expiration, days_until_expiration_on, identify_expiring_items,
    identify_expiring_items_on, sort_items_by_expiration,
};
pub use formatter::format_food_item;
pub use matcher::match_donations;
pub use validator::validate_food_item;
