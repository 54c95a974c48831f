//! Domain models for larder
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`FoodItem`] - A typed builder for well-formed inventory records
//! - [`Recipient`] - A donation recipient and the categories it accepts
//! - [`Category`] - The fixed set of food categories
//! - [`ValidationResult`] - Outcome of validating one record
//! - [`DonationMatch`] - One item paired with one recipient

mod category;
mod donation;
mod food_item;
mod recipient;
mod validation;

pub use category::{Category, ParseCategoryError};
pub use donation::DonationMatch;
pub use food_item::{DISPLAY_FIELDS, FoodItem, REQUIRED_FIELDS};
pub use recipient::Recipient;
pub use validation::ValidationResult;
