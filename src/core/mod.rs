//! Core domain logic for larder
//!
//! This module contains pure functions over in-memory records. No I/O, no
//! shared state: every operation takes its inputs by reference and returns a
//! new value, so calls are independent and safe to repeat.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (FoodItem, Recipient, Category, ValidationResult, DonationMatch)
//! - `services/` - The six pipeline operations (validate, measure, filter, sort, match, format)

pub mod models;
pub mod services;
