//! Command implementations

mod demo;

pub use demo::demo;
