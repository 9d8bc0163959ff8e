//! HTTP handlers for dishes and restaurants.

pub mod dish;
pub mod restaurant;
pub use dish::*;
pub use restaurant::*;
