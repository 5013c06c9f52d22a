//! CLI library components for the sunscreen sanitizer.

pub mod batch;
pub mod logging;
