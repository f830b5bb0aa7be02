//! Shared test utilities used across attrition crates.

pub mod ci;
pub mod tracing;
