//! Benchmark support crate for attrition.
//!
//! Provides seeded graph fixtures and parameter types used by the Criterion
//! benchmarks for attack runs and per-step metric extraction.

pub mod error;
pub mod fixtures;
pub mod params;
