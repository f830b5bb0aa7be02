//! Benchmark setup error type.

use attrition_core::AttackError;

/// Errors that may occur while preparing a benchmark.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building or running an attack failed.
    #[error("attack failed: {0}")]
    Attack(#[from] AttackError),
    /// A fixture came out smaller than the benchmark requires.
    #[error("fixture has {actual} nodes but {expected} were requested")]
    FixtureSize {
        /// Nodes requested.
        expected: usize,
        /// Nodes generated.
        actual: usize,
    },
}
