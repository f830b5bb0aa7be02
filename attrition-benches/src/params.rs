//! Benchmark parameter types rendered into Criterion benchmark ids.

use std::fmt;

use attrition_core::{AttackStrategy, Execution};

/// Parameters for one attack benchmark.
#[derive(Clone, Debug)]
pub struct AttackBenchParams {
    /// Nodes in the fixture.
    pub nodes: usize,
    /// Strategy under test.
    pub strategy: AttackStrategy,
    /// How instantaneous steps are scheduled.
    pub execution: Execution,
}

impl fmt::Display for AttackBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let execution = match self.execution {
            Execution::Sequential => "seq",
            Execution::Parallel => "par",
        };
        write!(
            f,
            "{},n={},{execution}",
            self.strategy.as_str(),
            self.nodes
        )
    }
}

/// Parameters for a metric-extraction benchmark.
#[derive(Clone, Debug)]
pub struct ExtractionBenchParams {
    /// Nodes in the fixture.
    pub nodes: usize,
    /// Fraction of nodes removed before extraction.
    pub removed_fraction: f64,
}

impl fmt::Display for ExtractionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},removed={}", self.nodes, self.removed_fraction)
    }
}
