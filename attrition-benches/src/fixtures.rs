//! Seeded graph fixtures shared by the benchmarks.

use attrition_core::{AdjacencyGraph, GraphHandle, Topology};
use rand::{SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Edges added per node in scale-free fixtures.
pub const ATTACHMENTS: usize = 3;

/// Generates a Barabasi-Albert graph of `nodes` nodes from `seed`.
///
/// # Errors
/// Returns [`BenchSetupError::FixtureSize`] when the generated graph does not
/// hold exactly `nodes` nodes.
///
/// # Examples
/// ```
/// use attrition_benches::fixtures::scale_free;
/// use attrition_core::GraphHandle;
///
/// let graph = scale_free(50, 7)?;
/// assert_eq!(graph.node_count(), 50);
/// # Ok::<(), attrition_benches::error::BenchSetupError>(())
/// ```
pub fn scale_free(nodes: usize, seed: u64) -> Result<AdjacencyGraph, BenchSetupError> {
    let graph = Topology::BarabasiAlbert {
        nodes,
        attachments: ATTACHMENTS,
    }
    .generate(&mut SmallRng::seed_from_u64(seed));
    let actual = graph.node_count();
    if actual != nodes {
        return Err(BenchSetupError::FixtureSize {
            expected: nodes,
            actual,
        });
    }
    Ok(graph)
}
