//! Per-step resilience metrics extracted from an attacked graph.

use tracing::{debug, instrument};

use crate::{Result, error::AttackError, graph::GraphHandle};

/// Fragmentation summary of a graph.
///
/// `relative_largest` is the share of current nodes held by the largest
/// connected component. `mean_isolated` is the mean size of every other
/// component; it is `1.0` for a connected graph and NaN when a disconnected
/// graph has no other component to average.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClusterSizes {
    /// Largest component size divided by the current node count.
    pub relative_largest: f64,
    /// Mean size of the components other than the largest.
    pub mean_isolated: f64,
}

impl ClusterSizes {
    /// Summary reported for a connected graph.
    pub const CONNECTED: Self = Self {
        relative_largest: 1.0,
        mean_isolated: 1.0,
    };
}

/// Raw samples collected from one attacked graph.
#[derive(Clone, Debug, PartialEq)]
pub struct AttackMetrics {
    /// Hop count of every ordered reachable pair, self-pairs excluded.
    pub shortest_paths: Vec<u32>,
    /// Eccentricity of each node in the largest component.
    pub eccentricities: Vec<u32>,
    /// Fragmentation summary.
    pub cluster_sizes: ClusterSizes,
}

/// Computes path, eccentricity and fragmentation metrics for `graph`.
///
/// The graph is only read. When it is disconnected the eccentricity sample is
/// restricted to the subgraph induced by its largest component; ties between
/// equally large components keep discovery order.
///
/// # Errors
/// Returns [`AttackError::EmptyGraph`] when `graph` has no nodes and
/// [`AttackError::Graph`] when the collaborator fails.
///
/// # Examples
/// ```
/// use attrition_core::{AdjacencyGraph, extract};
///
/// let graph = AdjacencyGraph::from_edges([(0, 1), (2, 3), (3, 4)]);
/// let metrics = extract(&graph)?;
/// assert_eq!(metrics.cluster_sizes.relative_largest, 0.6);
/// assert_eq!(metrics.cluster_sizes.mean_isolated, 2.0);
/// assert_eq!(metrics.eccentricities, vec![2, 1, 2]);
/// # Ok::<(), attrition_core::AttackError>(())
/// ```
#[instrument(name = "core.extract", level = "debug", skip(graph), fields(nodes = graph.node_count()))]
pub fn extract<G: GraphHandle>(graph: &G) -> Result<AttackMetrics> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Err(AttackError::EmptyGraph);
    }

    let shortest_paths: Vec<u32> = graph
        .shortest_path_lengths()
        .into_iter()
        .flat_map(|(_, lengths)| lengths.into_iter().map(|(_, hops)| hops))
        .filter(|&hops| hops > 0)
        .collect();

    let (eccentricities, cluster_sizes) = if graph.is_connected() {
        (
            values(graph.eccentricity(None)?),
            ClusterSizes::CONNECTED,
        )
    } else {
        let mut components = graph.connected_components();
        components.sort_by(|left, right| right.len().cmp(&left.len()));
        let sizes: Vec<usize> = components.iter().map(Vec::len).collect();
        let cluster_sizes = fragmentation(&sizes, node_count);
        debug!(
            components = components.len(),
            largest = sizes.first().copied().unwrap_or(0),
            "graph is fragmented"
        );
        let largest = components.first().map_or(&[][..], Vec::as_slice);
        (values(graph.eccentricity(Some(largest))?), cluster_sizes)
    };

    Ok(AttackMetrics {
        shortest_paths,
        eccentricities,
        cluster_sizes,
    })
}

fn values<N>(pairs: Vec<(N, u32)>) -> Vec<u32> {
    pairs.into_iter().map(|(_, value)| value).collect()
}

/// Summarises component sizes sorted in descending order.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "fragmentation ratios are reported as floats"
)]
fn fragmentation(sorted_sizes: &[usize], node_count: usize) -> ClusterSizes {
    let Some((&largest, rest)) = sorted_sizes.split_first() else {
        return ClusterSizes {
            relative_largest: 0.0,
            mean_isolated: f64::NAN,
        };
    };
    let mean_isolated = if rest.is_empty() {
        f64::NAN
    } else {
        rest.iter().sum::<usize>() as f64 / rest.len() as f64
    };
    ClusterSizes {
        relative_largest: largest as f64 / node_count as f64,
        mean_isolated,
    }
}
