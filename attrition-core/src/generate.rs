//! Synthetic topologies for driving attacks without an external graph source.
//!
//! Provides deterministic families (cycle, path, complete, star, grid) and two
//! seeded random families: Erdos-Renyi `G(n, p)` and Barabasi-Albert
//! preferential attachment.

use rand::Rng;

use crate::graph::AdjacencyGraph;

/// A graph family and its size parameters.
///
/// # Examples
/// ```
/// use attrition_core::{GraphHandle, Topology};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let grid = Topology::Grid { rows: 3, cols: 4 }.generate(&mut rng);
/// assert_eq!(grid.node_count(), 12);
/// assert_eq!(grid.edge_count(), 17);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Topology {
    /// Ring of `nodes` nodes.
    Cycle {
        /// Number of nodes.
        nodes: usize,
    },
    /// Simple path over `nodes` nodes.
    Path {
        /// Number of nodes.
        nodes: usize,
    },
    /// Clique over `nodes` nodes.
    Complete {
        /// Number of nodes.
        nodes: usize,
    },
    /// Hub `0` joined to `nodes - 1` leaves.
    Star {
        /// Number of nodes, hub included.
        nodes: usize,
    },
    /// Four-neighbour lattice.
    Grid {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },
    /// Every pair joined independently with probability `edge_probability`.
    Gnp {
        /// Number of nodes.
        nodes: usize,
        /// Edge probability in `[0, 1]`.
        edge_probability: f64,
    },
    /// Preferential attachment growing from a clique of `attachments + 1`
    /// nodes, each newcomer linking to `attachments` distinct existing nodes.
    BarabasiAlbert {
        /// Number of nodes.
        nodes: usize,
        /// Edges added per new node.
        attachments: usize,
    },
}

impl Topology {
    /// Builds the graph; deterministic families ignore `rng`.
    ///
    /// Node ids are `0..n` in insertion order, so degree ties resolve toward
    /// lower ids.
    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R) -> AdjacencyGraph {
        match self {
            Self::Cycle { nodes } => cycle(nodes),
            Self::Path { nodes } => path(nodes),
            Self::Complete { nodes } => complete(nodes),
            Self::Star { nodes } => star(nodes),
            Self::Grid { rows, cols } => grid(rows, cols),
            Self::Gnp {
                nodes,
                edge_probability,
            } => gnp(nodes, edge_probability, rng),
            Self::BarabasiAlbert { nodes, attachments } => {
                barabasi_albert(nodes, attachments, rng)
            }
        }
    }

    /// Number of nodes the generated graph will hold.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        match *self {
            Self::Cycle { nodes }
            | Self::Path { nodes }
            | Self::Complete { nodes }
            | Self::Star { nodes }
            | Self::Gnp { nodes, .. }
            | Self::BarabasiAlbert { nodes, .. } => nodes,
            Self::Grid { rows, cols } => rows.saturating_mul(cols),
        }
    }
}

fn cycle(nodes: usize) -> AdjacencyGraph {
    let mut graph = path(nodes);
    if nodes > 2 {
        graph.add_edge(nodes - 1, 0);
    }
    graph
}

fn path(nodes: usize) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::with_nodes(nodes);
    for node in 1..nodes {
        graph.add_edge(node - 1, node);
    }
    graph
}

fn complete(nodes: usize) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::with_nodes(nodes);
    for a in 0..nodes {
        for b in (a + 1)..nodes {
            graph.add_edge(a, b);
        }
    }
    graph
}

fn star(nodes: usize) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::with_nodes(nodes);
    for leaf in 1..nodes {
        graph.add_edge(0, leaf);
    }
    graph
}

fn grid(rows: usize, cols: usize) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::with_nodes(rows.saturating_mul(cols));
    for row in 0..rows {
        for col in 0..cols {
            let current = row * cols + col;
            if col + 1 < cols {
                graph.add_edge(current, current + 1);
            }
            if row + 1 < rows {
                graph.add_edge(current, current + cols);
            }
        }
    }
    graph
}

fn gnp<R: Rng + ?Sized>(nodes: usize, edge_probability: f64, rng: &mut R) -> AdjacencyGraph {
    let p = if edge_probability.is_nan() {
        0.0
    } else {
        edge_probability.clamp(0.0, 1.0)
    };
    let mut graph = AdjacencyGraph::with_nodes(nodes);
    for a in 0..nodes {
        for b in (a + 1)..nodes {
            if rng.gen_bool(p) {
                graph.add_edge(a, b);
            }
        }
    }
    graph
}

fn barabasi_albert<R: Rng + ?Sized>(
    nodes: usize,
    attachments: usize,
    rng: &mut R,
) -> AdjacencyGraph {
    let seed_size = attachments.saturating_add(1).min(nodes);
    let mut graph = complete(seed_size);
    // Each node appears once per incident edge, so a uniform draw from this
    // pool is a degree-proportional draw over nodes.
    let mut pool: Vec<usize> = (0..seed_size)
        .flat_map(|node| std::iter::repeat_n(node, seed_size.saturating_sub(1).max(1)))
        .collect();

    for newcomer in seed_size..nodes {
        graph.add_node(newcomer);
        let wanted = attachments.min(newcomer);
        let mut targets: Vec<usize> = Vec::with_capacity(wanted);
        while targets.len() < wanted {
            let Some(&candidate) = pool.get(rng.gen_range(0..pool.len())) else {
                break;
            };
            if !targets.contains(&candidate) {
                targets.push(candidate);
            }
        }
        for &target in &targets {
            graph.add_edge(newcomer, target);
            pool.push(target);
            pool.push(newcomer);
        }
        if targets.is_empty() {
            pool.push(newcomer);
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphHandle;
    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    #[rstest]
    #[case::cycle(Topology::Cycle { nodes: 10 }, 10)]
    #[case::tiny_cycle(Topology::Cycle { nodes: 2 }, 1)]
    #[case::path(Topology::Path { nodes: 10 }, 9)]
    #[case::complete(Topology::Complete { nodes: 6 }, 15)]
    #[case::star(Topology::Star { nodes: 6 }, 5)]
    #[case::grid(Topology::Grid { rows: 2, cols: 3 }, 7)]
    fn deterministic_families_have_known_edge_counts(
        #[case] topology: Topology,
        #[case] edges: usize,
    ) {
        let graph = topology.generate(&mut SmallRng::seed_from_u64(0));
        assert_eq!(graph.node_count(), topology.node_count());
        assert_eq!(graph.edge_count(), edges);
    }

    #[rstest]
    #[case::empty(0.0, 0)]
    #[case::full(1.0, 28)]
    fn gnp_extremes_are_exact(#[case] edge_probability: f64, #[case] edges: usize) {
        let graph = Topology::Gnp {
            nodes: 8,
            edge_probability,
        }
        .generate(&mut SmallRng::seed_from_u64(3));
        assert_eq!(graph.node_count(), 8);
        assert_eq!(graph.edge_count(), edges);
    }

    #[test]
    fn barabasi_albert_adds_attachments_per_newcomer() {
        let topology = Topology::BarabasiAlbert {
            nodes: 30,
            attachments: 2,
        };
        let graph = topology.generate(&mut SmallRng::seed_from_u64(17));
        assert_eq!(graph.node_count(), 30);
        // Seed triangle plus two edges for each of the 27 newcomers.
        assert_eq!(graph.edge_count(), 3 + 27 * 2);
        assert!(graph.is_connected());
    }

    #[rstest]
    #[case::one_more_than_nodes(4, 5)]
    #[case::saturating(5, usize::MAX)]
    fn oversized_attachments_yield_a_complete_graph(
        #[case] nodes: usize,
        #[case] attachments: usize,
    ) {
        let graph = Topology::BarabasiAlbert { nodes, attachments }
            .generate(&mut SmallRng::seed_from_u64(9));
        assert_eq!(graph.node_count(), nodes);
        assert_eq!(graph.edge_count(), nodes * (nodes - 1) / 2);
    }

    #[test]
    fn random_families_are_seed_stable() {
        let topology = Topology::BarabasiAlbert {
            nodes: 40,
            attachments: 3,
        };
        let first = topology.generate(&mut SmallRng::seed_from_u64(5));
        let second = topology.generate(&mut SmallRng::seed_from_u64(5));
        assert_eq!(first, second);
    }
}
