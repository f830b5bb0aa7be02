//! Graph capability contract consumed by the attack engine.
//!
//! The engine never reaches into adjacency storage directly. Everything it
//! needs (node enumeration, degrees, removal, connectivity, path lengths and
//! eccentricity) is expressed through [`GraphHandle`], so any graph engine can
//! be plugged in. [`AdjacencyGraph`] is the in-memory implementation shipped
//! with the crate.

use std::{fmt, hash::Hash, iter};

use indexmap::IndexMap;
use petgraph::{
    algo::dijkstra,
    stable_graph::{NodeIndex, StableUnGraph},
    visit::{Bfs, IntoEdges, NodeFiltered, VisitMap, Visitable},
};

use crate::error::GraphError;

/// Capabilities an undirected graph must expose to be attacked.
///
/// Node enumeration order is significant: degree-targeted selection breaks
/// ties by the order returned from [`GraphHandle::nodes`].
///
/// # Examples
/// ```
/// use attrition_core::{AdjacencyGraph, GraphHandle};
///
/// let mut graph = AdjacencyGraph::from_edges([(0, 1), (1, 2)]);
/// assert!(graph.is_connected());
/// graph.remove_nodes(&[1]);
/// assert_eq!(graph.connected_components().len(), 2);
/// ```
pub trait GraphHandle {
    /// Identifier type for nodes.
    type Node: Copy + Eq + Hash + fmt::Debug + Send + Sync;

    /// Returns every node in encounter order.
    fn nodes(&self) -> Vec<Self::Node>;

    /// Returns the number of nodes.
    fn node_count(&self) -> usize;

    /// Returns whether the graph has no nodes.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Returns the degree of `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `node` is not in the graph.
    fn degree(&self, node: Self::Node) -> Result<usize, GraphError>;

    /// Removes `nodes` and their incident edges in place. Unknown ids are
    /// ignored.
    fn remove_nodes(&mut self, nodes: &[Self::Node]);

    /// Returns whether every node is reachable from every other node.
    fn is_connected(&self) -> bool;

    /// Returns the connected components in discovery order.
    fn connected_components(&self) -> Vec<Vec<Self::Node>>;

    /// Returns, for every node, the hop count to each reachable node
    /// (including itself at distance zero). Unreachable pairs are absent.
    fn shortest_path_lengths(&self) -> Vec<(Self::Node, Vec<(Self::Node, u32)>)>;

    /// Returns the eccentricity of each node, optionally restricted to the
    /// subgraph induced by `within`.
    ///
    /// # Errors
    /// Returns [`GraphError::Disconnected`] when the domain is not connected
    /// and [`GraphError::UnknownNode`] when `within` names a missing node.
    fn eccentricity(
        &self,
        within: Option<&[Self::Node]>,
    ) -> Result<Vec<(Self::Node, u32)>, GraphError>;

    /// Returns an independent copy that shares no state with `self`.
    #[must_use]
    fn deep_copy(&self) -> Self
    where
        Self: Sized;
}

/// Undirected graph over `usize` node ids backed by a petgraph
/// [`StableUnGraph`].
///
/// Stable indices survive node removal, and a side table keeps node ids in
/// insertion order so enumeration stays deterministic.
///
/// # Examples
/// ```
/// use attrition_core::{AdjacencyGraph, GraphHandle};
///
/// let graph = AdjacencyGraph::from_edges([(0, 1), (1, 2), (2, 0)]);
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.degree(0)?, 2);
/// # Ok::<(), attrition_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct AdjacencyGraph {
    graph: StableUnGraph<usize, ()>,
    index: IndexMap<usize, NodeIndex>,
}

impl AdjacencyGraph {
    /// Creates a graph with no nodes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph holding `count` isolated nodes `0..count`.
    #[must_use]
    pub fn with_nodes(count: usize) -> Self {
        let mut graph = Self::new();
        for node in 0..count {
            graph.add_node(node);
        }
        graph
    }

    /// Builds a graph from an edge list; endpoints are added on first sight.
    #[must_use]
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Adds an isolated node if it is not present yet.
    pub fn add_node(&mut self, node: usize) {
        self.slot(node);
    }

    /// Adds an undirected edge. Self-loops and duplicates are ignored.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        let a = self.slot(u);
        let b = self.slot(v);
        if a != b {
            self.graph.update_edge(a, b, ());
        }
    }

    /// Returns whether the undirected edge `(u, v)` exists.
    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        match (self.index.get(&u), self.index.get(&v)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Returns whether `node` is present.
    #[must_use]
    pub fn contains(&self, node: usize) -> bool {
        self.index.contains_key(&node)
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn slot(&mut self, node: usize) -> NodeIndex {
        let graph = &mut self.graph;
        *self.index.entry(node).or_insert_with(|| graph.add_node(node))
    }

    fn first(&self) -> Option<NodeIndex> {
        self.index.values().next().copied()
    }

    fn id(&self, index: NodeIndex) -> Option<usize> {
        self.graph.node_weight(index).copied()
    }

    /// Drains `bfs`, returning node ids in visit order.
    fn drain<VM: VisitMap<NodeIndex>>(&self, bfs: &mut Bfs<NodeIndex, VM>) -> Vec<usize> {
        iter::from_fn(|| bfs.next(&self.graph))
            .filter_map(|index| self.id(index))
            .collect()
    }

    /// Hop counts from `source` over `graph`, nearest first and ties in
    /// insertion order.
    fn hop_counts<G>(&self, graph: G, source: NodeIndex) -> Vec<(usize, u32)>
    where
        G: IntoEdges<NodeId = NodeIndex> + Visitable,
    {
        let mut reached: Vec<(usize, u32)> = dijkstra(graph, source, None, |_| 1_u32)
            .into_iter()
            .filter_map(|(index, hops)| Some((self.id(index)?, hops)))
            .collect();
        reached.sort_by_key(|&(node, hops)| (hops, self.index.get_index_of(&node)));
        reached
    }
}

impl PartialEq for AdjacencyGraph {
    fn eq(&self, other: &Self) -> bool {
        self.index.keys().eq(other.index.keys())
            && self.edge_count() == other.edge_count()
            && self
                .graph
                .edge_indices()
                .filter_map(|edge| self.graph.edge_endpoints(edge))
                .all(|(a, b)| match (self.id(a), self.id(b)) {
                    (Some(u), Some(v)) => other.has_edge(u, v),
                    _ => false,
                })
    }
}

impl Eq for AdjacencyGraph {}

impl GraphHandle for AdjacencyGraph {
    type Node = usize;

    fn nodes(&self) -> Vec<usize> {
        self.index.keys().copied().collect()
    }

    fn node_count(&self) -> usize {
        self.index.len()
    }

    fn degree(&self, node: usize) -> Result<usize, GraphError> {
        self.index
            .get(&node)
            .map(|&index| self.graph.neighbors(index).count())
            .ok_or_else(|| GraphError::unknown_node(&node))
    }

    fn remove_nodes(&mut self, nodes: &[usize]) {
        for node in nodes {
            if let Some(index) = self.index.shift_remove(node) {
                self.graph.remove_node(index);
            }
        }
    }

    fn is_connected(&self) -> bool {
        self.first().is_some_and(|start| {
            self.drain(&mut Bfs::new(&self.graph, start)).len() == self.node_count()
        })
    }

    fn connected_components(&self) -> Vec<Vec<usize>> {
        let Some(start) = self.first() else {
            return Vec::new();
        };
        let mut bfs = Bfs::new(&self.graph, start);
        let mut components = vec![self.drain(&mut bfs)];
        for &index in self.index.values() {
            if bfs.discovered.is_visited(&index) {
                continue;
            }
            bfs.discovered.visit(index);
            bfs.stack.clear();
            bfs.stack.push_back(index);
            components.push(self.drain(&mut bfs));
        }
        components
    }

    fn shortest_path_lengths(&self) -> Vec<(usize, Vec<(usize, u32)>)> {
        self.index
            .iter()
            .map(|(&node, &index)| (node, self.hop_counts(&self.graph, index)))
            .collect()
    }

    fn eccentricity(&self, within: Option<&[usize]>) -> Result<Vec<(usize, u32)>, GraphError> {
        let domain: IndexMap<NodeIndex, usize> = match within {
            Some(subset) => subset
                .iter()
                .map(|&node| {
                    self.index
                        .get(&node)
                        .map(|&index| (index, node))
                        .ok_or_else(|| GraphError::unknown_node(&node))
                })
                .collect::<Result<_, _>>()?,
            None => self.index.iter().map(|(&node, &index)| (index, node)).collect(),
        };
        let induced = NodeFiltered::from_fn(&self.graph, |index| domain.contains_key(&index));

        let mut eccentricities = Vec::with_capacity(domain.len());
        for (&index, &node) in &domain {
            let reached = self.hop_counts(&induced, index);
            if reached.len() != domain.len() {
                return Err(GraphError::Disconnected {
                    nodes: domain.len(),
                });
            }
            let farthest = reached.iter().map(|&(_, hops)| hops).max().unwrap_or(0);
            eccentricities.push((node, farthest));
        }
        Ok(eccentricities)
    }

    fn deep_copy(&self) -> Self {
        self.clone()
    }
}
