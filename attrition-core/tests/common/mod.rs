use attrition_core::AdjacencyGraph;

/// Ring over `len` nodes.
#[must_use]
pub fn cycle(len: usize) -> AdjacencyGraph {
    AdjacencyGraph::from_edges((0..len).map(|node| (node, (node + 1) % len)))
}

/// Clique over `len` nodes.
#[must_use]
pub fn complete(len: usize) -> AdjacencyGraph {
    AdjacencyGraph::from_edges((0..len).flat_map(|a| (a + 1..len).map(move |b| (a, b))))
}

/// Hub `0` joined to `len - 1` leaves.
#[must_use]
pub fn star(len: usize) -> AdjacencyGraph {
    AdjacencyGraph::from_edges((1..len).map(|leaf| (0, leaf)))
}
