//! Shared test utilities for `attrition-core`.

use attrition_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{AdjacencyGraph, GraphError, GraphHandle};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Builds a proptest configuration from the shared CI profile so every
/// suite reads `PROPTEST_CASES` and `ATTRITION_PBT_FORK` the same way.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Call counters shared between a [`CountingGraph`] and all its copies.
#[derive(Clone, Debug, Default)]
pub(crate) struct GraphCalls {
    copies: Arc<AtomicUsize>,
    removals: Arc<AtomicUsize>,
}

impl GraphCalls {
    pub(crate) fn copies(&self) -> usize {
        self.copies.load(Ordering::Relaxed)
    }

    pub(crate) fn removals(&self) -> usize {
        self.removals.load(Ordering::Relaxed)
    }
}

/// [`GraphHandle`] wrapper that counts copies and in-place removals.
#[derive(Clone, Debug)]
pub(crate) struct CountingGraph {
    inner: AdjacencyGraph,
    calls: GraphCalls,
}

impl CountingGraph {
    pub(crate) fn new(inner: AdjacencyGraph) -> (Self, GraphCalls) {
        let calls = GraphCalls::default();
        (
            Self {
                inner,
                calls: calls.clone(),
            },
            calls,
        )
    }

    pub(crate) fn inner(&self) -> &AdjacencyGraph {
        &self.inner
    }
}

impl GraphHandle for CountingGraph {
    type Node = usize;

    fn nodes(&self) -> Vec<usize> {
        self.inner.nodes()
    }

    fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    fn degree(&self, node: usize) -> Result<usize, GraphError> {
        self.inner.degree(node)
    }

    fn remove_nodes(&mut self, nodes: &[usize]) {
        self.calls.removals.fetch_add(1, Ordering::Relaxed);
        self.inner.remove_nodes(nodes);
    }

    fn is_connected(&self) -> bool {
        self.inner.is_connected()
    }

    fn connected_components(&self) -> Vec<Vec<usize>> {
        self.inner.connected_components()
    }

    fn shortest_path_lengths(&self) -> Vec<(usize, Vec<(usize, u32)>)> {
        self.inner.shortest_path_lengths()
    }

    fn eccentricity(&self, within: Option<&[usize]>) -> Result<Vec<(usize, u32)>, GraphError> {
        self.inner.eccentricity(within)
    }

    fn deep_copy(&self) -> Self {
        self.calls.copies.fetch_add(1, Ordering::Relaxed);
        Self {
            inner: self.inner.deep_copy(),
            calls: self.calls.clone(),
        }
    }
}
