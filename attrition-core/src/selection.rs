//! Node-selection policies used by the attack loop.

use rand::{Rng, seq::SliceRandom};

use crate::{Result, graph::GraphHandle};

/// Decides which nodes a step removes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "kebab-case")
)]
pub enum SelectionPolicy {
    /// Uniform sample without replacement.
    Random,
    /// The `count` nodes of highest degree; ties keep node enumeration order.
    HighestDegree,
}

impl SelectionPolicy {
    /// Picks `count` nodes of `graph` to remove.
    ///
    /// `count` must not exceed the node count; the attack loop guarantees
    /// this before calling.
    ///
    /// # Errors
    /// Propagates [`crate::AttackError::Graph`] when a degree lookup fails.
    ///
    /// # Examples
    /// ```
    /// use attrition_core::{AdjacencyGraph, SelectionPolicy};
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let star = AdjacencyGraph::from_edges([(0, 1), (0, 2), (0, 3)]);
    /// let mut rng = SmallRng::seed_from_u64(1);
    /// let hubs = SelectionPolicy::HighestDegree.select(&star, 1, &mut rng)?;
    /// assert_eq!(hubs, vec![0]);
    /// # Ok::<(), attrition_core::AttackError>(())
    /// ```
    pub fn select<G, R>(self, graph: &G, count: usize, rng: &mut R) -> Result<Vec<G::Node>>
    where
        G: GraphHandle,
        R: Rng + ?Sized,
    {
        let nodes = graph.nodes();
        match self {
            Self::Random => Ok(nodes.choose_multiple(rng, count).copied().collect()),
            Self::HighestDegree => {
                let mut ranked = nodes
                    .into_iter()
                    .map(|node| graph.degree(node).map(|degree| (node, degree)))
                    .collect::<core::result::Result<Vec<_>, _>>()?;
                ranked.sort_by(|left, right| right.1.cmp(&left.1));
                Ok(ranked.into_iter().take(count).map(|(node, _)| node).collect())
            }
        }
    }

    /// Returns the kebab-case name used in logs and rendered output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::HighestDegree => "highest-degree",
        }
    }
}
