//! Accumulated output of an attack run.

use crate::{metrics::ClusterSizes, quantile::QuantileTriple};

/// Per-step summaries in step order.
///
/// The three sequences always have the same length: one entry per completed
/// step. A result is built by the attack loop and handed back read-only.
///
/// # Examples
/// ```
/// use attrition_core::{AdjacencyGraph, AttackBuilder, AttackStrategy, RemovalSchedule};
///
/// let attack = AttackBuilder::new(
///     AttackStrategy::DegreeInstantaneous,
///     RemovalSchedule::rates([0.2, 0.4]),
/// )
/// .build()?;
/// let graph = AdjacencyGraph::from_edges((0..10).map(|n| (n, (n + 1) % 10)));
/// let outcome = attack.run_seeded(graph, 3)?;
/// assert_eq!(outcome.result.len(), 2);
/// assert_eq!(outcome.result.removed(), &[2, 4]);
/// # Ok::<(), attrition_core::AttackError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttackResult {
    shortest_paths: Vec<QuantileTriple>,
    eccentricities: Vec<QuantileTriple>,
    cluster_sizes: Vec<ClusterSizes>,
    removed: Vec<usize>,
}

/// One completed step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRecord {
    /// Summary of the shortest-path sample.
    pub shortest_paths: QuantileTriple,
    /// Summary of the eccentricity sample.
    pub eccentricities: QuantileTriple,
    /// Fragmentation after the step.
    pub cluster_sizes: ClusterSizes,
    /// Nodes removed by this step.
    pub removed: usize,
}

impl AttackResult {
    pub(crate) fn with_capacity(steps: usize) -> Self {
        Self {
            shortest_paths: Vec::with_capacity(steps),
            eccentricities: Vec::with_capacity(steps),
            cluster_sizes: Vec::with_capacity(steps),
            removed: Vec::with_capacity(steps),
        }
    }

    pub(crate) fn push(&mut self, record: StepRecord) {
        self.shortest_paths.push(record.shortest_paths);
        self.eccentricities.push(record.eccentricities);
        self.cluster_sizes.push(record.cluster_sizes);
        self.removed.push(record.removed);
    }

    /// Shortest-path `(q25, mean, q75)` per step.
    #[must_use]
    pub fn shortest_paths(&self) -> &[QuantileTriple] {
        &self.shortest_paths
    }

    /// Eccentricity `(q25, mean, q75)` per step.
    #[must_use]
    pub fn eccentricities(&self) -> &[QuantileTriple] {
        &self.eccentricities
    }

    /// Fragmentation summary per step.
    #[must_use]
    pub fn cluster_sizes(&self) -> &[ClusterSizes] {
        &self.cluster_sizes
    }

    /// Nodes removed by each step.
    #[must_use]
    pub fn removed(&self) -> &[usize] {
        &self.removed
    }

    /// Number of completed steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.removed.len()
    }

    /// Whether no step was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }

    /// Iterates over the steps in order.
    pub fn steps(&self) -> impl Iterator<Item = StepRecord> + '_ {
        self.shortest_paths
            .iter()
            .zip(&self.eccentricities)
            .zip(&self.cluster_sizes)
            .zip(&self.removed)
            .map(
                |(((&shortest_paths, &eccentricities), &cluster_sizes), &removed)| StepRecord {
                    shortest_paths,
                    eccentricities,
                    cluster_sizes,
                    removed,
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(removed: usize) -> StepRecord {
        StepRecord {
            shortest_paths: QuantileTriple {
                q25: 1.0,
                mean: 1.5,
                q75: 2.0,
            },
            eccentricities: QuantileTriple::NAN,
            cluster_sizes: ClusterSizes::CONNECTED,
            removed,
        }
    }

    #[test]
    fn steps_replay_pushed_records_in_order() {
        let mut result = AttackResult::with_capacity(2);
        result.push(record(3));
        result.push(record(5));
        let removed: Vec<usize> = result.steps().map(|step| step.removed).collect();
        assert_eq!(removed, vec![3, 5]);
        assert_eq!(result.len(), 2);
        assert_eq!(result.shortest_paths().len(), result.cluster_sizes().len());
    }

    #[test]
    fn default_result_is_empty() {
        let result = AttackResult::default();
        assert!(result.is_empty());
        assert_eq!(result.steps().count(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialises_nan_summaries_as_null() {
        let mut result = AttackResult::default();
        result.push(record(1));
        let value = serde_json::to_value(&result).expect("result serialises");
        assert_eq!(value["removed"], serde_json::json!([1]));
        assert_eq!(value["shortest_paths"][0]["mean"], 1.5);
        assert!(value["eccentricities"][0]["q25"].is_null());
        assert_eq!(value["cluster_sizes"][0]["relative_largest"], 1.0);
    }
}
