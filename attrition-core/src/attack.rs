//! Attack orchestration: one removal loop shared by every strategy.
//!
//! A strategy is a [`SelectionPolicy`] paired with a [`RemovalMode`].
//! Incremental runs take ownership of the graph, shrink it step by step and
//! hand it back. Instantaneous runs never touch the caller's graph; each step
//! works on its own deep copy, which is what makes them safe to run in
//! parallel.

use std::{error::Error, fmt};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{Span, debug, field, info, instrument, warn};

use crate::{
    Result,
    builder::{Attack, EmptySamplePolicy, Execution},
    error::AttackError,
    graph::GraphHandle,
    metrics::extract,
    quantile::{Metric, QuantileTriple},
    result::{AttackResult, StepRecord},
    rng::{draw_base_seed, step_rng},
    schedule::plan_removals,
    selection::SelectionPolicy,
};

/// Whether steps share one shrinking graph or start from the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RemovalMode {
    /// Steps accumulate on one persistent graph.
    Incremental,
    /// Every step starts from a fresh copy of the original graph.
    Instantaneous,
}

/// The four attack strategies.
///
/// # Examples
/// ```
/// use attrition_core::{AttackStrategy, RemovalMode, SelectionPolicy};
///
/// let strategy = AttackStrategy::DegreeIncremental;
/// assert_eq!(strategy.policy(), SelectionPolicy::HighestDegree);
/// assert_eq!(strategy.mode(), RemovalMode::Incremental);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "kebab-case")
)]
pub enum AttackStrategy {
    /// Random failures accumulating on one graph.
    RandomIncremental,
    /// Independent random failures of the original graph.
    RandomInstantaneous,
    /// Independent removal of the highest-degree nodes of the original graph.
    DegreeInstantaneous,
    /// Repeated removal of the current highest-degree nodes.
    DegreeIncremental,
}

impl AttackStrategy {
    /// Every strategy, in a stable order.
    pub const ALL: [Self; 4] = [
        Self::RandomIncremental,
        Self::RandomInstantaneous,
        Self::DegreeInstantaneous,
        Self::DegreeIncremental,
    ];

    /// Node-selection policy of the strategy.
    #[must_use]
    pub const fn policy(self) -> SelectionPolicy {
        match self {
            Self::RandomIncremental | Self::RandomInstantaneous => SelectionPolicy::Random,
            Self::DegreeInstantaneous | Self::DegreeIncremental => SelectionPolicy::HighestDegree,
        }
    }

    /// Removal mode of the strategy.
    #[must_use]
    pub const fn mode(self) -> RemovalMode {
        match self {
            Self::RandomIncremental | Self::DegreeIncremental => RemovalMode::Incremental,
            Self::RandomInstantaneous | Self::DegreeInstantaneous => RemovalMode::Instantaneous,
        }
    }

    /// Returns the kebab-case name used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RandomIncremental => "random-incremental",
            Self::RandomInstantaneous => "random-instantaneous",
            Self::DegreeInstantaneous => "degree-instantaneous",
            Self::DegreeIncremental => "degree-incremental",
        }
    }
}

/// Progress notification delivered after each completed step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepProgress {
    /// One-based index of the step that just completed.
    pub step: usize,
    /// Total number of steps in the run.
    pub total: usize,
}

/// Completed steps, or the error that stopped the run with the steps recorded
/// before it.
type Recorded = core::result::Result<AttackResult, (AttackError, AttackResult)>;

/// Result of a run together with the graph handed back to the caller.
///
/// For incremental strategies `graph` is the attacked graph after the last
/// step. For instantaneous strategies it is the untouched original.
#[derive(Clone, Debug)]
pub struct AttackOutcome<G> {
    /// Per-step summaries.
    pub result: AttackResult,
    /// The graph ownership returns to.
    pub graph: G,
}

/// A failed run. Ownership of the graph returns to the caller here too.
///
/// For incremental strategies `graph` is the graph as the failing step left
/// it. For instantaneous strategies it is the untouched original. `result`
/// holds the steps that completed before the failure.
///
/// # Examples
/// ```
/// use attrition_core::{AdjacencyGraph, AttackError, GraphHandle, instantaneous_attack};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let graph = AdjacencyGraph::from_edges([(0, 1), (1, 2)]);
/// let failure = instantaneous_attack(graph, &[1.0], &mut SmallRng::seed_from_u64(0))
///     .expect_err("no node would survive");
/// assert!(matches!(failure.error, AttackError::OverRemoval { .. }));
/// assert_eq!(failure.graph.node_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct AttackFailure<G> {
    /// Why the run stopped.
    pub error: AttackError,
    /// Steps completed before the failure.
    pub result: AttackResult,
    /// The graph ownership returns to.
    pub graph: G,
}

impl<G> AttackFailure<G> {
    fn before_any_step(error: AttackError, graph: G) -> Self {
        Self {
            error,
            result: AttackResult::default(),
            graph,
        }
    }

    /// Drops the graph and partial result, keeping the error.
    #[must_use]
    pub fn into_error(self) -> AttackError {
        self.error
    }
}

impl<G> From<AttackFailure<G>> for AttackError {
    fn from(failure: AttackFailure<G>) -> Self {
        failure.error
    }
}

impl<G> fmt::Display for AttackFailure<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<G: fmt::Debug> Error for AttackFailure<G> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.error.source()
    }
}

/// Outcome of a run: the graph comes back on success and on failure.
pub type RunResult<G> = core::result::Result<AttackOutcome<G>, AttackFailure<G>>;

impl Attack {
    /// Runs the attack with a generator seeded from `seed`.
    ///
    /// # Errors
    /// See [`Attack::run_with_progress`].
    pub fn run_seeded<G>(&self, graph: G, seed: u64) -> RunResult<G>
    where
        G: GraphHandle + Sync,
    {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.run(graph, &mut rng)
    }

    /// Runs the attack drawing randomness from `rng`.
    ///
    /// # Errors
    /// See [`Attack::run_with_progress`].
    pub fn run<G, R>(&self, graph: G, rng: &mut R) -> RunResult<G>
    where
        G: GraphHandle + Sync,
        R: Rng + ?Sized,
    {
        self.run_with_progress(graph, rng, |_| {})
    }

    /// Runs the attack, invoking `progress` after every completed step.
    ///
    /// The whole schedule is validated against the graph size before the
    /// first removal, so an impossible schedule fails without touching the
    /// graph.
    ///
    /// # Errors
    /// Returns an [`AttackFailure`] carrying the graph, the completed steps
    /// and one of [`AttackError::OverRemoval`] when a step would remove more
    /// nodes than it can reach or leave none behind,
    /// [`AttackError::EmptyGraph`] when the graph has no nodes to measure,
    /// [`AttackError::EmptySample`] when a sample is empty and the run is
    /// configured with [`EmptySamplePolicy::Fail`], and [`AttackError::Graph`]
    /// when the graph collaborator fails.
    ///
    /// # Examples
    /// ```
    /// use attrition_core::{
    ///     AdjacencyGraph, AttackBuilder, AttackStrategy, GraphHandle, RemovalSchedule,
    /// };
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let attack = AttackBuilder::new(
    ///     AttackStrategy::RandomIncremental,
    ///     RemovalSchedule::repeated(0.25, 0.5),
    /// )
    /// .build()?;
    /// let graph = AdjacencyGraph::from_edges((0..8).flat_map(|a| (a + 1..8).map(move |b| (a, b))));
    /// let mut seen = Vec::new();
    /// let outcome = attack.run_with_progress(graph, &mut SmallRng::seed_from_u64(1), |p| {
    ///     seen.push(p.step)
    /// })?;
    /// assert_eq!(seen, vec![1, 2]);
    /// assert_eq!(outcome.graph.node_count(), 4);
    /// # Ok::<(), attrition_core::AttackError>(())
    /// ```
    #[instrument(
        name = "core.attack",
        err,
        skip(self, graph, rng, progress),
        fields(
            strategy = self.strategy().as_str(),
            nodes = graph.node_count(),
            steps = field::Empty,
        ),
    )]
    pub fn run_with_progress<G, R, F>(
        &self,
        mut graph: G,
        rng: &mut R,
        mut progress: F,
    ) -> RunResult<G>
    where
        G: GraphHandle + Sync,
        R: Rng + ?Sized,
        F: FnMut(StepProgress),
    {
        let mode = self.strategy().mode();
        let planned = self.schedule().resolve().and_then(|rates| {
            plan_removals(&rates, graph.node_count(), mode == RemovalMode::Incremental)
        });
        let counts = match planned {
            Ok(counts) => counts,
            Err(error) => return Err(AttackFailure::before_any_step(error, graph)),
        };
        Span::current().record("steps", counts.len());

        let total = counts.len();
        let recorded = match mode {
            RemovalMode::Incremental => {
                let steps = counts.iter().enumerate().map(|(step, &count)| {
                    self.attack_step(&mut graph, step, count, &mut *rng)
                });
                self.record_steps(steps, total, &mut progress)
            }
            RemovalMode::Instantaneous => {
                self.run_instantaneous(&graph, &counts, rng, &mut progress)
            }
        };
        match recorded {
            Ok(result) => {
                info!(steps = result.len(), "attack completed");
                Ok(AttackOutcome { result, graph })
            }
            Err((error, result)) => Err(AttackFailure {
                error,
                result,
                graph,
            }),
        }
    }

    fn run_instantaneous<G, R, F>(
        &self,
        original: &G,
        counts: &[usize],
        rng: &mut R,
        progress: &mut F,
    ) -> Recorded
    where
        G: GraphHandle + Sync,
        R: Rng + ?Sized,
        F: FnMut(StepProgress),
    {
        let base_seed = draw_base_seed(rng);
        let step = |(step, &count): (usize, &usize)| {
            self.instantaneous_step(original, step, count, base_seed)
        };
        match self.execution() {
            Execution::Sequential => {
                self.record_steps(counts.iter().enumerate().map(step), counts.len(), progress)
            }
            #[cfg(feature = "parallel")]
            Execution::Parallel => {
                use rayon::prelude::*;

                let records: Vec<Result<StepRecord>> =
                    counts.par_iter().enumerate().map(step).collect();
                self.record_steps(records, counts.len(), progress)
            }
            #[cfg(not(feature = "parallel"))]
            Execution::Parallel => Err((
                AttackError::ExecutionUnavailable {
                    requested: Execution::Parallel,
                },
                AttackResult::default(),
            )),
        }
    }

    /// Records step outcomes in order, stopping at the first failure.
    fn record_steps<I, F>(&self, records: I, total: usize, progress: &mut F) -> Recorded
    where
        I: IntoIterator<Item = Result<StepRecord>>,
        F: FnMut(StepProgress),
    {
        let mut result = AttackResult::with_capacity(total);
        for (step, record) in records.into_iter().enumerate() {
            match record {
                Ok(record) => self.record_step(&mut result, record, step, total, progress),
                Err(error) => return Err((error, result)),
            }
        }
        Ok(result)
    }

    fn instantaneous_step<G>(
        &self,
        original: &G,
        step: usize,
        count: usize,
        base_seed: u64,
    ) -> Result<StepRecord>
    where
        G: GraphHandle,
    {
        let mut working = original.deep_copy();
        let mut rng = step_rng(base_seed, step);
        self.attack_step(&mut working, step, count, &mut rng)
    }

    /// Removes `count` nodes from `graph` and summarises what is left.
    fn attack_step<G, R>(
        &self,
        graph: &mut G,
        step: usize,
        count: usize,
        rng: &mut R,
    ) -> Result<StepRecord>
    where
        G: GraphHandle,
        R: Rng + ?Sized,
    {
        let available = graph.node_count();
        if count > available {
            return Err(AttackError::OverRemoval {
                step,
                requested: count,
                available,
            });
        }

        let victims = self.strategy().policy().select(graph, count, rng)?;
        graph.remove_nodes(&victims);
        debug!(
            step,
            removed = victims.len(),
            remaining = graph.node_count(),
            "removed nodes"
        );

        let metrics = extract(graph)?;
        Ok(StepRecord {
            shortest_paths: self.summarize(step, Metric::ShortestPaths, &metrics.shortest_paths)?,
            eccentricities: self.summarize(step, Metric::Eccentricities, &metrics.eccentricities)?,
            cluster_sizes: metrics.cluster_sizes,
            removed: victims.len(),
        })
    }

    fn summarize(&self, step: usize, metric: Metric, sample: &[u32]) -> Result<QuantileTriple> {
        match self.estimator().summarize_counts(metric, sample) {
            Err(AttackError::EmptySample { .. })
                if self.empty_sample_policy() == EmptySamplePolicy::RecordNan =>
            {
                warn!(step, %metric, "empty sample recorded as NaN");
                Ok(QuantileTriple::NAN)
            }
            other => other,
        }
    }

    fn record_step<F>(
        &self,
        result: &mut AttackResult,
        record: StepRecord,
        step: usize,
        total: usize,
        progress: &mut F,
    ) where
        F: FnMut(StepProgress),
    {
        info!(
            step = step + 1,
            total,
            removed = record.removed,
            largest_cluster = record.cluster_sizes.relative_largest,
            mean_path = record.shortest_paths.mean,
            "attack step completed"
        );
        result.push(record);
        progress(StepProgress {
            step: step + 1,
            total,
        });
    }
}

/// Random failures accumulating on `graph`: `floor(max_rate / removal_rate)`
/// steps, each removing `removal_rate` of the original nodes.
///
/// # Errors
/// See [`Attack::run_with_progress`].
pub fn incremental_random_failure<G, R>(
    graph: G,
    removal_rate: f64,
    max_rate: f64,
    rng: &mut R,
) -> RunResult<G>
where
    G: GraphHandle + Sync,
    R: Rng + ?Sized,
{
    run_strategy(
        AttackStrategy::RandomIncremental,
        crate::RemovalSchedule::repeated(removal_rate, max_rate),
        graph,
        rng,
    )
}

/// Independent random failures of `graph`, one step per rate.
///
/// # Errors
/// See [`Attack::run_with_progress`].
pub fn instantaneous_random_failure<G, R>(
    graph: G,
    rates: &[f64],
    rng: &mut R,
) -> RunResult<G>
where
    G: GraphHandle + Sync,
    R: Rng + ?Sized,
{
    run_strategy(
        AttackStrategy::RandomInstantaneous,
        crate::RemovalSchedule::rates(rates.iter().copied()),
        graph,
        rng,
    )
}

/// Independent removal of the highest-degree nodes of `graph`, one step per
/// rate.
///
/// # Errors
/// See [`Attack::run_with_progress`].
pub fn instantaneous_attack<G, R>(graph: G, rates: &[f64], rng: &mut R) -> RunResult<G>
where
    G: GraphHandle + Sync,
    R: Rng + ?Sized,
{
    run_strategy(
        AttackStrategy::DegreeInstantaneous,
        crate::RemovalSchedule::rates(rates.iter().copied()),
        graph,
        rng,
    )
}

/// Repeated removal of the current highest-degree nodes of `graph`, one step
/// per rate.
///
/// # Errors
/// See [`Attack::run_with_progress`].
pub fn incremental_attack<G, R>(graph: G, rates: &[f64], rng: &mut R) -> RunResult<G>
where
    G: GraphHandle + Sync,
    R: Rng + ?Sized,
{
    run_strategy(
        AttackStrategy::DegreeIncremental,
        crate::RemovalSchedule::rates(rates.iter().copied()),
        graph,
        rng,
    )
}

fn run_strategy<G, R>(
    strategy: AttackStrategy,
    schedule: crate::RemovalSchedule,
    graph: G,
    rng: &mut R,
) -> RunResult<G>
where
    G: GraphHandle + Sync,
    R: Rng + ?Sized,
{
    match crate::AttackBuilder::new(strategy, schedule).build() {
        Ok(attack) => attack.run(graph, rng),
        Err(error) => Err(AttackFailure::before_any_step(error, graph)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AdjacencyGraph, AttackBuilder, RemovalSchedule, metrics::ClusterSizes,
        test_utils::CountingGraph,
    };
    use rstest::rstest;

    fn cycle(len: usize) -> AdjacencyGraph {
        AdjacencyGraph::from_edges((0..len).map(|node| (node, (node + 1) % len)))
    }

    fn complete(len: usize) -> AdjacencyGraph {
        AdjacencyGraph::from_edges((0..len).flat_map(|a| (a + 1..len).map(move |b| (a, b))))
    }

    #[rstest]
    #[case::random_incremental(AttackStrategy::RandomIncremental)]
    #[case::random_instantaneous(AttackStrategy::RandomInstantaneous)]
    #[case::degree_instantaneous(AttackStrategy::DegreeInstantaneous)]
    #[case::degree_incremental(AttackStrategy::DegreeIncremental)]
    fn removing_one_clique_node_leaves_a_smaller_clique(#[case] strategy: AttackStrategy) {
        let attack = AttackBuilder::new(strategy, RemovalSchedule::rates([0.2]))
            .build()
            .expect("configuration is valid");
        let outcome = attack.run_seeded(complete(5), 11).expect("run succeeds");
        let result = outcome.result;
        assert_eq!(result.len(), 1);
        assert_eq!(result.cluster_sizes()[0], ClusterSizes::CONNECTED);
        assert_eq!(result.eccentricities()[0].to_array(), [1.0, 1.0, 1.0]);
        assert_eq!(result.shortest_paths()[0].mean, 1.0);
    }

    #[test]
    fn over_removal_is_rejected_before_the_graph_is_touched() {
        let attack = AttackBuilder::new(
            AttackStrategy::RandomIncremental,
            RemovalSchedule::rates([0.4, 0.4, 0.4]),
        )
        .build()
        .expect("configuration is valid");
        let mut calls = 0;
        let failure = attack
            .run_with_progress(cycle(10), &mut SmallRng::seed_from_u64(0), |_| calls += 1)
            .expect_err("third step exceeds the remaining nodes");
        assert_eq!(
            failure.error,
            AttackError::OverRemoval {
                step: 2,
                requested: 4,
                available: 2
            }
        );
        assert_eq!(calls, 0);
        assert!(failure.result.is_empty());
        assert_eq!(failure.graph, cycle(10));
    }

    #[rstest]
    #[case::whole_graph(&[1.0])]
    #[case::rate_above_one(&[1.05])]
    #[case::cumulative(&[0.5, 0.5])]
    fn schedules_that_leave_no_survivor_are_rejected(#[case] rates: &[f64]) {
        let (graph, calls) = CountingGraph::new(cycle(10));
        let failure = incremental_attack(graph, rates, &mut SmallRng::seed_from_u64(0))
            .expect_err("no node would survive");
        assert!(failure.error.is_configuration());
        assert!(matches!(failure.error, AttackError::OverRemoval { .. }));
        assert_eq!(calls.removals(), 0);
        assert_eq!(failure.graph.inner(), &cycle(10));
    }

    #[test]
    fn empty_graph_surfaces_at_extraction() {
        let failure = instantaneous_attack(
            AdjacencyGraph::new(),
            &[0.5],
            &mut SmallRng::seed_from_u64(0),
        )
        .expect_err("nothing to measure");
        assert_eq!(failure.error, AttackError::EmptyGraph);
    }

    #[rstest]
    #[case::fail(EmptySamplePolicy::Fail, true)]
    #[case::record_nan(EmptySamplePolicy::RecordNan, false)]
    fn single_survivor_follows_the_empty_sample_policy(
        #[case] policy: EmptySamplePolicy,
        #[case] expect_error: bool,
    ) {
        let attack = AttackBuilder::new(
            AttackStrategy::DegreeInstantaneous,
            RemovalSchedule::rates([0.75]),
        )
        .with_empty_sample_policy(policy)
        .build()
        .expect("configuration is valid");
        let outcome = attack.run_seeded(cycle(4), 0);
        if expect_error {
            assert_eq!(
                outcome.expect_err("empty path sample must fail").error,
                AttackError::EmptySample {
                    metric: Metric::ShortestPaths
                }
            );
        } else {
            let result = outcome.expect("empty sample is recorded").result;
            assert!(result.shortest_paths()[0].is_nan());
            assert_eq!(result.eccentricities()[0].to_array(), [0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn failed_incremental_step_hands_back_the_attacked_graph() {
        // Degree ties fall to enumeration order: {0, 1}, then {3, 4}, then
        // {6, 5}, stranding 2 and 7 with no paths to measure.
        let failure = incremental_attack(
            cycle(8),
            &[0.25, 0.25, 0.25],
            &mut SmallRng::seed_from_u64(0),
        )
        .expect_err("third step leaves two isolated nodes");
        assert_eq!(
            failure.error,
            AttackError::EmptySample {
                metric: Metric::ShortestPaths
            }
        );
        assert_eq!(failure.result.removed(), &[2, 2]);
        assert_eq!(failure.graph.nodes(), vec![2, 7]);
    }

    fn assert_failed_instantaneous_run_returns_the_original(execution: Execution) {
        let attack = AttackBuilder::new(
            AttackStrategy::DegreeInstantaneous,
            RemovalSchedule::rates([0.25, 0.75, 0.25]),
        )
        .with_execution(execution)
        .build()
        .expect("configuration is valid");
        let mut calls = 0;
        let failure = attack
            .run_with_progress(cycle(4), &mut SmallRng::seed_from_u64(2), |_| calls += 1)
            .expect_err("second step leaves a single node");
        assert!(matches!(failure.error, AttackError::EmptySample { .. }));
        assert_eq!(failure.result.removed(), &[1]);
        assert_eq!(calls, 1);
        assert_eq!(failure.graph, cycle(4));
    }

    #[test]
    fn failed_sequential_instantaneous_step_hands_back_the_original() {
        assert_failed_instantaneous_run_returns_the_original(Execution::Sequential);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn failed_parallel_instantaneous_step_hands_back_the_original() {
        assert_failed_instantaneous_run_returns_the_original(Execution::Parallel);
    }

    #[test]
    fn progress_reports_every_step_in_order() {
        let attack = AttackBuilder::new(
            AttackStrategy::RandomInstantaneous,
            RemovalSchedule::rates([0.1, 0.2, 0.3]),
        )
        .build()
        .expect("configuration is valid");
        let mut seen = Vec::new();
        attack
            .run_with_progress(cycle(20), &mut SmallRng::seed_from_u64(4), |p| seen.push(p))
            .expect("run succeeds");
        let steps: Vec<(usize, usize)> = seen.iter().map(|p| (p.step, p.total)).collect();
        assert_eq!(steps, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn strategy_names_are_unique() {
        let names: std::collections::HashSet<&str> =
            AttackStrategy::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names.len(), AttackStrategy::ALL.len());
    }

    #[test]
    fn instantaneous_steps_work_on_private_copies() {
        let (graph, calls) = CountingGraph::new(cycle(20));
        let attack = AttackBuilder::new(
            AttackStrategy::RandomInstantaneous,
            RemovalSchedule::rates([0.1, 0.2, 0.3]),
        )
        .build()
        .expect("configuration is valid");
        let outcome = attack.run_seeded(graph, 8).expect("run succeeds");
        assert_eq!(calls.copies(), 3);
        assert_eq!(calls.removals(), 3);
        assert_eq!(outcome.graph.inner(), &cycle(20));
        assert_eq!(outcome.result.removed(), &[2, 4, 6]);
    }

    #[test]
    fn incremental_steps_mutate_the_caller_graph() {
        let (graph, calls) = CountingGraph::new(cycle(20));
        let attack = AttackBuilder::new(
            AttackStrategy::DegreeIncremental,
            RemovalSchedule::repeated(0.25, 0.5),
        )
        .build()
        .expect("configuration is valid");
        let outcome = attack.run_seeded(graph, 8).expect("run succeeds");
        assert_eq!(calls.copies(), 0);
        assert_eq!(calls.removals(), 2);
        assert_eq!(outcome.graph.node_count(), 10);
    }
}
