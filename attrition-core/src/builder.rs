//! Builder utilities for configuring attacks.
//!
//! Exposes the execution and empty-sample policies and the validation run
//! before an [`Attack`] is constructed.

use crate::{
    Result,
    attack::{AttackStrategy, RemovalMode},
    error::AttackError,
    quantile::QuantileEstimator,
    schedule::RemovalSchedule,
};

/// How instantaneous steps are scheduled onto threads.
///
/// Incremental strategies always run sequentially: each step depends on the
/// graph left by the previous one.
///
/// # Examples
/// ```
/// use attrition_core::Execution;
///
/// assert_eq!(Execution::default(), Execution::Sequential);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    /// Run every step on the calling thread.
    #[default]
    Sequential,
    /// Run instantaneous steps on the rayon thread pool.
    Parallel,
}

/// What a step does when a metric sample is empty.
///
/// A lone surviving node has no paths to measure; with enough removals this
/// is the expected end state rather than a fault.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EmptySamplePolicy {
    /// Abort the run with [`AttackError::EmptySample`].
    #[default]
    Fail,
    /// Record [`crate::QuantileTriple::NAN`] and continue.
    RecordNan,
}

/// Configures and constructs [`Attack`] instances.
///
/// # Examples
/// ```
/// use attrition_core::{
///     AttackBuilder, AttackStrategy, EmptySamplePolicy, QuantileEstimator, RemovalSchedule,
/// };
///
/// let attack = AttackBuilder::new(
///     AttackStrategy::RandomInstantaneous,
///     RemovalSchedule::rates([0.1, 0.2]),
/// )
/// .with_estimator(QuantileEstimator::LINEAR)
/// .with_empty_sample_policy(EmptySamplePolicy::RecordNan)
/// .build()
/// .expect("builder configuration is valid");
/// assert_eq!(attack.strategy(), AttackStrategy::RandomInstantaneous);
/// assert_eq!(attack.estimator(), QuantileEstimator::LINEAR);
/// ```
#[derive(Debug, Clone)]
pub struct AttackBuilder {
    strategy: AttackStrategy,
    schedule: RemovalSchedule,
    estimator: QuantileEstimator,
    empty_sample_policy: EmptySamplePolicy,
    execution: Execution,
}

impl AttackBuilder {
    /// Creates a builder for `strategy` driven by `schedule`.
    #[must_use]
    pub fn new(strategy: AttackStrategy, schedule: RemovalSchedule) -> Self {
        Self {
            strategy,
            schedule,
            estimator: QuantileEstimator::default(),
            empty_sample_policy: EmptySamplePolicy::default(),
            execution: Execution::default(),
        }
    }

    /// Overrides the removal schedule.
    #[must_use]
    pub fn with_schedule(mut self, schedule: RemovalSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Overrides the quantile estimator.
    #[must_use]
    pub fn with_estimator(mut self, estimator: QuantileEstimator) -> Self {
        self.estimator = estimator;
        self
    }

    /// Overrides the empty-sample policy.
    #[must_use]
    pub fn with_empty_sample_policy(mut self, policy: EmptySamplePolicy) -> Self {
        self.empty_sample_policy = policy;
        self
    }

    /// Sets how instantaneous steps are executed.
    #[must_use]
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Returns the configured strategy.
    #[must_use]
    pub fn strategy(&self) -> AttackStrategy {
        self.strategy
    }

    /// Returns the configured schedule.
    #[must_use]
    pub fn schedule(&self) -> &RemovalSchedule {
        &self.schedule
    }

    /// Validates the configuration and constructs an [`Attack`].
    ///
    /// The schedule is validated here; whether it fits a particular graph is
    /// only known once the attack runs.
    ///
    /// # Errors
    /// Returns [`AttackError::InvalidSchedule`] or [`AttackError::InvalidRate`]
    /// for malformed schedules and [`AttackError::ExecutionUnavailable`] when
    /// parallel execution is requested without the `parallel` feature.
    ///
    /// # Examples
    /// ```
    /// use attrition_core::{AttackBuilder, AttackError, AttackStrategy, RemovalSchedule};
    ///
    /// let err = AttackBuilder::new(
    ///     AttackStrategy::RandomIncremental,
    ///     RemovalSchedule::repeated(0.0, 0.5),
    /// )
    /// .build()
    /// .unwrap_err();
    /// assert!(matches!(err, AttackError::InvalidSchedule { .. }));
    /// ```
    pub fn build(self) -> Result<Attack> {
        self.schedule.resolve()?;
        if self.execution == Execution::Parallel && !cfg!(feature = "parallel") {
            return Err(AttackError::ExecutionUnavailable {
                requested: self.execution,
            });
        }
        let execution = match self.strategy.mode() {
            RemovalMode::Incremental => Execution::Sequential,
            RemovalMode::Instantaneous => self.execution,
        };
        Ok(Attack {
            strategy: self.strategy,
            schedule: self.schedule,
            estimator: self.estimator,
            empty_sample_policy: self.empty_sample_policy,
            execution,
        })
    }
}

/// A validated attack configuration, ready to run against any
/// [`crate::GraphHandle`].
#[derive(Debug, Clone)]
pub struct Attack {
    strategy: AttackStrategy,
    schedule: RemovalSchedule,
    estimator: QuantileEstimator,
    empty_sample_policy: EmptySamplePolicy,
    execution: Execution,
}

impl Attack {
    /// Returns the attack strategy.
    #[must_use]
    pub fn strategy(&self) -> AttackStrategy {
        self.strategy
    }

    /// Returns the removal schedule.
    #[must_use]
    pub fn schedule(&self) -> &RemovalSchedule {
        &self.schedule
    }

    /// Returns the quantile estimator.
    #[must_use]
    pub fn estimator(&self) -> QuantileEstimator {
        self.estimator
    }

    /// Returns the empty-sample policy.
    #[must_use]
    pub fn empty_sample_policy(&self) -> EmptySamplePolicy {
        self.empty_sample_policy
    }

    /// Returns the effective execution; always [`Execution::Sequential`] for
    /// incremental strategies.
    #[must_use]
    pub fn execution(&self) -> Execution {
        self.execution
    }
}
