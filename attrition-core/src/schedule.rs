//! Removal schedules and the per-step removal counts they imply.

use crate::{Result, error::AttackError};

/// Largest number of steps a repeated schedule may expand to.
const MAX_REPEATED_STEPS: f64 = 1_000_000.0;

/// How much of the original graph each step removes.
///
/// Every rate is a fraction of the node count the graph had before the
/// attack started, never of the shrinking current size. An incremental run
/// therefore removes the same absolute number of nodes at every step of a
/// [`RemovalSchedule::Repeated`] schedule.
///
/// # Examples
/// ```
/// use attrition_core::RemovalSchedule;
///
/// let schedule = RemovalSchedule::repeated(0.25, 0.5);
/// assert_eq!(schedule.resolve()?, vec![0.25, 0.25]);
///
/// let explicit = RemovalSchedule::rates([0.1, 0.3]);
/// assert_eq!(explicit.step_count()?, 2);
/// # Ok::<(), attrition_core::AttackError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum RemovalSchedule {
    /// `floor(max_rate / removal_rate)` steps of `removal_rate` each.
    Repeated {
        /// Fraction of the original nodes removed per step.
        removal_rate: f64,
        /// Cap on the cumulative removed fraction.
        max_rate: f64,
    },
    /// One step per listed rate, in order.
    Rates(Vec<f64>),
}

impl RemovalSchedule {
    /// Cumulative cap used when callers only pick a per-step rate.
    pub const DEFAULT_MAX_RATE: f64 = 0.5;

    /// Creates a repeated schedule.
    #[must_use]
    pub const fn repeated(removal_rate: f64, max_rate: f64) -> Self {
        Self::Repeated {
            removal_rate,
            max_rate,
        }
    }

    /// Creates an explicit schedule from a sequence of rates.
    #[must_use]
    pub fn rates(rates: impl IntoIterator<Item = f64>) -> Self {
        Self::Rates(rates.into_iter().collect())
    }

    /// Validates the schedule and expands it into one rate per step.
    ///
    /// # Errors
    /// Returns [`AttackError::InvalidSchedule`] when a repeated schedule has a
    /// non-positive or non-finite rate (or expands to an unreasonable number
    /// of steps), and [`AttackError::InvalidRate`] when an explicit rate is
    /// negative or non-finite.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the step count is the floored, bounded quotient of two finite positive rates"
    )]
    pub fn resolve(&self) -> Result<Vec<f64>> {
        match self {
            Self::Repeated {
                removal_rate,
                max_rate,
            } => {
                let invalid = || AttackError::InvalidSchedule {
                    removal_rate: *removal_rate,
                    max_rate: *max_rate,
                };
                if !removal_rate.is_finite() || *removal_rate <= 0.0 {
                    return Err(invalid());
                }
                if !max_rate.is_finite() || *max_rate < 0.0 {
                    return Err(invalid());
                }
                let steps = (max_rate / removal_rate).floor();
                if steps > MAX_REPEATED_STEPS {
                    return Err(invalid());
                }
                Ok(vec![*removal_rate; steps as usize])
            }
            Self::Rates(rates) => {
                if let Some((index, &rate)) = rates
                    .iter()
                    .enumerate()
                    .find(|(_, rate)| !rate.is_finite() || **rate < 0.0)
                {
                    return Err(AttackError::InvalidRate { index, rate });
                }
                Ok(rates.clone())
            }
        }
    }

    /// Number of steps the schedule runs.
    ///
    /// # Errors
    /// Propagates validation failures from [`RemovalSchedule::resolve`].
    pub fn step_count(&self) -> Result<usize> {
        self.resolve().map(|rates| rates.len())
    }
}

/// Converts a rate into an absolute node count against the original size.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "rates are validated finite and non-negative; the floor yields a node count"
)]
pub(crate) fn removal_count(original_nodes: usize, rate: f64) -> usize {
    (original_nodes as f64 * rate).floor() as usize
}

/// Computes every step's removal count and rejects schedules that would ask
/// a step for more nodes than it can reach or would leave it nothing to
/// measure.
///
/// With `cumulative` set each step draws from what earlier steps left behind;
/// otherwise every step starts from the full original graph. A rate above one
/// is rejected even when the floored count happens to fit.
pub(crate) fn plan_removals(
    rates: &[f64],
    original_nodes: usize,
    cumulative: bool,
) -> Result<Vec<usize>> {
    let mut available = original_nodes;
    let mut counts = Vec::with_capacity(rates.len());
    for (step, &rate) in rates.iter().enumerate() {
        let requested = removal_count(original_nodes, rate);
        let depletes = requested > 0 && requested >= available;
        if rate > 1.0 || depletes {
            return Err(AttackError::OverRemoval {
                step,
                requested,
                available,
            });
        }
        if cumulative {
            available -= requested;
        }
        counts.push(requested);
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::exact(0.25, 0.5, 2)]
    #[case::floor(0.2, 0.5, 2)]
    #[case::float_rounding(0.1, 0.3, 2)]
    #[case::zero_cap(0.1, 0.0, 0)]
    #[case::whole_graph(0.1, 1.0, 10)]
    fn repeated_schedules_floor_the_step_count(
        #[case] removal_rate: f64,
        #[case] max_rate: f64,
        #[case] expected: usize,
    ) {
        let schedule = RemovalSchedule::repeated(removal_rate, max_rate);
        assert_eq!(schedule.step_count().expect("schedule is valid"), expected);
    }

    #[rstest]
    #[case::zero_rate(0.0, 0.5)]
    #[case::negative_rate(-0.1, 0.5)]
    #[case::nan_rate(f64::NAN, 0.5)]
    #[case::negative_cap(0.1, -1.0)]
    #[case::infinite_cap(0.1, f64::INFINITY)]
    #[case::too_many_steps(1e-12, 1.0)]
    fn repeated_schedules_reject_bad_parameters(#[case] removal_rate: f64, #[case] max_rate: f64) {
        let err = RemovalSchedule::repeated(removal_rate, max_rate)
            .resolve()
            .expect_err("schedule must be rejected");
        assert!(matches!(err, AttackError::InvalidSchedule { .. }));
    }

    #[test]
    fn explicit_rates_reject_the_first_bad_entry() {
        let err = RemovalSchedule::rates([0.1, -0.2, f64::NAN])
            .resolve()
            .expect_err("negative rate must be rejected");
        assert_eq!(
            err,
            AttackError::InvalidRate {
                index: 1,
                rate: -0.2
            }
        );
    }

    #[test]
    fn incremental_plans_track_remaining_nodes() {
        let counts = plan_removals(&[0.3, 0.3, 0.3], 10, true).expect("plan fits");
        assert_eq!(counts, vec![3, 3, 3]);

        let err = plan_removals(&[0.5, 0.3, 0.3], 10, true).expect_err("plan overflows");
        assert_eq!(
            err,
            AttackError::OverRemoval {
                step: 2,
                requested: 3,
                available: 2
            }
        );
    }

    #[test]
    fn incremental_plans_may_not_empty_the_graph() {
        let err = plan_removals(&[0.25; 4], 8, true).expect_err("last step empties the graph");
        assert_eq!(
            err,
            AttackError::OverRemoval {
                step: 3,
                requested: 2,
                available: 2
            }
        );
        assert_eq!(
            plan_removals(&[0.25; 3], 8, true).expect("two nodes survive"),
            vec![2, 2, 2]
        );
    }

    #[test]
    fn zero_count_steps_are_allowed_on_tiny_graphs() {
        let counts = plan_removals(&[0.1, 0.1], 1, true).expect("nothing is removed");
        assert_eq!(counts, vec![0, 0]);
    }

    #[rstest]
    #[case::whole_graph(&[0.5, 1.0], 1, 10)]
    #[case::floors_to_the_whole_graph(&[1.05], 0, 10)]
    #[case::beyond_the_graph(&[1.5], 0, 15)]
    fn instantaneous_plans_keep_a_survivor(
        #[case] rates: &[f64],
        #[case] step: usize,
        #[case] requested: usize,
    ) {
        let err = plan_removals(rates, 10, false).expect_err("plan leaves no survivor");
        assert_eq!(
            err,
            AttackError::OverRemoval {
                step,
                requested,
                available: 10
            }
        );
    }

    #[test]
    fn instantaneous_plans_only_check_the_original_size() {
        let counts = plan_removals(&[0.5, 0.9, 0.9], 10, false).expect("plan fits");
        assert_eq!(counts, vec![5, 9, 9]);
    }

    #[test]
    fn rates_above_one_are_rejected_on_empty_graphs() {
        let err = plan_removals(&[1.2], 0, false).expect_err("rate above one");
        assert!(matches!(err, AttackError::OverRemoval { step: 0, .. }));
    }
}
