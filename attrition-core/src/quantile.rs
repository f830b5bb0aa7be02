//! Quantile summaries of per-step metric samples.
//!
//! A sample is reduced to `(q25, mean, q75)`. The quartiles come from linear
//! interpolation between order statistics with configurable plotting
//! positions; the middle slot always holds the arithmetic mean, never the
//! median.

use std::fmt;

use crate::{Result, error::AttackError};

/// Identifies which per-step sample a summary or error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Metric {
    /// Hop counts between every ordered pair of mutually reachable nodes.
    ShortestPaths,
    /// Eccentricity of each node in the largest component.
    Eccentricities,
}

impl Metric {
    /// Returns the snake-case name used in logs and rendered output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShortestPaths => "shortest_paths",
            Self::Eccentricities => "eccentricities",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(q25, mean, q75)` summary of one sample.
///
/// # Examples
/// ```
/// use attrition_core::{Metric, QuantileEstimator};
///
/// let triple = QuantileEstimator::default()
///     .summarize_metric(Metric::ShortestPaths, &[1.0, 2.0, 3.0, 4.0])?;
/// assert_eq!(triple.mean, 2.5);
/// assert!(triple.q25 <= triple.q75);
/// # Ok::<(), attrition_core::AttackError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuantileTriple {
    /// 25th percentile.
    pub q25: f64,
    /// Arithmetic mean of the sample.
    pub mean: f64,
    /// 75th percentile.
    pub q75: f64,
}

impl QuantileTriple {
    /// Triple recorded in place of a summary when a sample is empty and the
    /// run is configured to continue.
    pub const NAN: Self = Self {
        q25: f64::NAN,
        mean: f64::NAN,
        q75: f64::NAN,
    };

    /// Returns the triple as `[q25, mean, q75]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.q25, self.mean, self.q75]
    }

    /// Returns whether every slot is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.to_array().iter().all(|value| value.is_nan())
    }
}

/// Quantile estimator parameterised by plotting positions.
///
/// For a sorted sample `x` of length `n` and probability `p`, the estimate is
/// `(1 - g) * x[k - 1] + g * x[k]` where `m = alphap + p * (1 - alphap -
/// betap)`, `a = n * p + m`, `k = floor(clamp(a, 1, n - 1))` and `g =
/// clamp(a - k, 0, 1)`.
///
/// The default `(0.4, 0.4)` is the Cunnane estimator, approximately
/// quantile-unbiased; [`QuantileEstimator::LINEAR`] yields the familiar
/// `(1.0, 1.0)` estimator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuantileEstimator {
    alphap: f64,
    betap: f64,
}

impl Default for QuantileEstimator {
    fn default() -> Self {
        Self::CUNNANE
    }
}

impl QuantileEstimator {
    /// Cunnane plotting positions `(0.4, 0.4)`.
    pub const CUNNANE: Self = Self {
        alphap: 0.4,
        betap: 0.4,
    };

    /// Linear interpolation of the empirical CDF, `(1.0, 1.0)`.
    pub const LINEAR: Self = Self {
        alphap: 1.0,
        betap: 1.0,
    };

    /// Creates an estimator with custom plotting positions.
    #[must_use]
    pub const fn new(alphap: f64, betap: f64) -> Self {
        Self { alphap, betap }
    }

    /// Returns the `alphap` plotting position.
    #[must_use]
    pub const fn alphap(&self) -> f64 {
        self.alphap
    }

    /// Returns the `betap` plotting position.
    #[must_use]
    pub const fn betap(&self) -> f64 {
        self.betap
    }

    /// Estimates the `p`-quantile of an ascending sample; NaN when empty.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "plotting positions interpolate between order statistics in f64"
    )]
    fn quantile_sorted(&self, sorted: &[f64], p: f64) -> f64 {
        let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
            return f64::NAN;
        };
        if sorted.len() == 1 {
            return first;
        }
        let n = sorted.len() as f64;
        let m = self.alphap + p * (1.0 - self.alphap - self.betap);
        let aleph = n * p + m;
        let k = aleph.clamp(1.0, n - 1.0).floor();
        let gamma = (aleph - k).clamp(0.0, 1.0);
        let upper = k as usize;
        let below = sorted.get(upper.saturating_sub(1)).copied().unwrap_or(first);
        let above = sorted.get(upper).copied().unwrap_or(last);
        (1.0 - gamma) * below + gamma * above
    }

    /// Reduces `sample` to `(q25, mean, q75)`, attributing failures to `metric`.
    ///
    /// This is the only entry point for real-valued samples, so every
    /// [`AttackError::EmptySample`] names the metric that produced it.
    ///
    /// # Errors
    /// Returns [`AttackError::EmptySample`] when `sample` is empty.
    ///
    /// # Examples
    /// ```
    /// use attrition_core::{AttackError, Metric, QuantileEstimator};
    ///
    /// let err = QuantileEstimator::default()
    ///     .summarize_metric(Metric::Eccentricities, &[])
    ///     .unwrap_err();
    /// assert_eq!(err, AttackError::EmptySample { metric: Metric::Eccentricities });
    /// ```
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the mean is a float quotient over the sample length"
    )]
    pub fn summarize_metric(&self, metric: Metric, sample: &[f64]) -> Result<QuantileTriple> {
        if sample.is_empty() {
            return Err(AttackError::EmptySample { metric });
        }
        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mean = sample.iter().sum::<f64>() / sample.len() as f64;
        Ok(QuantileTriple {
            q25: self.quantile_sorted(&sorted, 0.25),
            mean,
            q75: self.quantile_sorted(&sorted, 0.75),
        })
    }

    /// Convenience wrapper over integer samples such as hop counts.
    ///
    /// # Errors
    /// Returns [`AttackError::EmptySample`] when `sample` is empty.
    pub fn summarize_counts(&self, metric: Metric, sample: &[u32]) -> Result<QuantileTriple> {
        let values: Vec<f64> = sample.iter().copied().map(f64::from).collect();
        self.summarize_metric(metric, &values)
    }
}
