//! Statistic selection for rolling computations.
//!
//! ## Purpose
//!
//! This module defines the set of statistics a rolling computation can
//! produce. The variant chosen in the builder decides which reducer the
//! engine instantiates.
//!
//! ## Key concepts
//!
//! * **Moment statistics** (`Sum`, `Mean`, `Variance`, `StdDev`, `Skewness`,
//!   `ZScore`) are computed from running power sums in O(1) per observation.
//! * **Extremum statistics** (`Min`, `Max`) use a monotonic deque.
//! * **Order statistics** (`Rank`, `RelativeRank`, `Quantile`) use an
//!   order-statistics tree in O(log W) per observation.
//!
//! ## Invariants
//!
//! * `Quantile(q)` requires a finite level `q` in `[0, 1]`; the validator
//!   rejects anything else before the engine is built.
//!
//! ## Non-goals
//!
//! * This module does not implement the statistics themselves.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Statistic
// ============================================================================

/// Statistic produced at each window position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statistic<T> {
    /// Sum of the valid observations.
    Sum,

    /// Arithmetic mean of the valid observations.
    Mean,

    /// Population variance of the valid observations.
    Variance,

    /// Population standard deviation of the valid observations.
    StdDev,

    /// Skewness of the valid observations (third standardized moment).
    ///
    /// Degenerate windows (variance below `1e-16`) produce NaN.
    Skewness,

    /// Z-score of the most recent valid observation against the window.
    ///
    /// Degenerate windows (variance below `1e-16`) produce NaN.
    ZScore,

    /// Smallest valid observation.
    Min,

    /// Largest valid observation.
    Max,

    /// Number of valid observations strictly smaller than the most recent
    /// valid observation.
    Rank,

    /// `Rank` divided by the number of valid observations, in `[0, 1)`.
    RelativeRank,

    /// Quantile at level `q` with linear interpolation between the two
    /// nearest order statistics.
    Quantile(T),
}

// ============================================================================
// NaN Policy
// ============================================================================

/// How missing (NaN) observations inside the window affect the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NanPolicy {
    /// Missing observations are ignored; the statistic is computed over the
    /// valid ones, subject to `min_periods`.
    #[default]
    Skip,

    /// Any missing observation in the window makes the output NaN.
    Propagate,
}

// ============================================================================
// Display Implementations
// ============================================================================

impl<T: Float + Display> Display for Statistic<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Sum => write!(f, "sum"),
            Self::Mean => write!(f, "mean"),
            Self::Variance => write!(f, "variance"),
            Self::StdDev => write!(f, "stddev"),
            Self::Skewness => write!(f, "skewness"),
            Self::ZScore => write!(f, "zscore"),
            Self::Min => write!(f, "min"),
            Self::Max => write!(f, "max"),
            Self::Rank => write!(f, "rank"),
            Self::RelativeRank => write!(f, "relative_rank"),
            Self::Quantile(q) => write!(f, "quantile({q})"),
        }
    }
}

impl Display for NanPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Propagate => write!(f, "propagate"),
        }
    }
}
