//! Reducer trait and statistic dispatch.
//!
//! ## Purpose
//!
//! This module defines the protocol every incremental accumulator follows and
//! the dispatching reducer the engine drives: one `accept` per arriving valid
//! observation, one `retire` per evicted valid observation, and a `value`
//! query whenever the engine decides an output is defined.
//!
//! ## Design notes
//!
//! * **Valid observations only**: The engine filters missing observations out
//!   before calling `accept`/`retire`; reducers never see NaN inputs.
//! * **Enum dispatch**: [`StatReducer`] matches on its variant instead of
//!   boxing a trait object, keeping the per-lane state `Clone` and
//!   allocation-free to branch on.
//! * **Count from the buffer**: `value` takes the valid count as an argument
//!   so reducers do not track it redundantly.
//!
//! ## Invariants
//!
//! * Every `retire(v)` matches an earlier `accept(v)` of the same value.
//! * `value(n)` is only meaningful when `n` equals the number of accepted,
//!   not-yet-retired observations and `n >= 1`.
//!
//! ## Non-goals
//!
//! * This module does not enforce `min_periods` or the NaN policy.

// Internal dependencies
use crate::reducers::extrema::ExtremumTracker;
use crate::reducers::moments::MomentAccumulator;
use crate::reducers::order::{QuantileTracker, RankTracker};
use crate::reducers::statistic::Statistic;

// External dependencies
use num_traits::Float;

// ============================================================================
// Reducer Trait
// ============================================================================

/// Incremental accumulator over the valid observations of a window.
pub trait Reducer<T: Float> {
    /// Accept a newly arrived valid observation.
    fn accept(&mut self, value: T);

    /// Retire a valid observation that left the window.
    fn retire(&mut self, value: T);

    /// Current statistic over `valid` observations.
    fn value(&self, valid: usize) -> T;

    /// Forget all state, as if freshly constructed.
    fn reset(&mut self);
}

// ============================================================================
// Statistic Dispatch
// ============================================================================

/// Reducer for a selected [`Statistic`], dispatching to the matching
/// accumulator.
#[derive(Debug, Clone)]
pub enum StatReducer<T> {
    /// Running sum.
    Sum(MomentAccumulator<T>),
    /// Running mean.
    Mean(MomentAccumulator<T>),
    /// Running population variance.
    Variance(MomentAccumulator<T>),
    /// Running population standard deviation.
    StdDev(MomentAccumulator<T>),
    /// Running skewness.
    Skewness(MomentAccumulator<T>),
    /// Z-score of the latest valid observation.
    ZScore(MomentAccumulator<T>),
    /// Running minimum.
    Min(ExtremumTracker<T>),
    /// Running maximum.
    Max(ExtremumTracker<T>),
    /// Rank of the latest valid observation.
    Rank(RankTracker<T>),
    /// Normalized rank of the latest valid observation.
    RelativeRank(RankTracker<T>),
    /// Interpolated quantile.
    Quantile(QuantileTracker<T>),
}

impl<T: Float> StatReducer<T> {
    /// Instantiate the reducer for `statistic`, sized for a window of
    /// `window` observations.
    pub fn for_statistic(statistic: Statistic<T>, window: usize) -> Self {
        match statistic {
            Statistic::Sum => Self::Sum(MomentAccumulator::new()),
            Statistic::Mean => Self::Mean(MomentAccumulator::new()),
            Statistic::Variance => Self::Variance(MomentAccumulator::new()),
            Statistic::StdDev => Self::StdDev(MomentAccumulator::new()),
            Statistic::Skewness => Self::Skewness(MomentAccumulator::new()),
            Statistic::ZScore => Self::ZScore(MomentAccumulator::new()),
            Statistic::Min => Self::Min(ExtremumTracker::min()),
            Statistic::Max => Self::Max(ExtremumTracker::max()),
            Statistic::Rank => Self::Rank(RankTracker::new(window)),
            Statistic::RelativeRank => Self::RelativeRank(RankTracker::new(window)),
            Statistic::Quantile(q) => Self::Quantile(QuantileTracker::new(q, window)),
        }
    }
}

impl<T: Float> Reducer<T> for StatReducer<T> {
    fn accept(&mut self, value: T) {
        match self {
            Self::Sum(acc)
            | Self::Mean(acc)
            | Self::Variance(acc)
            | Self::StdDev(acc)
            | Self::Skewness(acc)
            | Self::ZScore(acc) => acc.accept(value),
            Self::Min(tracker) | Self::Max(tracker) => tracker.accept(value),
            Self::Rank(tracker) | Self::RelativeRank(tracker) => tracker.accept(value),
            Self::Quantile(tracker) => tracker.accept(value),
        }
    }

    fn retire(&mut self, value: T) {
        match self {
            Self::Sum(acc)
            | Self::Mean(acc)
            | Self::Variance(acc)
            | Self::StdDev(acc)
            | Self::Skewness(acc)
            | Self::ZScore(acc) => acc.retire(value),
            Self::Min(tracker) | Self::Max(tracker) => tracker.retire(value),
            Self::Rank(tracker) | Self::RelativeRank(tracker) => tracker.retire(value),
            Self::Quantile(tracker) => tracker.retire(value),
        }
    }

    fn value(&self, valid: usize) -> T {
        match self {
            Self::Sum(acc) => acc.sum(),
            Self::Mean(acc) => acc.mean(valid),
            Self::Variance(acc) => acc.variance(valid),
            Self::StdDev(acc) => acc.stddev(valid),
            Self::Skewness(acc) => acc.skewness(valid),
            Self::ZScore(acc) => acc.zscore(valid),
            Self::Min(tracker) | Self::Max(tracker) => tracker.value(),
            Self::Rank(tracker) => tracker.rank(),
            Self::RelativeRank(tracker) => tracker.relative_rank(valid),
            Self::Quantile(tracker) => tracker.quantile(valid),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Sum(acc)
            | Self::Mean(acc)
            | Self::Variance(acc)
            | Self::StdDev(acc)
            | Self::Skewness(acc)
            | Self::ZScore(acc) => acc.reset(),
            Self::Min(tracker) | Self::Max(tracker) => tracker.reset(),
            Self::Rank(tracker) | Self::RelativeRank(tracker) => tracker.reset(),
            Self::Quantile(tracker) => tracker.reset(),
        }
    }
}
