//! Order-based reducers.
//!
//! ## Purpose
//!
//! This module computes the order statistics of the window: the rank of the
//! most recent valid observation (absolute or normalized) and interpolated
//! quantiles. Both keep the valid observations in an order-statistics
//! multiset and answer queries in O(log W).
//!
//! ## Design notes
//!
//! * **Rank is strict**: The rank of `x` counts observations strictly smaller
//!   than `x`; ties do not raise the rank.
//! * **Rank follows the last valid observation**: When the newest observation
//!   is missing, the rank reported is that of the most recent valid one,
//!   re-evaluated against the current window contents.
//! * **Interpolated quantiles**: The level `q` maps to the fractional index
//!   `q * (n - 1)` over the sorted valid observations; the output
//!   interpolates linearly between the two nearest order statistics.
//!
//! ## Invariants
//!
//! * The multiset holds exactly the valid observations currently in the
//!   window.
//! * Whenever the window holds at least one valid observation, the tracked
//!   last observation is still among them.
//!
//! ## Non-goals
//!
//! * This module does not validate the quantile level; the validator rejects
//!   levels outside `[0, 1]` before the engine is built.

// Internal dependencies
use crate::primitives::ordered::OrderedMultiset;

// External dependencies
use num_traits::Float;

// ============================================================================
// Rank Tracker
// ============================================================================

/// Rank of the most recent valid observation within the window.
#[derive(Debug, Clone)]
pub struct RankTracker<T> {
    /// Sorted valid observations of the window.
    sorted: OrderedMultiset<T>,

    /// Most recently accepted valid observation, if any.
    last: Option<T>,
}

impl<T: Float> RankTracker<T> {
    /// Create an empty tracker sized for a window of `capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            sorted: OrderedMultiset::with_capacity(capacity),
            last: None,
        }
    }

    /// Accept a newly arrived valid observation.
    pub fn accept(&mut self, value: T) {
        self.sorted.insert(value);
        self.last = Some(value);
    }

    /// Retire a valid observation that left the window.
    pub fn retire(&mut self, value: T) {
        self.sorted.remove(value);
    }

    /// Rank of the last valid observation: the count of window observations
    /// strictly smaller than it.
    pub fn rank(&self) -> T {
        match self.last {
            Some(last) => T::from(self.sorted.rank(last)).unwrap(),
            None => T::nan(),
        }
    }

    /// Rank normalized by the number of valid observations, in `[0, 1)`.
    pub fn relative_rank(&self, n: usize) -> T {
        self.rank() / T::from(n).unwrap()
    }

    /// Forget all state.
    pub fn reset(&mut self) {
        self.sorted.clear();
        self.last = None;
    }
}

// ============================================================================
// Quantile Tracker
// ============================================================================

/// Interpolated quantile of the valid observations in the window.
#[derive(Debug, Clone)]
pub struct QuantileTracker<T> {
    /// Sorted valid observations of the window.
    sorted: OrderedMultiset<T>,

    /// Quantile level in `[0, 1]`.
    level: T,
}

impl<T: Float> QuantileTracker<T> {
    /// Create an empty tracker for `level`, sized for a window of `capacity`.
    pub fn new(level: T, capacity: usize) -> Self {
        Self {
            sorted: OrderedMultiset::with_capacity(capacity),
            level,
        }
    }

    /// Accept a newly arrived valid observation.
    pub fn accept(&mut self, value: T) {
        self.sorted.insert(value);
    }

    /// Retire a valid observation that left the window.
    pub fn retire(&mut self, value: T) {
        self.sorted.remove(value);
    }

    /// Quantile over `n` valid observations, interpolating linearly between
    /// the two nearest order statistics.
    pub fn quantile(&self, n: usize) -> T {
        if n == 0 {
            return T::nan();
        }
        let position = self.level * T::from(n - 1).unwrap();
        let lower = position.floor();
        let lower_idx = lower.to_usize().unwrap_or(0).min(n - 1);
        let upper_idx = (lower_idx + 1).min(n - 1);

        let low = self.sorted.select(lower_idx).unwrap_or_else(T::nan);
        if upper_idx == lower_idx {
            return low;
        }
        let high = self.sorted.select(upper_idx).unwrap_or_else(T::nan);
        let frac = position - lower;
        low + (high - low) * frac
    }

    /// Forget all state.
    pub fn reset(&mut self) {
        self.sorted.clear();
    }
}
