//! Moment-based reducers.
//!
//! ## Purpose
//!
//! This module maintains the running power sums of the valid observations in
//! the window and derives the moment statistics from them: sum, mean,
//! population variance and standard deviation, skewness, and the z-score of
//! the most recent valid observation.
//!
//! ## Design notes
//!
//! * **One accumulator**: All moment statistics share the same state (three
//!   power sums plus the last accepted observation), so the engine carries a
//!   single struct regardless of which moment statistic was selected.
//! * **Population moments**: Variance uses the `n` denominator, not `n - 1`.
//! * **Degenerate windows**: Skewness and z-score of a near-constant window
//!   (variance below [`VARIANCE_FLOOR`]) are NaN rather than an arbitrary
//!   large or infinite value.
//!
//! ## Invariants
//!
//! * The power sums cover exactly the valid observations currently in the
//!   window: every `accept` is matched by a later `retire` of the same value.
//!
//! ## Non-goals
//!
//! * This module does not decide whether an output is defined; the engine
//!   applies `min_periods` and the NaN policy first.

// External dependencies
use num_traits::Float;

/// Variance below this threshold makes skewness and z-score undefined.
pub const VARIANCE_FLOOR: f64 = 1e-16;

// ============================================================================
// Moment Accumulator
// ============================================================================

/// Running power sums over the valid observations of the window.
#[derive(Debug, Clone)]
pub struct MomentAccumulator<T> {
    /// Σx over valid observations.
    sum: T,

    /// Σx² over valid observations.
    sum_sq: T,

    /// Σx³ over valid observations.
    sum_cube: T,

    /// Most recently accepted valid observation, if any.
    last: Option<T>,
}

impl<T: Float> Default for MomentAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> MomentAccumulator<T> {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            sum: T::zero(),
            sum_sq: T::zero(),
            sum_cube: T::zero(),
            last: None,
        }
    }

    /// Fold a newly arrived valid observation into the sums.
    #[inline]
    pub fn accept(&mut self, value: T) {
        self.sum = self.sum + value;
        self.sum_sq = self.sum_sq + value * value;
        self.sum_cube = self.sum_cube + value * value * value;
        self.last = Some(value);
    }

    /// Remove an evicted valid observation from the sums.
    #[inline]
    pub fn retire(&mut self, value: T) {
        self.sum = self.sum - value;
        self.sum_sq = self.sum_sq - value * value;
        self.sum_cube = self.sum_cube - value * value * value;
    }

    /// Forget all state.
    pub fn reset(&mut self) {
        self.sum = T::zero();
        self.sum_sq = T::zero();
        self.sum_cube = T::zero();
        self.last = None;
    }

    // ========================================================================
    // Derived Statistics
    // ========================================================================

    /// Sum of the valid observations.
    #[inline]
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Mean over `n` valid observations.
    #[inline]
    pub fn mean(&self, n: usize) -> T {
        self.sum / T::from(n).unwrap()
    }

    /// Population variance over `n` valid observations.
    ///
    /// Clamped at zero: cancellation in `Σx²/n − mean²` can otherwise yield a
    /// tiny negative value for near-constant windows.
    #[inline]
    pub fn variance(&self, n: usize) -> T {
        let n = T::from(n).unwrap();
        let mean = self.sum / n;
        (self.sum_sq / n - mean * mean).max(T::zero())
    }

    /// Population standard deviation over `n` valid observations.
    #[inline]
    pub fn stddev(&self, n: usize) -> T {
        self.variance(n).sqrt()
    }

    /// Skewness over `n` valid observations.
    ///
    /// NaN for near-constant windows.
    pub fn skewness(&self, n: usize) -> T {
        let nf = T::from(n).unwrap();
        let mean = self.sum / nf;
        let var = self.variance(n);
        if var < T::from(VARIANCE_FLOOR).unwrap() {
            return T::nan();
        }
        // Third central moment from the raw power sums.
        let m3 = self.sum_cube / nf - T::from(3.0).unwrap() * mean * var - mean * mean * mean;
        m3 / var.powf(T::from(1.5).unwrap())
    }

    /// Z-score of the most recent valid observation over `n` valid
    /// observations.
    ///
    /// NaN for near-constant windows.
    pub fn zscore(&self, n: usize) -> T {
        let last = match self.last {
            Some(last) => last,
            None => return T::nan(),
        };
        let var = self.variance(n);
        if var < T::from(VARIANCE_FLOOR).unwrap() {
            return T::nan();
        }
        (last - self.mean(n)) / var.sqrt()
    }
}
