//! Extremum reducers.
//!
//! ## Purpose
//!
//! This module tracks the running minimum or maximum of the valid
//! observations in the window using a monotonic deque, in amortized O(1) per
//! observation.
//!
//! ## Design notes
//!
//! * **Monotonic deque**: Arriving observations pop strictly worse candidates
//!   off the back; the front is always the current extremum. Equal candidates
//!   are kept, so each stored value matches exactly one later eviction.
//! * **Eviction by value**: The engine retires observations in arrival order,
//!   so an evicted observation that is still a candidate must be at the
//!   front.
//!
//! ## Invariants
//!
//! * The deque holds a subsequence of the window's valid observations,
//!   monotone from best (front) to worst (back).
//!
//! ## Non-goals
//!
//! * This module does not handle missing observations; the engine filters
//!   them out before calling in.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(feature = "std")]
use std::collections::VecDeque;

// External dependencies
use num_traits::Float;

// ============================================================================
// Extremum Tracker
// ============================================================================

/// Monotonic-deque tracker for the window minimum or maximum.
#[derive(Debug, Clone)]
pub struct ExtremumTracker<T> {
    /// Extremum candidates, best at the front.
    deque: VecDeque<T>,

    /// `true` tracks the maximum, `false` the minimum.
    maximum: bool,
}

impl<T: Float> ExtremumTracker<T> {
    /// Create a tracker for the window maximum.
    pub fn max() -> Self {
        Self {
            deque: VecDeque::new(),
            maximum: true,
        }
    }

    /// Create a tracker for the window minimum.
    pub fn min() -> Self {
        Self {
            deque: VecDeque::new(),
            maximum: false,
        }
    }

    /// Accept a newly arrived valid observation.
    pub fn accept(&mut self, value: T) {
        while let Some(&back) = self.deque.back() {
            let worse = if self.maximum {
                back < value
            } else {
                back > value
            };
            if worse {
                self.deque.pop_back();
            } else {
                break;
            }
        }
        self.deque.push_back(value);
    }

    /// Retire a valid observation that left the window.
    pub fn retire(&mut self, value: T) {
        if let Some(&front) = self.deque.front() {
            if front == value {
                self.deque.pop_front();
            }
        }
    }

    /// Current extremum, or NaN if no valid observation is held.
    #[inline]
    pub fn value(&self) -> T {
        match self.deque.front() {
            Some(&front) => front,
            None => T::nan(),
        }
    }

    /// Forget all state.
    pub fn reset(&mut self) {
        self.deque.clear();
    }
}
