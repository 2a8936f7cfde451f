//! Sliding-window buffer for rolling statistics.
//!
//! ## Purpose
//!
//! This module provides the fixed-capacity buffer that tracks the most recent
//! `W` observations of a lane in arrival order. It decides which observation
//! is evicted as the window advances and maintains O(1) counts of valid
//! (non-NaN) and missing observations.
//!
//! ## Design notes
//!
//! * **Ring storage**: A `Vec` reused as a circular buffer; no per-step allocation.
//! * **Raw observations**: The buffer stores values as they arrived, missing ones
//!   included. Reducer semantics live elsewhere.
//! * **Validity**: An observation is missing iff it is NaN; infinities are valid.
//!
//! ## Invariants
//!
//! * `len() == min(capacity, observations pushed since last clear)`.
//! * `valid_count() + missing_count() == len()`.
//! * Once full, every `push` evicts exactly the oldest observation.
//!
//! ## Non-goals
//!
//! * This module does not compute statistics.
//! * This module does not decide whether an output is defined (`min_periods`
//!   is enforced by the engine).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem::replace;
use num_traits::Float;

// ============================================================================
// Window Buffer
// ============================================================================

/// Fixed-capacity sliding buffer over one lane's observations.
#[derive(Debug, Clone)]
pub struct WindowBuffer<T> {
    /// Stored observations, oldest at `head` once the buffer is full.
    slots: Vec<T>,

    /// Index of the oldest observation while the buffer is full.
    head: usize,

    /// Maximum number of observations retained.
    capacity: usize,

    /// Number of valid (non-NaN) observations currently held.
    valid: usize,

    /// Number of missing (NaN) observations currently held.
    missing: usize,
}

impl<T: Float> WindowBuffer<T> {
    /// Create a buffer holding at most `capacity` observations.
    ///
    /// `capacity` must be at least 1; the engine validates this before
    /// construction.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1, "WindowBuffer: capacity must be at least 1");
        Self {
            slots: Vec::with_capacity(capacity),
            head: 0,
            capacity,
            valid: 0,
            missing: 0,
        }
    }

    /// Push the next observation, returning the evicted one once full.
    ///
    /// While the buffer is filling, nothing is evicted and `None` is returned.
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.slots.len() == self.capacity {
            let old = replace(&mut self.slots[self.head], value);
            self.head = (self.head + 1) % self.capacity;
            Some(old)
        } else {
            self.slots.push(value);
            None
        };

        if value.is_nan() {
            self.missing += 1;
        } else {
            self.valid += 1;
        }
        if let Some(old) = evicted {
            if old.is_nan() {
                self.missing -= 1;
            } else {
                self.valid -= 1;
            }
        }

        evicted
    }

    /// Number of valid (non-NaN) observations currently held.
    #[inline]
    pub fn valid_count(&self) -> usize {
        self.valid
    }

    /// Number of missing (NaN) observations currently held.
    #[inline]
    pub fn missing_count(&self) -> usize {
        self.missing
    }

    /// Total number of observations currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check whether the buffer holds no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check whether the buffer has reached capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Configured capacity `W`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all observations, keeping the allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
        self.valid = 0;
        self.missing = 0;
    }
}
