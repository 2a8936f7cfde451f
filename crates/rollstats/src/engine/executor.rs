//! Unified execution engine for rolling statistics.
//!
//! ## Purpose
//!
//! This module drives one lane of observations through the window buffer and
//! the selected reducer, producing one output per input position. It owns the
//! step protocol: evict, accept, then decide whether the output is defined.
//!
//! ## Design notes
//!
//! * **One pass**: Each observation is pushed exactly once; evictions come
//!   out of the buffer in arrival order, which the extremum reducers rely on.
//! * **Missing observations**: NaN inputs enter the buffer (they occupy a
//!   window slot) but never reach the reducer.
//! * **Reusable**: `reset` returns the engine to its freshly built state so
//!   one engine can process many lanes without reallocating.
//!
//! ## Key concepts
//!
//! * **Step protocol**: push → retire evicted valid observation → accept
//!   arriving valid observation → emit.
//! * **Output rule**: The output at a position is defined iff the window
//!   holds at least `min_periods` valid observations — and, under
//!   [`NanPolicy::Propagate`], no missing ones. Undefined outputs are NaN.
//!
//! ## Invariants
//!
//! * The reducer state always covers exactly the valid observations in the
//!   buffer.
//! * `step` emits exactly one output per input observation.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (see the validator).
//! * This module does not traverse multi-dimensional arrays.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::window::WindowBuffer;
use crate::reducers::reducer::{Reducer, StatReducer};
use crate::reducers::statistic::{NanPolicy, Statistic};

// ============================================================================
// Configuration
// ============================================================================

/// Validated configuration for a rolling computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingConfig<T> {
    /// Window length `W`.
    pub window: usize,

    /// Minimum number of valid observations for a defined output.
    pub min_periods: usize,

    /// Statistic produced at each position.
    pub statistic: Statistic<T>,

    /// How missing observations affect the output.
    pub nan_policy: NanPolicy,
}

// ============================================================================
// Rolling Engine
// ============================================================================

/// Stateful engine producing one output per observation of a lane.
#[derive(Debug, Clone)]
pub struct RollingEngine<T> {
    config: RollingConfig<T>,
    buffer: WindowBuffer<T>,
    reducer: StatReducer<T>,
}

impl<T: Float> RollingEngine<T> {
    /// Create an engine for a validated configuration.
    pub fn new(config: RollingConfig<T>) -> Self {
        Self {
            buffer: WindowBuffer::new(config.window),
            reducer: StatReducer::for_statistic(config.statistic, config.window),
            config,
        }
    }

    /// The configuration this engine was built from.
    #[inline]
    pub fn config(&self) -> &RollingConfig<T> {
        &self.config
    }

    /// Number of valid observations currently in the window.
    #[inline]
    pub fn valid_count(&self) -> usize {
        self.buffer.valid_count()
    }

    /// Advance the window by one observation and emit the output at this
    /// position.
    pub fn step(&mut self, value: T) -> T {
        if let Some(evicted) = self.buffer.push(value) {
            if !evicted.is_nan() {
                self.reducer.retire(evicted);
            }
        }
        if !value.is_nan() {
            self.reducer.accept(value);
        }
        self.emit()
    }

    /// Output for the current window state.
    fn emit(&self) -> T {
        if self.config.nan_policy == NanPolicy::Propagate && self.buffer.missing_count() > 0 {
            return T::nan();
        }
        let valid = self.buffer.valid_count();
        if valid < self.config.min_periods {
            return T::nan();
        }
        self.reducer.value(valid)
    }

    /// Return the engine to its freshly built state.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.reducer.reset();
    }

    // ========================================================================
    // Lane Execution
    // ========================================================================

    /// Process one lane in place: `lane[i]` becomes the output at position
    /// `i`. The engine is reset first, so one engine can process many lanes.
    pub fn run_lane_in_place(&mut self, lane: &mut [T]) {
        self.reset();
        for slot in lane.iter_mut() {
            *slot = self.step(*slot);
        }
    }

    /// Process one lane into a fresh vector, leaving the input untouched.
    pub fn run_lane(&mut self, lane: &[T]) -> Vec<T> {
        self.reset();
        lane.iter().map(|&value| self.step(value)).collect()
    }
}
