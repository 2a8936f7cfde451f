//! Online adapter for real-time data streams.
//!
//! ## Purpose
//!
//! This module provides the online execution adapter for rolling statistics.
//! It accepts observations one at a time and emits the statistic for the
//! window ending at each observation, making it suitable for live feeds.
//!
//! ## Design notes
//!
//! * **Incremental**: Each update costs O(1) or O(log W), never a window
//!   recomputation.
//! * **Stateful**: The processor owns the engine and carries window state
//!   between updates.
//! * **Equivalent**: Feeding a lane observation by observation produces
//!   exactly the batch output for that lane.
//!
//! ## Key concepts
//!
//! * **Update Protocol**: One output per `update`, NaN while the window has
//!   fewer than `min_periods` valid observations.
//! * **Reset**: Returns the processor to its freshly built state, e.g. at a
//!   stream boundary.
//!
//! ## Invariants
//!
//! * `update` emits exactly one output per observation.
//!
//! ## Non-goals
//!
//! * This adapter does not buffer whole lanes (use the batch adapter).
//! * This adapter does not handle out-of-order observations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{RollingConfig, RollingEngine};
use crate::engine::validator::Validator;
use crate::primitives::errors::RollError;
use crate::reducers::statistic::{NanPolicy, Statistic};

// ============================================================================
// Online Rolling Builder
// ============================================================================

/// Builder for the online rolling processor.
#[derive(Debug, Clone)]
pub struct OnlineRollingBuilder<T: Float> {
    /// Window length `W`.
    pub window: usize,

    /// Minimum valid observations for a defined output (defaults to `window`).
    pub min_periods: Option<usize>,

    /// Statistic to compute.
    pub statistic: Statistic<T>,

    /// Missing-observation policy.
    pub nan_policy: NanPolicy,

    /// Deferred error from adapter conversion.
    pub deferred_error: Option<RollError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for OnlineRollingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> OnlineRollingBuilder<T> {
    /// Create a new online rolling builder with default parameters.
    fn new() -> Self {
        Self {
            window: 1,
            min_periods: None,
            statistic: Statistic::Mean,
            nan_policy: NanPolicy::default(),
            deferred_error: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the window length.
    pub fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Set the minimum valid observations for a defined output.
    pub fn min_periods(mut self, min_periods: usize) -> Self {
        self.min_periods = Some(min_periods);
        self
    }

    /// Set the statistic to compute.
    pub fn statistic(mut self, statistic: Statistic<T>) -> Self {
        self.statistic = statistic;
        self
    }

    /// Set the missing-observation policy.
    pub fn nan_policy(mut self, policy: NanPolicy) -> Self {
        self.nan_policy = policy;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the online processor.
    pub fn build(self) -> Result<OnlineRolling<T>, RollError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate window and min_periods
        Validator::validate_window(self.window)?;
        let min_periods = self.min_periods.unwrap_or(self.window);
        Validator::validate_min_periods(min_periods, self.window)?;

        // Validate the statistic selection
        Validator::validate_statistic(&self.statistic)?;

        Ok(OnlineRolling {
            engine: RollingEngine::new(RollingConfig {
                window: self.window,
                min_periods,
                statistic: self.statistic,
                nan_policy: self.nan_policy,
            }),
        })
    }
}

// ============================================================================
// Online Rolling Processor
// ============================================================================

/// Online rolling processor.
#[derive(Debug, Clone)]
pub struct OnlineRolling<T: Float> {
    engine: RollingEngine<T>,
}

impl<T: Float> OnlineRolling<T> {
    /// Feed one observation and get the statistic for the window ending at
    /// it.
    pub fn update(&mut self, value: T) -> T {
        self.engine.step(value)
    }

    /// Feed a batch of observations, getting one output per observation.
    pub fn update_many(&mut self, values: &[T]) -> Vec<T> {
        values.iter().map(|&value| self.update(value)).collect()
    }

    /// Number of valid observations currently in the window.
    pub fn valid_count(&self) -> usize {
        self.engine.valid_count()
    }

    /// Return the processor to its freshly built state.
    pub fn reset(&mut self) {
        self.engine.reset();
    }
}
