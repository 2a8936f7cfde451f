//! Batch adapter for complete lanes.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter for rolling statistics.
//! It processes a complete lane held in memory in a single pass, producing
//! one output per input observation.
//!
//! ## Design notes
//!
//! * **Processing**: Drives the engine over the lane in one pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **Deferred Validation**: Parameters are validated when `build()` is
//!   called, including errors carried over from the generic builder.
//!
//! ## Invariants
//!
//! * The output has exactly one entry per input observation.
//! * `min_periods` defaults to the window length when not set.
//!
//! ## Non-goals
//!
//! * This adapter does not handle incremental updates (use the online adapter).
//! * This adapter does not traverse multi-dimensional arrays.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{RollingConfig, RollingEngine};
use crate::engine::output::RollResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::RollError;
use crate::reducers::statistic::{NanPolicy, Statistic};

// ============================================================================
// Batch Rolling Builder
// ============================================================================

/// Builder for the batch rolling processor.
#[derive(Debug, Clone)]
pub struct BatchRollingBuilder<T: Float> {
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

impl<T: Float> Default for BatchRollingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchRollingBuilder<T> {
    /// Create a new batch rolling builder with default parameters.
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

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchRolling<T>, RollError> {
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

        Ok(BatchRolling {
            config: RollingConfig {
                window: self.window,
                min_periods,
                statistic: self.statistic,
                nan_policy: self.nan_policy,
            },
        })
    }
}

// ============================================================================
// Batch Rolling Processor
// ============================================================================

/// Batch rolling processor.
pub struct BatchRolling<T: Float> {
    config: RollingConfig<T>,
}

impl<T: Float> BatchRolling<T> {
    /// Compute the rolling statistic over a complete lane.
    ///
    /// An empty lane produces an empty output.
    pub fn apply(self, data: &[T]) -> Result<RollResult<T>, RollError> {
        let mut engine = RollingEngine::new(self.config);
        let values = engine.run_lane(data);

        Ok(RollResult {
            values,
            window: self.config.window,
            min_periods: self.config.min_periods,
            statistic: self.config.statistic,
            nan_policy: self.config.nan_policy,
        })
    }
}
