//! Axis-oriented batch adapter for rolling statistics.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter for rolling statistics
//! over N-dimensional arrays. It rolls along one chosen axis, treating every
//! 1-D lane parallel to that axis as an independent sequence, with optional
//! multi-threaded lane execution.
//!
//! ## Design notes
//!
//! * **Delegation**: Parameter validation and the step protocol live in the
//!   `rollstats` crate; this adapter adds axis selection and traversal.
//! * **Parallelism**: Adds parallel lane execution via `rayon` (fastRollstats
//!   extension), on by default.
//! * **Generics**: Generic over `Float` types and array dimensionality.
//!
//! ## Key concepts
//!
//! * **Lanes**: A lane is a 1-D slice of the array parallel to the traversal
//!   axis; a 2-D array rolled along axis 0 has one lane per column.
//! * **Builder Pattern**: Fluent API continuing the base builder chain.
//!
//! ## Invariants
//!
//! * The output array has exactly the shape of the input.
//! * The traversal axis must name an existing dimension of the data.
//! * Parallel and sequential execution produce identical outputs.
//!
//! ## Non-goals
//!
//! * This adapter does not handle incremental updates (use the online adapter).
//! * This adapter does not broadcast or reshape input arrays.

// External dependencies
use ndarray::{Array, ArrayBase, Axis, Data, DataMut, Dimension};
use num_traits::Float;

// Export dependencies from rollstats crate
use rollstats::internals::adapters::batch::BatchRollingBuilder;
use rollstats::internals::engine::executor::RollingConfig;
use rollstats::internals::engine::validator::Validator;
use rollstats::internals::primitives::errors::RollError;
use rollstats::internals::reducers::statistic::{NanPolicy, Statistic};

// Internal dependencies
use crate::engine::executor::roll_axis_in_place;

// ============================================================================
// Extended Batch Rolling Builder
// ============================================================================

/// Builder for the axis-oriented batch rolling processor.
#[derive(Debug, Clone)]
pub struct AxisRollingBuilder<T: Float> {
    /// Base builder from the rollstats crate
    pub base: BatchRollingBuilder<T>,

    /// Axis to roll along (default: 0).
    pub axis: usize,

    /// Whether lanes are processed in parallel (default: true).
    pub parallel: bool,
}

impl<T: Float> Default for AxisRollingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> AxisRollingBuilder<T> {
    /// Create a new axis rolling builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the rollstats `BatchRollingBuilder`
    /// * axis: 0
    /// * parallel: true (fastRollstats extension)
    fn new() -> Self {
        Self {
            base: BatchRollingBuilder::default(),
            axis: 0,
            parallel: true,
        }
    }

    /// Set the axis to roll along.
    pub fn axis(mut self, axis: usize) -> Self {
        self.axis = axis;
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the window length.
    pub fn window(mut self, window: usize) -> Self {
        self.base = self.base.window(window);
        self
    }

    /// Set the minimum valid observations for a defined output.
    pub fn min_periods(mut self, min_periods: usize) -> Self {
        self.base = self.base.min_periods(min_periods);
        self
    }

    /// Set the statistic to compute.
    pub fn statistic(mut self, statistic: Statistic<T>) -> Self {
        self.base = self.base.statistic(statistic);
        self
    }

    /// Set the missing-observation policy.
    pub fn nan_policy(mut self, policy: NanPolicy) -> Self {
        self.base = self.base.nan_policy(policy);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the axis rolling processor.
    pub fn build(self) -> Result<AxisRolling<T>, RollError> {
        // Check for deferred errors from adapter conversion
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        // Validate by building the base processor; this reuses the validation
        // logic centralized in the rollstats crate
        let window = self.base.window;
        let min_periods = self.base.min_periods.unwrap_or(window);
        let statistic = self.base.statistic;
        let nan_policy = self.base.nan_policy;
        let _ = self.base.build()?;

        Ok(AxisRolling {
            config: RollingConfig {
                window,
                min_periods,
                statistic,
                nan_policy,
            },
            axis: self.axis,
            parallel: self.parallel,
        })
    }
}

// ============================================================================
// Extended Batch Rolling Processor
// ============================================================================

/// Axis-oriented batch rolling processor with parallel support.
pub struct AxisRolling<T: Float> {
    config: RollingConfig<T>,
    axis: usize,
    parallel: bool,
}

impl<T: Float + Send + Sync> AxisRolling<T> {
    /// Compute the rolling statistic along the configured axis, returning a
    /// new array of the same shape.
    pub fn apply<S, D>(&self, data: &ArrayBase<S, D>) -> Result<Array<T, D>, RollError>
    where
        S: Data<Elem = T>,
        D: Dimension,
    {
        Validator::validate_axis(self.axis, data.ndim())?;

        let mut output = data.to_owned();
        roll_axis_in_place(
            &mut output.view_mut(),
            Axis(self.axis),
            self.config,
            self.parallel,
        );
        Ok(output)
    }

    /// Compute the rolling statistic along the configured axis, overwriting
    /// the input array.
    pub fn apply_in_place<S, D>(&self, data: &mut ArrayBase<S, D>) -> Result<(), RollError>
    where
        S: DataMut<Elem = T>,
        D: Dimension,
    {
        Validator::validate_axis(self.axis, data.ndim())?;

        roll_axis_in_place(
            &mut data.view_mut(),
            Axis(self.axis),
            self.config,
            self.parallel,
        );
        Ok(())
    }
}
