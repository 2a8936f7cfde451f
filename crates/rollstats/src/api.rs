//! High-level API for rolling statistics.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for rolling
//! computations. It implements a fluent builder pattern for configuring the
//! window and statistic and choosing an execution adapter (Batch or Online).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch and Online modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RollingBuilder`] via `Rolling::new()`.
//! 2. Chain configuration methods (`.window()`, `.statistic()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.
//! 4. Call `.build()` to validate and obtain the processor.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchRollingBuilder;
use crate::adapters::online::OnlineRollingBuilder;

// Publicly re-exported types
pub use crate::adapters::batch::BatchRolling;
pub use crate::adapters::online::OnlineRolling;
pub use crate::engine::output::RollResult;
pub use crate::primitives::errors::RollError;
pub use crate::reducers::statistic::{NanPolicy, Statistic};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online};
}

// ============================================================================
// Rolling Builder
// ============================================================================

/// Fluent builder for configuring rolling parameters and execution modes.
#[derive(Debug, Clone)]
pub struct RollingBuilder<T> {
    /// Window length `W`.
    pub window: Option<usize>,

    /// Minimum valid observations for a defined output.
    pub min_periods: Option<usize>,

    /// Statistic to compute.
    pub statistic: Option<Statistic<T>>,

    /// Missing-observation policy.
    pub nan_policy: Option<NanPolicy>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for RollingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RollingBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window: None,
            min_periods: None,
            statistic: None,
            nan_policy: None,
            duplicate_param: None,
        }
    }

    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: RollingAdapter<T>,
    {
        A::convert(self)
    }

    /// Set the window length.
    pub fn window(mut self, window: usize) -> Self {
        if self.window.is_some() {
            self.duplicate_param = Some("window");
        }
        self.window = Some(window);
        self
    }

    /// Set the minimum valid observations for a defined output.
    ///
    /// Defaults to the window length when not set.
    pub fn min_periods(mut self, min_periods: usize) -> Self {
        if self.min_periods.is_some() {
            self.duplicate_param = Some("min_periods");
        }
        self.min_periods = Some(min_periods);
        self
    }

    /// Set the statistic to compute.
    pub fn statistic(mut self, statistic: Statistic<T>) -> Self {
        if self.statistic.is_some() {
            self.duplicate_param = Some("statistic");
        }
        self.statistic = Some(statistic);
        self
    }

    /// Set the missing-observation policy.
    pub fn nan_policy(mut self, policy: NanPolicy) -> Self {
        if self.nan_policy.is_some() {
            self.duplicate_param = Some("nan_policy");
        }
        self.nan_policy = Some(policy);
        self
    }
}

// ============================================================================
// Adapter Markers
// ============================================================================

/// Trait for transitioning from a generic builder to an execution builder.
pub trait RollingAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`RollingBuilder`] into a specialized execution builder.
    fn convert(builder: RollingBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> RollingAdapter<T> for Batch {
    type Output = BatchRollingBuilder<T>;

    fn convert(builder: RollingBuilder<T>) -> Self::Output {
        let mut result = BatchRollingBuilder::default();

        if let Some(window) = builder.window {
            result.window = window;
        }
        if let Some(min_periods) = builder.min_periods {
            result.min_periods = Some(min_periods);
        }
        if let Some(statistic) = builder.statistic {
            result.statistic = statistic;
        }
        if let Some(policy) = builder.nan_policy {
            result.nan_policy = policy;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for incremental online processing.
#[derive(Debug, Clone, Copy)]
pub struct Online;

impl<T: Float> RollingAdapter<T> for Online {
    type Output = OnlineRollingBuilder<T>;

    fn convert(builder: RollingBuilder<T>) -> Self::Output {
        let mut result = OnlineRollingBuilder::default();

        if let Some(window) = builder.window {
            result.window = window;
        }
        if let Some(min_periods) = builder.min_periods {
            result.min_periods = Some(min_periods);
        }
        if let Some(statistic) = builder.statistic {
            result.statistic = statistic;
        }
        if let Some(policy) = builder.nan_policy {
            result.nan_policy = policy;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
