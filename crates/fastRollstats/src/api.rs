//! High-level API for rolling statistics over ndarray data.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for rolling
//! computations over N-dimensional arrays. It extends the `rollstats` API
//! with adapters that roll along a chosen axis and utilize all available CPU
//! cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `rollstats` builder pattern.
//! * **Parallel-First**: Batch execution defaults to parallel lanes.
//! * **Transparent**: Marker types (Batch, Online) select the array-oriented builders.
//!
//! ## Key concepts
//!
//! * **Axis Selection**: `.axis(k)` on the batch builder picks the traversal axis.
//! * **Parallel Support**: Uses `rayon` for multi-threaded lane execution.
//! * **Extended Adapters**: Wrap core adapters with the traversal logic.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RollingBuilder`] via `Rolling::new()`.
//! 2. Chain configuration methods (`.window()`, `.statistic()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get an axis-oriented builder.
//! 4. Optionally chain `.axis()` / `.parallel()`, then call `.build()`.

// Internal dependencies
use crate::adapters::batch::AxisRollingBuilder;
use crate::adapters::online::StreamRollingBuilder;

// External dependencies
use num_traits::Float;

// Import base marker types for delegation
use rollstats::internals::api::Batch as BaseBatch;
use rollstats::internals::api::Online as BaseOnline;

// Publicly re-exported types
pub use rollstats::internals::adapters::online::OnlineRolling;
pub use rollstats::internals::api::{RollingAdapter, RollingBuilder};
pub use rollstats::internals::engine::output::RollResult;
pub use rollstats::internals::primitives::errors::RollError;
pub use rollstats::internals::reducers::statistic::{NanPolicy, Statistic};

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for axis-oriented batch processing over arrays.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> RollingAdapter<T> for Batch {
    type Output = AxisRollingBuilder<T>;

    fn convert(builder: RollingBuilder<T>) -> Self::Output {
        // Delegate to base implementation to create the base builder
        let base = <BaseBatch as RollingAdapter<T>>::convert(builder);

        // Wrap with extension fields
        AxisRollingBuilder {
            base,
            ..AxisRollingBuilder::default()
        }
    }
}

/// Marker for incremental online processing.
#[derive(Debug, Clone, Copy)]
pub struct Online;

impl<T: Float> RollingAdapter<T> for Online {
    type Output = StreamRollingBuilder<T>;

    fn convert(builder: RollingBuilder<T>) -> Self::Output {
        // Delegate to base implementation to create the base builder
        let base = <BaseOnline as RollingAdapter<T>>::convert(builder);

        // Wrap with extension fields
        StreamRollingBuilder { base }
    }
}
