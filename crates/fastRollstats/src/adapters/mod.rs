//! Adapters layer: execution mode adapters over ndarray data.
//!
//! # Purpose
//!
//! This layer wraps the `rollstats` adapters for array-oriented workloads:
//!
//! - **Batch**: Rolls along one axis of an N-dimensional array, parallel by
//!   default
//! - **Online**: Incremental updates, delegating to the base implementation

/// Axis-oriented batch adapter.
pub mod batch;

/// Online adapter delegating to the base implementation.
pub mod online;
