//! Engine layer: axis traversal and parallel lane execution.
//!
//! # Purpose
//!
//! This layer walks N-dimensional arrays lane by lane and delegates each lane
//! to the `rollstats` execution engine, optionally in parallel.

/// Axis traversal engine.
pub mod executor;
