//! Layer 2: Reducers
//!
//! # Purpose
//!
//! This layer provides the incremental statistic accumulators. Each reducer
//! maintains just enough state to answer its statistic over the valid
//! observations currently in the window, updated in O(1) or O(log W) per
//! observation as the engine feeds arrivals and evictions.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Reducers ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Statistic selection.
pub mod statistic;

/// Reducer trait and dispatch.
pub mod reducer;

/// Moment-based reducers (sum, mean, variance, skewness, z-score).
pub mod moments;

/// Extremum reducers (min, max).
pub mod extrema;

/// Order-based reducers (rank, quantile).
pub mod order;
