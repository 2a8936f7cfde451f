//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different execution modes:
//!
//! - **Batch**: One call over a complete lane held in memory
//! - **Online**: Incremental updates for observations arriving one at a time
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Reducers
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter for complete lanes.
pub mod batch;

/// Online adapter for real-time data streams.
pub mod online;
