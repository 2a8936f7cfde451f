//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures and shared error types
//! used throughout the crate. It has zero internal dependencies within the
//! crate.
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
//! Layer 2: Reducers
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Sliding-window buffer.
pub mod window;

/// Order-statistics multiset.
pub mod ordered;

/// Shared error types.
pub mod errors;
