//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the rolling computation by coordinating between
//! primitives (window buffer, errors) and reducers. It owns the step
//! protocol, the output rule, and parameter validation.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Reducers
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for rolling statistics.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for rolling operations.
pub mod output;
