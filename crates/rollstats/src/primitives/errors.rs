//! Error types for rolling-statistics operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring or
//! running a rolling computation, covering parameter constraints, axis
//! selection, and input handling.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending axis and rank).
//! * **Deferred**: Errors are often caught and stored during builder configuration.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Parameter validation**: Window length, `min_periods`, quantile level.
//! 2. **Axis validation**: The traversal axis must name an existing dimension.
//! 3. **Builder constraints**: Each parameter may be configured once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for rolling-statistics operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RollError {
    /// Window length must be at least 1.
    InvalidWindow(usize),

    /// `min_periods` must lie in `[1, window]`.
    InvalidMinPeriods {
        /// The `min_periods` provided.
        got: usize,
        /// The configured window length.
        window: usize,
    },

    /// Quantile level must be finite and in `[0, 1]`.
    InvalidQuantile(f64),

    /// The traversal axis must name an existing dimension.
    InvalidAxis {
        /// The axis provided.
        axis: usize,
        /// Number of dimensions of the array.
        ndim: usize,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RollError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidWindow(window) => {
                write!(f, "Invalid window: {window} (must be at least 1)")
            }
            Self::InvalidMinPeriods { got, window } => {
                write!(
                    f,
                    "Invalid min_periods: {got} (must be between 1 and window {window})"
                )
            }
            Self::InvalidQuantile(q) => {
                write!(f, "Invalid quantile: {q} (must be finite and in [0, 1])")
            }
            Self::InvalidAxis { axis, ndim } => {
                write!(
                    f,
                    "Invalid axis: {axis} (array has {ndim} dimension(s), axis must be < {ndim})"
                )
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RollError {}
