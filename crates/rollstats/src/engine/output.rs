//! Output types and result structures for rolling operations.
//!
//! ## Purpose
//!
//! This module defines the `RollResult` struct which packages the outputs of
//! a batch rolling computation together with the configuration that produced
//! them.
//!
//! ## Design notes
//!
//! * **Positional**: The output vector has exactly one entry per input
//!   observation; undefined positions hold NaN.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Key concepts
//!
//! * **Defined outputs**: Positions where the window held enough valid
//!   observations; everything else is NaN.
//! * **Metadata**: The window length, `min_periods`, statistic, and NaN
//!   policy used.
//!
//! ## Invariants
//!
//! * `values.len()` equals the input length.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::reducers::statistic::{NanPolicy, Statistic};

// ============================================================================
// Result Structure
// ============================================================================

/// Output of a batch rolling computation over one lane.
#[derive(Debug, Clone, PartialEq)]
pub struct RollResult<T> {
    /// One output per input observation; NaN where undefined.
    pub values: Vec<T>,

    /// Window length used.
    pub window: usize,

    /// Minimum valid observations required for a defined output.
    pub min_periods: usize,

    /// Statistic computed.
    pub statistic: Statistic<T>,

    /// Missing-observation policy applied.
    pub nan_policy: NanPolicy,
}

impl<T: Float> RollResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of positions with a defined (non-NaN) output.
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_nan()).count()
    }

    /// Index of the first defined output, if any.
    pub fn first_defined(&self) -> Option<usize> {
        self.values.iter().position(|v| !v.is_nan())
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for RollResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Observations: {}", self.values.len())?;
        writeln!(f, "  Statistic:    {}", self.statistic)?;
        writeln!(f, "  Window:       {}", self.window)?;
        writeln!(f, "  Min periods:  {}", self.min_periods)?;
        writeln!(f, "  NaN policy:   {}", self.nan_policy)?;
        writeln!(f, "  Defined:      {}", self.defined_count())?;
        writeln!(f)?;

        writeln!(f, "Outputs:")?;
        writeln!(f, "  {:>8}  {:>14}", "index", "value")?;

        // Preview the head of the output; large lanes are elided.
        const PREVIEW: usize = 10;
        for (i, value) in self.values.iter().take(PREVIEW).enumerate() {
            writeln!(f, "  {:>8}  {:>14.6}", i, value)?;
        }
        if self.values.len() > PREVIEW {
            writeln!(f, "  ... ({} more)", self.values.len() - PREVIEW)?;
        }

        Ok(())
    }
}
