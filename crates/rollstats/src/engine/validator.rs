//! Input validation for rolling-statistics configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for rolling-window configuration
//! parameters. It checks requirements such as window length, `min_periods`
//! bounds, quantile levels, and axis selection.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like `min_periods` in `[1, window]`.
//! * **Axis Bounds**: The traversal axis must name an existing dimension.
//! * **Builder Constraints**: Each parameter may be configured once.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the rolling computation itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RollError;
use crate::reducers::statistic::Statistic;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for rolling-statistics configuration.
///
/// Provides static methods for validating rolling parameters. All methods
/// return `Result<(), RollError>` and fail fast upon identifying the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the window length.
    pub fn validate_window(window: usize) -> Result<(), RollError> {
        if window < 1 {
            return Err(RollError::InvalidWindow(window));
        }
        Ok(())
    }

    /// Validate `min_periods` against the window length.
    pub fn validate_min_periods(min_periods: usize, window: usize) -> Result<(), RollError> {
        if min_periods < 1 || min_periods > window {
            return Err(RollError::InvalidMinPeriods {
                got: min_periods,
                window,
            });
        }
        Ok(())
    }

    /// Validate a quantile level.
    pub fn validate_quantile<T: Float>(level: T) -> Result<(), RollError> {
        if !level.is_finite() || level < T::zero() || level > T::one() {
            return Err(RollError::InvalidQuantile(
                level.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the statistic selection, including any embedded parameters.
    pub fn validate_statistic<T: Float>(statistic: &Statistic<T>) -> Result<(), RollError> {
        if let Statistic::Quantile(level) = statistic {
            Self::validate_quantile(*level)?;
        }
        Ok(())
    }

    // ========================================================================
    // Axis Validation
    // ========================================================================

    /// Validate the traversal axis against the array's dimensionality.
    pub fn validate_axis(axis: usize, ndim: usize) -> Result<(), RollError> {
        if axis >= ndim {
            return Err(RollError::InvalidAxis { axis, ndim });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Check that no parameter was configured more than once.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), RollError> {
        if let Some(parameter) = duplicate_param {
            return Err(RollError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
