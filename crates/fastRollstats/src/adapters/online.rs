//! Online adapter delegating to the base implementation.
//!
//! ## Purpose
//!
//! This module provides the online execution adapter in the fastRollstats
//! builder chain. Observations arrive one at a time, so there is nothing to
//! parallelize; configuration and execution delegate to the `rollstats`
//! online adapter.
//!
//! ## Non-goals
//!
//! * This adapter does not roll over arrays (use the batch adapter).

// External dependencies
use num_traits::Float;

// Export dependencies from rollstats crate
use rollstats::internals::adapters::online::{OnlineRolling, OnlineRollingBuilder};
use rollstats::internals::primitives::errors::RollError;
use rollstats::internals::reducers::statistic::{NanPolicy, Statistic};

// ============================================================================
// Extended Online Rolling Builder
// ============================================================================

/// Builder for the online rolling processor.
#[derive(Debug, Clone)]
pub struct StreamRollingBuilder<T: Float> {
    /// Base builder from the rollstats crate
    pub base: OnlineRollingBuilder<T>,
}

impl<T: Float> Default for StreamRollingBuilder<T> {
    fn default() -> Self {
        Self {
            base: OnlineRollingBuilder::default(),
        }
    }
}

impl<T: Float> StreamRollingBuilder<T> {
    /// Set the window length.
    pub fn window(mut self, window: usize) -> Self {
        self.base = self.base.window(window);
        self
    }

    /// Set the minimum valid observations for a defined output.
    pub fn min_periods(mut self, min_periods: usize) -> Self {
        self.base = self.base.min_periods(min_periods);
        self
    }

    /// Set the statistic to compute.
    pub fn statistic(mut self, statistic: Statistic<T>) -> Self {
        self.base = self.base.statistic(statistic);
        self
    }

    /// Set the missing-observation policy.
    pub fn nan_policy(mut self, policy: NanPolicy) -> Self {
        self.base = self.base.nan_policy(policy);
        self
    }

    /// Build the online processor.
    pub fn build(self) -> Result<OnlineRolling<T>, RollError> {
        self.base.build()
    }
}
