//! # rollstats — Rolling-Window Statistics for Rust
//!
//! Incremental rolling-window statistics over numeric sequences: mean,
//! variance, extrema, ranks, and interpolated quantiles, each updated in
//! O(1) or O(log W) per observation instead of recomputing the window.
//!
//! ## What is a rolling statistic?
//!
//! A rolling (or sliding-window) statistic summarizes, at each position of a
//! sequence, the most recent `W` observations ending there. Missing
//! observations are encoded as NaN: they occupy a window slot but are
//! excluded from the computation, and a `min_periods` threshold decides how
//! many valid observations a window needs before its output is defined.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use rollstats::prelude::*;
//!
//! let data = vec![1.0, 4.0, 2.0, f64::NAN, 3.0, 5.0];
//!
//! // Build the processor
//! let model = Rolling::new()
//!     .window(3)          // Window of 3 observations
//!     .min_periods(2)     // Output defined from 2 valid observations
//!     .statistic(Mean)    // Rolling mean
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Apply it to the data
//! let result = model.apply(&data)?;
//!
//! println!("{}", result);
//! # Result::<(), RollError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Observations: 6
//!   Statistic:    mean
//!   Window:       3
//!   Min periods:  2
//!   NaN policy:   skip
//!   Defined:      5
//! ```
//!
//! ### Online Processing
//!
//! ```rust
//! use rollstats::prelude::*;
//!
//! let mut model = Rolling::new()
//!     .window(5)
//!     .min_periods(3)
//!     .statistic(Rank)
//!     .adapter(Online)
//!     .build()?;
//!
//! // Feed observations as they arrive
//! for value in [0.4, -1.2, 0.9, 0.1, 2.3_f64] {
//!     let rank = model.update(value);
//!     if !rank.is_nan() {
//!         // rank of the newest observation within its window
//!     }
//! }
//! # Result::<(), RollError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The `apply` method returns a `Result<RollResult<T>, RollError>`.
//!
//! - **`Ok(RollResult<T>)`**: Contains the outputs and the configuration used.
//! - **`Err(RollError)`**: Indicates a failure (e.g., `min_periods` larger
//!   than the window).
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use rollstats::prelude::*;
//! # let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let model = Rolling::new()
//!     .window(2)
//!     .statistic(Max)
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.apply(&data)?;
//! # Result::<(), RollError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! rollstats = { version = "0.3", default-features = false }
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - Use `f32` instead of `f64` to reduce memory footprint
//! - Prefer the online adapter; it holds O(W) state instead of whole lanes
//! - Moment statistics avoid the order-statistics tree entirely
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and shared error types.
mod primitives;

// Layer 2: Reducers - incremental statistic accumulators.
mod reducers;

// Layer 3: Engine - orchestration and execution control.
mod engine;

// Layer 4: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for rolling statistics.
mod api;

// Standard rolling prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Online},
        NanPolicy::Propagate,
        NanPolicy::Skip,
        RollError, RollResult, RollingBuilder as Rolling,
        Statistic::Max,
        Statistic::Mean,
        Statistic::Min,
        Statistic::Quantile,
        Statistic::Rank,
        Statistic::RelativeRank,
        Statistic::Skewness,
        Statistic::StdDev,
        Statistic::Sum,
        Statistic::Variance,
        Statistic::ZScore,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal layers so integration tests and the
// array-oriented companion crate can reach the engine directly. Not part of
// the stable API surface.
#[doc(hidden)]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod reducers {
        pub use crate::reducers::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
