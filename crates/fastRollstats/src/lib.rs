//! # Fast rolling-window statistics over ndarray data
//!
//! Array-oriented companion to the `rollstats` crate: rolling mean, variance,
//! extrema, ranks, and interpolated quantiles along any axis of an
//! N-dimensional array, with parallel lane execution.
//!
//! ## What is a rolling statistic?
//!
//! A rolling (or sliding-window) statistic summarizes, at each position of a
//! sequence, the most recent `W` observations ending there. Over an
//! N-dimensional array, the sequence is a *lane*: a 1-D slice parallel to the
//! chosen axis. Every lane is processed independently, which is what makes
//! lane-level parallelism exact rather than approximate.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastRollstats::prelude::*;
//! use ndarray::array;
//!
//! let data = array![
//!     [1.0, 2.0, f64::NAN],
//!     [4.0, 4.5, f64::NAN],
//!     [2.0, 4.0, 1.0],
//!     [-6.0, 4.5, 2.0],
//! ];
//!
//! // Build the processor with parallel execution (default)
//! let model = Rolling::new()
//!     .window(3)          // Window of 3 observations
//!     .min_periods(2)     // Output defined from 2 valid observations
//!     .statistic(Mean)    // Rolling mean
//!     .adapter(Batch)     // Axis-oriented, parallel by default
//!     .axis(0)            // Roll down the columns
//!     .build()?;
//!
//! // Apply it to the array
//! let result = model.apply(&data)?;
//!
//! assert_eq!(result.shape(), data.shape());
//! # Result::<(), RollError>::Ok(())
//! ```
//!
//! ### Online Processing
//!
//! ```rust
//! use fastRollstats::prelude::*;
//!
//! let mut model = Rolling::new()
//!     .window(5)
//!     .min_periods(3)
//!     .statistic(Rank)
//!     .adapter(Online)
//!     .build()?;
//!
//! let rank = model.update(0.7);
//! # let _ = rank;
//! # Result::<(), RollError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The `apply` method returns a `Result<Array<T, D>, RollError>` with the
//! shape of the input; undefined positions hold NaN. The `?` operator is
//! idiomatic:
//!
//! ```rust
//! use fastRollstats::prelude::*;
//! use ndarray::Array1;
//!
//! let data = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
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
//! ## ndarray Integration
//!
//! `fastRollstats` supports [ndarray](https://docs.rs/ndarray) natively:
//! `apply` accepts any owned array or view, of any dimensionality, and
//! `apply_in_place` overwrites the input without allocating an output.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![allow(non_snake_case)]

// Engine - axis traversal and parallel lane execution.
mod engine;

// Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for rolling statistics over arrays.
mod api;

// Standard fastRollstats prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Online},
        NanPolicy::{Propagate, Skip},
        RollError, RollResult, RollingBuilder as Rolling,
        Statistic::{
            Max, Mean, Min, Quantile, Rank, RelativeRank, Skewness, StdDev, Sum, Variance, ZScore,
        },
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal layers so integration tests and the Python
// bindings can reach the traversal engine directly. Not part of the stable
// API surface.
#[doc(hidden)]
pub mod internals {
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
