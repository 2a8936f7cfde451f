//! Axis traversal engine for rolling statistics over ndarray data.
//!
//! ## Purpose
//!
//! This module walks every lane of an N-dimensional array along a chosen
//! axis and drives the `rollstats` engine over each lane independently. It
//! provides both a sequential path that reuses one engine across lanes and a
//! parallel path that distributes lanes across CPU cores.
//!
//! ## Design notes
//!
//! * **Lane independence**: Lanes share no state, so parallel and sequential
//!   traversal produce bitwise-identical outputs.
//! * **In place**: Each lane is overwritten with its outputs as the window
//!   advances; no per-lane scratch copies.
//! * **Engine reuse**: The sequential path resets one engine per lane instead
//!   of reallocating its buffers.
//! * **Parallelism**: Uses `rayon` via `ndarray::Zip` (fastRollstats extension).
//!
//! ## Invariants
//!
//! * Every lane has the same length: the array's extent along the traversal
//!   axis.
//! * The traversal axis has been validated against the array's
//!   dimensionality.
//!
//! ## Non-goals
//!
//! * This module does not implement the step protocol (handled by the
//!   `rollstats` engine).
//! * This module does not validate configuration (handled by the adapters).

// External dependencies
use ndarray::{ArrayViewMut, ArrayViewMut1, Axis, Dimension, Zip};
use num_traits::Float;

// Export dependencies from rollstats crate
use rollstats::internals::engine::executor::{RollingConfig, RollingEngine};

// ============================================================================
// Lane Execution
// ============================================================================

/// Process one lane view in place, resetting the engine first.
///
/// Lane views are not guaranteed to be contiguous, so this walks the view's
/// own iterator instead of a slice.
fn run_lane_view<T: Float>(engine: &mut RollingEngine<T>, lane: &mut ArrayViewMut1<'_, T>) {
    engine.reset();
    for value in lane.iter_mut() {
        *value = engine.step(*value);
    }
}

// ============================================================================
// Axis Traversal
// ============================================================================

/// Roll over every lane of `data` along `axis`, in place.
///
/// With `parallel` set (and the `cpu` feature enabled), lanes are distributed
/// across CPU cores; otherwise a single engine is reused sequentially.
pub fn roll_axis_in_place<T, D>(
    data: &mut ArrayViewMut<'_, T, D>,
    axis: Axis,
    config: RollingConfig<T>,
    parallel: bool,
) where
    T: Float + Send + Sync,
    D: Dimension,
{
    #[cfg(feature = "cpu")]
    if parallel {
        Zip::from(data.lanes_mut(axis)).par_for_each(|mut lane| {
            let mut engine = RollingEngine::new(config);
            run_lane_view(&mut engine, &mut lane);
        });
        return;
    }
    #[cfg(not(feature = "cpu"))]
    let _ = parallel;

    let mut engine = RollingEngine::new(config);
    Zip::from(data.lanes_mut(axis)).for_each(|mut lane| {
        run_lane_view(&mut engine, &mut lane);
    });
}
