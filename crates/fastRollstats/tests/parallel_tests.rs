//! Tests for parallel lane execution.
//!
//! Lanes are independent, so parallel traversal must reproduce the
//! sequential output exactly, for every statistic and in the presence of
//! missing observations.
//!
//! ## Test Organization
//!
//! 1. **Equivalence** - Parallel vs sequential across statistics
//! 2. **Policies** - NaN propagation under parallel execution
//! 3. **Scale** - A larger array with many lanes

use fastRollstats::prelude::*;
use ndarray::Array2;

/// Build a deterministic test array with scattered NaN observations.
fn test_array(rows: usize, cols: usize) -> Array2<f64> {
    let mut data = Array2::<f64>::zeros((rows, cols));
    for (i, value) in data.iter_mut().enumerate() {
        // Deterministic pseudo-random walk; every 7th observation missing
        if i % 7 == 3 {
            *value = f64::NAN;
        } else {
            *value = ((i * 2654435761) % 1000) as f64 / 100.0 - 5.0;
        }
    }
    data
}

/// Compare arrays treating NaN as equal to NaN.
fn assert_same(a: &Array2<f64>, b: &Array2<f64>, context: &str) {
    for (x, y) in a.iter().zip(b.iter()) {
        assert!(
            (x.is_nan() && y.is_nan()) || x == y,
            "{context}: parallel {x} vs sequential {y}"
        );
    }
}

// ============================================================================
// Equivalence Tests
// ============================================================================

/// Test that parallel and sequential execution agree bitwise for every
/// statistic.
#[test]
fn test_parallel_matches_sequential_all_statistics() {
    let data = test_array(40, 6);
    let statistics = [
        Sum,
        Mean,
        Variance,
        StdDev,
        Skewness,
        ZScore,
        Min,
        Max,
        Rank,
        RelativeRank,
        Quantile(0.5),
        Quantile(0.9),
    ];

    for statistic in statistics {
        let build = |parallel: bool| {
            Rolling::new()
                .window(7)
                .min_periods(3)
                .statistic(statistic)
                .adapter(Batch)
                .axis(0)
                .parallel(parallel)
                .build()
                .unwrap()
        };

        let parallel = build(true).apply(&data).unwrap();
        let sequential = build(false).apply(&data).unwrap();
        assert_same(&parallel, &sequential, &format!("{statistic:?}"));
    }
}

// ============================================================================
// Policy Tests
// ============================================================================

/// Test NaN propagation under parallel execution.
#[test]
fn test_parallel_propagate_policy() {
    let data = test_array(20, 4);

    let build = |parallel: bool| {
        Rolling::new()
            .window(5)
            .min_periods(1)
            .statistic(Mean)
            .nan_policy(Propagate)
            .adapter(Batch)
            .axis(0)
            .parallel(parallel)
            .build()
            .unwrap()
    };

    let parallel = build(true).apply(&data).unwrap();
    let sequential = build(false).apply(&data).unwrap();
    assert_same(&parallel, &sequential, "propagate");

    // Spot-check: a window containing the NaN at flat index 3 is undefined
    assert!(parallel[[0, 3]].is_nan());
}

// ============================================================================
// Scale Tests
// ============================================================================

/// Test a larger array along axis 1 with more lanes than typical core
/// counts.
#[test]
fn test_parallel_many_lanes_axis1() {
    let data = test_array(64, 200);

    let build = |parallel: bool| {
        Rolling::new()
            .window(11)
            .min_periods(4)
            .statistic(Quantile(0.25))
            .adapter(Batch)
            .axis(1)
            .parallel(parallel)
            .build()
            .unwrap()
    };

    let parallel = build(true).apply(&data).unwrap();
    let sequential = build(false).apply(&data).unwrap();
    assert_eq!(parallel.shape(), data.shape());
    assert_same(&parallel, &sequential, "quantile(0.25) axis 1");
}
