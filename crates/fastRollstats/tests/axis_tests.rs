//! Tests for axis-oriented rolling over ndarray data.
//!
//! These tests verify lane extraction and traversal:
//! - The documented 2-D mean scenario along axis 0
//! - Rolling along axis 1 (rows as lanes)
//! - Shape preservation for 1-D and 3-D inputs
//! - Axis validation and the in-place variant
//!
//! ## Test Organization
//!
//! 1. **2-D Scenarios** - Exact expected outputs per column/row
//! 2. **Dimensionality** - 1-D, 3-D, shape preservation
//! 3. **Validation** - Out-of-range axis
//! 4. **In-Place** - Equivalence with the allocating variant

use approx::assert_abs_diff_eq;
use fastRollstats::prelude::*;
use ndarray::{array, Array1, Array3};

/// Compare two values treating NaN as equal to NaN.
fn same(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || (a - b).abs() < 1e-12
}

// ============================================================================
// 2-D Scenario Tests
// ============================================================================

/// Test the documented mean scenario: axis 0, window 3, min_periods 2.
#[test]
fn test_mean_axis0_documented_scenario() {
    let data = array![
        [2.0, 3.0, 1.0],
        [3.0, 3.5, f64::NAN],
        [f64::NAN, 4.0, 2.0],
        [-3.0, f64::NAN, f64::NAN],
    ];
    let expected = array![
        [f64::NAN, f64::NAN, f64::NAN],
        [2.5, 3.25, f64::NAN],
        [2.5, 3.5, 1.5],
        [0.0, 3.75, f64::NAN],
    ];

    let model = Rolling::new()
        .window(3)
        .min_periods(2)
        .statistic(Mean)
        .adapter(Batch)
        .axis(0)
        .build()
        .unwrap();

    let result = model.apply(&data).unwrap();
    assert_eq!(result.shape(), data.shape());
    for (got, want) in result.iter().zip(expected.iter()) {
        assert!(same(*got, *want), "Mean mismatch: {got} vs {want}");
    }
}

/// Test rolling along axis 1: each row is an independent lane.
#[test]
fn test_sum_axis1_rows_are_lanes() {
    let data: ndarray::Array2<f64> = array![[1.0, 2.0, 3.0], [10.0, 20.0, 30.0]];

    let model = Rolling::new()
        .window(2)
        .min_periods(2)
        .statistic(Sum)
        .adapter(Batch)
        .axis(1)
        .build()
        .unwrap();

    let result = model.apply(&data).unwrap();
    assert!(result[[0, 0]].is_nan() && result[[1, 0]].is_nan());
    assert_abs_diff_eq!(result[[0, 1]], 3.0);
    assert_abs_diff_eq!(result[[0, 2]], 5.0);
    assert_abs_diff_eq!(result[[1, 1]], 30.0);
    assert_abs_diff_eq!(result[[1, 2]], 50.0);
}

// ============================================================================
// Dimensionality Tests
// ============================================================================

/// Test that a 1-D array is a single lane.
#[test]
fn test_one_dimensional_lane() {
    let data = Array1::from_vec(vec![4.0, 1.0, 3.0, 2.0]);

    let model = Rolling::new()
        .window(2)
        .min_periods(1)
        .statistic(Min)
        .adapter(Batch)
        .build()
        .unwrap();

    let result = model.apply(&data).unwrap();
    assert_eq!(result.to_vec(), vec![4.0, 1.0, 1.0, 2.0]);
}

/// Test that 3-D shapes are preserved and middle-axis lanes are independent.
#[test]
fn test_three_dimensional_middle_axis() {
    let mut data = Array3::<f64>::zeros((2, 4, 3));
    for (i, value) in data.iter_mut().enumerate() {
        *value = i as f64;
    }

    let model = Rolling::new()
        .window(2)
        .min_periods(2)
        .statistic(Mean)
        .adapter(Batch)
        .axis(1)
        .build()
        .unwrap();

    let result = model.apply(&data).unwrap();
    assert_eq!(result.shape(), &[2, 4, 3]);

    // First position along axis 1 is warmup in every lane
    for i in 0..2 {
        for k in 0..3 {
            assert!(result[[i, 0, k]].is_nan(), "Warmup at lane ({i}, {k})");
        }
    }
    // Lanes step by 3 along axis 1, so each output is the midpoint
    assert_abs_diff_eq!(result[[0, 1, 0]], (data[[0, 0, 0]] + data[[0, 1, 0]]) / 2.0);
    assert_abs_diff_eq!(result[[1, 3, 2]], (data[[1, 2, 2]] + data[[1, 3, 2]]) / 2.0);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that an out-of-range axis is rejected at apply time.
#[test]
fn test_invalid_axis_rejected() {
    let data = array![[1.0, 2.0], [3.0, 4.0]];

    let model = Rolling::new()
        .window(2)
        .statistic(Mean)
        .adapter(Batch)
        .axis(2)
        .build()
        .unwrap();

    let result = model.apply(&data);
    assert!(matches!(
        result,
        Err(RollError::InvalidAxis { axis: 2, ndim: 2 })
    ));
}

// ============================================================================
// In-Place Tests
// ============================================================================

/// Test that apply_in_place matches apply.
#[test]
fn test_apply_in_place_matches_apply() {
    let data = array![
        [1.0, f64::NAN, 3.0],
        [4.0, 5.0, f64::NAN],
        [7.0, 8.0, 9.0],
        [2.0, f64::NAN, 1.0],
    ];

    let model = Rolling::new()
        .window(2)
        .min_periods(1)
        .statistic(Max)
        .adapter(Batch)
        .axis(0)
        .build()
        .unwrap();

    let expected = model.apply(&data).unwrap();

    let mut in_place = data.clone();
    model.apply_in_place(&mut in_place).unwrap();

    for (got, want) in in_place.iter().zip(expected.iter()) {
        assert!(same(*got, *want), "In-place mismatch: {got} vs {want}");
    }
}
