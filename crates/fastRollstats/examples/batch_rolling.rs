//! fastRollstats Batch Rolling Examples
//!
//! This example demonstrates features specific to `fastRollstats`:
//! - Rolling along an axis of a 2-D array
//! - Parallel execution using `rayon`
//! - Sequential fallback
//! - Missing observations and `min_periods`
//! - Order statistics (rank, quantile) over large windows

use fastRollstats::prelude::*;
use ndarray::{Array1, Array2};
use std::time::Instant;

fn main() -> Result<(), RollError> {
    println!("{}", "=".repeat(80));
    println!("fastRollstats Batch Rolling Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_axis_rolling()?;
    example_2_missing_observations()?;
    example_3_parallel_quantiles()?;

    Ok(())
}

/// Example 1: Axis Rolling
/// Demonstrates rolling a mean down the columns of a 2-D array
fn example_1_axis_rolling() -> Result<(), RollError> {
    println!("Example 1: Axis Rolling");
    println!("{}", "-".repeat(80));

    // Each column is an independent series
    let data = Array2::from_shape_fn((8, 3), |(i, j)| (i as f64) * 0.5 + (j as f64) * 10.0);

    let model = Rolling::new()
        .window(3)
        .min_periods(2)
        .statistic(Mean)
        .adapter(Batch) // Parallel by default
        .axis(0)
        .build()?;

    let result = model.apply(&data)?;

    println!("Input shape:  {:?}", data.shape());
    println!("Output shape: {:?}", result.shape());
    println!("Last row of means: {:?}", result.row(7));

    println!();
    Ok(())
}

/// Example 2: Missing Observations
/// Demonstrates NaN handling and the min_periods threshold
fn example_2_missing_observations() -> Result<(), RollError> {
    println!("Example 2: Missing Observations");
    println!("{}", "-".repeat(80));

    let data = Array1::from_vec(vec![2.0, 3.0, f64::NAN, -3.0, 1.0, f64::NAN, 4.0]);

    let skip = Rolling::new()
        .window(3)
        .min_periods(2)
        .statistic(Mean)
        .adapter(Batch)
        .build()?;
    println!("Skip policy:      {:?}", skip.apply(&data)?.to_vec());

    let propagate = Rolling::new()
        .window(3)
        .min_periods(2)
        .statistic(Mean)
        .nan_policy(Propagate)
        .adapter(Batch)
        .build()?;
    println!("Propagate policy: {:?}", propagate.apply(&data)?.to_vec());

    println!();
    Ok(())
}

/// Example 3: Parallel Quantiles
/// Demonstrates parallel vs sequential execution over many lanes
fn example_3_parallel_quantiles() -> Result<(), RollError> {
    println!("Example 3: Parallel Quantiles");
    println!("{}", "-".repeat(80));

    // A larger array: 2000 rows, 64 lanes
    let data = Array2::from_shape_fn((2000, 64), |(i, j)| {
        ((i * 31 + j * 17) % 997) as f64 / 100.0
    });

    for parallel in [true, false] {
        let model = Rolling::new()
            .window(101)
            .min_periods(50)
            .statistic(Quantile(0.9))
            .adapter(Batch)
            .axis(0)
            .parallel(parallel)
            .build()?;

        let start = Instant::now();
        let result = model.apply(&data)?;
        let duration = start.elapsed();

        println!(
            "parallel={:5}  {:?}  (sample output: {:.4})",
            parallel,
            duration,
            result[[1999, 0]]
        );
    }

    println!();
    Ok(())
}
