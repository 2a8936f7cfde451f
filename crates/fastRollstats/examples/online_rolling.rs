//! fastRollstats Online Rolling Examples
//!
//! This example demonstrates the streaming adapter:
//! - Observation-by-observation updates
//! - Warmup behavior under `min_periods`
//! - Rank tracking over a live stream
//! - Resetting a model between streams

use fastRollstats::prelude::*;

fn main() -> Result<(), RollError> {
    println!("{}", "=".repeat(80));
    println!("fastRollstats Online Rolling Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_streaming_mean()?;
    example_2_streaming_rank()?;
    example_3_reset_between_streams()?;

    Ok(())
}

/// Example 1: Streaming Mean
/// Demonstrates incremental updates and warmup
fn example_1_streaming_mean() -> Result<(), RollError> {
    println!("Example 1: Streaming Mean");
    println!("{}", "-".repeat(80));

    let mut model = Rolling::new()
        .window(4)
        .min_periods(2)
        .statistic(Mean)
        .adapter(Online)
        .build()?;

    for value in [10.0, 12.0, f64::NAN, 11.0, 9.0, 14.0] {
        let output = model.update(value);
        println!("observe {value:6.1}  ->  mean {output:6.2}");
    }

    println!();
    Ok(())
}

/// Example 2: Streaming Rank
/// Demonstrates the rank of the newest observation within its window
fn example_2_streaming_rank() -> Result<(), RollError> {
    println!("Example 2: Streaming Rank");
    println!("{}", "-".repeat(80));

    let mut model = Rolling::new()
        .window(5)
        .min_periods(3)
        .statistic(Rank)
        .adapter(Online)
        .build()?;

    let stream = [0.3, -1.1, 0.9, 0.2, 2.4, -0.5, 0.7];
    let ranks = model.update_many(&stream);

    for (value, rank) in stream.iter().zip(ranks.iter()) {
        println!("observe {value:6.2}  ->  rank {rank:4.1}");
    }

    println!();
    Ok(())
}

/// Example 3: Reset Between Streams
/// Demonstrates reusing one model across independent streams
fn example_3_reset_between_streams() -> Result<(), RollError> {
    println!("Example 3: Reset Between Streams");
    println!("{}", "-".repeat(80));

    let mut model = Rolling::new()
        .window(3)
        .min_periods(1)
        .statistic(Max)
        .adapter(Online)
        .build()?;

    let first = model.update_many(&[1.0, 5.0, 2.0]);
    println!("First stream maxima:  {first:?}");

    model.reset();

    let second = model.update_many(&[0.5, 0.1, 0.8]);
    println!("Second stream maxima: {second:?}");

    println!();
    Ok(())
}
