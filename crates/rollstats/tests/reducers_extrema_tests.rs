//! Tests for the extremum reducers.
//!
//! These tests verify the monotonic-deque trackers:
//! - Maximum and minimum under accept/retire churn
//! - Duplicate handling (equal candidates survive independent evictions)
//! - Consistency with naive recomputation over a sliding window
//!
//! ## Test Organization
//!
//! 1. **Maximum** - Basic tracking, eviction of the current maximum
//! 2. **Minimum** - Basic tracking
//! 3. **Duplicates** - Equal values evicted one at a time
//! 4. **Churn** - Sliding-window equivalence with naive max/min

use rollstats::internals::reducers::extrema::ExtremumTracker;

// ============================================================================
// Maximum Tests
// ============================================================================

/// Test maximum tracking as observations arrive.
#[test]
fn test_max_basic() {
    let mut tracker: ExtremumTracker<f64> = ExtremumTracker::max();
    tracker.accept(1.0);
    assert_eq!(tracker.value(), 1.0);
    tracker.accept(3.0);
    assert_eq!(tracker.value(), 3.0);
    tracker.accept(2.0);
    assert_eq!(tracker.value(), 3.0, "Smaller arrival keeps the maximum");
}

/// Test that retiring the current maximum reveals the runner-up.
#[test]
fn test_max_retire_reveals_runner_up() {
    let mut tracker: ExtremumTracker<f64> = ExtremumTracker::max();
    tracker.accept(5.0);
    tracker.accept(2.0);
    tracker.accept(4.0);

    // 5 arrived first, so it is retired first
    tracker.retire(5.0);
    assert_eq!(tracker.value(), 4.0, "Runner-up becomes the maximum");
}

/// Test that the tracker reports NaN when empty.
#[test]
fn test_max_empty_is_nan() {
    let tracker: ExtremumTracker<f64> = ExtremumTracker::max();
    assert!(tracker.value().is_nan(), "Empty tracker has no maximum");
}

// ============================================================================
// Minimum Tests
// ============================================================================

/// Test minimum tracking as observations arrive.
#[test]
fn test_min_basic() {
    let mut tracker: ExtremumTracker<f64> = ExtremumTracker::min();
    tracker.accept(4.0);
    tracker.accept(2.0);
    tracker.accept(3.0);
    assert_eq!(tracker.value(), 2.0);

    tracker.retire(4.0);
    assert_eq!(tracker.value(), 2.0, "Retiring a non-minimum changes nothing");
    tracker.retire(2.0);
    assert_eq!(tracker.value(), 3.0, "Retiring the minimum reveals the next");
}

// ============================================================================
// Duplicate Tests
// ============================================================================

/// Test that equal maxima survive one eviction each.
#[test]
fn test_duplicate_extrema() {
    let mut tracker: ExtremumTracker<f64> = ExtremumTracker::max();
    tracker.accept(7.0);
    tracker.accept(7.0);
    tracker.accept(1.0);

    tracker.retire(7.0);
    assert_eq!(tracker.value(), 7.0, "Second 7.0 still in the window");
    tracker.retire(7.0);
    assert_eq!(tracker.value(), 1.0, "Both 7.0s gone");
}

// ============================================================================
// Churn Tests
// ============================================================================

/// Test sliding-window equivalence with a naive per-window maximum.
#[test]
fn test_sliding_window_matches_naive() {
    let data = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0, 5.0];
    let window = 3;

    let mut max_tracker: ExtremumTracker<f64> = ExtremumTracker::max();
    let mut min_tracker: ExtremumTracker<f64> = ExtremumTracker::min();

    for (i, &value) in data.iter().enumerate() {
        max_tracker.accept(value);
        min_tracker.accept(value);
        if i >= window {
            max_tracker.retire(data[i - window]);
            min_tracker.retire(data[i - window]);
        }

        let start = i.saturating_sub(window - 1);
        let naive_max = data[start..=i].iter().cloned().fold(f64::MIN, f64::max);
        let naive_min = data[start..=i].iter().cloned().fold(f64::MAX, f64::min);

        assert_eq!(max_tracker.value(), naive_max, "Max at step {i}");
        assert_eq!(min_tracker.value(), naive_min, "Min at step {i}");
    }
}
