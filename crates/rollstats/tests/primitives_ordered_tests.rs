//! Tests for the order-statistics multiset.
//!
//! These tests verify the size-augmented tree used by the rank and quantile
//! reducers:
//! - Insertion, removal, and length with duplicates
//! - Strict rank queries
//! - k-th order statistic selection
//! - Window-like churn (interleaved insert/remove sequences)
//!
//! ## Test Organization
//!
//! 1. **Basic Operations** - Insert, remove, len, clear
//! 2. **Rank Queries** - Strict counting, duplicates
//! 3. **Selection** - Order statistics, out-of-range
//! 4. **Churn** - Sliding-window usage patterns

use rollstats::internals::primitives::ordered::OrderedMultiset;

// ============================================================================
// Basic Operation Tests
// ============================================================================

/// Test insertion and length tracking with duplicates.
#[test]
fn test_insert_and_len() {
    let mut set: OrderedMultiset<f64> = OrderedMultiset::new();
    assert!(set.is_empty(), "New multiset should be empty");

    set.insert(2.0);
    set.insert(1.0);
    set.insert(2.0);
    assert_eq!(set.len(), 3, "Duplicates count separately");
}

/// Test that remove takes out exactly one occurrence.
#[test]
fn test_remove_one_occurrence() {
    let mut set: OrderedMultiset<f64> = OrderedMultiset::new();
    set.insert(5.0);
    set.insert(5.0);
    set.insert(3.0);

    assert!(set.remove(5.0), "Present value should be removed");
    assert_eq!(set.len(), 2, "Only one occurrence removed");
    assert!(set.remove(5.0), "Second occurrence still present");
    assert!(!set.remove(5.0), "No occurrences left");
    assert_eq!(set.len(), 1);
}

/// Test removing a value that was never inserted.
#[test]
fn test_remove_absent_value() {
    let mut set: OrderedMultiset<f64> = OrderedMultiset::new();
    set.insert(1.0);

    assert!(!set.remove(2.0), "Absent value should not be removed");
    assert_eq!(set.len(), 1, "Length unchanged");
}

/// Test that clear empties the multiset.
#[test]
fn test_clear() {
    let mut set: OrderedMultiset<f64> = OrderedMultiset::new();
    for i in 0..10 {
        set.insert(i as f64);
    }
    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.rank(100.0), 0, "Rank over empty multiset is 0");
    assert_eq!(set.select(0), None, "Selection over empty multiset fails");
}

// ============================================================================
// Rank Query Tests
// ============================================================================

/// Test that rank counts strictly smaller elements.
#[test]
fn test_rank_is_strict() {
    let mut set: OrderedMultiset<f64> = OrderedMultiset::new();
    for value in [1.0, 2.0, 2.0, 3.0] {
        set.insert(value);
    }

    assert_eq!(set.rank(1.0), 0, "Nothing below the minimum");
    assert_eq!(set.rank(2.0), 1, "Equal elements do not raise the rank");
    assert_eq!(set.rank(3.0), 3, "Both 2.0s count below 3.0");
    assert_eq!(set.rank(10.0), 4, "Everything below a large probe");
    assert_eq!(set.rank(0.5), 0, "Nothing below a small probe");
}

/// Test rank against a larger shuffled insertion order.
#[test]
fn test_rank_shuffled_insertions() {
    let values = [7.0, 1.0, 9.0, 3.0, 5.0, 8.0, 2.0, 6.0, 4.0, 0.0];
    let mut set: OrderedMultiset<f64> = OrderedMultiset::new();
    for &value in &values {
        set.insert(value);
    }

    for probe in 0..10 {
        assert_eq!(
            set.rank(probe as f64),
            probe,
            "Rank of {probe} over 0..10 should be {probe}"
        );
    }
}

// ============================================================================
// Selection Tests
// ============================================================================

/// Test that select returns elements in sorted order.
#[test]
fn test_select_sorted_order() {
    let values = [4.0, 1.0, 3.0, 2.0, 2.0];
    let mut set: OrderedMultiset<f64> = OrderedMultiset::new();
    for &value in &values {
        set.insert(value);
    }

    let sorted: Vec<f64> = (0..set.len()).map(|k| set.select(k).unwrap()).collect();
    assert_eq!(sorted, vec![1.0, 2.0, 2.0, 3.0, 4.0]);
}

/// Test selection out of range.
#[test]
fn test_select_out_of_range() {
    let mut set: OrderedMultiset<f64> = OrderedMultiset::new();
    set.insert(1.0);

    assert_eq!(set.select(0), Some(1.0));
    assert_eq!(set.select(1), None, "Index past the end");
}

/// Test rank/select consistency on a large monotone insertion.
///
/// Sequential insertion is the worst case for an unbalanced tree; rank and
/// select staying exact here exercises the rebalancing paths.
#[test]
fn test_rank_select_consistency_sequential() {
    let mut set: OrderedMultiset<f64> = OrderedMultiset::new();
    let n = 1000;
    for i in 0..n {
        set.insert(i as f64);
    }

    assert_eq!(set.len(), n);
    for k in [0, 1, 17, 499, 500, 998, 999] {
        let value = set.select(k).unwrap();
        assert_eq!(value, k as f64, "select({k}) over 0..{n}");
        assert_eq!(set.rank(value), k, "rank(select({k})) round-trips");
    }
}

// ============================================================================
// Churn Tests
// ============================================================================

/// Test a sliding-window usage pattern: insert the newest, remove the
/// oldest, query in between.
#[test]
fn test_sliding_window_churn() {
    let data = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0];
    let window = 4;
    let mut set: OrderedMultiset<f64> = OrderedMultiset::with_capacity(window);

    for (i, &value) in data.iter().enumerate() {
        set.insert(value);
        if i >= window {
            assert!(set.remove(data[i - window]), "Evicted value was present");
        }

        // Compare against a naive sort of the current window contents
        let start = i.saturating_sub(window - 1);
        let mut naive: Vec<f64> = data[start..=i].to_vec();
        naive.sort_by(|a, b| a.partial_cmp(b).unwrap());

        assert_eq!(set.len(), naive.len(), "Size matches window at step {i}");
        for (k, &expected) in naive.iter().enumerate() {
            assert_eq!(
                set.select(k),
                Some(expected),
                "select({k}) matches naive sort at step {i}"
            );
        }
        assert_eq!(
            set.rank(value),
            naive.iter().filter(|&&v| v < value).count(),
            "rank of newest matches naive count at step {i}"
        );
    }
}
