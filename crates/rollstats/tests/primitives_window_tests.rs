//! Tests for the sliding-window buffer.
//!
//! These tests verify the ring-buffer mechanics used for rolling statistics:
//! - Fill-up phase without evictions
//! - FIFO eviction once the buffer is full
//! - Valid/missing observation counting with NaN inputs
//!
//! ## Test Organization
//!
//! 1. **Fill and Eviction** - Push order, eviction order, capacity
//! 2. **Validity Counting** - NaN bookkeeping across evictions
//! 3. **Reuse** - Clearing and refilling

use rollstats::internals::primitives::window::WindowBuffer;

// ============================================================================
// Fill and Eviction Tests
// ============================================================================

/// Test that nothing is evicted while the buffer is filling.
#[test]
fn test_push_no_eviction_while_filling() {
    let mut buffer: WindowBuffer<f64> = WindowBuffer::new(3);

    assert_eq!(buffer.push(1.0), None, "No eviction on first push");
    assert_eq!(buffer.push(2.0), None, "No eviction on second push");
    assert_eq!(buffer.push(3.0), None, "No eviction at capacity");
    assert!(buffer.is_full(), "Buffer should be full after 3 pushes");
    assert_eq!(buffer.len(), 3, "Length should equal capacity");
}

/// Test that evictions come out in arrival (FIFO) order.
#[test]
fn test_push_evicts_oldest_first() {
    let mut buffer: WindowBuffer<f64> = WindowBuffer::new(3);
    buffer.push(1.0);
    buffer.push(2.0);
    buffer.push(3.0);

    assert_eq!(buffer.push(4.0), Some(1.0), "Oldest observation evicted");
    assert_eq!(buffer.push(5.0), Some(2.0), "Eviction order is FIFO");
    assert_eq!(buffer.push(6.0), Some(3.0), "Eviction order is FIFO");
    assert_eq!(buffer.len(), 3, "Length stays at capacity");
}

/// Test a capacity-1 buffer: every push after the first evicts.
#[test]
fn test_capacity_one() {
    let mut buffer: WindowBuffer<f64> = WindowBuffer::new(1);

    assert_eq!(buffer.push(1.0), None);
    assert_eq!(buffer.push(2.0), Some(1.0));
    assert_eq!(buffer.push(3.0), Some(2.0));
    assert_eq!(buffer.capacity(), 1);
}

// ============================================================================
// Validity Counting Tests
// ============================================================================

/// Test that valid and missing counts track NaN observations.
#[test]
fn test_valid_and_missing_counts() {
    let mut buffer: WindowBuffer<f64> = WindowBuffer::new(4);
    buffer.push(1.0);
    buffer.push(f64::NAN);
    buffer.push(2.0);

    assert_eq!(buffer.valid_count(), 2, "Two valid observations");
    assert_eq!(buffer.missing_count(), 1, "One missing observation");
    assert_eq!(
        buffer.valid_count() + buffer.missing_count(),
        buffer.len(),
        "Counts partition the buffer"
    );
}

/// Test that counts stay consistent when NaN observations are evicted.
#[test]
fn test_counts_across_evictions() {
    let mut buffer: WindowBuffer<f64> = WindowBuffer::new(2);
    buffer.push(f64::NAN);
    buffer.push(1.0);
    assert_eq!(buffer.missing_count(), 1);

    // Evicts the NaN
    let evicted = buffer.push(2.0);
    assert!(evicted.unwrap().is_nan(), "NaN should be evicted");
    assert_eq!(buffer.missing_count(), 0, "Missing count decremented");
    assert_eq!(buffer.valid_count(), 2, "Both remaining are valid");

    // Evicts a valid observation
    buffer.push(f64::NAN);
    assert_eq!(buffer.valid_count(), 1);
    assert_eq!(buffer.missing_count(), 1);
}

/// Test that infinities count as valid observations.
#[test]
fn test_infinity_is_valid() {
    let mut buffer: WindowBuffer<f64> = WindowBuffer::new(2);
    buffer.push(f64::INFINITY);
    buffer.push(f64::NEG_INFINITY);

    assert_eq!(buffer.valid_count(), 2, "Infinities are valid");
    assert_eq!(buffer.missing_count(), 0);
}

// ============================================================================
// Reuse Tests
// ============================================================================

/// Test that clear resets the buffer to its initial state.
#[test]
fn test_clear_resets_state() {
    let mut buffer: WindowBuffer<f64> = WindowBuffer::new(3);
    buffer.push(1.0);
    buffer.push(f64::NAN);
    buffer.clear();

    assert!(buffer.is_empty(), "Buffer should be empty after clear");
    assert_eq!(buffer.valid_count(), 0);
    assert_eq!(buffer.missing_count(), 0);

    // Refill behaves like a fresh buffer
    assert_eq!(buffer.push(7.0), None);
    assert_eq!(buffer.valid_count(), 1);
}
