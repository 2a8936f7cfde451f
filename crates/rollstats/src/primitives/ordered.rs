//! Order-statistics multiset for rank and quantile reducers.
//!
//! ## Purpose
//!
//! This module provides a size-augmented AVL tree storing the valid
//! observations of the current window in sorted order. It supports the four
//! operations the rank/quantile reducers need — insert, remove one
//! occurrence, rank query, and k-th order statistic — each in O(log n).
//!
//! ## Design notes
//!
//! * **Arena storage**: Nodes live in a `Vec` addressed by `u32` indices with a
//!   free list, so a window that churns values reuses the same allocation.
//! * **Duplicates as nodes**: Equal keys are kept as separate nodes (ties are
//!   inserted into the right subtree), so `remove` takes out exactly one
//!   occurrence — the first equal node met on the search path.
//! * **No NaN keys**: Callers only insert valid observations; comparisons
//!   assume a total order over the stored keys.
//!
//! ## Key concepts
//!
//! * **rank(x)**: number of stored elements strictly smaller than `x`.
//! * **select(k)**: the k-th smallest stored element (0-indexed).
//!
//! ## Invariants
//!
//! * Every node's `size` equals 1 + size(left) + size(right).
//! * Subtree heights differ by at most one (AVL balance).
//! * The in-order key sequence is non-decreasing.
//!
//! ## Non-goals
//!
//! * This module does not deduplicate values or count multiplicities.
//! * This module does not track insertion order across equal keys.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Sentinel index marking the absence of a child.
const NIL: u32 = u32::MAX;

// ============================================================================
// Node
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Node<T> {
    key: T,
    left: u32,
    right: u32,
    /// Height of the subtree rooted here (leaf = 1).
    height: u8,
    /// Number of nodes in the subtree rooted here.
    size: u32,
}

impl<T> Node<T> {
    fn leaf(key: T) -> Self {
        Self {
            key,
            left: NIL,
            right: NIL,
            height: 1,
            size: 1,
        }
    }
}

// ============================================================================
// Ordered Multiset
// ============================================================================

/// Size-augmented AVL multiset over a `Float` key type.
#[derive(Debug, Clone)]
pub struct OrderedMultiset<T> {
    nodes: Vec<Node<T>>,
    free: Vec<u32>,
    root: u32,
}

impl<T: Float> Default for OrderedMultiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> OrderedMultiset<T> {
    /// Create an empty multiset.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: NIL,
        }
    }

    /// Create an empty multiset with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            root: NIL,
        }
    }

    /// Number of stored elements (duplicates counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.subtree_size(self.root) as usize
    }

    /// Check whether the multiset is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    /// Remove all elements, keeping the arena allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = NIL;
    }

    /// Insert one occurrence of `key`.
    pub fn insert(&mut self, key: T) {
        debug_assert!(!key.is_nan(), "OrderedMultiset: NaN keys are not allowed");
        let idx = self.alloc(key);
        self.root = self.insert_at(self.root, idx);
    }

    /// Remove one occurrence of `key`; returns whether an element was removed.
    pub fn remove(&mut self, key: T) -> bool {
        let (root, removed) = self.remove_at(self.root, key);
        self.root = root;
        match removed {
            Some(idx) => {
                self.free.push(idx);
                true
            }
            None => false,
        }
    }

    /// Number of stored elements strictly smaller than `key`.
    pub fn rank(&self, key: T) -> usize {
        let mut n = self.root;
        let mut acc = 0usize;
        while n != NIL {
            let node = &self.nodes[n as usize];
            if node.key < key {
                acc += self.subtree_size(node.left) as usize + 1;
                n = node.right;
            } else {
                n = node.left;
            }
        }
        acc
    }

    /// The k-th smallest stored element (0-indexed), or `None` if out of range.
    pub fn select(&self, k: usize) -> Option<T> {
        if k >= self.len() {
            return None;
        }
        let mut n = self.root;
        let mut k = k as u32;
        loop {
            let node = &self.nodes[n as usize];
            let left_size = self.subtree_size(node.left);
            if k < left_size {
                n = node.left;
            } else if k == left_size {
                return Some(node.key);
            } else {
                k -= left_size + 1;
                n = node.right;
            }
        }
    }

    // ========================================================================
    // Arena Management
    // ========================================================================

    fn alloc(&mut self, key: T) -> u32 {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx as usize] = Node::leaf(key);
                idx
            }
            None => {
                self.nodes.push(Node::leaf(key));
                (self.nodes.len() - 1) as u32
            }
        }
    }

    #[inline]
    fn subtree_size(&self, n: u32) -> u32 {
        if n == NIL {
            0
        } else {
            self.nodes[n as usize].size
        }
    }

    #[inline]
    fn subtree_height(&self, n: u32) -> i32 {
        if n == NIL {
            0
        } else {
            self.nodes[n as usize].height as i32
        }
    }

    fn refresh(&mut self, n: u32) {
        let (left, right) = {
            let node = &self.nodes[n as usize];
            (node.left, node.right)
        };
        let size = 1 + self.subtree_size(left) + self.subtree_size(right);
        let height = 1 + self.subtree_height(left).max(self.subtree_height(right));
        let node = &mut self.nodes[n as usize];
        node.size = size;
        node.height = height as u8;
    }

    // ========================================================================
    // Rotations and Rebalancing
    // ========================================================================

    fn rotate_right(&mut self, n: u32) -> u32 {
        let l = self.nodes[n as usize].left;
        let lr = self.nodes[l as usize].right;
        self.nodes[n as usize].left = lr;
        self.nodes[l as usize].right = n;
        self.refresh(n);
        self.refresh(l);
        l
    }

    fn rotate_left(&mut self, n: u32) -> u32 {
        let r = self.nodes[n as usize].right;
        let rl = self.nodes[r as usize].left;
        self.nodes[n as usize].right = rl;
        self.nodes[r as usize].left = n;
        self.refresh(n);
        self.refresh(r);
        r
    }

    /// Restore the AVL balance at `n`, returning the new subtree root.
    fn rebalance(&mut self, n: u32) -> u32 {
        self.refresh(n);
        let left = self.nodes[n as usize].left;
        let right = self.nodes[n as usize].right;
        let balance = self.subtree_height(left) - self.subtree_height(right);

        if balance > 1 {
            let ll = self.nodes[left as usize].left;
            let lr = self.nodes[left as usize].right;
            if self.subtree_height(ll) < self.subtree_height(lr) {
                let new_left = self.rotate_left(left);
                self.nodes[n as usize].left = new_left;
            }
            self.rotate_right(n)
        } else if balance < -1 {
            let rl = self.nodes[right as usize].left;
            let rr = self.nodes[right as usize].right;
            if self.subtree_height(rr) < self.subtree_height(rl) {
                let new_right = self.rotate_right(right);
                self.nodes[n as usize].right = new_right;
            }
            self.rotate_left(n)
        } else {
            n
        }
    }

    // ========================================================================
    // Insert / Remove
    // ========================================================================

    fn insert_at(&mut self, n: u32, idx: u32) -> u32 {
        if n == NIL {
            return idx;
        }
        let key = self.nodes[idx as usize].key;
        if key < self.nodes[n as usize].key {
            let child = self.insert_at(self.nodes[n as usize].left, idx);
            self.nodes[n as usize].left = child;
        } else {
            // Ties go right.
            let child = self.insert_at(self.nodes[n as usize].right, idx);
            self.nodes[n as usize].right = child;
        }
        self.rebalance(n)
    }

    fn remove_at(&mut self, n: u32, key: T) -> (u32, Option<u32>) {
        if n == NIL {
            return (NIL, None);
        }
        let node_key = self.nodes[n as usize].key;
        if key < node_key {
            let (child, removed) = self.remove_at(self.nodes[n as usize].left, key);
            self.nodes[n as usize].left = child;
            if removed.is_none() {
                return (n, None);
            }
            (self.rebalance(n), removed)
        } else if node_key < key {
            let (child, removed) = self.remove_at(self.nodes[n as usize].right, key);
            self.nodes[n as usize].right = child;
            if removed.is_none() {
                return (n, None);
            }
            (self.rebalance(n), removed)
        } else {
            let left = self.nodes[n as usize].left;
            let right = self.nodes[n as usize].right;
            if left == NIL {
                return (right, Some(n));
            }
            if right == NIL {
                return (left, Some(n));
            }
            // Two children: splice the in-order successor into this position.
            let (new_right, successor) = self.detach_min(right);
            self.nodes[successor as usize].left = left;
            self.nodes[successor as usize].right = new_right;
            (self.rebalance(successor), Some(n))
        }
    }

    /// Detach the minimum node of the subtree, returning (new subtree, node).
    fn detach_min(&mut self, n: u32) -> (u32, u32) {
        let left = self.nodes[n as usize].left;
        if left == NIL {
            let right = self.nodes[n as usize].right;
            return (right, n);
        }
        let (child, min) = self.detach_min(left);
        self.nodes[n as usize].left = child;
        (self.rebalance(n), min)
    }
}
