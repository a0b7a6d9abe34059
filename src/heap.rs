// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt::{self, Debug};
#[cfg(any(debug_assertions, feature = "dump"))]
use std::fmt::Display;

use compare::{Compare, Natural, natural};

use crate::error::{HeapError, Result};
use crate::slots::{Slot, Slots};

// The heap is a binary tree stored level by level in the live prefix of the
// slot array. The node at index `i` has its children at `2i + 1` and
// `2i + 2`, and its parent at `(i - 1) / 2`:
//
//              0
//           /     \
//         1         2
//        / \       / \
//       3   4     5   6
//
// Every node's priority is greater than or equal to the priorities of its
// children under the heap's comparator, so the greatest entry is at index 0.

fn parent(x: usize) -> usize {
    debug_assert!(x != 0);
    (x - 1) / 2
}

fn left(x: usize) -> usize { 2 * x + 1 }

fn right(x: usize) -> usize { 2 * x + 2 }

/// The first `v.len() - 1` slots form a valid heap and the last slot is to be inserted.
fn sift_up<P, V, C: Compare<P>>(v: &mut [Slot<P, V>], cmp: &C) {
    debug_assert!(v.len() > 0);
    let mut node = v.len() - 1;
    while node != 0 {
        let par = parent(node);
        // Ties stay where they are.
        if !cmp.compares_gt(&v[node].priority, &v[par].priority) { return; }
        v.swap(node, par);
        node = par;
    }
}

/// The root of an otherwise valid heap has been replaced. This function
/// restores the heap property by walking the new root down the tree.
fn sift_down<P, V, C: Compare<P>>(v: &mut [Slot<P, V>], cmp: &C) {
    let mut node = 0;
    loop {
        let l = left(node);
        let r = right(node);
        if v.len() <= l { return; } // No children. We're done.
        // Move towards the greatest of the node and its children.
        let mut next = node;
        if cmp.compares_gt(&v[l].priority, &v[next].priority) { next = l; }
        if r < v.len() && cmp.compares_gt(&v[r].priority, &v[next].priority) { next = r; }
        if next == node { return; }
        v.swap(node, next);
        node = next;
    }
}

/// A max-priority queue of `(priority, value)` entries, backed by a binary heap.
///
/// Entries are ordered by priority alone, using the comparator `C`. By default that is
/// the natural order of `P`. Values are never compared. Entries with equal priorities
/// come out in an unspecified order.
///
/// Storage is allocated lazily: an empty store holds no allocation until the first
/// `enqueue`, which allocates room for 20 entries. A full store doubles its capacity, and
/// a store that drains to one entry below half its capacity shrinks to the smallest
/// multiple of 20 that exceeds its length. `clear` releases the allocation altogether.
///
/// It is a logic error for a priority to be modified in such a way that its ordering
/// relative to any other priority, as determined by the comparator, changes while it is
/// in the store. This is normally only possible through `Cell`, `RefCell`, global state,
/// I/O, or unsafe code.
#[derive(Clone)]
pub struct HeapStore<P, V, C: Compare<P> = Natural<P>> {
    slots: Slots<P, V>,
    cmp: C,
}

impl<P: Ord, V> Default for HeapStore<P, V> {
    #[inline]
    fn default() -> HeapStore<P, V> { HeapStore::new() }
}

impl<P: Ord, V> HeapStore<P, V> {
    /// Returns an empty store ordered according to the natural order of its priorities.
    ///
    /// No storage is allocated until the first entry is enqueued.
    ///
    /// # Examples
    ///
    /// ```
    /// use heap_store::HeapStore;
    ///
    /// let store = HeapStore::<u32, &str>::new();
    /// assert!(store.is_empty());
    /// assert_eq!(store.capacity(), 0);
    /// ```
    pub fn new() -> HeapStore<P, V> { Self::with_comparator(natural()) }

    /// Returns an empty store with room for exactly `capacity` entries, ordered according
    /// to the natural order of its priorities.
    ///
    /// A `capacity` of zero leaves the store unallocated, exactly like `new`.
    ///
    /// # Examples
    ///
    /// ```
    /// use heap_store::HeapStore;
    ///
    /// let store = HeapStore::<u32, &str>::with_capacity(5);
    /// assert!(store.is_empty());
    /// assert_eq!(store.capacity(), 5);
    /// ```
    pub fn with_capacity(capacity: usize) -> HeapStore<P, V> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<P, V, C: Compare<P>> HeapStore<P, V, C> {
    /// Returns an empty store ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use heap_store::HeapStore;
    ///
    /// // Smallest priority first.
    /// let mut store = HeapStore::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// store.enqueue(3, "three");
    /// store.enqueue(1, "one");
    /// assert_eq!(store.dequeue(), Some((1, "one")));
    /// ```
    pub fn with_comparator(cmp: C) -> HeapStore<P, V, C> {
        HeapStore { slots: Slots::new(), cmp: cmp }
    }

    /// Returns an empty store with room for exactly `capacity` entries and ordered
    /// according to the given comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> HeapStore<P, V, C> {
        HeapStore { slots: Slots::with_capacity(capacity), cmp: cmp }
    }

    /// Returns an empty store ordered according to `cmp`.
    ///
    /// # Errors
    ///
    /// Returns `HeapError::InvalidArgument` if `cmp` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use heap_store::{HeapError, HeapStore};
    ///
    /// let missing: Option<fn(&u32, &u32) -> Ordering> = None;
    /// let result = HeapStore::<u32, (), _>::try_with_comparator(missing);
    /// assert_eq!(result.err(), Some(HeapError::InvalidArgument("cmp")));
    /// ```
    pub fn try_with_comparator(cmp: Option<C>) -> Result<HeapStore<P, V, C>> {
        Self::try_with_capacity_and_comparator(0, cmp)
    }

    /// Returns an empty store with room for exactly `capacity` entries and ordered
    /// according to `cmp`.
    ///
    /// # Errors
    ///
    /// Returns `HeapError::InvalidArgument` if `cmp` is `None`.
    pub fn try_with_capacity_and_comparator(capacity: usize, cmp: Option<C>)
                                            -> Result<HeapStore<P, V, C>> {
        let cmp = cmp.ok_or(HeapError::InvalidArgument("cmp"))?;
        Ok(Self::with_capacity_and_comparator(capacity, cmp))
    }

    /// Adds an entry with the given priority.
    ///
    /// Allocates the default storage on first use and doubles the storage when it is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use heap_store::HeapStore;
    ///
    /// let mut store = HeapStore::new();
    /// store.enqueue(1, "one");
    /// store.enqueue(5, "five");
    /// assert_eq!(store.count(), 2);
    /// assert_eq!(store.peek(), Some((&5, &"five")));
    /// ```
    pub fn enqueue(&mut self, priority: P, value: V) {
        debug_assert!(self.is_valid());
        self.slots.reserve_one();
        self.slots.push(Slot::new(priority, value));
        sift_up(&mut self.slots, &self.cmp);
        debug_assert!(self.is_valid());
    }

    /// Removes the entry with the greatest priority and returns it.
    ///
    /// Returns `None` if the store is empty. Removing the last entry keeps the storage
    /// allocated; removals that leave the store under-used may shrink it.
    ///
    /// # Examples
    ///
    /// ```
    /// use heap_store::HeapStore;
    ///
    /// let mut store = HeapStore::new();
    /// store.enqueue(1, "one");
    /// store.enqueue(5, "five");
    /// assert_eq!(store.dequeue(), Some((5, "five")));
    /// assert_eq!(store.dequeue(), Some((1, "one")));
    /// assert_eq!(store.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<(P, V)> {
        debug_assert!(self.is_valid());
        let top = match self.slots.len() {
            0 => None,
            1 => self.slots.pop(),
            _ => {
                let res = self.slots.take_root();
                sift_down(&mut self.slots, &self.cmp);
                self.slots.shrink_after_removal();
                Some(res)
            }
        };
        debug_assert!(self.is_valid());
        top.map(Slot::into_pair)
    }

    /// Returns references to the entry with the greatest priority.
    ///
    /// Returns `None` if the store is empty.
    pub fn peek(&self) -> Option<(&P, &V)> {
        debug_assert!(self.is_valid());
        self.slots.first().map(Slot::as_pair)
    }

    /// Removes all entries and releases the storage.
    ///
    /// The next `enqueue` allocates the default storage again, as on a new store.
    pub fn clear(&mut self) {
        self.slots.release();
    }

    /// Returns the number of entries in the store.
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of entries in the store. Same as `count`.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the store contains no entries.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of entries the store can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Renders the heap one tree level per line, root first.
    ///
    /// Entries are written as `priority:value` and separated by `", "` within a level.
    /// Available in debug builds, or in any build with the `dump` feature. The example
    /// below only runs with the feature, since doctests are always built with debug
    /// assertions even when the library is not.
    ///
    /// # Examples
    ///
    /// ```
    /// use heap_store::HeapStore;
    ///
    /// let mut store = HeapStore::new();
    /// store.enqueue(1, 'a');
    /// store.enqueue(2, 'b');
    /// store.enqueue(3, 'c');
    /// # #[cfg(feature = "dump")]
    /// assert_eq!(store.dump(), "3:c\n1:a, 2:b");
    /// ```
    #[cfg(any(debug_assertions, feature = "dump"))]
    pub fn dump(&self) -> String where P: Display, V: Display {
        crate::dump::render_levels(self.slots.iter().map(Slot::as_pair))
    }

    /// Checks if the store is valid.
    ///
    /// The store is valid if:
    ///
    /// 1. Its length does not exceed its capacity, AND
    /// 2. No entry's priority is greater than its parent's priority.
    fn is_valid(&self) -> bool {
        self.slots.len() <= self.slots.capacity() &&
        (1..self.slots.len()).all(|i| {
            !self.cmp.compares_gt(&self.slots[i].priority, &self.slots[parent(i)].priority)
        })
    }
}

impl<P: Debug, V: Debug, C: Compare<P>> Debug for HeapStore<P, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.slots.iter().map(Slot::as_pair)).finish()
    }
}

impl<P, V, C: Compare<P>> Extend<(P, V)> for HeapStore<P, V, C> {
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        for (priority, value) in iter {
            self.enqueue(priority, value);
        }
    }
}
