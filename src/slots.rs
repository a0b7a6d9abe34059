// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Backing storage for the heap store.
//
// The live entries occupy a dense prefix `[0, len)`. The slots in
// `[len, capacity)` are scratch space that the resize policy below reasons
// about. `Vec` is free to over-allocate, so the logical capacity is tracked
// separately from the vector's own capacity and only ever changes through
// `reallocate` or `release`.

use std::ops::{Deref, DerefMut};

use log::debug;

/// Capacity of a freshly allocated store. Also the block size that shrinking rounds up to.
pub const DEFAULT_CAPACITY: usize = 20;

/// One array slot: a priority and its value, moved together on every swap.
#[derive(Clone, Debug)]
pub struct Slot<P, V> {
    pub priority: P,
    pub value: V,
}

impl<P, V> Slot<P, V> {
    pub fn new(priority: P, value: V) -> Slot<P, V> {
        Slot { priority: priority, value: value }
    }

    pub fn into_pair(self) -> (P, V) {
        (self.priority, self.value)
    }

    pub fn as_pair(&self) -> (&P, &V) {
        (&self.priority, &self.value)
    }
}

#[derive(Clone)]
pub struct Slots<P, V> {
    live: Vec<Slot<P, V>>,
    capacity: usize,
}

impl<P, V> Slots<P, V> {
    /// An unallocated store.
    pub fn new() -> Slots<P, V> {
        Slots { live: Vec::new(), capacity: 0 }
    }

    pub fn with_capacity(capacity: usize) -> Slots<P, V> {
        Slots { live: Vec::with_capacity(capacity), capacity: capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_allocated(&self) -> bool {
        self.capacity != 0
    }

    pub fn is_full(&self) -> bool {
        self.live.len() == self.capacity
    }

    /// Appends a slot after the live prefix. The caller makes room first.
    pub fn push(&mut self, slot: Slot<P, V>) {
        debug_assert!(self.live.len() < self.capacity);
        self.live.push(slot);
    }

    pub fn pop(&mut self) -> Option<Slot<P, V>> {
        self.live.pop()
    }

    /// Removes the root and moves the last live slot into its place.
    pub fn take_root(&mut self) -> Slot<P, V> {
        self.live.swap_remove(0)
    }

    /// Moves the live prefix into a fresh allocation of exactly `capacity` slots.
    pub fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.live.len());
        let mut live = Vec::with_capacity(capacity);
        live.append(&mut self.live);
        self.live = live;
        self.capacity = capacity;
    }

    /// Drops every slot and the allocation behind them.
    pub fn release(&mut self) {
        self.live = Vec::new();
        self.capacity = 0;
    }

    /// Makes room for one more slot: allocates the default store when
    /// unallocated, otherwise doubles when full.
    pub fn reserve_one(&mut self) {
        if !self.is_allocated() {
            debug!("allocating {} slots", DEFAULT_CAPACITY);
            self.reallocate(DEFAULT_CAPACITY);
        } else if self.is_full() {
            let grown = grown_capacity(self.live.len());
            debug!("growing from {} to {} slots ({} live)", self.capacity, grown, self.live.len());
            self.reallocate(grown);
        }
    }

    /// Shrinks the store if the last removal just crossed the shrink boundary.
    pub fn shrink_after_removal(&mut self) {
        if let Some(target) = shrink_target(self.capacity, self.live.len()) {
            debug!("shrinking from {} to {} slots ({} live)", self.capacity, target, self.live.len());
            self.reallocate(target);
        }
    }
}

impl<P, V> Deref for Slots<P, V> {
    type Target = [Slot<P, V>];
    fn deref(&self) -> &[Slot<P, V>] { &self.live }
}

impl<P, V> DerefMut for Slots<P, V> {
    fn deref_mut(&mut self) -> &mut [Slot<P, V>] { &mut self.live }
}

/// Capacity to grow to when a store holding `count` entries is full.
pub fn grown_capacity(count: usize) -> usize {
    count.max(1) * 2
}

/// Capacity to shrink to after a removal leaves `count` entries in a store of `capacity` slots.
///
/// Fires only when `count` sits exactly one below half the capacity, and only if the
/// block-rounded target is smaller than the current capacity.
pub fn shrink_target(capacity: usize, count: usize) -> Option<usize> {
    if capacity / 2 != count + 1 {
        return None;
    }
    let target = (count / DEFAULT_CAPACITY + 1) * DEFAULT_CAPACITY;
    if target >= capacity { None } else { Some(target) }
}
