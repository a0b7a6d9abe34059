// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A max-priority queue of `(priority, value)` entries implemented with a binary heap.
//!
//! A [`HeapStore`](struct.HeapStore.html) always hands out the pending entry with the
//! greatest priority first. Priorities are ordered by their natural order or by any
//! [`Compare`][compare] implementation, including plain closures. Values are carried
//! along and never compared.
//!
//! Enqueueing and dequeueing are `O(log n)`; peeking is `O(1)`. The backing storage grows
//! by doubling and shrinks in blocks of 20 entries, so resizing is amortized `O(1)`.
//!
//! # Examples
//!
//! ```
//! use heap_store::HeapStore;
//!
//! let mut store = HeapStore::new();
//! store.enqueue(100, "One Hundred");
//! store.enqueue(1, "One");
//! store.enqueue(75, "Seventy Five");
//!
//! assert_eq!(store.dequeue(), Some((100, "One Hundred")));
//! assert_eq!(store.dequeue(), Some((75, "Seventy Five")));
//! assert_eq!(store.dequeue(), Some((1, "One")));
//! assert_eq!(store.dequeue(), None);
//! ```
//!
//! Resizes are reported through the [`log`][log] facade at debug level.
//!
//! [compare]: https://docs.rs/compare
//! [log]: https://docs.rs/log

mod error;
mod heap;
mod slots;
#[cfg(any(debug_assertions, feature = "dump"))]
pub mod dump;
pub mod split;
#[cfg(test)]
mod testing;

pub use crate::error::{HeapError, Result};
pub use crate::heap::HeapStore;
pub use crate::slots::DEFAULT_CAPACITY;
