// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors reported while constructing a heap store.

/// Errors returned by the fallible `HeapStore` constructors.
///
/// Operations on an empty queue are not errors: `dequeue` and `peek` return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    /// A required argument was absent. Carries the argument's name.
    #[error("invalid argument: `{0}` must be supplied")]
    InvalidArgument(&'static str),
}

/// Result alias for the fallible constructors.
pub type Result<T> = std::result::Result<T, HeapError>;
