// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Level-by-level text rendering of a heap array.
//!
//! Row `r` holds the entries at indices `2^r - 1 ..= 2^(r+1) - 2`. Entries are written as
//! `priority:value`, separated by `", "` within a row, and rows are separated by `'\n'`.
//! There is no trailing line break.
//!
//! ```text
//! 100:One Hundred
//! 75:Seventy Five, 64:Sixty Four
//! 1:One, 32:Thirty Two, 5:Five, 18:Eighteen
//! ```

use std::fmt::{Display, Write};

/// Renders `(priority, value)` pairs, given in array order, one heap level per line.
pub fn render_levels<'a, P, V, I>(entries: I) -> String
    where P: 'a + Display, V: 'a + Display, I: IntoIterator<Item = (&'a P, &'a V)>
{
    let mut out = String::new();
    for (index, (priority, value)) in entries.into_iter().enumerate() {
        // The first index of every row is one less than a power of two.
        if (index + 1).is_power_of_two() {
            if index != 0 { out.push('\n'); }
        } else {
            out.push_str(", ");
        }
        // Writing into a `String` cannot fail.
        let _ = write!(out, "{}:{}", priority, value);
    }
    out
}
