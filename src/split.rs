// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Splitting a sequence of strings into keyed groups.
//!
//! # Examples
//!
//! ```
//! use heap_store::split::then_split;
//!
//! let groups: Vec<_> = then_split(vec!["a,b", "c"], ',').collect();
//! assert_eq!(groups[0].key(), "a,b");
//! assert_eq!(groups[0].parts(), &["a", "b"]);
//! assert_eq!(groups[1].parts(), &["c"]);
//! ```

use std::slice;
use std::vec;

/// A string together with the parts it was split into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grouping {
    key: String,
    parts: Vec<String>,
}

impl Grouping {
    /// Splits `key` on `separator`. Empty parts are kept.
    pub fn new(key: String, separator: char) -> Grouping {
        let parts = key.split(separator).map(String::from).collect();
        Grouping { key: key, parts: parts }
    }

    /// Returns the original, unsplit string.
    pub fn key(&self) -> &str { &self.key }

    /// Returns the parts in the order they appear in the key.
    pub fn parts(&self) -> &[String] { &self.parts }

    /// Returns the number of parts. An empty key still has one, empty, part.
    pub fn len(&self) -> usize { self.parts.len() }

    /// Returns `true` if there are no parts.
    pub fn is_empty(&self) -> bool { self.parts.is_empty() }

    /// Returns an iterator over the parts.
    pub fn iter(&self) -> Parts<'_> { Parts(self.parts.iter()) }
}

/// Returns one `Grouping` per input string, in input order.
pub fn then_split<I>(strings: I, separator: char) -> ThenSplit<I::IntoIter>
    where I: IntoIterator, I::Item: Into<String>
{
    ThenSplit { strings: strings.into_iter(), separator: separator }
}

/// An iterator of `Grouping`s.
///
/// Acquire through [`then_split`](fn.then_split.html).
#[derive(Clone)]
pub struct ThenSplit<I> {
    strings: I,
    separator: char,
}

impl<I> Iterator for ThenSplit<I> where I: Iterator, I::Item: Into<String> {
    type Item = Grouping;
    fn next(&mut self) -> Option<Grouping> {
        let separator = self.separator;
        self.strings.next().map(|s| Grouping::new(s.into(), separator))
    }
    fn size_hint(&self) -> (usize, Option<usize>) { self.strings.size_hint() }
}

/// An iterator over the parts of a `Grouping`.
pub struct Parts<'a>(slice::Iter<'a, String>);

impl<'a> Iterator for Parts<'a> {
    type Item = &'a str;
    #[inline] fn next(&mut self) -> Option<&'a str> { self.0.next().map(|s| &s[..]) }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a> DoubleEndedIterator for Parts<'a> {
    fn next_back(&mut self) -> Option<&'a str> { self.0.next_back().map(|s| &s[..]) }
}

impl<'a> ExactSizeIterator for Parts<'a> {}

/// A consuming iterator over the parts of a `Grouping`.
pub struct IntoParts(vec::IntoIter<String>);

impl Iterator for IntoParts {
    type Item = String;
    fn next(&mut self) -> Option<String> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl DoubleEndedIterator for IntoParts {
    fn next_back(&mut self) -> Option<String> { self.0.next_back() }
}

impl ExactSizeIterator for IntoParts {}

impl IntoIterator for Grouping {
    type Item = String;
    type IntoIter = IntoParts;
    fn into_iter(self) -> IntoParts { IntoParts(self.parts.into_iter()) }
}

impl<'a> IntoIterator for &'a Grouping {
    type Item = &'a str;
    type IntoIter = Parts<'a>;
    fn into_iter(self) -> Parts<'a> { self.iter() }
}

#[cfg(test)]
mod test {
    use super::then_split;

    #[test]
    fn test_keys_and_parts() {
        let groups: Vec<_> = then_split(vec!["x:y:z", "w"], ':').collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key(), "x:y:z");
        assert_eq!(groups[0].iter().collect::<Vec<_>>(), vec!["x", "y", "z"]);
        assert_eq!(groups[1].key(), "w");
        assert_eq!(groups[1].len(), 1);
    }

    #[test]
    fn test_empty_parts_kept() {
        let group = then_split(vec![String::from(",a,,")], ',').next().unwrap();
        assert_eq!(group.parts(), &["", "a", "", ""]);

        let group = then_split(vec![""], ',').next().unwrap();
        assert_eq!(group.parts(), &[""]);
        assert_eq!(group.len(), 1);
        assert!(!group.is_empty());
    }

    #[test]
    fn test_into_iter() {
        let group = then_split(Some("1 2"), ' ').next().unwrap();
        let borrowed: Vec<&str> = (&group).into_iter().rev().collect();
        assert_eq!(borrowed, vec!["2", "1"]);
        let owned: Vec<String> = group.into_iter().collect();
        assert_eq!(owned, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_no_input() {
        assert_eq!(then_split(Vec::<String>::new(), ',').count(), 0);
    }
}
