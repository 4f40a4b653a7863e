// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Enumerate
//!
//! Pairs every element of a range with its position, as the composition
//! `combine((range(size), input))`. The size is computed once, eagerly, which
//! is why the input must be a [`SizedRange`]. The element half of each pair
//! keeps whatever reference-ness the input offers, so enumerating a mutable
//! view mutates the original storage.

use crate::adaptor::combine::{CombineRange, combine};
use crate::protocol::SizedRange;
use crate::source::index::{IndexRange, range};

/// The range returned by [`enumerate`].
pub type EnumerateRange<R> = CombineRange<(IndexRange<usize>, R)>;

/// Pairs every element of `input` with its zero-based index.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::adaptor::enumerate::enumerate;
/// # use tandem_core::source::slice::{const_range, range_mut};
///
/// let words = vec!["zero", "one", "two"];
/// let lines: Vec<String> = enumerate(const_range(&words))
///     .into_iter()
///     .map(|(i, s)| format!("{} : {}", i, s))
///     .collect();
/// assert_eq!(lines, vec!["0 : zero", "1 : one", "2 : two"]);
///
/// let mut owned = vec![String::from("zero"), String::from("one")];
/// for (i, s) in enumerate(range_mut(&mut owned)) {
///     *s = format!("{} : {}", i, s);
/// }
/// assert_eq!(owned, vec!["0 : zero", "1 : one"]);
/// ```
#[inline]
pub fn enumerate<R>(input: R) -> EnumerateRange<R>
where
    R: SizedRange,
{
    let size = input.size();
    log::trace!("enumerating a range of {} elements", size);
    combine((range(size), input))
}
