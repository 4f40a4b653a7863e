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

//! # Slice Views
//!
//! Element views over contiguous storage. [`const_range`] borrows a slice
//! immutably and can be traversed any number of times; [`range_mut`] borrows
//! it mutably and yields `&mut T`, which makes it a single-pass, move-only
//! range. Both views only borrow: the borrow checker guarantees the storage
//! outlives every adaptor stacked on top.
//!
//! ## Usage
//!
//! ```rust
//! use tandem_core::source::slice::{const_range, range_mut};
//!
//! let mut values = vec![1, 2, 3];
//! for v in range_mut(&mut values) {
//!     *v += 1;
//! }
//! assert_eq!(const_range(&values).into_iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
//! ```

use crate::protocol::{Iter, Position, Range, SizedRange};
use crate::source::iter::{IterPosition, Once};

/// A read-only view over a slice.
#[derive(Debug)]
pub struct SliceRange<'a, T> {
    items: &'a [T],
}

impl<T> Clone for SliceRange<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceRange<'_, T> {}

impl<'a, T> SliceRange<'a, T> {
    /// Creates a new `SliceRange` over `items`.
    #[inline]
    pub const fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// Returns the viewed slice.
    #[inline]
    pub const fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

/// A position inside a [`SliceRange`].
#[derive(Debug)]
pub struct SlicePosition<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<T> Clone for SlicePosition<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlicePosition<'_, T> {}

impl<T> SlicePosition<'_, T> {
    /// Returns the index of the element under the cursor.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl<'a, T> Position for SlicePosition<'a, T> {
    type Item = &'a T;

    #[inline(always)]
    fn advance(&mut self) {
        debug_assert!(
            self.index < self.items.len(),
            "SlicePosition: advanced past the end"
        );
        self.index += 1;
    }

    #[inline(always)]
    fn get(&mut self) -> &'a T {
        self.items
            .get(self.index)
            .expect("SlicePosition: dereferenced an end position")
    }

    #[inline(always)]
    fn equals(&self, other: &Self) -> bool {
        debug_assert!(
            std::ptr::eq(self.items, other.items),
            "SlicePosition: compared positions of different ranges"
        );
        self.index == other.index
    }
}

impl<'a, T> Range for SliceRange<'a, T> {
    type Item = &'a T;
    type Position = SlicePosition<'a, T>;

    #[inline]
    fn positions(self) -> (Self::Position, Self::Position) {
        (
            SlicePosition {
                items: self.items,
                index: 0,
            },
            SlicePosition {
                items: self.items,
                index: self.items.len(),
            },
        )
    }
}

impl<T> SizedRange for SliceRange<'_, T> {
    #[inline]
    fn size(&self) -> usize {
        self.items.len()
    }
}

impl<'a, T> IntoIterator for SliceRange<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<SlicePosition<'a, T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A mutable view over a slice.
///
/// Yields `&mut T`; single-pass, since handing out the same unique reference
/// twice is impossible.
#[derive(Debug)]
pub struct SliceRangeMut<'a, T> {
    items: &'a mut [T],
}

impl<'a, T> SliceRangeMut<'a, T> {
    /// Creates a new `SliceRangeMut` over `items`.
    #[inline]
    pub fn new(items: &'a mut [T]) -> Self {
        Self { items }
    }
}

impl<'a, T> Range for SliceRangeMut<'a, T> {
    type Item = &'a mut T;
    type Position = IterPosition<std::slice::IterMut<'a, T>, Once>;

    #[inline]
    fn positions(self) -> (Self::Position, Self::Position) {
        IterPosition::bounds(self.items.iter_mut())
    }
}

impl<T> SizedRange for SliceRangeMut<'_, T> {
    #[inline]
    fn size(&self) -> usize {
        self.items.len()
    }
}

impl<'a, T> IntoIterator for SliceRangeMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = Iter<IterPosition<std::slice::IterMut<'a, T>, Once>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns a read-only view over `items`.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::source::slice::const_range;
///
/// let words = vec!["zero".to_string(), "one".to_string()];
/// let view = const_range(&words);
/// assert_eq!(view.into_iter().count(), 2);
/// assert_eq!(view.into_iter().next().map(String::as_str), Some("zero"));
/// ```
#[inline]
pub fn const_range<T>(items: &[T]) -> SliceRange<'_, T> {
    SliceRange::new(items)
}

/// Returns a mutable view over `items`.
#[inline]
pub fn range_mut<T>(items: &mut [T]) -> SliceRangeMut<'_, T> {
    SliceRangeMut::new(items)
}
