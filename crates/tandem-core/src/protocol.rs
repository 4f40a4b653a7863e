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

//! # Iteration Protocol
//!
//! The minimal contract shared by every range and adaptor in this crate. A
//! [`Range`] splits into a begin/end pair of [`Position`]s; a position can be
//! advanced, dereferenced, and compared against another position of the same
//! range. All traversal state lives in the positions, so a re-iterable range
//! can hand out any number of independent traversals.
//!
//! ## Ownership
//!
//! Ranges are consumed by [`Range::positions`]. Views that can be traversed
//! more than once (index ranges, shared slices, map projections) are `Copy` or
//! `Clone`, and [`Range::begin`] / [`Range::end`] are available for them.
//! Views that hand out unique references (`&mut T`) are move-only, which makes
//! them single-pass at the type level: the borrow checker rejects a second
//! traversal instead of letting two cursors alias the same element.
//!
//! ## Preconditions
//!
//! - An end position is never dereferenced or advanced.
//! - Positions are only compared with positions of the same range.
//! - A position yielding unique references is dereferenced at most once per
//!   step.
//!
//! Violations panic; they never produce silently wrong results.
//!
//! ## Usage
//!
//! ```rust
//! use tandem_core::protocol::{Position, Range};
//! use tandem_core::source::index::range;
//!
//! let (mut begin, end) = range(3).positions();
//! let mut seen = Vec::new();
//! while !begin.equals(&end) {
//!     seen.push(begin.get());
//!     begin.advance();
//! }
//! assert_eq!(seen, vec![0, 1, 2]);
//! ```

use std::iter::FusedIterator;

/// A cursor into a range.
///
/// Implementors define how to step to the next element, how to produce the
/// element under the cursor, and when two cursors denote the same place.
pub trait Position {
    /// The element produced on dereference. May be a value, a reference, or
    /// an aggregate of references into the underlying storage.
    type Item;

    /// Moves the cursor to the next element.
    ///
    /// Must not be called on a position equal to the end of its range.
    fn advance(&mut self);

    /// Returns the element under the cursor.
    ///
    /// Must not be called on a position equal to the end of its range.
    fn get(&mut self) -> Self::Item;

    /// Returns `true` if both positions denote the same place.
    ///
    /// Only defined between positions derived from the same range.
    fn equals(&self, other: &Self) -> bool;
}

/// A lazily iterable view producing a begin/end pair of positions.
pub trait Range: Sized {
    /// The element type produced by the positions of this range.
    type Item;
    /// The cursor type of this range.
    type Position: Position<Item = Self::Item>;

    /// Consumes the range and returns its `(begin, end)` positions.
    fn positions(self) -> (Self::Position, Self::Position);

    /// Returns the position of the first element, or a position equal to
    /// [`Range::end`] if the range is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tandem_core::protocol::{Position, Range};
    /// # use tandem_core::source::index::range;
    ///
    /// let r = range(5);
    /// let mut first = r.begin();
    /// let mut second = r.begin();
    /// first.advance();
    /// assert_eq!(second.get(), 0);
    /// assert_eq!(first.get(), 1);
    /// ```
    #[inline]
    fn begin(&self) -> Self::Position
    where
        Self: Clone,
    {
        self.clone().positions().0
    }

    /// Returns the one-past-the-last position. It is never dereferenced.
    #[inline]
    fn end(&self) -> Self::Position
    where
        Self: Clone,
    {
        self.clone().positions().1
    }

    /// Consumes the range and returns a standard iterator over its elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tandem_core::protocol::Range;
    /// # use tandem_core::source::index::range;
    ///
    /// let total: i32 = range(5).iter().sum();
    /// assert_eq!(total, 10);
    /// ```
    #[inline]
    fn iter(self) -> Iter<Self::Position> {
        let (begin, end) = self.positions();
        Iter::new(begin, end)
    }
}

/// A range that can report its number of elements up front.
///
/// This is the distance computation that
/// [`enumerate`](crate::adaptor::enumerate::enumerate) requires. Ranges over
/// single-pass sources of unknown length do not implement it and are
/// therefore not enumerable.
pub trait SizedRange: Range {
    /// Returns the number of elements between begin and end.
    fn size(&self) -> usize;

    /// Returns `true` if the range yields no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Counts the advances needed to move `begin` onto `end`.
///
/// No element is dereferenced.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::protocol::{distance, Range};
/// # use tandem_core::source::index::range_between;
///
/// let (begin, end) = range_between(3, 10).positions();
/// assert_eq!(distance(begin, &end), 7);
/// ```
#[inline]
pub fn distance<P>(mut begin: P, end: &P) -> usize
where
    P: Position,
{
    let mut count = 0;
    while !begin.equals(end) {
        begin.advance();
        count += 1;
    }
    count
}

/// A standard iterator driven by a begin/end pair of positions.
///
/// Every range type in this crate converts into an `Iter` through
/// `IntoIterator`, so ranges can be used directly in `for` loops and with the
/// std iterator combinators.
#[derive(Debug, Clone)]
pub struct Iter<P> {
    current: P,
    end: P,
}

impl<P> Iter<P>
where
    P: Position,
{
    /// Creates an iterator walking from `begin` to `end`.
    #[inline]
    pub fn new(begin: P, end: P) -> Self {
        Self {
            current: begin,
            end,
        }
    }

    /// Splits the iterator back into its current and end positions.
    #[inline]
    pub fn into_positions(self) -> (P, P) {
        (self.current, self.end)
    }
}

impl<P> Iterator for Iter<P>
where
    P: Position,
{
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current.equals(&self.end) {
            return None;
        }
        let item = self.current.get();
        self.current.advance();
        Some(item)
    }
}

impl<P> FusedIterator for Iter<P> where P: Position {}
