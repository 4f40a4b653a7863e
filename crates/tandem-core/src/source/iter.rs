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

//! # Iterator Sources
//!
//! Adapts any standard iterator into a range. The iterator is pulled one
//! element ahead so that a position can report whether it has reached the end
//! without being dereferenced, and each position remembers how many times it
//! was advanced so that two live positions of the same range can be compared.
//!
//! How the element under the cursor is handed out is chosen by an [`Access`]
//! mode. [`Shared`] clones it, so a position can be dereferenced any number of
//! times; this is what `iter_range` and the read-only map views use.
//! [`Once`] moves it out, so no two `&mut T` to the same element can ever
//! coexist; every view in this crate that hands out unique references is
//! built on it.
//!
//! ## Usage
//!
//! ```rust
//! use tandem_core::source::iter::iter_range;
//!
//! let words = "lazy range views".split(' ');
//! let lengths: Vec<usize> = iter_range(words).into_iter().map(str::len).collect();
//! assert_eq!(lengths, vec![4, 5, 5]);
//! ```

use crate::protocol::{Iter, Position, Range, SizedRange};
use std::marker::PhantomData;

/// The way an [`IterPosition`] hands out its buffered element.
pub trait Access<T> {
    /// Produces the element held in `slot`, or `None` if there is none left.
    fn access(slot: &mut Option<T>) -> Option<T>;
}

/// Moves the element out on dereference. A second dereference at the same
/// step panics.
#[derive(Debug, Clone, Copy)]
pub enum Once {}

impl<T> Access<T> for Once {
    #[inline(always)]
    fn access(slot: &mut Option<T>) -> Option<T> {
        slot.take()
    }
}

/// Clones the element on every dereference.
#[derive(Debug, Clone, Copy)]
pub enum Shared {}

impl<T> Access<T> for Shared
where
    T: Clone,
{
    #[inline(always)]
    fn access(slot: &mut Option<T>) -> Option<T> {
        slot.clone()
    }
}

/// A position over a standard iterator.
///
/// The end position is a sentinel that holds no iterator; it is equal to any
/// position whose iterator is exhausted.
pub struct IterPosition<I, A>
where
    I: Iterator,
{
    source: Option<I>,
    current: Option<I::Item>,
    offset: usize,
    exhausted: bool,
    access: PhantomData<A>,
}

impl<I, A> IterPosition<I, A>
where
    I: Iterator,
{
    /// Returns the `(begin, end)` positions over `iter`.
    ///
    /// The first element is pulled eagerly.
    #[inline]
    pub fn bounds(mut iter: I) -> (Self, Self) {
        let current = iter.next();
        let begin = Self {
            exhausted: current.is_none(),
            source: Some(iter),
            current,
            offset: 0,
            access: PhantomData,
        };
        (begin, Self::sentinel())
    }

    #[inline]
    fn sentinel() -> Self {
        Self {
            source: None,
            current: None,
            offset: 0,
            exhausted: true,
            access: PhantomData,
        }
    }

    /// Returns how many times this position has been advanced.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` if the underlying iterator has no element left.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<I, A> Clone for IterPosition<I, A>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            current: self.current.clone(),
            offset: self.offset,
            exhausted: self.exhausted,
            access: PhantomData,
        }
    }
}

impl<I, A> std::fmt::Debug for IterPosition<I, A>
where
    I: Iterator,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IterPosition")
            .field("offset", &self.offset)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

impl<I, A> Position for IterPosition<I, A>
where
    I: Iterator,
    A: Access<I::Item>,
{
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) {
        assert!(!self.exhausted, "IterPosition: advanced past the end");
        if let Some(source) = self.source.as_mut() {
            self.current = source.next();
            self.exhausted = self.current.is_none();
            self.offset += 1;
        }
    }

    #[inline]
    fn get(&mut self) -> I::Item {
        A::access(&mut self.current).expect(
            "IterPosition: dereferenced an end position or an element that was already handed out",
        )
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        match (self.exhausted, other.exhausted) {
            (true, true) => true,
            (false, false) => self.offset == other.offset,
            _ => false,
        }
    }
}

/// A range over a standard iterator.
///
/// Re-iterable when the iterator is `Clone`; otherwise single-pass.
#[derive(Debug, Clone)]
pub struct IterRange<I, A> {
    iter: I,
    access: PhantomData<A>,
}

impl<I, A> IterRange<I, A>
where
    I: Iterator,
{
    /// Creates a new `IterRange` over `iter`.
    #[inline]
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            access: PhantomData,
        }
    }
}

impl<I, A> Range for IterRange<I, A>
where
    I: Iterator,
    A: Access<I::Item>,
{
    type Item = I::Item;
    type Position = IterPosition<I, A>;

    #[inline]
    fn positions(self) -> (Self::Position, Self::Position) {
        IterPosition::bounds(self.iter)
    }
}

/// The size is the number of elements a clone of the iterator yields. Exact
/// size hints are taken as they are.
impl<I, A> SizedRange for IterRange<I, A>
where
    I: Iterator + Clone,
    A: Access<I::Item>,
{
    #[inline]
    fn size(&self) -> usize {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => lower,
            _ => self.iter.clone().count(),
        }
    }
}

impl<I, A> IntoIterator for IterRange<I, A>
where
    I: Iterator,
    A: Access<I::Item>,
{
    type Item = I::Item;
    type IntoIter = Iter<IterPosition<I, A>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Wraps anything iterable as a range whose positions can be dereferenced
/// repeatedly.
#[inline]
pub fn iter_range<I>(iterable: I) -> IterRange<I::IntoIter, Shared>
where
    I: IntoIterator,
    I::Item: Clone,
{
    IterRange::new(iterable.into_iter())
}

/// Wraps anything iterable as a range that hands each element out once.
///
/// Accepts elements that cannot be cloned, such as `&mut T`.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::source::iter::iter_range_once;
///
/// let mut data = vec![1, 2, 3];
/// for value in iter_range_once(data.iter_mut()) {
///     *value *= 10;
/// }
/// assert_eq!(data, vec![10, 20, 30]);
/// ```
#[inline]
pub fn iter_range_once<I>(iterable: I) -> IterRange<I::IntoIter, Once>
where
    I: IntoIterator,
{
    IterRange::new(iterable.into_iter())
}
