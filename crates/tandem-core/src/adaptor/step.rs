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

//! # Step Adaptor
//!
//! Wraps a base range and yields every `stride`-th element, starting with the
//! first. Advancing moves the base up to `stride` times and stops early,
//! without dereferencing, as soon as the base reaches its end. A short final
//! stride therefore terminates the range instead of yielding a partial
//! element.
//!
//! ## Usage
//!
//! ```rust
//! use tandem_core::adaptor::step::step;
//! use tandem_core::source::index::range;
//!
//! let evens: Vec<i32> = step(range(7), 2)?.into_iter().collect();
//! assert_eq!(evens, vec![0, 2, 4, 6]);
//!
//! assert!(step(range(7), 0).is_err());
//! # Ok::<(), tandem_core::error::RangeError>(())
//! ```

use crate::error::RangeError;
use crate::protocol::{Iter, Position, Range, SizedRange};

/// A range yielding every `stride`-th element of its base.
///
/// # Invariants
/// `stride` is at least one.
#[derive(Debug, Clone, Copy)]
pub struct StepRange<R> {
    base: R,
    stride: usize,
}

impl<R> StepRange<R>
where
    R: Range,
{
    /// Creates a new `StepRange`.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tandem_core::adaptor::step::StepRange;
    /// # use tandem_core::source::index::range;
    ///
    /// let r = StepRange::new(range(10), 3);
    /// assert_eq!(r.into_iter().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
    /// ```
    #[inline]
    pub fn new(base: R, stride: usize) -> Self {
        assert!(stride >= 1, "Invalid stride: stride must be at least 1");
        Self { base, stride }
    }

    /// Creates a new `StepRange` if `stride` is valid.
    ///
    /// Returns [`RangeError::InvalidStride`] if `stride` is zero.
    #[inline]
    pub fn try_new(base: R, stride: usize) -> Result<Self, RangeError> {
        if stride < 1 {
            log::debug!("rejecting step adaptor with stride {}", stride);
            return Err(RangeError::InvalidStride { stride });
        }
        Ok(Self { base, stride })
    }

    /// Returns the stride.
    #[inline]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the wrapped range.
    #[inline]
    pub const fn base(&self) -> &R {
        &self.base
    }

    /// Unwraps the base range.
    #[inline]
    pub fn into_base(self) -> R {
        self.base
    }
}

/// A position inside a [`StepRange`].
///
/// A live position carries the base cursor together with the base end, so it
/// can detect a short final stride. The end position is a sentinel.
#[derive(Debug, Clone)]
pub struct StepPosition<P> {
    cursor: Option<(P, P)>,
    stride: usize,
}

impl<P> Position for StepPosition<P>
where
    P: Position,
{
    type Item = P::Item;

    #[inline]
    fn advance(&mut self) {
        let (base, end) = self
            .cursor
            .as_mut()
            .expect("StepPosition: advanced an end position");
        debug_assert!(!base.equals(end), "StepPosition: advanced past the end");
        for _ in 0..self.stride {
            base.advance();
            if base.equals(end) {
                break;
            }
        }
    }

    #[inline]
    fn get(&mut self) -> P::Item {
        self.cursor
            .as_mut()
            .map(|(base, _)| base.get())
            .expect("StepPosition: dereferenced an end position")
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        match (&self.cursor, &other.cursor) {
            (Some((a, _)), Some((b, _))) => a.equals(b),
            (Some((base, end)), None) | (None, Some((base, end))) => base.equals(end),
            (None, None) => true,
        }
    }
}

impl<R> Range for StepRange<R>
where
    R: Range,
{
    type Item = R::Item;
    type Position = StepPosition<R::Position>;

    #[inline]
    fn positions(self) -> (Self::Position, Self::Position) {
        let (begin, end) = self.base.positions();
        (
            StepPosition {
                cursor: Some((begin, end)),
                stride: self.stride,
            },
            StepPosition {
                cursor: None,
                stride: self.stride,
            },
        )
    }
}

impl<R> SizedRange for StepRange<R>
where
    R: SizedRange,
{
    #[inline]
    fn size(&self) -> usize {
        self.base.size().div_ceil(self.stride)
    }
}

impl<R> IntoIterator for StepRange<R>
where
    R: Range,
{
    type Item = R::Item;
    type IntoIter = Iter<StepPosition<R::Position>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns a range yielding every `stride`-th element of `base`.
///
/// # Errors
///
/// Returns [`RangeError::InvalidStride`] if `stride` is zero.
#[inline]
pub fn step<R>(base: R, stride: usize) -> Result<StepRange<R>, RangeError>
where
    R: Range,
{
    StepRange::try_new(base, stride)
}
