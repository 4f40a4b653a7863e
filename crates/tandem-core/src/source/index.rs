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

//! # Index Ranges
//!
//! Lazy half-open integer ranges `[start, end)` over any primitive integer
//! type. Positions carry the current integer; dereferencing returns it by
//! value, so index ranges are `Copy` and can be traversed any number of times.
//!
//! ## Usage
//!
//! ```rust
//! use tandem_core::source::index::{indices, range, range_between};
//!
//! assert_eq!(range(4).into_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//! assert_eq!(range_between(-2i64, 1).into_iter().collect::<Vec<_>>(), vec![-2, -1, 0]);
//! assert_eq!(indices(&["a", "b"]).into_iter().collect::<Vec<_>>(), vec![0, 1]);
//!
//! // Negative sizes are empty rather than an error.
//! assert_eq!(range(-3).into_iter().count(), 0);
//! ```

use crate::protocol::{Iter, Position, Range, SizedRange};
use num_traits::PrimInt;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// A half-open integer range `[start, end)`.
///
/// # Invariants
/// `start` is always less than or equal to `end`; constructors clamp
/// reversed bounds to an empty range.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IndexRange<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

impl<T> IndexRange<T>
where
    T: PrimInt,
{
    /// Creates a new `IndexRange` over `[start, end)`.
    ///
    /// If `end < start` the range is empty and starts at `start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tandem_core::source::index::IndexRange;
    ///
    /// assert_eq!(IndexRange::new(2, 5).len(), 3);
    /// assert!(IndexRange::new(5, 2).is_empty());
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Self {
            start,
            end: if end < start { start } else { end },
        }
    }

    /// Returns the first integer of the range.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive upper bound of the range.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns the number of integers in the range.
    ///
    /// # Panics
    ///
    /// Panics if the length does not fit into `usize`.
    #[inline]
    pub fn len(&self) -> usize {
        let zero = T::zero();
        let len = if self.start >= zero || self.end < zero {
            (self.end - self.start).to_usize()
        } else {
            // start < 0 <= end: count each side of zero so that nothing overflows `T`.
            let below = (zero - (self.start + T::one()))
                .to_usize()
                .and_then(|n| n.checked_add(1));
            below
                .zip(self.end.to_usize())
                .and_then(|(below, above)| below.checked_add(above))
        };
        len.expect("IndexRange: length exceeds usize::MAX")
    }

    /// Returns `true` if the range contains no integers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A position inside an [`IndexRange`]: the integer it denotes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IndexPosition<T> {
    value: T,
}

impl<T> Position for IndexPosition<T>
where
    T: PrimInt,
{
    type Item = T;

    #[inline(always)]
    fn advance(&mut self) {
        self.value = self.value + T::one();
    }

    #[inline(always)]
    fn get(&mut self) -> T {
        self.value
    }

    #[inline(always)]
    fn equals(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Range for IndexRange<T>
where
    T: PrimInt,
{
    type Item = T;
    type Position = IndexPosition<T>;

    #[inline]
    fn positions(self) -> (Self::Position, Self::Position) {
        (
            IndexPosition { value: self.start },
            IndexPosition { value: self.end },
        )
    }
}

impl<T> SizedRange for IndexRange<T>
where
    T: PrimInt,
{
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> IntoIterator for IndexRange<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = Iter<IndexPosition<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns the range `0, 1, ..., n - 1`.
///
/// Zero or negative `n` yields an empty range.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::source::index::range;
///
/// let digits: String = range(10).into_iter().map(|i| i.to_string()).collect();
/// assert_eq!(digits, "0123456789");
/// ```
#[inline]
pub fn range<T>(n: T) -> IndexRange<T>
where
    T: PrimInt,
{
    IndexRange::new(T::zero(), n)
}

/// Returns the range `start, start + 1, ..., end - 1`.
///
/// `end < start` yields an empty range.
#[inline]
pub fn range_between<T>(start: T, end: T) -> IndexRange<T>
where
    T: PrimInt,
{
    IndexRange::new(start, end)
}

/// Containers that know their number of elements.
pub trait Length {
    /// Returns the number of elements in the container.
    fn length(&self) -> usize;
}

impl<T> Length for [T] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    #[inline]
    fn length(&self) -> usize {
        N
    }
}

impl Length for str {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

macro_rules! impl_length_for {
    ($container:ident < $($param:ident),+ >) => {
        impl<$($param),+> Length for $container<$($param),+> {
            #[inline]
            fn length(&self) -> usize {
                self.len()
            }
        }
    };
}

impl_length_for!(Vec<T>);
impl_length_for!(VecDeque<T>);
impl_length_for!(BTreeSet<T>);
impl_length_for!(HashSet<T, S>);
impl_length_for!(BTreeMap<K, V>);
impl_length_for!(HashMap<K, V, S>);

/// Returns the index range `0..container.length()`.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::source::index::indices;
///
/// let names = vec!["zero", "one", "two"];
/// assert_eq!(indices(&names).into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
#[inline]
pub fn indices<C>(container: &C) -> IndexRange<usize>
where
    C: Length + ?Sized,
{
    range(container.length())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptor::enumerate::enumerate;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn collect<T: PrimInt>(r: IndexRange<T>) -> Vec<T> {
        r.into_iter().collect()
    }

    #[test]
    fn test_range_yields_zero_to_n() {
        assert_eq!(collect(range(5)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_range_zero_and_negative_are_empty() {
        assert!(collect(range(0)).is_empty());
        assert!(collect(range(-7)).is_empty());
        assert!(range(-7).is_empty());
        assert_eq!(range(-7).size(), 0);
    }

    #[test]
    fn test_range_between() {
        assert_eq!(collect(range_between(3u8, 6)), vec![3, 4, 5]);
        assert_eq!(collect(range_between(-2i32, 2)), vec![-2, -1, 0, 1]);
        assert!(collect(range_between(9, 4)).is_empty());
    }

    #[test]
    fn test_reversed_bounds_clamp_to_start() {
        let r = IndexRange::new(9, 4);
        assert_eq!(r.start(), 9);
        assert_eq!(r.end(), 9);
    }

    #[test]
    fn test_range_is_reiterable() {
        let r = range(4);
        assert_eq!(collect(r), collect(r));
    }

    #[test]
    fn test_positions_compare_by_value() {
        let (mut begin, end) = range(2).positions();
        assert!(!begin.equals(&end));
        begin.advance();
        begin.advance();
        assert!(begin.equals(&end));
    }

    #[test]
    fn test_indices_of_containers() {
        let v = vec![10, 20, 30];
        assert_eq!(collect(indices(&v)), vec![0, 1, 2]);
        assert_eq!(collect(indices(&v[..1])), vec![0]);
        assert_eq!(collect(indices("abcd")), vec![0, 1, 2, 3]);

        let map: BTreeMap<i32, &str> = [(1, "one"), (2, "two")].into_iter().collect();
        assert_eq!(indices(&map).len(), 2);

        let set: HashSet<i32> = HashSet::new();
        assert!(indices(&set).is_empty());
    }

    #[test]
    fn test_len_of_signed_range_wider_than_max() {
        assert_eq!(range_between(-100i8, 100).len(), 200);
        assert_eq!(range_between(i8::MIN, i8::MAX).len(), 255);
        assert_eq!(range_between(i8::MIN, 0).len(), 128);
        assert_eq!(range_between(i8::MIN, -1).len(), 127);
        assert_eq!(range_between(i32::MIN, i32::MAX).size(), u32::MAX as usize);
        assert_eq!(range_between(-100i8, 100).into_iter().count(), 200);
    }

    #[test]
    fn test_enumerate_full_signed_range() {
        let pairs: Vec<(usize, i8)> = enumerate(range_between(i8::MIN, i8::MAX))
            .into_iter()
            .collect();
        assert_eq!(pairs.len(), 255);
        assert_eq!(pairs[0], (0, i8::MIN));
        assert_eq!(pairs[254], (254, 126));
    }

    #[test]
    fn test_random_sizes_match_len() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let n: i64 = rng.random_range(-50..200);
            let items = collect(range(n));
            let expected: Vec<i64> = (0..n.max(0)).collect();
            assert_eq!(items, expected);
            assert_eq!(range(n).size(), n.max(0) as usize);
        }
    }
}
