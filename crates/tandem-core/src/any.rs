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

//! # Type-Erased Ranges
//!
//! [`AnyRange<'a, T>`] hides the concrete type of a range behind a fixed
//! interface parameterized only by the element type `T`. Functions that
//! accept an `AnyRange<'_, String>` need not be generic over the (often deeply
//! nested) adaptor type that produces the strings.
//!
//! ## Layout
//!
//! - The erased range owns the concrete range in one boxed allocation.
//! - Splitting it into positions moves the concrete begin/end pair into one
//!   boxed cursor; the erased end position is an unboxed sentinel.
//! - Two live erased positions compare by the number of times each was
//!   advanced from begin, which identifies a place within one traversal
//!   without knowing the concrete position type.
//!
//! ## Copying
//!
//! [`AnyRange`] is built from a `Clone` range and cloning it deep-copies the
//! boxed range. Ranges that are move-only, such as mutable views, are erased
//! into a [`UniqueAnyRange`], which cannot be cloned.
//!
//! ## Usage
//!
//! ```rust
//! use tandem_core::adaptor::transform::transform;
//! use tandem_core::any::{AnyRange, make_any_range};
//! use tandem_core::source::index::range;
//!
//! fn concat(strings: AnyRange<'_, String>) -> String {
//!     strings.into_iter().collect()
//! }
//!
//! let digits = transform(range(10), |i: i32| i.to_string());
//! assert_eq!(concat(make_any_range(digits)), "0123456789");
//! ```

use crate::protocol::{Iter, Position, Range, SizedRange, distance};

/// Object-safe view of a concrete begin/end pair.
trait ErasedCursor<T> {
    fn advance(&mut self);
    fn get(&mut self) -> T;
    fn at_end(&self) -> bool;
    fn offset(&self) -> usize;
}

struct Cursor<P> {
    current: P,
    end: P,
    offset: usize,
}

impl<P> ErasedCursor<P::Item> for Cursor<P>
where
    P: Position,
{
    #[inline]
    fn advance(&mut self) {
        self.current.advance();
        self.offset += 1;
    }

    #[inline]
    fn get(&mut self) -> P::Item {
        self.current.get()
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.current.equals(&self.end)
    }

    #[inline]
    fn offset(&self) -> usize {
        self.offset
    }
}

/// Object-safe view of a concrete range.
trait ErasedRange<'a, T> {
    fn split(self: Box<Self>) -> (AnyPosition<'a, T>, AnyPosition<'a, T>);
}

/// Object-safe view of a concrete range that can be deep-copied.
trait ErasedCloneRange<'a, T>: ErasedRange<'a, T> {
    fn clone_box(&self) -> Box<dyn ErasedCloneRange<'a, T> + 'a>;
}

impl<'a, R> ErasedRange<'a, R::Item> for R
where
    R: Range + 'a,
    R::Position: 'a,
{
    fn split(self: Box<Self>) -> (AnyPosition<'a, R::Item>, AnyPosition<'a, R::Item>) {
        let (begin, end) = Range::positions(*self);
        let cursor = Cursor {
            current: begin,
            end,
            offset: 0,
        };
        (
            AnyPosition {
                cursor: Some(Box::new(cursor)),
            },
            AnyPosition { cursor: None },
        )
    }
}

impl<'a, R> ErasedCloneRange<'a, R::Item> for R
where
    R: Range + Clone + 'a,
    R::Position: 'a,
{
    fn clone_box(&self) -> Box<dyn ErasedCloneRange<'a, R::Item> + 'a> {
        Box::new(self.clone())
    }
}

/// A type-erased position producing elements of type `T`.
pub struct AnyPosition<'a, T> {
    cursor: Option<Box<dyn ErasedCursor<T> + 'a>>,
}

impl<T> AnyPosition<'_, T> {
    /// Returns `true` if this is the end sentinel of its range.
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.cursor.is_none()
    }
}

impl<T> std::fmt::Debug for AnyPosition<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.cursor {
            Some(cursor) => write!(f, "AnyPosition({})", cursor.offset()),
            None => write!(f, "AnyPosition(end)"),
        }
    }
}

impl<T> Position for AnyPosition<'_, T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) {
        self.cursor
            .as_mut()
            .expect("AnyPosition: advanced an end position")
            .advance();
    }

    #[inline]
    fn get(&mut self) -> T {
        self.cursor
            .as_mut()
            .expect("AnyPosition: dereferenced an end position")
            .get()
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        match (&self.cursor, &other.cursor) {
            (Some(a), Some(b)) => a.offset() == b.offset(),
            (Some(live), None) | (None, Some(live)) => live.at_end(),
            (None, None) => true,
        }
    }
}

/// A type-erased, copyable range producing elements of type `T`.
///
/// The lifetime `'a` bounds whatever the erased range borrows.
pub struct AnyRange<'a, T> {
    inner: Box<dyn ErasedCloneRange<'a, T> + 'a>,
}

impl<'a, T> AnyRange<'a, T> {
    /// Erases the concrete type of `range`.
    pub fn new<R>(range: R) -> Self
    where
        R: Range<Item = T> + Clone + 'a,
        R::Position: 'a,
    {
        log::trace!(
            "erasing range of type {} into AnyRange",
            std::any::type_name::<R>()
        );
        Self {
            inner: Box::new(range),
        }
    }
}

impl<T> Clone for AnyRange<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl<T> std::fmt::Debug for AnyRange<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyRange").finish_non_exhaustive()
    }
}

impl<'a, T> Range for AnyRange<'a, T> {
    type Item = T;
    type Position = AnyPosition<'a, T>;

    #[inline]
    fn positions(self) -> (Self::Position, Self::Position) {
        self.inner.split()
    }
}

impl<T> SizedRange for AnyRange<'_, T> {
    /// Counts the elements of a copy of the range.
    fn size(&self) -> usize {
        let (begin, end) = self.clone().positions();
        distance(begin, &end)
    }
}

impl<'a, T> IntoIterator for AnyRange<'a, T> {
    type Item = T;
    type IntoIter = Iter<AnyPosition<'a, T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type-erased, move-only range producing elements of type `T`.
///
/// Accepts any range, including single-pass views handing out `&mut T`.
pub struct UniqueAnyRange<'a, T> {
    inner: Box<dyn ErasedRange<'a, T> + 'a>,
}

impl<'a, T> UniqueAnyRange<'a, T> {
    /// Erases the concrete type of `range`.
    pub fn new<R>(range: R) -> Self
    where
        R: Range<Item = T> + 'a,
        R::Position: 'a,
    {
        log::trace!(
            "erasing range of type {} into UniqueAnyRange",
            std::any::type_name::<R>()
        );
        Self {
            inner: Box::new(range),
        }
    }
}

impl<'a, T> From<AnyRange<'a, T>> for UniqueAnyRange<'a, T>
where
    T: 'a,
{
    #[inline]
    fn from(range: AnyRange<'a, T>) -> Self {
        Self {
            inner: Box::new(range),
        }
    }
}

impl<T> std::fmt::Debug for UniqueAnyRange<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniqueAnyRange").finish_non_exhaustive()
    }
}

impl<'a, T> Range for UniqueAnyRange<'a, T> {
    type Item = T;
    type Position = AnyPosition<'a, T>;

    #[inline]
    fn positions(self) -> (Self::Position, Self::Position) {
        self.inner.split()
    }
}

impl<'a, T> IntoIterator for UniqueAnyRange<'a, T> {
    type Item = T;
    type IntoIter = Iter<AnyPosition<'a, T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Erases the concrete type of a copyable range.
#[inline]
pub fn make_any_range<'a, R>(range: R) -> AnyRange<'a, R::Item>
where
    R: Range + Clone + 'a,
    R::Position: 'a,
{
    AnyRange::new(range)
}

/// Erases the concrete type of any range, including move-only ones.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::any::{UniqueAnyRange, make_unique_any_range};
/// # use tandem_core::adaptor::enumerate::enumerate;
/// # use tandem_core::source::slice::range_mut;
///
/// fn reset(slots: UniqueAnyRange<'_, (usize, &mut i32)>) {
///     for (i, slot) in slots {
///         *slot = i as i32;
///     }
/// }
///
/// let mut data = vec![7, 7, 7];
/// reset(make_unique_any_range(enumerate(range_mut(&mut data))));
/// assert_eq!(data, vec![0, 1, 2]);
/// ```
#[inline]
pub fn make_unique_any_range<'a, R>(range: R) -> UniqueAnyRange<'a, R::Item>
where
    R: Range + 'a,
    R::Position: 'a,
{
    UniqueAnyRange::new(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptor::combine::combine;
    use crate::adaptor::enumerate::enumerate;
    use crate::adaptor::step::step;
    use crate::adaptor::transform::transform;
    use crate::source::index::range;
    use crate::source::map::keys;
    use crate::source::slice::{const_range, range_mut};
    use std::collections::BTreeMap;

    fn consume_any_string_range(strings: AnyRange<'_, String>) -> String {
        let mut result = String::new();
        for s in strings {
            result += &s;
        }
        result
    }

    #[test]
    fn test_any_range_hides_transform() {
        let transformed = transform(range(10), |i: i32| i.to_string());
        let any = make_any_range(transformed);
        assert_eq!(consume_any_string_range(any), "0123456789");
    }

    #[test]
    fn test_heterogeneous_producers_share_one_type() {
        let names = vec![String::from("x"), String::from("y")];
        let producers: Vec<AnyRange<'_, String>> = vec![
            make_any_range(transform(range(3), |i: i32| i.to_string())),
            make_any_range(transform(const_range(&names), |s: &String| s.clone())),
            make_any_range(transform(step(range(9), 4).unwrap(), |i: i32| {
                format!("<{}>", i)
            })),
        ];
        let results: Vec<String> = producers.into_iter().map(consume_any_string_range).collect();
        assert_eq!(results, vec!["012", "xy", "<0><4><8>"]);
    }

    #[test]
    fn test_erasure_is_transparent() {
        let map = BTreeMap::from([(5, ()), (2, ()), (9, ())]);
        let concrete = combine((range(10), keys(&map)));
        let direct: Vec<_> = concrete.clone().into_iter().collect();
        let erased: Vec<_> = make_any_range(concrete).into_iter().collect();
        assert_eq!(direct, erased);
    }

    #[test]
    fn test_clone_is_deep_copy() {
        let any = make_any_range(range(4));
        let copy = any.clone();
        let (mut begin, end) = any.positions();
        begin.advance();
        assert!(!begin.equals(&end));
        // The copy starts its own traversal from the beginning.
        assert_eq!(copy.into_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_any_range_composes_further() {
        let any = make_any_range(transform(range(5), |i: i32| i * i));
        let lengths: Vec<usize> = transform(any, |sq: i32| sq.to_string().len())
            .into_iter()
            .collect();
        assert_eq!(lengths, vec![1, 1, 1, 1, 2]);
    }

    #[test]
    fn test_enumerate_any_range() {
        let any = make_any_range(transform(range(3), |i: i32| i * 10));
        assert_eq!(any.size(), 3);
        let pairs: Vec<_> = enumerate(any).into_iter().collect();
        assert_eq!(pairs, vec![(0, 0), (1, 10), (2, 20)]);
    }

    #[test]
    fn test_positions_compare_by_offset() {
        let any = make_any_range(range(3));
        let mut a = any.begin();
        let mut b = any.begin();
        let end = any.end();
        assert!(a.equals(&b));
        a.advance();
        assert!(!a.equals(&b));
        b.advance();
        assert!(a.equals(&b));
        assert!(end.is_sentinel());
        assert!(!a.is_sentinel());
        a.advance();
        a.advance();
        assert!(a.equals(&end));
        assert!(end.equals(&a));
    }

    #[test]
    fn test_empty_erased_range() {
        let any = make_any_range(range(0));
        assert!(any.begin().equals(&any.end()));
        assert!(any.is_empty());
    }

    #[test]
    fn test_unique_any_range_mutates_storage() {
        let mut data = vec![1, 2, 3];
        let unique = make_unique_any_range(range_mut(&mut data));
        for v in unique {
            *v *= 2;
        }
        assert_eq!(data, vec![2, 4, 6]);
    }

    #[test]
    fn test_any_range_into_unique() {
        let unique: UniqueAnyRange<'_, i32> = make_any_range(range(3)).into();
        assert_eq!(unique.into_iter().sum::<i32>(), 3);
    }

    #[test]
    #[should_panic(expected = "dereferenced an end position")]
    fn test_dereferencing_sentinel_panics() {
        let any = make_any_range(range(2));
        let mut end = any.end();
        end.get();
    }

    #[test]
    fn test_debug_output() {
        let any = make_any_range(range(2));
        assert_eq!(format!("{:?}", any.begin()), "AnyPosition(0)");
        assert_eq!(format!("{:?}", any.end()), "AnyPosition(end)");
    }
}
