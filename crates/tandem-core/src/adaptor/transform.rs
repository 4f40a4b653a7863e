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

//! # Transform Adaptor
//!
//! Applies a function to each element of a base range on dereference. The
//! function is captured once and shared by every position derived from the
//! range; results are never cached, so the function runs on each dereference.
//!
//! The output type is whatever the function returns. Returning a reference,
//! or an aggregate holding references back into the element, turns the
//! transform into a repackaging view that still permits mutating the
//! original data.
//!
//! ## Usage
//!
//! ```rust
//! use tandem_core::adaptor::transform::transform;
//! use tandem_core::source::index::range;
//! use tandem_core::source::slice::range_mut;
//!
//! let digits: String = transform(range(10), |i: i32| i.to_string()).into_iter().collect();
//! assert_eq!(digits, "0123456789");
//!
//! let mut values = vec![1, 2, 3];
//! for (original, dummy) in transform(range_mut(&mut values), |v| (v, 3)) {
//!     *original += 1;
//!     assert_eq!(dummy, 3);
//! }
//! assert_eq!(values, vec![2, 3, 4]);
//! ```

use crate::protocol::{Iter, Position, Range, SizedRange};
use std::rc::Rc;

/// A range that maps each element of its base through a function.
pub struct TransformRange<R, F> {
    base: R,
    func: Rc<F>,
}

impl<R, F> TransformRange<R, F> {
    /// Creates a new `TransformRange`.
    #[inline]
    pub fn new(base: R, func: F) -> Self {
        Self {
            base,
            func: Rc::new(func),
        }
    }

    /// Returns the wrapped range.
    #[inline]
    pub const fn base(&self) -> &R {
        &self.base
    }
}

impl<R, F> Clone for TransformRange<R, F>
where
    R: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            func: Rc::clone(&self.func),
        }
    }
}

impl<R, F> std::fmt::Debug for TransformRange<R, F>
where
    R: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformRange")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

/// A position inside a [`TransformRange`].
pub struct TransformPosition<P, F> {
    base: P,
    func: Rc<F>,
}

impl<P, F> Clone for TransformPosition<P, F>
where
    P: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            func: Rc::clone(&self.func),
        }
    }
}

impl<P, F> std::fmt::Debug for TransformPosition<P, F>
where
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformPosition")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl<P, F, O> Position for TransformPosition<P, F>
where
    P: Position,
    F: Fn(P::Item) -> O,
{
    type Item = O;

    #[inline]
    fn advance(&mut self) {
        self.base.advance();
    }

    #[inline]
    fn get(&mut self) -> O {
        (self.func)(self.base.get())
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.base.equals(&other.base)
    }
}

impl<R, F, O> Range for TransformRange<R, F>
where
    R: Range,
    F: Fn(R::Item) -> O,
{
    type Item = O;
    type Position = TransformPosition<R::Position, F>;

    #[inline]
    fn positions(self) -> (Self::Position, Self::Position) {
        let (begin, end) = self.base.positions();
        (
            TransformPosition {
                base: begin,
                func: Rc::clone(&self.func),
            },
            TransformPosition {
                base: end,
                func: self.func,
            },
        )
    }
}

impl<R, F, O> SizedRange for TransformRange<R, F>
where
    R: SizedRange,
    F: Fn(R::Item) -> O,
{
    #[inline]
    fn size(&self) -> usize {
        self.base.size()
    }
}

impl<R, F, O> IntoIterator for TransformRange<R, F>
where
    R: Range,
    F: Fn(R::Item) -> O,
{
    type Item = O;
    type IntoIter = Iter<TransformPosition<R::Position, F>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns a range applying `func` to every element of `base`.
#[inline]
pub fn transform<R, F, O>(base: R, func: F) -> TransformRange<R, F>
where
    R: Range,
    F: Fn(R::Item) -> O,
{
    TransformRange::new(base, func)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::index::range;
    use crate::source::slice::{const_range, range_mut};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::cell::Cell;

    #[test]
    fn test_int_as_string() {
        let transformed = transform(range(10), |i: i32| i.to_string());
        let result: String = transformed.into_iter().collect();
        assert_eq!(result, "0123456789");
    }

    #[test]
    fn test_modifying_int_through_tuple() {
        let mut values = vec![1, 2, 3];
        for (original, dummy) in transform(range_mut(&mut values), |v| (v, 3)) {
            *original += 1;
            assert_eq!(dummy, 3);
        }
        assert_eq!(values, vec![2, 3, 4]);
    }

    #[test]
    fn test_function_runs_on_every_dereference() {
        let calls = Cell::new(0);
        let r = transform(range(3), |i: i32| {
            calls.set(calls.get() + 1);
            i * 2
        });
        let mut begin = r.begin();
        assert_eq!(begin.get(), 0);
        assert_eq!(begin.get(), 0);
        assert_eq!(calls.get(), 2);

        // Advancing and comparing never invoke the function.
        begin.advance();
        assert!(!begin.equals(&r.end()));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_function_is_shared_between_positions() {
        let r = transform(range(4), |i: i32| i + 100);
        let (begin, end) = r.clone().positions();
        assert!(Rc::ptr_eq(&begin.func, &end.func));
        assert!(Rc::ptr_eq(&begin.func, &r.func));
    }

    #[test]
    fn test_size_delegates_to_base() {
        let data = ["a", "bb"];
        assert_eq!(transform(const_range(&data), |s| s.len()).size(), 2);
    }

    #[test]
    fn test_composition_matches_direct_application() {
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        for _ in 0..50 {
            let n: i64 = rng.random_range(0..40);
            let a: i64 = rng.random_range(-5..5);
            let b: i64 = rng.random_range(-5..5);
            let f = move |x: i64| x * a + 1;
            let g = move |x: i64| x - b;

            let stacked: Vec<i64> = transform(transform(range(n), f), g).into_iter().collect();
            let direct: Vec<i64> = transform(range(n), move |x| g(f(x))).into_iter().collect();
            assert_eq!(stacked, direct);
        }
    }
}
