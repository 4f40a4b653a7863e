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

//! # Combine Adaptor
//!
//! Walks two or more ranges in lock-step and yields tuples of their elements.
//! Each tuple field is whatever its base produces: a reference into the
//! original storage when the base yields references (so mutation through the
//! combined view reaches the storage), or a value when the base yields
//! values. Tuples are built on every dereference and never stored.
//!
//! Two combined positions are equal as soon as **any** pair of corresponding
//! base positions is equal. Comparing against the end position therefore
//! stops at the shortest base, without a separate counter.
//!
//! ## Usage
//!
//! ```rust
//! use tandem_core::combine;
//! use tandem_core::source::index::range;
//! use tandem_core::source::slice::const_range;
//!
//! let letters = ["a", "b", "c", "d"];
//! let pairs: Vec<(i32, &&str)> = combine!(range(3), const_range(&letters))
//!     .into_iter()
//!     .collect();
//! assert_eq!(pairs, vec![(0, &"a"), (1, &"b"), (2, &"c")]);
//! ```

use crate::protocol::{Iter, Position, Range, SizedRange};

/// A range over a tuple of ranges, yielding tuples of their elements.
///
/// Implemented for tuples of two to eight ranges.
#[derive(Debug, Clone, Copy)]
pub struct CombineRange<T> {
    ranges: T,
}

impl<T> CombineRange<T> {
    /// Unwraps the tuple of base ranges.
    #[inline]
    pub fn into_inner(self) -> T {
        self.ranges
    }
}

/// A position inside a [`CombineRange`]: one base position per input range.
#[derive(Debug, Clone)]
pub struct CombinePosition<T> {
    positions: T,
}

macro_rules! impl_combine {
    ($(($R:ident, $P:ident, $idx:tt)),+) => {
        impl<$($P),+> Position for CombinePosition<($($P,)+)>
        where
            $($P: Position,)+
        {
            type Item = ($($P::Item,)+);

            #[inline]
            fn advance(&mut self) {
                $(self.positions.$idx.advance();)+
            }

            #[inline]
            fn get(&mut self) -> Self::Item {
                ($(self.positions.$idx.get(),)+)
            }

            #[inline]
            fn equals(&self, other: &Self) -> bool {
                $(self.positions.$idx.equals(&other.positions.$idx))||+
            }
        }

        impl<$($R),+> Range for CombineRange<($($R,)+)>
        where
            $($R: Range,)+
        {
            type Item = ($($R::Item,)+);
            type Position = CombinePosition<($($R::Position,)+)>;

            #[inline]
            fn positions(self) -> (Self::Position, Self::Position) {
                let bounds = ($(self.ranges.$idx.positions(),)+);
                (
                    CombinePosition {
                        positions: ($(bounds.$idx.0,)+),
                    },
                    CombinePosition {
                        positions: ($(bounds.$idx.1,)+),
                    },
                )
            }
        }

        impl<$($R),+> SizedRange for CombineRange<($($R,)+)>
        where
            $($R: SizedRange,)+
        {
            #[inline]
            fn size(&self) -> usize {
                let mut size = usize::MAX;
                $(size = size.min(self.ranges.$idx.size());)+
                size
            }
        }

        impl<$($R),+> IntoIterator for CombineRange<($($R,)+)>
        where
            $($R: Range,)+
        {
            type Item = ($($R::Item,)+);
            type IntoIter = Iter<CombinePosition<($($R::Position,)+)>>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }
    };
}

impl_combine!((A, PA, 0), (B, PB, 1));
impl_combine!((A, PA, 0), (B, PB, 1), (C, PC, 2));
impl_combine!((A, PA, 0), (B, PB, 1), (C, PC, 2), (D, PD, 3));
impl_combine!((A, PA, 0), (B, PB, 1), (C, PC, 2), (D, PD, 3), (E, PE, 4));
impl_combine!(
    (A, PA, 0),
    (B, PB, 1),
    (C, PC, 2),
    (D, PD, 3),
    (E, PE, 4),
    (F, PF, 5)
);
impl_combine!(
    (A, PA, 0),
    (B, PB, 1),
    (C, PC, 2),
    (D, PD, 3),
    (E, PE, 4),
    (F, PF, 5),
    (G, PG, 6)
);
impl_combine!(
    (A, PA, 0),
    (B, PB, 1),
    (C, PC, 2),
    (D, PD, 3),
    (E, PE, 4),
    (F, PF, 5),
    (G, PG, 6),
    (H, PH, 7)
);

/// Combines a tuple of ranges into a range of tuples.
///
/// The result is as long as the shortest input. See also the [`combine!`]
/// macro, which accepts the ranges as separate arguments.
///
/// [`combine!`]: crate::combine!
///
/// # Examples
///
/// ```rust
/// # use tandem_core::adaptor::combine::combine;
/// # use tandem_core::source::index::{range, range_between};
///
/// let sums: Vec<i32> = combine((range(4), range_between(10, 20)))
///     .into_iter()
///     .map(|(a, b)| a + b)
///     .collect();
/// assert_eq!(sums, vec![10, 12, 14, 16]);
/// ```
#[inline]
pub fn combine<T>(ranges: T) -> CombineRange<T>
where
    CombineRange<T>: Range,
{
    CombineRange { ranges }
}

/// Combines two or more ranges into a range of tuples.
///
/// `combine!(a, b, c)` is shorthand for `combine((a, b, c))`.
#[macro_export]
macro_rules! combine {
    ($($range:expr),+ $(,)?) => {
        $crate::adaptor::combine::combine(($($range,)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::index::range;
    use crate::source::iter::iter_range;
    use crate::source::slice::{const_range, range_mut};

    #[test]
    fn test_combine_pairs_elements() {
        let ints = [1, 2, 3];
        let strings = ["a", "b", "c"];
        let result: Vec<String> = combine((const_range(&ints), const_range(&strings)))
            .into_iter()
            .map(|(i, s)| format!("{} : {}", i, s))
            .collect();
        assert_eq!(result, vec!["1 : a", "2 : b", "3 : c"]);
    }

    #[test]
    fn test_stops_at_shortest_in_any_position() {
        let long = range(10);
        let short = range(2);
        assert_eq!(combine((long, short)).into_iter().count(), 2);
        assert_eq!(combine((short, long)).into_iter().count(), 2);
        assert_eq!(combine((long, long, short)).into_iter().count(), 2);
        assert_eq!(combine((long, range(0))).into_iter().count(), 0);
    }

    #[test]
    fn test_any_pair_equal_means_equal() {
        let (mut begin, end) = combine((range(5), range(1))).positions();
        assert!(!begin.equals(&end));
        begin.advance();
        // Only the second base is at its end; that is enough.
        assert!(begin.equals(&end));
    }

    #[test]
    fn test_size_is_minimum() {
        assert_eq!(combine((range(7), range(3), range(5))).size(), 3);
        let data = [1, 2];
        assert_eq!(combine((range(7), const_range(&data))).size(), 2);
    }

    #[test]
    fn test_mutation_through_combined_view() {
        let mut names = vec![String::from("a"), String::from("b")];
        let mut counts = vec![0, 0];
        for (name, count) in combine((range_mut(&mut names), range_mut(&mut counts))) {
            *count = name.len() * 10;
            name.push('?');
        }
        assert_eq!(names, vec!["a?", "b?"]);
        assert_eq!(counts, vec![10, 10]);
    }

    #[test]
    fn test_eight_way_combine() {
        let r = range(3);
        let result: Vec<_> = combine((r, r, r, r, r, r, r, r)).into_iter().collect();
        assert_eq!(result[2], (2, 2, 2, 2, 2, 2, 2, 2));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_macro_form() {
        let letters = ["x", "y"];
        let result: Vec<_> = crate::combine!(range(5), iter_range(letters), range(9),)
            .into_iter()
            .collect();
        assert_eq!(result, vec![(0, "x", 0), (1, "y", 1)]);
    }

    #[test]
    fn test_advance_order_matches_input_order() {
        use std::cell::RefCell;

        let log = RefCell::new(Vec::new());
        let a = iter_range((0..3).inspect(|_| log.borrow_mut().push('a')));
        let b = iter_range((0..3).inspect(|_| log.borrow_mut().push('b')));
        let (mut begin, _) = combine((a, b)).positions();
        log.borrow_mut().clear();
        begin.advance();
        assert_eq!(*log.borrow(), vec!['a', 'b']);
    }

    #[test]
    fn test_into_inner() {
        let (a, b) = combine((range(2), range(3))).into_inner();
        assert_eq!(a.len() + b.len(), 5);
    }
}
