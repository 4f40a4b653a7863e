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

//! # Map Projections
//!
//! Views over associative containers that project each entry onto its key or
//! its value. Traversal follows the container's own order, so ordered maps
//! yield ascending keys. Keys are always handed out as shared references,
//! because they determine the structure of the map; values can be projected
//! mutably through [`values_mut`].
//!
//! Any map whose reference iterates `(&K, &V)` pairs is supported, which
//! covers `BTreeMap` and `HashMap`.
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use tandem_core::source::map::{keys, values};
//!
//! let map = BTreeMap::from([(2, "two"), (1, "one"), (3, "three")]);
//! assert_eq!(keys(&map).into_iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(values(&map).into_iter().copied().collect::<Vec<_>>(), vec!["one", "two", "three"]);
//! ```

use crate::protocol::{Iter, Position, Range, SizedRange};
use crate::source::iter::{Access, IterPosition, Once, Shared};
use std::marker::PhantomData;

/// A position projecting the key half of each entry.
#[derive(Debug)]
pub struct KeyPosition<I>(IterPosition<I, Shared>)
where
    I: Iterator;

impl<K, V, I> Position for KeyPosition<I>
where
    I: Iterator<Item = (K, V)>,
    (K, V): Clone,
{
    type Item = K;

    #[inline]
    fn advance(&mut self) {
        self.0.advance();
    }

    #[inline]
    fn get(&mut self) -> K {
        self.0.get().0
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0)
    }
}

/// A position projecting the value half of each entry.
#[derive(Debug)]
pub struct ValuePosition<I, A>(IterPosition<I, A>)
where
    I: Iterator;

impl<K, V, I, A> Position for ValuePosition<I, A>
where
    I: Iterator<Item = (K, V)>,
    A: Access<(K, V)>,
{
    type Item = V;

    #[inline]
    fn advance(&mut self) {
        self.0.advance();
    }

    #[inline]
    fn get(&mut self) -> V {
        self.0.get().1
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0)
    }
}

/// The keys of a map, in the map's iteration order.
#[derive(Debug, Clone)]
pub struct KeysRange<I> {
    entries: I,
}

impl<K, V, I> Range for KeysRange<I>
where
    I: Iterator<Item = (K, V)>,
    (K, V): Clone,
{
    type Item = K;
    type Position = KeyPosition<I>;

    #[inline]
    fn positions(self) -> (Self::Position, Self::Position) {
        let (begin, end) = IterPosition::bounds(self.entries);
        (KeyPosition(begin), KeyPosition(end))
    }
}

impl<K, V, I> SizedRange for KeysRange<I>
where
    I: ExactSizeIterator<Item = (K, V)>,
    (K, V): Clone,
{
    #[inline]
    fn size(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V, I> IntoIterator for KeysRange<I>
where
    I: Iterator<Item = (K, V)>,
    (K, V): Clone,
{
    type Item = K;
    type IntoIter = Iter<KeyPosition<I>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The values of a map, in the map's iteration order.
///
/// Whether the values are mutable depends on the entry iterator: [`values`]
/// yields `&V` and can be dereferenced repeatedly, [`values_mut`] yields
/// `&mut V` once per element.
#[derive(Debug, Clone)]
pub struct ValuesRange<I, A> {
    entries: I,
    access: PhantomData<A>,
}

impl<K, V, I, A> Range for ValuesRange<I, A>
where
    I: Iterator<Item = (K, V)>,
    A: Access<(K, V)>,
{
    type Item = V;
    type Position = ValuePosition<I, A>;

    #[inline]
    fn positions(self) -> (Self::Position, Self::Position) {
        let (begin, end) = IterPosition::bounds(self.entries);
        (ValuePosition(begin), ValuePosition(end))
    }
}

impl<K, V, I, A> SizedRange for ValuesRange<I, A>
where
    I: ExactSizeIterator<Item = (K, V)>,
    A: Access<(K, V)>,
{
    #[inline]
    fn size(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V, I, A> IntoIterator for ValuesRange<I, A>
where
    I: Iterator<Item = (K, V)>,
    A: Access<(K, V)>,
{
    type Item = V;
    type IntoIter = Iter<ValuePosition<I, A>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns the keys of `map`.
#[inline]
pub fn keys<'a, M, K, V>(map: &'a M) -> KeysRange<<&'a M as IntoIterator>::IntoIter>
where
    M: ?Sized,
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: 'a,
{
    KeysRange {
        entries: map.into_iter(),
    }
}

/// Returns the values of `map`.
#[inline]
pub fn values<'a, M, K, V>(map: &'a M) -> ValuesRange<<&'a M as IntoIterator>::IntoIter, Shared>
where
    M: ?Sized,
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: 'a,
{
    ValuesRange {
        entries: map.into_iter(),
        access: PhantomData,
    }
}

/// Returns the values of `map` as mutable references.
///
/// # Examples
///
/// ```rust
/// # use std::collections::BTreeMap;
/// # use tandem_core::source::map::values_mut;
///
/// let mut map = BTreeMap::from([(1, 10), (2, 20)]);
/// for v in values_mut(&mut map) {
///     *v += 1;
/// }
/// assert_eq!(map[&2], 21);
/// ```
#[inline]
pub fn values_mut<'a, M, K, V>(
    map: &'a mut M,
) -> ValuesRange<<&'a mut M as IntoIterator>::IntoIter, Once>
where
    M: ?Sized,
    &'a mut M: IntoIterator<Item = (&'a K, &'a mut V)>,
    K: 'a,
    V: 'a,
{
    ValuesRange {
        entries: map.into_iter(),
        access: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptor::transform::transform;
    use std::collections::{BTreeMap, HashMap};

    fn numbers() -> BTreeMap<i32, String> {
        BTreeMap::from([
            (3, "three".to_string()),
            (1, "one".to_string()),
            (2, "two".to_string()),
        ])
    }

    #[test]
    fn test_keys_in_ascending_order() {
        let map = numbers();
        let result: Vec<i32> = keys(&map).into_iter().copied().collect();
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn test_values_follow_key_order() {
        let map = numbers();
        let result: Vec<&str> = values(&map).into_iter().map(String::as_str).collect();
        assert_eq!(result, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_map_views_are_reiterable() {
        let map = numbers();
        let view = keys(&map);
        assert_eq!(view.clone().into_iter().count(), 3);
        assert_eq!(view.into_iter().count(), 3);
    }

    #[test]
    fn test_values_mut_modifies_map() {
        let mut map = numbers();
        for v in values_mut(&mut map) {
            v.make_ascii_uppercase();
        }
        assert_eq!(map[&1], "ONE");
        assert_eq!(map[&3], "THREE");
    }

    #[test]
    fn test_hash_map_projections_agree() {
        let map: HashMap<u32, u32> = (0..20).map(|k| (k, k * k)).collect();
        let ks: Vec<u32> = keys(&map).into_iter().copied().collect();
        let vs: Vec<u32> = values(&map).into_iter().copied().collect();
        // Both follow the same unspecified order of the same map.
        for (k, v) in ks.iter().zip(&vs) {
            assert_eq!(k * k, *v);
        }
        assert_eq!(keys(&map).size(), 20);
    }

    #[test]
    fn test_shared_projections_dereference_repeatedly() {
        let map = numbers();

        let mut key = keys(&map).begin();
        assert_eq!(key.get(), &1);
        assert_eq!(key.get(), &1);

        let mut value = values(&map).begin();
        value.advance();
        assert_eq!(value.get(), "two");
        assert_eq!(value.get(), "two");

        let mut scaled = transform(keys(&map), |k: &i32| *k * 10).begin();
        assert_eq!(scaled.get(), 10);
        assert_eq!(scaled.get(), 10);
    }

    #[test]
    #[should_panic(expected = "already handed out")]
    fn test_values_mut_dereference_once() {
        let mut map = numbers();
        let mut value = values_mut(&mut map).positions().0;
        let _first = value.get();
        let _second = value.get();
    }

    #[test]
    fn test_empty_map() {
        let map: BTreeMap<u8, u8> = BTreeMap::new();
        let (begin, end) = values(&map).positions();
        assert!(begin.equals(&end));
        assert!(keys(&map).is_empty());
    }
}
