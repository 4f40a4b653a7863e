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

//! # Tandem Core
//!
//! Composable, lazy range views for Rust. Ranges borrow their data, never
//! copy it, and stack freely: index and container sources feed step, combine,
//! and transform adaptors, and any stack can be hidden behind a type-erased
//! handle.
//!
//! ## Modules
//!
//! - `protocol`: The iteration protocol (`Range`, `Position`, `SizedRange`)
//!   and the `Iter` bridge to std iterators.
//! - `source`: Leaf ranges over integers (`range`, `range_between`,
//!   `indices`), slices (`const_range`, `range_mut`), std iterators
//!   (`iter_range`, `iter_range_once`), and maps (`keys`, `values`,
//!   `values_mut`).
//! - `adaptor`: `step`, `combine` (and the `combine!` macro), `transform`,
//!   and `enumerate`.
//! - `any`: Type-erased `AnyRange` / `UniqueAnyRange` handles.
//! - `error`: `RangeError`, returned by fallible constructors.
//!
//! ## Usage
//!
//! ```rust
//! use tandem_core::{enumerate, make_any_range, range_mut, step, transform, AnyRange};
//!
//! let mut scores = vec![3, 1, 4, 1, 5, 9];
//!
//! // Double every other score in place.
//! for (_, score) in enumerate(step(range_mut(&mut scores), 2)?) {
//!     *score *= 2;
//! }
//! assert_eq!(scores, vec![6, 1, 8, 1, 10, 9]);
//!
//! // Hand a formatted view to code that only knows the element type.
//! fn render(lines: AnyRange<'_, String>) -> Vec<String> {
//!     lines.into_iter().collect()
//! }
//! let view = transform(tandem_core::const_range(&scores), |s: &i32| format!("[{}]", s));
//! assert_eq!(render(make_any_range(view))[0], "[6]");
//! # Ok::<(), tandem_core::RangeError>(())
//! ```

pub mod adaptor;
pub mod any;
pub mod error;
pub mod protocol;
pub mod source;

pub use adaptor::combine::{CombineRange, combine};
pub use adaptor::enumerate::{EnumerateRange, enumerate};
pub use adaptor::step::{StepRange, step};
pub use adaptor::transform::{TransformRange, transform};
pub use any::{AnyPosition, AnyRange, UniqueAnyRange, make_any_range, make_unique_any_range};
pub use error::RangeError;
pub use protocol::{Iter, Position, Range, SizedRange, distance};
pub use source::index::{IndexRange, Length, indices, range, range_between};
pub use source::iter::{IterRange, iter_range, iter_range_once};
pub use source::map::{KeysRange, ValuesRange, keys, values, values_mut};
pub use source::slice::{SliceRange, SliceRangeMut, const_range, range_mut};
