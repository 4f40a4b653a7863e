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

//! # Range Adaptors
//!
//! Ranges that wrap one or more base ranges and change their traversal or
//! their output. Adaptors own their bases by value; a base that is itself a
//! borrowing view keeps its borrow, so the adaptor cannot outlive the
//! underlying storage.
//!
//! ## Submodules
//!
//! - `step`: Every `stride`-th element of a base range.
//! - `combine`: Lock-step tuples over two to eight ranges, ending at the
//!   shortest.
//! - `transform`: Per-element function application on dereference.
//! - `enumerate`: `(index, element)` pairs, as `combine` over an index range.

pub mod combine;
pub mod enumerate;
pub mod step;
pub mod transform;

pub use combine::combine;
pub use enumerate::enumerate;
pub use step::step;
pub use transform::transform;
