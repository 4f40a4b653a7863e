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

//! # Range Sources
//!
//! Leaf ranges that read from integers, slices, std iterators, and maps.
//! Every other range in the crate is built on top of these.
//!
//! ## Submodules
//!
//! - `index`: Half-open integer ranges (`range`, `range_between`) and the
//!   `indices` sugar over anything implementing `Length`.
//! - `iter`: Ranges over std iterators (`iter_range`, `iter_range_once`) and
//!   the `IterPosition` cursor the slice and map views are built on.
//! - `map`: Key and value projections over associative containers.
//! - `slice`: Read-only (`const_range`) and mutable (`range_mut`) slice views.

pub mod index;
pub mod iter;
pub mod map;
pub mod slice;
