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

//! # Algorithms
//!
//! Generic, single-pass algorithms over caller-supplied sequences. Every
//! function borrows its inputs for the duration of the call only and either
//! returns a freshly owned value or hands the advanced iterator back.
//!
//! ## Submodules
//!
//! - `join`: Separator-aware concatenation of string-like items.
//! - `generate`: Building `[T; N]` arrays from an index generator, with the
//!   generator invoked exactly once per index in ascending order.
//! - `indexed`: `for_each` variants that expose a zero-based counter, plus
//!   count-driven traversal that returns the cursor one past the last visit.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod generate;
pub mod indexed;
pub mod join;
