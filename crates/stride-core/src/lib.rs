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

//! # Stride Core
//!
//! Small, allocation-free iteration primitives and sequence builders. The
//! crate collects the loops that are otherwise written by hand over and over:
//! joining strings with a separator, filling a fixed-size array from an index
//! generator, and visiting elements together with their position.
//!
//! ## Modules
//!
//! - `algorithm`: String joining (`join_strings`, `JoinStrings`), compile-time
//!   sized array generation (`generate_sequence`, `try_generate_sequence`), and
//!   indexed traversal (`for_each_n`, `indexed_for`, `indexed_for_n` together
//!   with their fallible `try_*` forms and the `IndexedFor` extension trait).
//!
//! ## Purpose
//!
//! Manual counter-incrementing loops are a steady source of off-by-one errors.
//! These helpers keep the counter, the cursor and the visit count in one place,
//! while compiling down to the same loop a careful author would have written.
//!
//! ## Usage
//!
//! ```rust
//! use stride_core::{generate_sequence, indexed_for, join_strings};
//!
//! let squares: [usize; 4] = generate_sequence(|i| i * i);
//! assert_eq!(squares, [0, 1, 4, 9]);
//!
//! let mut weighted = 0;
//! let visited = indexed_for(&squares, |value, i| weighted += value * i);
//! assert_eq!(visited, 4);
//! assert_eq!(weighted, 36);
//!
//! assert_eq!(join_strings(["a", "b", "c"], "-"), "a-b-c");
//! ```

pub mod algorithm;

pub use algorithm::{
    generate::{generate_sequence, try_generate_sequence},
    indexed::{
        IndexedFor, SequenceExhausted, for_each_n, indexed_for, indexed_for_n, try_for_each_n,
        try_indexed_for_n,
    },
    join::{DEFAULT_SEPARATOR, JoinStrings, join_strings, join_strings_default},
};
