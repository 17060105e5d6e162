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

//! # Fixed-Size Sequence Generation
//!
//! Builds `[T; N]` arrays from an index generator. The length is a const
//! generic, so the compiler verifies it statically and no manual indexed loop
//! over an uninitialized buffer is needed.
//!
//! ## Ordering
//!
//! The generator is invoked exactly once for every index in `0..N`, in
//! strictly ascending order. Generators with index-dependent side effects
//! (counters, logs, RNG draws) can rely on that order.
//!
//! ## Usage
//!
//! ```rust
//! use stride_core::algorithm::generate::{generate_sequence, try_generate_sequence};
//!
//! let powers: [u64; 5] = generate_sequence(|i| 1 << i);
//! assert_eq!(powers, [1, 2, 4, 8, 16]);
//!
//! let parsed: Result<[u8; 3], _> = try_generate_sequence(|i| ["7", "8", "9"][i].parse::<u8>());
//! assert_eq!(parsed, Ok([7, 8, 9]));
//! ```

/// Creates an array of length `N` whose element `i` is `generator(i)`.
///
/// `generator` is called once per index, in ascending order. `N == 0`
/// yields an empty array without calling `generator`.
///
/// # Examples
///
/// ```rust
/// # use stride_core::algorithm::generate::generate_sequence;
///
/// assert_eq!(generate_sequence::<3, _, _>(|i| i * i), [0, 1, 4]);
///
/// let empty: [u32; 0] = generate_sequence(|_| unreachable!());
/// assert!(empty.is_empty());
/// ```
#[inline]
pub fn generate_sequence<const N: usize, T, F>(generator: F) -> [T; N]
where
    F: FnMut(usize) -> T,
{
    std::array::from_fn(generator)
}

/// Fallible form of [`generate_sequence`].
///
/// The generator is called for ascending indices until it returns an error.
/// That error is returned immediately and no further indices are visited;
/// values produced before the failure are dropped.
///
/// # Examples
///
/// ```rust
/// # use stride_core::algorithm::generate::try_generate_sequence;
///
/// let ok: Result<[i32; 3], String> = try_generate_sequence(|i| Ok(i as i32 - 1));
/// assert_eq!(ok, Ok([-1, 0, 1]));
///
/// let err: Result<[i32; 3], String> =
///     try_generate_sequence(|i| if i == 1 { Err(format!("bad index {i}")) } else { Ok(0) });
/// assert_eq!(err, Err("bad index 1".to_string()));
/// ```
pub fn try_generate_sequence<const N: usize, T, E, F>(mut generator: F) -> Result<[T; N], E>
where
    F: FnMut(usize) -> Result<T, E>,
{
    let mut values = Vec::with_capacity(N);
    for i in 0..N {
        values.push(generator(i)?);
    }

    match <[T; N]>::try_from(values) {
        Ok(array) => Ok(array),
        Err(_) => unreachable!("`try_generate_sequence` produced a number of values other than N"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_empty() {
        let mut calls = 0;
        let values: [usize; 0] = generate_sequence(|i| {
            calls += 1;
            i
        });
        assert!(values.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_generate_squares() {
        assert_eq!(generate_sequence::<3, _, _>(|i| i * i), [0, 1, 4]);
    }

    #[test]
    fn test_generate_element_matches_generator() {
        let values: [i64; 16] = generate_sequence(|i| 3 * i as i64 - 7);
        for (i, v) in values.iter().enumerate() {
            assert_eq!(*v, 3 * i as i64 - 7);
        }
    }

    #[test]
    fn test_generate_invokes_in_ascending_order_exactly_once() {
        let mut order = Vec::new();
        let values: [usize; 6] = generate_sequence(|i| {
            order.push(i);
            i + 100
        });
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(values, [100, 101, 102, 103, 104, 105]);
    }

    #[test]
    fn test_generate_index_dependent_side_effects() {
        // Each value depends on the running total, so any reordering would show.
        let mut running = 0;
        let values: [usize; 4] = generate_sequence(|i| {
            running += i;
            running
        });
        assert_eq!(values, [0, 1, 3, 6]);
    }

    #[test]
    fn test_generate_non_copy_values() {
        let labels: [String; 3] = generate_sequence(|i| format!("slot-{i}"));
        assert_eq!(labels, ["slot-0", "slot-1", "slot-2"]);
    }

    #[test]
    fn test_try_generate_all_ok() {
        let values: Result<[usize; 4], ()> = try_generate_sequence(|i| Ok(i * 2));
        assert_eq!(values, Ok([0, 2, 4, 6]));
    }

    #[test]
    fn test_try_generate_empty_never_calls() {
        let mut calls = 0;
        let values: Result<[u8; 0], &str> = try_generate_sequence(|_| {
            calls += 1;
            Err("never")
        });
        assert_eq!(values, Ok([]));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_try_generate_stops_at_first_error() {
        let mut visited = Vec::new();
        let values: Result<[usize; 5], usize> = try_generate_sequence(|i| {
            visited.push(i);
            if i == 2 { Err(i) } else { Ok(i) }
        });
        assert_eq!(values, Err(2));
        assert_eq!(visited, vec![0, 1, 2]);
    }
}
