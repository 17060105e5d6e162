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

//! # Indexed Traversal
//!
//! `for_each` variants that carry a zero-based counter alongside each
//! element, and count-driven traversals that stop after `n` visits and hand
//! the cursor back to the caller.
//!
//! ## Cursors
//!
//! A cursor is simply an iterator. The count-driven functions take the
//! iterator by value and return it advanced by exactly `n` steps, so the
//! caller can keep consuming from the position one past the last visited
//! element.
//!
//! ## Counters
//!
//! `for_each_n`, `indexed_for_n` and their `try_*` forms use the caller's count
//! type for the counter (`u8`, `u32`, `usize`, ...). The counter never exceeds
//! `n`, so it cannot overflow. `indexed_for` counts in `usize`.
//!
//! ## Exhaustion
//!
//! Asking for more elements than the iterator has left is a caller error.
//! The plain functions panic; the `try_*` functions report it as
//! [`SequenceExhausted`]. In both cases every element that was available has
//! already been passed to the visitor.
//!
//! ## Usage
//!
//! ```rust
//! use stride_core::algorithm::indexed::{IndexedFor, indexed_for_n};
//!
//! let data = [10, 20, 30, 40];
//! let mut sum = 0;
//! let mut rest = indexed_for_n(data.iter(), 2u32, |v| sum += v);
//! assert_eq!(sum, 30);
//! assert_eq!(rest.next(), Some(&30));
//!
//! let mut labels = Vec::new();
//! let count = data.iter().indexed_for(|v, i| labels.push(format!("{i}:{v}")));
//! assert_eq!(count, 4);
//! assert_eq!(labels, ["0:10", "1:20", "2:30", "3:40"]);
//! ```

use num_traits::{PrimInt, Unsigned};

/// The error returned when a count-driven traversal runs out of elements.
///
/// # Examples
///
/// ```rust
/// # use stride_core::algorithm::indexed::{SequenceExhausted, try_for_each_n};
///
/// let err = try_for_each_n([1, 2].iter(), 5usize, |_, _| {}).unwrap_err();
/// assert_eq!(err, SequenceExhausted::new(5, 2));
/// assert_eq!(err.missing(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceExhausted<S> {
    requested: S,
    visited: S,
}

impl<S> SequenceExhausted<S>
where
    S: PrimInt + Unsigned,
{
    /// Creates a new `SequenceExhausted` error.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `visited` is not smaller than `requested`.
    #[inline]
    pub fn new(requested: S, visited: S) -> Self {
        debug_assert!(
            visited < requested,
            "called `SequenceExhausted::new` with visited >= requested"
        );
        Self { requested, visited }
    }

    /// The number of elements the caller asked to visit.
    #[inline]
    pub fn requested(&self) -> S {
        self.requested
    }

    /// The number of elements that were visited before the sequence ran out.
    #[inline]
    pub fn visited(&self) -> S {
        self.visited
    }

    /// The number of requested elements that were not available.
    #[inline]
    pub fn missing(&self) -> S {
        self.requested - self.visited
    }
}

impl<S> std::fmt::Display for SequenceExhausted<S>
where
    S: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sequence exhausted after {} of {} requested elements",
            self.visited, self.requested
        )
    }
}

impl<S> std::error::Error for SequenceExhausted<S> where S: std::fmt::Debug + std::fmt::Display {}

/// Visits every element of `range`, passing each one together with its
/// zero-based index.
///
/// Returns the number of elements visited, which equals the length of the
/// range. An empty range visits nothing and returns `0`.
///
/// # Examples
///
/// ```rust
/// # use stride_core::algorithm::indexed::indexed_for;
///
/// let mut seen = Vec::new();
/// let count = indexed_for(&["a", "b", "c"], |s, i| seen.push((i, *s)));
/// assert_eq!(count, 3);
/// assert_eq!(seen, [(0, "a"), (1, "b"), (2, "c")]);
///
/// assert_eq!(indexed_for(0..0, |_, _| unreachable!()), 0);
/// ```
pub fn indexed_for<I, F>(range: I, mut f: F) -> usize
where
    I: IntoIterator,
    F: FnMut(I::Item, usize),
{
    let mut index = 0;
    for item in range {
        f(item, index);
        index += 1;
    }
    index
}

/// Visits the next `n` elements of `first`, passing each one with its index.
///
/// Returns the iterator advanced by exactly `n` elements. With `n == 0`
/// nothing is visited and `first` is returned untouched.
///
/// # Panics
///
/// Panics if `first` yields fewer than `n` elements. Use [`try_for_each_n`]
/// to handle that case without panicking.
///
/// # Examples
///
/// ```rust
/// # use stride_core::algorithm::indexed::for_each_n;
///
/// let mut pairs = Vec::new();
/// let mut rest = for_each_n("abcde".chars(), 3u8, |c, i| pairs.push((i, c)));
/// assert_eq!(pairs, [(0, 'a'), (1, 'b'), (2, 'c')]);
/// assert_eq!(rest.next(), Some('d'));
/// ```
#[track_caller]
pub fn for_each_n<I, S, F>(first: I, n: S, f: F) -> I
where
    I: Iterator,
    S: PrimInt + Unsigned + std::fmt::Display,
    F: FnMut(I::Item, S),
{
    match try_for_each_n(first, n, f) {
        Ok(rest) => rest,
        Err(e) => panic!("called `for_each_n` with a count larger than the sequence: {e}"),
    }
}

/// Fallible form of [`for_each_n`].
///
/// Returns the advanced iterator, or [`SequenceExhausted`] if `first` ran out
/// before `n` elements were visited. The error discards the (now empty)
/// iterator.
///
/// # Examples
///
/// ```rust
/// # use stride_core::algorithm::indexed::try_for_each_n;
///
/// let mut total = 0;
/// let rest = try_for_each_n([5usize, 6, 7].into_iter(), 2usize, |v, i| total += v * i);
/// assert_eq!(total, 6);
/// assert_eq!(rest.map(|r| r.collect::<Vec<_>>()), Ok(vec![7]));
/// ```
pub fn try_for_each_n<I, S, F>(mut first: I, n: S, mut f: F) -> Result<I, SequenceExhausted<S>>
where
    I: Iterator,
    S: PrimInt + Unsigned,
    F: FnMut(I::Item, S),
{
    let mut i = S::zero();
    while i < n {
        match first.next() {
            Some(item) => f(item, i),
            None => return Err(SequenceExhausted::new(n, i)),
        }
        i = i + S::one();
    }
    Ok(first)
}

/// Visits the next `n` elements of `first` without exposing their index.
///
/// Behaves like [`for_each_n`] except that the visitor only receives the
/// element. Returns the iterator advanced by exactly `n` elements.
///
/// # Panics
///
/// Panics if `first` yields fewer than `n` elements. Use
/// [`try_indexed_for_n`] to handle that case without panicking.
///
/// # Examples
///
/// ```rust
/// # use stride_core::algorithm::indexed::indexed_for_n;
///
/// let data = [10, 20, 30, 40];
/// let mut sum = 0;
/// let mut rest = indexed_for_n(data.iter(), 2usize, |v| sum += v);
/// assert_eq!(sum, 30);
/// assert_eq!(rest.next(), Some(&30));
/// ```
#[track_caller]
pub fn indexed_for_n<I, S, F>(first: I, n: S, f: F) -> I
where
    I: Iterator,
    S: PrimInt + Unsigned + std::fmt::Display,
    F: FnMut(I::Item),
{
    match try_indexed_for_n(first, n, f) {
        Ok(rest) => rest,
        Err(e) => panic!("called `indexed_for_n` with a count larger than the sequence: {e}"),
    }
}

/// Fallible form of [`indexed_for_n`].
#[inline]
pub fn try_indexed_for_n<I, S, F>(first: I, n: S, mut f: F) -> Result<I, SequenceExhausted<S>>
where
    I: Iterator,
    S: PrimInt + Unsigned,
    F: FnMut(I::Item),
{
    try_for_each_n(first, n, |item, _| f(item))
}

/// Method forms of the indexed traversals for any iterator.
///
/// # Examples
///
/// ```rust
/// # use stride_core::algorithm::indexed::IndexedFor;
///
/// let mut firsts = Vec::new();
/// let mut rest = (1..=10).for_each_n(3u16, |v, i| firsts.push(v * 10 + i as i32));
/// assert_eq!(firsts, [10, 21, 32]);
///
/// let mut tail = 0;
/// let visited = rest.by_ref().indexed_for(|v, _| tail += v);
/// assert_eq!(visited, 7);
/// assert_eq!(tail, (4..=10).sum::<i32>());
/// assert_eq!(rest.next(), None);
/// ```
pub trait IndexedFor: Iterator + Sized {
    /// See [`indexed_for`].
    #[inline]
    fn indexed_for<F>(self, f: F) -> usize
    where
        F: FnMut(Self::Item, usize),
    {
        indexed_for(self, f)
    }

    /// See [`for_each_n`].
    #[inline]
    #[track_caller]
    fn for_each_n<S, F>(self, n: S, f: F) -> Self
    where
        S: PrimInt + Unsigned + std::fmt::Display,
        F: FnMut(Self::Item, S),
    {
        for_each_n(self, n, f)
    }

    /// See [`indexed_for_n`].
    #[inline]
    #[track_caller]
    fn indexed_for_n<S, F>(self, n: S, f: F) -> Self
    where
        S: PrimInt + Unsigned + std::fmt::Display,
        F: FnMut(Self::Item),
    {
        indexed_for_n(self, n, f)
    }

    /// See [`try_for_each_n`].
    #[inline]
    fn try_for_each_n<S, F>(self, n: S, f: F) -> Result<Self, SequenceExhausted<S>>
    where
        S: PrimInt + Unsigned,
        F: FnMut(Self::Item, S),
    {
        try_for_each_n(self, n, f)
    }

    /// See [`try_indexed_for_n`].
    #[inline]
    fn try_indexed_for_n<S, F>(self, n: S, f: F) -> Result<Self, SequenceExhausted<S>>
    where
        S: PrimInt + Unsigned,
        F: FnMut(Self::Item),
    {
        try_indexed_for_n(self, n, f)
    }
}

impl<I> IndexedFor for I where I: Iterator {}
