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

//! # String Joining
//!
//! Concatenation of string-like items with a separator placed strictly
//! between consecutive items. Accepts anything iterable whose items implement
//! `AsRef<str>` (`&str`, `String`, `Cow<str>`, `Box<str>`, ...).
//!
//! ```rust
//! use stride_core::algorithm::join::{JoinStrings, join_strings, join_strings_default};
//!
//! assert_eq!(join_strings(["berth", "vessel"], " / "), "berth / vessel");
//! assert_eq!(join_strings_default(vec![String::from("a"), String::from("b")]), "a, b");
//! assert_eq!(["x", "y", "z"].iter().join_strings(""), "xyz");
//! ```

/// The separator used by [`join_strings_default`].
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Joins a sequence of strings, placing `separator` between consecutive items.
///
/// The separator is never emitted before the first or after the last item.
/// An empty sequence produces an empty string, and a single item is returned
/// unchanged. Empty items still count as items, so `["", "a"]` joined by `"-"`
/// yields `"-a"`.
///
/// # Examples
///
/// ```rust
/// # use stride_core::algorithm::join::join_strings;
///
/// assert_eq!(join_strings(["a", "b", "c"], "-"), "a-b-c");
/// assert_eq!(join_strings(["a"], "-"), "a");
/// assert_eq!(join_strings(Vec::<&str>::new(), "-"), "");
/// ```
pub fn join_strings<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut iter = items.into_iter();
    let mut result = String::new();

    if let Some(first) = iter.next() {
        result.push_str(first.as_ref());
        for item in iter {
            result.push_str(separator);
            result.push_str(item.as_ref());
        }
    }

    result
}

/// Joins a sequence of strings using [`DEFAULT_SEPARATOR`] (`", "`).
///
/// # Examples
///
/// ```rust
/// # use stride_core::algorithm::join::join_strings_default;
///
/// assert_eq!(join_strings_default(["1", "2", "3"]), "1, 2, 3");
/// ```
#[inline]
pub fn join_strings_default<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    join_strings(items, DEFAULT_SEPARATOR)
}

/// Method form of [`join_strings`] for iterators.
///
/// # Examples
///
/// ```rust
/// # use stride_core::algorithm::join::JoinStrings;
///
/// let names = vec![String::from("north"), String::from("south")];
/// assert_eq!(names.iter().join_strings(" | "), "north | south");
/// ```
pub trait JoinStrings: Iterator {
    /// Consumes the iterator and joins its items with `separator`.
    fn join_strings(self, separator: &str) -> String
    where
        Self: Sized,
        Self::Item: AsRef<str>;
}

impl<I> JoinStrings for I
where
    I: Iterator,
{
    #[inline]
    fn join_strings(self, separator: &str) -> String
    where
        Self: Sized,
        Self::Item: AsRef<str>,
    {
        join_strings(self, separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn test_join_empty_sequence() {
        let items: [&str; 0] = [];
        assert_eq!(join_strings(items, "-"), "");
        assert_eq!(join_strings_default(items), "");
    }

    #[test]
    fn test_join_single_item_is_unchanged() {
        assert_eq!(join_strings(["a"], "-"), "a");
        assert_eq!(join_strings_default(["only"]), "only");
    }

    #[test]
    fn test_join_multiple_items() {
        assert_eq!(join_strings(["a", "b", "c"], "-"), "a-b-c");
        assert_eq!(join_strings_default(["a", "b", "c"]), "a, b, c");
    }

    #[test]
    fn test_join_default_separator_value() {
        assert_eq!(DEFAULT_SEPARATOR, ", ");
    }

    #[test]
    fn test_join_empty_items_still_get_separators() {
        assert_eq!(join_strings(["", "a"], "-"), "-a");
        assert_eq!(join_strings(["a", ""], "-"), "a-");
        assert_eq!(join_strings(["", "", ""], "-"), "--");
    }

    #[test]
    fn test_join_empty_separator_concatenates() {
        assert_eq!(join_strings(["ab", "cd", "ef"], ""), "abcdef");
    }

    #[test]
    fn test_join_multi_char_separator() {
        assert_eq!(join_strings(["x", "y"], " <-> "), "x <-> y");
    }

    #[test]
    fn test_join_accepts_owned_and_borrowed_strings() {
        let owned = vec![String::from("one"), String::from("two")];
        assert_eq!(join_strings(&owned, "+"), "one+two");
        assert_eq!(join_strings(owned, "+"), "one+two");

        let cows: Vec<Cow<'_, str>> = vec![Cow::Borrowed("a"), Cow::Owned("b".to_string())];
        assert_eq!(join_strings(cows, "/"), "a/b");
    }

    #[test]
    fn test_join_does_not_mutate_input() {
        let items = vec!["left".to_string(), "right".to_string()];
        let before = items.clone();
        let _ = join_strings(&items, ", ");
        assert_eq!(items, before);
    }

    #[test]
    fn test_join_strings_extension_trait() {
        let items = ["a", "b", "c"];
        assert_eq!(items.iter().join_strings("."), "a.b.c");
        assert_eq!(std::iter::empty::<&str>().join_strings("."), "");

        let upper = items.iter().map(|s| s.to_uppercase()).join_strings(DEFAULT_SEPARATOR);
        assert_eq!(upper, "A, B, C");
    }
}
