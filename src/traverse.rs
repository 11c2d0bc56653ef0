//! Traverse and sequence utilities for collections of `Maybe` and `Outcome`.
//!
//! - **`sequence`**: turn a collection of wrapped values into a wrapped collection
//!   - `Vec<Maybe<T>>` → `Maybe<Vec<T>>`
//!   - `Vec<Outcome<T>>` → `Outcome<Vec<T>>`
//!
//! - **`traverse`**: map a function over a collection and sequence the results
//!
//! Both are fail-fast. The first `Nothing` or `Failure` ends the traversal:
//! later elements are not pulled and the function is not called on them.
//!
//! `Maybe` and `Outcome` also implement `FromIterator`, so `collect()` does
//! the same job inside iterator chains.
//!
//! # Examples
//!
//! ```
//! use confluence::{traverse::traverse_outcome, Outcome};
//!
//! fn parse_number(s: &str) -> Outcome<i32> {
//!     s.parse::<i32>().into()
//! }
//!
//! assert_eq!(traverse_outcome(vec!["1", "2", "3"], parse_number), Outcome::success(vec![1, 2, 3]));
//! assert!(traverse_outcome(vec!["1", "x", "3"], parse_number).is_failure());
//! ```

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Traverse a collection with a function that may produce nothing.
///
/// ```
/// use confluence::{traverse::traverse_maybe, Maybe};
///
/// let positive = |x: i32| Maybe::just(x).filter(|v| *v > 0);
///
/// assert_eq!(traverse_maybe(vec![1, 2, 3], positive), Maybe::just(vec![1, 2, 3]));
/// assert_eq!(traverse_maybe(vec![1, -2, 3], positive), Maybe::nothing());
/// ```
pub fn traverse_maybe<T, U, F, I>(iter: I, f: F) -> Maybe<Vec<U>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Maybe<U>,
{
    iter.into_iter().map(f).collect()
}

/// Sequence a collection of `Maybe` values.
///
/// ```
/// use confluence::{traverse::sequence_maybe, Maybe};
///
/// assert_eq!(sequence_maybe(vec![Maybe::just(1), Maybe::just(2)]), Maybe::just(vec![1, 2]));
/// assert_eq!(sequence_maybe(vec![Maybe::just(1), Maybe::nothing()]), Maybe::nothing());
/// ```
pub fn sequence_maybe<T, I>(iter: I) -> Maybe<Vec<T>>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    iter.into_iter().collect()
}

/// Traverse a collection with a function that may fail.
///
/// Returns the first failure unchanged.
pub fn traverse_outcome<T, U, F, I>(iter: I, f: F) -> Outcome<Vec<U>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Outcome<U>,
{
    iter.into_iter().map(f).collect()
}

/// Sequence a collection of outcomes.
///
/// ```
/// use confluence::{traverse::sequence_outcome, Outcome};
///
/// let results = vec![Outcome::success(1), Outcome::fail("first"), Outcome::fail("second")];
/// assert_eq!(sequence_outcome(results), Outcome::fail("first"));
/// ```
pub fn sequence_outcome<T, I>(iter: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    iter.into_iter().collect()
}

impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iter: I) -> Self {
        let mut missing = false;
        let collected: V = iter
            .into_iter()
            .map_while(|item| match item {
                Maybe::Just(value) => Some(value),
                Maybe::Nothing => {
                    missing = true;
                    None
                }
            })
            .collect();

        if missing {
            Maybe::Nothing
        } else {
            Maybe::Just(collected)
        }
    }
}

impl<A, V> FromIterator<Outcome<A>> for Outcome<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A>>>(iter: I) -> Self {
        let mut error = None;
        let collected: V = iter
            .into_iter()
            .map_while(|item| match item {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(message) => {
                    error = Some(message);
                    None
                }
            })
            .collect();

        match error {
            Some(message) => Outcome::Failure(message),
            None => Outcome::Success(collected),
        }
    }
}
