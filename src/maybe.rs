//! An optional value: either `Just(T)` or `Nothing`.
//!
//! `Maybe<T>` stands in for a value that may legitimately be absent, such as the
//! result of a lookup or a parse. Absence is not an error: it propagates
//! through `map`, `and_then` and `filter` untouched until the chain is ended
//! with [`Maybe::fold`], a `match`, or one of the `get_or_else` family.
//!
//! Presence is an explicit tag, never a sentinel. `Maybe::just(0)` holds zero;
//! only [`Maybe::from_option`] maps an absent source value to `Nothing`.
//!
//! # Examples
//!
//! ```rust
//! use confluence::Maybe;
//!
//! fn lookup(id: u32) -> Maybe<&'static str> {
//!     match id {
//!         1 => Maybe::just("ada"),
//!         2 => Maybe::just("grace"),
//!         _ => Maybe::nothing(),
//!     }
//! }
//!
//! let greeting = lookup(1)
//!     .map(str::to_uppercase)
//!     .filter(|name| name.len() > 2)
//!     .fold(|| "who?".to_string(), |name| format!("hello {}", name));
//! assert_eq!(greeting, "hello ADA");
//!
//! assert_eq!(lookup(9).map(str::len), Maybe::nothing());
//! ```

use std::fmt;

use crate::either::Either;
use crate::error::NothingError;
use crate::outcome::Outcome;
use crate::unit::{to_func1, Unit};

/// A value that is either `Just(T)` or `Nothing`.
///
/// Ordering follows `Option`: `Nothing` sorts before any `Just`.
///
/// # Example
///
/// ```rust
/// use confluence::Maybe;
///
/// let present = Maybe::just(42);
/// let absent: Maybe<i32> = Maybe::nothing();
///
/// match present {
///     Maybe::Just(n) => assert_eq!(n, 42),
///     Maybe::Nothing => unreachable!(),
/// }
/// assert_eq!(absent.get_or_else(0), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// No value
    Nothing,
    /// Exactly one value
    Just(T),
}

impl<T> Maybe<T> {
    // ========== Constructors ==========

    /// Create a `Just` holding `value`.
    ///
    /// Every value is accepted, including zero-like ones.
    ///
    /// ```rust
    /// use confluence::Maybe;
    ///
    /// assert!(Maybe::just(0).is_just());
    /// ```
    #[inline]
    pub fn just(value: T) -> Self {
        Maybe::Just(value)
    }

    /// Create a `Nothing`.
    #[inline]
    pub fn nothing() -> Self {
        Maybe::Nothing
    }

    /// Convert from a nullable source: `None` becomes `Nothing`.
    ///
    /// ```rust
    /// use confluence::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(3)), Maybe::just(3));
    /// assert_eq!(Maybe::<i32>::from_option(None), Maybe::nothing());
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Just(value),
            None => Maybe::Nothing,
        }
    }

    /// Alias for [`Maybe::from_option`].
    #[inline]
    pub fn of(option: Option<T>) -> Self {
        Maybe::from_option(option)
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    // ========== References ==========

    /// Convert to `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Convert to `Maybe<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    // ========== Case Analysis ==========

    /// Run exactly one of the two branches and return its result.
    ///
    /// ```rust
    /// use confluence::Maybe;
    ///
    /// let described = Maybe::just(3).fold(|| "none".to_string(), |n| n.to_string());
    /// assert_eq!(described, "3");
    ///
    /// let described = Maybe::<i32>::nothing().fold(|| "none".to_string(), |n| n.to_string());
    /// assert_eq!(described, "none");
    /// ```
    #[inline]
    pub fn fold<R, N, J>(self, on_nothing: N, on_just: J) -> R
    where
        N: FnOnce() -> R,
        J: FnOnce(T) -> R,
    {
        match self {
            Maybe::Just(value) => on_just(value),
            Maybe::Nothing => on_nothing(),
        }
    }

    // ========== Transformations ==========

    /// Transform the value if present.
    ///
    /// ```rust
    /// use confluence::Maybe;
    ///
    /// assert_eq!(Maybe::just(21).map(|x| x * 2), Maybe::just(42));
    /// assert_eq!(Maybe::<i32>::nothing().map(|x| x * 2), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map<R, F>(self, f: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Maybe::Just(value) => Maybe::Just(f(value)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Chain a computation that may itself produce nothing.
    ///
    /// ```rust
    /// use confluence::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::just(x / 2) } else { Maybe::nothing() };
    ///
    /// assert_eq!(Maybe::just(8).and_then(half).and_then(half), Maybe::just(2));
    /// assert_eq!(Maybe::just(6).and_then(half).and_then(half), Maybe::nothing());
    /// ```
    #[inline]
    pub fn and_then<R, F>(self, f: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        match self {
            Maybe::Just(value) => f(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Keep the value only if `predicate` holds for it.
    ///
    /// ```rust
    /// use confluence::Maybe;
    ///
    /// assert_eq!(Maybe::just(4).filter(|x| x % 2 == 0), Maybe::just(4));
    /// assert_eq!(Maybe::just(3).filter(|x| x % 2 == 0), Maybe::nothing());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Just(value) => {
                if predicate(&value) {
                    Maybe::Just(value)
                } else {
                    Maybe::Nothing
                }
            }
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Run a side effect on the value, if present.
    ///
    /// The result records whether the action ran.
    ///
    /// ```rust
    /// use confluence::{Maybe, Unit};
    ///
    /// let mut log = Vec::new();
    /// let ran = Maybe::just("saved").for_each(|msg| log.push(msg));
    /// assert_eq!(ran, Maybe::just(Unit));
    /// assert_eq!(log, vec!["saved"]);
    /// ```
    #[inline]
    pub fn for_each<F>(self, action: F) -> Maybe<Unit>
    where
        F: FnOnce(T),
    {
        self.map(to_func1(action))
    }

    /// Return `self` if it holds a value, otherwise `other`.
    #[inline]
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => other,
        }
    }

    /// Return `self` if it holds a value, otherwise the result of `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => f(),
        }
    }

    /// Pair two values when both are present.
    ///
    /// ```rust
    /// use confluence::Maybe;
    ///
    /// assert_eq!(Maybe::just(1).zip(Maybe::just("a")), Maybe::just((1, "a")));
    /// assert_eq!(Maybe::just(1).zip(Maybe::<&str>::nothing()), Maybe::nothing());
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Maybe::Just(a), Maybe::Just(b)) => Maybe::Just((a, b)),
            _ => Maybe::Nothing,
        }
    }

    /// Bind into a sequence: `Just(v)` yields the items of `f(v)`, `Nothing` yields none.
    ///
    /// ```rust
    /// use confluence::Maybe;
    ///
    /// let words: Vec<_> = Maybe::just("pikachu raichu")
    ///     .bind_iter(|s| s.split(' '))
    ///     .collect();
    /// assert_eq!(words, vec!["pikachu", "raichu"]);
    /// ```
    #[inline]
    pub fn bind_iter<I, F>(self, f: F) -> impl Iterator<Item = I::Item>
    where
        F: FnOnce(T) -> I,
        I: IntoIterator,
    {
        self.into_option().map(f).into_iter().flatten()
    }

    // ========== Extractors ==========

    /// Return the value or `default`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => default,
        }
    }

    /// Return the value or the result of `fallback`.
    ///
    /// `fallback` runs only when the value is absent.
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => fallback(),
        }
    }

    /// Return the value, or [`NothingError`] if absent.
    ///
    /// ```rust
    /// use confluence::{Maybe, NothingError};
    ///
    /// assert_eq!(Maybe::just(5).try_unwrap(), Ok(5));
    /// assert_eq!(Maybe::<i32>::nothing().try_unwrap(), Err(NothingError));
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, NothingError> {
        match self {
            Maybe::Just(value) => Ok(value),
            Maybe::Nothing => Err(NothingError),
        }
    }

    /// Return the value, panicking if absent.
    ///
    /// Prefer `fold`, `match` or `get_or_else`; this is an escape hatch for
    /// call sites that have already checked [`Maybe::is_just`].
    ///
    /// # Panics
    ///
    /// Panics with the [`NothingError`] message if the value is `Nothing`.
    ///
    /// ```rust
    /// use confluence::Maybe;
    ///
    /// assert_eq!(Maybe::just("hello").force_unwrap(), "hello");
    /// ```
    #[inline]
    #[track_caller]
    pub fn force_unwrap(self) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => panic!("{}", NothingError),
        }
    }

    // ========== Conversions ==========

    /// Convert into `Option<T>`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }

    /// Convert into `Either`, using `left` for the absent case.
    ///
    /// ```rust
    /// use confluence::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::just(1).ok_or("missing"), Either::right(1));
    /// assert_eq!(Maybe::<i32>::nothing().ok_or("missing"), Either::left("missing"));
    /// ```
    #[inline]
    pub fn ok_or<L>(self, left: L) -> Either<L, T> {
        match self {
            Maybe::Just(value) => Either::Right(value),
            Maybe::Nothing => Either::Left(left),
        }
    }

    /// Convert into `Outcome`, failing with `message` when absent.
    ///
    /// ```rust
    /// use confluence::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::just(1).ok_or_fail("missing"), Outcome::success(1));
    /// assert_eq!(Maybe::<i32>::nothing().ok_or_fail("missing"), Outcome::fail("missing"));
    /// ```
    #[inline]
    pub fn ok_or_fail(self, message: impl Into<String>) -> Outcome<T> {
        match self {
            Maybe::Just(value) => Outcome::Success(value),
            Maybe::Nothing => Outcome::Failure(message.into()),
        }
    }

    // ========== Iterator Support ==========

    /// Iterate over the value: one element for `Just`, none for `Nothing`.
    ///
    /// The iterator borrows `self`, so it can be restarted as often as needed.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    /// Mutably iterate over the value, if present.
    #[inline]
    pub fn iter_mut(&mut self) -> std::option::IntoIter<&mut T> {
        self.as_mut().into_option().into_iter()
    }
}

impl<F> Maybe<F> {
    /// Apply a wrapped function to a wrapped argument.
    ///
    /// The result is `Just` only when both the function and the argument are present.
    ///
    /// ```rust
    /// use confluence::Maybe;
    ///
    /// let inc = Maybe::just(|x: i32| x + 1);
    /// assert_eq!(inc.apply(Maybe::just(41)), Maybe::just(42));
    ///
    /// let inc = Maybe::just(|x: i32| x + 1);
    /// assert_eq!(inc.apply(Maybe::nothing()), Maybe::nothing());
    /// ```
    #[inline]
    pub fn apply<T, R>(self, arg: Maybe<T>) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        match (self, arg) {
            (Maybe::Just(f), Maybe::Just(value)) => Maybe::Just(f(value)),
            _ => Maybe::Nothing,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Remove one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.and_then(|inner| inner)
    }
}

impl<T: Clone> Maybe<&T> {
    /// Clone the referenced value.
    #[inline]
    pub fn cloned(self) -> Maybe<T> {
        self.map(T::clone)
    }
}

// ========== Trait Implementations ==========

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        Maybe::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> Default for Maybe<T> {
    /// Returns `Nothing`.
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Just(value) => write!(f, "Just {}", value),
            Maybe::Nothing => f.write_str("Nothing"),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_ref().into_option().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Maybe::from_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    #[test]
    fn test_just_accepts_zero_like_values() {
        assert!(Maybe::just(0).is_just());
        assert!(Maybe::just(String::new()).is_just());
        assert!(Maybe::just(false).is_just());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Maybe::from_option(Some("x")), Maybe::just("x"));
        assert_eq!(Maybe::<&str>::from_option(None), Maybe::nothing());
        assert_eq!(Maybe::from(Some(1)), Maybe::just(1));
    }

    #[test]
    fn test_predicates() {
        let just = Maybe::just(1);
        let nothing: Maybe<i32> = Maybe::nothing();
        assert!(just.is_just());
        assert!(!just.is_nothing());
        assert!(nothing.is_nothing());
        assert!(!nothing.is_just());
    }

    #[test]
    fn test_fold_runs_one_branch() {
        let nothing_calls = Cell::new(0);
        let just_calls = Cell::new(0);

        let r = Maybe::just(2).fold(
            || {
                nothing_calls.set(nothing_calls.get() + 1);
                0
            },
            |x| {
                just_calls.set(just_calls.get() + 1);
                x * 10
            },
        );
        assert_eq!(r, 20);
        assert_eq!(nothing_calls.get(), 0);
        assert_eq!(just_calls.get(), 1);
    }

    #[test]
    fn test_map_and_then_on_nothing_never_call() {
        let calls = Cell::new(0);
        let nothing: Maybe<i32> = Maybe::nothing();

        let mapped = nothing.map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        let bound = mapped.and_then(|x| {
            calls.set(calls.get() + 1);
            Maybe::just(x)
        });

        assert_eq!(bound, Maybe::nothing());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_filter() {
        assert_eq!(Maybe::just(10).filter(|x| *x > 5), Maybe::just(10));
        assert_eq!(Maybe::just(1).filter(|x| *x > 5), Maybe::nothing());
        assert_eq!(Maybe::<i32>::nothing().filter(|_| true), Maybe::nothing());
    }

    #[test]
    fn test_get_or_else() {
        assert_eq!(Maybe::just("x").get_or_else("y"), "x");
        assert_eq!(Maybe::nothing().get_or_else("y"), "y");
    }

    #[test]
    fn test_get_or_else_with_is_lazy() {
        let calls = Cell::new(0);
        let value = Maybe::just(1).get_or_else_with(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 1);
        assert_eq!(calls.get(), 0);

        assert_eq!(Maybe::<i32>::nothing().get_or_else_with(|| 7), 7);
    }

    #[test]
    fn test_force_unwrap_on_just() {
        assert_eq!(Maybe::just("hello").force_unwrap(), "hello");
    }

    #[test]
    #[should_panic(expected = "called `Maybe::force_unwrap()` on a `Nothing` value")]
    fn test_force_unwrap_on_nothing_panics() {
        Maybe::<i32>::nothing().force_unwrap();
    }

    #[test]
    fn test_try_unwrap() {
        assert_eq!(Maybe::just(3).try_unwrap(), Ok(3));
        assert_eq!(Maybe::<i32>::nothing().try_unwrap(), Err(NothingError));
    }

    #[test]
    fn test_for_each() {
        let mut seen = Vec::new();
        assert_eq!(Maybe::just(5).for_each(|x| seen.push(x)), Maybe::just(Unit));
        assert_eq!(
            Maybe::<i32>::nothing().for_each(|x| seen.push(x)),
            Maybe::nothing()
        );
        assert_eq!(seen, vec![5]);
    }

    #[test]
    fn test_apply() {
        let add = Maybe::just(|x: i32| x + 10);
        assert_eq!(add.apply(Maybe::just(1)), Maybe::just(11));

        let missing: Maybe<fn(i32) -> i32> = Maybe::nothing();
        assert_eq!(missing.apply(Maybe::just(1)), Maybe::nothing());
    }

    #[test]
    fn test_or_and_or_else() {
        assert_eq!(Maybe::just(1).or(Maybe::just(2)), Maybe::just(1));
        assert_eq!(Maybe::nothing().or(Maybe::just(2)), Maybe::just(2));
        assert_eq!(Maybe::nothing().or_else(|| Maybe::just(3)), Maybe::just(3));
    }

    #[test]
    fn test_flatten() {
        assert_eq!(Maybe::just(Maybe::just(1)).flatten(), Maybe::just(1));
        assert_eq!(Maybe::just(Maybe::<i32>::nothing()).flatten(), Maybe::nothing());
        assert_eq!(Maybe::<Maybe<i32>>::nothing().flatten(), Maybe::nothing());
    }

    #[test]
    fn test_iter_is_restartable() {
        let m = Maybe::just(9);
        assert_eq!(m.iter().count(), 1);
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![&9]);

        let empty: Maybe<i32> = Maybe::nothing();
        assert_eq!(empty.iter().count(), 0);
    }

    #[test]
    fn test_iter_mut() {
        let mut m = Maybe::just(2);
        for v in m.iter_mut() {
            *v *= 5;
        }
        assert_eq!(m, Maybe::just(10));
    }

    #[test]
    fn test_into_iter() {
        let collected: Vec<_> = Maybe::just("a").into_iter().collect();
        assert_eq!(collected, vec!["a"]);
        let collected: Vec<&str> = Maybe::nothing().into_iter().collect();
        assert!(collected.is_empty());
    }

    #[test]
    fn test_equality() {
        assert_eq!(Maybe::just("a"), Maybe::just("a"));
        assert_ne!(Maybe::just("a"), Maybe::just("b"));
        assert_eq!(Maybe::<&str>::nothing(), Maybe::<&str>::nothing());
        assert_ne!(Maybe::just("a"), Maybe::nothing());
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let mut set = HashSet::new();
        set.insert(Maybe::just(1));
        set.insert(Maybe::just(1));
        set.insert(Maybe::nothing());
        set.insert(Maybe::nothing());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_ordering_matches_option() {
        assert!(Maybe::nothing() < Maybe::just(0));
        assert!(Maybe::just(1) < Maybe::just(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Maybe::just(5).to_string(), "Just 5");
        assert_eq!(Maybe::<i32>::nothing().to_string(), "Nothing");
    }

    #[test]
    fn test_default_is_nothing() {
        assert_eq!(Maybe::<String>::default(), Maybe::nothing());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Maybe::just(1).into_option(), Some(1));
        assert_eq!(Option::<i32>::from(Maybe::nothing()), None);
        assert_eq!(Maybe::<i32>::nothing().ok_or("e"), Either::left("e"));
        assert_eq!(Maybe::just(2).ok_or_fail("e"), Outcome::success(2));
    }

    #[test]
    fn test_bind_iter_on_nothing_is_empty() {
        let words: Vec<&str> = Maybe::<&str>::nothing()
            .bind_iter(|s| s.split(' '))
            .collect();
        assert!(words.is_empty());
    }

    #[test]
    fn test_cloned() {
        let s = String::from("x");
        assert_eq!(Maybe::just(&s).cloned(), Maybe::just("x".to_string()));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn half(x: i32) -> Maybe<i32> {
        if x % 2 == 0 {
            Maybe::just(x / 2)
        } else {
            Maybe::nothing()
        }
    }

    fn positive(x: i32) -> Maybe<i32> {
        Maybe::just(x).filter(|v| *v > 0)
    }

    fn maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
        proptest::option::of(any::<i32>()).prop_map(Maybe::from_option)
    }

    proptest! {
        #[test]
        fn prop_functor_identity(m in maybe_i32()) {
            prop_assert_eq!(m.map(|v| v), m);
        }

        #[test]
        fn prop_functor_composition(m in maybe_i32()) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);
            prop_assert_eq!(m.map(f).map(g), m.map(|v| g(f(v))));
        }

        #[test]
        fn prop_left_identity(x: i32) {
            prop_assert_eq!(Maybe::just(x).and_then(half), half(x));
        }

        #[test]
        fn prop_right_identity(m in maybe_i32()) {
            prop_assert_eq!(m.and_then(Maybe::just), m);
        }

        #[test]
        fn prop_associativity(m in maybe_i32()) {
            prop_assert_eq!(
                m.and_then(half).and_then(positive),
                m.and_then(|x| half(x).and_then(positive))
            );
        }

        #[test]
        fn prop_filter_true_is_identity(m in maybe_i32()) {
            prop_assert_eq!(m.filter(|_| true), m);
        }

        #[test]
        fn prop_option_roundtrip(o in proptest::option::of(any::<i32>())) {
            prop_assert_eq!(Maybe::from_option(o).into_option(), o);
        }
    }
}
