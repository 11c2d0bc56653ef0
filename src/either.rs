//! A value on exactly one of two branches.
//!
//! `Either<L, R>` is the two-payload cousin of [`Outcome`]: both branches carry
//! arbitrary data and neither is an error by itself. `Right` is the main
//! branch. `map`, `and_then`, `for_each` and iteration only look at `Right`,
//! and a `Left` rides through them untouched until the chain is ended with
//! [`Either::fold`] or a `match`.
//!
//! Nothing here panics. To get a payload out, fold it, match on it, iterate
//! it, or ask for one side with [`Either::into_left`] / [`Either::into_right`],
//! which answer with a [`Maybe`].
//!
//! # Examples
//!
//! ```rust
//! use confluence::Either;
//!
//! // A fetched page is either a redirect target or a body.
//! fn fetch(path: &str) -> Either<String, String> {
//!     match path {
//!         "/old" => Either::left("/new".to_string()),
//!         _ => Either::right(format!("<h1>{}</h1>", path)),
//!     }
//! }
//!
//! let size = fetch("/docs").map(|body| body.len());
//! assert_eq!(size, Either::right(14));
//!
//! let shown = fetch("/old").fold(|to| format!("302 -> {}", to), |body| body);
//! assert_eq!(shown, "302 -> /new");
//! ```

use std::fmt;

use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::unit::{to_func1, Unit};

/// Either a `Left(L)` or a `Right(R)`, biased toward `Right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The alternate branch
    Left(L),
    /// The main branch
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Put `value` on the alternate branch.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Put `value` on the main branch.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// `true` for a `Left`.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// `true` for a `Right`.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Total case analysis: run `on_left` or `on_right`, never both.
    ///
    /// ```rust
    /// use confluence::Either;
    ///
    /// let status = |e: Either<u16, &str>| e.fold(|code| code, |_| 200);
    /// assert_eq!(status(Either::left(404)), 404);
    /// assert_eq!(status(Either::right("<html>")), 200);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    // ========== Right-biased combinators ==========

    /// Transform a `Right` payload; a `Left` keeps its value and `f` is not run.
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        self.and_then(|r| Either::Right(f(r)))
    }

    /// Continue with a step that may itself turn `Left`.
    ///
    /// ```rust
    /// use confluence::Either;
    ///
    /// fn non_empty(body: String) -> Either<&'static str, String> {
    ///     if body.is_empty() { Either::left("empty body") } else { Either::right(body) }
    /// }
    ///
    /// let page: Either<&str, String> = Either::right(String::new());
    /// assert_eq!(page.and_then(non_empty), Either::left("empty body"));
    /// ```
    #[inline]
    pub fn and_then<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Right(r) => f(r),
            Either::Left(l) => Either::Left(l),
        }
    }

    /// Run `action` on a `Right` payload.
    ///
    /// The result tells which branch was taken, with the payload spent.
    ///
    /// ```rust
    /// use confluence::{Either, Unit};
    ///
    /// let mut rendered = Vec::new();
    /// let page: Either<u16, &str> = Either::right("<p>hi</p>");
    /// assert_eq!(page.for_each(|body| rendered.push(body)), Either::right(Unit));
    /// assert_eq!(rendered, vec!["<p>hi</p>"]);
    /// ```
    #[inline]
    pub fn for_each<F>(self, action: F) -> Either<L, Unit>
    where
        F: FnOnce(R),
    {
        self.map(to_func1(action))
    }

    /// Transform a `Left` payload instead.
    ///
    /// ```rust
    /// use confluence::Either;
    ///
    /// let redirect: Either<&str, String> = Either::left("/new");
    /// assert_eq!(
    ///     redirect.map_left(|to| format!("moved to {}", to)),
    ///     Either::left("moved to /new".to_string())
    /// );
    /// ```
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        self.fold(|l| Either::Left(f(l)), Either::Right)
    }

    // ========== Leaving the Either ==========

    /// The `Left` payload, or `Nothing`.
    #[inline]
    pub fn into_left(self) -> Maybe<L> {
        self.fold(Maybe::Just, |_| Maybe::Nothing)
    }

    /// The `Right` payload, or `Nothing`.
    ///
    /// ```rust
    /// use confluence::{Either, Maybe};
    ///
    /// let hit: Either<u16, &str> = Either::right("cached");
    /// assert_eq!(hit.into_right(), Maybe::just("cached"));
    /// assert_eq!(Either::<u16, &str>::left(500).into_right(), Maybe::nothing());
    /// ```
    #[inline]
    pub fn into_right(self) -> Maybe<R> {
        self.fold(|_| Maybe::Nothing, Maybe::Just)
    }

    /// Borrow both payloads.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Turn a `Left` into a failure whose message is the rendered payload.
    ///
    /// ```rust
    /// use confluence::{Either, Outcome};
    ///
    /// let missing: Either<u16, &str> = Either::left(404);
    /// assert_eq!(missing.into_outcome(), Outcome::fail("404"));
    /// ```
    #[inline]
    pub fn into_outcome(self) -> Outcome<R>
    where
        L: fmt::Display,
    {
        self.fold(|l| Outcome::Failure(l.to_string()), Outcome::Success)
    }

    /// Iterate the `Right` payload by reference: one element or none.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&R> {
        self.as_ref().into_right().into_iter()
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Collapse a nested `Right(Either)` into its inner value.
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.and_then(|inner| inner)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.fold(Err, Ok)
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_right().into_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = std::option::IntoIter<&'a R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Split a sequence of `Either`s by branch, keeping the order inside each side.
///
/// ```rust
/// use confluence::either::{partition, Either};
///
/// let fetched = vec![
///     Either::right("index.html"),
///     Either::left(404),
///     Either::right("about.html"),
///     Either::left(500),
/// ];
/// let (errors, pages) = partition(fetched);
/// assert_eq!(errors, vec![404, 500]);
/// assert_eq!(pages, vec!["index.html", "about.html"]);
/// ```
pub fn partition<L, R, I>(iter: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter()
        .fold((Vec::new(), Vec::new()), |(mut ls, mut rs), item| {
            match item {
                Either::Left(l) => ls.push(l),
                Either::Right(r) => rs.push(r),
            }
            (ls, rs)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn lookup(key: &str) -> Either<u16, &'static str> {
        match key {
            "home" => Either::right("<h1>home</h1>"),
            "old" => Either::left(301),
            _ => Either::left(404),
        }
    }

    #[test]
    fn test_branch_predicates() {
        assert!(lookup("home").is_right());
        assert!(!lookup("home").is_left());
        assert!(lookup("gone").is_left());
    }

    #[test]
    fn test_fold_runs_exactly_one_side() {
        let lefts = Cell::new(0);
        let rights = Cell::new(0);
        let count = |e: Either<u16, &str>| {
            e.fold(|_| lefts.set(lefts.get() + 1), |_| rights.set(rights.get() + 1))
        };
        count(lookup("home"));
        count(lookup("old"));
        count(lookup("nope"));
        assert_eq!((lefts.get(), rights.get()), (2, 1));
    }

    #[test]
    fn test_left_rides_through_chain() {
        let calls = Cell::new(0);
        let result = lookup("old")
            .map(|body| {
                calls.set(calls.get() + 1);
                body.len()
            })
            .and_then(|len| {
                calls.set(calls.get() + 1);
                Either::right(len * 2)
            });
        assert_eq!(result, Either::left(301));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_and_then_can_switch_to_left() {
        let too_long = |body: &'static str| {
            if body.len() > 5 {
                Either::left(413)
            } else {
                Either::right(body)
            }
        };
        assert_eq!(lookup("home").and_then(too_long), Either::left(413));
    }

    #[test]
    fn test_for_each_skips_left() {
        let mut served = Vec::new();
        assert_eq!(lookup("missing").for_each(|b| served.push(b)), Either::left(404));
        assert_eq!(lookup("home").for_each(|b| served.push(b)), Either::right(Unit));
        assert_eq!(served, vec!["<h1>home</h1>"]);
    }

    #[test]
    fn test_map_left_leaves_right_alone() {
        let described = lookup("old").map_left(|code| format!("status {}", code));
        assert_eq!(described, Either::left("status 301".to_string()));
        assert_eq!(
            lookup("home").map_left(|code| code + 1),
            Either::right("<h1>home</h1>")
        );
    }

    #[test]
    fn test_sides_as_maybe() {
        assert_eq!(lookup("old").into_left(), Maybe::just(301));
        assert_eq!(lookup("old").into_right(), Maybe::nothing());
        assert_eq!(lookup("home").into_left(), Maybe::nothing());
    }

    #[test]
    fn test_into_outcome_renders_left() {
        assert_eq!(lookup("x").into_outcome(), Outcome::fail("404"));
        assert_eq!(lookup("home").into_outcome(), Outcome::success("<h1>home</h1>"));
    }

    #[test]
    fn test_result_conversions() {
        let parsed: Either<std::num::ParseIntError, u16> = "8080".parse::<u16>().into();
        assert_eq!(parsed.into_right(), Maybe::just(8080));

        let back: Result<&str, u16> = lookup("old").into();
        assert_eq!(back, Err(301));
    }

    #[test]
    fn test_flatten_nested() {
        let inner_left: Either<u16, Either<u16, &str>> = Either::right(Either::left(500));
        assert_eq!(inner_left.flatten(), Either::left(500));

        let outer_left: Either<u16, Either<u16, &str>> = Either::left(400);
        assert_eq!(outer_left.flatten(), Either::left(400));

        let both_right: Either<u16, Either<u16, &str>> = Either::right(Either::right("ok"));
        assert_eq!(both_right.flatten(), Either::right("ok"));
    }

    #[test]
    fn test_iterates_right_only() {
        let page = lookup("home");
        assert_eq!(page.iter().count(), 1);
        assert_eq!((&page).into_iter().next(), Some(&"<h1>home</h1>"));
        assert_eq!(lookup("old").into_iter().count(), 0);
    }

    #[test]
    fn test_partition_keeps_order() {
        let (codes, bodies) = partition(["home", "a", "old", "home"].map(lookup));
        assert_eq!(codes, vec![404, 301]);
        assert_eq!(bodies.len(), 2);
    }
}
