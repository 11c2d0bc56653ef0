//! Success or failure with a human-readable message.
//!
//! `Outcome<T>` is the payload-bearing form, `Outcome` (that is,
//! `Outcome<Unit>`) the payload-less one. A failure is an expected,
//! recoverable result that short-circuits `map` / `and_then` chains: once an
//! outcome fails, later steps are skipped and the original message comes out
//! at the end.
//!
//! # Examples
//!
//! ```rust
//! use confluence::Outcome;
//!
//! fn parse_port(s: &str) -> Outcome<u16> {
//!     s.parse::<u16>().into()
//! }
//!
//! fn check_unprivileged(port: u16) -> Outcome<u16> {
//!     if port >= 1024 {
//!         Outcome::success(port)
//!     } else {
//!         Outcome::fail(format!("port {} is privileged", port))
//!     }
//! }
//!
//! assert_eq!(parse_port("8080").and_then(check_unprivileged), Outcome::success(8080));
//! assert_eq!(
//!     parse_port("80").and_then(check_unprivileged).to_string(),
//!     "Error: port 80 is privileged"
//! );
//! ```
//!
//! Equality compares payloads only when both sides succeeded, and messages
//! only when both failed.

use std::fmt;

use crate::either::Either;
use crate::maybe::Maybe;
use crate::unit::{to_func1, Unit};

/// The outcome of an operation: `Success(T)` or `Failure(message)`.
///
/// # Example
///
/// ```rust
/// use confluence::Outcome;
///
/// let doubled = Outcome::success(32).and_then(|x| Outcome::success(x * 2));
/// assert!(doubled.is_success());
/// assert_eq!(doubled.value().cloned(), confluence::Maybe::just(64));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T = Unit> {
    /// The operation succeeded
    Success(T),
    /// The operation failed with a message
    Failure(String),
}

impl Outcome<Unit> {
    /// A payload-less success.
    ///
    /// ```rust
    /// use confluence::Outcome;
    ///
    /// let done = Outcome::ok();
    /// assert!(done.is_success());
    /// assert_eq!(done.to_string(), "Success");
    /// ```
    #[inline]
    pub fn ok() -> Self {
        Outcome::Success(Unit)
    }

    /// Build from a success flag.
    ///
    /// `false` produces a failure with an empty message, so an empty message
    /// on its own is not evidence of anything.
    ///
    /// ```rust
    /// use confluence::Outcome;
    ///
    /// assert_eq!(Outcome::from_bool(true), Outcome::ok());
    /// assert_eq!(Outcome::from_bool(false), Outcome::fail(""));
    /// ```
    #[inline]
    pub fn from_bool(success: bool) -> Self {
        if success {
            Outcome::ok()
        } else {
            Outcome::Failure(String::new())
        }
    }
}

impl<T> Outcome<T> {
    // ========== Constructors ==========

    /// A success carrying `value`.
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// A failure carrying `message`.
    #[inline]
    pub fn fail(message: impl Into<String>) -> Self {
        Outcome::Failure(message.into())
    }

    // ========== Predicates ==========

    /// Returns `true` on success.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` on failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    // ========== Accessors ==========

    /// The failure message, if any.
    #[inline]
    pub fn error(&self) -> Maybe<&str> {
        match self {
            Outcome::Success(_) => Maybe::Nothing,
            Outcome::Failure(message) => Maybe::Just(message.as_str()),
        }
    }

    /// The success payload, if any.
    #[inline]
    pub fn value(&self) -> Maybe<&T> {
        match self {
            Outcome::Success(value) => Maybe::Just(value),
            Outcome::Failure(_) => Maybe::Nothing,
        }
    }

    // ========== Case Analysis ==========

    /// Run exactly one of the two branches and return its result.
    ///
    /// ```rust
    /// use confluence::Outcome;
    ///
    /// let report = Outcome::<i32>::fail("disk full").fold(
    ///     |e| format!("failed: {}", e),
    ///     |n| format!("wrote {} bytes", n),
    /// );
    /// assert_eq!(report, "failed: disk full");
    /// ```
    #[inline]
    pub fn fold<R, E, S>(self, on_error: E, on_success: S) -> R
    where
        E: FnOnce(String) -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(message) => on_error(message),
        }
    }

    // ========== Transformations ==========

    /// Transform the payload of a success.
    ///
    /// A failure keeps its message and `f` is not called. Panics inside `f`
    /// propagate to the caller.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Chain a computation that may itself fail.
    ///
    /// ```rust
    /// use confluence::Outcome;
    ///
    /// let failed = Outcome::success(42)
    ///     .map(|x| x)
    ///     .and_then(|_| Outcome::<i32>::fail("error"));
    /// assert_eq!(failed.error(), confluence::Maybe::just("error"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Rewrite the failure message, leaving successes alone.
    ///
    /// ```rust
    /// use confluence::Outcome;
    ///
    /// let o = Outcome::<i32>::fail("timeout").map_err(|e| format!("fetching user: {}", e));
    /// assert_eq!(o, Outcome::fail("fetching user: timeout"));
    /// ```
    #[inline]
    pub fn map_err<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(String) -> String,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(message) => Outcome::Failure(f(message)),
        }
    }

    /// Recover from a failure.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(String) -> Outcome<T>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(message) => f(message),
        }
    }

    /// Run a side effect on the payload of a success.
    ///
    /// The returned outcome mirrors the original success or failure.
    ///
    /// ```rust
    /// use confluence::{Outcome, Unit};
    ///
    /// let mut sent = Vec::new();
    /// assert_eq!(Outcome::success("hi").for_each(|m| sent.push(m)), Outcome::success(Unit));
    /// assert_eq!(Outcome::<&str>::fail("offline").for_each(|m| sent.push(m)), Outcome::fail("offline"));
    /// assert_eq!(sent, vec!["hi"]);
    /// ```
    #[inline]
    pub fn for_each<F>(self, action: F) -> Outcome<Unit>
    where
        F: FnOnce(T),
    {
        self.map(to_func1(action))
    }

    // ========== Extractors ==========

    /// Return the payload or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Return the payload or compute one from the failure message.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(String) -> T,
    {
        self.fold(f, |value| value)
    }

    // ========== Conversions ==========

    /// Convert into a std `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(message) => Err(message),
        }
    }

    /// Keep the payload, forgetting the failure message.
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            Outcome::Success(value) => Maybe::Just(value),
            Outcome::Failure(_) => Maybe::Nothing,
        }
    }

    /// Convert into `Either`, with the message on the left.
    #[inline]
    pub fn into_either(self) -> Either<String, T> {
        match self {
            Outcome::Success(value) => Either::Right(value),
            Outcome::Failure(message) => Either::Left(message),
        }
    }

    // ========== Iterator Support ==========

    /// Iterate over the payload: one element on success, none on failure.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.value().into_iter()
    }
}

// ========== Trait Implementations ==========

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(e) => Outcome::Failure(e.to_string()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, String> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl fmt::Display for Outcome<Unit> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(_) => f.write_str("Success"),
            Outcome::Failure(message) => write!(f, "Error: {}", message),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success: {}", value),
            Outcome::Failure(message) => write!(f, "Error: {}", message),
        }
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_maybe().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ========== Collection Utilities ==========

/// Lazily extract the payloads of all successes, in order.
pub fn successes<T, I>(iter: I) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    iter.into_iter().filter_map(|o| o.into_maybe().into_option())
}

/// Lazily extract the messages of all failures, in order.
///
/// ```rust
/// use confluence::outcome::{failures, Outcome};
///
/// let results = vec![Outcome::success(1), Outcome::fail("a"), Outcome::fail("b")];
/// assert_eq!(failures(results).collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
pub fn failures<T, I>(iter: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    iter.into_iter().filter_map(|o| o.into_either().into_left().into_option())
}
