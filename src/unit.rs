//! The `Unit` marker and adapters that turn side-effecting closures into functions.
//!
//! `Unit` is the "successful, no payload" value. It lets actions take part in
//! `map` chains: an action `FnOnce(T)` becomes a function `FnOnce(T) -> Unit`
//! through [`to_func1`], which is how every `for_each` combinator in this crate
//! is built.
//!
//! # Example
//!
//! ```rust
//! use confluence::unit::{to_func1, Unit};
//!
//! let mut seen = Vec::new();
//! let record = to_func1(|x: i32| seen.push(x));
//! assert_eq!(record(7), Unit);
//! assert_eq!(seen, vec![7]);
//! ```

/// A zero-information value.
///
/// `Unit` is a plain zero-size type: construct it wherever one is needed.
/// It intentionally does not implement `Display`, so `Outcome<Unit>` renders
/// as `Success` rather than `Success: ()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Unit
    }
}

impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}

/// Convert a parameterless action into a function returning [`Unit`].
///
/// # Example
///
/// ```rust
/// use confluence::unit::{to_func, Unit};
///
/// let mut calls = 0;
/// let f = to_func(|| calls += 1);
/// assert_eq!(f(), Unit);
/// assert_eq!(calls, 1);
/// ```
#[inline]
pub fn to_func<F>(action: F) -> impl FnOnce() -> Unit
where
    F: FnOnce(),
{
    move || {
        action();
        Unit
    }
}

/// Convert a one-argument action into a function returning [`Unit`].
#[inline]
pub fn to_func1<A, F>(action: F) -> impl FnOnce(A) -> Unit
where
    F: FnOnce(A),
{
    move |a| {
        action(a);
        Unit
    }
}

/// Convert a two-argument action into a function returning [`Unit`].
///
/// # Example
///
/// ```rust
/// use confluence::unit::{to_func2, Unit};
///
/// let mut total = 0;
/// let add = to_func2(|a: i32, b: i32| total = a + b);
/// assert_eq!(add(2, 3), Unit);
/// assert_eq!(total, 5);
/// ```
#[inline]
pub fn to_func2<A, B, F>(action: F) -> impl FnOnce(A, B) -> Unit
where
    F: FnOnce(A, B),
{
    move |a, b| {
        action(a, b);
        Unit
    }
}
