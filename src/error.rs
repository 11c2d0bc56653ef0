//! The programmer-error kind raised by forced unwraps.

use std::error::Error as StdError;
use std::fmt;

/// Error returned when a `Nothing` is unwrapped.
///
/// This signals misuse rather than a recoverable condition: absence is a normal
/// `Maybe` state and should be handled with `fold`, `match` or `get_or_else`.
/// [`Maybe::force_unwrap`](crate::Maybe::force_unwrap) panics with this error's
/// message; [`Maybe::try_unwrap`](crate::Maybe::try_unwrap) returns it.
///
/// # Example
///
/// ```rust
/// use confluence::{Maybe, NothingError};
///
/// let empty: Maybe<i32> = Maybe::nothing();
/// assert_eq!(empty.try_unwrap(), Err(NothingError));
/// assert_eq!(
///     NothingError.to_string(),
///     "called `Maybe::force_unwrap()` on a `Nothing` value"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NothingError;

impl fmt::Display for NothingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("called `Maybe::force_unwrap()` on a `Nothing` value")
    }
}

impl StdError for NothingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            NothingError.to_string(),
            "called `Maybe::force_unwrap()` on a `Nothing` value"
        );
    }

    #[test]
    fn test_is_std_error() {
        let boxed: Box<dyn StdError> = Box::new(NothingError);
        assert!(boxed.source().is_none());
    }
}
