//! Logging of the short-circuit branches.
//!
//! This module is only available with the `tracing` feature. [`TraceExt::trace`]
//! emits an event when a value is on its absent, alternate or failed branch and
//! returns the value unchanged, so it can sit anywhere in a chain.
//!
//! | type          | branch logged | level   |
//! |---------------|---------------|---------|
//! | `Maybe<T>`    | `Nothing`     | `DEBUG` |
//! | `Either<L,R>` | `Left`        | `DEBUG` |
//! | `Outcome<T>`  | `Failure`     | `WARN`  |
//!
//! # Example
//!
//! ```rust
//! use confluence::trace::TraceExt;
//! use confluence::{Maybe, Outcome};
//!
//! let port = Outcome::<u16>::fail("PORT is not set")
//!     .trace("loading port")
//!     .unwrap_or(8080);
//! assert_eq!(port, 8080);
//!
//! let name = Maybe::<&str>::nothing().trace("looking up user").get_or_else("guest");
//! assert_eq!(name, "guest");
//! ```

use std::fmt;

use crate::either::Either;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Extension trait for logging the short-circuit branch of a value.
pub trait TraceExt: Sized {
    /// Log `context` if `self` is on its short-circuit branch; return `self` unchanged.
    fn trace(self, context: &str) -> Self;
}

impl<T> TraceExt for Maybe<T> {
    fn trace(self, context: &str) -> Self {
        if self.is_nothing() {
            tracing::debug!(context, "value absent");
        }
        self
    }
}

impl<L: fmt::Debug, R> TraceExt for Either<L, R> {
    fn trace(self, context: &str) -> Self {
        if let Either::Left(left) = &self {
            tracing::debug!(context, left = ?left, "took left branch");
        }
        self
    }
}

impl<T> TraceExt for Outcome<T> {
    fn trace(self, context: &str) -> Self {
        if let Outcome::Failure(message) = &self {
            tracing::warn!(context, error = %message, "operation failed");
        }
        self
    }
}
