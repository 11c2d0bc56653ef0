//! # Confluence
//!
//! Optional values, two-branch values and string-error outcomes that compose
//! the same way, plus the glue to move between them and iterators.
//!
//! - [`Maybe<T>`]: a value that is either present (`Just`) or absent (`Nothing`)
//! - [`Either<L, R>`]: a value on one of two branches, biased toward `Right`
//! - [`Outcome<T>`]: a success carrying `T`, or a failure carrying a message
//! - [`seq`]: bridges between iterators and `Maybe`
//!
//! ## Quick Example
//!
//! ```rust
//! use confluence::prelude::*;
//!
//! fn port(raw: &str) -> Outcome<u16> {
//!     raw.parse_maybe::<u16>()
//!         .filter(|p| *p >= 1024)
//!         .ok_or_fail(format!("invalid port: {}", raw))
//! }
//!
//! assert_eq!(port("8080"), Outcome::success(8080));
//! assert_eq!(port("80"), Outcome::fail("invalid port: 80"));
//!
//! let ports: Vec<u16> = ["8080", "x", "9000"]
//!     .iter()
//!     .map_maybe(|s| s.parse_maybe::<u16>())
//!     .collect();
//! assert_eq!(ports, vec![8080, 9000]);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every type
//! - `proptest`: `Arbitrary` implementations, see [`testing`]
//! - `tracing`: logging of short-circuit branches, see `trace`

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod either;
pub mod error;
pub mod func;
pub mod maybe;
pub mod outcome;
pub mod parse;
pub mod seq;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod trace;
pub mod traverse;
pub mod unit;

// Re-exports
pub use either::Either;
pub use error::NothingError;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use parse::ParseExt;
pub use seq::IteratorExt;
pub use unit::Unit;

#[cfg(feature = "tracing")]
pub use trace::TraceExt;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::error::NothingError;
    pub use crate::maybe::Maybe;
    pub use crate::outcome::Outcome;
    pub use crate::parse::ParseExt;
    pub use crate::seq::IteratorExt;
    pub use crate::unit::Unit;

    #[cfg(feature = "tracing")]
    pub use crate::trace::TraceExt;
}
