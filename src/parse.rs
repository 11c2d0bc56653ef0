//! String parsing that reports failure as `Nothing`.
//!
//! Surrounding whitespace is ignored, so `" 42 "` parses as `42`.
//!
//! ```rust
//! use confluence::parse::ParseExt;
//! use confluence::Maybe;
//!
//! assert_eq!("42".parse_int(), Maybe::just(42));
//! assert_eq!("not_an_int".parse_int(), Maybe::nothing());
//! assert_eq!("not_an_int".parse_int_or(7), 7);
//! assert_eq!("2.5".parse_maybe::<f64>(), Maybe::just(2.5));
//! ```

use std::str::FromStr;

use crate::maybe::Maybe;

/// Parsing helpers for string slices.
pub trait ParseExt {
    /// Parse into any `FromStr` type.
    fn parse_maybe<T: FromStr>(&self) -> Maybe<T>;

    /// Parse an `i32`.
    fn parse_int(&self) -> Maybe<i32> {
        self.parse_maybe()
    }

    /// Parse an `i32`, falling back to `default`.
    fn parse_int_or(&self, default: i32) -> i32 {
        self.parse_int().get_or_else(default)
    }

    /// Parse an `f64`.
    fn parse_double(&self) -> Maybe<f64> {
        self.parse_maybe()
    }

    /// Parse an `f64`, falling back to `default`.
    fn parse_double_or(&self, default: f64) -> f64 {
        self.parse_double().get_or_else(default)
    }

    /// Parse an `f32`.
    fn parse_float(&self) -> Maybe<f32> {
        self.parse_maybe()
    }

    /// Parse an `f32`, falling back to `default`.
    fn parse_float_or(&self, default: f32) -> f32 {
        self.parse_float().get_or_else(default)
    }

    /// Parse an exact decimal. Requires the `decimal` feature.
    ///
    /// ```rust
    /// # #[cfg(feature = "decimal")]
    /// # {
    /// use confluence::parse::ParseExt;
    /// use rust_decimal::Decimal;
    ///
    /// let total = "19.99".parse_decimal().map(|d| d * Decimal::from(3));
    /// assert_eq!(total.map(|d| d.to_string()), confluence::Maybe::just("59.97".to_string()));
    /// # }
    /// ```
    #[cfg(feature = "decimal")]
    fn parse_decimal(&self) -> Maybe<rust_decimal::Decimal> {
        self.parse_maybe()
    }

    /// Parse an exact decimal, falling back to `default`. Requires the `decimal` feature.
    #[cfg(feature = "decimal")]
    fn parse_decimal_or(&self, default: rust_decimal::Decimal) -> rust_decimal::Decimal {
        self.parse_decimal().get_or_else(default)
    }
}

impl ParseExt for str {
    fn parse_maybe<T: FromStr>(&self) -> Maybe<T> {
        Maybe::from_option(self.trim().parse().ok())
    }
}
