//! Testing utilities: assertion macros and property-based testing support.
//!
//! # Assertion Macros
//!
//! ```rust
//! use confluence::{assert_failure, assert_failure_message, assert_just, assert_nothing, assert_success};
//! use confluence::{Maybe, Outcome};
//!
//! assert_just!(Maybe::just(1));
//! assert_nothing!(Maybe::<i32>::nothing());
//! assert_success!(Outcome::success(2));
//! assert_failure!(Outcome::<i32>::fail("bad input"));
//! assert_failure_message!(Outcome::<i32>::fail("bad input"), "bad input");
//! ```
//!
//! With the `proptest` feature enabled, `Maybe`, `Either` and `Outcome`
//! implement `proptest::arbitrary::Arbitrary`.

/// Assert that a `Maybe` holds a value.
///
/// Evaluates to the held value, so it can be used to continue a test.
///
/// ```rust
/// use confluence::{assert_just, Maybe};
///
/// let value = assert_just!(Maybe::just(42));
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! assert_just {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Just(value) => value,
            $crate::Maybe::Nothing => {
                panic!("Expected Just, got Nothing");
            }
        }
    };
}

/// Assert that a `Maybe` is `Nothing`.
#[macro_export]
macro_rules! assert_nothing {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Nothing => {}
            $crate::Maybe::Just(v) => {
                panic!("Expected Nothing, got Just: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome succeeded.
///
/// Evaluates to the success payload.
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(e) => {
                panic!("Expected Success, got Failure: {}", e);
            }
        }
    };
}

/// Assert that an outcome failed.
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(_) => {}
            $crate::Outcome::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome failed with a specific message.
///
/// ```rust
/// use confluence::{assert_failure_message, Outcome};
///
/// let o = Outcome::<i32>::fail("timeout").map_err(|e| format!("fetching: {}", e));
/// assert_failure_message!(o, "fetching: timeout");
/// ```
#[macro_export]
macro_rules! assert_failure_message {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Failure(message) => {
                assert_eq!(message, $expected);
            }
            $crate::Outcome::Success(v) => {
                panic!(
                    "Expected Failure with message {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;

    use crate::{Either, Maybe, Outcome};

    impl<T> Arbitrary for Maybe<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            proptest::option::weighted(0.75, any_with::<T>(args))
                .prop_map(Maybe::from_option)
                .boxed()
        }
    }

    impl<L, R> Arbitrary for Either<L, R>
    where
        L: Arbitrary + 'static,
        R: Arbitrary + 'static,
    {
        type Parameters = (L::Parameters, R::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (l_params, r_params) = args;
            prop_oneof![
                any_with::<L>(l_params).prop_map(Either::Left),
                any_with::<R>(r_params).prop_map(Either::Right),
            ]
            .boxed()
        }
    }

    impl<T> Arbitrary for Outcome<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                any_with::<T>(args).prop_map(Outcome::Success),
                any::<String>().prop_map(Outcome::Failure),
            ]
            .boxed()
        }
    }
}
