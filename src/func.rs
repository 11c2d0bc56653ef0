//! Small function combinators: composition, argument swapping, currying and
//! partial application.
//!
//! These carry no state and no invariants beyond what their signatures say.
//!
//! ```rust
//! use confluence::func::{compose, partial2, swap_args};
//!
//! let add5 = |x: i32| x + 5;
//! let sub1 = |x: i32| x - 1;
//! assert_eq!(compose(add5, sub1)(1), 5);
//!
//! let sub = |x: i32, y: i32| x - y;
//! let dec = partial2(swap_args(sub), 1);
//! assert_eq!(dec(3), 2);
//! ```

use std::rc::Rc;

/// Returns the value unchanged.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// A function that ignores its input and returns a clone of `value`.
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Run `f`, then `g` on its result.
///
/// ```rust
/// use confluence::func::compose;
///
/// let to_lower = |s: &str| s.to_lowercase();
/// let strip = |s: String| s.replace(' ', "");
/// assert_eq!(compose(to_lower, strip)("Hello World  "), "helloworld");
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

/// Swap the two arguments of a binary function.
#[inline]
pub fn swap_args<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |b, a| f(a, b)
}

/// Fix the first argument of a two-argument function.
#[inline]
pub fn partial2<A, B, C, F>(f: F, a: A) -> impl Fn(B) -> C
where
    F: Fn(A, B) -> C,
    A: Clone,
{
    move |b| f(a.clone(), b)
}

/// Fix the first argument of a three-argument function.
///
/// ```rust
/// use confluence::func::{partial2, partial3};
///
/// let add = |x: i32, y: i32, z: i32| x + y + z;
/// let add1 = partial3(add, 1);
/// assert_eq!(add1(1, 2), 4);
///
/// let add11 = partial2(partial3(add, 1), 1);
/// assert_eq!(add11(1), 3);
/// ```
#[inline]
pub fn partial3<A, B, C, D, F>(f: F, a: A) -> impl Fn(B, C) -> D
where
    F: Fn(A, B, C) -> D,
    A: Clone,
{
    move |b, c| f(a.clone(), b, c)
}

/// Fix the first argument of a four-argument function.
#[inline]
pub fn partial4<A, B, C, D, E, F>(f: F, a: A) -> impl Fn(B, C, D) -> E
where
    F: Fn(A, B, C, D) -> E,
    A: Clone,
{
    move |b, c, d| f(a.clone(), b, c, d)
}

/// A boxed single-argument step of a curried function.
pub type Curried<A, B> = Box<dyn Fn(A) -> B>;

/// Curry a two-argument function.
///
/// The function is shared behind an `Rc`, so every partial application can be
/// called any number of times.
///
/// ```rust
/// use confluence::func::curry2;
///
/// let add = curry2(|x: i32, y: i32| x + y);
/// let add5 = add(5);
/// assert_eq!(add5(2), 7);
/// assert_eq!(add5(3), 8);
/// ```
pub fn curry2<A, B, C, F>(f: F) -> impl Fn(A) -> Curried<B, C>
where
    F: Fn(A, B) -> C + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    let f = Rc::new(f);
    move |a: A| -> Curried<B, C> {
        let f = Rc::clone(&f);
        Box::new(move |b| f(a.clone(), b))
    }
}

/// Curry a three-argument function.
pub fn curry3<A, B, C, D, F>(f: F) -> impl Fn(A) -> Curried<B, Curried<C, D>>
where
    F: Fn(A, B, C) -> D + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    D: 'static,
{
    let f = Rc::new(f);
    move |a: A| -> Curried<B, Curried<C, D>> {
        let f = Rc::clone(&f);
        Box::new(curry2(move |b, c| f(a.clone(), b, c)))
    }
}

/// Curry a four-argument function.
///
/// ```rust
/// use confluence::func::curry4;
///
/// let add = curry4(|w: i32, x: i32, y: i32, z: i32| w + x + y + z);
/// let add12 = add(1)(2);
/// assert_eq!(add12(3)(4), 10);
/// assert_eq!(add12(0)(0), 3);
/// ```
pub fn curry4<A, B, C, D, E, F>(f: F) -> impl Fn(A) -> Curried<B, Curried<C, Curried<D, E>>>
where
    F: Fn(A, B, C, D) -> E + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: 'static,
    E: 'static,
{
    let f = Rc::new(f);
    move |a: A| -> Curried<B, Curried<C, Curried<D, E>>> {
        let f = Rc::clone(&f);
        Box::new(curry3(move |b, c, d| f(a.clone(), b, c, d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_and_constant() {
        assert_eq!(identity(3), 3);
        let always = constant::<_, &str>(5);
        assert_eq!(always("ignored"), 5);
    }

    #[test]
    fn test_compose_across_types() {
        let render = |x: i32| (x + 5).to_string();
        let reparse = |s: String| s.parse::<f64>().unwrap_or(0.0);
        assert_eq!(compose(render, reparse)(1), 6.0);
    }

    #[test]
    fn test_swap_args() {
        let div = |x: i32, y: i32| x / y;
        assert_eq!(swap_args(div)(2, 10), 5);
    }

    #[test]
    fn test_partial_application() {
        let add = |x: i32, y: i32, z: i32, w: i32| x + y + z + w;
        assert_eq!(partial4(add, 1)(2, 3, 4), 10);
        assert_eq!(partial3(partial4(add, 1), 2)(3, 4), 10);
        assert_eq!(partial2(partial3(partial4(add, 1), 2), 3)(4), 10);
    }

    #[test]
    fn test_curry() {
        let add = curry2(|x: i32, y: i32| x + y);
        assert_eq!(add(5)(2), 7);

        let add3 = curry3(|x: i32, y: i32, z: i32| x + y + z);
        let add12 = add3(1)(2);
        assert_eq!(add12(3), 6);
        assert_eq!(add3(1)(2)(3), 6);
    }

    #[test]
    fn test_curried_steps_can_be_stored() {
        let steps: Vec<Curried<i32, Curried<i32, i32>>> = vec![
            curry3(|x: i32, y: i32, z: i32| x + y + z)(1),
            curry3(|x: i32, y: i32, z: i32| x * y * z)(2),
        ];
        let results: Vec<i32> = steps.iter().map(|step| step(3)(4)).collect();
        assert_eq!(results, vec![8, 24]);

        let add4 = curry4(|w: i32, x: i32, y: i32, z: i32| w + x + y + z);
        let last: Curried<i32, i32> = add4(1)(2)(3);
        assert_eq!(last(4), 10);
    }

    #[test]
    fn test_curry_swapped() {
        let sub = |x: i32, y: i32| x - y;
        let dec = curry2(swap_args(sub))(1);
        assert_eq!(dec(3), 2);
    }

    #[test]
    fn test_curry_with_owned_strings() {
        let greet = curry2(|greeting: String, name: &'static str| format!("{}, {}", greeting, name));
        let hello = greet("hello".to_string());
        assert_eq!(hello("ada"), "hello, ada");
        assert_eq!(hello("grace"), "hello, grace");
    }
}
