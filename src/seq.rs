//! Bridges between iterators and `Maybe`.
//!
//! Every adapter here is lazy and pull-driven: nothing runs until the
//! consumer asks for the next element, and a partial consumer (such as
//! [`list_to_maybe`]) never evaluates past what it needs. That makes the
//! operations safe on infinite iterators.
//!
//! The operations come in two forms: free functions taking any
//! `IntoIterator`, and the [`IteratorExt`] extension trait for method chains.
//!
//! # Examples
//!
//! ```rust
//! use confluence::seq::IteratorExt;
//! use confluence::Maybe;
//!
//! let ports: Vec<u16> = ["80", "http", "443"]
//!     .into_iter()
//!     .map_maybe(|s| Maybe::from_option(s.parse().ok()))
//!     .collect();
//! assert_eq!(ports, vec![80, 443]);
//!
//! let first_even = (1..).map(|x| x * 3).find_maybe(|x| x % 2 == 0);
//! assert_eq!(first_even, Maybe::just(6));
//! ```

use std::iter::FlatMap;

use crate::maybe::Maybe;
use crate::unit::Unit;

/// `Nothing` for an empty sequence, otherwise `Just` the first element.
///
/// Pulls at most one element.
///
/// ```rust
/// use confluence::seq::list_to_maybe;
/// use confluence::Maybe;
///
/// assert_eq!(list_to_maybe(vec![1, 2, 3]), Maybe::just(1));
/// assert_eq!(list_to_maybe(Vec::<i32>::new()), Maybe::nothing());
/// assert_eq!(list_to_maybe(5..), Maybe::just(5));
/// ```
pub fn list_to_maybe<I>(iter: I) -> Maybe<I::Item>
where
    I: IntoIterator,
{
    Maybe::from_option(iter.into_iter().next())
}

/// A sequence of zero or one element.
pub fn maybe_to_list<T>(maybe: Maybe<T>) -> std::option::IntoIter<T> {
    maybe.into_iter()
}

/// Keep the payloads of the `Just` elements, in order.
///
/// ```rust
/// use confluence::seq::cat_maybes;
/// use confluence::Maybe;
///
/// let xs = vec![Maybe::just(1), Maybe::nothing(), Maybe::just(3)];
/// assert_eq!(cat_maybes(xs).collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub fn cat_maybes<T, I>(iter: I) -> CatMaybes<I::IntoIter>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    CatMaybes {
        iter: iter.into_iter(),
    }
}

/// Apply `f` to every element and keep the `Just` results, in order.
///
/// Equivalent to mapping `f` and then [`cat_maybes`].
///
/// ```rust
/// use confluence::seq::map_maybe;
/// use confluence::Maybe;
///
/// let xs = vec![Some("x"), Some("y"), Some("z"), None, None];
/// let upper: Vec<_> = map_maybe(xs, |s| Maybe::from_option(s).map(str::to_uppercase)).collect();
/// assert_eq!(upper, vec!["X", "Y", "Z"]);
/// ```
pub fn map_maybe<T, R, I, F>(iter: I, f: F) -> MapMaybe<I::IntoIter, F>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Maybe<R>,
{
    MapMaybe {
        iter: iter.into_iter(),
        f,
    }
}

/// Flat-map: the results of `f` for each element, one element at a time.
///
/// The results of one upstream element are exhausted before the next
/// upstream element is pulled.
///
/// ```rust
/// use confluence::seq::bind;
///
/// let words: Vec<_> = bind(
///     vec!["bulbasaur ivysaur venusaur", "charmander charmeleon squirtle"],
///     |s| s.split(' '),
/// )
/// .collect();
/// assert_eq!(words.len(), 6);
/// assert_eq!(words[0], "bulbasaur");
/// assert_eq!(words[5], "squirtle");
/// ```
pub fn bind<T, U, I, F>(iter: I, f: F) -> FlatMap<I::IntoIter, U, F>
where
    I: IntoIterator<Item = T>,
    U: IntoIterator,
    F: FnMut(T) -> U,
{
    iter.into_iter().flat_map(f)
}

/// Flat-map through a `Maybe`: elements for which `f` yields `Nothing` vanish.
///
/// ```rust
/// use confluence::seq::bind_maybe;
/// use confluence::parse::ParseExt;
///
/// let numbers: Vec<i32> = bind_maybe(vec!["44", "pikachu", "42"], |s| s.parse_int()).collect();
/// assert_eq!(numbers, vec![44, 42]);
/// ```
pub fn bind_maybe<T, R, I, F>(iter: I, f: F) -> FlatMap<I::IntoIter, Maybe<R>, F>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Maybe<R>,
{
    iter.into_iter().flat_map(f)
}

/// Iterator adapter returned by [`cat_maybes`] and [`IteratorExt::cat_maybes`].
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct CatMaybes<I> {
    iter: I,
}

impl<T, I> Iterator for CatMaybes<I>
where
    I: Iterator<Item = Maybe<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        for item in self.iter.by_ref() {
            if let Maybe::Just(value) = item {
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Iterator adapter returned by [`map_maybe`] and [`IteratorExt::map_maybe`].
#[derive(Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct MapMaybe<I, F> {
    iter: I,
    f: F,
}

impl<I: std::fmt::Debug, F> std::fmt::Debug for MapMaybe<I, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapMaybe").field("iter", &self.iter).finish()
    }
}

impl<T, R, I, F> Iterator for MapMaybe<I, F>
where
    I: Iterator<Item = T>,
    F: FnMut(T) -> Maybe<R>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        for item in self.iter.by_ref() {
            if let Maybe::Just(value) = (self.f)(item) {
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Extension methods bridging iterators and `Maybe`.
///
/// Implemented for every `Iterator`.
pub trait IteratorExt: Iterator {
    /// `Just` the first element, or `Nothing` if empty. Pulls at most one element.
    fn first_maybe(mut self) -> Maybe<Self::Item>
    where
        Self: Sized,
    {
        Maybe::from_option(self.next())
    }

    /// `Just` the first element satisfying `predicate`.
    ///
    /// Stops pulling as soon as a match is found.
    fn find_maybe<P>(mut self, predicate: P) -> Maybe<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::from_option(self.find(predicate))
    }

    /// Keep the payloads of the `Just` elements, in order.
    fn cat_maybes<T>(self) -> CatMaybes<Self>
    where
        Self: Sized + Iterator<Item = Maybe<T>>,
    {
        CatMaybes { iter: self }
    }

    /// Apply `f` and keep the `Just` results, in order.
    fn map_maybe<R, F>(self, f: F) -> MapMaybe<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Maybe<R>,
    {
        MapMaybe { iter: self, f }
    }

    /// Lazy flat-map.
    fn bind<U, F>(self, f: F) -> FlatMap<Self, U, F>
    where
        Self: Sized,
        U: IntoIterator,
        F: FnMut(Self::Item) -> U,
    {
        self.flat_map(f)
    }

    /// Lazy flat-map through a `Maybe`.
    fn bind_maybe<R, F>(self, f: F) -> FlatMap<Self, Maybe<R>, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Maybe<R>,
    {
        self.flat_map(f)
    }

    /// Run `action` on every element and return [`Unit`].
    ///
    /// ```rust
    /// use confluence::seq::IteratorExt;
    /// use confluence::Unit;
    ///
    /// let mut total = 0;
    /// assert_eq!([1, 2, 3].into_iter().for_each_unit(|x| total += x), Unit);
    /// assert_eq!(total, 6);
    /// ```
    fn for_each_unit<F>(self, action: F) -> Unit
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.for_each(action);
        Unit
    }
}

impl<I: Iterator> IteratorExt for I {}
