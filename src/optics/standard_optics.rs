//! Standard optics that are commonly used.
//!
//! This module provides pre-defined optics for tuples and the empty optic
//! [`Ignored`].

use std::marker::PhantomData;

use super::{
    Fold, FunctionIso, FunctionLens, IndexedFold, IndexedSetter, Iso, Lens, Setter, Traversal,
};

/// Creates an identity Iso that doesn't transform the value.
///
/// # Example
///
/// ```
/// use reified_optics::optics::{Iso, iso_identity};
///
/// let identity_iso = iso_identity::<i32>();
///
/// assert_eq!(identity_iso.get(42), 42);
/// assert_eq!(identity_iso.reverse_get(42), 42);
/// ```
#[must_use]
pub fn iso_identity<T>() -> impl Iso<T, T> + Clone {
    FunctionIso::new(|x: T| x, |x: T| x)
}

/// Creates an Iso that swaps the elements of a pair.
///
/// # Example
///
/// ```
/// use reified_optics::optics::{Iso, iso_swap};
///
/// let swap_iso = iso_swap::<i32, String>();
///
/// let swapped = swap_iso.get((42, "hello".to_string()));
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// ```
#[must_use]
pub fn iso_swap<A, B>() -> impl Iso<(A, B), (B, A)> + Clone {
    FunctionIso::new(|(a, b): (A, B)| (b, a), |(b, a): (B, A)| (a, b))
}

/// Creates a Lens focusing on the first component of a pair.
#[must_use]
pub fn first_lens<A, B>() -> impl Lens<(A, B), A> + Clone {
    FunctionLens::new(|pair: &(A, B)| &pair.0, |(_, b): (A, B), a: A| (a, b))
}

/// Creates a Lens focusing on the second component of a pair.
///
/// # Example
///
/// ```
/// use reified_optics::optics::{Lens, second_lens};
///
/// let lens = second_lens::<&str, i32>();
/// assert_eq!(*lens.get(&("x", 3)), 3);
/// assert_eq!(lens.set(("x", 3), 4), ("x", 4));
/// ```
#[must_use]
pub fn second_lens<A, B>() -> impl Lens<(A, B), B> + Clone {
    FunctionLens::new(|pair: &(A, B)| &pair.1, |(a, _): (A, B), b: B| (a, b))
}

/// The optic with no foci.
///
/// Reading through `Ignored` always yields nothing and writing through it
/// always returns the source unchanged. It is usable as a fold, a setter,
/// a traversal, and as an indexed fold or setter for any index type.
///
/// # Example
///
/// ```
/// use reified_optics::optics::{Fold, Ignored, Setter};
///
/// let nothing: Ignored<Vec<i32>, i32> = Ignored::new();
///
/// assert!(nothing.to_vec(&vec![1, 2, 3]).is_empty());
/// assert_eq!(nothing.modify_all(vec![1, 2, 3], |x| x * 100), vec![1, 2, 3]);
/// ```
pub struct Ignored<S, A> {
    _marker: PhantomData<(S, A)>,
}

impl<S, A> Ignored<S, A> {
    /// Creates a new `Ignored`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S, A> Default for Ignored<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Fold<S, A> for Ignored<S, A> {
    fn to_vec(&self, _source: &S) -> Vec<A> {
        Vec::new()
    }
}

impl<S, A> Setter<S, A> for Ignored<S, A> {
    fn over(&self, source: S, _function: &mut dyn FnMut(A) -> A) -> S {
        source
    }
}

impl<S, A> Traversal<S, A> for Ignored<S, A> {
    fn get_all<'a>(&self, _source: &'a S) -> Box<dyn Iterator<Item = &'a A> + 'a> {
        Box::new(std::iter::empty())
    }
}

impl<I, S, A> IndexedFold<I, S, A> for Ignored<S, A> {
    fn ito_vec(&self, _source: &S) -> Vec<(I, A)> {
        Vec::new()
    }
}

impl<I, S, A> IndexedSetter<I, S, A> for Ignored<S, A> {
    fn iover(&self, source: S, _function: &mut dyn FnMut(&I, A) -> A) -> S {
        source
    }
}

impl<S, A> Clone for Ignored<S, A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<S, A> std::fmt::Debug for Ignored<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Ignored").finish()
    }
}
