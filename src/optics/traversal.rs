//! Traversal optics for focusing on multiple elements.
//!
//! A Traversal provides read and write access to zero or more elements of
//! a structure. Reading borrows every focus in traversal order; writing goes
//! through the [`Setter`] supertrait.
//!
//! # Laws
//!
//! 1. **Modify Identity**: `traversal.modify_all(source, |x| x) == source`
//! 2. **Modify Composition**:
//!    `traversal.modify_all(traversal.modify_all(source, f), g)
//!    == traversal.modify_all(source, |x| g(f(x)))`
//!
//! # Examples
//!
//! ```
//! use reified_optics::optics::{Setter, Traversal, VecTraversal};
//!
//! let traversal: VecTraversal<i32> = VecTraversal::new();
//! let numbers = vec![1, 2, 3];
//!
//! assert_eq!(traversal.get_all(&numbers).sum::<i32>(), 6);
//! assert_eq!(traversal.modify_all(numbers, |x| x * 2), vec![2, 4, 6]);
//! ```

use std::marker::PhantomData;

use super::Setter;

/// A Traversal focuses on zero or more elements within a structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused elements)
pub trait Traversal<S, A>: Setter<S, A> {
    /// Returns an iterator over references to all focused elements.
    fn get_all<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = &'a A> + 'a>;

    /// Returns the number of focused elements.
    fn length(&self, source: &S) -> usize {
        self.get_all(source).count()
    }

    /// Collects clones of every focused element.
    fn to_vec_cloned(&self, source: &S) -> Vec<A>
    where
        A: Clone,
    {
        self.get_all(source).cloned().collect()
    }
}

/// A Traversal implemented using a reading and a mapping function.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The function borrowing every focus
/// - `M`: The function mapping every focus
pub struct FunctionTraversal<S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = &'a A> + 'a>,
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    get_all_function: G,
    over_function: M,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, M> FunctionTraversal<S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = &'a A> + 'a>,
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    /// Creates a new `FunctionTraversal`.
    ///
    /// Both functions must visit the foci in the same order.
    #[must_use]
    pub const fn new(get_all_function: G, over_function: M) -> Self {
        Self {
            get_all_function,
            over_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, M> Setter<S, A> for FunctionTraversal<S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = &'a A> + 'a>,
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn over(&self, source: S, function: &mut dyn FnMut(A) -> A) -> S {
        (self.over_function)(source, function)
    }
}

impl<S, A, G, M> Traversal<S, A> for FunctionTraversal<S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = &'a A> + 'a>,
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn get_all<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = &'a A> + 'a> {
        (self.get_all_function)(source)
    }
}

impl<S, A, G, M> Clone for FunctionTraversal<S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = &'a A> + 'a> + Clone,
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            get_all_function: self.get_all_function.clone(),
            over_function: self.over_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, M> std::fmt::Debug for FunctionTraversal<S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = &'a A> + 'a>,
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionTraversal")
            .finish_non_exhaustive()
    }
}

/// A Traversal over every element of a `Vec`, in index order.
pub struct VecTraversal<T> {
    _marker: PhantomData<T>,
}

impl<T> VecTraversal<T> {
    /// Creates a new `VecTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for VecTraversal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Setter<Vec<T>, T> for VecTraversal<T> {
    fn over(&self, source: Vec<T>, function: &mut dyn FnMut(T) -> T) -> Vec<T> {
        source.into_iter().map(function).collect()
    }
}

impl<T> Traversal<Vec<T>, T> for VecTraversal<T> {
    fn get_all<'a>(&self, source: &'a Vec<T>) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        Box::new(source.iter())
    }
}

impl<T> Clone for VecTraversal<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for VecTraversal<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("VecTraversal").finish()
    }
}
