//! Setter optics for write-only batch modification.
//!
//! A Setter can modify zero or more foci of a structure but cannot read
//! them back out. It is the weakest writable optic: every Traversal and
//! every Lens-like optic can act as a setter.
//!
//! # Laws
//!
//! 1. **Identity**: `setter.modify_all(source, |x| x) == source`
//! 2. **Composition**: `setter.modify_all(setter.modify_all(source, f), g)
//!    == setter.modify_all(source, |x| g(f(x)))`
//!
//! # Examples
//!
//! ```
//! use reified_optics::optics::{Setter, sets};
//!
//! let both = sets(|(a, b): (i32, i32), function: &mut dyn FnMut(i32) -> i32| {
//!     let a = function(a);
//!     (a, function(b))
//! });
//!
//! assert_eq!(both.modify_all((1, 2), |x| x * 10), (10, 20));
//! assert_eq!(both.set_all((1, 2), 0), (0, 0));
//! ```

use std::marker::PhantomData;

/// A Setter modifies zero or more foci of a structure.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focused type
pub trait Setter<S, A> {
    /// Applies `function` to every focus, returning the rebuilt source.
    fn over(&self, source: S, function: &mut dyn FnMut(A) -> A) -> S;

    /// Modifies every focus with a closure.
    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        Self: Sized,
        F: FnMut(A) -> A,
    {
        let mut function = function;
        self.over(source, &mut function)
    }

    /// Replaces every focus with a clone of `value`.
    fn set_all(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.over(source, &mut |_| value.clone())
    }
}

/// A Setter implemented using a mapping function.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focused type
/// - `F`: The mapping function type
pub struct FunctionSetter<S, A, F>
where
    F: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    over_function: F,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, F> FunctionSetter<S, A, F>
where
    F: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    /// Creates a new `FunctionSetter` from a mapping function.
    #[must_use]
    pub const fn new(over_function: F) -> Self {
        Self {
            over_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, F> Setter<S, A> for FunctionSetter<S, A, F>
where
    F: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn over(&self, source: S, function: &mut dyn FnMut(A) -> A) -> S {
        (self.over_function)(source, function)
    }
}

impl<S, A, F> Clone for FunctionSetter<S, A, F>
where
    F: Fn(S, &mut dyn FnMut(A) -> A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            over_function: self.over_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, F> std::fmt::Debug for FunctionSetter<S, A, F>
where
    F: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionSetter")
            .finish_non_exhaustive()
    }
}

/// Builds a setter from a mapping function.
#[must_use]
pub const fn sets<S, A, F>(over_function: F) -> FunctionSetter<S, A, F>
where
    F: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    FunctionSetter::new(over_function)
}
