//! Getter optics for read-only access to exactly one value.
//!
//! A Getter is the read-only half of a Lens. It extracts exactly one value
//! from a source and cannot write it back. Unlike [`Lens::get`](super::Lens::get),
//! a getter hands back an owned value, so it can focus on values computed
//! from the source as well as values stored in it.
//!
//! # Examples
//!
//! ```
//! use reified_optics::optics::{Getter, to};
//!
//! let length = to(|text: &String| text.len());
//! assert_eq!(length.view(&"hello".to_string()), 5);
//! ```

use std::marker::PhantomData;

/// A Getter extracts exactly one value from a source.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The extracted type
pub trait Getter<S, A> {
    /// Extracts the focused value from the source.
    fn view(&self, source: &S) -> A;
}

/// A Getter implemented using a function.
///
/// # Examples
///
/// ```
/// use reified_optics::optics::{FunctionGetter, Getter};
///
/// let doubled = FunctionGetter::new(|number: &i32| number * 2);
/// assert_eq!(doubled.view(&21), 42);
/// ```
pub struct FunctionGetter<S, A, F>
where
    F: Fn(&S) -> A,
{
    function: F,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, F> FunctionGetter<S, A, F>
where
    F: Fn(&S) -> A,
{
    /// Creates a new `FunctionGetter` from an extraction function.
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, F> Getter<S, A> for FunctionGetter<S, A, F>
where
    F: Fn(&S) -> A,
{
    fn view(&self, source: &S) -> A {
        (self.function)(source)
    }
}

impl<S, A, F> Clone for FunctionGetter<S, A, F>
where
    F: Fn(&S) -> A + Clone,
{
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, F> std::fmt::Debug for FunctionGetter<S, A, F>
where
    F: Fn(&S) -> A,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionGetter")
            .finish_non_exhaustive()
    }
}

/// Builds a getter from a plain function.
///
/// # Examples
///
/// ```
/// use reified_optics::optics::{Getter, to};
///
/// let first = to(|pair: &(i32, String)| pair.0);
/// assert_eq!(first.view(&(7, "seven".to_string())), 7);
/// ```
#[must_use]
pub const fn to<S, A, F>(function: F) -> FunctionGetter<S, A, F>
where
    F: Fn(&S) -> A,
{
    FunctionGetter::new(function)
}
