//! Prism optics for focusing on one case of a sum type.
//!
//! A Prism pairs a partial match (which may fail) with a total constructor.
//!
//! # Laws
//!
//! 1. **`PreviewReview`**: `prism.preview(&prism.review(value)) == Some(&value)`
//! 2. **`ReviewPreview`**: if `prism.preview(&source)` is `Some(a)`,
//!    `prism.review(a.clone()) == source`
//!
//! # Examples
//!
//! ```
//! use reified_optics::optics::{FunctionPrism, Prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle = FunctionPrism::new(
//!     |shape: &Shape| match shape {
//!         Shape::Circle(radius) => Some(radius),
//!         Shape::Square(_) => None,
//!     },
//!     |radius: f64| Shape::Circle(radius),
//!     |shape: Shape| match shape {
//!         Shape::Circle(radius) => Some(radius),
//!         Shape::Square(_) => None,
//!     },
//! );
//!
//! assert_eq!(circle.preview(&Shape::Circle(1.5)), Some(&1.5));
//! assert_eq!(circle.preview(&Shape::Square(2.0)), None);
//! assert_eq!(circle.review(3.0), Shape::Circle(3.0));
//! ```

use std::marker::PhantomData;

/// A Prism focuses on a single case of a sum type.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole sum)
/// - `A`: The target type (the value inside the case)
pub trait Prism<S, A> {
    /// Borrows the focused value if the source is the matching case.
    fn preview<'a>(&self, source: &'a S) -> Option<&'a A>;

    /// Builds the source from a focused value.
    fn review(&self, value: A) -> S;

    /// Extracts the focused value by value if the source is the matching case.
    fn preview_owned(&self, source: S) -> Option<A>;

    /// Modifies the focused value if the case matches, otherwise returns
    /// the source unchanged.
    fn modify_or_identity<F>(&self, source: S, function: F) -> S
    where
        Self: Sized,
        F: FnOnce(A) -> A,
        S: Clone,
    {
        match self.preview_owned(source.clone()) {
            Some(value) => self.review(function(value)),
            None => source,
        }
    }
}

/// A Prism implemented using matching and constructing functions.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `Pr`: The borrowing match function type
/// - `Re`: The constructor function type
/// - `PrOwned`: The owning match function type
pub struct FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    preview_function: Pr,
    review_function: Re,
    preview_owned_function: PrOwned,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, Pr, Re, PrOwned> FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    /// Creates a new `FunctionPrism`.
    #[must_use]
    pub const fn new(
        preview_function: Pr,
        review_function: Re,
        preview_owned_function: PrOwned,
    ) -> Self {
        Self {
            preview_function,
            review_function,
            preview_owned_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re, PrOwned> Prism<S, A> for FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    fn preview<'a>(&self, source: &'a S) -> Option<&'a A> {
        (self.preview_function)(source)
    }

    fn review(&self, value: A) -> S {
        (self.review_function)(value)
    }

    fn preview_owned(&self, source: S) -> Option<A> {
        (self.preview_owned_function)(source)
    }
}

impl<S, A, Pr, Re, PrOwned> Clone for FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A> + Clone,
    Re: Fn(A) -> S + Clone,
    PrOwned: Fn(S) -> Option<A> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            preview_function: self.preview_function.clone(),
            review_function: self.review_function.clone(),
            preview_owned_function: self.preview_owned_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re, PrOwned> std::fmt::Debug for FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}
