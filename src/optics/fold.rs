//! Fold optics for read-only access to zero or more values.
//!
//! A Fold is a read-only optic that focuses on zero or more values, in a
//! defined order. Unlike Traversal, Fold does not support modification,
//! and the values it yields are owned, so a fold can focus on values that
//! are computed from the source.
//!
//! # Relationship to Traversal
//!
//! Every Traversal whose focus is `Clone` can be read as a Fold
//! (see `ReifiedFold::from_traversal`).
//!
//! # Examples
//!
//! ```
//! use reified_optics::optics::{Fold, FunctionFold};
//!
//! let evens = FunctionFold::new(|numbers: &Vec<i32>| {
//!     numbers.iter().copied().filter(|n| n % 2 == 0).collect()
//! });
//!
//! let data = vec![1, 2, 3, 4, 5, 6];
//! assert_eq!(evens.to_vec(&data), vec![2, 4, 6]);
//! assert_eq!(evens.length(&data), 3);
//! ```

use std::marker::PhantomData;

/// A Fold is a read-only optic that can focus on zero or more values.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused values)
///
/// # Laws
///
/// Fold has no laws beyond consistency: calling `to_vec` on the same
/// source always yields the same sequence, in the same order.
pub trait Fold<S, A> {
    /// Collects every focused value, in fold order.
    fn to_vec(&self, source: &S) -> Vec<A>;

    /// Folds over all focused values.
    ///
    /// # Example
    ///
    /// ```
    /// use reified_optics::optics::{Fold, folding};
    ///
    /// let elements = folding(|numbers: &Vec<i32>| numbers.clone());
    /// let sum = elements.fold(&vec![1, 2, 3, 4, 5], 0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 15);
    /// ```
    fn fold<B, F>(&self, source: &S, initial: B, function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, A) -> B,
    {
        self.to_vec(source).into_iter().fold(initial, function)
    }

    /// Returns the number of focused values.
    fn length(&self, source: &S) -> usize {
        self.to_vec(source).len()
    }

    /// Tests if there are no focused values.
    fn is_empty(&self, source: &S) -> bool {
        self.to_vec(source).is_empty()
    }

    /// Returns the first focused value, if any.
    fn head_option(&self, source: &S) -> Option<A> {
        self.to_vec(source).into_iter().next()
    }

    /// Returns the last focused value, if any.
    fn last_option(&self, source: &S) -> Option<A> {
        self.to_vec(source).pop()
    }

    /// Tests if all focused values satisfy a predicate.
    ///
    /// Returns `true` if there are no focused values (vacuously true).
    fn for_all<P>(&self, source: &S, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&A) -> bool,
    {
        self.to_vec(source).iter().all(predicate)
    }

    /// Tests if any focused value satisfies a predicate.
    ///
    /// Returns `false` if there are no focused values.
    fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&A) -> bool,
    {
        self.to_vec(source).iter().any(predicate)
    }
}

/// A Fold implemented using a function.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `F`: The collecting function type
pub struct FunctionFold<S, A, F>
where
    F: Fn(&S) -> Vec<A>,
{
    to_vec_function: F,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, F> FunctionFold<S, A, F>
where
    F: Fn(&S) -> Vec<A>,
{
    /// Creates a new `FunctionFold` from a collecting function.
    ///
    /// The function must return the focused values in fold order.
    #[must_use]
    pub const fn new(to_vec_function: F) -> Self {
        Self {
            to_vec_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, F> Fold<S, A> for FunctionFold<S, A, F>
where
    F: Fn(&S) -> Vec<A>,
{
    fn to_vec(&self, source: &S) -> Vec<A> {
        (self.to_vec_function)(source)
    }
}

impl<S, A, F> Clone for FunctionFold<S, A, F>
where
    F: Fn(&S) -> Vec<A> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            to_vec_function: self.to_vec_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, F> std::fmt::Debug for FunctionFold<S, A, F>
where
    F: Fn(&S) -> Vec<A>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionFold")
            .finish_non_exhaustive()
    }
}

/// Builds a fold from a function returning every focused value.
///
/// # Examples
///
/// ```
/// use reified_optics::optics::{Fold, folding};
///
/// let characters = folding(|text: &String| text.chars().collect());
/// assert_eq!(characters.to_vec(&"abc".to_string()), vec!['a', 'b', 'c']);
/// ```
#[must_use]
pub const fn folding<S, A, F>(function: F) -> FunctionFold<S, A, F>
where
    F: Fn(&S) -> Vec<A>,
{
    FunctionFold::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn elements() -> FunctionFold<Vec<i32>, i32, impl Fn(&Vec<i32>) -> Vec<i32> + Clone> {
        FunctionFold::new(|vec: &Vec<i32>| vec.clone())
    }

    #[rstest]
    fn to_vec_preserves_order() {
        assert_eq!(elements().to_vec(&vec![3, 1, 2]), vec![3, 1, 2]);
    }

    #[rstest]
    fn fold_accumulates() {
        let product = elements().fold(&vec![1, 2, 3, 4], 1, |accumulator, element| {
            accumulator * element
        });
        assert_eq!(product, 24);
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![1], 1)]
    #[case(vec![1, 2, 3, 4, 5], 5)]
    fn length_counts_foci(#[case] data: Vec<i32>, #[case] expected: usize) {
        assert_eq!(elements().length(&data), expected);
    }

    #[rstest]
    fn is_empty_on_empty_source() {
        assert!(elements().is_empty(&vec![]));
        assert!(!elements().is_empty(&vec![1]));
    }

    #[rstest]
    fn head_and_last_option() {
        let data = vec![1, 2, 3];
        assert_eq!(elements().head_option(&data), Some(1));
        assert_eq!(elements().last_option(&data), Some(3));
        assert_eq!(elements().head_option(&vec![]), None);
        assert_eq!(elements().last_option(&vec![]), None);
    }

    #[rstest]
    fn for_all_is_vacuously_true() {
        assert!(elements().for_all(&vec![], |x| *x > 0));
        assert!(elements().for_all(&vec![1, 2], |x| *x > 0));
        assert!(!elements().for_all(&vec![1, -2], |x| *x > 0));
    }

    #[rstest]
    fn exists_is_false_on_empty() {
        assert!(!elements().exists(&vec![], |x| *x == 1));
        assert!(elements().exists(&vec![1, 2], |x| *x == 2));
    }

    #[rstest]
    fn debug_names_type() {
        assert!(format!("{:?}", elements()).contains("FunctionFold"));
    }
}
