//! Indexed optics.
//!
//! An indexed optic carries, at each focus, an index of a caller-chosen
//! type `I` (a position, a key, a path segment). The index is visible to
//! whoever consumes the optic; it is never merged or rewritten by the
//! optic itself.
//!
//! # Examples
//!
//! ```
//! use reified_optics::optics::{IndexedSetter, IndexedTraversal, VecIndexedTraversal};
//!
//! let positions: VecIndexedTraversal<char> = VecIndexedTraversal::new();
//! let letters = vec!['a', 'b', 'c'];
//!
//! assert_eq!(positions.iget_all(&letters), vec![(0, &'a'), (1, &'b'), (2, &'c')]);
//!
//! let upper_even = positions.imodify_all(letters, |index, letter| {
//!     if index % 2 == 0 { letter.to_ascii_uppercase() } else { letter }
//! });
//! assert_eq!(upper_even, vec!['A', 'b', 'C']);
//! ```

use std::marker::PhantomData;

/// An indexed getter extracts exactly one value together with its index.
pub trait IndexedGetter<I, S, A> {
    /// Extracts the index and the focused value.
    fn iview(&self, source: &S) -> (I, A);
}

/// An indexed fold extracts zero or more values, each with its index.
pub trait IndexedFold<I, S, A> {
    /// Collects every focus with its index, in fold order.
    fn ito_vec(&self, source: &S) -> Vec<(I, A)>;

    /// Collects only the indices, in fold order.
    fn indices(&self, source: &S) -> Vec<I> {
        self.ito_vec(source)
            .into_iter()
            .map(|(index, _)| index)
            .collect()
    }
}

/// An indexed lens focuses on exactly one field and reports its index.
pub trait IndexedLens<I, S, A> {
    /// Borrows the focused field together with its index.
    fn iget<'a>(&self, source: &'a S) -> (I, &'a A);

    /// Replaces the focused field, returning the rebuilt source.
    fn iset(&self, source: S, value: A) -> S;
}

/// An indexed setter modifies zero or more foci, passing each focus's index
/// to the modifying function.
pub trait IndexedSetter<I, S, A> {
    /// Applies `function` to every focus and its index.
    fn iover(&self, source: S, function: &mut dyn FnMut(&I, A) -> A) -> S;

    /// Modifies every focus with a closure that also sees the index.
    fn imodify_all<F>(&self, source: S, function: F) -> S
    where
        Self: Sized,
        F: FnMut(&I, A) -> A,
    {
        let mut function = function;
        self.iover(source, &mut function)
    }
}

/// An indexed traversal reads and modifies zero or more indexed foci.
pub trait IndexedTraversal<I, S, A>: IndexedSetter<I, S, A> {
    /// Borrows every focus together with its index, in traversal order.
    fn iget_all<'a>(&self, source: &'a S) -> Vec<(I, &'a A)>;
}

/// An indexed getter implemented using a function.
pub struct FunctionIndexedGetter<I, S, A, F>
where
    F: Fn(&S) -> (I, A),
{
    function: F,
    _marker: PhantomData<(I, S, A)>,
}

impl<I, S, A, F> FunctionIndexedGetter<I, S, A, F>
where
    F: Fn(&S) -> (I, A),
{
    /// Creates a new `FunctionIndexedGetter`.
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A, F> IndexedGetter<I, S, A> for FunctionIndexedGetter<I, S, A, F>
where
    F: Fn(&S) -> (I, A),
{
    fn iview(&self, source: &S) -> (I, A) {
        (self.function)(source)
    }
}

impl<I, S, A, F> Clone for FunctionIndexedGetter<I, S, A, F>
where
    F: Fn(&S) -> (I, A) + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }
}

impl<I, S, A, F> std::fmt::Debug for FunctionIndexedGetter<I, S, A, F>
where
    F: Fn(&S) -> (I, A),
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionIndexedGetter")
            .finish_non_exhaustive()
    }
}

/// An indexed fold implemented using a function.
pub struct FunctionIndexedFold<I, S, A, F>
where
    F: Fn(&S) -> Vec<(I, A)>,
{
    function: F,
    _marker: PhantomData<(I, S, A)>,
}

impl<I, S, A, F> FunctionIndexedFold<I, S, A, F>
where
    F: Fn(&S) -> Vec<(I, A)>,
{
    /// Creates a new `FunctionIndexedFold`.
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A, F> IndexedFold<I, S, A> for FunctionIndexedFold<I, S, A, F>
where
    F: Fn(&S) -> Vec<(I, A)>,
{
    fn ito_vec(&self, source: &S) -> Vec<(I, A)> {
        (self.function)(source)
    }
}

impl<I, S, A, F> Clone for FunctionIndexedFold<I, S, A, F>
where
    F: Fn(&S) -> Vec<(I, A)> + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }
}

impl<I, S, A, F> std::fmt::Debug for FunctionIndexedFold<I, S, A, F>
where
    F: Fn(&S) -> Vec<(I, A)>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionIndexedFold")
            .finish_non_exhaustive()
    }
}

/// An indexed lens implemented using getter and setter functions.
pub struct FunctionIndexedLens<I, S, A, G, St>
where
    G: Fn(&S) -> (I, &A),
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(I, S, A)>,
}

impl<I, S, A, G, St> FunctionIndexedLens<I, S, A, G, St>
where
    G: Fn(&S) -> (I, &A),
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionIndexedLens`.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A, G, St> IndexedLens<I, S, A> for FunctionIndexedLens<I, S, A, G, St>
where
    G: Fn(&S) -> (I, &A),
    St: Fn(S, A) -> S,
{
    fn iget<'a>(&self, source: &'a S) -> (I, &'a A) {
        (self.getter)(source)
    }

    fn iset(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<I, S, A, G, St> Clone for FunctionIndexedLens<I, S, A, G, St>
where
    G: Fn(&S) -> (I, &A) + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

impl<I, S, A, G, St> std::fmt::Debug for FunctionIndexedLens<I, S, A, G, St>
where
    G: Fn(&S) -> (I, &A),
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionIndexedLens")
            .finish_non_exhaustive()
    }
}

/// An indexed setter implemented using a mapping function.
pub struct FunctionIndexedSetter<I, S, A, F>
where
    F: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    function: F,
    _marker: PhantomData<(I, S, A)>,
}

impl<I, S, A, F> FunctionIndexedSetter<I, S, A, F>
where
    F: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    /// Creates a new `FunctionIndexedSetter`.
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A, F> IndexedSetter<I, S, A> for FunctionIndexedSetter<I, S, A, F>
where
    F: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    fn iover(&self, source: S, function: &mut dyn FnMut(&I, A) -> A) -> S {
        (self.function)(source, function)
    }
}

impl<I, S, A, F> Clone for FunctionIndexedSetter<I, S, A, F>
where
    F: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }
}

impl<I, S, A, F> std::fmt::Debug for FunctionIndexedSetter<I, S, A, F>
where
    F: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionIndexedSetter")
            .finish_non_exhaustive()
    }
}

/// An indexed traversal implemented using a reading and a mapping function.
pub struct FunctionIndexedTraversal<I, S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Vec<(I, &'a A)>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    get_all_function: G,
    over_function: M,
    _marker: PhantomData<(I, S, A)>,
}

impl<I, S, A, G, M> FunctionIndexedTraversal<I, S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Vec<(I, &'a A)>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    /// Creates a new `FunctionIndexedTraversal`.
    ///
    /// Both functions must visit the foci in the same order and report the
    /// same index for the same focus.
    #[must_use]
    pub const fn new(get_all_function: G, over_function: M) -> Self {
        Self {
            get_all_function,
            over_function,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A, G, M> IndexedSetter<I, S, A> for FunctionIndexedTraversal<I, S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Vec<(I, &'a A)>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    fn iover(&self, source: S, function: &mut dyn FnMut(&I, A) -> A) -> S {
        (self.over_function)(source, function)
    }
}

impl<I, S, A, G, M> IndexedTraversal<I, S, A> for FunctionIndexedTraversal<I, S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Vec<(I, &'a A)>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    fn iget_all<'a>(&self, source: &'a S) -> Vec<(I, &'a A)> {
        (self.get_all_function)(source)
    }
}

impl<I, S, A, G, M> Clone for FunctionIndexedTraversal<I, S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Vec<(I, &'a A)> + Clone,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.get_all_function.clone(), self.over_function.clone())
    }
}

impl<I, S, A, G, M> std::fmt::Debug for FunctionIndexedTraversal<I, S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Vec<(I, &'a A)>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionIndexedTraversal")
            .finish_non_exhaustive()
    }
}

/// An indexed traversal over every element of a `Vec`, indexed by position.
pub struct VecIndexedTraversal<T> {
    _marker: PhantomData<T>,
}

impl<T> VecIndexedTraversal<T> {
    /// Creates a new `VecIndexedTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for VecIndexedTraversal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IndexedSetter<usize, Vec<T>, T> for VecIndexedTraversal<T> {
    fn iover(&self, source: Vec<T>, function: &mut dyn FnMut(&usize, T) -> T) -> Vec<T> {
        source
            .into_iter()
            .enumerate()
            .map(|(index, element)| function(&index, element))
            .collect()
    }
}

impl<T> IndexedTraversal<usize, Vec<T>, T> for VecIndexedTraversal<T> {
    fn iget_all<'a>(&self, source: &'a Vec<T>) -> Vec<(usize, &'a T)> {
        source.iter().enumerate().collect()
    }
}

impl<T> Clone for VecIndexedTraversal<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for VecIndexedTraversal<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("VecIndexedTraversal").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn indexed_getter_reports_index() {
        let longest = FunctionIndexedGetter::new(|words: &Vec<&str>| {
            words
                .iter()
                .enumerate()
                .fold((0, 0), |(best, length), (index, word)| {
                    if word.len() > length { (index, word.len()) } else { (best, length) }
                })
        });
        assert_eq!(longest.iview(&vec!["a", "abc", "ab"]), (1, 3));
    }

    #[rstest]
    fn indexed_fold_indices() {
        let keyed = FunctionIndexedFold::new(|pairs: &Vec<(String, i32)>| pairs.clone());
        let data = vec![("x".to_string(), 1), ("y".to_string(), 2)];
        assert_eq!(keyed.indices(&data), vec!["x".to_string(), "y".to_string()]);
    }

    #[rstest]
    fn indexed_lens_gets_and_sets() {
        let second = FunctionIndexedLens::new(
            |pair: &(i32, i32)| (1_usize, &pair.1),
            |pair: (i32, i32), value: i32| (pair.0, value),
        );
        assert_eq!(second.iget(&(4, 5)), (1, &5));
        assert_eq!(second.iset((4, 5), 6), (4, 6));
    }

    #[rstest]
    fn indexed_setter_sees_index() {
        let positions = FunctionIndexedSetter::new(
            |numbers: Vec<i32>, function: &mut dyn FnMut(&usize, i32) -> i32| {
                numbers
                    .into_iter()
                    .enumerate()
                    .map(|(index, number)| function(&index, number))
                    .collect::<Vec<_>>()
            },
        );
        assert_eq!(
            positions.imodify_all(vec![10, 10, 10], |index, number| number + *index as i32),
            vec![10, 11, 12]
        );
    }

    #[rstest]
    fn vec_indexed_traversal_round_trip() {
        let traversal: VecIndexedTraversal<i32> = VecIndexedTraversal::new();
        let data = vec![5, 6];
        assert_eq!(traversal.iget_all(&data), vec![(0, &5), (1, &6)]);
        assert_eq!(traversal.imodify_all(data.clone(), |_, value| value), data);
    }
}
