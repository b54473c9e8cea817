//! The algebra of boxed indexed getters and folds.
//!
//! Indexed boxes support mapping, adapting the source, and pairing over a
//! product source. In every case the index produced by the wrapped optic is
//! passed through untouched.
//!
//! Combinators that would have to merge the indices of two optics
//! (sequential composition, combining two optics on one source, chaining)
//! are not provided: there is no single index-merging rule that suits every
//! caller. To combine indexed optics, turn them into plain boxes over
//! `(index, value)` pairs with `with_index` and merge the indices
//! explicitly.
//!
//! # Examples
//!
//! ```rust
//! use reified_optics::optics::IndexedGetter;
//! use reified_optics::reified::ReifiedIndexedGetter;
//!
//! let labelled = ReifiedIndexedGetter::from_fn(|pair: &(i32, i32)| ("first", pair.0));
//! let doubled = labelled.fmap(|value| value * 2);
//!
//! assert_eq!(doubled.iview(&(21, 0)), ("first", 42));
//! ```

use crate::optics::{
    FunctionIndexedFold, FunctionIndexedGetter, IndexedFold, IndexedGetter, IndexedLens,
    IndexedTraversal,
};

use super::{ReifiedFold, ReifiedGetter, ReifiedIndexedFold, ReifiedIndexedGetter};

impl<I, S, A> ReifiedIndexedGetter<I, S, A>
where
    I: 'static,
    S: 'static,
    A: 'static,
{
    /// Creates an indexed getter from a viewing function.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(&S) -> (I, A) + 'static,
    {
        Self::new(FunctionIndexedGetter::new(function))
    }

    /// Views an indexed lens's focus, cloning it out of the source.
    pub fn from_indexed_lens<L>(lens: L) -> Self
    where
        L: IndexedLens<I, S, A> + 'static,
        A: Clone,
    {
        Self::from_fn(move |source: &S| {
            let (index, value) = lens.iget(source);
            (index, value.clone())
        })
    }

    /// Maps a function over the viewed value. The index is unchanged.
    pub fn fmap<B, F>(self, function: F) -> ReifiedIndexedGetter<I, S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let inner = self.into_inner();
        ReifiedIndexedGetter::from_fn(move |source: &S| {
            let (index, value) = inner.iview(source);
            (index, function(value))
        })
    }

    /// Maps a function that also sees the index. The index is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::IndexedGetter;
    /// use reified_optics::reified::ReifiedIndexedGetter;
    ///
    /// let last = ReifiedIndexedGetter::from_fn(|letters: &Vec<char>| {
    ///     (letters.len() - 1, letters[letters.len() - 1])
    /// });
    /// let described = last.imap(|index, letter| format!("{letter}@{index}"));
    /// assert_eq!(described.iview(&vec!['a', 'b']), (1, "b@1".to_string()));
    /// ```
    pub fn imap<B, F>(self, function: F) -> ReifiedIndexedGetter<I, S, B>
    where
        F: Fn(&I, A) -> B + 'static,
        B: 'static,
    {
        let inner = self.into_inner();
        ReifiedIndexedGetter::from_fn(move |source: &S| {
            let (index, value) = inner.iview(source);
            let mapped = function(&index, value);
            (index, mapped)
        })
    }

    /// Adapts both ends. The index is unchanged.
    pub fn dimap<T, B, Pre, Post>(self, pre: Pre, post: Post) -> ReifiedIndexedGetter<I, T, B>
    where
        T: 'static,
        B: 'static,
        Pre: Fn(&T) -> S + 'static,
        Post: Fn(A) -> B + 'static,
    {
        let inner = self.into_inner();
        ReifiedIndexedGetter::from_fn(move |source: &T| {
            let (index, value) = inner.iview(&pre(source));
            (index, post(value))
        })
    }

    /// Adapts the source end only.
    pub fn lmap<T, Pre>(self, pre: Pre) -> ReifiedIndexedGetter<I, T, A>
    where
        T: 'static,
        Pre: Fn(&T) -> S + 'static,
    {
        let inner = self.into_inner();
        ReifiedIndexedGetter::from_fn(move |source: &T| inner.iview(&pre(source)))
    }

    /// Adapts the result end only. Same as [`fmap`](Self::fmap).
    pub fn rmap<B, Post>(self, post: Post) -> ReifiedIndexedGetter<I, S, B>
    where
        B: 'static,
        Post: Fn(A) -> B + 'static,
    {
        self.fmap(post)
    }

    /// Runs on the first component of a pair, passing the second through.
    #[must_use]
    pub fn first<C>(self) -> ReifiedIndexedGetter<I, (S, C), (A, C)>
    where
        C: Clone + 'static,
    {
        let inner = self.into_inner();
        ReifiedIndexedGetter::from_fn(move |pair: &(S, C)| {
            let (index, value) = inner.iview(&pair.0);
            (index, (value, pair.1.clone()))
        })
    }

    /// Runs on the second component of a pair, passing the first through.
    #[must_use]
    pub fn second<C>(self) -> ReifiedIndexedGetter<I, (C, S), (C, A)>
    where
        C: Clone + 'static,
    {
        let inner = self.into_inner();
        ReifiedIndexedGetter::from_fn(move |pair: &(C, S)| {
            let (index, value) = inner.iview(&pair.1);
            (index, (pair.0.clone(), value))
        })
    }

    /// Forgets the indexed structure, viewing the `(index, value)` pair as
    /// an ordinary value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Getter;
    /// use reified_optics::reified::ReifiedIndexedGetter;
    ///
    /// let head = ReifiedIndexedGetter::from_fn(|letters: &Vec<char>| (0_usize, letters[0]));
    /// let plain = head.with_index().fmap(|(index, letter)| format!("{index}:{letter}"));
    /// assert_eq!(plain.view(&vec!['q']), "0:q");
    /// ```
    #[must_use]
    pub fn with_index(self) -> ReifiedGetter<S, (I, A)> {
        let inner = self.into_inner();
        ReifiedGetter::from_fn(move |source: &S| inner.iview(source))
    }
}

impl<I, S, A> ReifiedIndexedFold<I, S, A>
where
    I: 'static,
    S: 'static,
    A: 'static,
{
    /// Creates an indexed fold from a collecting function.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(&S) -> Vec<(I, A)> + 'static,
    {
        Self::new(FunctionIndexedFold::new(function))
    }

    /// Reads every focus of an indexed traversal, cloning each.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::{IndexedFold, VecIndexedTraversal};
    /// use reified_optics::reified::ReifiedIndexedFold;
    ///
    /// let positions = ReifiedIndexedFold::from_indexed_traversal(VecIndexedTraversal::<char>::new());
    /// assert_eq!(positions.ito_vec(&vec!['x', 'y']), vec![(0, 'x'), (1, 'y')]);
    /// ```
    pub fn from_indexed_traversal<T>(traversal: T) -> Self
    where
        T: IndexedTraversal<I, S, A> + 'static,
        A: Clone,
    {
        Self::from_fn(move |source: &S| {
            traversal
                .iget_all(source)
                .into_iter()
                .map(|(index, value)| (index, value.clone()))
                .collect()
        })
    }

    /// Maps a function over every result. Indices are unchanged.
    pub fn fmap<B, F>(self, function: F) -> ReifiedIndexedFold<I, S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let inner = self.into_inner();
        ReifiedIndexedFold::from_fn(move |source: &S| {
            inner
                .ito_vec(source)
                .into_iter()
                .map(|(index, value)| (index, function(value)))
                .collect()
        })
    }

    /// Maps a function that also sees each index. Indices are unchanged.
    pub fn imap<B, F>(self, function: F) -> ReifiedIndexedFold<I, S, B>
    where
        F: Fn(&I, A) -> B + 'static,
        B: 'static,
    {
        let inner = self.into_inner();
        ReifiedIndexedFold::from_fn(move |source: &S| {
            inner
                .ito_vec(source)
                .into_iter()
                .map(|(index, value)| {
                    let mapped = function(&index, value);
                    (index, mapped)
                })
                .collect()
        })
    }

    /// Adapts both ends. Indices are unchanged.
    pub fn dimap<T, B, Pre, Post>(self, pre: Pre, post: Post) -> ReifiedIndexedFold<I, T, B>
    where
        T: 'static,
        B: 'static,
        Pre: Fn(&T) -> S + 'static,
        Post: Fn(A) -> B + 'static,
    {
        let inner = self.into_inner();
        ReifiedIndexedFold::from_fn(move |source: &T| {
            inner
                .ito_vec(&pre(source))
                .into_iter()
                .map(|(index, value)| (index, post(value)))
                .collect()
        })
    }

    /// Adapts the source end only.
    pub fn lmap<T, Pre>(self, pre: Pre) -> ReifiedIndexedFold<I, T, A>
    where
        T: 'static,
        Pre: Fn(&T) -> S + 'static,
    {
        let inner = self.into_inner();
        ReifiedIndexedFold::from_fn(move |source: &T| inner.ito_vec(&pre(source)))
    }

    /// Adapts the result end only. Same as [`fmap`](Self::fmap).
    pub fn rmap<B, Post>(self, post: Post) -> ReifiedIndexedFold<I, S, B>
    where
        B: 'static,
        Post: Fn(A) -> B + 'static,
    {
        self.fmap(post)
    }

    /// Runs on the first component of a pair, pairing each result with the
    /// untouched second component.
    #[must_use]
    pub fn first<C>(self) -> ReifiedIndexedFold<I, (S, C), (A, C)>
    where
        C: Clone + 'static,
    {
        let inner = self.into_inner();
        ReifiedIndexedFold::from_fn(move |pair: &(S, C)| {
            inner
                .ito_vec(&pair.0)
                .into_iter()
                .map(|(index, value)| (index, (value, pair.1.clone())))
                .collect()
        })
    }

    /// Runs on the second component of a pair, pairing each result with the
    /// untouched first component.
    #[must_use]
    pub fn second<C>(self) -> ReifiedIndexedFold<I, (C, S), (C, A)>
    where
        C: Clone + 'static,
    {
        let inner = self.into_inner();
        ReifiedIndexedFold::from_fn(move |pair: &(C, S)| {
            inner
                .ito_vec(&pair.1)
                .into_iter()
                .map(|(index, value)| (index, (pair.0.clone(), value)))
                .collect()
        })
    }

    /// Forgets the indexed structure, yielding `(index, value)` pairs as
    /// ordinary results.
    #[must_use]
    pub fn with_index(self) -> ReifiedFold<S, (I, A)> {
        let inner = self.into_inner();
        ReifiedFold::from_fn(move |source: &S| inner.ito_vec(source))
    }
}
