//! The algebra of boxed folds.
//!
//! A [`ReifiedFold<S, A>`] reads an ordered sequence of zero or more `A`
//! values from a source `S`. It supports the same combinators as
//! [`ReifiedGetter`](super::ReifiedGetter) with sequence semantics, plus the monoid of folds:
//! [`empty`](ReifiedFold::empty) and [`union`](ReifiedFold::union).
//!
//! # Ordering
//!
//! Every combinator is deterministic about order:
//!
//! - combining two folds on one source (`apply`, `map2`, `product`,
//!   `fanout`) forms the cross product with the left fold as the outer loop;
//! - chaining and composition (`flat_map`, `compose`, `pipe`, `app`)
//!   flatten depth-first, left to right;
//! - `union` yields the left fold's results before the right fold's.
//!
//! # Laws
//!
//! ## Monoid Laws
//!
//! - Identity: `ReifiedFold::empty().union(f) == f == f.union(ReifiedFold::empty())`
//! - Associativity: `f.union(g).union(h) == f.union(g.union(h))`
//!
//! The functor, monad and category laws hold as for [`ReifiedGetter`](super::ReifiedGetter),
//! with equality of the produced sequences.
//!
//! # Examples
//!
//! ```rust
//! use reified_optics::optics::Fold;
//! use reified_optics::reified::ReifiedFold;
//!
//! let second = ReifiedFold::from_fn(|pair: &(i32, i32)| vec![pair.1]);
//! let first_twice = ReifiedFold::from_fn(|pair: &(i32, i32)| vec![pair.0, pair.0]);
//!
//! assert_eq!(second.product(first_twice).to_vec(&(1, 2)), vec![(2, 1), (2, 1)]);
//! ```

use crate::control::Either;
use crate::optics::{Fold, FunctionFold, Getter, Prism, Traversal};

use super::ReifiedFold;

impl<S, A> ReifiedFold<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a fold from a collecting function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Fold;
    /// use reified_optics::reified::ReifiedFold;
    ///
    /// let words = ReifiedFold::from_fn(|text: &String| {
    ///     text.split(' ').map(str::to_string).collect::<Vec<_>>()
    /// });
    /// assert_eq!(words.length(&"a b c".to_string()), 3);
    /// ```
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(&S) -> Vec<A> + 'static,
    {
        Self::new(FunctionFold::new(function))
    }

    /// Reads every focus of a traversal, cloning each.
    pub fn from_traversal<T>(traversal: T) -> Self
    where
        T: Traversal<S, A> + 'static,
        A: Clone,
    {
        Self::from_fn(move |source: &S| traversal.get_all(source).cloned().collect())
    }

    /// Reads the single value a getter views.
    pub fn from_getter<G>(getter: G) -> Self
    where
        G: Getter<S, A> + 'static,
    {
        Self::from_fn(move |source: &S| vec![getter.view(source)])
    }

    /// Reads the prism's focus when the case matches, nothing otherwise.
    ///
    /// The match goes through `preview_owned`, so prisms whose focus is
    /// assembled from several fields still yield it.
    pub fn from_prism<P>(prism: P) -> Self
    where
        P: Prism<S, A> + 'static,
        S: Clone,
    {
        Self::from_fn(move |source: &S| prism.preview_owned(source.clone()).into_iter().collect())
    }

    /// Creates a fold with no results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Fold;
    /// use reified_optics::reified::ReifiedFold;
    ///
    /// let nothing: ReifiedFold<i32, i32> = ReifiedFold::empty();
    /// assert!(nothing.to_vec(&1).is_empty());
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self::from_fn(|_| Vec::new())
    }

    /// Creates a fold yielding exactly `value` from every source.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::from_fn(move |_| vec![value.clone()])
    }

    /// Creates a fold yielding `function` of the source, once.
    pub fn asks<F>(function: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::from_fn(move |source: &S| vec![function(source)])
    }

    /// Runs `fold` on the source after transforming it with `modifier`.
    pub fn local<F>(modifier: F, fold: Self) -> Self
    where
        F: Fn(&S) -> S + 'static,
    {
        let inner = fold.into_inner();
        Self::from_fn(move |source: &S| inner.to_vec(&modifier(source)))
    }

    /// Maps a function over every result.
    pub fn fmap<B, F>(self, function: F) -> ReifiedFold<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let inner = self.into_inner();
        ReifiedFold::from_fn(move |source: &S| {
            inner.to_vec(source).into_iter().map(&function).collect()
        })
    }

    /// Keeps only the results satisfying `predicate`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Fold;
    /// use reified_optics::reified::ReifiedFold;
    ///
    /// let elements = ReifiedFold::from_fn(|numbers: &Vec<i32>| numbers.clone());
    /// let evens = elements.filter(|n| n % 2 == 0);
    /// assert_eq!(evens.to_vec(&vec![1, 2, 3, 4]), vec![2, 4]);
    /// ```
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        let inner = self.into_inner();
        Self::from_fn(move |source: &S| {
            inner
                .to_vec(source)
                .into_iter()
                .filter(|value| predicate(value))
                .collect()
        })
    }

    /// Yields this fold's results followed by `other`'s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Fold;
    /// use reified_optics::reified::ReifiedFold;
    ///
    /// let first = ReifiedFold::from_fn(|pair: &(i32, i32)| vec![pair.0]);
    /// let second = ReifiedFold::from_fn(|pair: &(i32, i32)| vec![pair.1]);
    /// assert_eq!(first.union(second).to_vec(&(1, 2)), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        let left_fold = self.into_inner();
        let right_fold = other.into_inner();
        Self::from_fn(move |source: &S| {
            let mut results = left_fold.to_vec(source);
            results.extend(right_fold.to_vec(source));
            results
        })
    }

    /// Unions any number of folds, in iteration order.
    pub fn concat<I>(folds: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let folds: Vec<Self> = folds.into_iter().collect();
        Self::from_fn(move |source: &S| folds.iter().flat_map(|fold| fold.to_vec(source)).collect())
    }

    /// Applies every function this fold yields to every value `other`
    /// yields, functions in the outer loop.
    pub fn apply<B, C>(self, other: ReifiedFold<S, B>) -> ReifiedFold<S, C>
    where
        A: Fn(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        let function_fold = self.into_inner();
        let value_fold = other.into_inner();
        ReifiedFold::from_fn(move |source: &S| {
            let functions = function_fold.to_vec(source);
            let values = value_fold.to_vec(source);
            let mut results = Vec::with_capacity(functions.len() * values.len());
            for function in &functions {
                for value in &values {
                    results.push(function(value.clone()));
                }
            }
            results
        })
    }

    /// Combines every pair of results from the two folds, this fold in the
    /// outer loop.
    pub fn map2<B, C, F>(self, other: ReifiedFold<S, B>, function: F) -> ReifiedFold<S, C>
    where
        A: Clone,
        B: Clone + 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let left_fold = self.into_inner();
        let right_fold = other.into_inner();
        ReifiedFold::from_fn(move |source: &S| {
            let rights = right_fold.to_vec(source);
            let mut results = Vec::new();
            for left in left_fold.to_vec(source) {
                for right in &rights {
                    results.push(function(left.clone(), right.clone()));
                }
            }
            results
        })
    }

    /// Pairs every result of this fold with every result of `other`.
    #[must_use]
    pub fn product<B>(self, other: ReifiedFold<S, B>) -> ReifiedFold<S, (A, B)>
    where
        A: Clone,
        B: Clone + 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// For each result, runs the fold `function` picks on the same source
    /// and concatenates everything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Fold;
    /// use reified_optics::reified::ReifiedFold;
    ///
    /// let counts = ReifiedFold::from_fn(|counts: &Vec<usize>| counts.clone());
    /// let repeated = counts.flat_map(|count| {
    ///     ReifiedFold::from_fn(move |_: &Vec<usize>| vec![count; count])
    /// });
    /// assert_eq!(repeated.to_vec(&vec![1, 0, 2]), vec![1, 2, 2]);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> ReifiedFold<S, B>
    where
        F: Fn(A) -> ReifiedFold<S, B> + 'static,
        B: 'static,
    {
        let inner = self.into_inner();
        ReifiedFold::from_fn(move |source: &S| {
            inner
                .to_vec(source)
                .into_iter()
                .flat_map(|value| function(value).to_vec(source))
                .collect()
        })
    }

    /// Alias for [`flat_map`](Self::flat_map).
    pub fn and_then<B, F>(self, function: F) -> ReifiedFold<S, B>
    where
        F: Fn(A) -> ReifiedFold<S, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Adapts both ends.
    pub fn dimap<T, B, Pre, Post>(self, pre: Pre, post: Post) -> ReifiedFold<T, B>
    where
        T: 'static,
        B: 'static,
        Pre: Fn(&T) -> S + 'static,
        Post: Fn(A) -> B + 'static,
    {
        let inner = self.into_inner();
        ReifiedFold::from_fn(move |source: &T| {
            inner.to_vec(&pre(source)).into_iter().map(&post).collect()
        })
    }

    /// Adapts the source end only.
    pub fn lmap<T, Pre>(self, pre: Pre) -> ReifiedFold<T, A>
    where
        T: 'static,
        Pre: Fn(&T) -> S + 'static,
    {
        let inner = self.into_inner();
        ReifiedFold::from_fn(move |source: &T| inner.to_vec(&pre(source)))
    }

    /// Adapts the result end only. Same as [`fmap`](Self::fmap).
    pub fn rmap<B, Post>(self, post: Post) -> ReifiedFold<S, B>
    where
        B: 'static,
        Post: Fn(A) -> B + 'static,
    {
        self.fmap(post)
    }

    /// Runs on the first component of a pair, pairing each result with the
    /// untouched second component.
    #[must_use]
    pub fn first<C>(self) -> ReifiedFold<(S, C), (A, C)>
    where
        C: Clone + 'static,
    {
        let inner = self.into_inner();
        ReifiedFold::from_fn(move |pair: &(S, C)| {
            inner
                .to_vec(&pair.0)
                .into_iter()
                .map(|value| (value, pair.1.clone()))
                .collect()
        })
    }

    /// Runs on the second component of a pair, pairing each result with the
    /// untouched first component.
    #[must_use]
    pub fn second<C>(self) -> ReifiedFold<(C, S), (C, A)>
    where
        C: Clone + 'static,
    {
        let inner = self.into_inner();
        ReifiedFold::from_fn(move |pair: &(C, S)| {
            inner
                .to_vec(&pair.1)
                .into_iter()
                .map(|value| (pair.0.clone(), value))
                .collect()
        })
    }

    /// Runs on the `Left` case of a sum; a `Right` passes through as a
    /// single result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::control::Either;
    /// use reified_optics::optics::Fold;
    /// use reified_optics::reified::ReifiedFold;
    ///
    /// let chars = ReifiedFold::from_fn(|text: &String| text.chars().collect::<Vec<_>>());
    /// let routed = chars.left::<i32>();
    ///
    /// assert_eq!(
    ///     routed.to_vec(&Either::Left("ab".to_string())),
    ///     vec![Either::Left('a'), Either::Left('b')]
    /// );
    /// assert_eq!(routed.to_vec(&Either::Right(7)), vec![Either::Right(7)]);
    /// ```
    #[must_use]
    pub fn left<C>(self) -> ReifiedFold<Either<S, C>, Either<A, C>>
    where
        C: Clone + 'static,
    {
        let inner = self.into_inner();
        ReifiedFold::from_fn(move |source: &Either<S, C>| match source {
            Either::Left(value) => inner.to_vec(value).into_iter().map(Either::Left).collect(),
            Either::Right(other) => vec![Either::Right(other.clone())],
        })
    }

    /// Runs on the `Right` case of a sum; a `Left` passes through as a
    /// single result.
    #[must_use]
    pub fn right<C>(self) -> ReifiedFold<Either<C, S>, Either<C, A>>
    where
        C: Clone + 'static,
    {
        let inner = self.into_inner();
        ReifiedFold::from_fn(move |source: &Either<C, S>| match source {
            Either::Left(other) => vec![Either::Left(other.clone())],
            Either::Right(value) => inner.to_vec(value).into_iter().map(Either::Right).collect(),
        })
    }

    /// Composes with a fold that runs first: this fold runs on every
    /// result of `inner`, depth-first.
    ///
    /// `outer.compose(inner)` is `inner.pipe(outer)`.
    #[must_use]
    pub fn compose<T>(self, inner: ReifiedFold<T, S>) -> ReifiedFold<T, A>
    where
        T: 'static,
    {
        inner.pipe(self)
    }

    /// Runs `next` on every result of this fold, depth-first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Fold;
    /// use reified_optics::reified::ReifiedFold;
    ///
    /// let words = ReifiedFold::from_fn(|text: &String| {
    ///     text.split(' ').map(str::to_string).collect::<Vec<_>>()
    /// });
    /// let chars = ReifiedFold::from_fn(|word: &String| word.chars().collect::<Vec<_>>());
    ///
    /// let all_chars = words.pipe(chars);
    /// assert_eq!(all_chars.to_vec(&"ab c".to_string()), vec!['a', 'b', 'c']);
    /// ```
    #[must_use]
    pub fn pipe<B>(self, next: ReifiedFold<A, B>) -> ReifiedFold<S, B>
    where
        B: 'static,
    {
        let first = self.into_inner();
        let second = next.into_inner();
        ReifiedFold::from_fn(move |source: &S| {
            first
                .to_vec(source)
                .iter()
                .flat_map(|value| second.to_vec(value))
                .collect()
        })
    }

    /// Cross product of the two folds on the same source. Same as
    /// [`product`](Self::product).
    #[must_use]
    pub fn fanout<B>(self, other: ReifiedFold<S, B>) -> ReifiedFold<S, (A, B)>
    where
        A: Clone,
        B: Clone + 'static,
    {
        self.product(other)
    }

    /// Dispatches a sum source: `Left` goes to this fold, `Right` to `other`.
    #[must_use]
    pub fn fan_in<T>(self, other: ReifiedFold<T, A>) -> ReifiedFold<Either<S, T>, A>
    where
        T: 'static,
    {
        let left_fold = self.into_inner();
        let right_fold = other.into_inner();
        ReifiedFold::from_fn(move |source: &Either<S, T>| {
            source
                .as_ref()
                .either(|value| left_fold.to_vec(value), |value| right_fold.to_vec(value))
        })
    }

    /// Runs this fold on the first component and `other` on the second,
    /// yielding the cross product with this fold in the outer loop.
    #[must_use]
    pub fn parallel<T, B>(self, other: ReifiedFold<T, B>) -> ReifiedFold<(S, T), (A, B)>
    where
        A: Clone,
        T: 'static,
        B: Clone + 'static,
    {
        let left_fold = self.into_inner();
        let right_fold = other.into_inner();
        ReifiedFold::from_fn(move |pair: &(S, T)| {
            let rights = right_fold.to_vec(&pair.1);
            let mut results = Vec::new();
            for left in left_fold.to_vec(&pair.0) {
                for right in &rights {
                    results.push((left.clone(), right.clone()));
                }
            }
            results
        })
    }

    /// Dispatches a sum source and keeps the case in every result.
    #[must_use]
    pub fn choose<T, B>(self, other: ReifiedFold<T, B>) -> ReifiedFold<Either<S, T>, Either<A, B>>
    where
        T: 'static,
        B: 'static,
    {
        let left_fold = self.into_inner();
        let right_fold = other.into_inner();
        ReifiedFold::from_fn(move |source: &Either<S, T>| match source {
            Either::Left(value) => left_fold.to_vec(value).into_iter().map(Either::Left).collect(),
            Either::Right(value) => right_fold
                .to_vec(value)
                .into_iter()
                .map(Either::Right)
                .collect(),
        })
    }
}

impl<S> ReifiedFold<S, S>
where
    S: Clone + 'static,
{
    /// Creates a fold yielding the source itself, once.
    #[must_use]
    pub fn ask() -> Self {
        Self::from_fn(|source: &S| vec![source.clone()])
    }

    /// The identity for [`pipe`](ReifiedFold::pipe) and
    /// [`compose`](ReifiedFold::compose). Same as [`ask`](Self::ask).
    #[must_use]
    pub fn identity() -> Self {
        Self::ask()
    }
}

impl<S, A> Default for ReifiedFold<S, A>
where
    S: 'static,
    A: 'static,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<S, B, C> ReifiedFold<S, (ReifiedFold<B, C>, B)>
where
    S: 'static,
    B: 'static,
    C: 'static,
{
    /// Runs each yielded fold on the value beside it and flattens the
    /// results in order.
    #[must_use]
    pub fn app(self) -> ReifiedFold<S, C> {
        let inner = self.into_inner();
        ReifiedFold::from_fn(move |source: &S| {
            inner
                .to_vec(source)
                .into_iter()
                .flat_map(|(fold, argument)| fold.to_vec(&argument))
                .collect()
        })
    }
}

impl<S, A, D> ReifiedFold<(S, D), (A, D)>
where
    S: Clone + 'static,
    A: 'static,
    D: Clone + 'static,
{
    /// Ties the second component of each result back into the source.
    ///
    /// The fold runs on `(source, seed)`. Result `i` is then the first
    /// component of the `i`-th result of a run on `(source, d_i)`, where
    /// `d_i` is the `i`-th fed-back value; a rerun too short to reach
    /// position `i` keeps the first run's value. Count and order follow the
    /// first run, so a fold that ignores the fed-back value behaves as
    /// plain application.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Fold;
    /// use reified_optics::reified::ReifiedFold;
    ///
    /// let offsets = ReifiedFold::from_fn(|pair: &(i32, i32)| {
    ///     let (base, offset) = *pair;
    ///     vec![(base + offset, 10), (base - offset, 20)]
    /// });
    ///
    /// assert_eq!(offsets.feedback(0).to_vec(&100), vec![110, 80]);
    /// ```
    #[must_use]
    pub fn feedback(self, seed: D) -> ReifiedFold<S, A> {
        let inner = self.into_inner();
        ReifiedFold::from_fn(move |source: &S| {
            inner
                .to_vec(&(source.clone(), seed.clone()))
                .into_iter()
                .enumerate()
                .map(|(position, (first_result, fed_back))| {
                    inner
                        .to_vec(&(source.clone(), fed_back))
                        .into_iter()
                        .nth(position)
                        .map_or(first_result, |(result, _)| result)
                })
                .collect()
        })
    }
}
