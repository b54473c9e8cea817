//! The algebra of boxed getters.
//!
//! A [`ReifiedGetter<S, A>`] is a read-only function from `&S` to `A` that
//! can be stored, cloned and combined. This module gives it the full set of
//! combinators a function type supports: mapping over the result, combining
//! two getters on the same source, chaining, reading the source, adapting
//! both ends, pairing and branching, sequential composition, and looping.
//!
//! # Note on Type Classes
//!
//! The combinators are inherent methods rather than trait implementations,
//! for the same reason as for `Reader`: the boxed closures need `'static`
//! bounds that general type class traits do not carry.
//!
//! # Laws
//!
//! ## Functor Laws
//!
//! - Identity: `getter.fmap(|x| x) == getter`
//! - Composition: `getter.fmap(f).fmap(g) == getter.fmap(|x| g(f(x)))`
//!
//! ## Monad Laws
//!
//! - Left Identity: `ReifiedGetter::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(ReifiedGetter::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! ## Category Laws
//!
//! - Identity: `ReifiedGetter::identity().pipe(g) == g == g.pipe(ReifiedGetter::identity())`
//! - Associativity: `f.pipe(g).pipe(h) == f.pipe(g.pipe(h))`
//!
//! Equality here is extensional: two getters are equal when they view
//! every source to the same value.
//!
//! # Examples
//!
//! ```rust
//! use reified_optics::optics::Getter;
//! use reified_optics::reified::ReifiedGetter;
//!
//! let second = ReifiedGetter::from_fn(|pair: &(String, String)| pair.1.clone());
//! let first_length = ReifiedGetter::from_fn(|pair: &(String, String)| pair.0.len());
//!
//! let both = second.product(first_length);
//! let pair = ("hello".to_string(), "world".to_string());
//! assert_eq!(both.view(&pair), ("world".to_string(), 5));
//! ```

use crate::control::Either;
use crate::optics::{FunctionGetter, Getter, Iso, Lens};

use super::ReifiedGetter;

impl<S, A> ReifiedGetter<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a getter from a viewing function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Getter;
    /// use reified_optics::reified::ReifiedGetter;
    ///
    /// let length = ReifiedGetter::from_fn(|text: &String| text.len());
    /// assert_eq!(length.view(&"abc".to_string()), 3);
    /// ```
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(FunctionGetter::new(function))
    }

    /// Views a lens's focus, cloning it out of the source.
    pub fn from_lens<L>(lens: L) -> Self
    where
        L: Lens<S, A> + 'static,
        A: Clone,
    {
        Self::from_fn(move |source: &S| lens.get(source).clone())
    }

    /// Views through an iso's forward conversion on a clone of the source.
    pub fn from_iso<I>(iso: I) -> Self
    where
        I: Iso<S, A> + 'static,
        S: Clone,
    {
        Self::from_fn(move |source: &S| iso.get(source.clone()))
    }

    /// Creates a getter that views every source to the same value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Getter;
    /// use reified_optics::reified::ReifiedGetter;
    ///
    /// let constant: ReifiedGetter<i32, &str> = ReifiedGetter::pure("constant");
    /// assert_eq!(constant.view(&0), "constant");
    /// assert_eq!(constant.view(&100), "constant");
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::from_fn(move |_| value.clone())
    }

    /// Maps a function over the viewed value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Getter;
    /// use reified_optics::reified::ReifiedGetter;
    ///
    /// let length = ReifiedGetter::from_fn(|text: &String| text.len());
    /// let is_long = length.fmap(|length| length > 3);
    /// assert!(is_long.view(&"long".to_string()));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> ReifiedGetter<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let inner = self.into_inner();
        ReifiedGetter::from_fn(move |source: &S| function(inner.view(source)))
    }

    /// Applies the function viewed by this getter to the value viewed by
    /// `other`, both on the same source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Getter;
    /// use reified_optics::reified::ReifiedGetter;
    ///
    /// let adder = ReifiedGetter::from_fn(|n: &i32| {
    ///     let n = *n;
    ///     move |m: i32| n + m
    /// });
    /// let doubled = ReifiedGetter::from_fn(|n: &i32| n * 2);
    ///
    /// assert_eq!(adder.apply(doubled).view(&10), 30);
    /// ```
    pub fn apply<B, C>(self, other: ReifiedGetter<S, B>) -> ReifiedGetter<S, C>
    where
        A: Fn(B) -> C,
        B: 'static,
        C: 'static,
    {
        let function_getter = self.into_inner();
        let value_getter = other.into_inner();
        ReifiedGetter::from_fn(move |source: &S| {
            let function = function_getter.view(source);
            function(value_getter.view(source))
        })
    }

    /// Combines the values viewed by two getters on the same source.
    pub fn map2<B, C, F>(self, other: ReifiedGetter<S, B>, function: F) -> ReifiedGetter<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let self_getter = self.into_inner();
        let other_getter = other.into_inner();
        ReifiedGetter::from_fn(move |source: &S| {
            function(self_getter.view(source), other_getter.view(source))
        })
    }

    /// Pairs the values viewed by two getters on the same source.
    #[must_use]
    pub fn product<B>(self, other: ReifiedGetter<S, B>) -> ReifiedGetter<S, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Chains this getter with a function that picks the next getter from
    /// the viewed value. The next getter runs on the same source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Getter;
    /// use reified_optics::reified::ReifiedGetter;
    ///
    /// let first = ReifiedGetter::from_fn(|pair: &(bool, i32)| pair.0);
    /// let chosen = first.flat_map(|negate| {
    ///     ReifiedGetter::from_fn(move |pair: &(bool, i32)| if negate { -pair.1 } else { pair.1 })
    /// });
    ///
    /// assert_eq!(chosen.view(&(true, 4)), -4);
    /// assert_eq!(chosen.view(&(false, 4)), 4);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> ReifiedGetter<S, B>
    where
        F: Fn(A) -> ReifiedGetter<S, B> + 'static,
        B: 'static,
    {
        let inner = self.into_inner();
        ReifiedGetter::from_fn(move |source: &S| function(inner.view(source)).view(source))
    }

    /// Alias for [`flat_map`](Self::flat_map).
    pub fn and_then<B, F>(self, function: F) -> ReifiedGetter<S, B>
    where
        F: Fn(A) -> ReifiedGetter<S, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Creates a getter that applies `function` to the source.
    pub fn asks<F>(function: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::from_fn(function)
    }

    /// Runs `getter` on the source after transforming it with `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Getter;
    /// use reified_optics::reified::ReifiedGetter;
    ///
    /// let doubled = ReifiedGetter::from_fn(|n: &i32| n * 2);
    /// let shifted = ReifiedGetter::local(|n: &i32| n + 1, doubled);
    /// assert_eq!(shifted.view(&4), 10);
    /// ```
    pub fn local<F>(modifier: F, getter: Self) -> Self
    where
        F: Fn(&S) -> S + 'static,
    {
        let inner = getter.into_inner();
        Self::from_fn(move |source: &S| inner.view(&modifier(source)))
    }

    /// Adapts both ends: `pre` builds this getter's source from a new one,
    /// `post` transforms the viewed value.
    pub fn dimap<T, B, Pre, Post>(self, pre: Pre, post: Post) -> ReifiedGetter<T, B>
    where
        T: 'static,
        B: 'static,
        Pre: Fn(&T) -> S + 'static,
        Post: Fn(A) -> B + 'static,
    {
        let inner = self.into_inner();
        ReifiedGetter::from_fn(move |source: &T| post(inner.view(&pre(source))))
    }

    /// Adapts the source end only.
    pub fn lmap<T, Pre>(self, pre: Pre) -> ReifiedGetter<T, A>
    where
        T: 'static,
        Pre: Fn(&T) -> S + 'static,
    {
        let inner = self.into_inner();
        ReifiedGetter::from_fn(move |source: &T| inner.view(&pre(source)))
    }

    /// Adapts the result end only. Same as [`fmap`](Self::fmap).
    pub fn rmap<B, Post>(self, post: Post) -> ReifiedGetter<S, B>
    where
        B: 'static,
        Post: Fn(A) -> B + 'static,
    {
        self.fmap(post)
    }

    /// Runs on the first component of a pair, passing the second through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Getter;
    /// use reified_optics::reified::ReifiedGetter;
    ///
    /// let length = ReifiedGetter::from_fn(|text: &String| text.len());
    /// let paired = length.first::<char>();
    /// assert_eq!(paired.view(&("abc".to_string(), 'z')), (3, 'z'));
    /// ```
    #[must_use]
    pub fn first<C>(self) -> ReifiedGetter<(S, C), (A, C)>
    where
        C: Clone + 'static,
    {
        let inner = self.into_inner();
        ReifiedGetter::from_fn(move |pair: &(S, C)| (inner.view(&pair.0), pair.1.clone()))
    }

    /// Runs on the second component of a pair, passing the first through.
    #[must_use]
    pub fn second<C>(self) -> ReifiedGetter<(C, S), (C, A)>
    where
        C: Clone + 'static,
    {
        let inner = self.into_inner();
        ReifiedGetter::from_fn(move |pair: &(C, S)| (pair.0.clone(), inner.view(&pair.1)))
    }

    /// Runs on the `Left` case of a sum, passing `Right` through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::control::Either;
    /// use reified_optics::optics::Getter;
    /// use reified_optics::reified::ReifiedGetter;
    ///
    /// let length = ReifiedGetter::from_fn(|text: &String| text.len()).left::<bool>();
    /// assert_eq!(length.view(&Either::Left("ab".to_string())), Either::Left(2));
    /// assert_eq!(length.view(&Either::Right(true)), Either::Right(true));
    /// ```
    #[must_use]
    pub fn left<C>(self) -> ReifiedGetter<Either<S, C>, Either<A, C>>
    where
        C: Clone + 'static,
    {
        let inner = self.into_inner();
        ReifiedGetter::from_fn(move |source: &Either<S, C>| {
            source.as_ref().bimap(|value| inner.view(value), C::clone)
        })
    }

    /// Runs on the `Right` case of a sum, passing `Left` through.
    #[must_use]
    pub fn right<C>(self) -> ReifiedGetter<Either<C, S>, Either<C, A>>
    where
        C: Clone + 'static,
    {
        let inner = self.into_inner();
        ReifiedGetter::from_fn(move |source: &Either<C, S>| {
            source.as_ref().bimap(C::clone, |value| inner.view(value))
        })
    }

    /// Composes with a getter that runs first: the result views a `T` by
    /// running `inner` and then this getter on what `inner` produced.
    ///
    /// `outer.compose(inner)` is `inner.pipe(outer)`.
    #[must_use]
    pub fn compose<T>(self, inner: ReifiedGetter<T, S>) -> ReifiedGetter<T, A>
    where
        T: 'static,
    {
        inner.pipe(self)
    }

    /// Runs this getter, then `next` on its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Getter;
    /// use reified_optics::reified::ReifiedGetter;
    ///
    /// let first = ReifiedGetter::from_fn(|pair: &(String, i32)| pair.0.clone());
    /// let length = ReifiedGetter::from_fn(|text: &String| text.len());
    ///
    /// let first_length = first.pipe(length);
    /// assert_eq!(first_length.view(&("hello".to_string(), 0)), 5);
    /// ```
    #[must_use]
    pub fn pipe<B>(self, next: ReifiedGetter<A, B>) -> ReifiedGetter<S, B>
    where
        B: 'static,
    {
        let first = self.into_inner();
        let second = next.into_inner();
        ReifiedGetter::from_fn(move |source: &S| second.view(&first.view(source)))
    }

    /// Runs two getters on the same source and pairs their results.
    /// Same as [`product`](Self::product).
    #[must_use]
    pub fn fanout<B>(self, other: ReifiedGetter<S, B>) -> ReifiedGetter<S, (A, B)>
    where
        B: 'static,
    {
        self.product(other)
    }

    /// Dispatches a sum source: `Left` goes to this getter, `Right` to
    /// `other`. Both produce the same result type.
    #[must_use]
    pub fn fan_in<T>(self, other: ReifiedGetter<T, A>) -> ReifiedGetter<Either<S, T>, A>
    where
        T: 'static,
    {
        let left_getter = self.into_inner();
        let right_getter = other.into_inner();
        ReifiedGetter::from_fn(move |source: &Either<S, T>| {
            source
                .as_ref()
                .either(|value| left_getter.view(value), |value| right_getter.view(value))
        })
    }

    /// Runs this getter on the first component and `other` on the second.
    #[must_use]
    pub fn parallel<T, B>(self, other: ReifiedGetter<T, B>) -> ReifiedGetter<(S, T), (A, B)>
    where
        T: 'static,
        B: 'static,
    {
        let left_getter = self.into_inner();
        let right_getter = other.into_inner();
        ReifiedGetter::from_fn(move |pair: &(S, T)| {
            (left_getter.view(&pair.0), right_getter.view(&pair.1))
        })
    }

    /// Dispatches a sum source and keeps the case in the result.
    #[must_use]
    pub fn choose<T, B>(
        self,
        other: ReifiedGetter<T, B>,
    ) -> ReifiedGetter<Either<S, T>, Either<A, B>>
    where
        T: 'static,
        B: 'static,
    {
        let left_getter = self.into_inner();
        let right_getter = other.into_inner();
        ReifiedGetter::from_fn(move |source: &Either<S, T>| {
            source
                .as_ref()
                .bimap(|value| left_getter.view(value), |value| right_getter.view(value))
        })
    }
}

impl<S> ReifiedGetter<S, S>
where
    S: Clone + 'static,
{
    /// Creates a getter that views the source itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Getter;
    /// use reified_optics::reified::ReifiedGetter;
    ///
    /// let whole: ReifiedGetter<String, String> = ReifiedGetter::ask();
    /// assert_eq!(whole.view(&"same".to_string()), "same");
    /// ```
    #[must_use]
    pub fn ask() -> Self {
        Self::from_fn(S::clone)
    }

    /// The identity for [`pipe`](ReifiedGetter::pipe) and
    /// [`compose`](ReifiedGetter::compose). Same as [`ask`](Self::ask).
    #[must_use]
    pub fn identity() -> Self {
        Self::ask()
    }
}

impl<S, B, C> ReifiedGetter<S, (ReifiedGetter<B, C>, B)>
where
    S: 'static,
    B: 'static,
    C: 'static,
{
    /// Runs the getter found in the viewed pair on the value beside it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Getter;
    /// use reified_optics::reified::ReifiedGetter;
    ///
    /// let pick = ReifiedGetter::from_fn(|shout: &bool| {
    ///     let getter = if *shout {
    ///         ReifiedGetter::from_fn(|text: &String| text.to_uppercase())
    ///     } else {
    ///         ReifiedGetter::from_fn(|text: &String| text.clone())
    ///     };
    ///     (getter, "hi".to_string())
    /// });
    ///
    /// assert_eq!(pick.clone().app().view(&true), "HI");
    /// assert_eq!(pick.app().view(&false), "hi");
    /// ```
    #[must_use]
    pub fn app(self) -> ReifiedGetter<S, C> {
        let inner = self.into_inner();
        ReifiedGetter::from_fn(move |source: &S| {
            let (getter, argument) = inner.view(source);
            getter.view(&argument)
        })
    }
}

impl<S, A, D> ReifiedGetter<(S, D), (A, D)>
where
    S: Clone + 'static,
    A: 'static,
    D: Clone + 'static,
{
    /// Ties the second component of the result back into the second
    /// component of the source.
    ///
    /// The getter is evaluated on `(source, seed)`; the `D` it produces is
    /// fed back by evaluating again on `(source, d)`, whose first component
    /// is the result. When the produced `D` does not depend on the incoming
    /// one this is the fixed point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reified_optics::optics::Getter;
    /// use reified_optics::reified::ReifiedGetter;
    ///
    /// let scaled = ReifiedGetter::from_fn(|pair: &(i32, i32)| {
    ///     let (value, factor) = *pair;
    ///     (value * factor, 3)
    /// });
    ///
    /// assert_eq!(scaled.feedback(1).view(&5), 15);
    /// ```
    #[must_use]
    pub fn feedback(self, seed: D) -> ReifiedGetter<S, A> {
        let inner = self.into_inner();
        ReifiedGetter::from_fn(move |source: &S| {
            let (_, fed_back) = inner.view(&(source.clone(), seed.clone()));
            let (result, _) = inner.view(&(source.clone(), fed_back));
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{FunctionIso, first_lens};
    use rstest::rstest;

    fn length() -> ReifiedGetter<String, usize> {
        ReifiedGetter::from_fn(|text: &String| text.len())
    }

    #[rstest]
    fn from_lens_clones_focus() {
        let first = ReifiedGetter::from_lens(first_lens::<String, i32>());
        assert_eq!(first.view(&("a".to_string(), 1)), "a");
    }

    #[rstest]
    fn from_iso_views_forward() {
        let chars = ReifiedGetter::from_iso(FunctionIso::new(
            |text: String| text.chars().collect::<Vec<_>>(),
            |chars: Vec<char>| chars.into_iter().collect::<String>(),
        ));
        assert_eq!(chars.view(&"ok".to_string()), vec!['o', 'k']);
    }

    #[rstest]
    #[case("", 0)]
    #[case("abc", 6)]
    fn fmap_transforms_result(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(length().fmap(|n| n * 2).view(&text.to_string()), expected);
    }

    #[rstest]
    fn map2_runs_both_on_same_source() {
        let combined = length().map2(ReifiedGetter::ask(), |n, text| format!("{text}:{n}"));
        assert_eq!(combined.view(&"abc".to_string()), "abc:3");
    }

    #[rstest]
    fn and_then_matches_flat_map() {
        let via_flat_map = length().flat_map(|n| ReifiedGetter::pure(n + 1));
        let via_and_then = length().and_then(|n| ReifiedGetter::pure(n + 1));
        let text = "four".to_string();
        assert_eq!(via_flat_map.view(&text), via_and_then.view(&text));
    }

    #[rstest]
    fn asks_applies_function() {
        let upper = ReifiedGetter::asks(|text: &String| text.to_uppercase());
        assert_eq!(upper.view(&"x".to_string()), "X");
    }

    #[rstest]
    fn dimap_adapts_both_ends() {
        let adapted = length().dimap(|n: &usize| "x".repeat(*n), |n| n + 100);
        assert_eq!(adapted.view(&3), 103);
    }

    #[rstest]
    fn lmap_and_rmap() {
        let from_number = length().lmap(|n: &i32| n.to_string());
        assert_eq!(from_number.view(&12345), 5);
        assert!(length().rmap(|n| n == 0).view(&String::new()));
    }

    #[rstest]
    fn second_passes_first_through() {
        let paired = length().second::<i32>();
        assert_eq!(paired.view(&(7, "ab".to_string())), (7, 2));
    }

    #[rstest]
    #[case(Either::Left(1), Either::Left(1))]
    #[case(Either::Right("xyz".to_string()), Either::Right(3))]
    fn right_runs_on_right_case(
        #[case] source: Either<i32, String>,
        #[case] expected: Either<i32, usize>,
    ) {
        assert_eq!(length().right::<i32>().view(&source), expected);
    }

    #[rstest]
    fn compose_runs_inner_first() {
        let first = ReifiedGetter::from_fn(|pair: &(String, i32)| pair.0.clone());
        let composed = length().compose(first);
        assert_eq!(composed.view(&("hello".to_string(), 9)), 5);
    }

    #[rstest]
    fn identity_is_unit_for_pipe() {
        let text = "unit".to_string();
        let left = ReifiedGetter::identity().pipe(length());
        let right = length().pipe(ReifiedGetter::identity());
        assert_eq!(left.view(&text), 4);
        assert_eq!(right.view(&text), 4);
    }

    #[rstest]
    fn fanout_pairs_results() {
        let both = length().fanout(ReifiedGetter::from_fn(|text: &String| text.is_empty()));
        assert_eq!(both.view(&"ab".to_string()), (2, false));
    }

    #[rstest]
    #[case(Either::Left("abcd".to_string()), 4)]
    #[case(Either::Right(9), 9)]
    fn fan_in_unifies_cases(#[case] source: Either<String, usize>, #[case] expected: usize) {
        let unified = length().fan_in(ReifiedGetter::from_fn(|n: &usize| *n));
        assert_eq!(unified.view(&source), expected);
    }

    #[rstest]
    fn parallel_runs_componentwise() {
        let both = length().parallel(ReifiedGetter::from_fn(|n: &i32| n * 10));
        assert_eq!(both.view(&("abc".to_string(), 2)), (3, 20));
    }

    #[rstest]
    fn choose_keeps_case() {
        let chosen = length().choose(ReifiedGetter::from_fn(|n: &i32| n + 1));
        assert_eq!(chosen.view(&Either::Left("ab".to_string())), Either::Left(2));
        assert_eq!(chosen.view(&Either::Right(1)), Either::Right(2));
    }

    #[rstest]
    fn feedback_ignoring_loop_is_plain_application() {
        let ignores = ReifiedGetter::from_fn(|pair: &(i32, i32)| (pair.0 + 1, 0));
        assert_eq!(ignores.feedback(42).view(&1), 2);
    }

    #[rstest]
    fn clone_shares_behavior() {
        let original = length();
        let copy = original.clone();
        let text = "same".to_string();
        assert_eq!(original.view(&text), copy.view(&text));
    }
}
