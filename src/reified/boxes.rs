//! The box family.
//!
//! Every optic kind gets a box: a cheap, cloneable value holding the optic
//! behind an `Rc<dyn Kind>`. All boxes share the same construction and
//! unwrapping surface, generated by `define_reified!`, and each box
//! implements its own kind's trait by delegating to the wrapped optic.

use std::fmt;
use std::rc::Rc;

use crate::optics::{
    Fold, Getter, IndexedFold, IndexedGetter, IndexedLens, IndexedSetter, IndexedTraversal, Iso,
    Lens, Prism, Setter, Traversal,
};

/// Generates a box type named `Reified<Kind>` for the optic trait `<Kind>`.
///
/// The generated type provides `new`, `run_<kind>`, `into_inner`,
/// `From<Rc<dyn Kind>>`, `Clone`, `Debug` and `Display`.
macro_rules! define_reified {
    (
        $(#[$meta:meta])*
        $kind:ident<$($param:ident),+>
    ) => {
        paste::paste! {
            $(#[$meta])*
            pub struct [<Reified $kind>]<$($param),+>
            where
                $($param: 'static,)+
            {
                inner: Rc<dyn $kind<$($param),+>>,
            }

            impl<$($param),+> [<Reified $kind>]<$($param),+>
            where
                $($param: 'static,)+
            {
                /// Wraps `optic` in a box.
                pub fn new<O>(optic: O) -> Self
                where
                    O: $kind<$($param),+> + 'static,
                {
                    Self {
                        inner: Rc::new(optic),
                    }
                }

                /// Borrows the wrapped optic.
                #[must_use]
                pub fn [<run_ $kind:snake>](&self) -> &dyn $kind<$($param),+> {
                    &*self.inner
                }

                /// Takes the wrapped optic out of the box.
                #[must_use]
                pub fn into_inner(self) -> Rc<dyn $kind<$($param),+>> {
                    self.inner
                }
            }

            impl<$($param),+> From<Rc<dyn $kind<$($param),+>>> for [<Reified $kind>]<$($param),+>
            where
                $($param: 'static,)+
            {
                fn from(inner: Rc<dyn $kind<$($param),+>>) -> Self {
                    Self { inner }
                }
            }

            impl<$($param),+> Clone for [<Reified $kind>]<$($param),+>
            where
                $($param: 'static,)+
            {
                fn clone(&self) -> Self {
                    Self {
                        inner: Rc::clone(&self.inner),
                    }
                }
            }

            impl<$($param),+> fmt::Debug for [<Reified $kind>]<$($param),+>
            where
                $($param: 'static,)+
            {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter
                        .debug_struct(stringify!([<Reified $kind>]))
                        .finish_non_exhaustive()
                }
            }

            impl<$($param),+> fmt::Display for [<Reified $kind>]<$($param),+>
            where
                $($param: 'static,)+
            {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(formatter, concat!("<", stringify!([<Reified $kind>]), ">"))
                }
            }
        }
    };
}

define_reified! {
    /// A boxed [`Getter`]. See the `getter` algebra for its combinators.
    Getter<S, A>
}

define_reified! {
    /// A boxed [`Fold`]. See the `fold` algebra for its combinators.
    Fold<S, A>
}

define_reified! {
    /// A boxed [`Lens`].
    Lens<S, A>
}

define_reified! {
    /// A boxed [`Setter`].
    Setter<S, A>
}

define_reified! {
    /// A boxed [`Traversal`].
    Traversal<S, A>
}

define_reified! {
    /// A boxed [`Iso`].
    Iso<S, A>
}

define_reified! {
    /// A boxed [`Prism`].
    Prism<S, A>
}

define_reified! {
    /// A boxed [`IndexedGetter`].
    IndexedGetter<I, S, A>
}

define_reified! {
    /// A boxed [`IndexedFold`].
    IndexedFold<I, S, A>
}

define_reified! {
    /// A boxed [`IndexedLens`].
    IndexedLens<I, S, A>
}

define_reified! {
    /// A boxed [`IndexedSetter`].
    IndexedSetter<I, S, A>
}

define_reified! {
    /// A boxed [`IndexedTraversal`].
    IndexedTraversal<I, S, A>
}

// =============================================================================
// Delegation
// =============================================================================

impl<S, A> Getter<S, A> for ReifiedGetter<S, A>
where
    S: 'static,
    A: 'static,
{
    fn view(&self, source: &S) -> A {
        #[cfg(feature = "tracing")]
        tracing::trace!(kind = "ReifiedGetter", "view");
        self.inner.view(source)
    }
}

impl<S, A> Fold<S, A> for ReifiedFold<S, A>
where
    S: 'static,
    A: 'static,
{
    fn to_vec(&self, source: &S) -> Vec<A> {
        let results = self.inner.to_vec(source);
        #[cfg(feature = "tracing")]
        tracing::trace!(kind = "ReifiedFold", count = results.len(), "to_vec");
        results
    }
}

impl<S, A> Lens<S, A> for ReifiedLens<S, A>
where
    S: 'static,
    A: 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        self.inner.get(source)
    }

    fn set(&self, source: S, value: A) -> S {
        self.inner.set(source, value)
    }
}

impl<S, A> Setter<S, A> for ReifiedSetter<S, A>
where
    S: 'static,
    A: 'static,
{
    fn over(&self, source: S, function: &mut dyn FnMut(A) -> A) -> S {
        self.inner.over(source, function)
    }
}

impl<S, A> Setter<S, A> for ReifiedTraversal<S, A>
where
    S: 'static,
    A: 'static,
{
    fn over(&self, source: S, function: &mut dyn FnMut(A) -> A) -> S {
        self.inner.over(source, function)
    }
}

impl<S, A> Traversal<S, A> for ReifiedTraversal<S, A>
where
    S: 'static,
    A: 'static,
{
    fn get_all<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = &'a A> + 'a> {
        self.inner.get_all(source)
    }
}

impl<S, A> Iso<S, A> for ReifiedIso<S, A>
where
    S: 'static,
    A: 'static,
{
    fn get(&self, source: S) -> A {
        self.inner.get(source)
    }

    fn reverse_get(&self, value: A) -> S {
        self.inner.reverse_get(value)
    }
}

impl<S, A> Prism<S, A> for ReifiedPrism<S, A>
where
    S: 'static,
    A: 'static,
{
    fn preview<'a>(&self, source: &'a S) -> Option<&'a A> {
        self.inner.preview(source)
    }

    fn review(&self, value: A) -> S {
        self.inner.review(value)
    }

    fn preview_owned(&self, source: S) -> Option<A> {
        self.inner.preview_owned(source)
    }
}

impl<I, S, A> IndexedGetter<I, S, A> for ReifiedIndexedGetter<I, S, A>
where
    I: 'static,
    S: 'static,
    A: 'static,
{
    fn iview(&self, source: &S) -> (I, A) {
        #[cfg(feature = "tracing")]
        tracing::trace!(kind = "ReifiedIndexedGetter", "iview");
        self.inner.iview(source)
    }
}

impl<I, S, A> IndexedFold<I, S, A> for ReifiedIndexedFold<I, S, A>
where
    I: 'static,
    S: 'static,
    A: 'static,
{
    fn ito_vec(&self, source: &S) -> Vec<(I, A)> {
        let results = self.inner.ito_vec(source);
        #[cfg(feature = "tracing")]
        tracing::trace!(kind = "ReifiedIndexedFold", count = results.len(), "ito_vec");
        results
    }
}

impl<I, S, A> IndexedLens<I, S, A> for ReifiedIndexedLens<I, S, A>
where
    I: 'static,
    S: 'static,
    A: 'static,
{
    fn iget<'a>(&self, source: &'a S) -> (I, &'a A) {
        self.inner.iget(source)
    }

    fn iset(&self, source: S, value: A) -> S {
        self.inner.iset(source, value)
    }
}

impl<I, S, A> IndexedSetter<I, S, A> for ReifiedIndexedSetter<I, S, A>
where
    I: 'static,
    S: 'static,
    A: 'static,
{
    fn iover(&self, source: S, function: &mut dyn FnMut(&I, A) -> A) -> S {
        self.inner.iover(source, function)
    }
}

impl<I, S, A> IndexedSetter<I, S, A> for ReifiedIndexedTraversal<I, S, A>
where
    I: 'static,
    S: 'static,
    A: 'static,
{
    fn iover(&self, source: S, function: &mut dyn FnMut(&I, A) -> A) -> S {
        self.inner.iover(source, function)
    }
}

impl<I, S, A> IndexedTraversal<I, S, A> for ReifiedIndexedTraversal<I, S, A>
where
    I: 'static,
    S: 'static,
    A: 'static,
{
    fn iget_all<'a>(&self, source: &'a S) -> Vec<(I, &'a A)> {
        self.inner.iget_all(source)
    }
}

static_assertions::assert_impl_all!(ReifiedGetter<i32, i32>: Clone, fmt::Debug, fmt::Display);
static_assertions::assert_impl_all!(ReifiedFold<String, char>: Clone, fmt::Debug, fmt::Display);
static_assertions::assert_impl_all!(ReifiedIndexedTraversal<usize, Vec<u8>, u8>: Clone);
static_assertions::assert_not_impl_any!(ReifiedGetter<i32, i32>: Send, Sync);
static_assertions::assert_not_impl_any!(ReifiedLens<(i32, i32), i32>: Send, Sync);
static_assertions::assert_not_impl_any!(ReifiedIndexedFold<usize, Vec<i32>, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{
        FunctionIndexedLens, FunctionIso, FunctionPrism, Ignored, VecIndexedTraversal,
        VecTraversal, first_lens, folding, sets, to,
    };
    use rstest::rstest;

    #[rstest]
    fn getter_box_delegates_view() {
        let length = ReifiedGetter::new(to(|text: &String| text.len()));
        assert_eq!(length.view(&"four".to_string()), 4);
        assert_eq!(length.run_getter().view(&"ab".to_string()), 2);
    }

    #[rstest]
    fn fold_box_round_trips_through_rc() {
        let digits = ReifiedFold::new(folding(|text: &String| {
            text.chars().filter(char::is_ascii_digit).collect::<Vec<_>>()
        }));
        let reboxed = ReifiedFold::from(digits.clone().into_inner());
        let text = "a1b2c3".to_string();
        assert_eq!(reboxed.to_vec(&text), digits.to_vec(&text));
    }

    #[rstest]
    fn lens_box_gets_and_sets() {
        let first = ReifiedLens::new(first_lens::<i32, char>());
        assert_eq!(*first.get(&(1, 'x')), 1);
        assert_eq!(first.set((1, 'x'), 2), (2, 'x'));
        assert_eq!(first.run_lens().set((1, 'x'), 3), (3, 'x'));
    }

    #[rstest]
    fn setter_box_delegates_over() {
        let doubled = ReifiedSetter::new(sets(
            |numbers: Vec<i32>, function: &mut dyn FnMut(i32) -> i32| {
                numbers.into_iter().map(function).collect()
            },
        ));
        assert_eq!(doubled.modify_all(vec![1, 2], |x| x * 2), vec![2, 4]);
    }

    #[rstest]
    fn traversal_box_reads_and_writes() {
        let elements = ReifiedTraversal::new(VecTraversal::<i32>::new());
        assert_eq!(elements.to_vec_cloned(&vec![4, 5]), vec![4, 5]);
        assert_eq!(elements.set_all(vec![4, 5], 0), vec![0, 0]);
    }

    #[rstest]
    fn iso_and_prism_boxes_delegate() {
        let negate = ReifiedIso::new(FunctionIso::new(|n: i32| -n, |n: i32| -n));
        assert_eq!(negate.reverse_get(negate.get(7)), 7);

        let some = ReifiedPrism::new(FunctionPrism::new(
            |source: &Option<u8>| source.as_ref(),
            |value: u8| Some(value),
            |source: Option<u8>| source,
        ));
        assert_eq!(some.preview(&Some(3)), Some(&3));
        assert_eq!(some.preview_owned(None), None);
        assert_eq!(some.review(9), Some(9));
    }

    #[rstest]
    fn indexed_boxes_delegate() {
        let positions = ReifiedIndexedTraversal::new(VecIndexedTraversal::<char>::new());
        assert_eq!(positions.iget_all(&vec!['p']), vec![(0, &'p')]);

        let second = ReifiedIndexedLens::new(FunctionIndexedLens::new(
            |pair: &(i32, i32)| ("second", &pair.1),
            |pair: (i32, i32), value: i32| (pair.0, value),
        ));
        assert_eq!(second.iget(&(1, 2)), ("second", &2));

        let nothing: ReifiedIndexedSetter<usize, Vec<i32>, i32> =
            ReifiedIndexedSetter::new(Ignored::new());
        assert_eq!(nothing.imodify_all(vec![1], |_, x| x + 1), vec![1]);
    }

    #[rstest]
    #[case(format!("{}", ReifiedFold::<i32, i32>::new(Ignored::new())), "<ReifiedFold>")]
    #[case(format!("{}", ReifiedSetter::<i32, i32>::new(Ignored::new())), "<ReifiedSetter>")]
    #[case(
        format!("{}", ReifiedIndexedFold::<usize, i32, i32>::new(Ignored::new())),
        "<ReifiedIndexedFold>"
    )]
    fn display_names_kind(#[case] rendered: String, #[case] expected: &str) {
        assert_eq!(rendered, expected);
    }

    #[rstest]
    fn debug_is_non_exhaustive() {
        let getter = ReifiedGetter::new(to(|n: &i32| *n));
        assert_eq!(format!("{getter:?}"), "ReifiedGetter { .. }");
    }
}
