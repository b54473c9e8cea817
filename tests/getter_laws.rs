#![cfg(feature = "reified")]
//! Property-based tests for the laws of boxed getters.
//!
//! Getters are compared extensionally: two getters are equal when they
//! view the same source to the same value.
//!
//! ## Functor Laws
//! - Identity: getter.fmap(|x| x) == getter
//! - Composition: getter.fmap(f).fmap(g) == getter.fmap(|x| g(f(x)))
//!
//! ## Applicative Laws
//! - Identity: pure(id).apply(v) == v
//! - Homomorphism: pure(f).apply(pure(x)) == pure(f(x))
//! - Interchange: u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! - Associativity: a.product(b).product(c) == a.product(b.product(c)) up to re-association
//!
//! ## Monad Laws
//! - Left Identity: pure(a).flat_map(f) == f(a)
//! - Right Identity: m.flat_map(pure) == m
//! - Associativity: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//!
//! ## Category Laws
//! - Identity: identity().pipe(g) == g == g.pipe(identity())
//! - Associativity: f.pipe(g).pipe(h) == f.pipe(g.pipe(h))
//!
//! ## Reader Laws
//! - Ask Retrieval: ask().view(s) == s
//! - Local Identity: local(|s| s, m) == m

use proptest::prelude::*;
use reified_optics::optics::Getter;
use reified_optics::reified::ReifiedGetter;

fn offset() -> ReifiedGetter<i32, i32> {
    ReifiedGetter::from_fn(|n: &i32| n.wrapping_add(7))
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Functor Identity Law: getter.fmap(|x| x) == getter
    #[test]
    fn prop_getter_functor_identity(source in any::<i32>()) {
        let mapped = offset().fmap(|x| x);

        prop_assert_eq!(mapped.view(&source), offset().view(&source));
    }

    /// Functor Composition Law: getter.fmap(f).fmap(g) == getter.fmap(|x| g(f(x)))
    #[test]
    fn prop_getter_functor_composition(source in any::<i32>()) {
        let function1 = |x: i32| x.wrapping_mul(3);
        let function2 = |x: i32| x.wrapping_sub(11);

        let left = offset().fmap(function1).fmap(function2);
        let right = offset().fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left.view(&source), right.view(&source));
    }
}

// =============================================================================
// Applicative Laws
// =============================================================================

proptest! {
    /// Applicative Identity Law: pure(id).apply(v) == v
    #[test]
    fn prop_getter_applicative_identity(source in any::<i32>()) {
        let identity_function: fn(i32) -> i32 = |x| x;
        let identity = ReifiedGetter::pure(identity_function);

        prop_assert_eq!(identity.apply(offset()).view(&source), offset().view(&source));
    }

    /// Applicative Homomorphism Law: pure(f).apply(pure(x)) == pure(f(x))
    #[test]
    fn prop_getter_applicative_homomorphism(value in any::<i32>(), source in any::<i32>()) {
        let function: fn(i32) -> i32 = |x| x.wrapping_mul(2);

        let left = ReifiedGetter::<i32, fn(i32) -> i32>::pure(function)
            .apply(ReifiedGetter::pure(value));
        let right: ReifiedGetter<i32, i32> = ReifiedGetter::pure(function(value));

        prop_assert_eq!(left.view(&source), right.view(&source));
    }

    /// Applicative Interchange Law: u.apply(pure(y)) == pure(|f| f(y)).apply(u)
    #[test]
    fn prop_getter_applicative_interchange(value in any::<i32>(), source in any::<i32>()) {
        let functions = || {
            ReifiedGetter::from_fn(|n: &i32| {
                let n = *n;
                Box::new(move |x: i32| x.wrapping_add(n)) as Box<dyn Fn(i32) -> i32>
            })
        };

        let left = functions().apply(ReifiedGetter::pure(value));
        let right = ReifiedGetter::from_fn(move |_: &i32| {
            move |function: Box<dyn Fn(i32) -> i32>| function(value)
        })
        .apply(functions());

        prop_assert_eq!(left.view(&source), right.view(&source));
    }

    /// Applicative Associativity Law: a.product(b).product(c) == a.product(b.product(c))
    /// once the nested pairs are re-associated
    #[test]
    fn prop_getter_applicative_associativity(source in any::<i32>()) {
        let doubled = || ReifiedGetter::from_fn(|n: &i32| n.wrapping_mul(2));
        let described = || ReifiedGetter::from_fn(|n: &i32| n.to_string());

        let left = offset()
            .product(doubled())
            .product(described())
            .fmap(|((x, y), z)| (x, (y, z)));
        let right = offset().product(doubled().product(described()));

        prop_assert_eq!(left.view(&source), right.view(&source));
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Monad Left Identity Law: pure(a).flat_map(f) == f(a)
    #[test]
    fn prop_getter_monad_left_identity(value in any::<i32>(), source in any::<i32>()) {
        let function = |a: i32| ReifiedGetter::from_fn(move |n: &i32| a.wrapping_add(*n));

        let left = ReifiedGetter::pure(value).flat_map(function);
        let right = function(value);

        prop_assert_eq!(left.view(&source), right.view(&source));
    }

    /// Monad Right Identity Law: m.flat_map(pure) == m
    #[test]
    fn prop_getter_monad_right_identity(source in any::<i32>()) {
        let right_identity = offset().flat_map(ReifiedGetter::pure);

        prop_assert_eq!(right_identity.view(&source), offset().view(&source));
    }

    /// Monad Associativity Law: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
    #[test]
    fn prop_getter_monad_associativity(source in any::<i32>()) {
        let function1 = |a: i32| ReifiedGetter::from_fn(move |n: &i32| a.wrapping_mul(*n));
        let function2 = |b: i32| ReifiedGetter::from_fn(move |n: &i32| b.wrapping_sub(*n));

        let left = offset().flat_map(function1).flat_map(function2);
        let right = offset().flat_map(move |x| function1(x).flat_map(function2));

        prop_assert_eq!(left.view(&source), right.view(&source));
    }
}

// =============================================================================
// Category Laws
// =============================================================================

proptest! {
    /// Category Left Identity Law: identity().pipe(g) == g
    #[test]
    fn prop_getter_category_left_identity(source in any::<i32>()) {
        let piped = ReifiedGetter::identity().pipe(offset());

        prop_assert_eq!(piped.view(&source), offset().view(&source));
    }

    /// Category Right Identity Law: g.pipe(identity()) == g
    #[test]
    fn prop_getter_category_right_identity(source in any::<i32>()) {
        let piped = offset().pipe(ReifiedGetter::identity());

        prop_assert_eq!(piped.view(&source), offset().view(&source));
    }

    /// Category Associativity Law: f.pipe(g).pipe(h) == f.pipe(g.pipe(h))
    #[test]
    fn prop_getter_category_associativity(source in any::<i32>()) {
        let double = || ReifiedGetter::from_fn(|n: &i32| n.wrapping_mul(2));
        let describe = || ReifiedGetter::from_fn(|n: &i32| n.to_string());

        let left = offset().pipe(double()).pipe(describe());
        let right = offset().pipe(double().pipe(describe()));

        prop_assert_eq!(left.view(&source), right.view(&source));
    }

    /// compose is pipe with its arguments flipped
    #[test]
    fn prop_getter_compose_is_flipped_pipe(source in any::<i32>()) {
        let double = || ReifiedGetter::from_fn(|n: &i32| n.wrapping_mul(2));

        let composed = double().compose(offset());
        let piped = offset().pipe(double());

        prop_assert_eq!(composed.view(&source), piped.view(&source));
    }
}

// =============================================================================
// Reader Laws
// =============================================================================

proptest! {
    /// Ask Retrieval Law: ask().view(s) == s
    #[test]
    fn prop_getter_ask_retrieval(source in any::<i32>()) {
        prop_assert_eq!(ReifiedGetter::<i32, i32>::ask().view(&source), source);
    }

    /// Local Identity Law: local(|s| s, m) == m
    #[test]
    fn prop_getter_local_identity(source in any::<i32>()) {
        let localized = ReifiedGetter::local(|n: &i32| *n, offset());

        prop_assert_eq!(localized.view(&source), offset().view(&source));
    }

    /// Local Composition Law: local(f, local(g, m)) == local(|s| g(f(s)), m)
    #[test]
    fn prop_getter_local_composition(source in any::<i32>()) {
        let modifier1 = |n: &i32| n.wrapping_add(1);
        let modifier2 = |n: &i32| n.wrapping_mul(5);

        let left = ReifiedGetter::local(modifier1, ReifiedGetter::local(modifier2, offset()));
        let right = ReifiedGetter::local(move |n: &i32| modifier2(&modifier1(n)), offset());

        prop_assert_eq!(left.view(&source), right.view(&source));
    }
}
