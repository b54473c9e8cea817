//! Reified optics: optics as first-class, cloneable values.
//!
//! A generic optic such as `impl Getter<S, A>` cannot be stored in a
//! collection next to optics of other concrete types, returned from a
//! branch that picks between two optics, or passed around without carrying
//! its type. A box fixes the concrete type: every `ReifiedX<S, A>` wraps an
//! `Rc<dyn X<S, A>>` and is itself an `X<S, A>`.
//!
//! # Box Family
//!
//! | Box | Wraps |
//! |-----|-------|
//! | [`ReifiedGetter`] | [`Getter`](crate::optics::Getter) |
//! | [`ReifiedFold`] | [`Fold`](crate::optics::Fold) |
//! | [`ReifiedLens`] | [`Lens`](crate::optics::Lens) |
//! | [`ReifiedSetter`] | [`Setter`](crate::optics::Setter) |
//! | [`ReifiedTraversal`] | [`Traversal`](crate::optics::Traversal) |
//! | [`ReifiedIso`] | [`Iso`](crate::optics::Iso) |
//! | [`ReifiedPrism`] | [`Prism`](crate::optics::Prism) |
//! | [`ReifiedIndexedGetter`] | [`IndexedGetter`](crate::optics::IndexedGetter) |
//! | [`ReifiedIndexedFold`] | [`IndexedFold`](crate::optics::IndexedFold) |
//! | [`ReifiedIndexedLens`] | [`IndexedLens`](crate::optics::IndexedLens) |
//! | [`ReifiedIndexedSetter`] | [`IndexedSetter`](crate::optics::IndexedSetter) |
//! | [`ReifiedIndexedTraversal`] | [`IndexedTraversal`](crate::optics::IndexedTraversal) |
//!
//! Every box offers `new`, `run_<kind>`, `into_inner` and
//! `From<Rc<dyn Kind>>`, and is `Clone`, `Debug` and `Display`.
//!
//! The read-only boxes carry an algebra of combinators on top:
//!
//! - [`ReifiedGetter`]: functor, applicative, monad, reader, profunctor,
//!   strong, choice, category and arrow combinators, including `app` and
//!   `feedback`.
//! - [`ReifiedFold`]: the same surface with sequence semantics, plus the
//!   `empty`/`union` monoid.
//! - [`ReifiedIndexedGetter`] and [`ReifiedIndexedFold`]: mapping and
//!   pairing only. Indices are never merged.
//!
//! # Threading
//!
//! Boxes share their optic through `Rc`, so they are neither `Send` nor
//! `Sync` and stay on the thread that built them.
//!
//! # Examples
//!
//! ```rust
//! use reified_optics::optics::{Fold, Getter};
//! use reified_optics::reified::{ReifiedFold, ReifiedGetter};
//!
//! struct Order {
//!     items: Vec<(String, u32)>,
//!     discount: u32,
//! }
//!
//! let prices = ReifiedFold::from_fn(|order: &Order| {
//!     order.items.iter().map(|(_, price)| *price).collect::<Vec<_>>()
//! });
//! let total = ReifiedGetter::from_fn(move |order: &Order| prices.to_vec(order).iter().sum::<u32>());
//! let discount = ReifiedGetter::from_fn(|order: &Order| order.discount);
//!
//! let to_pay = total.map2(discount, |total, discount| total.saturating_sub(discount));
//!
//! let order = Order {
//!     items: vec![("tea".to_string(), 300), ("cake".to_string(), 450)],
//!     discount: 50,
//! };
//! assert_eq!(to_pay.view(&order), 700);
//! ```

mod boxes;
mod fold;
mod getter;
mod indexed;

pub use boxes::ReifiedFold;
pub use boxes::ReifiedGetter;
pub use boxes::ReifiedIndexedFold;
pub use boxes::ReifiedIndexedGetter;
pub use boxes::ReifiedIndexedLens;
pub use boxes::ReifiedIndexedSetter;
pub use boxes::ReifiedIndexedTraversal;
pub use boxes::ReifiedIso;
pub use boxes::ReifiedLens;
pub use boxes::ReifiedPrism;
pub use boxes::ReifiedSetter;
pub use boxes::ReifiedTraversal;
