//! Primitive optics.
//!
//! This module provides the optic kinds that the [`reified`](crate::reified)
//! boxes wrap. Every kind is a small trait whose required methods take
//! closures as `&mut dyn FnMut`, so each trait can be used as a trait object.
//! Generic convenience methods are provided on top with `where Self: Sized`.
//!
//! # Available Optics
//!
//! | Kind | Read | Write |
//! |------|------|-------|
//! | [`Getter`] | exactly one derived value | - |
//! | [`Fold`] | zero or more values | - |
//! | [`Lens`] | exactly one field | replace it |
//! | [`Setter`] | - | modify zero or more foci |
//! | [`Traversal`] | zero or more foci | modify them |
//! | [`Iso`] | lossless conversion | convert back |
//! | [`Prism`] | one case of a sum | build the case |
//!
//! Each of the first five has an indexed counterpart in which every focus
//! carries an index: [`IndexedGetter`], [`IndexedFold`], [`IndexedLens`],
//! [`IndexedSetter`] and [`IndexedTraversal`].
//!
//! # Example
//!
//! ```
//! use reified_optics::optics::{Fold, Getter, folding, to};
//!
//! let length = to(|text: &String| text.len());
//! let words = folding(|text: &String| {
//!     text.split_whitespace().map(str::to_string).collect::<Vec<_>>()
//! });
//!
//! let text = "functional optics in rust".to_string();
//! assert_eq!(length.view(&text), 25);
//! assert_eq!(words.length(&text), 4);
//! assert_eq!(words.head_option(&text), Some("functional".to_string()));
//! ```

mod fold;
mod getter;
mod indexed;
mod iso;
mod lens;
mod prism;
mod setter;
mod standard_optics;
mod traversal;

pub use fold::Fold;
pub use fold::FunctionFold;
pub use fold::folding;

pub use getter::FunctionGetter;
pub use getter::Getter;
pub use getter::to;

pub use indexed::FunctionIndexedFold;
pub use indexed::FunctionIndexedGetter;
pub use indexed::FunctionIndexedLens;
pub use indexed::FunctionIndexedSetter;
pub use indexed::FunctionIndexedTraversal;
pub use indexed::IndexedFold;
pub use indexed::IndexedGetter;
pub use indexed::IndexedLens;
pub use indexed::IndexedSetter;
pub use indexed::IndexedTraversal;
pub use indexed::VecIndexedTraversal;

pub use iso::FunctionIso;
pub use iso::Iso;

pub use lens::FunctionLens;
pub use lens::Lens;

pub use prism::FunctionPrism;
pub use prism::Prism;

pub use setter::FunctionSetter;
pub use setter::Setter;
pub use setter::sets;

pub use standard_optics::Ignored;
pub use standard_optics::first_lens;
pub use standard_optics::iso_identity;
pub use standard_optics::iso_swap;
pub use standard_optics::second_lens;

pub use traversal::FunctionTraversal;
pub use traversal::Traversal;
pub use traversal::VecTraversal;
