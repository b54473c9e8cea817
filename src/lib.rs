//! # reified-optics
//!
//! Optics as first-class values for Rust.
//!
//! ## Overview
//!
//! An optic describes how to look into (and sometimes rebuild) a part of a
//! larger structure. Generic optics are zero-cost but hard to store, pass
//! around, or choose between at runtime. This library boxes every optic
//! kind behind a uniform wrapper and gives the read-only boxes a rich
//! algebra of combinators:
//!
//! - **Optics**: Getter, Fold, Lens, Setter, Traversal, Iso, Prism and their
//!   indexed counterparts
//! - **Reified Optics**: one box per optic kind, cloneable and storable
//! - **Getter and Fold Algebra**: mapping, applicative combination, chaining,
//!   reader access, profunctor adaptation, arrow combinators and loops
//! - **Control Structures**: `Either` for the choice combinators
//! - **Derive Macros**: boxed lenses, getters and prisms for your own types
//!
//! ## Feature Flags
//!
//! - `optics`: Primitive optic traits and constructors
//! - `control`: Control structures (`Either`)
//! - `reified`: Boxed optics and their algebra
//! - `derive`: Derive macros producing boxed optics
//! - `tracing`: Trace events when boxed getters and folds are evaluated
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use reified_optics::prelude::*;
//!
//! let words = ReifiedFold::from_fn(|text: &String| {
//!     text.split_whitespace().map(str::to_string).collect::<Vec<_>>()
//! });
//! let lengths = words.fmap(|word| word.len());
//!
//! assert_eq!(lengths.to_vec(&"boxed optics compose".to_string()), vec![5, 6, 7]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use reified_optics::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "reified")]
    pub use crate::reified::*;

    #[cfg(feature = "derive")]
    pub use reified_optics_derive::{Getters, Lenses, Prisms};
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "reified")]
pub mod reified;

#[cfg(feature = "derive")]
pub use reified_optics_derive::{Getters, Lenses, Prisms};
