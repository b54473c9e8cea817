//! Control structures used by the optic combinators.
//!
//! - [`Either`]: A value that can be one of two types, the source and target
//!   shape of the choice combinators (`left`, `right`, `choose`, `fan_in`).

mod either;

pub use either::Either;
