//! Either type - the sum source of the choice combinators.
//!
//! `left`, `right`, `choose` and `fan_in` on the reified getters and folds
//! all read an `Either` source. They borrow it with [`Either::as_ref`] and
//! then either keep the case ([`Either::bimap`]) or drop it
//! ([`Either::either`]).
//!
//! # Examples
//!
//! ```rust
//! use reified_optics::control::Either;
//!
//! let reading: Either<String, i32> = Either::Left("12".to_string());
//!
//! assert_eq!(reading.as_ref().bimap(String::len, |n| *n), Either::Left(2));
//! assert_eq!(reading.either(|text| text.parse().unwrap_or(0), |n| n), 12);
//! ```

use std::fmt;

/// A value that is one of two cases.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The left case.
    Left(L),
    /// The right case.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Borrows whichever case is present.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps each case with its own function, keeping the case.
    #[inline]
    pub fn bimap<T, U, F, G>(self, on_left: F, on_right: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(on_left(value)),
            Self::Right(value) => Either::Right(on_right(value)),
        }
    }

    /// Eliminates the case, sending both sides to one result type.
    #[inline]
    pub fn either<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}
