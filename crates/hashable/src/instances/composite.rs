//!
//! Tagged sum types. Each variant combines a small constant tag with the
//! payload's hash, so a present value never collapses onto the tag of an
//! absent one.
//!

use crate::{
    hash::{Hash, combine},
    traits::Hashable,
};
use serde::{Deserialize, Serialize};

///
/// Either
/// Value of one of two types.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }
}

impl<T, E> From<Result<T, E>> for Either<T, E> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(v) => Self::Left(v),
            Err(e) => Self::Right(e),
        }
    }
}

impl<L: Hashable, R: Hashable> Hashable for Either<L, R> {
    fn hash(&self) -> Hash {
        match self {
            Self::Left(l) => combine(0, l.hash()),
            Self::Right(r) => combine(1, r.hash()),
        }
    }
}

impl<T: Hashable> Hashable for Option<T> {
    fn hash(&self) -> Hash {
        match self {
            None => 0,
            Some(v) => combine(1, v.hash()),
        }
    }
}

// Ok is the left tag, Err the right
impl<T: Hashable, E: Hashable> Hashable for Result<T, E> {
    fn hash(&self) -> Hash {
        match self {
            Ok(v) => combine(0, v.hash()),
            Err(e) => combine(1, e.hash()),
        }
    }
}

///
/// TESTS
///
