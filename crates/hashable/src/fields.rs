//!
//! Field-order hashing for fixed-shape records.
//!
//! Tuples of arity 2 through 7 are built on this, and hand-written structs can
//! use it the same way:
//!
//! ```
//! use hashable::{Fields, Hash, Hashable};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Hashable for Point {
//!     fn hash(&self) -> Hash {
//!         Fields::new().field(&self.x).field(&self.y).finish()
//!     }
//! }
//!
//! assert_eq!(Point { x: 3, y: 4 }.hash(), (3, 4).hash());
//! ```
//!

use crate::{
    hash::{DEFAULT_SALT, Hash},
    traits::{Hashable, hash_and_combine},
};

///
/// Fields
/// Running accumulator for a record hash, folded left-to-right in declared
/// field order.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fields {
    acc: Hash,
}

impl Fields {
    /// Start from [`DEFAULT_SALT`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_salt(DEFAULT_SALT)
    }

    #[must_use]
    pub const fn with_salt(salt: Hash) -> Self {
        Self { acc: salt }
    }

    /// Fold the field's unsalted hash into the accumulator.
    #[must_use]
    pub fn field<T>(self, value: &T) -> Self
    where
        T: Hashable + ?Sized,
    {
        Self {
            acc: hash_and_combine(self.acc, value),
        }
    }

    #[must_use]
    pub const fn finish(self) -> Hash {
        self.acc
    }
}

impl Default for Fields {
    fn default() -> Self {
        Self::new()
    }
}

// tuples define only the salted form; `hash` is its DEFAULT_SALT case
macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: Hashable),+> Hashable for ($($name,)+) {
            #[allow(non_snake_case)]
            fn hash_with_salt(&self, salt: Hash) -> Hash {
                let ($($name,)+) = self;
                Fields::with_salt(salt)$(.field($name))+.finish()
            }
        }
    };
}

impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);
impl_tuple!(A, B, C, D, E, F);
impl_tuple!(A, B, C, D, E, F, G);

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::combine;

    #[test]
    fn pair_matches_documented_fold() {
        assert_eq!((3, 4).hash(), combine(combine(17, 3), 4));
    }

    #[test]
    fn pair_is_order_sensitive() {
        assert_ne!((1u8, 2u8).hash(), (2u8, 1u8).hash());
        assert_ne!(('a', 'b').hash(), ('b', 'a').hash());
    }

    #[test]
    fn arity_seven() {
        let t = (1u8, 2u16, 3u32, 4u64, true, 'x', ());
        let expected = [1, 2, 3, 4, 1, 120, 0]
            .into_iter()
            .fold(DEFAULT_SALT, combine);

        assert_eq!(t.hash(), expected);
    }

    #[test]
    fn tuple_hash_equals_salted_at_default() {
        let t = (9i32, -2i64, 'q');
        assert_eq!(t.hash(), t.hash_with_salt(DEFAULT_SALT));

        let t = ("x", 8u8);
        assert_eq!(t.hash(), t.hash_with_salt(DEFAULT_SALT));

        let t = (vec![1u8], 2u8);
        assert_eq!(t.hash(), t.hash_with_salt(DEFAULT_SALT));
    }

    #[test]
    fn salted_tuple_folds_unsalted_field_hashes() {
        let salted = ("ab", 1u8).hash_with_salt(99);

        assert_eq!(salted, Fields::with_salt(99).field("ab").field(&1u8).finish());
        assert_eq!(salted, combine(combine(99, "ab".hash()), 1));
    }

    #[test]
    fn salt_reaches_the_result() {
        let t = (1u8, 2u8);
        assert_ne!(t.hash_with_salt(1), t.hash_with_salt(2));
    }

    #[test]
    fn record_helper_matches_tuple() {
        let h = Fields::new().field(&10u32).field("ten").finish();
        assert_eq!(h, (10u32, "ten").hash());
    }

    #[test]
    fn empty_record_is_salt() {
        assert_eq!(Fields::new().finish(), DEFAULT_SALT);
        assert_eq!(Fields::with_salt(-4).finish(), -4);
        assert_eq!(Fields::default(), Fields::new());
    }
}
