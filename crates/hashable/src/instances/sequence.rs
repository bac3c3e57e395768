//!
//! Ordered collections. All of them fold `combine(acc, hash(elem))` from the
//! left; the unsalted form starts at `STRING_SALT`, the salted form at the
//! caller's salt.
//!
//! Because one combine step is exactly one mixer step, a `[u8]` hashes to the
//! same value as [`hash_bytes`](crate::mixer::hash_bytes) over it.
//!

use crate::{
    hash::Hash,
    traits::{Hashable, hash_sequence, hash_sequence_unsalted},
};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

macro_rules! impl_sequence {
    ($(impl<$($gen:ident),*> for $ty:ty;)*) => {
        $(
            impl<$($gen: Hashable),*> Hashable for $ty {
                fn hash(&self) -> Hash {
                    hash_sequence_unsalted(self.iter())
                }

                fn hash_with_salt(&self, salt: Hash) -> Hash {
                    hash_sequence(salt, self.iter())
                }
            }
        )*
    };
}

impl_sequence! {
    impl<T> for [T];
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<T> for BTreeSet<T>;
}

impl<T: Hashable, const N: usize> Hashable for [T; N] {
    fn hash(&self) -> Hash {
        self.as_slice().hash()
    }

    fn hash_with_salt(&self, salt: Hash) -> Hash {
        self.as_slice().hash_with_salt(salt)
    }
}

// entries hash as (key, value) pairs, in key order
impl<K: Hashable, V: Hashable> Hashable for BTreeMap<K, V> {
    fn hash(&self) -> Hash {
        hash_sequence_unsalted(self.iter())
    }

    fn hash_with_salt(&self, salt: Hash) -> Hash {
        hash_sequence(salt, self.iter())
    }
}

///
/// TESTS
///
