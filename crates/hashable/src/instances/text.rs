//!
//! UTF-8 text hashes its encoded bytes through the mixer.
//!

use crate::{
    hash::Hash,
    mixer::{hash_bytes, hash_bytes_with_salt},
    traits::Hashable,
};

impl Hashable for str {
    #[inline]
    fn hash(&self) -> Hash {
        hash_bytes(self.as_bytes())
    }

    #[inline]
    fn hash_with_salt(&self, salt: Hash) -> Hash {
        hash_bytes_with_salt(self.as_bytes(), salt)
    }
}

impl Hashable for String {
    #[inline]
    fn hash(&self) -> Hash {
        self.as_str().hash()
    }

    #[inline]
    fn hash_with_salt(&self, salt: Hash) -> Hash {
        self.as_str().hash_with_salt(salt)
    }
}

///
/// TESTS
///
