//!
//! Encode-then-hash fallback for types without a dedicated instance.
//!
//! The value is serialized to CBOR and the bytes go through the mixer. This is
//! always the lowest-priority route: nothing reaches it implicitly, a caller
//! has to wrap the value in [`Encoded`] or call [`try_hash_encoded`], so any
//! type-specific [`Hashable`] impl wins at compile time.
//!

use crate::{
    Error,
    hash::{Hash, STRING_SALT},
    log::Topic,
    mixer::hash_bytes_with_salt,
    serialize::serialize,
    traits::Hashable,
};
use derive_more::{AsRef, Deref, From};
use serde::Serialize;

/// Hash the CBOR encoding of `value`, seeded with `salt`.
pub fn try_hash_encoded<T>(salt: Hash, value: &T) -> Result<Hash, Error>
where
    T: Serialize,
{
    let bytes = serialize(value)?;

    Ok(hash_bytes_with_salt(&bytes, salt))
}

///
/// Encoded
///
/// Opt-in wrapper that makes any `Serialize` type [`Hashable`] through its
/// CBOR encoding. Equality of the wrapped type must agree with equality of its
/// encoding for the hash contract to hold.
///

#[derive(AsRef, Clone, Copy, Debug, Default, Deref, Eq, From, Ord, PartialEq, PartialOrd)]
pub struct Encoded<T>(pub T);

impl<T> Encoded<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Serialize> Hashable for Encoded<T> {
    fn hash(&self) -> Hash {
        self.hash_with_salt(STRING_SALT)
    }

    // an encoding failure hashes like an empty encoding; failures are a
    // property of the value, so equal values still land on equal hashes
    fn hash_with_salt(&self, salt: Hash) -> Hash {
        match try_hash_encoded(salt, &self.0) {
            Ok(h) => h,
            Err(err) => {
                crate::log!(Topic::Encode, Warn, "encode fallback failed: {}", err);
                salt
            }
        }
    }
}

///
/// TESTS
///
