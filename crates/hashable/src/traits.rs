use crate::hash::{DEFAULT_SALT, Hash, STRING_SALT, combine};

///
/// Hashable
///
/// Maps a value to a native-word hash suitable for hash-based containers.
///
/// Implementors override at least one of the two methods; each default is
/// written in terms of the other:
///
/// - `hash(v) == hash_with_salt(DEFAULT_SALT, v)` when only `hash_with_salt`
///   is defined
/// - `hash_with_salt(s, v) == combine(s, hash(v))` when only `hash` is defined
///
/// A type that defines `hash_with_salt` itself must mix the salt in somewhere,
/// otherwise salt chaining through composites stops working.
///
/// Contract: `a == b` implies `a.hash() == b.hash()`. Nothing here verifies
/// that; it is on the `Eq` impl and the `Hashable` impl to agree.
///

pub trait Hashable {
    #[must_use]
    fn hash(&self) -> Hash {
        self.hash_with_salt(DEFAULT_SALT)
    }

    #[must_use]
    fn hash_with_salt(&self, salt: Hash) -> Hash {
        combine(salt, self.hash())
    }
}

/// Fold one element into a running accumulator.
#[must_use]
#[inline]
pub fn hash_and_combine<T>(acc: Hash, value: &T) -> Hash
where
    T: Hashable + ?Sized,
{
    combine(acc, value.hash())
}

/// Left-fold an ordered collection, starting from `salt`.
///
/// An empty iterator returns `salt`. Any ordered collection can implement
/// [`Hashable`] by routing through this.
#[must_use]
pub fn hash_sequence<I>(salt: Hash, items: I) -> Hash
where
    I: IntoIterator,
    I::Item: Hashable,
{
    items
        .into_iter()
        .fold(salt, |acc, item| hash_and_combine(acc, &item))
}

/// Unsalted sequence hash, seeded with [`STRING_SALT`].
#[must_use]
pub fn hash_sequence_unsalted<I>(items: I) -> Hash
where
    I: IntoIterator,
    I::Item: Hashable,
{
    hash_sequence(STRING_SALT, items)
}

///
/// TESTS
///
