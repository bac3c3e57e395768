//!
//! Bridge to `std::hash`, so the mixer can back a `HashMap` and so types
//! that only implement [`Hashable`] can be used as std map keys.
//!

use crate::{
    config::{Config, ConfigModel},
    hash::{Hash, STRING_SALT},
    log::Topic,
    mixer::hash_bytes_with_salt,
    traits::Hashable,
};
use std::{
    collections::{HashMap, HashSet},
    hash::{BuildHasher, Hash as StdHash, Hasher},
};

/// `HashMap` keyed through the byte mixer.
pub type SaltHashMap<K, V> = HashMap<K, V, SaltState>;

/// `HashSet` keyed through the byte mixer.
pub type SaltHashSet<T> = HashSet<T, SaltState>;

///
/// SaltHasher
/// Streaming `Hasher` over the byte mixer. Consecutive writes chain exactly
/// like one contiguous write.
///

#[derive(Clone, Copy, Debug)]
pub struct SaltHasher {
    acc: Hash,
}

impl SaltHasher {
    #[must_use]
    pub const fn with_seed(seed: Hash) -> Self {
        Self { acc: seed }
    }

    /// Accumulator as a native hash value.
    #[must_use]
    pub const fn value(&self) -> Hash {
        self.acc
    }
}

impl Default for SaltHasher {
    fn default() -> Self {
        Self::with_seed(STRING_SALT)
    }
}

impl Hasher for SaltHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.acc = hash_bytes_with_salt(bytes, self.acc);
    }

    #[allow(clippy::cast_sign_loss)]
    fn finish(&self) -> u64 {
        self.acc as u64
    }
}

///
/// SaltState
/// `BuildHasher` handing out seeded [`SaltHasher`]s.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SaltState {
    seed: Hash,
}

impl SaltState {
    #[must_use]
    pub const fn with_seed(seed: Hash) -> Self {
        Self { seed }
    }

    #[must_use]
    pub const fn from_config(config: &ConfigModel) -> Self {
        Self::with_seed(config.seed)
    }

    /// Seed from the installed process-wide config.
    #[must_use]
    pub fn from_global() -> Self {
        let state = Self::from_config(&Config::get());
        crate::log!(Topic::Hasher, Debug, "salt state seeded with {}", state.seed);

        state
    }

    #[must_use]
    pub const fn seed(&self) -> Hash {
        self.seed
    }
}

impl Default for SaltState {
    fn default() -> Self {
        Self::with_seed(STRING_SALT)
    }
}

impl BuildHasher for SaltState {
    type Hasher = SaltHasher;

    fn build_hasher(&self) -> SaltHasher {
        SaltHasher::with_seed(self.seed)
    }
}

///
/// Keyed
///
/// Gives a [`Hashable`] value a std `Hash` impl by writing its native hash
/// into the std hasher.
///

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Keyed<T>(pub T);

impl<T> Keyed<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Hashable> StdHash for Keyed<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_isize(Hashable::hash(&self.0));
    }
}

///
/// TESTS
///
