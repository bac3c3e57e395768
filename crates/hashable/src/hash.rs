//!
//! Hash values, the two distinguished salts, and the combinator every
//! composite instance folds with.
//!
//! Hash values are bare native-word integers. They carry no type information
//! and are only meaningful inside the process run that produced them; never
//! persist them or send them over the wire as identifiers.
//!

///
/// Hash
/// Native machine word, signed. All arithmetic on it wraps.
///

pub type Hash = isize;

/// Salt used when the caller does not supply one.
pub const DEFAULT_SALT: Hash = 17;

/// Starting accumulator for byte ranges and sequences.
pub const STRING_SALT: Hash = 5381;

/// Fold `h2` into `h1`.
///
/// `combine(h1, h2) = (h1 + (h1 << 5)) ^ h2` with wraparound. The function is
/// deliberately not commutative: positional composites rely on it to tell
/// permutations apart.
#[must_use]
#[inline]
pub const fn combine(h1: Hash, h2: Hash) -> Hash {
    h1.wrapping_add(h1.wrapping_shl(5)) ^ h2
}

///
/// TESTS
///
