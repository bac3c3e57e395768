//!
//! DJB2-style byte mixer.
//!
//! Every byte-backed instance bottoms out here. The accumulator is seeded with
//! a salt and each byte is folded in as `acc = (acc * 33) ^ byte`. Because the
//! step only depends on the running accumulator, a range can be hashed in
//! pieces by feeding each piece's result in as the next piece's salt:
//!
//! ```
//! use hashable::mixer::{hash_bytes, hash_bytes_with_salt};
//!
//! let whole = hash_bytes(b"hello world");
//! let split = hash_bytes_with_salt(b" world", hash_bytes(b"hello"));
//! assert_eq!(whole, split);
//! ```
//!
//! ⚠️ Not cryptographically secure, and not stable across process runs.
//!

use crate::hash::{Hash, STRING_SALT};

/// One mixer step.
#[inline(always)]
#[allow(clippy::cast_lossless)]
const fn step(acc: Hash, byte: u8) -> Hash {
    acc.wrapping_mul(33) ^ byte as Hash
}

/// Hash a byte range seeded with [`STRING_SALT`].
#[must_use]
#[inline]
pub fn hash_bytes(bytes: &[u8]) -> Hash {
    hash_bytes_with_salt(bytes, STRING_SALT)
}

/// Hash a byte range seeded with `salt`.
///
/// An empty range returns `salt` unchanged.
#[must_use]
#[inline]
pub fn hash_bytes_with_salt(bytes: &[u8], salt: Hash) -> Hash {
    let mut acc = salt;

    // unrolled body; the recurrence is sequential so this only trims loop overhead
    let mut quads = bytes.chunks_exact(4);
    for q in &mut quads {
        acc = step(step(step(step(acc, q[0]), q[1]), q[2]), q[3]);
    }

    quads.remainder().iter().fold(acc, |acc, &b| step(acc, b))
}

/// Hash a sequence of adjacent byte chunks as if they were one contiguous
/// range, threading each chunk's output into the next chunk's salt.
#[must_use]
pub fn hash_chunks_with_salt<'a, I>(chunks: I, salt: Hash) -> Hash
where
    I: IntoIterator<Item = &'a [u8]>,
{
    chunks
        .into_iter()
        .fold(salt, |acc, chunk| hash_bytes_with_salt(chunk, acc))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::combine;

    // straight-line reference, kept independent of the unrolled loop
    fn reference(bytes: &[u8], salt: Hash) -> Hash {
        let mut acc = salt;
        for &b in bytes {
            acc = ((acc << 5).wrapping_add(acc)) ^ Hash::from(b);
        }
        acc
    }

    #[test]
    fn empty_range_returns_salt() {
        assert_eq!(hash_bytes(b""), STRING_SALT);
        for salt in [0, 1, -1, 17, Hash::MAX, Hash::MIN] {
            assert_eq!(hash_bytes_with_salt(&[], salt), salt);
        }
    }

    #[test]
    fn single_byte() {
        assert_eq!(hash_bytes(b"a"), 5381 * 33 ^ 97);
    }

    #[test]
    fn matches_reference_for_all_lengths() {
        let data: Vec<u8> = (0..=255u8).chain(0..=255u8).collect();

        for len in 0..data.len() {
            let bytes = &data[..len];
            assert_eq!(hash_bytes(bytes), reference(bytes, STRING_SALT), "len {len}");
        }
    }

    #[test]
    fn bytes_are_unsigned() {
        // 0xFF must mix as 255, not as -1
        assert_eq!(hash_bytes_with_salt(&[0xFF], 0), 255);
        assert_eq!(hash_bytes_with_salt(&[0x80], 1), 33 ^ 128);
    }

    #[test]
    fn step_is_the_combinator() {
        for acc in [0, 17, 5381, -99] {
            for b in [0u8, 1, 127, 255] {
                assert_eq!(step(acc, b), combine(acc, Hash::from(b)));
            }
        }
    }

    #[test]
    fn chunk_independence_at_every_split() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let whole = hash_bytes_with_salt(data, 99);

        for i in 0..=data.len() {
            let (a, b) = data.split_at(i);
            assert_eq!(hash_bytes_with_salt(b, hash_bytes_with_salt(a, 99)), whole);
        }
    }

    #[test]
    fn chunks_fold_like_contiguous() {
        let chunks: [&[u8]; 4] = [b"ab", b"", b"cde", b"f"];
        assert_eq!(hash_chunks_with_salt(chunks, STRING_SALT), hash_bytes(b"abcdef"));
        assert_eq!(hash_chunks_with_salt(Vec::<&[u8]>::new(), 7), 7);
    }

    #[test]
    fn wraps_on_long_input() {
        let data = vec![0xAB; 10_000];
        assert_eq!(hash_bytes(&data), reference(&data, STRING_SALT));
    }
}
