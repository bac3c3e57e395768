//!
//! Scalar instances. None of these recurse and none define `hash_with_salt`;
//! the salted form is always `combine(salt, hash(x))`.
//!

use crate::{hash::Hash, traits::Hashable};

/// Fold a 64-bit value down to the native word.
///
/// On 64-bit targets this is a plain truncation. On narrower targets the high
/// half is xor-ed onto the low half first so both halves contribute.
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn fold_u64(x: u64) -> Hash {
    #[cfg(target_pointer_width = "64")]
    {
        x as Hash
    }
    #[cfg(not(target_pointer_width = "64"))]
    {
        (x ^ (x >> 32)) as u32 as Hash
    }
}

/// Fold a 128-bit value down to the native word, one halving at a time.
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn fold_u128(x: u128) -> Hash {
    fold_u64((x ^ (x >> 64)) as u64)
}

impl Hashable for () {
    fn hash(&self) -> Hash {
        0
    }
}

impl Hashable for bool {
    fn hash(&self) -> Hash {
        Hash::from(*self)
    }
}

impl Hashable for char {
    fn hash(&self) -> Hash {
        u32_word(u32::from(*self))
    }
}

// widths that always fit the native word
macro_rules! impl_extend {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Hashable for $ty {
                fn hash(&self) -> Hash {
                    Hash::from(*self)
                }
            }
        )*
    };
}

impl_extend!(i8, i16, u8);

// zero-extends; std has no `From<u16>` for isize
impl Hashable for u16 {
    #[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
    fn hash(&self) -> Hash {
        *self as Hash
    }
}

impl Hashable for isize {
    fn hash(&self) -> Hash {
        *self
    }
}

impl Hashable for usize {
    #[allow(clippy::cast_possible_wrap)]
    fn hash(&self) -> Hash {
        *self as Hash
    }
}

// 32-bit values fit every supported pointer width
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
const fn u32_word(x: u32) -> Hash {
    x as Hash
}

impl Hashable for i32 {
    #[allow(clippy::cast_possible_truncation)]
    fn hash(&self) -> Hash {
        *self as Hash
    }
}

impl Hashable for u32 {
    fn hash(&self) -> Hash {
        u32_word(*self)
    }
}

impl Hashable for i64 {
    #[allow(clippy::cast_sign_loss)]
    fn hash(&self) -> Hash {
        fold_u64(*self as u64)
    }
}

impl Hashable for u64 {
    fn hash(&self) -> Hash {
        fold_u64(*self)
    }
}

impl Hashable for i128 {
    #[allow(clippy::cast_sign_loss)]
    fn hash(&self) -> Hash {
        fold_u128(*self as u128)
    }
}

impl Hashable for u128 {
    fn hash(&self) -> Hash {
        fold_u128(*self)
    }
}

///
/// TESTS
///
