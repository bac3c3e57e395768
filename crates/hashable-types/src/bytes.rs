//!
//! Strict and chunked byte buffers that hash straight through the byte mixer.
//! A chunked buffer hashes identically to its contiguous form, so it never
//! has to be flattened just to be used as a key.
//!

use derive_more::{Deref, DerefMut, From};
use hashable::{
    Hash, Hashable, STRING_SALT, hash_bytes, hash_bytes_with_salt, hash_chunks_with_salt,
};
use serde::{Deserialize, Serialize};

///
/// ByteString
/// Contiguous, owned byte buffer.
///

#[derive(
    Clone,
    Debug,
    Default,
    Deref,
    DerefMut,
    Deserialize,
    Eq,
    From,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct ByteString(pub Vec<u8>);

impl ByteString {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for ByteString {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl Hashable for ByteString {
    fn hash(&self) -> Hash {
        hash_bytes(&self.0)
    }

    fn hash_with_salt(&self, salt: Hash) -> Hash {
        hash_bytes_with_salt(&self.0, salt)
    }
}

///
/// ChunkedBytes
///
/// Byte buffer held as a list of contiguous chunks. Equality looks only at
/// the concatenated contents, never at where the chunk boundaries fall, and
/// the hash follows suit by threading each chunk's hash into the next
/// chunk's salt.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ChunkedBytes {
    chunks: Vec<ByteString>,
}

impl ChunkedBytes {
    #[must_use]
    pub const fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    /// Append a chunk; empty chunks are dropped.
    pub fn push_chunk(&mut self, chunk: impl Into<ByteString>) {
        let chunk = chunk.into();
        if !chunk.is_empty() {
            self.chunks.push(chunk);
        }
    }

    #[must_use]
    pub fn chunks(&self) -> &[ByteString] {
        &self.chunks
    }

    /// Total byte length across all chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.iter().map(|c| c.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.iter().all(|c| c.is_empty())
    }

    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.chunks.iter().flat_map(|c| c.iter().copied())
    }

    /// Flatten into one contiguous buffer.
    #[must_use]
    pub fn to_contiguous(&self) -> ByteString {
        ByteString(self.chunks.iter().flat_map(|c| c.iter().copied()).collect())
    }
}

impl<C: Into<ByteString>> FromIterator<C> for ChunkedBytes {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut out = Self::new();
        for chunk in iter {
            out.push_chunk(chunk);
        }

        out
    }
}

impl From<ByteString> for ChunkedBytes {
    fn from(bytes: ByteString) -> Self {
        std::iter::once(bytes).collect()
    }
}

impl PartialEq for ChunkedBytes {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.bytes().eq(other.bytes())
    }
}

impl Eq for ChunkedBytes {}

impl Hashable for ChunkedBytes {
    fn hash(&self) -> Hash {
        self.hash_with_salt(STRING_SALT)
    }

    fn hash_with_salt(&self, salt: Hash) -> Hash {
        hash_chunks_with_salt(self.chunks.iter().map(|c| c.as_slice()), salt)
    }
}

///
/// TESTS
///
