//!
//! Fixed-width (UTF-16) text stored as views into shared backing arrays.
//!
//! A [`Text`] is an `(offset, len)` window onto an `Arc<[u16]>` that may be
//! shared with other views and may be larger than the window. Hashing only
//! ever looks at the window's bytes, `[offset * 2, (offset + len) * 2)`, so
//! two views with the same code units hash the same no matter what the rest
//! of their backing arrays hold.
//!

use hashable::{Hash, Hashable, STRING_SALT, hash_bytes_with_salt};
use std::{cmp::Ordering, fmt, sync::Arc};

/// Bytes per code unit.
pub const UNIT_BYTES: usize = 2;

// code units staged per mixer call
const STAGE_UNITS: usize = 64;

/// Hash a run of code units as their native-endian byte representation.
#[must_use]
pub fn hash_units_with_salt(units: &[u16], salt: Hash) -> Hash {
    let mut stage = [0u8; STAGE_UNITS * UNIT_BYTES];

    units.chunks(STAGE_UNITS).fold(salt, |acc, block| {
        for (dst, unit) in stage.chunks_exact_mut(UNIT_BYTES).zip(block) {
            dst.copy_from_slice(&unit.to_ne_bytes());
        }

        hash_bytes_with_salt(&stage[..block.len() * UNIT_BYTES], acc)
    })
}

///
/// Text
///

#[derive(Clone)]
pub struct Text {
    array: Arc<[u16]>,
    offset: usize,
    len: usize,
}

impl Text {
    #[must_use]
    pub fn new() -> Self {
        Self::from_units(Vec::new())
    }

    /// Own a run of code units as a fresh backing array.
    #[must_use]
    pub fn from_units(units: Vec<u16>) -> Self {
        let len = units.len();

        Self {
            array: Arc::from(units),
            offset: 0,
            len,
        }
    }

    /// View `[offset, offset + len)` of a shared backing array.
    ///
    /// Returns `None` when the window falls outside the array.
    #[must_use]
    pub fn from_shared(array: Arc<[u16]>, offset: usize, len: usize) -> Option<Self> {
        let end = offset.checked_add(len)?;
        if end > array.len() {
            return None;
        }

        Some(Self { array, offset, len })
    }

    /// Sub-view `[start, end)` of this view, sharing the same backing array.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> Option<Self> {
        if start > end || end > self.len {
            return None;
        }

        Some(Self {
            array: Arc::clone(&self.array),
            offset: self.offset + start,
            len: end - start,
        })
    }

    /// Code units inside the window.
    #[must_use]
    pub fn units(&self) -> &[u16] {
        &self.array[self.offset..self.offset + self.len]
    }

    /// Length in code units.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn byte_offset(&self) -> usize {
        self.offset * UNIT_BYTES
    }

    #[must_use]
    pub const fn byte_len(&self) -> usize {
        self.len * UNIT_BYTES
    }

    /// True when both views share one backing array.
    #[must_use]
    pub fn shares_backing_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.array, &other.array)
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::from_units(s.encode_utf16().collect())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf16_lossy(self.units()))
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text({:?})", String::from_utf16_lossy(self.units()))
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.units() == other.units()
    }
}

impl Eq for Text {}

impl PartialOrd for Text {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Text {
    fn cmp(&self, other: &Self) -> Ordering {
        self.units().cmp(other.units())
    }
}

impl Hashable for Text {
    fn hash(&self) -> Hash {
        self.hash_with_salt(STRING_SALT)
    }

    fn hash_with_salt(&self, salt: Hash) -> Hash {
        hash_units_with_salt(self.units(), salt)
    }
}

///
/// ChunkedText
///
/// Text held as a list of views. Like [`ChunkedBytes`](crate::ChunkedBytes),
/// only the concatenated code units matter for equality and hashing.
///

#[derive(Clone, Debug, Default)]
pub struct ChunkedText {
    chunks: Vec<Text>,
}

impl ChunkedText {
    #[must_use]
    pub const fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    /// Append a view; empty views are dropped.
    pub fn push_chunk(&mut self, chunk: Text) {
        if !chunk.is_empty() {
            self.chunks.push(chunk);
        }
    }

    pub fn push_str(&mut self, s: &str) {
        self.push_chunk(Text::from(s));
    }

    #[must_use]
    pub fn chunks(&self) -> &[Text] {
        &self.chunks
    }

    /// Length in code units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.iter().map(Text::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.iter().all(Text::is_empty)
    }

    pub fn units(&self) -> impl Iterator<Item = u16> + '_ {
        self.chunks.iter().flat_map(|c| c.units().iter().copied())
    }

    /// Concatenate into a single view over a fresh backing array.
    #[must_use]
    pub fn to_text(&self) -> Text {
        Text::from_units(self.units().collect())
    }
}

impl FromIterator<Text> for ChunkedText {
    fn from_iter<I: IntoIterator<Item = Text>>(iter: I) -> Self {
        let mut out = Self::new();
        for chunk in iter {
            out.push_chunk(chunk);
        }

        out
    }
}

impl fmt::Display for ChunkedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in &self.chunks {
            write!(f, "{chunk}")?;
        }

        Ok(())
    }
}

impl PartialEq for ChunkedText {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.units().eq(other.units())
    }
}

impl Eq for ChunkedText {}

impl Hashable for ChunkedText {
    fn hash(&self) -> Hash {
        self.hash_with_salt(STRING_SALT)
    }

    fn hash_with_salt(&self, salt: Hash) -> Hash {
        self.chunks
            .iter()
            .fold(salt, |acc, chunk| chunk.hash_with_salt(acc))
    }
}

///
/// TESTS
///
