//! Byte- and text-backed buffer types with [`Hashable`](hashable::Hashable)
//! instances that go straight through the byte mixer.
//!
//! Chunked variants hash exactly like their flattened forms.

mod bytes;
mod text;

pub use bytes::*;
pub use text::*;
