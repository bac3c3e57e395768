//!
//! Salted, composable, non-cryptographic hashing.
//!
//! Any type can implement [`Hashable`] to map its values onto a native-word
//! [`Hash`] suitable for hash tables, hash sets and hash-consing caches.
//! Composite types (tuples, sequences, `Option`, [`Either`]) derive their
//! hashes from their components through [`combine`]; byte-backed types go
//! through the DJB2-style [`mixer`], which can be fed a range in pieces and
//! still produce the same answer.
//!
//! ⚠️ Not cryptographically secure, not collision resistant against
//! adversarial input, and not stable across process runs. Never persist a
//! hash value or use it as an identifier outside the process that made it.
//!

pub mod config;
pub mod encode;
pub mod error;
pub mod fields;
pub mod hash;
pub mod hasher;
pub mod instances;
pub mod log;
pub mod mixer;
pub mod serialize;
pub mod traits;

pub use config::{Config, ConfigError, ConfigModel};
pub use encode::{Encoded, try_hash_encoded};
pub use error::Error;
pub use fields::Fields;
pub use hash::{DEFAULT_SALT, Hash, STRING_SALT, combine};
pub use hasher::{Keyed, SaltHashMap, SaltHashSet, SaltHasher, SaltState};
pub use instances::Either;
pub use mixer::{hash_bytes, hash_bytes_with_salt, hash_chunks_with_salt};
pub use traits::{Hashable, hash_and_combine, hash_sequence, hash_sequence_unsalted};

// -----------------------------------------------------------------------------
// Constants
// -----------------------------------------------------------------------------

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        DEFAULT_SALT, Either, Encoded, Fields, Hash, Hashable, Keyed, STRING_SALT, combine,
        hash_bytes, hash_bytes_with_salt,
    };
}
