//!
//! serde_cbor-powered encoding used by the encode-then-hash fallback. CBOR
//! gives every serde type a canonical byte run; the bytes themselves are an
//! external contract and are never interpreted here.
//!

use serde::Serialize;
use serde_cbor::to_vec;
use thiserror::Error as ThisError;

///
/// SerializeError
///
/// Wraps CBOR encoding failures so callers can bubble them up uniformly.
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("serialize error: {0}")]
    Serialize(String),
}

///
/// Serialize a value into CBOR bytes using serde_cbor.
///
pub fn serialize<T>(t: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    let bytes = to_vec(t).map_err(|e| SerializeError::Serialize(e.to_string()))?;

    Ok(bytes)
}

///
/// TESTS
///
