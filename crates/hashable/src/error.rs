use crate::{config::ConfigError, serialize::SerializeError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Hashing itself is total; only the ambient layers around it can fail.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    SerializeError(#[from] SerializeError),
}

///
/// TESTS
///
