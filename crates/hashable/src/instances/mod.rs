//!
//! Built-in [`Hashable`](crate::Hashable) instances for std types.
//!

mod composite;
mod pointer;
mod scalar;
mod sequence;
mod text;

pub use composite::Either;
pub use scalar::{fold_u64, fold_u128};
