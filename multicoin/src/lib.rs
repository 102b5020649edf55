#![deny(missing_docs)]

//! Multicoin transaction codec.
//!
//! Re-exports the primitives and transaction crates for convenient
//! single-crate usage.

pub use multicoin_primitives as primitives;
pub use multicoin_transaction as transaction;
