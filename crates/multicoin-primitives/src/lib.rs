/// Multicoin primitives: hashing, byte buffers, and integer encoding.
///
/// This crate provides the foundational building blocks for transaction
/// serialization:
/// - Hash functions (SHA-256, double SHA-256, RIPEMD-160, Hash160)
/// - Chain hash type for transaction identification
/// - Append-only byte buffers that freeze into immutable byte data
/// - Variable-length integer encoding
/// - Integer and byte-order conversion helpers

pub mod hash;
pub mod chainhash;
pub mod util;
pub mod buffer;
pub mod varint;

mod error;
pub use error::PrimitivesError;
pub use buffer::{ByteBuffer, ByteData};
pub use varint::VarInt;
