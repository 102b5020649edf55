//! Reference to a specific output of a previous transaction.

use multicoin_primitives::chainhash::Hash;
use multicoin_primitives::{ByteBuffer, ByteData};
use tracing::trace;

use crate::error::fixed_width;
use crate::TransactionError;

/// A transaction ID and output index pair.
///
/// # Wire format
///
/// | Field  | Size          |
/// |--------|---------------|
/// | tx_id  | 32 bytes (LE) |
/// | index  | 4 bytes (LE)  |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outpoint {
    tx_id: [u8; 32],
    index: [u8; 4],
    bytes: ByteData,
}

impl Outpoint {
    /// Create an outpoint from wire-order byte fields.
    ///
    /// # Arguments
    /// * `tx_id` - The 32-byte id of the spent transaction, in internal
    ///   (little-endian) byte order.
    /// * `index` - The 4-byte little-endian output index.
    ///
    /// # Returns
    /// `Ok(Outpoint)`, or `FixedWidth` if either field has the wrong length.
    pub fn new(tx_id: &[u8], index: &[u8]) -> Result<Self, TransactionError> {
        let tx_id = fixed_width::<32>("tx_id", tx_id)?;
        let index = fixed_width::<4>("index", index)?;
        Ok(Self::from_parts(tx_id, u32::from_le_bytes(index)))
    }

    /// Create an outpoint from a typed tx id and output index.
    pub fn from_parts(tx_id: [u8; 32], index: u32) -> Self {
        let mut buf = ByteBuffer::with_capacity(36);
        buf.append(tx_id).write_u32_le(index);
        trace!(index, "serialized outpoint");
        Outpoint {
            tx_id,
            index: index.to_le_bytes(),
            bytes: buf.freeze(),
        }
    }

    /// Create an outpoint spending output `index` of the transaction `hash`.
    pub fn from_hash(hash: Hash, index: u32) -> Self {
        Self::from_parts(*hash.as_bytes(), index)
    }

    /// The spent transaction's id in internal byte order.
    pub fn tx_id(&self) -> &[u8; 32] {
        &self.tx_id
    }

    /// The output index as stored on the wire.
    pub fn index(&self) -> &[u8; 4] {
        &self.index
    }

    /// The output index as an integer.
    pub fn index_value(&self) -> u32 {
        u32::from_le_bytes(self.index)
    }

    /// The serialized outpoint.
    pub fn as_bytes(&self) -> &ByteData {
        &self.bytes
    }
}

impl AsRef<[u8]> for Outpoint {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
