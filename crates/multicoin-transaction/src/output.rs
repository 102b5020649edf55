//! Transaction output with a value and locking script.

use multicoin_primitives::{ByteBuffer, ByteData, VarInt};
use tracing::trace;

use crate::error::fixed_width;
use crate::TransactionError;

/// A single transaction output.
///
/// # Wire format
///
/// | Field            | Size           |
/// |------------------|----------------|
/// | value            | 8 bytes (LE)   |
/// | script length    | VarInt         |
/// | script           | variable       |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOut {
    value: [u8; 8],
    script_len: VarInt,
    script: Vec<u8>,
    bytes: ByteData,
}

impl TxOut {
    /// Create an output from an 8-byte wire-order value and a locking script.
    ///
    /// # Returns
    /// `Ok(TxOut)`, or `FixedWidth` if `value` is not 8 bytes.
    pub fn new(value: &[u8], script: impl Into<Vec<u8>>) -> Result<Self, TransactionError> {
        let value = fixed_width::<8>("value", value)?;
        Ok(Self::from_value(u64::from_le_bytes(value), script))
    }

    /// Create an output from a typed value.
    pub fn from_value(value: u64, script: impl Into<Vec<u8>>) -> Self {
        let script = script.into();
        let script_len = VarInt::from(script.len());

        let mut buf = ByteBuffer::with_capacity(8 + script_len.encoded_len() + script.len());
        buf.write_u64_le(value)
            .write_varint(&script_len)
            .append(&script);
        trace!(value, script_len = script.len(), "serialized output");

        TxOut {
            value: value.to_le_bytes(),
            script_len,
            script,
            bytes: buf.freeze(),
        }
    }

    /// The value as stored on the wire.
    pub fn value(&self) -> &[u8; 8] {
        &self.value
    }

    /// The value as an integer.
    pub fn value_as_u64(&self) -> u64 {
        u64::from_le_bytes(self.value)
    }

    /// The locking script.
    pub fn script(&self) -> &[u8] {
        &self.script
    }

    /// The derived script length prefix.
    pub fn script_len(&self) -> &VarInt {
        &self.script_len
    }

    /// The serialized output.
    pub fn as_bytes(&self) -> &ByteData {
        &self.bytes
    }

    /// The serialized output as a hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.to_hex()
    }
}

impl AsRef<[u8]> for TxOut {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
