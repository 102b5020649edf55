//! Transaction input spending a previous output.
//!
//! Contains the outpoint being spent, the unlocking script and the
//! sequence number. The script length prefix is always derived from the
//! script itself.

use multicoin_primitives::{ByteBuffer, ByteData, VarInt};
use tracing::trace;

use crate::error::fixed_width;
use crate::outpoint::Outpoint;
use crate::TransactionError;

/// Default sequence number indicating a finalized input (no relative lock-time).
pub const DEFAULT_SEQUENCE_NUMBER: u32 = 0xFFFF_FFFF;

/// A single transaction input.
///
/// # Wire format
///
/// | Field            | Size           |
/// |------------------|----------------|
/// | outpoint         | 36 bytes       |
/// | script length    | VarInt         |
/// | script           | variable       |
/// | sequence         | 4 bytes (LE)   |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxIn {
    outpoint: Outpoint,
    script_len: VarInt,
    script: Vec<u8>,
    sequence: [u8; 4],
    bytes: ByteData,
}

impl TxIn {
    /// Create an input from an outpoint, an unlocking script and a
    /// 4-byte wire-order sequence number.
    ///
    /// # Returns
    /// `Ok(TxIn)`, or `FixedWidth` if `sequence` is not 4 bytes.
    pub fn new(
        outpoint: Outpoint,
        script: impl Into<Vec<u8>>,
        sequence: &[u8],
    ) -> Result<Self, TransactionError> {
        let sequence = fixed_width::<4>("sequence", sequence)?;
        Ok(Self::with_sequence(outpoint, script, u32::from_le_bytes(sequence)))
    }

    /// Create an input with a typed sequence number.
    pub fn with_sequence(outpoint: Outpoint, script: impl Into<Vec<u8>>, sequence: u32) -> Self {
        let script = script.into();
        let script_len = VarInt::from(script.len());

        let mut buf = ByteBuffer::with_capacity(
            outpoint.as_bytes().len() + script_len.encoded_len() + script.len() + 4,
        );
        buf.append(&outpoint)
            .write_varint(&script_len)
            .append(&script)
            .write_u32_le(sequence);
        trace!(script_len = script.len(), sequence, "serialized input");

        TxIn {
            outpoint,
            script_len,
            script,
            sequence: sequence.to_le_bytes(),
            bytes: buf.freeze(),
        }
    }

    /// The outpoint this input spends.
    pub fn outpoint(&self) -> &Outpoint {
        &self.outpoint
    }

    /// The unlocking script.
    pub fn script(&self) -> &[u8] {
        &self.script
    }

    /// The derived script length prefix.
    pub fn script_len(&self) -> &VarInt {
        &self.script_len
    }

    /// The sequence number as stored on the wire.
    pub fn sequence(&self) -> &[u8; 4] {
        &self.sequence
    }

    /// The sequence number as an integer.
    pub fn sequence_value(&self) -> u32 {
        u32::from_le_bytes(self.sequence)
    }

    /// The serialized input.
    pub fn as_bytes(&self) -> &ByteData {
        &self.bytes
    }

    /// The serialized input as a hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.to_hex()
    }
}

impl AsRef<[u8]> for TxIn {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
