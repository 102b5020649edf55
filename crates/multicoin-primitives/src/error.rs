/// Unified error type for all primitives operations.
///
/// Covers integer conversion, variable-length integer encoding, and hash
/// parsing failures.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("varint out of range: {0}")]
    VarIntOutOfRange(String),

    #[error("invalid varint encoding: {0}")]
    InvalidVarInt(String),

    #[error("integer {value} does not fit in {width} bytes")]
    IntegerTooWide { value: u64, width: usize },

    #[error("integer of {0} significant bytes overflows u64")]
    IntegerOverflow(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid hash: {0}")]
    InvalidHash(String),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
