/// Error types for transaction construction.
///
/// Every variant is raised synchronously by a constructor and prevents the
/// object from being created.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// A fixed-width field was supplied with the wrong number of bytes.
    #[error("invalid {field}: expected {expected} bytes, got {got}")]
    FixedWidth {
        field: &'static str,
        expected: usize,
        got: usize,
    },
    /// The segwit flag has the right width but is not `0001`.
    #[error("invalid segwit flag: expected 0001, got {0}")]
    InvalidSegwitFlag(String),
    /// Flag/witness presence is inconsistent, or witness and input counts differ.
    #[error("structural mismatch: {0}")]
    StructuralMismatch(String),
    /// Input or output count is zero or above the configured maximum.
    #[error("invalid input/output count: {inputs} inputs, {outputs} outputs (allowed 1..={max})")]
    InvalidCardinality {
        inputs: usize,
        outputs: usize,
        max: usize,
    },
    /// The serialized transaction exceeds the configured size limit.
    #[error("transaction too large: {size} bytes (max {max})")]
    Oversized { size: usize, max: usize },
    /// An underlying primitives error (forwarded from `multicoin-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] multicoin_primitives::PrimitivesError),
}

/// Check that `bytes` is exactly `N` bytes long and copy it into an array.
pub(crate) fn fixed_width<const N: usize>(
    field: &'static str,
    bytes: &[u8],
) -> Result<[u8; N], TransactionError> {
    bytes.try_into().map_err(|_| TransactionError::FixedWidth {
        field,
        expected: N,
        got: bytes.len(),
    })
}
