//! Core transaction type.
//!
//! A `Transaction` is validated, serialized and hashed once, inside its
//! constructor. A value that exists is structurally valid and its bytes and
//! identifiers never change.

use std::fmt;

use multicoin_primitives::chainhash::Hash;
use multicoin_primitives::hash::hash256;
use multicoin_primitives::{ByteBuffer, ByteData, VarInt};
use tracing::debug;

use crate::config::{Config, SEGWIT_FLAG};
use crate::error::fixed_width;
use crate::input::TxIn;
use crate::output::TxOut;
use crate::witness::WitnessStack;
use crate::TransactionError;

/// A legacy or segregated-witness transaction.
///
/// # Wire format
///
/// | Field          | Size                           |
/// |----------------|--------------------------------|
/// | version        | 4 bytes                        |
/// | flag           | 2 bytes, segwit only (`00 01`) |
/// | input count    | VarInt                         |
/// | inputs         | variable (per input)           |
/// | output count   | VarInt                         |
/// | outputs        | variable (per output)          |
/// | witness stacks | variable, segwit only          |
/// | lock_time      | 4 bytes                        |
///
/// Fields are only reachable through accessors:
///
/// ```compile_fail
/// use multicoin_transaction::Transaction;
///
/// fn bump_lock_time(tx: &mut Transaction) {
///     tx.lock_time = [1, 0, 0, 0];
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    version: [u8; 4],
    flag: Option<[u8; 2]>,
    inputs: Vec<TxIn>,
    outputs: Vec<TxOut>,
    witnesses: Option<Vec<WitnessStack>>,
    lock_time: [u8; 4],
    bytes: ByteData,
    tx_hash: Hash,
    tx_id: [u8; 32],
    wtx_hash: Option<Hash>,
    wtx_id: Option<[u8; 32]>,
}

impl Transaction {
    /// Validate and serialize a transaction with the standard limits.
    ///
    /// # Arguments
    /// * `version` - 4-byte version, as stored on the wire.
    /// * `flag` - `Some(&[0x00, 0x01])` for segwit, `None` for legacy.
    /// * `inputs` - Ordered inputs, 1 to 255 of them.
    /// * `outputs` - Ordered outputs, 1 to 255 of them.
    /// * `witnesses` - One witness stack per input, in input order. Must be
    ///   present exactly when `flag` is.
    /// * `lock_time` - 4-byte lock time, as stored on the wire.
    ///
    /// # Returns
    /// `Ok(Transaction)`, or the first validation failure.
    pub fn new(
        version: &[u8],
        flag: Option<&[u8]>,
        inputs: Vec<TxIn>,
        outputs: Vec<TxOut>,
        witnesses: Option<Vec<WitnessStack>>,
        lock_time: &[u8],
    ) -> Result<Self, TransactionError> {
        Self::with_config(version, flag, inputs, outputs, witnesses, lock_time, &Config::default())
    }

    /// Validate and serialize a transaction against explicit limits.
    ///
    /// See [`Transaction::new`] for the arguments.
    pub fn with_config(
        version: &[u8],
        flag: Option<&[u8]>,
        inputs: Vec<TxIn>,
        outputs: Vec<TxOut>,
        witnesses: Option<Vec<WitnessStack>>,
        lock_time: &[u8],
        config: &Config,
    ) -> Result<Self, TransactionError> {
        let result = Self::build(version, flag, inputs, outputs, witnesses, lock_time, config);
        match &result {
            Ok(tx) => debug!(
                tx_id = %tx.tx_hash,
                size = tx.bytes.len(),
                segwit = tx.is_segwit(),
                inputs = tx.inputs.len(),
                outputs = tx.outputs.len(),
                "built transaction"
            ),
            Err(e) => debug!(error = %e, "rejected transaction"),
        }
        result
    }

    fn build(
        version: &[u8],
        flag: Option<&[u8]>,
        inputs: Vec<TxIn>,
        outputs: Vec<TxOut>,
        witnesses: Option<Vec<WitnessStack>>,
        lock_time: &[u8],
        config: &Config,
    ) -> Result<Self, TransactionError> {
        let version = fixed_width::<4>("version", version)?;

        let flag = match flag {
            Some(flag) => {
                let flag = fixed_width::<2>("flag", flag)?;
                if flag != SEGWIT_FLAG {
                    return Err(TransactionError::InvalidSegwitFlag(hex::encode(flag)));
                }
                if witnesses.is_none() {
                    return Err(TransactionError::StructuralMismatch(
                        "got segwit flag but no witnesses".to_string(),
                    ));
                }
                Some(flag)
            }
            None => None,
        };

        if let Some(witnesses) = &witnesses {
            if flag.is_none() {
                return Err(TransactionError::StructuralMismatch(
                    "got witnesses but no segwit flag".to_string(),
                ));
            }
            if witnesses.len() != inputs.len() {
                return Err(TransactionError::StructuralMismatch(format!(
                    "witness and input lists must be the same length, got {} inputs and {} witnesses",
                    inputs.len(),
                    witnesses.len()
                )));
            }
        }

        if inputs.len().max(outputs.len()) > config.max_inputs_outputs
            || inputs.len().min(outputs.len()) == 0
        {
            return Err(TransactionError::InvalidCardinality {
                inputs: inputs.len(),
                outputs: outputs.len(),
                max: config.max_inputs_outputs,
            });
        }

        let lock_time = fixed_width::<4>("lock_time", lock_time)?;

        let bytes = serialize(
            &version,
            flag.as_ref(),
            &inputs,
            &outputs,
            witnesses.as_deref(),
            &lock_time,
        );
        if bytes.len() > config.max_tx_size {
            return Err(TransactionError::Oversized {
                size: bytes.len(),
                max: config.max_tx_size,
            });
        }

        let (tx_hash, wtx_hash) = if flag.is_some() {
            let stripped = serialize(&version, None, &inputs, &outputs, None, &lock_time);
            (Hash::new(hash256(&stripped)), Some(Hash::new(hash256(&bytes))))
        } else {
            (Hash::new(hash256(&bytes)), None)
        };

        Ok(Transaction {
            version,
            flag,
            inputs,
            outputs,
            witnesses,
            lock_time,
            bytes,
            tx_id: tx_hash.to_reversed(),
            tx_hash,
            wtx_id: wtx_hash.map(|h| h.to_reversed()),
            wtx_hash,
        })
    }

    // -----------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------

    /// The canonical serialization, witness data included when present.
    pub fn as_bytes(&self) -> &ByteData {
        &self.bytes
    }

    /// The canonical serialization as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.to_hex()
    }

    /// The serialized size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Serialize without flag and witness stacks.
    ///
    /// For legacy transactions this equals [`Transaction::as_bytes`]. For
    /// segwit transactions it is the preimage of the txid.
    pub fn no_witness(&self) -> ByteData {
        serialize(
            &self.version,
            None,
            &self.inputs,
            &self.outputs,
            None,
            &self.lock_time,
        )
    }

    // -----------------------------------------------------------------
    // Identifiers
    // -----------------------------------------------------------------

    /// The txid in internal byte order: hash256 of the no-witness form.
    pub fn tx_id_le(&self) -> &[u8; 32] {
        self.tx_hash.as_bytes()
    }

    /// The txid in display (byte-reversed) order.
    pub fn tx_id(&self) -> &[u8; 32] {
        &self.tx_id
    }

    /// The txid as a `Hash`; its `Display` is the conventional txid string.
    pub fn tx_hash(&self) -> Hash {
        self.tx_hash
    }

    /// The txid as a 64-character display-order hex string.
    pub fn tx_id_hex(&self) -> String {
        self.tx_hash.to_string()
    }

    /// The witness txid in internal byte order. `None` for legacy transactions.
    pub fn wtx_id_le(&self) -> Option<&[u8; 32]> {
        self.wtx_hash.as_ref().map(Hash::as_bytes)
    }

    /// The witness txid in display order. `None` for legacy transactions.
    pub fn wtx_id(&self) -> Option<&[u8; 32]> {
        self.wtx_id.as_ref()
    }

    /// The witness txid as a `Hash`. `None` for legacy transactions.
    pub fn wtx_hash(&self) -> Option<Hash> {
        self.wtx_hash
    }

    /// The witness txid as a display-order hex string.
    pub fn wtx_id_hex(&self) -> Option<String> {
        self.wtx_hash.map(|h| h.to_string())
    }

    // -----------------------------------------------------------------
    // Fields
    // -----------------------------------------------------------------

    pub fn version(&self) -> &[u8; 4] {
        &self.version
    }

    pub fn flag(&self) -> Option<&[u8; 2]> {
        self.flag.as_ref()
    }

    pub fn is_segwit(&self) -> bool {
        self.flag.is_some()
    }

    pub fn inputs(&self) -> &[TxIn] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[TxOut] {
        &self.outputs
    }

    /// The witness stacks, one per input. `None` for legacy transactions.
    pub fn witnesses(&self) -> Option<&[WitnessStack]> {
        self.witnesses.as_deref()
    }

    pub fn lock_time(&self) -> &[u8; 4] {
        &self.lock_time
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }
}

/// Concatenate the transaction fields in wire order.
fn serialize(
    version: &[u8; 4],
    flag: Option<&[u8; 2]>,
    inputs: &[TxIn],
    outputs: &[TxOut],
    witnesses: Option<&[WitnessStack]>,
    lock_time: &[u8; 4],
) -> ByteData {
    let mut buf = ByteBuffer::with_capacity(256);
    buf.append(version);
    if let Some(flag) = flag {
        buf.append(flag);
    }

    buf.write_varint(&VarInt::from(inputs.len()));
    for input in inputs {
        buf.append(input);
    }

    buf.write_varint(&VarInt::from(outputs.len()));
    for output in outputs {
        buf.append(output);
    }

    for witness in witnesses.unwrap_or_default() {
        buf.append(witness);
    }

    buf.append(lock_time);
    buf.freeze()
}

impl AsRef<[u8]> for Transaction {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Display the transaction as its hex-encoded serialization.
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
