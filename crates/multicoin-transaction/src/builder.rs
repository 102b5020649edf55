//! Incremental construction of a [`Transaction`] from typed fields.

use crate::config::{Config, SEGWIT_FLAG};
use crate::input::TxIn;
use crate::output::TxOut;
use crate::transaction::Transaction;
use crate::witness::WitnessStack;
use crate::TransactionError;

/// Accumulates transaction parts, then validates and freezes them with
/// [`TransactionBuilder::build`].
///
/// Witness stacks are passed through as given, so a witness/input count
/// mismatch or witnesses without [`TransactionBuilder::segwit`] fail in
/// `build` exactly as they would through [`Transaction::new`].
#[derive(Clone, Debug)]
pub struct TransactionBuilder {
    version: u32,
    lock_time: u32,
    segwit: bool,
    inputs: Vec<TxIn>,
    outputs: Vec<TxOut>,
    witnesses: Vec<WitnessStack>,
    config: Config,
}

impl TransactionBuilder {
    /// Start a version 1 legacy transaction with lock time 0.
    pub fn new() -> Self {
        TransactionBuilder {
            version: 1,
            lock_time: 0,
            segwit: false,
            inputs: Vec::new(),
            outputs: Vec::new(),
            witnesses: Vec::new(),
            config: Config::default(),
        }
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn lock_time(mut self, lock_time: u32) -> Self {
        self.lock_time = lock_time;
        self
    }

    /// Mark the transaction as segwit: emit the `00 01` flag and the
    /// witness stacks.
    pub fn segwit(mut self) -> Self {
        self.segwit = true;
        self
    }

    pub fn add_input(mut self, input: TxIn) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn add_output(mut self, output: TxOut) -> Self {
        self.outputs.push(output);
        self
    }

    /// Append the witness stack for the next input, in input order.
    pub fn add_witness(mut self, witness: WitnessStack) -> Self {
        self.witnesses.push(witness);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Validate and serialize the accumulated parts.
    pub fn build(self) -> Result<Transaction, TransactionError> {
        let flag = self.segwit.then_some(SEGWIT_FLAG);
        let witnesses = if self.segwit || !self.witnesses.is_empty() {
            Some(self.witnesses)
        } else {
            None
        };

        Transaction::with_config(
            &self.version.to_le_bytes(),
            flag.as_ref().map(|f| &f[..]),
            self.inputs,
            self.outputs,
            witnesses,
            &self.lock_time.to_le_bytes(),
            &self.config,
        )
    }
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
