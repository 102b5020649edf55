/// Multicoin transaction serialization.
///
/// Builds the byte-exact wire encoding of legacy and segwit transactions
/// from validated parts (outpoints, inputs, outputs, witness stacks) and
/// derives txid / wtxid by double SHA-256.

pub mod config;
pub mod outpoint;
pub mod input;
pub mod output;
pub mod witness;
pub mod transaction;
pub mod builder;

mod error;
pub use error::TransactionError;
pub use config::Config;
pub use outpoint::Outpoint;
pub use input::TxIn;
pub use output::TxOut;
pub use witness::{WitnessStack, WitnessStackItem};
pub use transaction::Transaction;
pub use builder::TransactionBuilder;
