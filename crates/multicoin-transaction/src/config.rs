//! Structural limits applied when building transactions.

/// Maximum number of inputs, and separately of outputs, in one transaction.
pub const MAX_INPUTS_OUTPUTS: usize = 255;

/// Maximum serialized transaction size in bytes.
pub const MAX_TX_SIZE: usize = 100_000;

/// The only accepted segwit marker/flag value.
pub const SEGWIT_FLAG: [u8; 2] = [0x00, 0x01];

/// Transaction validation limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub max_inputs_outputs: usize,
    pub max_tx_size: usize,
}

impl Config {
    pub fn standard() -> Self {
        Config {
            max_inputs_outputs: MAX_INPUTS_OUTPUTS,
            max_tx_size: MAX_TX_SIZE,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::standard()
    }
}
