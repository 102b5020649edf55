//! Chain hash type for transaction identification.
//!
//! `Hash` holds a 32-byte digest in internal (little-endian) order and
//! displays it byte-reversed, the conventional form of transaction IDs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hash::hash256;
use crate::util::reverse_byte_order;
use crate::PrimitivesError;

/// Size of a Hash in bytes.
pub const HASH_SIZE: usize = 32;

/// Maximum hex string length for a Hash (64 hex characters).
pub const MAX_HASH_STRING_SIZE: usize = HASH_SIZE * 2;

/// A 32-byte hash used for transaction IDs.
///
/// When displayed as a string, the bytes are reversed (little-endian
/// internal, big-endian display).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// Create a Hash from a raw 32-byte array in internal byte order.
    pub fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    /// Create a Hash from a byte slice in internal byte order.
    ///
    /// # Arguments
    /// * `bytes` - A slice that must be exactly 32 bytes.
    ///
    /// # Returns
    /// `Ok(Hash)` if the slice is 32 bytes, or an error otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let arr: [u8; HASH_SIZE] = bytes.try_into().map_err(|_| {
            PrimitivesError::InvalidHash(format!(
                "invalid hash length of {}, want {}",
                bytes.len(),
                HASH_SIZE
            ))
        })?;
        Ok(Hash(arr))
    }

    /// Create a Hash from a byte-reversed (display order) hex string.
    ///
    /// Short strings are zero-padded on the high end; an empty string
    /// yields the zero hash.
    ///
    /// # Arguments
    /// * `hex_str` - A hex string of up to 64 characters.
    ///
    /// # Returns
    /// `Ok(Hash)` on success, or an error for invalid input.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.len() > MAX_HASH_STRING_SIZE {
            return Err(PrimitivesError::InvalidHash(format!(
                "max hash string length is {} bytes",
                MAX_HASH_STRING_SIZE
            )));
        }

        let padded = format!("{:0>width$}", hex_str, width = MAX_HASH_STRING_SIZE);
        let display = hex::decode(padded)?;
        Hash::from_bytes(&reverse_byte_order(&display))
    }

    /// Access the internal byte array.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Return the bytes in display (byte-reversed) order.
    pub fn to_reversed(&self) -> [u8; HASH_SIZE] {
        let mut reversed = self.0;
        reversed.reverse();
        reversed
    }
}

/// Display the hash as byte-reversed hex.
impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.to_reversed()))
    }
}

impl FromStr for Hash {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash::from_hex(s)
    }
}

/// Serialize as the display hex string.
impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Deserialize from a display hex string.
impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Compute the double SHA-256 of `data` as a Hash.
pub fn double_hash_h(data: &[u8]) -> Hash {
    Hash(hash256(data))
}
