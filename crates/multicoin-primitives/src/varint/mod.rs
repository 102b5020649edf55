//! Variable-length integer encoding.
//!
//! A VarInt prefixes a little-endian integer with a width-class byte:
//!
//! | Value range                   | Prefix | Payload              |
//! |-------------------------------|--------|----------------------|
//! | `0 ..= 0xfc`                  | none   | 1 byte               |
//! | `0xfd ..= 0xffff`             | `0xfd` | 1 or 2 bytes         |
//! | `0x1_0000 ..= 0xffff_ffff`    | `0xfe` | 4 bytes              |
//! | `0x1_0000_0000 ..= u64::MAX`  | `0xff` | 8 bytes              |
//!
//! The payload is the value's minimal little-endian form, right-padded with
//! zeros until its length is a power of two. This differs from standard
//! CompactSize for `0xfd ..= 0xff`, which encode as `fd xx` rather than
//! `fd xx 00`; downstream hashes depend on this exact layout.

use crate::buffer::{ByteBuffer, ByteData};
use crate::util::{int_to_little_endian, little_endian_to_int};
use crate::PrimitivesError;

/// An encoded variable-length integer.
///
/// Holds both the numeric value and its exact encoded bytes; neither can
/// change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VarInt {
    value: u64,
    bytes: ByteData,
}

impl VarInt {
    /// Encode `value` as a VarInt.
    pub fn new(value: u64) -> Self {
        let mut buf = ByteBuffer::with_capacity(9);
        match value {
            0..=0xfc => {}
            0xfd..=0xffff => {
                buf.write_u8(0xfd);
            }
            0x1_0000..=0xffff_ffff => {
                buf.write_u8(0xfe);
            }
            _ => {
                buf.write_u8(0xff);
            }
        }
        buf.append(int_to_little_endian(value));
        while buf.len() > 1 && !(buf.len() - 1).is_power_of_two() {
            buf.write_u8(0x00);
        }
        VarInt { value, bytes: buf.freeze() }
    }

    /// Decode a complete VarInt encoding.
    ///
    /// The input must be exactly the encoding `VarInt::new` would produce
    /// for the decoded value; anything else is rejected.
    ///
    /// # Arguments
    /// * `data` - The full encoded bytes, prefix included.
    ///
    /// # Returns
    /// `Ok(VarInt)` on success, or `InvalidVarInt` for empty, truncated,
    /// over-long or non-canonical input.
    pub fn from_encoded(data: &[u8]) -> Result<Self, PrimitivesError> {
        let value = match data {
            [] => return Err(PrimitivesError::InvalidVarInt("empty input".to_string())),
            [0xfd..=0xff, payload @ ..] => little_endian_to_int(payload).map_err(|e| {
                PrimitivesError::InvalidVarInt(format!("payload: {}", e))
            })?,
            [b] => *b as u64,
            _ => {
                return Err(PrimitivesError::InvalidVarInt(format!(
                    "{} bytes without width prefix",
                    data.len()
                )))
            }
        };

        let varint = VarInt::new(value);
        if varint.bytes != data {
            return Err(PrimitivesError::InvalidVarInt(format!(
                "non-canonical encoding {} for value {}",
                hex::encode(data),
                value
            )));
        }
        Ok(varint)
    }

    /// Return the underlying integer value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Return the encoded bytes.
    pub fn as_bytes(&self) -> &ByteData {
        &self.bytes
    }

    /// Return an owned copy of the encoded bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Return the encoded length in bytes, prefix included.
    pub fn encoded_len(&self) -> usize {
        self.bytes.len()
    }
}

impl AsRef<[u8]> for VarInt {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<u64> for VarInt {
    fn from(v: u64) -> Self {
        VarInt::new(v)
    }
}

impl From<u32> for VarInt {
    fn from(v: u32) -> Self {
        VarInt::new(v as u64)
    }
}

impl From<usize> for VarInt {
    fn from(v: usize) -> Self {
        VarInt::new(v as u64)
    }
}

impl TryFrom<i128> for VarInt {
    type Error = PrimitivesError;

    fn try_from(v: i128) -> Result<Self, Self::Error> {
        if v < 0 {
            return Err(PrimitivesError::VarIntOutOfRange(format!(
                "VarInt cannot be less than 0, got {}",
                v
            )));
        }
        u64::try_from(v).map(VarInt::new).map_err(|_| {
            PrimitivesError::VarIntOutOfRange(format!(
                "VarInt cannot be greater than 2^64 - 1, got {}",
                v
            ))
        })
    }
}

impl TryFrom<u128> for VarInt {
    type Error = PrimitivesError;

    fn try_from(v: u128) -> Result<Self, Self::Error> {
        u64::try_from(v).map(VarInt::new).map_err(|_| {
            PrimitivesError::VarIntOutOfRange(format!(
                "VarInt cannot be greater than 2^64 - 1, got {}",
                v
            ))
        })
    }
}

impl TryFrom<i64> for VarInt {
    type Error = PrimitivesError;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        VarInt::try_from(v as i128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_varint_encodings() {
        let cases: Vec<(u64, Vec<u8>)> = vec![
            (0, vec![0x00]),
            (1, vec![0x01]),
            (0xfc, vec![0xfc]),
            (0xfd, vec![0xfd, 0xfd]),
            (0xff, vec![0xfd, 0xff]),
            (0x0100, vec![0xfd, 0x00, 0x01]),
            (0xffff, vec![0xfd, 0xff, 0xff]),
            (0x01_0000, vec![0xfe, 0x00, 0x00, 0x01, 0x00]),
            (0x0100_0000, vec![0xfe, 0x00, 0x00, 0x00, 0x01]),
            (0xffff_ffff, vec![0xfe, 0xff, 0xff, 0xff, 0xff]),
            (
                0x1_0000_0000,
                vec![0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00],
            ),
            (u64::MAX, vec![0xff; 9]),
        ];

        for (value, expected) in cases {
            let vi = VarInt::new(value);
            assert_eq!(vi.to_bytes(), expected, "encoding mismatch for {:#x}", value);
            assert_eq!(vi.encoded_len(), expected.len());
            assert_eq!(vi.value(), value);
        }
    }

    #[test]
    fn test_varint_from_conversions() {
        assert_eq!(VarInt::from(300usize), VarInt::new(300));
        assert_eq!(VarInt::from(300u32), VarInt::new(300));
        assert_eq!(VarInt::from(300u64).as_ref(), &[0xfd, 0x2c, 0x01]);
    }

    #[test]
    fn test_varint_out_of_range() {
        assert!(matches!(
            VarInt::try_from(-1i64),
            Err(PrimitivesError::VarIntOutOfRange(_))
        ));
        assert!(matches!(
            VarInt::try_from(u64::MAX as i128 + 1),
            Err(PrimitivesError::VarIntOutOfRange(_))
        ));
        assert!(matches!(
            VarInt::try_from(u128::MAX),
            Err(PrimitivesError::VarIntOutOfRange(_))
        ));
        assert_eq!(VarInt::try_from(u64::MAX as i128).unwrap().value(), u64::MAX);
        assert_eq!(VarInt::try_from(0i64).unwrap().value(), 0);
    }

    #[test]
    fn test_varint_from_encoded() {
        assert_eq!(VarInt::from_encoded(&[0x05]).unwrap().value(), 5);
        assert_eq!(VarInt::from_encoded(&[0xfd, 0xfd]).unwrap().value(), 0xfd);
        assert_eq!(VarInt::from_encoded(&[0xfd, 0x00, 0x01]).unwrap().value(), 256);
        assert_eq!(
            VarInt::from_encoded(&[0xfe, 0x00, 0x00, 0x01, 0x00]).unwrap().value(),
            65536
        );
        assert_eq!(
            VarInt::from_encoded(&[0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00])
                .unwrap()
                .value(),
            4294967296
        );
    }

    #[test]
    fn test_varint_from_encoded_rejects_non_canonical() {
        // empty
        assert!(VarInt::from_encoded(&[]).is_err());
        // prefix with no payload
        assert!(VarInt::from_encoded(&[0xfd]).is_err());
        // standard CompactSize form of 0xfd is not this encoding
        assert!(VarInt::from_encoded(&[0xfd, 0xfd, 0x00]).is_err());
        // small value behind a width prefix
        assert!(VarInt::from_encoded(&[0xfe, 0x05, 0x00, 0x00, 0x00]).is_err());
        // trailing garbage
        assert!(VarInt::from_encoded(&[0x05, 0x00]).is_err());
        // payload overflows u64
        assert!(VarInt::from_encoded(&[0xff; 10]).is_err());
    }
}
