//! Integer and byte-order conversion helpers.
//!
//! These are the small pure functions every serializer in the workspace
//! leans on: minimal and fixed-width little-endian encoding, decoding in
//! either byte order, and byte-order reversal for display-form hashes.

use crate::PrimitivesError;

/// Number of significant bytes in `n` (zero has none).
fn significant_bytes(n: u64) -> usize {
    (64 - n.leading_zeros() as usize + 7) / 8
}

/// Encode `n` little-endian using the fewest bytes that hold its value.
///
/// Zero encodes as a single `0x00` byte.
///
/// # Arguments
/// * `n` - The integer to encode.
///
/// # Returns
/// A `Vec<u8>` of 1 to 8 bytes.
pub fn int_to_little_endian(n: u64) -> Vec<u8> {
    let len = significant_bytes(n).max(1);
    n.to_le_bytes()[..len].to_vec()
}

/// Encode `n` little-endian, zero-padded to exactly `width` bytes.
///
/// # Arguments
/// * `n` - The integer to encode.
/// * `width` - The output length in bytes. May exceed 8.
///
/// # Returns
/// `Ok(bytes)` of length `width`, or `IntegerTooWide` if `n` needs more
/// than `width` bytes.
pub fn int_to_little_endian_padded(n: u64, width: usize) -> Result<Vec<u8>, PrimitivesError> {
    if significant_bytes(n) > width {
        return Err(PrimitivesError::IntegerTooWide { value: n, width });
    }
    let mut out = n.to_le_bytes()[..width.min(8)].to_vec();
    out.resize(width, 0);
    Ok(out)
}

/// Decode a little-endian byte string into an integer.
///
/// Trailing zero bytes (high-order padding) are ignored, so inputs longer
/// than 8 bytes are accepted as long as the value fits in a `u64`.
///
/// # Arguments
/// * `bytes` - Little-endian encoded integer. Empty input decodes to 0.
///
/// # Returns
/// `Ok(value)`, or `IntegerOverflow` if the value exceeds `u64::MAX`.
pub fn little_endian_to_int(bytes: &[u8]) -> Result<u64, PrimitivesError> {
    let len = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    if len > 8 {
        return Err(PrimitivesError::IntegerOverflow(len));
    }
    Ok(bytes[..len]
        .iter()
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64))
}

/// Decode a big-endian byte string into an integer.
///
/// Leading zero bytes are ignored.
///
/// # Arguments
/// * `bytes` - Big-endian encoded integer. Empty input decodes to 0.
///
/// # Returns
/// `Ok(value)`, or `IntegerOverflow` if the value exceeds `u64::MAX`.
pub fn big_endian_to_int(bytes: &[u8]) -> Result<u64, PrimitivesError> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[start..];
    if significant.len() > 8 {
        return Err(PrimitivesError::IntegerOverflow(significant.len()));
    }
    Ok(significant
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64))
}

/// Return a copy of `bytes` in reverse order.
///
/// Converts between internal (little-endian) and display (big-endian)
/// forms of transaction IDs.
pub fn reverse_byte_order(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}
