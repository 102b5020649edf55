//! Append-only byte buffers.
//!
//! `ByteBuffer` is the single mutation surface every serializable structure
//! builds on: a structure appends its fields in wire order, then calls
//! [`ByteBuffer::freeze`] to obtain an immutable [`ByteData`]. Freezing
//! consumes the builder, so a frozen value has no append path at all.

use std::fmt;
use std::ops::Deref;

use crate::varint::VarInt;

// ---------------------------------------------------------------------------
// ByteBuffer
// ---------------------------------------------------------------------------

/// A growable buffer for protocol binary data.
///
/// Wraps a `Vec<u8>` and provides methods to append raw bytes, other
/// serialized structures, fixed-size little-endian integers and VarInts.
#[derive(Debug, Default)]
pub struct ByteBuffer {
    buf: Vec<u8>,
}

impl ByteBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        ByteBuffer { buf: Vec::new() }
    }

    /// Create a new buffer with a pre-allocated capacity.
    ///
    /// # Arguments
    /// * `capacity` - Initial byte capacity of the internal buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        ByteBuffer { buf: Vec::with_capacity(capacity) }
    }

    /// Append bytes to the buffer.
    ///
    /// Accepts raw slices, vectors, arrays, and the frozen bytes of any
    /// other structure (`ByteData` implements `AsRef<[u8]>`).
    ///
    /// # Arguments
    /// * `bytes` - The bytes to append.
    pub fn append(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
        self.buf.extend_from_slice(bytes.as_ref());
        self
    }

    /// Append a single byte.
    pub fn write_u8(&mut self, val: u8) -> &mut Self {
        self.buf.push(val);
        self
    }

    /// Append a little-endian u16 (2 bytes).
    pub fn write_u16_le(&mut self, val: u16) -> &mut Self {
        self.append(val.to_le_bytes())
    }

    /// Append a little-endian u32 (4 bytes).
    pub fn write_u32_le(&mut self, val: u32) -> &mut Self {
        self.append(val.to_le_bytes())
    }

    /// Append a little-endian u64 (8 bytes).
    pub fn write_u64_le(&mut self, val: u64) -> &mut Self {
        self.append(val.to_le_bytes())
    }

    /// Append the encoded form of a VarInt.
    ///
    /// # Arguments
    /// * `varint` - The VarInt whose bytes to append.
    pub fn write_varint(&mut self, varint: &VarInt) -> &mut Self {
        self.append(varint.as_bytes())
    }

    /// Return a reference to the bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Return the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the buffer and return its contents as immutable `ByteData`.
    ///
    /// This is irreversible: the builder is moved into the frozen value.
    pub fn freeze(self) -> ByteData {
        ByteData(self.buf)
    }
}

// ---------------------------------------------------------------------------
// ByteData
// ---------------------------------------------------------------------------

/// An immutable, frozen byte sequence.
///
/// Obtained from [`ByteBuffer::freeze`]. Exposes read-only slice access via
/// `Deref<Target = [u8]>`; there is no API that mutates it.
///
/// ```compile_fail
/// use multicoin_primitives::buffer::ByteBuffer;
///
/// let data = ByteBuffer::new().freeze();
/// data.append([0x01]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteData(Vec<u8>);

impl ByteData {
    /// Return the frozen bytes as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Return an owned copy of the bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.clone()
    }

    /// Return the bytes as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Find the first occurrence of `needle` in the data.
    ///
    /// # Arguments
    /// * `needle` - The byte string to search for. An empty needle
    ///   matches at offset 0.
    ///
    /// # Returns
    /// The byte offset of the first match, or `None`.
    pub fn find(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        let needle = needle.as_ref();
        if needle.is_empty() {
            return Some(0);
        }
        self.0.windows(needle.len()).position(|w| w == needle)
    }
}

impl Deref for ByteData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ByteData {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<ByteData> for Vec<u8> {
    fn from(data: ByteData) -> Self {
        data.0
    }
}

impl PartialEq<[u8]> for ByteData {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&[u8]> for ByteData {
    fn eq(&self, other: &&[u8]) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Vec<u8>> for ByteData {
    fn eq(&self, other: &Vec<u8>) -> bool {
        &self.0 == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteData {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.0 == other[..]
    }
}

impl fmt::Debug for ByteData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteData({})", self.to_hex())
    }
}

/// Display the data as lowercase hex.
impl fmt::Display for ByteData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
