//! Segregated witness data: stack items and the per-input stack.

use multicoin_primitives::{ByteBuffer, ByteData, VarInt};
use tracing::trace;

/// One element of a witness stack, serialized as `VarInt(len) ‖ item`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WitnessStackItem {
    item_len: VarInt,
    item: Vec<u8>,
    bytes: ByteData,
}

impl WitnessStackItem {
    pub fn new(item: impl Into<Vec<u8>>) -> Self {
        let item = item.into();
        let item_len = VarInt::from(item.len());

        let mut buf = ByteBuffer::with_capacity(item_len.encoded_len() + item.len());
        buf.write_varint(&item_len).append(&item);

        WitnessStackItem {
            item_len,
            item,
            bytes: buf.freeze(),
        }
    }

    pub fn item(&self) -> &[u8] {
        &self.item
    }

    pub fn item_len(&self) -> &VarInt {
        &self.item_len
    }

    pub fn as_bytes(&self) -> &ByteData {
        &self.bytes
    }
}

impl AsRef<[u8]> for WitnessStackItem {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// The witness stack for exactly one input.
///
/// Serialized as `VarInt(count) ‖ item ‖ item ‖ ...`. An empty stack
/// serializes to a single `0x00` byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WitnessStack {
    stack_len: VarInt,
    items: Vec<WitnessStackItem>,
    bytes: ByteData,
}

impl WitnessStack {
    pub fn new(items: Vec<WitnessStackItem>) -> Self {
        let stack_len = VarInt::from(items.len());

        let mut buf = ByteBuffer::new();
        buf.write_varint(&stack_len);
        for item in &items {
            buf.append(item);
        }
        trace!(items = items.len(), size = buf.len(), "serialized witness stack");

        WitnessStack {
            stack_len,
            items,
            bytes: buf.freeze(),
        }
    }

    /// Build a stack directly from raw item byte strings.
    pub fn from_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Vec<u8>>,
    {
        Self::new(items.into_iter().map(WitnessStackItem::new).collect())
    }

    pub fn items(&self) -> &[WitnessStackItem] {
        &self.items
    }

    pub fn stack_len(&self) -> &VarInt {
        &self.stack_len
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_bytes(&self) -> &ByteData {
        &self.bytes
    }
}

impl AsRef<[u8]> for WitnessStack {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
