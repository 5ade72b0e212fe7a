//! # Byte Stream
//!
//! Append/consume byte buffer that every message body is written to and read from.
//! Writes append at the end; reads consume from an independent read cursor that only
//! moves forward. All multi-byte values are little-endian.
//!
//! ```text
//! ┌───────────── consumed ─────────────┬────── unread ──────┐
//! 0                               read_position          length()
//! ```

use crate::error::{JausError, JausResult};
use crate::scaled_integer::ScaledInteger;
use byteorder::{ByteOrder, LittleEndian};
use std::fmt;

/// Fixed-size primitive that can be written to and read from a [`Stream`]
pub trait WireValue: Sized + Copy {
    /// Encoded size in bytes
    const SIZE: usize;

    /// Append the little-endian encoding
    fn put(self, buffer: &mut Vec<u8>);

    /// Decode from exactly `SIZE` bytes
    fn get(bytes: &[u8]) -> Self;
}

impl WireValue for u8 {
    const SIZE: usize = 1;

    fn put(self, buffer: &mut Vec<u8>) {
        buffer.push(self);
    }

    fn get(bytes: &[u8]) -> Self {
        bytes[0]
    }
}

impl WireValue for i8 {
    const SIZE: usize = 1;

    fn put(self, buffer: &mut Vec<u8>) {
        buffer.push(self as u8);
    }

    fn get(bytes: &[u8]) -> Self {
        bytes[0] as i8
    }
}

macro_rules! impl_wire_value {
    ($($ty:ty => $read:ident, $write:ident;)*) => {
        $(
            impl WireValue for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn put(self, buffer: &mut Vec<u8>) {
                    let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                    LittleEndian::$write(&mut bytes, self);
                    buffer.extend_from_slice(&bytes);
                }

                fn get(bytes: &[u8]) -> Self {
                    LittleEndian::$read(bytes)
                }
            }
        )*
    };
}

impl_wire_value! {
    u16 => read_u16, write_u16;
    i16 => read_i16, write_i16;
    u32 => read_u32, write_u32;
    i32 => read_i32, write_i32;
    u64 => read_u64, write_u64;
    i64 => read_i64, write_i64;
    f32 => read_f32, write_f32;
    f64 => read_f64, write_f64;
}

/// Ordered byte buffer with a forward-only read cursor
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stream {
    buffer: Vec<u8>,
    read_pos: usize,
}

impl Stream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            read_pos: 0,
        }
    }

    /// Append a primitive; returns bytes written
    pub fn write<T: WireValue>(&mut self, value: T) -> usize {
        value.put(&mut self.buffer);
        T::SIZE
    }

    /// Append raw bytes; returns bytes written
    pub fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        self.buffer.extend_from_slice(bytes);
        bytes.len()
    }

    /// Append a real value as a scaled integer; returns bytes written
    pub fn write_scaled(&mut self, value: f64, upper: f64, lower: f64, width: ScaledInteger) -> usize {
        width.write(self, value, upper, lower)
    }

    /// Append a presence vector of `size` bytes (0, 1, 2 or 4)
    ///
    /// Any other size writes nothing and returns 0, which the caller's byte count
    /// check reports as a write failure.
    pub fn write_presence_vector(&mut self, vector: u32, size: usize) -> usize {
        match size {
            0 => 0,
            1 => self.write(vector as u8),
            2 => self.write(vector as u16),
            4 => self.write(vector),
            _ => 0,
        }
    }

    /// Consume a primitive from the read cursor
    pub fn read<T: WireValue>(&mut self) -> JausResult<T> {
        let bytes = self.take(T::SIZE, std::any::type_name::<T>())?;
        Ok(T::get(bytes))
    }

    /// Consume `len` raw bytes from the read cursor
    pub fn read_bytes(&mut self, len: usize) -> JausResult<&[u8]> {
        self.take(len, "raw bytes")
    }

    /// Consume a scaled integer and return the real value it encodes
    pub fn read_scaled(&mut self, upper: f64, lower: f64, width: ScaledInteger) -> JausResult<f64> {
        width.read(self, upper, lower)
    }

    /// Consume a presence vector of `size` bytes (0, 1, 2 or 4)
    pub fn read_presence_vector(&mut self, size: usize) -> JausResult<u32> {
        match size {
            0 => Ok(0),
            1 => self.read::<u8>().map(u32::from),
            2 => self.read::<u16>().map(u32::from),
            4 => self.read::<u32>(),
            other => Err(JausError::read_failure(
                format!("presence vector of unsupported size {other}"),
                other,
                0,
            )),
        }
    }

    fn take(&mut self, len: usize, context: &str) -> JausResult<&[u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(JausError::read_failure(
                format!("{context} at offset {}", self.read_pos),
                len,
                remaining,
            ));
        }
        let start = self.read_pos;
        self.read_pos += len;
        Ok(&self.buffer[start..start + len])
    }

    /// Total bytes held
    pub fn length(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Bytes not yet consumed by reads
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.read_pos
    }

    pub fn read_position(&self) -> usize {
        self.read_pos
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Bytes from the read cursor to the end
    pub fn unread(&self) -> &[u8] {
        &self.buffer[self.read_pos..]
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Drop all contents and reset the read cursor, keeping the allocation
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.read_pos = 0;
    }

    /// Hex dump of the held bytes for diagnostics
    pub fn to_hex(&self) -> String {
        hex::encode(&self.buffer)
    }
}

impl From<Vec<u8>> for Stream {
    fn from(buffer: Vec<u8>) -> Self {
        Self {
            buffer,
            read_pos: 0,
        }
    }
}

impl From<&[u8]> for Stream {
    fn from(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("length", &self.buffer.len())
            .field("read_position", &self.read_pos)
            .field("bytes", &self.to_hex())
            .finish()
    }
}
