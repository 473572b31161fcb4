//! The [`Deserializable`] trait, [`Cursor`] buffer, and field readers.

use std::fmt;

use crate::WireType;

// ─── Error ───────────────────────────────────────────────────────────────────

/// Errors that can occur during deserialization.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Ran out of bytes before the value was fully read.
    UnexpectedEof,
    /// A varint ran past ten bytes.
    VarintOverflow,
    /// A key carried a wire type this codec does not know (groups included).
    InvalidWireType { bits: u8 },
    /// A key carried field number zero.
    InvalidFieldNumber,
    /// A `string` field was not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of buffer"),
            Self::VarintOverflow => write!(f, "varint longer than 10 bytes"),
            Self::InvalidWireType { bits } => write!(f, "invalid wire type: {bits}"),
            Self::InvalidFieldNumber => write!(f, "field number 0 is reserved"),
            Self::InvalidUtf8 => write!(f, "string field is not valid UTF-8"),
        }
    }
}

impl std::error::Error for Error {}

/// Specialized `Result` for deserialization.
pub type Result<T> = std::result::Result<T, Error>;

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// A zero-copy cursor over an in-memory byte slice.
///
/// Embedded messages are decoded by slicing their length-delimited body out
/// of the parent and running a fresh cursor over it, so a message always ends
/// where its cursor ends.
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    pub fn from_slice(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Remaining bytes.
    pub fn remaining(&self) -> usize { self.buf.len() - self.pos }

    /// `true` once every byte has been consumed.
    pub fn is_empty(&self) -> bool { self.remaining() == 0 }

    /// Read a single byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        match self.buf.get(self.pos).copied() {
            Some(b) => { self.pos += 1; Ok(b) }
            None    => Err(Error::UnexpectedEof),
        }
    }

    /// Borrow the next `len` bytes and advance past them.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(len).ok_or(Error::UnexpectedEof)?;
        if end > self.buf.len() {
            return Err(Error::UnexpectedEof);
        }
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Borrow everything that is left.
    pub fn read_rest(&mut self) -> &'a [u8] {
        let slice = &self.buf[self.pos..];
        self.pos = self.buf.len();
        slice
    }

    /// Read a base-128 varint.
    pub fn read_varint(&mut self) -> Result<u64> {
        let mut value = 0u64;
        for i in 0..10 {
            let b = self.read_byte()?;
            value |= ((b & 0x7f) as u64) << (7 * i);
            if b & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(Error::VarintOverflow)
    }

    /// Read the next field key, or `None` at the end of the message.
    pub fn read_key(&mut self) -> Result<Option<(u32, WireType)>> {
        if self.is_empty() {
            return Ok(None);
        }
        let key = self.read_varint()?;
        let bits = (key & 0x7) as u8;
        let wire_type = WireType::from_bits(bits).ok_or(Error::InvalidWireType { bits })?;
        let field = (key >> 3) as u32;
        if field == 0 {
            return Err(Error::InvalidFieldNumber);
        }
        Ok(Some((field, wire_type)))
    }

    /// Skip the value of a field whose tag is not recognised.
    pub fn skip(&mut self, wire_type: WireType) -> Result<()> {
        match wire_type {
            WireType::Varint          => { self.read_varint()?; }
            WireType::Fixed64         => { self.read_slice(8)?; }
            WireType::Fixed32         => { self.read_slice(4)?; }
            WireType::LengthDelimited => { self.read_length_delimited()?; }
        }
        Ok(())
    }

    /// Read a varint length and borrow that many bytes.
    pub fn read_length_delimited(&mut self) -> Result<&'a [u8]> {
        let len = self.read_varint()?;
        let len = usize::try_from(len).map_err(|_| Error::UnexpectedEof)?;
        self.read_slice(len)
    }

    /// `string` value.
    pub fn read_string(&mut self) -> Result<String> {
        let bytes = self.read_length_delimited()?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| Error::InvalidUtf8)
    }

    /// `int32` value. Wider varints are truncated, as protobuf specifies.
    pub fn read_int32(&mut self) -> Result<i32> {
        Ok(self.read_varint()? as i64 as i32)
    }

    /// Embedded message value.
    pub fn read_message<T: Deserializable>(&mut self) -> Result<T> {
        T::from_bytes(self.read_length_delimited()?)
    }
}

/// Alias used by message impls: `crate::deserialize::Buffer<'_, '_>`.
pub type Buffer<'a, 'b> = &'a mut Cursor<'b>;

// ─── Deserializable ──────────────────────────────────────────────────────────

/// Deserialize a message from the protobuf wire format.
pub trait Deserializable: Sized {
    /// Read `Self` from `buf`, consuming it to the end.
    fn deserialize(buf: Buffer) -> Result<Self>;

    /// Convenience: deserialize from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::from_slice(bytes);
        Self::deserialize(&mut cursor)
    }
}
