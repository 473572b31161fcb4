//! The [`Serializable`] trait and the field writers messages are built from.
//!
//! Encoding follows the [Protocol Buffers wire format].
//!
//! [Protocol Buffers wire format]: https://protobuf.dev/programming-guides/encoding/

use crate::WireType;

/// Serialize `self` as the body of a protobuf message.
pub trait Serializable {
    /// Appends the encoded fields of `self` to `buf`.
    fn serialize(&self, buf: &mut impl Extend<u8>);

    /// Convenience: allocate a fresh `Vec<u8>` and serialize into it.
    fn to_bytes(&self) -> Vec<u8> {
        let mut v = Vec::new();
        self.serialize(&mut v);
        v
    }
}

// ─── varint / key ────────────────────────────────────────────────────────────

/// Base-128 varint: 7 bits per byte, least significant group first, high bit
/// set on every byte except the last.
pub fn write_varint(mut value: u64, buf: &mut impl Extend<u8>) {
    while value >= 0x80 {
        buf.extend([(value as u8 & 0x7f) | 0x80]);
        value >>= 7;
    }
    buf.extend([value as u8]);
}

/// Field key: `(field << 3) | wire_type`.
pub fn write_key(field: u32, wire_type: WireType, buf: &mut impl Extend<u8>) {
    write_varint(((field as u64) << 3) | wire_type as u64, buf);
}

// ─── scalar fields ───────────────────────────────────────────────────────────

/// `int32` field. Negative values are sign-extended to 64 bits, so they always
/// occupy ten bytes on the wire.
pub fn write_int32(field: u32, value: i32, buf: &mut impl Extend<u8>) {
    write_key(field, WireType::Varint, buf);
    write_varint(value as i64 as u64, buf);
}

// ─── length-delimited fields ─────────────────────────────────────────────────

/// `bytes` field: key, varint length, raw data.
pub fn write_bytes(field: u32, value: &[u8], buf: &mut impl Extend<u8>) {
    write_key(field, WireType::LengthDelimited, buf);
    write_varint(value.len() as u64, buf);
    buf.extend(value.iter().copied());
}

/// `string` field. Always written, even when empty.
pub fn write_string(field: u32, value: &str, buf: &mut impl Extend<u8>) {
    write_bytes(field, value.as_bytes(), buf);
}

/// Optional `string` field: nothing is written for `None`.
pub fn write_opt_string(field: u32, value: Option<&str>, buf: &mut impl Extend<u8>) {
    if let Some(v) = value {
        write_string(field, v, buf);
    }
}

/// Embedded message field.
///
/// The body is encoded first because its length prefix precedes it.
pub fn write_message(field: u32, value: &impl Serializable, buf: &mut impl Extend<u8>) {
    write_bytes(field, &value.to_bytes(), buf);
}

/// Repeated embedded message: one keyed entry per element.
pub fn write_repeated<T: Serializable>(field: u32, values: &[T], buf: &mut impl Extend<u8>) {
    for v in values {
        write_message(field, v, buf);
    }
}
