//! Replies and records shared between requests.
//!
//! Absent fields decode to their defaults and unknown tags are skipped, so
//! newer server replies with extra fields still decode.

use std::fmt;

use crate::deserialize::{Buffer, Deserializable, Result};
use crate::enums::ErrorCode;
use crate::serialize::{self, Serializable};
use crate::WireType::{LengthDelimited, Varint};

// ─── KeyValuePair ─────────────────────────────────────────────────────────────

/// One `key → value` entry of a string map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyValuePair {
    /// Tag 1.
    pub key:   String,
    /// Tag 2.
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

impl Serializable for KeyValuePair {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        serialize::write_string(1, &self.key, buf);
        serialize::write_string(2, &self.value, buf);
    }
}

impl Deserializable for KeyValuePair {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut out = Self::default();
        while let Some((field, wire_type)) = buf.read_key()? {
            match (field, wire_type) {
                (1, LengthDelimited) => out.key = buf.read_string()?,
                (2, LengthDelimited) => out.value = buf.read_string()?,
                _ => buf.skip(wire_type)?,
            }
        }
        Ok(out)
    }
}

// ─── ConnectOutput ────────────────────────────────────────────────────────────

/// Reply to every connect and register call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectOutput {
    /// Session token for later authenticated requests (tag 1).
    pub token:   String,
    /// The id the service resolved the user to (tag 2).
    pub user_id: String,
}

impl Serializable for ConnectOutput {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        serialize::write_string(1, &self.token, buf);
        serialize::write_string(2, &self.user_id, buf);
    }
}

impl Deserializable for ConnectOutput {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut out = Self::default();
        while let Some((field, wire_type)) = buf.read_key()? {
            match (field, wire_type) {
                (1, LengthDelimited) => out.token = buf.read_string()?,
                (2, LengthDelimited) => out.user_id = buf.read_string()?,
                _ => buf.skip(wire_type)?,
            }
        }
        Ok(out)
    }
}

// ─── Empty ────────────────────────────────────────────────────────────────────

/// A message with no fields, for calls that carry no reply payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Empty;

impl Serializable for Empty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for Empty {
    fn deserialize(buf: Buffer) -> Result<Self> {
        while let Some((_, wire_type)) = buf.read_key()? {
            buf.skip(wire_type)?;
        }
        Ok(Self)
    }
}

// ─── ResponseHeader ───────────────────────────────────────────────────────────

/// Optional block at the front of a response envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseHeader {
    /// Tag 1.
    pub token: Option<String>,
}

impl Serializable for ResponseHeader {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        serialize::write_opt_string(1, self.token.as_deref(), buf);
    }
}

impl Deserializable for ResponseHeader {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut out = Self::default();
        while let Some((field, wire_type)) = buf.read_key()? {
            match (field, wire_type) {
                (1, LengthDelimited) => out.token = Some(buf.read_string()?),
                _ => buf.skip(wire_type)?,
            }
        }
        Ok(out)
    }
}

// ─── Error ────────────────────────────────────────────────────────────────────

/// The general error reply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Error {
    /// Tag 1.
    pub error_code: ErrorCode,
    /// Human-readable description (tag 2).
    pub message:    String,
}

impl Error {
    pub fn new(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self { error_code, message: message.into() }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_code, self.message)
    }
}

impl std::error::Error for Error {}

impl Serializable for Error {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        serialize::write_int32(1, self.error_code.code(), buf);
        serialize::write_string(2, &self.message, buf);
    }
}

impl Deserializable for Error {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut out = Self::default();
        while let Some((field, wire_type)) = buf.read_key()? {
            match (field, wire_type) {
                (1, Varint)          => out.error_code = buf.read_int32()?.into(),
                (2, LengthDelimited) => out.message = buf.read_string()?,
                _ => buf.skip(wire_type)?,
            }
        }
        Ok(out)
    }
}

// ─── RegistrationError ────────────────────────────────────────────────────────

/// Error reply to a registration, naming the inputs the service rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationError {
    /// Tag 1.
    pub error_code:     ErrorCode,
    /// Tag 2.
    pub message:        String,
    /// Tag 3.
    pub username_error: Option<String>,
    /// Tag 4.
    pub password_error: Option<String>,
    /// Tag 5.
    pub email_error:    Option<String>,
    /// Tag 6.
    pub captcha_error:  Option<String>,
}

impl RegistrationError {
    /// Each rejected input paired with its reason, in field order.
    pub fn field_errors(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("username", self.username_error.as_deref()),
            ("password", self.password_error.as_deref()),
            ("email",    self.email_error.as_deref()),
            ("captcha",  self.captcha_error.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, err)| err.map(|e| (name, e)))
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_code, self.message)?;
        for (name, reason) in self.field_errors() {
            write!(f, "; {name}: {reason}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RegistrationError {}

impl Serializable for RegistrationError {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        serialize::write_int32(1, self.error_code.code(), buf);
        serialize::write_string(2, &self.message, buf);
        serialize::write_opt_string(3, self.username_error.as_deref(), buf);
        serialize::write_opt_string(4, self.password_error.as_deref(), buf);
        serialize::write_opt_string(5, self.email_error.as_deref(), buf);
        serialize::write_opt_string(6, self.captcha_error.as_deref(), buf);
    }
}

impl Deserializable for RegistrationError {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut out = Self::default();
        while let Some((field, wire_type)) = buf.read_key()? {
            match (field, wire_type) {
                (1, Varint)          => out.error_code = buf.read_int32()?.into(),
                (2, LengthDelimited) => out.message = buf.read_string()?,
                (3, LengthDelimited) => out.username_error = Some(buf.read_string()?),
                (4, LengthDelimited) => out.password_error = Some(buf.read_string()?),
                (5, LengthDelimited) => out.email_error = Some(buf.read_string()?),
                (6, LengthDelimited) => out.captcha_error = Some(buf.read_string()?),
                _ => buf.skip(wire_type)?,
            }
        }
        Ok(out)
    }
}
