//! Player.IO API messages and their binary wire encoding.
//!
//! Every message travels in the protobuf wire format: each field is prefixed
//! with a key carrying its tag number and wire type, so tags (not field
//! order) are the compatibility contract with the remote service.
//!
//! # Overview
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`types`]       | Replies and shared records (`ConnectOutput`, errors, …) |
//! | [`functions`]   | Request arguments, each implementing [`ApiCall`]        |
//! | [`enums`]       | [`enums::ErrorCode`]                                    |
//! | [`convert`]     | Map ⇄ [`types::KeyValuePair`] helpers                   |
//!
//! # Raw usage
//!
//! ```rust
//! use playerio_proto::{functions, ApiCall, Serializable};
//!
//! let req = functions::SimpleConnect {
//!     game_id:           "my-game-abc123".into(),
//!     username_or_email: "alice".into(),
//!     password:          "hunter2".into(),
//! };
//!
//! assert_eq!(functions::SimpleConnect::METHOD, 400);
//! let bytes = req.to_bytes();
//! // POST `bytes` to the API endpoint for method 400…
//! # assert!(!bytes.is_empty());
//! ```

#![deny(unsafe_code)]

pub mod convert;
pub mod deserialize;
pub mod enums;
pub mod functions;
pub mod serialize;
pub mod types;

pub use deserialize::{Cursor, Deserializable};
pub use serialize::Serializable;

// ─── Wire types ───────────────────────────────────────────────────────────────

/// The low three bits of every field key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WireType {
    /// Base-128 varint (`int32`, `int64`, `bool`, enums).
    Varint = 0,
    /// Little-endian 8 bytes.
    Fixed64 = 1,
    /// Varint length followed by that many bytes (strings, messages, bytes).
    LengthDelimited = 2,
    /// Little-endian 4 bytes.
    Fixed32 = 5,
}

impl WireType {
    /// Decode the low three bits of a key.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Varint),
            1 => Some(Self::Fixed64),
            2 => Some(Self::LengthDelimited),
            5 => Some(Self::Fixed32),
            _ => None,
        }
    }
}

// ─── Core traits ──────────────────────────────────────────────────────────────

/// Marks a request type that can be sent to the Player.IO API.
///
/// Binding the action code and both reply types to the argument type means a
/// request can never be dispatched with the wrong code or decoded as the
/// wrong payload.
pub trait ApiCall: Serializable {
    /// Numeric action code selecting the remote operation.
    const METHOD: u32;
    /// Payload returned on success.
    type Output: Deserializable;
    /// Payload returned on failure.
    type Error: Deserializable;
}
