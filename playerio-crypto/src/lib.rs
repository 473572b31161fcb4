//! Auth hash helpers for Player.IO connections.
//!
//! A connection configured to require authentication accepts a user id only
//! together with a value proving the caller knows the connection's shared
//! secret. That value is produced by [`calc_auth`]:
//!
//! ```text
//! <unix seconds>:<lowercase hex HMAC-SHA1(secret, "<unix seconds>:<user id>")>
//! ```
//!
//! The server recomputes the HMAC and checks the timestamp against its own
//! clock. No skew compensation happens here.

#![deny(unsafe_code)]

use std::fmt::Write;

mod mac;

#[doc(hidden)]
pub mod __private {
    pub use hmac;
    pub use sha1;
}

/// Length in bytes of an HMAC-SHA1 tag.
pub const HMAC_SHA1_LEN: usize = 20;

/// HMAC-SHA1 of `message` keyed by `key`.
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> [u8; HMAC_SHA1_LEN] {
    hmac_sha1!(key, message)
}

/// Lowercase hexadecimal, two digits per byte, no separators.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // Writing into a String cannot fail.
        let _ = write!(out, "{b:02x}");
    }
    out
}

/// Compute the auth value for `user_id` at the current time.
///
/// The timestamp is whole seconds since the Unix epoch, truncated.
pub fn calc_auth(user_id: &str, shared_secret: &str) -> String {
    calc_auth_at(user_id, shared_secret, chrono::Utc::now().timestamp())
}

/// Compute the auth value for `user_id` as of `unix_time`.
pub fn calc_auth_at(user_id: &str, shared_secret: &str, unix_time: i64) -> String {
    let tag = hmac_sha1!(
        shared_secret.as_bytes(),
        unix_time.to_string().as_bytes(),
        b":",
        user_id.as_bytes()
    );
    format!("{unix_time}:{}", to_hex(&tag))
}
