//! # playerio: Player.IO client SDK
//!
//! Three focused sub-crates wired together here for convenience:
//!
//! | Sub-crate         | Role                                                 |
//! |-------------------|------------------------------------------------------|
//! | `playerio-proto`  | Wire messages, action codes, protobuf codec          |
//! | `playerio-crypto` | `calc_auth` and HMAC-SHA1 helpers                    |
//! | `playerio-client` | `PlayerIo`, `QuickConnect`, `Client`, HTTP transport |
//!
//! ## Quick start
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use playerio::{Config, PlayerIo, calc_auth};
//!
//! let pio = PlayerIo::new(Config::default())?;
//!
//! // A connection that only accepts authenticated users:
//! let auth = calc_auth("alice", "connection-shared-secret");
//! let client = pio.connect("my-game-abc123", "secure", "alice", Some(&auth)).await?;
//! println!("token: {}", client.token());
//! # Ok(()) }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Re-export of [`playerio_proto`]: messages, action codes and the wire codec.
pub use playerio_proto as proto;

/// Re-export of [`playerio_crypto`]: auth hash and HMAC helpers.
pub use playerio_crypto as crypto;

// ─── Convenience re-exports ───────────────────────────────────────────────────

pub use playerio_proto::{ApiCall, Deserializable, Serializable};

pub use playerio_client::{
    Channel, Client, Config, ErrorCode, HttpTransport, InvocationError, PlayerIo,
    PlayerIoError, QuickConnect, Registration, RegistrationError, Transport, TransportError,
    calc_auth,
};
