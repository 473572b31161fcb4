//! # playerio-client
//!
//! Async client for authenticating against the Player.IO game backend.
//!
//! ## Features
//! - Direct connect as a known user, optionally proven with [`calc_auth`]
//! - QuickConnect: simple users, Facebook, Kongregate, Steam
//! - Simple user registration with typed per-field errors
//! - Password recovery
//! - Pluggable [`Transport`]; HTTP by default
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use playerio_client::{Config, PlayerIo};
//!
//! let pio = PlayerIo::new(Config::default())?;
//! let client = pio
//!     .quick_connect()
//!     .simple_connect("my-game-abc123", "alice", "hunter2")
//!     .await?;
//! println!("connected as {}", client.user_id());
//! # Ok(()) }
//! ```

#![deny(unsafe_code)]

mod channel;
mod errors;
mod quick_connect;
pub mod transport;

pub use channel::{Channel, decode_envelope};
pub use errors::{InvocationError, PlayerIoError, RegistrationError, RemoteError, TransportError};
pub use playerio_crypto::calc_auth;
pub use playerio_proto::enums::ErrorCode;
pub use quick_connect::{QuickConnect, Registration};
pub use transport::{HttpTransport, Transport};

use std::fmt;
use std::sync::{Arc, OnceLock};

use playerio_proto::types::ConnectOutput;
use playerio_proto::{ApiCall, functions};

/// The public API endpoint. Calls go to `{api_url}/{action code}`.
pub const DEFAULT_API_URL: &str = "http://api.playerio.com/api";

// ─── Config ───────────────────────────────────────────────────────────────────

/// Configuration for [`PlayerIo::new`].
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the API (default: [`DEFAULT_API_URL`]).
    pub api_url:    String,
    /// `User-Agent` header sent with every request (default: reqwest's).
    pub user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url:    DEFAULT_API_URL.to_owned(),
            user_agent: None,
        }
    }
}

// ─── PlayerIo ─────────────────────────────────────────────────────────────────

/// Entry point for connecting to a game.
///
/// Owns the [`Channel`] every call and every resulting [`Client`] goes
/// through. Create one per process and share it; it is `Send + Sync`.
pub struct PlayerIo<T: Transport = HttpTransport> {
    channel:       Arc<Channel<T>>,
    quick_connect: OnceLock<QuickConnect<T>>,
}

impl PlayerIo<HttpTransport> {
    /// Talk to the HTTP API described by `config`.
    pub fn new(config: Config) -> Result<Self, TransportError> {
        Ok(Self::with_transport(HttpTransport::new(&config)?))
    }
}

impl<T: Transport> PlayerIo<T> {
    /// Route every call through `transport`.
    pub fn with_transport(transport: T) -> Self {
        Self {
            channel:       Arc::new(Channel::new(transport)),
            quick_connect: OnceLock::new(),
        }
    }

    /// The shared channel.
    pub fn channel(&self) -> &Arc<Channel<T>> {
        &self.channel
    }

    /// Connect to `game_id` as `user_id`.
    ///
    /// `connection_id` names a connection from the game's settings; `"public"`
    /// is the default one. If that connection only accepts authenticated
    /// requests, pass an `auth` value produced by [`calc_auth`].
    pub async fn connect(
        &self,
        game_id:       &str,
        connection_id: &str,
        user_id:       &str,
        auth:          Option<&str>,
    ) -> Result<Client<T>, InvocationError<PlayerIoError>> {
        let req = functions::Connect {
            game_id:       game_id.to_owned(),
            connection_id: connection_id.to_owned(),
            user_id:       user_id.to_owned(),
            auth:          auth.map(str::to_owned),
        };
        let out = self.channel.request(&req, None).await?;
        Ok(Client::from_output(&self.channel, out))
    }

    /// QuickConnect methods, built on first use and shared afterwards.
    pub fn quick_connect(&self) -> &QuickConnect<T> {
        self.quick_connect
            .get_or_init(|| QuickConnect::new(Arc::clone(&self.channel)))
    }
}

impl<T: Transport + fmt::Debug> fmt::Debug for PlayerIo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerIo").field("channel", &self.channel).finish_non_exhaustive()
    }
}

// ─── Client ───────────────────────────────────────────────────────────────────

/// A connected session.
///
/// Only produced by a successful connect or registration. Clones share the
/// channel; dropping a client ends nothing on the server.
pub struct Client<T: Transport = HttpTransport> {
    channel: Arc<Channel<T>>,
    token:   String,
    user_id: String,
}

impl<T: Transport> Client<T> {
    pub(crate) fn from_output(channel: &Arc<Channel<T>>, out: ConnectOutput) -> Self {
        log::info!("[playerio] Connected as {} ✓", out.user_id);
        Self {
            channel: Arc::clone(channel),
            token:   out.token,
            user_id: out.user_id,
        }
    }

    /// Session token, sent with every call made through this client.
    pub fn token(&self) -> &str { &self.token }

    /// The user id the service resolved this session to.
    pub fn user_id(&self) -> &str { &self.user_id }

    /// The channel shared with the [`PlayerIo`] that created this client.
    pub fn channel(&self) -> &Arc<Channel<T>> { &self.channel }

    /// Send any API call as this user.
    pub async fn invoke<C: ApiCall>(
        &self,
        call: &C,
    ) -> Result<C::Output, InvocationError<C::Error>> {
        self.channel.request(call, Some(self.token.as_str())).await
    }
}

impl<T: Transport> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            channel: Arc::clone(&self.channel),
            token:   self.token.clone(),
            user_id: self.user_id.clone(),
        }
    }
}

impl<T: Transport> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}
