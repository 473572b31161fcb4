//! Pluggable transport layer.
//!
//! Implement [`Transport`] to route API calls somewhere other than the public
//! HTTP endpoint: a proxy, a recorded fixture, an in-memory mock.

use std::future::Future;

use crate::Config;
use crate::errors::TransportError;

/// Name of the HTTP header carrying a session token.
pub const PLAYER_TOKEN_HEADER: &str = "playertoken";

/// Delivers one serialized request and returns the raw reply envelope.
///
/// Implementations must be shareable across concurrent calls; the
/// [`Channel`](crate::Channel) holding them is reused by every session.
pub trait Transport: Send + Sync + 'static {
    /// POST `body` to the operation selected by `method`, attaching `token`
    /// when the call belongs to an authenticated session.
    fn post(
        &self,
        method: u32,
        body:   Vec<u8>,
        token:  Option<&str>,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}

// ─── HttpTransport ────────────────────────────────────────────────────────────

/// The default transport: one HTTP POST per call to `{api_url}/{method}`.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http:    reqwest::Client,
    api_url: String,
}

impl HttpTransport {
    /// Build the HTTP client described by `config`.
    pub fn new(config: &Config) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(ua) = &config.user_agent {
            builder = builder.user_agent(ua.as_str());
        }
        Ok(Self {
            http:    builder.build()?,
            api_url: config.api_url.trim_end_matches('/').to_owned(),
        })
    }

    /// The URL a call with action code `method` is sent to.
    pub fn endpoint(&self, method: u32) -> String {
        format!("{}/{method}", self.api_url)
    }
}

impl Transport for HttpTransport {
    async fn post(
        &self,
        method: u32,
        body:   Vec<u8>,
        token:  Option<&str>,
    ) -> Result<Vec<u8>, TransportError> {
        let mut req = self.http.post(self.endpoint(method)).body(body);
        if let Some(t) = token {
            req = req.header(PLAYER_TOKEN_HEADER, t);
        }

        let resp = req.send().await.inspect_err(|e| {
            log::warn!("[playerio] POST {method} failed: {e}");
        })?;

        let status = resp.status();
        if !status.is_success() {
            log::warn!("[playerio] POST {method} → HTTP {status}");
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(resp.bytes().await?.to_vec())
    }
}
