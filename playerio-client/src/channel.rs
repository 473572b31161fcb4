//! The request channel: serialize, post, decode the reply envelope.
//!
//! Reply envelope layout:
//!
//! ```text
//! [has_header: u8]                       1 = header follows
//!   [len: u16 BE][ResponseHeader; len]   only when has_header == 1
//! [ok: u8]                               1 = success
//! [payload…]                             C::Output if ok, else C::Error
//! ```

use playerio_proto::types::ResponseHeader;
use playerio_proto::{ApiCall, Cursor, Deserializable};

use crate::errors::InvocationError;
use crate::transport::{HttpTransport, Transport};

/// Dispatches typed [`ApiCall`]s over a [`Transport`].
///
/// Holds no per-call state, so one channel can serve any number of
/// concurrent calls and sessions.
#[derive(Debug)]
pub struct Channel<T: Transport = HttpTransport> {
    transport: T,
}

impl<T: Transport> Channel<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Access the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `call` and decode its reply.
    ///
    /// `token` is attached for calls made on behalf of a connected session.
    /// Errors are returned exactly as received; nothing is retried.
    pub async fn request<C: ApiCall>(
        &self,
        call:  &C,
        token: Option<&str>,
    ) -> Result<C::Output, InvocationError<C::Error>> {
        let body = call.to_bytes();
        log::debug!("[playerio] → method {} ({} bytes)", C::METHOD, body.len());

        let envelope = self.transport.post(C::METHOD, body, token).await?;
        let reply = decode_envelope::<C>(&envelope);
        if let Err(InvocationError::Deserialize(e)) = &reply {
            log::warn!("[playerio] ← method {} undecodable: {e}", C::METHOD);
        } else {
            let outcome = if reply.is_ok() { "ok" } else { "error reply" };
            log::debug!("[playerio] ← method {} {outcome}", C::METHOD);
        }
        reply
    }
}

/// Split a reply envelope into the success payload or the typed error.
pub fn decode_envelope<C: ApiCall>(
    envelope: &[u8],
) -> Result<C::Output, InvocationError<C::Error>> {
    let mut cur = Cursor::from_slice(envelope);

    if cur.read_byte()? == 1 {
        let len = u16::from_be_bytes([cur.read_byte()?, cur.read_byte()?]) as usize;
        let header = ResponseHeader::from_bytes(cur.read_slice(len)?)?;
        if header.token.is_some() {
            log::trace!("[playerio] reply header carries a player token");
        }
    }

    let ok = cur.read_byte()? == 1;
    let payload = cur.read_rest();
    if ok {
        Ok(C::Output::from_bytes(payload)?)
    } else {
        Err(InvocationError::Api(C::Error::from_bytes(payload)?))
    }
}
