//! Request arguments, one struct per remote operation.
//!
//! Each implements [`ApiCall`], fixing its action code and reply types.
//! They also implement [`Deserializable`] so tests and tooling can inspect
//! what went on the wire.

use crate::deserialize::{Buffer, Deserializable, Result};
use crate::serialize::{self, Serializable};
use crate::types::{ConnectOutput, Empty, Error, KeyValuePair, RegistrationError};
use crate::ApiCall;
use crate::WireType::LengthDelimited;

// ─── Connect ──────────────────────────────────────────────────────────────────

/// Direct connect as an already-known user, optionally proven with an auth
/// hash (see `playerio_crypto::calc_auth`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Connect {
    pub game_id:       String,
    pub connection_id: String,
    pub user_id:       String,
    pub auth:          Option<String>,
}

impl ApiCall for Connect {
    const METHOD: u32 = 10;
    type Output = ConnectOutput;
    type Error = Error;
}

impl Serializable for Connect {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        serialize::write_string(1, &self.game_id, buf);
        serialize::write_string(2, &self.connection_id, buf);
        serialize::write_string(3, &self.user_id, buf);
        serialize::write_opt_string(4, self.auth.as_deref(), buf);
    }
}

impl Deserializable for Connect {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut out = Self::default();
        while let Some((field, wire_type)) = buf.read_key()? {
            match (field, wire_type) {
                (1, LengthDelimited) => out.game_id = buf.read_string()?,
                (2, LengthDelimited) => out.connection_id = buf.read_string()?,
                (3, LengthDelimited) => out.user_id = buf.read_string()?,
                (4, LengthDelimited) => out.auth = Some(buf.read_string()?),
                _ => buf.skip(wire_type)?,
            }
        }
        Ok(out)
    }
}

// ─── SimpleConnect ────────────────────────────────────────────────────────────

/// Log in against the game's built-in user store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimpleConnect {
    pub game_id:           String,
    pub username_or_email: String,
    pub password:          String,
}

impl ApiCall for SimpleConnect {
    const METHOD: u32 = 400;
    type Output = ConnectOutput;
    type Error = Error;
}

impl Serializable for SimpleConnect {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        serialize::write_string(1, &self.game_id, buf);
        serialize::write_string(2, &self.username_or_email, buf);
        serialize::write_string(3, &self.password, buf);
    }
}

impl Deserializable for SimpleConnect {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut out = Self::default();
        while let Some((field, wire_type)) = buf.read_key()? {
            match (field, wire_type) {
                (1, LengthDelimited) => out.game_id = buf.read_string()?,
                (2, LengthDelimited) => out.username_or_email = buf.read_string()?,
                (3, LengthDelimited) => out.password = buf.read_string()?,
                _ => buf.skip(wire_type)?,
            }
        }
        Ok(out)
    }
}

// ─── FacebookOAuthConnect ─────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacebookOAuthConnect {
    pub game_id:      String,
    pub access_token: String,
}

impl ApiCall for FacebookOAuthConnect {
    const METHOD: u32 = 418;
    type Output = ConnectOutput;
    type Error = Error;
}

impl Serializable for FacebookOAuthConnect {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        serialize::write_string(1, &self.game_id, buf);
        serialize::write_string(2, &self.access_token, buf);
    }
}

impl Deserializable for FacebookOAuthConnect {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut out = Self::default();
        while let Some((field, wire_type)) = buf.read_key()? {
            match (field, wire_type) {
                (1, LengthDelimited) => out.game_id = buf.read_string()?,
                (2, LengthDelimited) => out.access_token = buf.read_string()?,
                _ => buf.skip(wire_type)?,
            }
        }
        Ok(out)
    }
}

// ─── KongregateConnect ────────────────────────────────────────────────────────

/// Kongregate shares action code 400 with [`SimpleConnect`]; the service
/// tells them apart by payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KongregateConnect {
    pub game_id:         String,
    pub user_id:         String,
    pub game_auth_token: String,
}

impl ApiCall for KongregateConnect {
    const METHOD: u32 = 400;
    type Output = ConnectOutput;
    type Error = Error;
}

impl Serializable for KongregateConnect {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        serialize::write_string(1, &self.game_id, buf);
        serialize::write_string(2, &self.user_id, buf);
        serialize::write_string(3, &self.game_auth_token, buf);
    }
}

impl Deserializable for KongregateConnect {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut out = Self::default();
        while let Some((field, wire_type)) = buf.read_key()? {
            match (field, wire_type) {
                (1, LengthDelimited) => out.game_id = buf.read_string()?,
                (2, LengthDelimited) => out.user_id = buf.read_string()?,
                (3, LengthDelimited) => out.game_auth_token = buf.read_string()?,
                _ => buf.skip(wire_type)?,
            }
        }
        Ok(out)
    }
}

// ─── SteamConnect ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SteamConnect {
    pub game_id:              String,
    pub steam_app_id:         String,
    pub steam_session_ticket: String,
}

impl ApiCall for SteamConnect {
    const METHOD: u32 = 421;
    type Output = ConnectOutput;
    type Error = Error;
}

impl Serializable for SteamConnect {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        serialize::write_string(1, &self.game_id, buf);
        serialize::write_string(2, &self.steam_app_id, buf);
        serialize::write_string(3, &self.steam_session_ticket, buf);
    }
}

impl Deserializable for SteamConnect {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut out = Self::default();
        while let Some((field, wire_type)) = buf.read_key()? {
            match (field, wire_type) {
                (1, LengthDelimited) => out.game_id = buf.read_string()?,
                (2, LengthDelimited) => out.steam_app_id = buf.read_string()?,
                (3, LengthDelimited) => out.steam_session_ticket = buf.read_string()?,
                _ => buf.skip(wire_type)?,
            }
        }
        Ok(out)
    }
}

// ─── SimpleRegister ───────────────────────────────────────────────────────────

/// Create a user in the built-in store and connect as them.
///
/// Failures come back as [`RegistrationError`], which names the rejected input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimpleRegister {
    pub game_id:       String,
    pub username:      String,
    pub password:      String,
    pub email:         Option<String>,
    pub captcha_key:   Option<String>,
    pub captcha_value: Option<String>,
    pub extra_data:    Vec<KeyValuePair>,
}

impl ApiCall for SimpleRegister {
    const METHOD: u32 = 403;
    type Output = ConnectOutput;
    type Error = RegistrationError;
}

impl Serializable for SimpleRegister {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        serialize::write_string(1, &self.game_id, buf);
        serialize::write_string(2, &self.username, buf);
        serialize::write_string(3, &self.password, buf);
        serialize::write_opt_string(4, self.email.as_deref(), buf);
        serialize::write_opt_string(5, self.captcha_key.as_deref(), buf);
        serialize::write_opt_string(6, self.captcha_value.as_deref(), buf);
        serialize::write_repeated(7, &self.extra_data, buf);
    }
}

impl Deserializable for SimpleRegister {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut out = Self::default();
        while let Some((field, wire_type)) = buf.read_key()? {
            match (field, wire_type) {
                (1, LengthDelimited) => out.game_id = buf.read_string()?,
                (2, LengthDelimited) => out.username = buf.read_string()?,
                (3, LengthDelimited) => out.password = buf.read_string()?,
                (4, LengthDelimited) => out.email = Some(buf.read_string()?),
                (5, LengthDelimited) => out.captcha_key = Some(buf.read_string()?),
                (6, LengthDelimited) => out.captcha_value = Some(buf.read_string()?),
                (7, LengthDelimited) => out.extra_data.push(buf.read_message()?),
                _ => buf.skip(wire_type)?,
            }
        }
        Ok(out)
    }
}

// ─── SimpleRecoverPassword ────────────────────────────────────────────────────

/// Ask the service to e-mail a password reset link. No reply payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimpleRecoverPassword {
    pub game_id:           String,
    pub username_or_email: String,
}

impl ApiCall for SimpleRecoverPassword {
    const METHOD: u32 = 406;
    type Output = Empty;
    type Error = Error;
}

impl Serializable for SimpleRecoverPassword {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        serialize::write_string(1, &self.game_id, buf);
        serialize::write_string(2, &self.username_or_email, buf);
    }
}

impl Deserializable for SimpleRecoverPassword {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut out = Self::default();
        while let Some((field, wire_type)) = buf.read_key()? {
            match (field, wire_type) {
                (1, LengthDelimited) => out.game_id = buf.read_string()?,
                (2, LengthDelimited) => out.username_or_email = buf.read_string()?,
                _ => buf.skip(wire_type)?,
            }
        }
        Ok(out)
    }
}
