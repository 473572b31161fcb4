//! QuickConnect: authenticate through the game's built-in user store or a
//! third-party identity provider.

use std::collections::HashMap;
use std::sync::Arc;

use playerio_proto::{convert, functions};

use crate::errors::{InvocationError, PlayerIoError, RegistrationError};
use crate::transport::{HttpTransport, Transport};
use crate::{Channel, Client};

// ─── Registration builder ─────────────────────────────────────────────────────

/// A new user for [`QuickConnect::simple_register`].
///
/// ```rust
/// use playerio_client::Registration;
///
/// let reg = Registration::new("alice", "hunter2")
///     .email("alice@example.com")
///     .captcha("captcha-key", "XK3F");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Registration {
    pub username:      String,
    pub password:      String,
    pub email:         Option<String>,
    pub captcha_key:   Option<String>,
    pub captcha_value: Option<String>,
    pub extra_data:    Option<HashMap<String, String>>,
}

impl Registration {
    /// A registration with only the required fields set.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into(), ..Default::default() }
    }

    /// Address used for password recovery.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into()); self
    }

    /// Only if the game requires a captcha: the key of the captcha image shown
    /// and the text the user typed in response.
    pub fn captcha(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.captcha_key = Some(key.into());
        self.captcha_value = Some(value.into());
        self
    }

    /// Anything else to store with the user (gender, birthdate, …).
    pub fn extra_data(mut self, data: HashMap<String, String>) -> Self {
        self.extra_data = Some(data); self
    }

    fn into_request(self, game_id: &str) -> functions::SimpleRegister {
        functions::SimpleRegister {
            game_id:       game_id.to_owned(),
            extra_data:    convert::to_key_value_pairs(self.extra_data.as_ref()),
            username:      self.username,
            password:      self.password,
            email:         self.email,
            captcha_key:   self.captcha_key,
            captcha_value: self.captcha_value,
        }
    }
}

// ─── QuickConnect ─────────────────────────────────────────────────────────────

/// Entry points for every QuickConnect method.
///
/// Obtained from [`crate::PlayerIo::quick_connect`]. Nothing is validated
/// locally: empty or malformed values go to the service, which decides.
#[derive(Debug)]
pub struct QuickConnect<T: Transport = HttpTransport> {
    channel: Arc<Channel<T>>,
}

impl<T: Transport> QuickConnect<T> {
    pub(crate) fn new(channel: Arc<Channel<T>>) -> Self {
        Self { channel }
    }

    /// Connect as a user of the game's built-in user store.
    pub async fn simple_connect(
        &self,
        game_id:           &str,
        username_or_email: &str,
        password:          &str,
    ) -> Result<Client<T>, InvocationError<PlayerIoError>> {
        let req = functions::SimpleConnect {
            game_id:           game_id.to_owned(),
            username_or_email: username_or_email.to_owned(),
            password:          password.to_owned(),
        };
        let out = self.channel.request(&req, None).await?;
        Ok(Client::from_output(&self.channel, out))
    }

    /// Connect as a Facebook user, given their OAuth access token.
    pub async fn facebook_oauth_connect(
        &self,
        game_id:      &str,
        access_token: &str,
    ) -> Result<Client<T>, InvocationError<PlayerIoError>> {
        let req = functions::FacebookOAuthConnect {
            game_id:      game_id.to_owned(),
            access_token: access_token.to_owned(),
        };
        let out = self.channel.request(&req, None).await?;
        Ok(Client::from_output(&self.channel, out))
    }

    /// Connect as a Kongregate user.
    ///
    /// `game_auth_token` is the Kongregate token of this game for that user.
    pub async fn kongregate_connect(
        &self,
        game_id:         &str,
        user_id:         &str,
        game_auth_token: &str,
    ) -> Result<Client<T>, InvocationError<PlayerIoError>> {
        let req = functions::KongregateConnect {
            game_id:         game_id.to_owned(),
            user_id:         user_id.to_owned(),
            game_auth_token: game_auth_token.to_owned(),
        };
        let out = self.channel.request(&req, None).await?;
        Ok(Client::from_output(&self.channel, out))
    }

    /// Connect as a Steam user, given the Steam app id and their session ticket.
    pub async fn steam_connect(
        &self,
        game_id:              &str,
        steam_app_id:         &str,
        steam_session_ticket: &str,
    ) -> Result<Client<T>, InvocationError<PlayerIoError>> {
        let req = functions::SteamConnect {
            game_id:              game_id.to_owned(),
            steam_app_id:         steam_app_id.to_owned(),
            steam_session_ticket: steam_session_ticket.to_owned(),
        };
        let out = self.channel.request(&req, None).await?;
        Ok(Client::from_output(&self.channel, out))
    }

    /// Register a new user in the built-in user store and connect as them.
    ///
    /// A rejection comes back as [`RegistrationError`], naming the inputs the
    /// service refused.
    pub async fn simple_register(
        &self,
        game_id:      &str,
        registration: Registration,
    ) -> Result<Client<T>, InvocationError<RegistrationError>> {
        let req = registration.into_request(game_id);
        let out = self.channel.request(&req, None).await?;
        Ok(Client::from_output(&self.channel, out))
    }

    /// Start password recovery for a user who registered with an e-mail address.
    pub async fn simple_recover_password(
        &self,
        game_id:           &str,
        username_or_email: &str,
    ) -> Result<(), InvocationError<PlayerIoError>> {
        let req = functions::SimpleRecoverPassword {
            game_id:           game_id.to_owned(),
            username_or_email: username_or_email.to_owned(),
        };
        self.channel.request(&req, None).await?;
        log::info!("[playerio] Password recovery requested");
        Ok(())
    }
}
