//! Player.IO connect demo.
//!
//! # What this does
//!
//! 1. Reads the game and credentials from the environment
//! 2. Simple-connects as `PLAYERIO_USERNAME`, or, when only
//!    `PLAYERIO_USER_ID` is set, direct-connects as that user (signing the
//!    request with `PLAYERIO_SHARED_SECRET` if given)
//! 3. Prints the resolved user id and the first characters of the session token
//!
//! # Run
//! ```text
//! PLAYERIO_GAME_ID=my-game-abc123 PLAYERIO_USERNAME=alice PLAYERIO_PASSWORD=hunter2 \
//!     cargo run -p playerio-connect
//! ```
//!
//! Logging: `RUST_LOG=playerio_client=debug` for per-request lines.

use std::env;

use playerio_client::{Client, Config, PlayerIo, calc_auth};

const DEFAULT_CONNECTION: &str = "public";

fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("playerio_client=info"),
    )
    .init();

    if let Err(e) = run().await {
        eprintln!("\n✗ {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let Some(game_id) = var("PLAYERIO_GAME_ID") else {
        return Err("set PLAYERIO_GAME_ID to the game id from the admin panel".into());
    };

    let mut config = Config::default();
    if let Some(url) = var("PLAYERIO_API_URL") {
        config.api_url = url;
    }
    let pio = PlayerIo::new(config)?;

    let client: Client = match (var("PLAYERIO_USERNAME"), var("PLAYERIO_USER_ID")) {
        (Some(username), _) => {
            let password = var("PLAYERIO_PASSWORD").unwrap_or_default();
            println!("🔑 Simple-connecting as {username} …");
            pio.quick_connect().simple_connect(&game_id, &username, &password).await?
        }
        (None, Some(user_id)) => {
            let connection = var("PLAYERIO_CONNECTION_ID")
                .unwrap_or_else(|| DEFAULT_CONNECTION.to_owned());
            let auth = var("PLAYERIO_SHARED_SECRET").map(|s| calc_auth(&user_id, &s));
            println!("🔌 Connecting as {user_id} via '{connection}' …");
            pio.connect(&game_id, &connection, &user_id, auth.as_deref()).await?
        }
        (None, None) => {
            return Err("set PLAYERIO_USERNAME (+ PLAYERIO_PASSWORD) or PLAYERIO_USER_ID".into());
        }
    };

    println!("✅ Connected");
    println!("   user id: {}", client.user_id());
    println!("   token:   {}…", token_prefix(client.token()));
    Ok(())
}

/// First 8 characters of a session token; the rest is never printed.
fn token_prefix(token: &str) -> &str {
    token.char_indices().nth(8).map_or(token, |(i, _)| &token[..i])
}

#[cfg(test)]
mod tests {
    use super::token_prefix;

    #[test]
    fn token_is_truncated() {
        assert_eq!(token_prefix("0123456789abcdef"), "01234567");
        assert_eq!(token_prefix("short"), "short");
        assert_eq!(token_prefix("ééééééééé"), "éééééééé");
    }
}
