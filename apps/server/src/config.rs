//! Server configuration loaded from the environment.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::{rngs::OsRng, RngCore};

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_DB_PATH: &str = "spendfolio.db";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_TOKEN_TTL_SECS: u64 = 60 * 60 * 24;

#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// HS256 signing key for access tokens.
    pub secret_key: String,
    pub token_ttl_secs: u64,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub static_dir: String,
    pub auth: AuthConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr = std::env::var("SPENDFOLIO_LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let db_path =
            std::env::var("SPENDFOLIO_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
        let static_dir = std::env::var("SPENDFOLIO_STATIC_DIR")
            .unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());

        let secret_key = std::env::var("SPENDFOLIO_SECRET_KEY").unwrap_or_else(|_| {
            // Tokens signed with an ephemeral key do not survive a restart.
            tracing::warn!("SPENDFOLIO_SECRET_KEY not set, generating an ephemeral signing key");
            let mut secret_bytes = [0u8; 32];
            OsRng.fill_bytes(&mut secret_bytes);
            BASE64.encode(secret_bytes)
        });

        let token_ttl_secs = std::env::var("SPENDFOLIO_TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

        Config {
            listen_addr,
            db_path,
            static_dir,
            auth: AuthConfig {
                secret_key,
                token_ttl_secs,
            },
        }
    }
}
