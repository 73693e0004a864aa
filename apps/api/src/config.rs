use anyhow::{Context, Result};

const DEFAULT_PORT: &str = "8080";
const DEFAULT_MAX_BODY_BYTES: &str = "10485760";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on request bodies, base64 payload included.
    pub max_body_bytes: usize,
    /// Single allowed CORS origin. `None` means permissive.
    pub cors_allow_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .unwrap_or_else(|| DEFAULT_MAX_BODY_BYTES.to_string())
                .parse::<usize>()
                .context("MAX_BODY_BYTES must be a non-negative integer")?,
            cors_allow_origin: lookup("CORS_ALLOW_ORIGIN").filter(|v| !v.trim().is_empty()),
        })
    }
}
