//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SUPABASE_URL` - Base URL of the Supabase project (PostgREST root)
//! - `SUPABASE_ANON_KEY` - Public API key sent with every remote request
//!
//! ## Optional
//! - `REBUILD_HOOK_URL` - Deploy hook POSTed after every committed mutation
//! - `ROSSI_CACHE_DIR` - Directory for the settings cache (default: `.`)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Clone)]
pub struct AdminConfig {
    /// PostgREST root, e.g. `https://xyz.supabase.co`
    pub supabase_url: Url,
    /// API key sent as both `apikey` and bearer token
    pub supabase_anon_key: SecretString,
    /// Deploy hook fired after each committed mutation, when configured
    pub rebuild_hook_url: Option<Url>,
    /// Directory holding the settings cache file
    pub cache_dir: PathBuf,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("supabase_url", &self.supabase_url.as_str())
            .field("supabase_anon_key", &"[REDACTED]")
            .field("rebuild_hook_url", &self.rebuild_hook_url)
            .field("cache_dir", &self.cache_dir)
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or if a URL
    /// variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let supabase_url = parse_url("SUPABASE_URL", get_required_env("SUPABASE_URL")?)?;
        let supabase_anon_key = SecretString::from(get_required_env("SUPABASE_ANON_KEY")?);
        let rebuild_hook_url = get_optional_env("REBUILD_HOOK_URL")
            .map(|value| parse_url("REBUILD_HOOK_URL", value))
            .transpose()?;
        let cache_dir = PathBuf::from(get_env_or_default("ROSSI_CACHE_DIR", "."));

        Ok(Self {
            supabase_url,
            supabase_anon_key,
            rebuild_hook_url,
            cache_dir,
        })
    }
}

fn parse_url(key: &str, value: String) -> Result<Url, ConfigError> {
    value
        .parse::<Url>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_the_api_key() {
        let config = AdminConfig {
            supabase_url: "https://example.supabase.co".parse().unwrap(),
            supabase_anon_key: SecretString::from("super-secret-key"),
            rebuild_hook_url: None,
            cache_dir: PathBuf::from("."),
        };

        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret-key"));
    }

    #[test]
    fn test_parse_url_rejects_garbage() {
        let err = parse_url("SUPABASE_URL", "not a url".to_string()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }
}
