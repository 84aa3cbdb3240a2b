//! Configuration management for the Spotify catalog analyser.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. The client-credentials flow needs two secrets, the
//! client id and the client secret; the API endpoints can be overridden for testing.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (endpoints only)

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{Res, ScanError};

pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SECRET_KEY";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Client id and secret used for the client-credentials token exchange.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// Loads environment variables from `.env` files.
///
/// The working directory is consulted first, then `spotalyzer/.env` in the
/// platform-specific local data directory:
/// - Linux: `~/.local/share/spotalyzer/.env`
/// - macOS: `~/Library/Application Support/spotalyzer/.env`
/// - Windows: `%LOCALAPPDATA%/spotalyzer/.env`
///
/// Variables that are already set are never overwritten. A missing file is
/// skipped; a file that cannot be parsed is an error. The data directory is
/// created when absent so users find the place to drop their `.env`.
///
/// # Errors
///
/// Returns [`ScanError::Io`] if the data directory cannot be created and
/// [`ScanError::Config`] if either `.env` file is malformed.
pub async fn load_env() -> Res<()> {
    skip_missing(dotenv::dotenv(), ".env")?;

    let path = data_env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    load_env_file(&path)
}

/// Loads one `.env` file; a missing file is skipped, a malformed one is a
/// [`ScanError::Config`].
pub fn load_env_file(path: &Path) -> Res<()> {
    skip_missing(dotenv::from_path(path), &path.display().to_string())
}

fn skip_missing<T>(result: Result<T, dotenv::Error>, origin: &str) -> Res<()> {
    match result {
        Ok(_) | Err(dotenv::Error::Io(_)) => Ok(()),
        Err(e) => Err(ScanError::Config(format!("{}: {}", origin, e))),
    }
}

/// Location of the `.env` file in the local data directory.
pub fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotalyzer/.env");
    path
}

/// Returns the client credentials from `CLIENT_ID` and `SECRET_KEY`.
///
/// # Errors
///
/// Returns [`ScanError::Config`] naming the first variable that is unset or empty.
pub fn credentials() -> Res<Credentials> {
    Ok(Credentials {
        client_id: required(CLIENT_ID_VAR)?,
        client_secret: required(CLIENT_SECRET_VAR)?,
    })
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    optional(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Returns the token endpoint used for the client-credentials exchange.
pub fn spotify_apitoken_url() -> String {
    optional(TOKEN_URL_VAR).unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string())
}

fn required(name: &str) -> Res<String> {
    optional(name).ok_or_else(|| ScanError::Config(format!("{} must be set", name)))
}

fn optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_env_file(&dir.path().join(".env")).is_ok());
    }

    #[test]
    fn malformed_env_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "NOT A VALID LINE\n").unwrap();

        let err = load_env_file(&path).unwrap_err();
        assert!(matches!(err, ScanError::Config(_)));
        assert!(err.to_string().contains(".env"));
    }

    #[test]
    fn valid_env_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "SPOTALYZER_CONFIG_TEST_VALUE=loaded\n").unwrap();

        load_env_file(&path).unwrap();
        assert_eq!(
            env::var("SPOTALYZER_CONFIG_TEST_VALUE").as_deref(),
            Ok("loaded")
        );
    }
}
