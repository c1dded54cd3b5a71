//! Configuration management for spotmix.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

/// Market used when fetching an artist's top tracks.
pub const DEFAULT_MARKET: &str = "US";

/// Page size of the genre track search.
pub const GENRE_SEARCH_LIMIT: u32 = 20;

/// Page size of the artist picker search.
pub const ARTIST_SEARCH_LIMIT: u32 = 10;

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from `spotmix/.env` in the local data directory.
///
/// The directory is created when missing so users know where to drop the
/// file. A missing `.env` file is not an error; variables may come straight
/// from the environment.
///
/// The file is looked up in:
/// - Linux: `~/.local/share/spotmix/.env`
/// - macOS: `~/Library/Application Support/spotmix/.env`
/// - Windows: `%LOCALAPPDATA%/spotmix/.env`
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Root of everything spotmix keeps on disk.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotmix");
    path
}

/// Location of the cached access token.
pub fn token_cache_path() -> PathBuf {
    data_dir().join("cache").join("token.json")
}

/// Base URL of the Spotify Web API, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Token endpoint used for refresh and client-credentials grants.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

pub fn spotify_client_id() -> Option<String> {
    non_empty_var("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// The client secret should be kept confidential and never exposed in logs.
pub fn spotify_client_secret() -> Option<String> {
    non_empty_var("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

pub fn spotify_market() -> String {
    non_empty_var("SPOTIFY_MARKET").unwrap_or_else(|| DEFAULT_MARKET.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
