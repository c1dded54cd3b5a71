//! Spotify playlist generator library.
//!
//! Builds playlists from a snapshot of user preferences (favourite artists,
//! genres, decades, mood and a popularity window) using the Spotify Web API
//! catalogue endpoints.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Typed errors for the client, tokens and preferences
//! - `genres` - Selectable genre catalogue
//! - `management` - Token storage and refresh
//! - `playlist` - Playlist assembly (fetch, filter, deduplicate, truncate)
//! - `preferences` - Preference snapshot, decade tokens, presets
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use spotmix::{management::TokenManager, playlist, preferences::Preferences, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> spotmix::Res<()> {
//!     spotmix::config::load_env().await?;
//!     let client = SpotifyClient::new(Arc::new(TokenManager::load().await?));
//!     let prefs = Preferences::from_file("preferences.json").await?;
//!     let tracks = playlist::generate_playlist(&client, &prefs).await?;
//!     println!("{} tracks", tracks.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod genres;
pub mod management;
pub mod playlist;
pub mod preferences;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias used by the command layer, where errors from different
/// sources are only reported, never matched on.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a line prefixed with a blue `o`.
///
/// ```
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line prefixed with a green `✓`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line prefixed with a red `!` and exits with status 1.
///
/// Only for failures the command cannot continue from; code after the
/// macro never runs.
///
/// ```
/// error!("Cannot read preferences file: {}", path);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a line prefixed with a yellow `!`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
