//! # CLI Module
//!
//! User-facing commands of spotmix. Each command loads what it needs
//! (configuration, cached token, preferences), calls into the library and
//! renders the outcome with the `info!`/`success!`/`warning!`/`error!`
//! macros and `tabled` tables.
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Playlist assembly / Preferences
//!     ↓
//! Spotify client + Token manager
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotmix auth                                        # cache a client-credentials token
//! spotmix artists --search "talking heads"            # find artist ids
//! spotmix genres --filter rock                        # browse genre seeds
//! spotmix playlist --artist 2x9SpqnPi8rlE9pjHBwmSC --genre new-wave --decade 1980
//! spotmix playlist --preferences prefs.json --sort artist-asc
//! ```

use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, management::TokenManager, spotify::SpotifyClient};

mod artists;
mod auth;
mod genres;
mod playlist;
mod presets;

pub use artists::search_artists;
pub use auth::auth;
pub use genres::list_genres;
pub use playlist::PlaylistRequest;
pub use playlist::playlist;
pub use presets::presets;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

async fn spotify_client() -> SpotifyClient {
    let tokens = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run spotmix auth\n Error: {}",
                e
            );
        }
    };
    SpotifyClient::new(Arc::new(tokens))
}
