//! # Spotify Integration Module
//!
//! Authenticated access to the Spotify Web API endpoints playlist generation
//! is built from.
//!
//! ```text
//! CLI / playlist assembler
//!          ↓
//! SpotifyClient (bearer auth, one-shot 401 retry)
//!          ↓
//! TokenProvider (current token, refresh)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## API Coverage
//!
//! - `GET /artists/{id}/top-tracks` - an artist's most popular tracks in one market
//! - `GET /search?type=track` - tracks for a `genre:` query
//! - `GET /search?type=artist` - artist picker
//!
//! ## Authentication
//!
//! [`SpotifyClient::fetch_with_auth`] asks its [`TokenProvider`] for the
//! current token, falling back to a refresh when none is held. A 401
//! response triggers exactly one refresh and one retry; any other non-2xx
//! status is reported as [`SpotifyError::Http`](crate::error::SpotifyError::Http)
//! carrying the status code. There is no backoff and no rate-limit handling:
//! requests are sent as soon as they are asked for.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let tokens = Arc::new(TokenManager::load().await?);
//! let client = SpotifyClient::new(tokens);
//!
//! let top = client.artist_top_tracks("4NHQUGzhtTLFvgF5SZesLK").await?;
//! let rock = client.search_tracks_by_genre("rock").await?;
//! ```

mod artists;
mod client;
mod tracks;

pub use client::SpotifyClient;
pub use client::TokenProvider;
