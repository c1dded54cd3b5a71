//! Error types shared by the Spotify client, the token manager and the
//! preferences model.

use thiserror::Error;

/// Failure surface of every authenticated Spotify request.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// No access token could be obtained, not even after one refresh.
    #[error("unauthenticated: no valid Spotify token could be obtained")]
    Unauthenticated,

    /// The final response (after at most one retry) was not in the 2xx range.
    #[error("upstream HTTP error {status}")]
    Http { status: u16 },

    /// Transport failure, or a 2xx body that could not be decoded.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint path or query could not be turned into a URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl SpotifyError {
    /// `true` when the user has to run `spotmix auth` before retrying.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, SpotifyError::Unauthenticated)
    }

    /// HTTP status of an [`SpotifyError::Http`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            SpotifyError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

/// Rejections raised while building or validating [`crate::preferences::Preferences`].
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// More artists selected than [`crate::preferences::MAX_SELECTED_ARTISTS`].
    #[error("at most {limit} artists can be selected, got {count}")]
    TooManyArtists { count: usize, limit: usize },

    /// More genres selected than [`crate::preferences::MAX_SELECTED_GENRES`].
    #[error("at most {limit} genres can be selected, got {count}")]
    TooManyGenres { count: usize, limit: usize },

    /// Neither a four digit year nor a `start-end` range with `start < end`.
    #[error("invalid decade token '{0}': expected a year like 1980 or a range like 2000-2010")]
    InvalidDecade(String),

    /// Bounds outside `0..=100` or `min > max`.
    #[error("invalid popularity range {min}-{max}: expected 0 <= min <= max <= 100")]
    InvalidPopularity { min: u32, max: u32 },

    /// Text that is neither a preset name nor `MIN-MAX`.
    #[error("unknown popularity '{0}': expected MIN-MAX or one of underground, popular, mainstream")]
    UnknownPopularity(String),

    /// An energy or valence value above 100.
    #[error("mood value {field}={value} is outside 0..=100")]
    InvalidMood { field: &'static str, value: u32 },

    /// A mood preset name that does not exist.
    #[error("unknown mood preset '{0}': expected one of happy, sad, energetic, calm")]
    UnknownMood(String),

    /// The preferences file could not be read.
    #[error("cannot read preferences file: {0}")]
    Io(#[from] std::io::Error),

    /// The preferences file is not valid JSON or has the wrong shape.
    #[error("cannot parse preferences file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures while obtaining, renewing or caching an access token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// No client id or secret is configured, so no grant can be requested.
    #[error("missing client credentials: set SPOTIFY_API_AUTH_CLIENT_ID and SPOTIFY_API_AUTH_CLIENT_SECRET")]
    MissingCredentials,

    /// The token endpoint answered with a non-2xx status.
    #[error("token endpoint returned HTTP {0}")]
    Endpoint(u16),

    /// A 2xx token response without an `access_token` field.
    #[error("token response did not contain an access token")]
    MissingAccessToken,

    /// Transport failure talking to the token endpoint.
    #[error("token request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Reading or writing the on-disk token cache failed.
    #[error("token cache error: {0}")]
    Cache(String),
}
