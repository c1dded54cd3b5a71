//! Playlist assembly.
//!
//! [`generate_playlist`] gathers candidate tracks (top tracks of every
//! selected artist, then a genre search for every selected genre), filters
//! them by release window and popularity, drops repeated ids and keeps the
//! first [`MAX_PLAYLIST_TRACKS`].
//!
//! Requests are issued one at a time in input order. A failing request
//! aborts the whole generation; there is no per-artist or per-genre error
//! isolation.

use crate::{
    error::SpotifyError,
    preferences::{DecadeToken, PopularityRange, Preferences},
    spotify::SpotifyClient,
    types::Track,
    utils,
};

/// Upper bound on the length of a generated playlist.
pub const MAX_PLAYLIST_TRACKS: usize = 30;

/// Builds a playlist from the user's selections.
///
/// Fetches the top tracks of every selected artist, in selection order, then
/// searches tracks for every selected genre, in selection order, and hands
/// the concatenation to [`assemble`]. Empty selections issue no request.
///
/// # Arguments
///
/// * `client` - Authenticated client; every request goes through
///   [`SpotifyClient::fetch_with_auth`]
/// * `preferences` - Selection snapshot; it is not validated here
///
/// # Returns
///
/// - `Ok(Vec<Track>)` - At most [`MAX_PLAYLIST_TRACKS`] distinct tracks in
///   fetch order, each serialized back exactly as received
/// - `Err(SpotifyError)` - The first failing request; no partial playlist
///   is returned
///
/// # Example
///
/// ```
/// let tracks = generate_playlist(&client, &preferences).await?;
/// println!("{} tracks", tracks.len());
/// ```
pub async fn generate_playlist(
    client: &SpotifyClient,
    preferences: &Preferences,
) -> Result<Vec<Track>, SpotifyError> {
    let mut tracks: Vec<Track> = Vec::new();

    for artist in &preferences.artists {
        let top = client.artist_top_tracks(&artist.id).await?;
        log::debug!("{} top tracks for artist {}", top.len(), artist.id);
        tracks.extend(top);
    }

    for genre in &preferences.genres {
        let found = client.search_tracks_by_genre(genre).await?;
        log::debug!("{} tracks for genre {}", found.len(), genre);
        tracks.extend(found);
    }

    Ok(assemble(tracks, preferences))
}

/// Filtering, deduplication and truncation over already fetched tracks.
pub fn assemble(mut tracks: Vec<Track>, preferences: &Preferences) -> Vec<Track> {
    let fetched = tracks.len();

    filter_by_decades(&mut tracks, &preferences.decades);
    if let Some(range) = &preferences.popularity {
        filter_by_popularity(&mut tracks, range);
    }
    utils::dedupe_tracks(&mut tracks);
    tracks.truncate(MAX_PLAYLIST_TRACKS);

    log::debug!("assembled {} of {} fetched tracks", tracks.len(), fetched);
    tracks
}

/// Keeps tracks released inside any of `decades`. An empty selection keeps
/// everything; a track without a parsable release date never matches.
pub fn filter_by_decades(tracks: &mut Vec<Track>, decades: &[DecadeToken]) {
    if decades.is_empty() {
        return;
    }
    tracks.retain(|track| {
        track
            .release_date()
            .and_then(utils::release_year)
            .is_some_and(|year| decades.iter().any(|d| d.contains(year)))
    });
}

/// Keeps tracks whose popularity lies in `range`, both ends included. A
/// track without a popularity score never matches.
pub fn filter_by_popularity(tracks: &mut Vec<Track>, range: &PopularityRange) {
    tracks.retain(|track| track.popularity.is_some_and(|p| range.contains(p)));
}
