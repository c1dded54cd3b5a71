use crate::{
    config,
    error::SpotifyError,
    types::{SearchTracksResponse, Track},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Searches tracks of a genre: `GET /search?type=track&q=genre:{genre}&limit=20`.
    ///
    /// # Arguments
    ///
    /// * `genre` - Genre seed name such as `rock` or `hip-hop`
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Track>)` - Matching tracks in API order; empty when the
    ///   response has no `tracks.items`
    /// - `Err(SpotifyError)` - See [`SpotifyClient::fetch_with_auth`]
    pub async fn search_tracks_by_genre(&self, genre: &str) -> Result<Vec<Track>, SpotifyError> {
        let query = format!("genre:{genre}");
        let limit = config::GENRE_SEARCH_LIMIT.to_string();
        let url = self.endpoint(
            "search",
            &[("type", "track"), ("q", query.as_str()), ("limit", limit.as_str())],
        )?;
        let res: SearchTracksResponse = self.fetch_with_auth(url).await?;
        Ok(res.tracks.map(|page| page.items).unwrap_or_default())
    }
}
