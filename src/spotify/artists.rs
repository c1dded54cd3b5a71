use crate::{
    config,
    error::SpotifyError,
    types::{Artist, SearchArtistsResponse, TopTracksResponse, Track},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Fetches an artist's top tracks: `GET /artists/{id}/top-tracks?market={market}`.
    ///
    /// # Arguments
    ///
    /// * `artist_id` - Spotify artist id
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Track>)` - Top tracks for the client's market
    /// - `Err(SpotifyError)` - See [`SpotifyClient::fetch_with_auth`]
    ///
    /// Tracks come back in the order the API returned them. A body without
    /// a `tracks` array yields an empty list and malformed entries are skipped.
    pub async fn artist_top_tracks(&self, artist_id: &str) -> Result<Vec<Track>, SpotifyError> {
        let path = format!("artists/{artist_id}/top-tracks");
        let url = self.endpoint(&path, &[("market", self.market())])?;
        let res: TopTracksResponse = self.fetch_with_auth(url).await?;
        Ok(res.tracks)
    }

    /// Artist picker search: `GET /search?type=artist&q={query}&limit=10`.
    ///
    /// # Arguments
    ///
    /// * `query` - Free text, sent URL-encoded
    ///
    /// # Returns
    ///
    /// Up to ten matching artists; an empty list when nothing matched.
    pub async fn search_artists(&self, query: &str) -> Result<Vec<Artist>, SpotifyError> {
        let limit = config::ARTIST_SEARCH_LIMIT.to_string();
        let url = self.endpoint(
            "search",
            &[("q", query), ("type", "artist"), ("limit", limit.as_str())],
        )?;
        let res: SearchArtistsResponse = self.fetch_with_auth(url).await?;
        Ok(res.artists.map(|page| page.items).unwrap_or_default())
    }
}
