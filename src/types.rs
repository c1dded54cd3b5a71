use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// A track as returned by the catalogue endpoints.
///
/// Only `id`, `popularity` and `album.release_date` drive playlist assembly.
/// Fields not modelled here are kept in `extra`. Absent optional fields stay
/// absent when serialized back out (`artists` is always written), and a
/// `null` where a string is expected does not fail the whole response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<TrackAlbum>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub artists: Vec<TrackArtist>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Track {
    /// Track title, empty when the API sent none.
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn release_date(&self) -> Option<&str> {
        self.album.as_ref().and_then(|a| a.release_date.as_deref())
    }

    /// Comma separated artist names, skipping artists without a name.
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .filter_map(|a| a.name.as_deref())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn spotify_url(&self) -> Option<&str> {
        self.extra
            .get("external_urls")
            .and_then(|urls| urls.get("spotify"))
            .and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackAlbum {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackArtist {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Decodes a JSON array item by item, dropping entries that do not fit `T`
/// (a `null` slot, a track without an id) instead of failing the whole list.
/// A missing or `null` array yields an empty list.
fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                log::debug!("skipping malformed item: {e}");
                None
            }
        })
        .collect())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub followers: Option<Followers>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default, deserialize_with = "lenient_items")]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchTracksResponse {
    #[serde(default)]
    pub tracks: Option<Page<Track>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchArtistsResponse {
    #[serde(default)]
    pub artists: Option<Page<Artist>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Page<T> {
    #[serde(default = "Vec::new", deserialize_with = "lenient_items")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub title: String,
    pub artists: String,
    pub year: String,
    pub popularity: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub id: String,
    pub name: String,
    pub genres: String,
    pub popularity: String,
    pub followers: String,
}

impl From<Artist> for ArtistTableRow {
    /// Shows at most three genres; missing popularity or follower counts
    /// render as empty cells.
    fn from(artist: Artist) -> Self {
        ArtistTableRow {
            id: artist.id,
            name: artist.name,
            genres: artist
                .genres
                .into_iter()
                .take(3)
                .collect::<Vec<_>>()
                .join(","),
            popularity: artist
                .popularity
                .map(|p| p.to_string())
                .unwrap_or_default(),
            followers: artist
                .followers
                .map(|f| f.total.to_string())
                .unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
pub struct PresetTableRow {
    pub preset: String,
    pub values: String,
}
