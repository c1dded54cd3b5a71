use std::{collections::HashSet, fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;

use crate::{
    preferences::{DecadeToken, MoodPreset, PopularityRange},
    types::Track,
};

/// Year of a Spotify release date.
///
/// Release dates come with `year`, `month` or `day` precision (`1985`,
/// `1985-03`, `1985-03-01`). Anything else yields `None`.
pub fn release_year(release_date: &str) -> Option<i32> {
    let date = release_date.trim();
    let full = match date.len() {
        4 => format!("{date}-01-01"),
        7 => format!("{date}-01"),
        _ => date.to_string(),
    };
    NaiveDate::parse_from_str(&full, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

/// Keeps the first occurrence of every track id, preserving order.
pub fn dedupe_tracks(tracks: &mut Vec<Track>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| seen_ids.insert(track.id.clone()));
}

/// Display order applied to a generated playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    TitleAsc,
    TitleDesc,
    ArtistAsc,
    ArtistDesc,
    Random,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title-asc" => Ok(SortOrder::TitleAsc),
            "title-desc" => Ok(SortOrder::TitleDesc),
            "artist-asc" => Ok(SortOrder::ArtistAsc),
            "artist-desc" => Ok(SortOrder::ArtistDesc),
            "random" => Ok(SortOrder::Random),
            other => Err(format!(
                "unknown sort order '{other}', expected title-asc, title-desc, artist-asc, artist-desc or random"
            )),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortOrder::TitleAsc => "title-asc",
            SortOrder::TitleDesc => "title-desc",
            SortOrder::ArtistAsc => "artist-asc",
            SortOrder::ArtistDesc => "artist-desc",
            SortOrder::Random => "random",
        };
        write!(f, "{s}")
    }
}

fn first_artist(track: &Track) -> String {
    track
        .artists
        .first()
        .and_then(|a| a.name.as_deref())
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// Reorders `tracks` in place.
///
/// Title and artist orders compare case-insensitively; a track without a
/// title or artist sorts as the empty string. `Random` shuffles.
pub fn sort_tracks(tracks: &mut [Track], order: SortOrder) {
    match order {
        SortOrder::TitleAsc => tracks.sort_by_key(|t| t.title().to_lowercase()),
        SortOrder::TitleDesc => {
            tracks.sort_by(|a, b| b.title().to_lowercase().cmp(&a.title().to_lowercase()))
        }
        SortOrder::ArtistAsc => tracks.sort_by_key(first_artist),
        SortOrder::ArtistDesc => tracks.sort_by(|a, b| first_artist(b).cmp(&first_artist(a))),
        SortOrder::Random => tracks.shuffle(&mut rand::rng()),
    }
}

/// Value parser for `--decade`.
pub fn parse_decade(s: &str) -> Result<DecadeToken, String> {
    s.parse::<DecadeToken>().map_err(|e| e.to_string())
}

/// Value parser for `--popularity`, accepting preset names or `MIN-MAX`.
pub fn parse_popularity(s: &str) -> Result<PopularityRange, String> {
    s.parse::<PopularityRange>().map_err(|e| e.to_string())
}

pub fn parse_mood(s: &str) -> Result<MoodPreset, String> {
    s.parse::<MoodPreset>().map_err(|e| e.to_string())
}

pub fn parse_sort_order(s: &str) -> Result<SortOrder, String> {
    s.parse::<SortOrder>()
}
