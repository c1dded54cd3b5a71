use std::path::PathBuf;

use tabled::Table;

use crate::{
    error,
    error::{PreferencesError, SpotifyError},
    genres, info,
    playlist::generate_playlist,
    preferences::{DecadeToken, MoodPreset, PopularityRange, Preferences, SelectedArtist},
    success,
    types::{Track, TrackTableRow},
    utils::{self, SortOrder},
    warning,
};

use super::{spinner, spotify_client};

/// Everything the `playlist` command was asked for. Flags given on the
/// command line replace the matching field of the preferences file.
#[derive(Debug, Clone, Default)]
pub struct PlaylistRequest {
    pub preferences_file: Option<PathBuf>,
    pub artists: Vec<String>,
    pub genres: Vec<String>,
    pub decades: Vec<DecadeToken>,
    pub popularity: Option<PopularityRange>,
    pub mood: Option<MoodPreset>,
    pub sort: Option<SortOrder>,
    pub json: bool,
}

impl PlaylistRequest {
    pub async fn preferences(&self) -> Result<Preferences, PreferencesError> {
        let mut prefs = match &self.preferences_file {
            Some(path) => Preferences::from_file(path).await?,
            None => Preferences::default(),
        };

        if !self.artists.is_empty() {
            prefs.artists = self
                .artists
                .iter()
                .map(|id| SelectedArtist::new(id.as_str()))
                .collect();
        }
        if !self.genres.is_empty() {
            prefs.genres = self.genres.clone();
        }
        if !self.decades.is_empty() {
            prefs.decades = self.decades.clone();
        }
        if self.popularity.is_some() {
            prefs.popularity = self.popularity;
        }
        if let Some(preset) = self.mood {
            prefs.mood = Some(preset.mood());
        }

        prefs.validate()?;
        Ok(prefs)
    }
}

pub async fn playlist(request: PlaylistRequest) {
    let prefs = match request.preferences().await {
        Ok(p) => p,
        Err(e) => error!("Invalid preferences. Err: {}", e),
    };

    if !request.json {
        for genre in prefs.genres.iter().filter(|g| !genres::is_known_genre(g)) {
            warning!("'{}' is not a known genre seed, searching anyway", genre);
        }
        if prefs.artists.is_empty() && prefs.genres.is_empty() {
            warning!("No artists or genres selected, the playlist will be empty");
        }
    }

    let client = spotify_client().await;

    let pb = spinner("Generating playlist...");
    let mut tracks = match generate_playlist(&client, &prefs).await {
        Ok(tracks) => tracks,
        Err(SpotifyError::Unauthenticated) => {
            pb.finish_and_clear();
            error!("Not authenticated. Please run spotmix auth");
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to generate playlist. Err: {}", e);
        }
    };
    pb.finish_and_clear();

    if let Some(order) = request.sort {
        utils::sort_tracks(&mut tracks, order);
    }

    if request.json {
        match serde_json::to_string_pretty(&tracks) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("Failed to serialize playlist. Err: {}", e),
        }
        return;
    }

    for line in prefs.summary() {
        info!("{}", line);
    }

    if tracks.is_empty() {
        warning!("No tracks matched the selected filters");
        return;
    }

    println!("{}", Table::new(table_rows(&tracks)));
    success!("Generated playlist with {} tracks", tracks.len());
}

fn table_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            position: i + 1,
            title: t.title().to_string(),
            artists: t.artist_names(),
            year: t
                .release_date()
                .and_then(utils::release_year)
                .map(|y| y.to_string())
                .unwrap_or_default(),
            popularity: t.popularity.map(|p| p.to_string()).unwrap_or_default(),
        })
        .collect()
}
