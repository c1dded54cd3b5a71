//! User preferences driving one playlist generation.
//!
//! The JSON shape matches what the dashboard persisted:
//!
//! ```json
//! {
//!   "artists": [{ "id": "0oSGxfWSnnOXhD2fKuz2Gy", "name": "David Bowie" }],
//!   "genres": ["glam", "rock"],
//!   "decades": ["1970", "2000-2010"],
//!   "mood": { "energy": 70, "valence": 90, "danceability": 60, "acousticness": 20 },
//!   "popularity": [50, 100]
//! }
//! ```

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::PreferencesError;

pub const MAX_SELECTED_ARTISTS: usize = 5;
pub const MAX_SELECTED_GENRES: usize = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    #[serde(default)]
    pub artists: Vec<SelectedArtist>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub decades: Vec<DecadeToken>,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub popularity: Option<PopularityRange>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectedArtist {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl SelectedArtist {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

impl Preferences {
    /// Loads a preferences snapshot from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - File holding `{ "artists": [...], "genres": [...], "decades": [...],
    ///   "mood": {...}, "popularity": [min, max] }`; every key is optional
    ///
    /// # Returns
    ///
    /// - `Ok(Preferences)` - Parsed snapshot; decade and popularity values
    ///   are already checked, limits are not (see [`Preferences::validate`])
    /// - `Err(PreferencesError::Io)` - The file could not be read
    /// - `Err(PreferencesError::Parse)` - Invalid JSON or an invalid value
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, PreferencesError> {
        let content = async_fs::read_to_string(path.as_ref()).await?;
        let prefs: Preferences = serde_json::from_str(&content)?;
        Ok(prefs)
    }

    /// Enforces the selection limits and the value ranges. Decade tokens and
    /// popularity ranges are already checked when they are constructed.
    pub fn validate(&self) -> Result<(), PreferencesError> {
        if self.artists.len() > MAX_SELECTED_ARTISTS {
            return Err(PreferencesError::TooManyArtists {
                count: self.artists.len(),
                limit: MAX_SELECTED_ARTISTS,
            });
        }
        if self.genres.len() > MAX_SELECTED_GENRES {
            return Err(PreferencesError::TooManyGenres {
                count: self.genres.len(),
                limit: MAX_SELECTED_GENRES,
            });
        }
        if let Some(mood) = &self.mood {
            mood.validate()?;
        }
        Ok(())
    }

    /// Human readable "filters used" lines.
    pub fn summary(&self) -> Vec<String> {
        let artists = or_dash(
            self.artists
                .iter()
                .map(|a| a.display_name().to_string())
                .collect(),
        );
        let genres = or_dash(self.genres.clone());
        let decades = or_dash(self.decades.iter().map(|d| d.to_string()).collect());
        let popularity = self
            .popularity
            .map(|p| format!("{} – {}", p.min(), p.max()))
            .unwrap_or_else(|| "—".to_string());
        let mood = self
            .mood
            .map(|m| m.to_string())
            .unwrap_or_else(|| "—".to_string());

        vec![
            format!("Artists: {artists}"),
            format!("Genres: {genres}"),
            format!("Decades: {decades}"),
            format!("Popularity: {popularity}"),
            format!("Mood: {mood}"),
        ]
    }
}

fn or_dash(items: Vec<String>) -> String {
    if items.is_empty() {
        "—".to_string()
    } else {
        items.join(", ")
    }
}

/// A selected release window.
///
/// `Decade(1980)` covers 1980..=1989. `Range { start: 2000, end: 2010 }`
/// covers 2000..2010, end excluded. The two windows are deliberately not
/// normalized to the same convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DecadeToken {
    Decade(i32),
    Range { start: i32, end: i32 },
}

impl DecadeToken {
    /// Whether a release `year` falls inside this window.
    pub fn contains(&self, year: i32) -> bool {
        match *self {
            DecadeToken::Decade(start) => year >= start && year <= start + 9,
            DecadeToken::Range { start, end } => year >= start && year < end,
        }
    }
}

impl FromStr for DecadeToken {
    type Err = PreferencesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let invalid = || PreferencesError::InvalidDecade(s.to_string());

        match token.split_once('-') {
            None => {
                if token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()) {
                    token.parse().map(DecadeToken::Decade).map_err(|_| invalid())
                } else {
                    Err(invalid())
                }
            }
            Some((start, end)) => {
                let start = parse_year(start).ok_or_else(invalid)?;
                let end = parse_year(end).ok_or_else(invalid)?;
                if start >= end {
                    return Err(invalid());
                }
                Ok(DecadeToken::Range { start, end })
            }
        }
    }
}

fn parse_year(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for DecadeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecadeToken::Decade(start) => write!(f, "{start}"),
            DecadeToken::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

impl TryFrom<String> for DecadeToken {
    type Error = PreferencesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DecadeToken> for String {
    fn from(token: DecadeToken) -> Self {
        token.to_string()
    }
}

/// Inclusive popularity window, `0 <= min <= max <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u32; 2]", into = "[u32; 2]")]
pub struct PopularityRange {
    min: u32,
    max: u32,
}

impl PopularityRange {
    pub const UNDERGROUND: PopularityRange = PopularityRange { min: 0, max: 50 };
    pub const POPULAR: PopularityRange = PopularityRange { min: 50, max: 80 };
    pub const MAINSTREAM: PopularityRange = PopularityRange { min: 80, max: 100 };

    pub const PRESETS: [(&'static str, PopularityRange); 3] = [
        ("Underground", Self::UNDERGROUND),
        ("Popular", Self::POPULAR),
        ("Mainstream", Self::MAINSTREAM),
    ];

    pub fn new(min: u32, max: u32) -> Result<Self, PreferencesError> {
        if min > max || max > 100 {
            return Err(PreferencesError::InvalidPopularity { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, popularity: u32) -> bool {
        popularity >= self.min && popularity <= self.max
    }
}

impl Default for PopularityRange {
    fn default() -> Self {
        Self { min: 0, max: 100 }
    }
}

impl TryFrom<[u32; 2]> for PopularityRange {
    type Error = PreferencesError;

    fn try_from([min, max]: [u32; 2]) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl From<PopularityRange> for [u32; 2] {
    fn from(range: PopularityRange) -> Self {
        [range.min, range.max]
    }
}

/// Accepts `MIN-MAX` or a preset name (case-insensitive).
impl FromStr for PopularityRange {
    type Err = PreferencesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if let Some((_, preset)) = Self::PRESETS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value))
        {
            return Ok(*preset);
        }

        let (min, max) = value
            .split_once('-')
            .ok_or_else(|| PreferencesError::UnknownPopularity(s.to_string()))?;
        let min = min
            .trim()
            .parse::<u32>()
            .map_err(|_| PreferencesError::UnknownPopularity(s.to_string()))?;
        let max = max
            .trim()
            .parse::<u32>()
            .map_err(|_| PreferencesError::UnknownPopularity(s.to_string()))?;
        Self::new(min, max)
    }
}

/// Audio-feature targets, each between 0 and 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    pub energy: u32,
    pub valence: u32,
    pub danceability: u32,
    pub acousticness: u32,
}

impl Default for Mood {
    fn default() -> Self {
        Self {
            energy: 50,
            valence: 50,
            danceability: 50,
            acousticness: 50,
        }
    }
}

impl Mood {
    pub fn validate(&self) -> Result<(), PreferencesError> {
        let fields = [
            ("energy", self.energy),
            ("valence", self.valence),
            ("danceability", self.danceability),
            ("acousticness", self.acousticness),
        ];
        match fields.into_iter().find(|(_, value)| *value > 100) {
            Some((field, value)) => Err(PreferencesError::InvalidMood { field, value }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Energy {}, Valence {}, Danceability {}, Acousticness {}",
            self.energy, self.valence, self.danceability, self.acousticness
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodPreset {
    Happy,
    Sad,
    Energetic,
    Calm,
}

impl MoodPreset {
    pub const ALL: [MoodPreset; 4] = [
        MoodPreset::Happy,
        MoodPreset::Sad,
        MoodPreset::Energetic,
        MoodPreset::Calm,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MoodPreset::Happy => "Happy",
            MoodPreset::Sad => "Sad",
            MoodPreset::Energetic => "Energetic",
            MoodPreset::Calm => "Calm",
        }
    }

    pub fn mood(&self) -> Mood {
        let (energy, valence, danceability, acousticness) = match self {
            MoodPreset::Happy => (70, 90, 60, 20),
            MoodPreset::Sad => (30, 20, 30, 70),
            MoodPreset::Energetic => (95, 70, 80, 10),
            MoodPreset::Calm => (20, 50, 40, 80),
        };
        Mood {
            energy,
            valence,
            danceability,
            acousticness,
        }
    }
}

impl FromStr for MoodPreset {
    type Err = PreferencesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PreferencesError::UnknownMood(s.to_string()))
    }
}
