use serde_json::json;
use spotmix::{
    error::PreferencesError,
    genres::{ALL_GENRES, filter_genres, is_known_genre},
    preferences::{DecadeToken, Mood, MoodPreset, PopularityRange, Preferences, SelectedArtist},
};

#[test]
fn test_decade_token_parsing() {
    assert_eq!("1980".parse::<DecadeToken>().unwrap(), DecadeToken::Decade(1980));
    assert_eq!(
        "2000-2010".parse::<DecadeToken>().unwrap(),
        DecadeToken::Range {
            start: 2000,
            end: 2010
        }
    );

    for bad in ["198", "80s", "2010-2000", "2000-2000", "abcd", "2000-", ""] {
        assert!(bad.parse::<DecadeToken>().is_err(), "{bad} should be rejected");
    }
}

#[test]
fn test_decade_token_windows() {
    let decade = DecadeToken::Decade(1980);
    assert!(decade.contains(1980));
    assert!(decade.contains(1985));
    assert!(decade.contains(1989));
    assert!(!decade.contains(1990));
    assert!(!decade.contains(1979));

    let range = DecadeToken::Range {
        start: 2000,
        end: 2010,
    };
    assert!(range.contains(2000));
    assert!(range.contains(2005));
    assert!(!range.contains(2010));
}

#[test]
fn test_popularity_range_validation_and_presets() {
    assert!(PopularityRange::new(0, 100).is_ok());
    assert!(PopularityRange::new(50, 50).is_ok());
    assert!(PopularityRange::new(60, 50).is_err());
    assert!(PopularityRange::new(0, 101).is_err());

    assert_eq!(
        "underground".parse::<PopularityRange>().unwrap(),
        PopularityRange::UNDERGROUND
    );
    assert_eq!(
        "Mainstream".parse::<PopularityRange>().unwrap(),
        PopularityRange::new(80, 100).unwrap()
    );
    assert_eq!(
        "20-70".parse::<PopularityRange>().unwrap(),
        PopularityRange::new(20, 70).unwrap()
    );
    assert!(matches!(
        "loud".parse::<PopularityRange>(),
        Err(PreferencesError::UnknownPopularity(_))
    ));
}

#[test]
fn test_mood_presets() {
    assert_eq!(
        "happy".parse::<MoodPreset>().unwrap().mood(),
        Mood {
            energy: 70,
            valence: 90,
            danceability: 60,
            acousticness: 20
        }
    );
    assert_eq!(MoodPreset::Calm.mood().acousticness, 80);
    assert!("angry".parse::<MoodPreset>().is_err());
    assert_eq!(Mood::default().energy, 50);
}

#[test]
fn test_preferences_json_shape() {
    let prefs: Preferences = serde_json::from_value(json!({
        "artists": [{ "id": "a1", "name": "Blondie" }],
        "genres": ["new-wave"],
        "decades": ["1970", "1978-1984"],
        "mood": null,
        "popularity": [40, 90]
    }))
    .unwrap();

    assert_eq!(prefs.artists[0].display_name(), "Blondie");
    assert_eq!(
        prefs.decades,
        vec![
            DecadeToken::Decade(1970),
            DecadeToken::Range {
                start: 1978,
                end: 1984
            }
        ]
    );
    assert_eq!(prefs.popularity, Some(PopularityRange::new(40, 90).unwrap()));
    assert!(prefs.mood.is_none());

    let back = serde_json::to_value(&prefs).unwrap();
    assert_eq!(back["decades"], json!(["1970", "1978-1984"]));
    assert_eq!(back["popularity"], json!([40, 90]));
}

#[test]
fn test_preferences_reject_bad_values() {
    assert!(serde_json::from_value::<Preferences>(json!({ "decades": ["nineties"] })).is_err());
    assert!(serde_json::from_value::<Preferences>(json!({ "popularity": [90, 10] })).is_err());
}

#[test]
fn test_selection_limits() {
    let mut prefs = Preferences {
        artists: (0..5).map(|i| SelectedArtist::new(format!("a{i}"))).collect(),
        genres: vec!["rock".to_string(); 5],
        ..Preferences::default()
    };
    assert!(prefs.validate().is_ok());

    prefs.artists.push(SelectedArtist::new("a5"));
    assert!(matches!(
        prefs.validate(),
        Err(PreferencesError::TooManyArtists { count: 6, limit: 5 })
    ));

    prefs.artists.pop();
    prefs.genres.push("jazz".to_string());
    assert!(matches!(
        prefs.validate(),
        Err(PreferencesError::TooManyGenres { count: 6, limit: 5 })
    ));
}

#[test]
fn test_mood_range_validation() {
    let prefs = Preferences {
        mood: Some(Mood {
            energy: 101,
            ..Mood::default()
        }),
        ..Preferences::default()
    };
    assert!(matches!(
        prefs.validate(),
        Err(PreferencesError::InvalidMood {
            field: "energy",
            value: 101
        })
    ));
}

#[test]
fn test_summary() {
    let empty = Preferences::default().summary();
    assert_eq!(
        empty,
        vec![
            "Artists: —",
            "Genres: —",
            "Decades: —",
            "Popularity: —",
            "Mood: —"
        ]
    );

    let prefs = Preferences {
        artists: vec![
            SelectedArtist {
                id: "a1".to_string(),
                name: "Blondie".to_string(),
            },
            SelectedArtist::new("a2"),
        ],
        genres: vec!["punk".to_string(), "disco".to_string()],
        decades: vec![DecadeToken::Decade(1970), "2000-2010".parse().unwrap()],
        mood: Some(MoodPreset::Sad.mood()),
        popularity: Some(PopularityRange::POPULAR),
    };
    let lines = prefs.summary();
    assert_eq!(lines[0], "Artists: Blondie, a2");
    assert_eq!(lines[1], "Genres: punk, disco");
    assert_eq!(lines[2], "Decades: 1970, 2000-2010");
    assert_eq!(lines[3], "Popularity: 50 – 80");
    assert_eq!(
        lines[4],
        "Mood: Energy 30, Valence 20, Danceability 30, Acousticness 70"
    );
}

#[tokio::test]
async fn test_preferences_from_file() {
    let path = std::env::temp_dir().join(format!("spotmix-prefs-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "artists": [], "genres": ["jazz"], "decades": ["1950"], "popularity": [0, 100] }"#,
    )
    .unwrap();

    let prefs = Preferences::from_file(&path).await.unwrap();
    assert_eq!(prefs.genres, vec!["jazz"]);
    assert_eq!(prefs.decades, vec![DecadeToken::Decade(1950)]);

    let _ = std::fs::remove_file(&path);

    assert!(matches!(
        Preferences::from_file(&path).await,
        Err(PreferencesError::Io(_))
    ));
}

#[test]
fn test_genre_catalogue() {
    assert_eq!(ALL_GENRES.len(), 124);
    assert!(is_known_genre("Hip-Hop"));
    assert!(!is_known_genre("vaporwave"));

    let rock = filter_genres("ROCK");
    assert!(rock.contains(&"alt-rock"));
    assert!(rock.contains(&"rock-n-roll"));
    assert!(rock.iter().all(|g| g.contains("rock")));

    assert_eq!(filter_genres("").len(), ALL_GENRES.len());
}
