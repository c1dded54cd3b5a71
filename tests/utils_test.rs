mod common;

use common::{ids, track};
use spotmix::{types::TrackArtist, utils::*};

fn with_artist(id: &str, title: &str, artist: &str) -> spotmix::types::Track {
    let mut t = track(id, "2000-01-01", 50);
    t.name = Some(title.to_string());
    t.artists = vec![TrackArtist {
        id: Some(format!("{id}_artist")),
        name: Some(artist.to_string()),
        extra: Default::default(),
    }];
    t
}

#[test]
fn test_release_year_precisions() {
    assert_eq!(release_year("1985-03-01"), Some(1985));
    assert_eq!(release_year("1985-03"), Some(1985));
    assert_eq!(release_year("1985"), Some(1985));
}

#[test]
fn test_release_year_rejects_garbage() {
    assert_eq!(release_year(""), None);
    assert_eq!(release_year("unknown"), None);
    assert_eq!(release_year("1985-13-01"), None);
    assert_eq!(release_year("85"), None);
}

#[test]
fn test_dedupe_tracks_keeps_first() {
    let mut tracks = vec![
        track("a", "2000", 1),
        track("b", "2000", 2),
        track("a", "2000", 3),
        track("c", "2000", 4),
        track("b", "2000", 5),
    ];

    dedupe_tracks(&mut tracks);

    assert_eq!(ids(&tracks), vec!["a", "b", "c"]);
    assert_eq!(tracks[0].popularity, Some(1));
    assert_eq!(tracks[1].popularity, Some(2));
}

#[test]
fn test_sort_by_title() {
    let mut tracks = vec![
        with_artist("1", "beta", "Zed"),
        with_artist("2", "Alpha", "Yan"),
        with_artist("3", "gamma", "Abe"),
    ];

    sort_tracks(&mut tracks, SortOrder::TitleAsc);
    assert_eq!(ids(&tracks), vec!["2", "1", "3"]);

    sort_tracks(&mut tracks, SortOrder::TitleDesc);
    assert_eq!(ids(&tracks), vec!["3", "1", "2"]);
}

#[test]
fn test_sort_by_first_artist() {
    let mut tracks = vec![
        with_artist("1", "x", "zed"),
        with_artist("2", "y", "Abe"),
        with_artist("3", "z", "mia"),
    ];

    sort_tracks(&mut tracks, SortOrder::ArtistAsc);
    assert_eq!(ids(&tracks), vec!["2", "3", "1"]);

    sort_tracks(&mut tracks, SortOrder::ArtistDesc);
    assert_eq!(ids(&tracks), vec!["1", "3", "2"]);
}

#[test]
fn test_random_sort_keeps_tracks() {
    let mut tracks: Vec<_> = (0..10).map(|i| track(&i.to_string(), "2000", 50)).collect();

    sort_tracks(&mut tracks, SortOrder::Random);

    let mut sorted: Vec<String> = tracks.iter().map(|t| t.id.clone()).collect();
    sorted.sort();
    let mut expected: Vec<String> = (0..10).map(|i| i.to_string()).collect();
    expected.sort();
    assert_eq!(sorted, expected);
}

#[test]
fn test_sort_order_parsing() {
    assert_eq!("title-asc".parse::<SortOrder>(), Ok(SortOrder::TitleAsc));
    assert_eq!("ARTIST-DESC".parse::<SortOrder>(), Ok(SortOrder::ArtistDesc));
    assert_eq!("random".parse::<SortOrder>(), Ok(SortOrder::Random));
    assert!("newest".parse::<SortOrder>().is_err());
    assert_eq!(SortOrder::ArtistAsc.to_string(), "artist-asc");
}

#[test]
fn test_cli_value_parsers() {
    assert!(parse_decade("1990").is_ok());
    assert!(parse_decade("1990s").is_err());
    assert!(parse_popularity("popular").is_ok());
    assert!(parse_popularity("10-5").is_err());
    assert!(parse_mood("energetic").is_ok());
    assert!(parse_sort_order("title-desc").is_ok());
}
