use tabled::Table;

use crate::{error, types::ArtistTableRow, warning};

use super::{spinner, spotify_client};

pub async fn search_artists(query: String) {
    let client = spotify_client().await;

    let pb = spinner("Searching artists...");
    let artists = match client.search_artists(&query).await {
        Ok(artists) => artists,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to search artists. Err: {}", e);
        }
    };
    pb.finish_and_clear();

    if artists.is_empty() {
        warning!("No artists found for '{}'", query);
        return;
    }

    let table_rows: Vec<ArtistTableRow> = artists.into_iter().map(ArtistTableRow::from).collect();

    println!("{}", Table::new(table_rows));
}
