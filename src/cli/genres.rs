use crate::{genres, info, warning};

pub fn list_genres(filter: Option<String>) {
    let matches = genres::filter_genres(filter.as_deref().unwrap_or(""));

    if matches.is_empty() {
        warning!("No genre matches '{}'", filter.unwrap_or_default());
        return;
    }

    info!("{} genres available", matches.len());
    for genre in matches {
        println!("  {genre}");
    }
}
