use tabled::Table;

use crate::{
    preferences::{MoodPreset, PopularityRange},
    types::PresetTableRow,
};

pub fn presets() {
    let popularity: Vec<PresetTableRow> = PopularityRange::PRESETS
        .iter()
        .map(|(name, range)| PresetTableRow {
            preset: name.to_string(),
            values: format!("{}-{}", range.min(), range.max()),
        })
        .collect();
    println!("Popularity\n{}", Table::new(popularity));

    let moods: Vec<PresetTableRow> = MoodPreset::ALL
        .iter()
        .map(|preset| PresetTableRow {
            preset: preset.name().to_string(),
            values: preset.mood().to_string(),
        })
        .collect();
    println!("\nMood\n{}", Table::new(moods));
}
