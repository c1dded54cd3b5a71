use std::path::PathBuf;

use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotmix::{
    cli, config, error,
    preferences::{DecadeToken, MoodPreset, PopularityRange},
    utils::{self, SortOrder},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Obtain and cache an access token (client credentials)
    Auth,

    /// Generate a playlist from preferences
    Playlist(PlaylistOptions),

    /// Search artists to pick ids from
    Artists(ArtistsOptions),

    /// List selectable genre seeds
    Genres(GenresOptions),

    /// Show popularity and mood presets
    Presets,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// JSON preferences file; flags below replace the matching fields
    #[clap(long)]
    pub preferences: Option<PathBuf>,

    /// Spotify artist id; can be repeated (max 5)
    #[clap(long = "artist", action = ArgAction::Append)]
    pub artists: Vec<String>,

    /// Genre seed; can be repeated (max 5)
    #[clap(long = "genre", action = ArgAction::Append)]
    pub genres: Vec<String>,

    /// Decade (1980) or custom range (2000-2010, end excluded); can be repeated
    #[clap(long = "decade", value_parser = utils::parse_decade, action = ArgAction::Append)]
    pub decades: Vec<DecadeToken>,

    /// Popularity range MIN-MAX or preset (underground, popular, mainstream)
    #[clap(long, value_parser = utils::parse_popularity)]
    pub popularity: Option<PopularityRange>,

    /// Mood preset (happy, sad, energetic, calm)
    #[clap(long, value_parser = utils::parse_mood)]
    pub mood: Option<MoodPreset>,

    /// Sort order: title-asc, title-desc, artist-asc, artist-desc, random
    #[clap(long, value_parser = utils::parse_sort_order)]
    pub sort: Option<SortOrder>,

    /// Print the tracks as JSON instead of a table
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsOptions {
    /// Search for artists
    #[clap(long)]
    pub search: String,
}

#[derive(Parser, Debug, Clone)]
pub struct GenresOptions {
    /// Only show genres containing this text
    #[clap(long)]
    pub filter: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Playlist(opt) => {
            cli::playlist(cli::PlaylistRequest {
                preferences_file: opt.preferences,
                artists: opt.artists,
                genres: opt.genres,
                decades: opt.decades,
                popularity: opt.popularity,
                mood: opt.mood,
                sort: opt.sort,
                json: opt.json,
            })
            .await
        }
        Command::Artists(opt) => cli::search_artists(opt.search).await,
        Command::Genres(opt) => cli::list_genres(opt.filter),
        Command::Presets => cli::presets(),
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
