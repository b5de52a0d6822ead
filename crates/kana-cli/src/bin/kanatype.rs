use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kana_cli::commands::{config_ops, convert_ops, deck_ops, play_ops};
use kana_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "kanatype", about = "Kana typing game for Anki vocabulary decks")]
struct Cli {
    /// Custom romaji rule TOML (see `romaji export`)
    #[arg(long = "romaji", global = true, value_name = "FILE")]
    romaji_file: Option<String>,
    /// Custom settings TOML (see `settings export`)
    #[arg(long = "settings", global = true, value_name = "FILE")]
    settings_file: Option<String>,
    /// Directory for the trace log (requires --features trace)
    #[arg(long, global = true, default_value = ".")]
    log_dir: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play with the cards of a deck
    Play {
        /// Anki collection file (collection.anki2)
        collection: String,
        /// Full deck name, levels separated by `::`
        deck: String,
    },
    /// Convert romaji to hiragana (reads stdin lines when no input is given)
    Convert {
        /// Romaji input
        #[arg(value_name = "ROMAJI")]
        input: Vec<String>,
        /// Show the result after every typed character
        #[arg(long)]
        steps: bool,
        /// Print structured results as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// List the decks of a collection
    Decks {
        /// Anki collection file (collection.anki2)
        collection: String,
    },
    /// Show the cards extracted from a deck
    Cards {
        /// Anki collection file (collection.anki2)
        collection: String,
        /// Full deck name, levels separated by `::`
        deck: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Romaji rule table
    Romaji {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Game settings
    Settings {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the embedded default TOML
    Export,
    /// Validate a custom TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let _trace = init_tracing(&cli.log_dir);
    config_ops::init_custom_config(cli.romaji_file.as_deref(), cli.settings_file.as_deref());

    match cli.command {
        Command::Play { collection, deck } => play_ops::play_cmd(&collection, &deck),
        Command::Convert { input, steps, json } => convert_ops::convert_cmd(&input, steps, json),
        Command::Decks { collection } => deck_ops::decks_cmd(&collection),
        Command::Cards {
            collection,
            deck,
            json,
        } => deck_ops::cards_cmd(&collection, &deck, json),
        Command::Romaji { action } => match action {
            ConfigAction::Export => config_ops::romaji_export(),
            ConfigAction::Validate { file } => config_ops::romaji_validate(&file),
        },
        Command::Settings { action } => match action {
            ConfigAction::Export => config_ops::settings_export(),
            ConfigAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
