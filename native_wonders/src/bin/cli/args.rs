use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "wonders-cli", version, about = "Table client for the wonders game server", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(long, default_value = "wonders-cli.toml")]
    pub config: PathBuf,

    /// Server base URL (overrides config), e.g. http://localhost:8080
    #[arg(long)]
    pub server: Option<String>,

    /// Game to attach to (overrides config)
    #[arg(long)]
    pub game_id: Option<u64>,

    /// Persist CLI overrides back to the config file
    #[arg(long, default_value_t = false)]
    pub persist: bool,

    /// Output JSON instead of human-readable text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Fetch the current snapshot and render the table
    State,
    /// Play a card from your hand
    Play { card: String },
    /// Build a wonder stage with a card from your hand
    Build { card: String },
    /// Discard a card from your hand
    Discard { card: String },
    /// Pick a card from the discard pile (build-from-discard effect)
    TakeDiscard {
        card_id: u64,
        /// What to do with the picked card
        #[arg(long, value_enum, default_value_t = PickAction::Play)]
        action: PickAction,
    },
    /// Legacy turn check (superseded by the snapshot's available actions)
    HasPlayed,
    /// Poll the server and keep the table view in sync
    Watch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PickAction {
    Play,
    Build,
}
