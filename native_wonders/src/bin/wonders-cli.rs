//! Entry point for the wonders table client.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use native_wonders::api::GameApi;
use native_wonders::config::Config;
use wonders_shared::ActionKind;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // If debug is on: show everything at DEBUG level.
    // Otherwise: our crates at INFO, everything else at WARN to keep the
    // table output readable.
    let log_filter = if cli.debug {
        "debug".to_string()
    } else {
        "native_wonders=info,wonders_shared=info,warn".to_string()
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));

    // Logs go to stderr; the table view owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(cli.debug)
        .with_file(cli.debug)
        .with_line_number(cli.debug)
        .init();

    let config_path = cli.config.clone();
    let mut cfg = Config::load_or_create(&config_path)
        .with_context(|| format!("loading or creating config '{}'", config_path.display()))?;

    // Apply CLI overrides in-memory (non-persistent by default)
    if let Some(server) = cli.server.clone() {
        cfg.server = server;
    }
    if let Some(game_id) = cli.game_id {
        cfg.game_id = game_id;
    }

    // Persist overrides only if requested
    if cli.persist {
        cfg.save(&config_path)
            .with_context(|| format!("saving updated config '{}'", config_path.display()))?;
    }

    let base = cfg.base_url()?;
    let api = GameApi::new(&base, cfg.game_id, cfg.request_timeout(), cfg.csrf())?;

    tracing::info!(server = %base, game_id = cfg.game_id, "wonders client ready");

    match cli.command {
        Commands::State => cli::run_state(&api, cli.json).await?,
        Commands::Play { card } => cli::run_hand_action(&api, ActionKind::Play, &card).await?,
        Commands::Build { card } => cli::run_hand_action(&api, ActionKind::Build, &card).await?,
        Commands::Discard { card } => {
            cli::run_hand_action(&api, ActionKind::Discard, &card).await?
        }
        Commands::TakeDiscard { card_id, action } => {
            cli::run_take_discard(&api, card_id, action).await?
        }
        Commands::HasPlayed => cli::run_has_played(&api, cli.json).await?,
        Commands::Watch => cli::run_watch(&api, cfg.poll_interval(), cli.json).await?,
    }

    Ok(())
}
