use std::time::Duration;

use anyhow::{bail, Context, Result};

use native_wonders::api::GameApi;
use native_wonders::poller;
use native_wonders::pretty::TerminalView;
use native_wonders::sync::GameSession;
use wonders_shared::ActionKind;

use super::args::PickAction;

/// Fetch one snapshot and render the table (or dump it as JSON).
pub async fn run_state(api: &GameApi, json: bool) -> Result<()> {
    let snapshot = api
        .player_game_state()
        .await
        .context("fetching game state")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }
    let mut view = TerminalView::stdout();
    let mut session = GameSession::new();
    session.apply_snapshot(snapshot, &mut view);
    Ok(())
}

/// Select a hand card by image name and submit a one-shot action for it.
pub async fn run_hand_action(api: &GameApi, action: ActionKind, card: &str) -> Result<()> {
    let mut view = TerminalView::stdout();
    let mut session = GameSession::new();
    session
        .refresh(api, &mut view)
        .await
        .context("fetching game state")?;
    let Some(index) = session.hand_index_of(card) else {
        bail!("card '{}' is not in your hand", card);
    };
    session.select_card(index, &mut view);
    session.act(action, api, &mut view).await;
    Ok(())
}

/// Pick a card from the discard pile (build-from-discard effect).
pub async fn run_take_discard(api: &GameApi, card_id: u64, action: PickAction) -> Result<()> {
    let mut view = TerminalView::stdout();
    let mut session = GameSession::new();
    session
        .refresh(api, &mut view)
        .await
        .context("fetching game state")?;
    if !session.select_discard_card(card_id, &mut view) {
        bail!("card #{} cannot be picked from the discard right now", card_id);
    }
    let button = match action {
        PickAction::Play => ActionKind::Play,
        PickAction::Build => ActionKind::Build,
    };
    session.act(button, api, &mut view).await;
    Ok(())
}

/// Legacy turn check.
pub async fn run_has_played(api: &GameApi, json: bool) -> Result<()> {
    let has_played = api
        .has_played_this_turn()
        .await
        .context("checking turn status")?;
    if json {
        println!("{}", serde_json::json!({ "hasPlayedThisTurn": has_played }));
    } else if has_played {
        println!("You have already played this turn");
    } else {
        println!("You have not played this turn yet");
    }
    Ok(())
}

/// Keep the table view in sync with the server until interrupted. JSON
/// mode bypasses the reconciler and prints every snapshot wholesale.
pub async fn run_watch(api: &GameApi, interval: Duration, json: bool) -> Result<()> {
    if json {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            match api.player_game_state().await {
                Ok(snapshot) => println!("{}", serde_json::to_string_pretty(&snapshot)?),
                Err(e) => tracing::warn!(error = %e, "poll failed, keeping last state"),
            }
        }
    }
    let mut view = TerminalView::stdout();
    let mut session = GameSession::new();
    poller::run(api, &mut session, &mut view, interval).await;
    Ok(())
}
