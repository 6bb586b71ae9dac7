//! The client-side state container and action dispatch.

use anyhow::Result;
use wonders_shared::{ActionKind, CardActionResponse, DiscardPickResponse, PlayerGameState, SELF_PLAYER_ID};

use crate::api::{DiscardAction, GameApi};
use crate::sync::gate::TurnGate;
use crate::sync::reconcile::reconcile;
use crate::sync::selection::Selection;
use crate::view::{ButtonMode, View};

/// Whose table the viewport is currently showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Viewport {
    #[default]
    SelfPlayer,
    Other(String),
}

/// Explicit state container for the synchronizer.
///
/// Owns the last-applied snapshot, the selection, the turn gate, and the
/// viewing mode; all mutation flows through `&mut self`. A poll response
/// and a user action that race each other both land here and the last
/// write wins, matching the unguarded ordering of the polling protocol.
#[derive(Default)]
pub struct GameSession {
    last_state: Option<PlayerGameState>,
    selection: Selection,
    gate: TurnGate,
    viewport: Viewport,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_state(&self) -> Option<&PlayerGameState> {
        self.last_state.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewing_self(&self) -> bool {
        self.viewport == Viewport::SelfPlayer
    }

    /// Reconcile a freshly polled snapshot against the last one, drive the
    /// turn gate, and replace the stored snapshot unconditionally.
    pub fn apply_snapshot(&mut self, next: PlayerGameState, view: &mut dyn View) {
        reconcile(self.last_state.as_ref(), &next, self.viewing_self(), view);
        self.gate.apply(&next, view);
        self.last_state = Some(next);
    }

    /// Fetch one snapshot and apply it.
    pub async fn refresh(&mut self, api: &GameApi, view: &mut dyn View) -> Result<()> {
        let snapshot = api.player_game_state().await?;
        self.apply_snapshot(snapshot, view);
        Ok(())
    }

    /// Index of a hand card by image name, for driving selection by name.
    pub fn hand_index_of(&self, card: &str) -> Option<usize> {
        self.last_state
            .as_ref()
            .and_then(|s| s.hand.iter().position(|c| c.as_str() == card))
    }

    /// Select a hand card and show its preview. Ignored while spectating
    /// or when the index is out of range.
    pub fn select_card(&mut self, index: usize, view: &mut dyn View) -> bool {
        if !self.viewing_self() {
            return false;
        }
        let Some(card) = self
            .last_state
            .as_ref()
            .and_then(|s| s.hand.get(index))
            .cloned()
        else {
            return false;
        };
        if matches!(self.selection, Selection::Discard { .. }) {
            view.set_buttons(ButtonMode::Hand);
        }
        self.selection = Selection::Hand { index };
        view.render_selected(&card);
        true
    }

    /// Select a discard-pile card. Only possible while the server offers
    /// build-from-discard; switches the buttons to pick mode (play/build
    /// shown, discard hidden).
    pub fn select_discard_card(&mut self, card_id: u64, view: &mut dyn View) -> bool {
        let Some(state) = self.last_state.as_ref() else {
            return false;
        };
        if !state.can(ActionKind::BuildFromDiscard) {
            return false;
        }
        let Some(entry) = state.discarded.iter().find(|c| c.id == card_id).cloned() else {
            return false;
        };
        self.selection = Selection::Discard {
            card_id: entry.id,
            image: entry.image.clone(),
        };
        view.render_selected(&entry.image);
        view.set_buttons(ButtonMode::DiscardPick);
        true
    }

    /// Drop any selection and restore the default button set. No server
    /// side effects.
    pub fn cancel(&mut self, view: &mut dyn View) {
        self.clear_selection_ui(view);
    }

    /// Submit the pressed action button against the current selection.
    ///
    /// The request target is decided once, by the selection kind: an
    /// active discard pick routes play/build to the discard endpoint and
    /// swallows discard (that button is hidden in pick mode); a hand
    /// selection routes all three to card-action. Idle is a no-op.
    pub async fn act(&mut self, button: ActionKind, api: &GameApi, view: &mut dyn View) {
        match self.selection.clone() {
            Selection::Idle => {}
            Selection::Discard { card_id, .. } => {
                let pick = match button {
                    ActionKind::Play => DiscardAction::Play,
                    ActionKind::Build => DiscardAction::Build,
                    // the discard button is hidden in pick mode
                    ActionKind::Discard | ActionKind::BuildFromDiscard => return,
                };
                let resp = match api.select_discard_card(card_id, pick).await {
                    Ok(resp) => resp,
                    Err(e) => {
                        tracing::warn!(error = %e, card_id, "discard pick request failed");
                        DiscardPickResponse {
                            error: Some("Failed to select card".to_string()),
                            ..Default::default()
                        }
                    }
                };
                self.apply_discard_result(resp, api, view).await;
            }
            Selection::Hand { index } => {
                let action = match button {
                    ActionKind::Play | ActionKind::Build | ActionKind::Discard => button,
                    ActionKind::BuildFromDiscard => return,
                };
                let Some(card) = self
                    .last_state
                    .as_ref()
                    .and_then(|s| s.hand.get(index))
                    .cloned()
                else {
                    // the hand shrank under the selection; nothing to send
                    self.clear_selection_ui(view);
                    return;
                };
                let resp = match api.card_action(action, &card).await {
                    Ok(resp) => resp,
                    Err(e) => {
                        tracing::warn!(error = %e, card = %card, "card action request failed");
                        CardActionResponse {
                            success: false,
                            message: None,
                        }
                    }
                };
                self.apply_hand_result(index, action, resp, view);
            }
        }
    }

    /// Outcome of a hand-card action. Success removes exactly the acted
    /// card from the local hand (the next poll confirms or restores it);
    /// failure leaves the hand untouched and surfaces a transient error.
    /// Either way the selection ends up cleared.
    pub(crate) fn apply_hand_result(
        &mut self,
        index: usize,
        action: ActionKind,
        resp: CardActionResponse,
        view: &mut dyn View,
    ) {
        if resp.success {
            if let Some(state) = self.last_state.as_mut() {
                if index < state.hand.len() {
                    state.hand.remove(index);
                }
            }
            self.clear_selection_ui(view);
            if let Some(state) = self.last_state.as_ref() {
                view.render_hand(&state.hand);
            }
        } else {
            self.clear_selection_ui(view);
            let message = resp
                .message
                .unwrap_or_else(|| default_failure_message(action).to_string());
            view.show_error(&message);
        }
    }

    /// Outcome of a discard pick. The reduced pile's identity is
    /// server-derived, so success triggers a full reload instead of a
    /// local splice.
    pub(crate) async fn apply_discard_result(
        &mut self,
        resp: DiscardPickResponse,
        api: &GameApi,
        view: &mut dyn View,
    ) {
        self.clear_selection_ui(view);
        if resp.is_ok() {
            if let Err(e) = self.refresh(api, view).await {
                tracing::warn!(error = %e, "reload after discard pick failed");
            }
        } else {
            let message = resp
                .error
                .unwrap_or_else(|| "Failed to select card".to_string());
            view.show_error(&message);
        }
    }

    /// Spectate another player: hide the hand, render their public slices,
    /// and blank the discard (its contents are not visible to spectators).
    pub fn show_player(&mut self, player_id: &str, view: &mut dyn View) {
        if player_id == SELF_PLAYER_ID {
            return self.show_self(view);
        }
        let Some(summary) = self
            .last_state
            .as_ref()
            .and_then(|s| s.players.iter().find(|p| p.id == player_id))
            .cloned()
        else {
            tracing::warn!(player_id, "unknown player, staying on current view");
            return;
        };
        self.clear_selection_ui(view);
        view.set_self_view(false);
        view.render_wonder(summary.state.wonder.as_ref());
        view.render_coins(summary.state.coins);
        view.render_played(&summary.state.played_cards);
        view.render_card_backs(&summary.state.card_backs);
        view.render_discard(&[], false);
        self.viewport = Viewport::Other(player_id.to_string());
    }

    /// Return to the own-table view and re-render it from the last
    /// snapshot; the next poll freshens it.
    pub fn show_self(&mut self, view: &mut dyn View) {
        self.clear_selection_ui(view);
        view.set_self_view(true);
        self.viewport = Viewport::SelfPlayer;
        if let Some(state) = self.last_state.as_ref() {
            view.render_hand(&state.hand);
            view.render_wonder(state.wonder.as_ref());
            view.render_coins(state.coins);
            view.render_played(&state.played_cards);
            view.render_card_backs(&state.card_backs);
            view.render_discard(&state.discarded, state.can(ActionKind::BuildFromDiscard));
        }
    }

    fn clear_selection_ui(&mut self, view: &mut dyn View) {
        self.selection = Selection::Idle;
        view.clear_selected();
        view.set_buttons(ButtonMode::Hand);
    }
}

fn default_failure_message(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Play => "This card can't be played",
        ActionKind::Build => "Can't build wonder with this card",
        ActionKind::Discard => "Can't discard this card",
        ActionKind::BuildFromDiscard => "Failed to select card",
    }
}
