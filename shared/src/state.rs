//! Snapshot types for the combined player-game-state endpoint.

use serde::{Deserialize, Serialize};

use crate::actions::ActionKind;
use crate::cards::{CardImage, DiscardCard};

/// The id the server uses for the requesting player in players lists.
pub const SELF_PLAYER_ID: &str = "self";

/// Complete per-player view of the game, fetched in a single call.
///
/// Every field defaults so a partial response normalizes to empty piles,
/// zero coins, and no capabilities. Each poll replaces the previous
/// snapshot wholesale; nothing is merged.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGameState {
    #[serde(default)]
    pub has_played_this_turn: bool,
    #[serde(default)]
    pub hand: Vec<CardImage>,
    #[serde(default)]
    pub wonder: Option<CardImage>,
    #[serde(default)]
    pub coins: u32,
    #[serde(default)]
    pub played_cards: Vec<CardImage>,
    #[serde(default)]
    pub card_backs: Vec<CardImage>,
    #[serde(default)]
    pub discarded: Vec<DiscardCard>,
    #[serde(default)]
    pub available_actions: Vec<ActionKind>,
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

impl PlayerGameState {
    /// Whether the server currently offers `action` to this player.
    pub fn can(&self, action: ActionKind) -> bool {
        self.available_actions.contains(&action)
    }
}

/// Another player's row in the snapshot. Hands and available actions are
/// never included for other players.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub state: PublicPlayerState,
    #[serde(default)]
    pub is_neighbor: bool,
}

/// The publicly visible slice of a player's state.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicPlayerState {
    #[serde(default)]
    pub wonder: Option<CardImage>,
    #[serde(default)]
    pub coins: u32,
    #[serde(default)]
    pub played_cards: Vec<CardImage>,
    #[serde(default)]
    pub card_backs: Vec<CardImage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_server_shaped_snapshot() {
        let json = r#"{
            "hasPlayedThisTurn": false,
            "hand": ["temple.png", "baths.png"],
            "wonder": "alexandria_a.png",
            "coins": 6,
            "playedCards": ["altar.png"],
            "cardBacks": ["i.png", "ii.png"],
            "discarded": [{"id": 12, "image": "press.png"}],
            "availableActions": ["play", "build", "discard"],
            "players": [
                {
                    "id": "42",
                    "name": "alice",
                    "isNeighbor": true,
                    "state": {"wonder": "rhodos_a.png", "coins": 3,
                              "playedCards": [], "cardBacks": ["i.png"]}
                }
            ]
        }"#;
        let state: PlayerGameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.hand.len(), 2);
        assert_eq!(state.coins, 6);
        assert_eq!(state.discarded[0].id, 12);
        assert!(state.can(ActionKind::Play));
        assert!(!state.can(ActionKind::BuildFromDiscard));
        assert!(state.players[0].is_neighbor);
        assert_eq!(state.players[0].state.card_backs.len(), 1);
    }

    #[test]
    fn missing_fields_normalize_to_defaults() {
        let state: PlayerGameState = serde_json::from_str("{}").unwrap();
        assert!(state.hand.is_empty());
        assert!(state.wonder.is_none());
        assert_eq!(state.coins, 0);
        assert!(!state.has_played_this_turn);
        assert!(state.available_actions.is_empty());
        assert!(state.players.is_empty());
    }
}
