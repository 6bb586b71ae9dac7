//! Action kinds and request/response payloads for the game API.

use serde::{Deserialize, Serialize};

use crate::cards::CardImage;

/// Actions the server may offer a player in `availableActions`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Play,
    Build,
    Discard,
    BuildFromDiscard,
}

impl ActionKind {
    /// Wire name, as it appears in `availableActions` and request bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Play => "play",
            ActionKind::Build => "build",
            ActionKind::Discard => "discard",
            ActionKind::BuildFromDiscard => "build_from_discard",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Body of `POST /api/card-action`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardActionRequest {
    pub action: ActionKind,
    pub card: CardImage,
    #[serde(rename = "gameId")]
    pub game_id: u64,
}

/// Response of `POST /api/card-action`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardActionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of `POST /api/select-discard-card`. Unlike card-action, the
/// discard path reports success and failure through separate string keys.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DiscardPickResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl DiscardPickResponse {
    /// The server signals failure by the presence of `error`.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Response of the legacy `GET /api/has-played-this-turn` endpoint,
/// superseded by `availableActions` in the combined snapshot.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HasPlayedResponse {
    #[serde(rename = "hasPlayedThisTurn")]
    pub has_played_this_turn: bool,
}
