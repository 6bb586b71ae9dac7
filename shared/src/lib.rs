//! Wire types shared between the wonders state synchronizer and its front ends.

pub mod actions;
pub mod cards;
pub mod state;

pub use actions::{
    ActionKind, CardActionRequest, CardActionResponse, DiscardPickResponse, HasPlayedResponse,
};
pub use cards::{CardImage, DiscardCard};
pub use state::{PlayerGameState, PlayerSummary, PublicPlayerState, SELF_PLAYER_ID};
