//! HTTP client for the wonders game API.

use std::time::Duration;

use anyhow::{Context, Result};
use wonders_shared::{
    ActionKind, CardActionRequest, CardActionResponse, CardImage, DiscardPickResponse,
    HasPlayedResponse, PlayerGameState,
};

/// CSRF token forwarded as a query parameter on mutating requests, the way
/// the server's pages embed it in their meta tags.
#[derive(Clone, Debug)]
pub struct CsrfToken {
    pub param: String,
    pub token: String,
}

/// What to do with a card picked from the discard pile. The server accepts
/// only play and build on this path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscardAction {
    Play,
    Build,
}

impl DiscardAction {
    pub fn as_str(self) -> &'static str {
        match self {
            DiscardAction::Play => "play",
            DiscardAction::Build => "build",
        }
    }
}

/// Thin client over the four game endpoints. Network and decode failures
/// surface as `Err`; how to degrade is the caller's decision.
#[derive(Clone, Debug)]
pub struct GameApi {
    client: reqwest::Client,
    base: String,
    game_id: u64,
    csrf: Option<CsrfToken>,
}

impl GameApi {
    pub fn new(
        base: &str,
        game_id: u64,
        timeout: Duration,
        csrf: Option<CsrfToken>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("building http client")?;
        Ok(GameApi {
            client,
            base: base.trim_end_matches('/').to_string(),
            game_id,
            csrf,
        })
    }

    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn csrf_pair(&self) -> Option<(&str, &str)> {
        self.csrf
            .as_ref()
            .map(|c| (c.param.as_str(), c.token.as_str()))
    }

    /// Fetch the combined per-player snapshot. Missing fields normalize to
    /// safe defaults during deserialization.
    pub async fn player_game_state(&self) -> Result<PlayerGameState> {
        let resp = self
            .client
            .get(self.url("/api/get-player-game-state"))
            .query(&[("gameId", self.game_id.to_string())])
            .send()
            .await
            .context("requesting player game state")?;
        resp.json::<PlayerGameState>()
            .await
            .context("decoding player game state")
    }

    /// Submit a hand-card action. Server rejections come back in-band as
    /// `success: false` with an optional message, not as an `Err`.
    pub async fn card_action(
        &self,
        action: ActionKind,
        card: &CardImage,
    ) -> Result<CardActionResponse> {
        let mut req = self.client.post(self.url("/api/card-action"));
        if let Some((param, token)) = self.csrf_pair() {
            req = req.query(&[(param, token)]);
        }
        let body = CardActionRequest {
            action,
            card: card.clone(),
            game_id: self.game_id,
        };
        let resp = req.json(&body).send().await.context("sending card action")?;
        resp.json::<CardActionResponse>()
            .await
            .context("decoding card action response")
    }

    /// Pick a card from the discard pile (build-from-discard effect).
    /// Everything travels in the query string on this endpoint.
    pub async fn select_discard_card(
        &self,
        card_id: u64,
        action: DiscardAction,
    ) -> Result<DiscardPickResponse> {
        let mut req = self
            .client
            .post(self.url("/api/select-discard-card"))
            .query(&[
                ("gameId", self.game_id.to_string()),
                ("cardId", card_id.to_string()),
                ("action", action.as_str().to_string()),
            ]);
        if let Some((param, token)) = self.csrf_pair() {
            req = req.query(&[(param, token)]);
        }
        let resp = req.send().await.context("selecting discard card")?;
        resp.json::<DiscardPickResponse>()
            .await
            .context("decoding discard selection response")
    }

    /// Legacy turn check, superseded by `availableActions` in the combined
    /// snapshot.
    pub async fn has_played_this_turn(&self) -> Result<bool> {
        let resp = self
            .client
            .get(self.url("/api/has-played-this-turn"))
            .query(&[("gameId", self.game_id.to_string())])
            .send()
            .await
            .context("requesting has-played-this-turn")?;
        let parsed: HasPlayedResponse = resp
            .json()
            .await
            .context("decoding has-played-this-turn response")?;
        Ok(parsed.has_played_this_turn)
    }
}
