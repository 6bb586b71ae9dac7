//! Shared harness for the integration tests: a mock game server exposing
//! the four endpoints, plus a render-counting view.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use native_wonders::api::{CsrfToken, GameApi};
use native_wonders::view::{ButtonMode, View};
use wonders_shared::{ActionKind, CardImage, DiscardCard, PlayerGameState, PlayerSummary};

/// What the mock server returns, and what it observed.
pub struct ServerControl {
    pub state_response: Value,
    pub card_action_response: Value,
    pub discard_response: Value,
    pub has_played: bool,
    pub state_requests: usize,
    pub card_action_requests: Vec<(Value, Vec<(String, String)>)>,
    pub discard_requests: Vec<Vec<(String, String)>>,
}

impl Default for ServerControl {
    fn default() -> Self {
        ServerControl {
            state_response: json!({}),
            card_action_response: json!({ "success": true }),
            discard_response: json!({ "success": "Card played successfully from discard" }),
            has_played: false,
            state_requests: 0,
            card_action_requests: Vec::new(),
            discard_requests: Vec::new(),
        }
    }
}

pub type Control = Arc<Mutex<ServerControl>>;

pub fn control() -> Control {
    Arc::new(Mutex::new(ServerControl::default()))
}

pub fn set_state(control: &Control, state: &PlayerGameState) {
    control.lock().unwrap().state_response = serde_json::to_value(state).unwrap();
}

async fn state_handler(State(control): State<Control>) -> Json<Value> {
    let mut ctl = control.lock().unwrap();
    ctl.state_requests += 1;
    Json(ctl.state_response.clone())
}

async fn card_action_handler(
    State(control): State<Control>,
    Query(query): Query<Vec<(String, String)>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut ctl = control.lock().unwrap();
    ctl.card_action_requests.push((body, query));
    Json(ctl.card_action_response.clone())
}

async fn discard_handler(
    State(control): State<Control>,
    Query(query): Query<Vec<(String, String)>>,
) -> Json<Value> {
    let mut ctl = control.lock().unwrap();
    ctl.discard_requests.push(query);
    Json(ctl.discard_response.clone())
}

async fn has_played_handler(State(control): State<Control>) -> Json<Value> {
    let ctl = control.lock().unwrap();
    Json(json!({ "hasPlayedThisTurn": ctl.has_played }))
}

/// Bind the mock server on an OS-assigned port and serve it in the
/// background for the rest of the test.
pub async fn spawn_server(control: Control) -> SocketAddr {
    let app = Router::new()
        .route("/api/get-player-game-state", get(state_handler))
        .route("/api/card-action", post(card_action_handler))
        .route("/api/select-discard-card", post(discard_handler))
        .route("/api/has-played-this-turn", get(has_played_handler))
        .with_state(control);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

pub fn api_for(addr: SocketAddr, game_id: u64, csrf: Option<CsrfToken>) -> GameApi {
    GameApi::new(
        &format!("http://{}", addr),
        game_id,
        Duration::from_secs(2),
        csrf,
    )
    .unwrap()
}

pub fn snapshot(hand: &[&str], coins: u32, actions: &[ActionKind]) -> PlayerGameState {
    PlayerGameState {
        hand: hand.iter().map(|c| (*c).into()).collect(),
        coins,
        available_actions: actions.to_vec(),
        ..Default::default()
    }
}

/// Counts render calls per slice so tests can assert exactly which slices
/// a poll touched.
#[derive(Default)]
pub struct RecordingView {
    pub hand_renders: usize,
    pub wonder_renders: usize,
    pub coins_renders: usize,
    pub played_renders: usize,
    pub card_backs_renders: usize,
    pub discard_renders: usize,
    pub players_renders: usize,
    pub last_hand: Vec<CardImage>,
    pub last_discard: Vec<DiscardCard>,
    pub last_discard_selectable: Option<bool>,
    pub selected: Option<CardImage>,
    pub buttons: ButtonMode,
    pub overlay_shown: usize,
    pub overlay_hidden: usize,
    pub overlay_visible: bool,
    pub errors: Vec<String>,
}

impl View for RecordingView {
    fn render_hand(&mut self, cards: &[CardImage]) {
        self.hand_renders += 1;
        self.last_hand = cards.to_vec();
    }
    fn render_wonder(&mut self, _wonder: Option<&CardImage>) {
        self.wonder_renders += 1;
    }
    fn render_coins(&mut self, _coins: u32) {
        self.coins_renders += 1;
    }
    fn render_played(&mut self, _cards: &[CardImage]) {
        self.played_renders += 1;
    }
    fn render_card_backs(&mut self, _backs: &[CardImage]) {
        self.card_backs_renders += 1;
    }
    fn render_discard(&mut self, cards: &[DiscardCard], selectable: bool) {
        self.discard_renders += 1;
        self.last_discard = cards.to_vec();
        self.last_discard_selectable = Some(selectable);
    }
    fn render_players(&mut self, _players: &[PlayerSummary]) {
        self.players_renders += 1;
    }
    fn render_selected(&mut self, image: &CardImage) {
        self.selected = Some(image.clone());
    }
    fn clear_selected(&mut self) {
        self.selected = None;
    }
    fn set_buttons(&mut self, mode: ButtonMode) {
        self.buttons = mode;
    }
    fn show_turn_overlay(&mut self) {
        self.overlay_shown += 1;
        self.overlay_visible = true;
    }
    fn hide_turn_overlay(&mut self) {
        self.overlay_hidden += 1;
        self.overlay_visible = false;
    }
    fn set_self_view(&mut self, _is_self: bool) {}
    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
