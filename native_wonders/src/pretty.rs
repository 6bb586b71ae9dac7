//! Terminal rendering of the table view.

use std::io::IsTerminal;

use owo_colors::OwoColorize;
use wonders_shared::{CardImage, DiscardCard, PlayerSummary};

use crate::view::{ButtonMode, View};

/// Renders each slice as it changes, one section per line, in the order
/// the reconciler emits them. Color is applied only when stdout is a
/// terminal.
pub struct TerminalView {
    color: bool,
}

impl TerminalView {
    pub fn stdout() -> Self {
        TerminalView {
            color: std::io::stdout().is_terminal(),
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn cards_line(cards: &[CardImage]) -> String {
        if cards.is_empty() {
            "(empty)".to_string()
        } else {
            cards
                .iter()
                .map(CardImage::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

impl View for TerminalView {
    fn render_hand(&mut self, cards: &[CardImage]) {
        if cards.is_empty() {
            println!("{} no cards in hand", self.heading("Hand:"));
            return;
        }
        let list = cards
            .iter()
            .enumerate()
            .map(|(i, c)| format!("[{}] {}", i + 1, c))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{} {}", self.heading("Hand:"), list);
    }

    fn render_wonder(&mut self, wonder: Option<&CardImage>) {
        match wonder {
            Some(image) => println!("{} {}", self.heading("Wonder:"), image),
            None => println!("{} (none assigned)", self.heading("Wonder:")),
        }
    }

    fn render_coins(&mut self, coins: u32) {
        let value = if self.color {
            coins.yellow().to_string()
        } else {
            coins.to_string()
        };
        println!("{} {}", self.heading("Coins:"), value);
    }

    fn render_played(&mut self, cards: &[CardImage]) {
        println!("{} {}", self.heading("Played:"), Self::cards_line(cards));
    }

    fn render_card_backs(&mut self, backs: &[CardImage]) {
        println!(
            "{} {} stage card(s) consumed",
            self.heading("Wonder backs:"),
            backs.len()
        );
    }

    fn render_discard(&mut self, cards: &[DiscardCard], selectable: bool) {
        let label = if selectable {
            "Discard (pickable):"
        } else {
            "Discard:"
        };
        if cards.is_empty() {
            println!("{} (empty)", self.heading(label));
            return;
        }
        let list = cards
            .iter()
            .map(|c| format!("#{} {}", c.id, c.image))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} {}", self.heading(label), list);
    }

    fn render_players(&mut self, players: &[PlayerSummary]) {
        let list = players
            .iter()
            .map(|p| {
                let mut entry = format!("{} ({} coins)", p.name, p.state.coins);
                if p.is_neighbor {
                    entry.push_str(" [neighbor]");
                }
                entry
            })
            .collect::<Vec<_>>()
            .join(" · ");
        println!("{} {}", self.heading("Players:"), list);
    }

    fn render_selected(&mut self, image: &CardImage) {
        println!("{} {}", self.heading("Selected:"), image);
    }

    fn clear_selected(&mut self) {
        // nothing to dismiss on a line-oriented terminal
    }

    fn set_buttons(&mut self, mode: ButtonMode) {
        let actions = match mode {
            ButtonMode::Hand => "play / build / discard",
            ButtonMode::DiscardPick => "play / build (from discard)",
        };
        println!("{} {}", self.heading("Actions:"), actions);
    }

    fn show_turn_overlay(&mut self) {
        let message = "You have already played this turn";
        let waiting = "Waiting for other players...";
        if self.color {
            println!("{}", message.bold().on_red());
            println!("{}", waiting.dimmed());
        } else {
            println!("== {} ==", message);
            println!("{}", waiting);
        }
    }

    fn hide_turn_overlay(&mut self) {
        let message = "It is your turn again";
        if self.color {
            println!("{}", message.bold().green());
        } else {
            println!("== {} ==", message);
        }
    }

    fn set_self_view(&mut self, is_self: bool) {
        let hint = if is_self {
            "Viewing your table."
        } else {
            "Viewing another player (no hand shown)."
        };
        println!("{}", self.heading(hint));
    }

    fn show_error(&mut self, message: &str) {
        // one-shot and lossy: the browser version faded this message out
        // after three seconds and nothing re-shows it
        if self.color {
            println!("{} {}", "error:".bold().red(), message);
        } else {
            println!("error: {}", message);
        }
    }
}
