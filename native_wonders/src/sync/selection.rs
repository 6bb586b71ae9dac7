//! The player's current card selection.

use wonders_shared::CardImage;

/// At most one selection is active. A discard pick takes priority over a
/// hand selection when an action is submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    /// A card picked from the local hand, by index.
    Hand { index: usize },
    /// A card picked from the shared discard pile.
    Discard { card_id: u64, image: CardImage },
}

impl Selection {
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }
}
