//! Field-by-field snapshot diffing.

use wonders_shared::{ActionKind, PlayerGameState};

use crate::view::View;

/// Diff `next` against `previous` and re-render only the slices that
/// changed.
///
/// The players list is reconciled in every viewing mode; the self slices
/// (hand, wonder, coins, played, card backs, discard) only while the
/// viewport shows the self player. A `None` previous is a full initial
/// render. The discard slice additionally re-renders when its
/// selectability (the build-from-discard capability) flips, so stale
/// pickability never lingers on an unchanged pile.
///
/// The caller replaces its snapshot with `next` afterwards regardless of
/// whether anything changed; equal snapshots produce zero render calls.
pub fn reconcile(
    previous: Option<&PlayerGameState>,
    next: &PlayerGameState,
    viewing_self: bool,
    view: &mut dyn View,
) {
    if viewing_self {
        if previous.map_or(true, |p| p.hand != next.hand) {
            view.render_hand(&next.hand);
        }
        if previous.map_or(true, |p| p.wonder != next.wonder) {
            view.render_wonder(next.wonder.as_ref());
        }
        if previous.map_or(true, |p| p.coins != next.coins) {
            view.render_coins(next.coins);
        }
        if previous.map_or(true, |p| p.played_cards != next.played_cards) {
            view.render_played(&next.played_cards);
        }
        if previous.map_or(true, |p| p.card_backs != next.card_backs) {
            view.render_card_backs(&next.card_backs);
        }
        let selectable = next.can(ActionKind::BuildFromDiscard);
        let selectable_changed =
            previous.map_or(true, |p| p.can(ActionKind::BuildFromDiscard) != selectable);
        if previous.map_or(true, |p| p.discarded != next.discarded) || selectable_changed {
            view.render_discard(&next.discarded, selectable);
        }
    }
    if previous.map_or(true, |p| p.players != next.players) {
        view.render_players(&next.players);
    }
}
