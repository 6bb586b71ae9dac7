//! Fixed-interval snapshot polling.

use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};

use crate::api::GameApi;
use crate::sync::GameSession;
use crate::view::View;

/// Default poll cadence of the original page.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Poll the combined snapshot endpoint and feed every response through the
/// session.
///
/// Ticks are strictly sequential: the next tick fires only after the
/// previous request resolved, and ticks that came due in the meantime are
/// skipped, so two polls are never in flight at once. A failed poll is
/// logged and leaves the UI untouched; there is no backoff and no retry
/// beyond the next scheduled tick.
pub async fn run(
    api: &GameApi,
    session: &mut GameSession,
    view: &mut dyn View,
    interval: Duration,
) {
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        if let Err(e) = session.refresh(api, view).await {
            tracing::warn!(error = %e, "poll failed, keeping last state");
        }
    }
}
