//! The state synchronizer: snapshot reconciliation, card selection, and
//! turn gating.

pub mod gate;
pub mod reconcile;
pub mod selection;
pub mod session;

pub use gate::TurnGate;
pub use reconcile::reconcile;
pub use selection::Selection;
pub use session::{GameSession, Viewport};
