//! Reference implementations of the shared world services.
mod hud;
mod ledger;
mod map;

pub use hud::{ActionLabel, HudLog};
pub use ledger::PlayerLedger;
pub use map::{Edges, GridMap};
