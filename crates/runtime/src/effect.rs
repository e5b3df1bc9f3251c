//! Short-lived decorations left on the map.
use skirmish_core::{EntityId, Position, Race};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    /// Remains of a destroyed unit.
    Corpse { unit: EntityId, race: Race },
}

/// A timed world effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Effect {
    pub kind: EffectKind,
    pub tile: Position,
    /// Seconds left. Negative lasts forever.
    remaining: f64,
}

impl Effect {
    pub fn new(kind: EffectKind, tile: Position, delay: f64) -> Self {
        Self {
            kind,
            tile,
            remaining: delay,
        }
    }

    pub fn is_permanent(&self) -> bool {
        self.remaining < 0.0
    }

    /// Ages the effect. Returns false once it has expired.
    pub fn age(&mut self, delta: f64) -> bool {
        if self.is_permanent() {
            return true;
        }
        self.remaining -= delta;
        self.remaining > 0.0
    }
}
