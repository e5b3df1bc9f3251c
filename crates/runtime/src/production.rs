use skirmish_core::{EntityId, UnitEvent};

/// A unit being produced by a building.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Production {
    pub unit: EntityId,
    pub producer: EntityId,
    remaining: f64,
}

impl Production {
    pub fn new(unit: EntityId, producer: EntityId, duration: f64) -> Self {
        Self {
            unit,
            producer,
            remaining: duration,
        }
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Counts down, returning the release event once done.
    pub fn advance(&mut self, delta: f64) -> Option<UnitEvent> {
        self.remaining -= delta;
        (self.remaining <= 0.0).then_some(UnitEvent::ProductionEnded {
            producer: self.producer,
        })
    }
}
