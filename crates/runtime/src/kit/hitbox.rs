//! Collision and selection flags of a unit.
use skirmish_core::{Collidable, Selectable};

use crate::shared::Shared;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hitbox {
    pub collidable: bool,
    pub selectable: bool,
    pub highlighted: bool,
}

impl Default for Hitbox {
    fn default() -> Self {
        Self {
            collidable: true,
            selectable: true,
            highlighted: false,
        }
    }
}

impl Collidable for Shared<Hitbox> {
    fn set_enabled(&mut self, enabled: bool) {
        self.lock().collidable = enabled;
    }
}

impl Selectable for Shared<Hitbox> {
    fn on_selection(&mut self, selected: bool) {
        self.lock().highlighted = selected;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.lock().selectable = enabled;
    }
}
