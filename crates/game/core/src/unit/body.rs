use crate::common::{EntityId, Position};
use crate::config::CoreConfig;
use crate::env::Services;

use super::events::{AttackerListener, ProducibleListener};
use super::flags::FlagStore;
use super::parts::UnitParts;
use super::stats::UnitStats;

/// Everything a unit's states read and write.
///
/// The state machine is kept beside the body rather than inside it, so state
/// hooks get exclusive access to the body while the machine holds its cursor.
pub struct UnitBody {
    pub(crate) id: EntityId,
    pub(crate) stats: UnitStats,
    pub(crate) flags: FlagStore,
    pub(crate) visible: bool,
    pub(crate) display: bool,
    pub(crate) destroyed: bool,
    pub(crate) dying_for: f64,
    pub(crate) config: CoreConfig,
    pub(crate) parts: UnitParts,
}

impl UnitBody {
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn stats(&self) -> &UnitStats {
        &self.stats
    }

    pub fn flags(&self) -> &FlagStore {
        &self.flags
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Hidden units are inside a building and cannot be hit or picked.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the unit is drawn at all. Off while it is being produced.
    pub fn is_displayed(&self) -> bool {
        self.display
    }

    /// Set once the death delay has elapsed. The owner should then drop or
    /// pool the unit.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Seconds spent dying so far.
    pub fn dying_for(&self) -> f64 {
        self.dying_for
    }

    pub fn tile(&self) -> Position {
        self.parts.pathfinder.tile()
    }

    pub fn is_moving(&self) -> bool {
        self.parts.pathfinder.is_moving()
    }

    pub fn is_dead(&self) -> bool {
        self.stats.is_dead()
    }

    pub(crate) fn play(&mut self, animation: &'static str) {
        self.parts.animator.play(animation);
    }

    /// Hides the unit, dropping it from collisions and from the selection.
    pub(crate) fn hide(&mut self, services: &mut Services<'_>) {
        self.visible = false;
        self.parts.collidable.set_enabled(false);
        if services.hud.remove_from_selection(self.id) {
            self.parts.selectable.on_selection(false);
            services.hud.clear_menus();
        }
    }

    pub(crate) fn show(&mut self) {
        self.visible = true;
        self.parts.collidable.set_enabled(true);
    }
}

impl AttackerListener for UnitBody {
    fn on_attack_started(&mut self, target: EntityId) {
        tracing::trace!(entity = %self.id, target = %target, "attack started");
        self.flags.set_attack_started(true);
    }

    fn on_attack_stopped(&mut self) {
        tracing::trace!(entity = %self.id, "attack stopped");
        self.flags.set_attack_started(false);
    }
}

impl ProducibleListener for UnitBody {
    fn on_production_ended(&mut self, producer: EntityId) {
        tracing::trace!(entity = %self.id, producer = %producer, "production ended");
        self.flags.mark_produced();
    }
}
