//! Reuse of pooled units.

use state_machine::{MachineError, Step};

use super::{Unit, UnitStateKind};

impl Unit {
    /// Resets the unit to a fresh idle state.
    ///
    /// Stops every action in flight, clears all flags, restores health,
    /// visibility and selectability, then switches straight to idle without
    /// evaluating transitions. Safe to call any number of times.
    pub fn recycle(&mut self) {
        let body = &mut self.body;
        body.parts.stop_all();
        body.parts.collidable.set_enabled(true);
        body.parts.selectable.set_enabled(true);
        body.parts.selectable.on_selection(false);
        body.flags.reset();
        body.stats.restore();
        body.visible = true;
        body.display = true;
        body.destroyed = false;
        body.dying_for = 0.0;

        self.machine.change_to(self.idle, body);
        tracing::debug!(entity = %body.id, "unit recycled");
    }

    /// Recycles the unit and parks it in production until a producer
    /// releases it.
    ///
    /// # Errors
    ///
    /// Fails if the unit's graph has no production state. The unit is still
    /// recycled in that case.
    pub fn begin_production(&mut self) -> Result<Step<UnitStateKind>, MachineError<UnitStateKind>> {
        self.recycle();
        let produce = self
            .produce
            .ok_or(MachineError::UnknownState(UnitStateKind::Produce))?;
        Ok(self.machine.change_to(produce, &mut self.body))
    }
}
