//! Units: body, flags, state graph and assembly.
mod body;
mod events;
mod flags;
mod lifecycle;
mod parts;
mod states;
mod stats;
mod workflow;

use std::fmt;
use std::sync::Arc;

use state_machine::{MachineError, StateId, StateMachine, Step};

use crate::common::EntityId;
use crate::config::CoreConfig;
use crate::env::Services;
use crate::error::AssemblyError;
use crate::kinds::Race;

pub use body::UnitBody;
pub use events::{AttackerListener, ExtractorListener, ProducibleListener, UnitEvent};
pub use flags::{FlagStore, Haul, Signals};
pub use parts::{
    Animator, Attacker, Collidable, Extractor, NoAnimation, Pathfindable, Selectable,
};
pub use states::{UnitGraph, UnitStateKind, unit_graph};
pub use stats::UnitStats;

use parts::UnitParts;

/// A unit and the machine deciding what it does.
pub struct Unit {
    body: UnitBody,
    machine: StateMachine<UnitBody, UnitStateKind>,
    idle: StateId,
    produce: Option<StateId>,
}

impl Unit {
    pub fn id(&self) -> EntityId {
        self.body.id
    }

    pub fn state(&self) -> UnitStateKind {
        self.machine.current()
    }

    pub fn body(&self) -> &UnitBody {
        &self.body
    }

    pub fn stats_mut(&mut self) -> &mut UnitStats {
        &mut self.body.stats
    }

    pub fn machine(&self) -> &StateMachine<UnitBody, UnitStateKind> {
        &self.machine
    }

    /// Delivers a subsystem notification.
    pub fn handle(&mut self, event: UnitEvent, services: &mut Services<'_>) {
        tracing::trace!(entity = %self.body.id, event = event.name(), "event");
        event.deliver(&mut self.body, services);
    }

    /// Runs one tick of the state machine.
    pub fn update(&mut self, delta: f64, services: &mut Services<'_>) -> Step<UnitStateKind> {
        let step = self.machine.update(&mut self.body, delta);
        self.after_step(step, services);
        step
    }

    /// Forces a switch to `target`, bypassing transition evaluation.
    ///
    /// # Errors
    ///
    /// Fails if `target` is not part of the unit's graph.
    pub fn change_state(
        &mut self,
        target: UnitStateKind,
        services: &mut Services<'_>,
    ) -> Result<Step<UnitStateKind>, MachineError<UnitStateKind>> {
        let step = self.machine.change_state(target, &mut self.body)?;
        self.after_step(step, services);
        Ok(step)
    }

    fn after_step(&mut self, step: Step<UnitStateKind>, services: &mut Services<'_>) {
        let Step::Changed { from, to } = step else {
            return;
        };
        tracing::debug!(entity = %self.body.id, from = ?from, to = ?to, "state changed");

        if to == UnitStateKind::Die && services.hud.remove_from_selection(self.body.id) {
            services.hud.clear_menus();
        }
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("id", &self.body.id)
            .field("state", &self.state())
            .field("stats", &self.body.stats)
            .field("flags", &self.body.flags)
            .finish_non_exhaustive()
    }
}

/// Assembles a [`Unit`] from its parts.
///
/// Every part except the animator is required.
pub struct UnitBuilder {
    id: EntityId,
    race: Race,
    max_health: u32,
    config: CoreConfig,
    pathfinder: Option<Box<dyn Pathfindable>>,
    attacker: Option<Box<dyn Attacker>>,
    extractor: Option<Box<dyn Extractor>>,
    collidable: Option<Box<dyn Collidable>>,
    selectable: Option<Box<dyn Selectable>>,
    animator: Option<Box<dyn Animator>>,
}

impl UnitBuilder {
    pub const DEFAULT_MAX_HEALTH: u32 = 100;

    pub fn new(id: EntityId, race: Race) -> Self {
        Self {
            id,
            race,
            max_health: Self::DEFAULT_MAX_HEALTH,
            config: CoreConfig::default(),
            pathfinder: None,
            attacker: None,
            extractor: None,
            collidable: None,
            selectable: None,
            animator: None,
        }
    }

    pub fn max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    pub fn config(mut self, config: CoreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn pathfinder(mut self, part: impl Pathfindable + 'static) -> Self {
        self.pathfinder = Some(Box::new(part));
        self
    }

    pub fn attacker(mut self, part: impl Attacker + 'static) -> Self {
        self.attacker = Some(Box::new(part));
        self
    }

    pub fn extractor(mut self, part: impl Extractor + 'static) -> Self {
        self.extractor = Some(Box::new(part));
        self
    }

    pub fn collidable(mut self, part: impl Collidable + 'static) -> Self {
        self.collidable = Some(Box::new(part));
        self
    }

    pub fn selectable(mut self, part: impl Selectable + 'static) -> Self {
        self.selectable = Some(Box::new(part));
        self
    }

    pub fn animator(mut self, part: impl Animator + 'static) -> Self {
        self.animator = Some(Box::new(part));
        self
    }

    /// Builds the unit and enters the idle state.
    ///
    /// # Errors
    ///
    /// Fails if a required part is missing or `graph` lacks the idle or
    /// death state.
    pub fn build(self, graph: Arc<UnitGraph>) -> Result<Unit, AssemblyError> {
        let id = self.id;
        let missing = |part: &'static str| AssemblyError::MissingPart { entity: id, part };

        let idle = graph
            .resolve(UnitStateKind::Idle)
            .ok_or(AssemblyError::MissingState(UnitStateKind::Idle))?;
        if !graph.contains(UnitStateKind::Die) {
            return Err(AssemblyError::MissingState(UnitStateKind::Die));
        }
        let produce = graph.resolve(UnitStateKind::Produce);

        let parts = UnitParts {
            pathfinder: self.pathfinder.ok_or_else(|| missing("pathfinder"))?,
            attacker: self.attacker.ok_or_else(|| missing("attacker"))?,
            extractor: self.extractor.ok_or_else(|| missing("extractor"))?,
            collidable: self.collidable.ok_or_else(|| missing("collidable"))?,
            selectable: self.selectable.ok_or_else(|| missing("selectable"))?,
            animator: self
                .animator
                .unwrap_or_else(|| Box::new(NoAnimation) as Box<dyn Animator>),
        };

        let mut body = UnitBody {
            id,
            stats: UnitStats::new(self.race, self.max_health),
            flags: FlagStore::default(),
            visible: true,
            display: true,
            destroyed: false,
            dying_for: 0.0,
            config: self.config,
            parts,
        };
        let machine = StateMachine::new(graph, UnitStateKind::Idle, &mut body)?;
        tracing::debug!(entity = %id, race = %self.race, "unit assembled");

        Ok(Unit {
            body,
            machine,
            idle,
            produce,
        })
    }
}
