//! Per-unit behavior engine for real-time strategy units.
//!
//! `skirmish-core` decides, every simulation tick, what each unit is doing:
//! idling, walking, attacking, extracting or carrying a resource, waiting for
//! production, or dying. Decisions are reactive to flags written by the
//! subsystems a unit is wired to (movement, combat, production, extraction).
//!
//! Per tick the data flows one way: subsystem events ([`UnitEvent`]) mutate
//! the unit's [`FlagStore`], then the unit's state machine evaluates the
//! current state's transitions in order. The resource workflow reacts to
//! extraction events and is the only place the core mutates shared world
//! state (cutting trees on the [`TerrainMap`]).
pub mod common;
pub mod config;
pub mod env;
pub mod error;
pub mod kinds;
pub mod unit;

pub use common::{EntityId, Position};
pub use config::CoreConfig;
pub use env::{Economy, Hud, MapDimensions, Services, TerrainKind, TerrainMap};
pub use error::{AssemblyError, CoreError, ErrorSeverity, WorkflowError};
pub use kinds::{Race, ResourceType};
pub use unit::{
    Animator, Attacker, AttackerListener, Collidable, Extractor, ExtractorListener, FlagStore,
    Haul, NoAnimation, Pathfindable, ProducibleListener, Selectable, Signals, Unit, UnitBody,
    UnitBuilder, UnitEvent, UnitGraph, UnitStateKind, UnitStats, unit_graph,
};
