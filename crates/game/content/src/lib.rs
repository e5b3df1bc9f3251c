//! Data-driven content definitions and loaders.
//!
//! This crate describes what a skirmish is made of and loads it from RON/TOML
//! data files:
//! - Unit templates (data-driven via RON)
//! - Map layouts drawn with terrain glyphs (RON)
//! - The opening scenario: who spawns where with which orders (RON)
//! - Simulation rules (TOML)
//!
//! Content only feeds world construction. Units never read it while running.

pub mod map;
pub mod rules;
pub mod scenario;
pub mod units;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use map::MapLayout;
pub use rules::{RulesConfig, SimulationConfig};
pub use scenario::{OrderSpec, Scenario, SpawnSpec};
pub use units::{AnimationSpec, AttackProfile, HarvestProfile, UnitTemplate};

#[cfg(feature = "loaders")]
pub use loaders::{
    Content, ContentFactory, ConfigLoader, LoadResult, MapLoader, ScenarioLoader, UnitLoader,
};
