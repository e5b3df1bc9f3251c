//! Runtime world for the skirmish unit engine.
//!
//! This crate provides the concrete collaborators the core units talk to and
//! drives them on a fixed tick. Consumers build a [`World`] from loaded
//! content, issue orders, and call [`World::tick`].
//!
//! Modules are organized by responsibility:
//! - [`world`] hosts the tick loop, orders and queries
//! - [`services`] implements the terrain, economy and HUD services
//! - [`kit`] holds the per-unit subsystems (movement, combat, harvesting,
//!   hitbox, sprite)
//! - [`pool`], [`effect`] and [`production`] track units between lives,
//!   corpses and production timers
pub mod effect;
pub mod error;
pub mod kit;
pub mod pool;
pub mod production;
pub mod services;
pub mod world;

mod shared;

pub use effect::{Effect, EffectKind};
pub use error::{Result, WorldError};
pub use kit::{Combat, Harvester, Hitbox, Mover, Phase, Progress, Sprite, UnitKit};
pub use pool::UnitPool;
pub use production::Production;
pub use services::{ActionLabel, Edges, GridMap, HudLog, PlayerLedger};
pub use shared::Shared;
pub use world::World;
