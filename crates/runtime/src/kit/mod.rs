//! Per-unit collaborators.
//!
//! Each unit gets one instance of every part. The unit holds one handle to
//! each, the [`UnitKit`] keeps the other so the world can advance them.
mod combat;
mod harvester;
mod hitbox;
mod mover;
mod sprite;

use std::sync::Arc;

use skirmish_content::UnitTemplate;
use skirmish_core::{
    AssemblyError, CoreConfig, EntityId, Position, Race, Unit, UnitBuilder, UnitGraph,
};

pub use combat::Combat;
pub use harvester::{Harvester, Phase, Progress};
pub use hitbox::Hitbox;
pub use mover::Mover;
pub use sprite::Sprite;

use crate::shared::Shared;

/// The world's side of a unit's parts.
#[derive(Clone, Debug)]
pub struct UnitKit {
    pub template: String,
    pub mover: Shared<Mover>,
    pub combat: Shared<Combat>,
    pub harvester: Shared<Harvester>,
    pub hitbox: Shared<Hitbox>,
    pub sprite: Shared<Sprite>,
}

impl UnitKit {
    pub fn new(template: &UnitTemplate, tile: Position) -> Self {
        Self {
            template: template.name.clone(),
            mover: Shared::new(Mover::new(tile, template.speed)),
            combat: Shared::new(Combat::new(template.attack)),
            harvester: Shared::new(Harvester::new(template.harvest)),
            hitbox: Shared::new(Hitbox::default()),
            sprite: Shared::new(Sprite::new(template.animations.clone())),
        }
    }

    /// Builds a unit wired to a fresh kit.
    pub fn assemble(
        id: EntityId,
        race: Race,
        template: &UnitTemplate,
        tile: Position,
        config: CoreConfig,
        graph: Arc<UnitGraph>,
    ) -> Result<(Unit, Self), AssemblyError> {
        let kit = Self::new(template, tile);
        let unit = UnitBuilder::new(id, race)
            .max_health(template.max_health)
            .config(config)
            .pathfinder(kit.mover.clone())
            .attacker(kit.combat.clone())
            .extractor(kit.harvester.clone())
            .collidable(kit.hitbox.clone())
            .selectable(kit.hitbox.clone())
            .animator(kit.sprite.clone())
            .build(graph)?;
        Ok((unit, kit))
    }

    /// Clears what the previous life left behind and moves to `tile`.
    pub fn reset(&self, tile: Position) {
        self.mover.lock().place(tile);
        self.combat.lock().disengage();
        self.harvester.lock().reset();
    }

    pub fn tile(&self) -> Position {
        self.mover.lock().tile()
    }
}
