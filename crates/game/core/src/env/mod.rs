//! Shared world services a unit talks to.
//!
//! Units own their per-entity collaborators (movement, combat, extraction).
//! Everything shared between units (the terrain, the economy, the HUD) is
//! passed in explicitly through [`Services`] on every call that needs it.
//! Handing out exclusive references means no two units can interleave a
//! check-and-mutate sequence on the terrain.
mod economy;
mod hud;
mod map;

pub use economy::Economy;
pub use hud::Hud;
pub use map::{MapDimensions, TerrainKind, TerrainMap, closest_tree, cut_tree};

/// Exclusive handles on the shared services for the duration of one call.
pub struct Services<'a> {
    pub map: &'a mut dyn TerrainMap,
    pub economy: &'a mut dyn Economy,
    pub hud: &'a mut dyn Hud,
}

impl<'a> Services<'a> {
    pub fn new(
        map: &'a mut dyn TerrainMap,
        economy: &'a mut dyn Economy,
        hud: &'a mut dyn Hud,
    ) -> Self {
        Self { map, economy, hud }
    }
}
