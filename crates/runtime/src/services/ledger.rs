use std::collections::{BTreeMap, BTreeSet};

use skirmish_core::{Economy, EntityId, Position, Race, ResourceType};

/// The player's stockpile, every race's warehouse, and which units the player
/// controls.
#[derive(Clone, Debug, Default)]
pub struct PlayerLedger {
    player: Race,
    stock: BTreeMap<ResourceType, u32>,
    warehouses: BTreeMap<Race, Position>,
    owned: BTreeSet<EntityId>,
}

impl PlayerLedger {
    pub fn new(player: Race) -> Self {
        Self {
            player,
            ..Self::default()
        }
    }

    pub fn player(&self) -> Race {
        self.player
    }

    pub fn stock(&self, kind: ResourceType) -> u32 {
        self.stock.get(&kind).copied().unwrap_or(0)
    }

    pub fn stockpile(&self) -> &BTreeMap<ResourceType, u32> {
        &self.stock
    }

    pub fn set_warehouse(&mut self, race: Race, tile: Position) {
        self.warehouses.insert(race, tile);
    }

    pub fn remove_warehouse(&mut self, race: Race) -> Option<Position> {
        self.warehouses.remove(&race)
    }

    pub fn claim(&mut self, entity: EntityId) {
        self.owned.insert(entity);
    }

    pub fn release(&mut self, entity: EntityId) {
        self.owned.remove(&entity);
    }
}

impl Economy for PlayerLedger {
    fn increase_resource(&mut self, kind: ResourceType, amount: u32) {
        let total = self.stock.entry(kind).or_default();
        *total = total.saturating_add(amount);
        tracing::debug!(resource = %kind, amount, total = *total, "stockpile increased");
    }

    fn warehouse(&self, race: Race) -> Option<Position> {
        self.warehouses.get(&race).copied()
    }

    fn owns(&self, entity: EntityId) -> bool {
        self.owned.contains(&entity)
    }
}
