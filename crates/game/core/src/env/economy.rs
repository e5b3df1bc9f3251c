use crate::common::{EntityId, Position};
use crate::kinds::{Race, ResourceType};

/// Player-side economy: stockpiles, warehouses, and unit ownership.
pub trait Economy: Send + Sync {
    /// Credits the controlling player's stockpile.
    fn increase_resource(&mut self, kind: ResourceType, amount: u32);

    /// Drop-off tile of the warehouse serving `race`, if one stands.
    fn warehouse(&self, race: Race) -> Option<Position>;

    /// Returns true if the controlling player owns `entity`.
    fn owns(&self, entity: EntityId) -> bool;
}
