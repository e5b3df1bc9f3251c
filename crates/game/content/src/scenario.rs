//! Opening setup of a skirmish.

use skirmish_core::{Position, Race};

/// Units placed on the map when the skirmish starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    /// Race controlled by the player. The player owns every unit of it.
    pub player: Race,
    pub units: Vec<SpawnSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnSpec {
    /// Name of a [`UnitTemplate`](crate::UnitTemplate).
    pub template: String,
    pub race: Race,
    pub tile: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    pub order: Option<OrderSpec>,
    /// Starts in the player's selection.
    #[cfg_attr(feature = "serde", serde(default))]
    pub selected: bool,
}

/// First order given to a spawned unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderSpec {
    Move(Position),
    /// Harvest the resource at the tile.
    Harvest(Position),
    /// Attack the unit spawned at this index of [`Scenario::units`].
    Attack(usize),
}
