//! Identity enums shared by units, economy, and content.

/// Harvestable resource types.
///
/// Parsed from and printed as `"wood"` / `"gold"`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResourceType {
    /// Cut from tree tiles; each carry load fells the tree.
    Wood,
    /// Mined from gold mines.
    Gold,
}

impl ResourceType {
    /// Directional resources make the worker face the resource tile while
    /// extracting.
    pub fn is_directional(self) -> bool {
        matches!(self, ResourceType::Wood)
    }
}

/// Playable race, which doubles as the faction a unit fights for.
///
/// Each race owns its own warehouses.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Race {
    #[default]
    Human,
    Orc,
}
