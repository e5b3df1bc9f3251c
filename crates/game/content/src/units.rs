//! Unit templates.

use std::collections::BTreeMap;

use skirmish_core::{Race, UnitStateKind};

/// Blueprint every spawned unit of a kind is assembled from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitTemplate {
    pub name: String,
    pub race: Race,
    pub max_health: u32,
    /// Tiles per second.
    pub speed: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack: Option<AttackProfile>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub harvest: Option<HarvestProfile>,
    /// Keyed by state name (`"idle"`, `"extract_wood"`, ...).
    #[cfg_attr(feature = "serde", serde(default))]
    pub animations: BTreeMap<String, AnimationSpec>,
}

impl UnitTemplate {
    pub fn new(name: impl Into<String>, race: Race, max_health: u32, speed: f64) -> Self {
        Self {
            name: name.into(),
            race,
            max_health,
            speed,
            attack: None,
            harvest: None,
            animations: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_attack(mut self, attack: AttackProfile) -> Self {
        self.attack = Some(attack);
        self
    }

    #[must_use]
    pub fn with_harvest(mut self, harvest: HarvestProfile) -> Self {
        self.harvest = Some(harvest);
        self
    }

    pub fn animation(&self, state: UnitStateKind) -> Option<&AnimationSpec> {
        self.animations.get(state.as_ref())
    }

    /// Animation keys that do not name a unit state.
    pub fn unknown_animations(&self) -> impl Iterator<Item = &str> {
        self.animations
            .keys()
            .map(String::as_str)
            .filter(|key| key.parse::<UnitStateKind>().is_err())
    }
}

/// How a unit fights.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackProfile {
    pub damage: u32,
    /// Seconds between two hits.
    pub interval: f64,
    /// Reach in tiles (king moves).
    #[cfg_attr(feature = "serde", serde(default = "AttackProfile::melee"))]
    pub range: u32,
}

impl AttackProfile {
    pub const fn melee() -> u32 {
        1
    }
}

/// How a worker gathers resources.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarvestProfile {
    /// Load carried back per trip.
    pub capacity: u32,
    /// Seconds spent extracting one load.
    pub extraction_time: f64,
    /// Seconds spent inside the warehouse.
    pub drop_off_time: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSpec {
    pub frames: u32,
    pub frame_time: f64,
    #[cfg_attr(feature = "serde", serde(default = "AnimationSpec::looping_default"))]
    pub looping: bool,
}

impl AnimationSpec {
    const fn looping_default() -> bool {
        true
    }

    /// Duration of one full cycle in seconds.
    pub fn duration(&self) -> f64 {
        f64::from(self.frames) * self.frame_time
    }
}
