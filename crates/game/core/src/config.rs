/// Tunable parameters of the unit behavior engine.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CoreConfig {
    /// Seconds a unit stays in the death state before it is destroyed.
    pub death_delay: f64,
    /// Radius, in tiles around a felled tree, searched for the next tree.
    pub tree_search_radius: u32,
}

impl CoreConfig {
    pub const DEFAULT_DEATH_DELAY: f64 = 1.0;
    pub const DEFAULT_TREE_SEARCH_RADIUS: u32 = 1;

    pub const fn new() -> Self {
        Self {
            death_delay: Self::DEFAULT_DEATH_DELAY,
            tree_search_radius: Self::DEFAULT_TREE_SEARCH_RADIUS,
        }
    }

    #[must_use]
    pub const fn with_death_delay(mut self, death_delay: f64) -> Self {
        self.death_delay = death_delay;
        self
    }

    #[must_use]
    pub const fn with_tree_search_radius(mut self, radius: u32) -> Self {
        self.tree_search_radius = radius;
        self
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
