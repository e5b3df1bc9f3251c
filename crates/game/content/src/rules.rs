//! Simulation rules.

use skirmish_core::CoreConfig;

/// Contents of `config.toml`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    pub unit: CoreConfig,
    pub simulation: SimulationConfig,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Seconds simulated per tick.
    pub tick_seconds: f64,
    /// Seconds a corpse stays on the map. Negative keeps it forever.
    pub corpse_delay: f64,
}

impl SimulationConfig {
    pub const DEFAULT_TICK_SECONDS: f64 = 0.05;
    pub const DEFAULT_CORPSE_DELAY: f64 = 5.0;
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_seconds: Self::DEFAULT_TICK_SECONDS,
            corpse_delay: Self::DEFAULT_CORPSE_DELAY,
        }
    }
}
