//! Rules configuration loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::rules::RulesConfig;

/// Loader for simulation rules from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load rules from a TOML file.
    ///
    /// Missing sections and keys fall back to their defaults.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        let config: RulesConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(
            config.simulation.tick_seconds > 0.0,
            "tick_seconds must be positive, got {}",
            config.simulation.tick_seconds
        );
        anyhow::ensure!(
            config.unit.death_delay >= 0.0,
            "death_delay must not be negative, got {}",
            config.unit.death_delay
        );

        Ok(config)
    }
}
