//! Unit template loader.

use std::collections::BTreeSet;
use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::units::UnitTemplate;

/// Loader for unit templates from RON files.
pub struct UnitLoader;

impl UnitLoader {
    /// Load unit templates from a RON file.
    ///
    /// RON format: `Vec<UnitTemplate>`
    pub fn load(path: &Path) -> LoadResult<Vec<UnitTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid unit templates {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<UnitTemplate>> {
        let templates: Vec<UnitTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit templates RON: {}", e))?;
        Self::validate(&templates)?;
        Ok(templates)
    }

    fn validate(templates: &[UnitTemplate]) -> LoadResult<()> {
        let mut names = BTreeSet::new();
        for template in templates {
            anyhow::ensure!(
                names.insert(template.name.as_str()),
                "duplicate unit template '{}'",
                template.name
            );
            anyhow::ensure!(
                template.max_health > 0,
                "unit '{}' must have health",
                template.name
            );
            anyhow::ensure!(
                template.speed > 0.0,
                "unit '{}' must have a positive speed",
                template.name
            );
            if let Some(key) = template.unknown_animations().next() {
                anyhow::bail!(
                    "unit '{}' animates unknown state '{}'",
                    template.name,
                    key
                );
            }
            if let Some(harvest) = template.harvest {
                anyhow::ensure!(
                    harvest.capacity > 0,
                    "unit '{}' harvests nothing per trip",
                    template.name
                );
            }
        }
        Ok(())
    }
}
