//! Content factory for loading a whole skirmish from a data directory.

use std::path::{Path, PathBuf};

use crate::loaders::{ConfigLoader, LoadResult, MapLoader, ScenarioLoader, UnitLoader};
use crate::map::MapLayout;
use crate::rules::RulesConfig;
use crate::scenario::Scenario;
use crate::units::UnitTemplate;

/// Everything needed to start a skirmish.
#[derive(Clone, Debug)]
pub struct Content {
    pub rules: RulesConfig,
    pub units: Vec<UnitTemplate>,
    pub map: MapLayout,
    pub scenario: Scenario,
}

/// Content factory that loads all skirmish content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── units.ron
/// ├── map.ron
/// └── scenario.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rules from `config.toml`, or the defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(RulesConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load unit templates from `units.ron`.
    pub fn load_units(&self) -> LoadResult<Vec<UnitTemplate>> {
        UnitLoader::load(&self.data_dir.join("units.ron"))
    }

    /// Load the map from `map.ron`.
    pub fn load_map(&self) -> LoadResult<MapLayout> {
        MapLoader::load(&self.data_dir.join("map.ron"))
    }

    /// Load the scenario from `scenario.ron`.
    pub fn load_scenario(
        &self,
        templates: &[UnitTemplate],
        layout: &MapLayout,
    ) -> LoadResult<Scenario> {
        ScenarioLoader::load(&self.data_dir.join("scenario.ron"), templates, layout)
    }

    /// Load every file of the directory.
    pub fn load_all(&self) -> LoadResult<Content> {
        let rules = self.load_config()?;
        let units = self.load_units()?;
        let map = self.load_map()?;
        let scenario = self.load_scenario(&units, &map)?;

        Ok(Content {
            rules,
            units,
            map,
            scenario,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
