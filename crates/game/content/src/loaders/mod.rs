//! Content loaders for reading skirmish data from files.
//!
//! Every loader parses a RON/TOML file and validates it before handing it out,
//! so the runtime can trust what it gets.

pub mod config;
pub mod factory;
pub mod map;
pub mod scenario;
pub mod units;

pub use config::ConfigLoader;
pub use factory::{Content, ContentFactory};
pub use map::MapLoader;
pub use scenario::ScenarioLoader;
pub use units::UnitLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
