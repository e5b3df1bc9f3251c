//! Map layout loader.
//!
//! Maps are drawn as rows of terrain glyphs:
//!
//! ```text
//! .  ground      T  tree       t  felled tree
//! ~  water       ^  mountain
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use skirmish_core::{MapDimensions, Position, Race, TerrainKind};

use crate::loaders::{LoadResult, read_file};
use crate::map::MapLayout;

/// Map data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapLayoutRon {
    rows: Vec<String>,
    #[serde(default)]
    warehouses: Vec<(Race, (i32, i32))>,
    #[serde(default)]
    mines: Vec<(i32, i32)>,
}

/// Loader for map layouts from RON files.
pub struct MapLoader;

impl MapLoader {
    pub fn load(path: &Path) -> LoadResult<MapLayout> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("Invalid map {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<MapLayout> {
        let data: MapLayoutRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;
        let layout = Self::from_rows(&data.rows, data.warehouses)?;

        let mines: Vec<Position> = data
            .mines
            .into_iter()
            .map(|(x, y)| Position::new(x, y))
            .collect();
        for mine in &mines {
            anyhow::ensure!(
                layout.terrain(*mine).is_some(),
                "gold mine at {} is off the map",
                mine
            );
        }
        Ok(layout.with_mines(mines))
    }

    /// Builds a layout from glyph rows.
    ///
    /// Rows must be non-empty and equally long, and each warehouse must stand
    /// on a passable tile.
    pub fn from_rows<S: AsRef<str>>(
        rows: &[S],
        warehouses: Vec<(Race, (i32, i32))>,
    ) -> LoadResult<MapLayout> {
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        anyhow::ensure!(width > 0, "map has no tiles");

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            anyhow::ensure!(
                row.chars().count() == width,
                "row {} is {} tiles wide, expected {}",
                y,
                row.chars().count(),
                width
            );
            for (x, glyph) in row.chars().enumerate() {
                let terrain = TerrainKind::from_glyph(glyph).ok_or_else(|| {
                    anyhow::anyhow!("unknown terrain glyph '{}' at ({}, {})", glyph, x, y)
                })?;
                tiles.push(terrain);
            }
        }

        let dimensions = MapDimensions::new(width as u32, rows.len() as u32);
        let warehouses: Vec<(Race, Position)> = warehouses
            .into_iter()
            .map(|(race, (x, y))| (race, Position::new(x, y)))
            .collect();

        let layout = MapLayout::new(dimensions, tiles, warehouses)
            .ok_or_else(|| anyhow::anyhow!("map tiles do not match its dimensions"))?;

        for (race, tile) in layout.warehouses() {
            let terrain = layout
                .terrain(*tile)
                .ok_or_else(|| anyhow::anyhow!("{} warehouse at {} is off the map", race, tile))?;
            anyhow::ensure!(
                terrain.is_passable(),
                "{} warehouse at {} stands on {:?}",
                race,
                tile,
                terrain
            );
        }

        Ok(layout)
    }
}
