//! Map layouts.

use skirmish_core::{MapDimensions, Position, Race, TerrainKind};

/// Terrain grid plus the warehouse of each race and the gold mines.
///
/// Built by [`MapLoader`](crate::MapLoader) from glyph rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapLayout {
    dimensions: MapDimensions,
    tiles: Vec<TerrainKind>,
    warehouses: Vec<(Race, Position)>,
    mines: Vec<Position>,
}

impl MapLayout {
    /// Returns `None` if `tiles` does not cover `dimensions` exactly.
    pub fn new(
        dimensions: MapDimensions,
        tiles: Vec<TerrainKind>,
        warehouses: Vec<(Race, Position)>,
    ) -> Option<Self> {
        let area = dimensions.width as usize * dimensions.height as usize;
        (tiles.len() == area).then_some(Self {
            dimensions,
            tiles,
            warehouses,
            mines: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_mines(mut self, mines: Vec<Position>) -> Self {
        self.mines = mines;
        self
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn terrain(&self, tile: Position) -> Option<TerrainKind> {
        if !self.dimensions.contains(tile) {
            return None;
        }
        let index = tile.y as usize * self.dimensions.width as usize + tile.x as usize;
        self.tiles.get(index).copied()
    }

    pub fn tiles(&self) -> &[TerrainKind] {
        &self.tiles
    }

    pub fn warehouses(&self) -> &[(Race, Position)] {
        &self.warehouses
    }

    pub fn warehouse(&self, race: Race) -> Option<Position> {
        self.warehouses
            .iter()
            .find(|(owner, _)| *owner == race)
            .map(|(_, tile)| *tile)
    }

    pub fn mines(&self) -> &[Position] {
        &self.mines
    }

    /// Renders the terrain back to glyph rows.
    pub fn rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.dimensions.width.max(1) as usize)
            .map(|row| row.iter().map(|terrain| terrain.glyph()).collect())
            .collect()
    }
}
