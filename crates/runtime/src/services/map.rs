//! Tile grid served through [`skirmish_core::TerrainMap`].
use std::collections::BTreeSet;

use bitflags::bitflags;
use skirmish_content::MapLayout;
use skirmish_core::{MapDimensions, Position, ResourceType, TerrainKind, TerrainMap};

bitflags! {
    /// Sides of a tile bordering a different kind of terrain.
    ///
    /// Drives the transition sprites drawn between forest and open ground.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        const NORTH = 1 << 0;
        const EAST  = 1 << 1;
        const SOUTH = 1 << 2;
        const WEST  = 1 << 3;
    }
}

const SIDES: [Edges; 4] = [Edges::NORTH, Edges::EAST, Edges::SOUTH, Edges::WEST];

/// Mutable terrain grid with gold mines and transition edges.
#[derive(Clone, Debug)]
pub struct GridMap {
    dimensions: MapDimensions,
    tiles: Vec<TerrainKind>,
    edges: Vec<Edges>,
    mines: BTreeSet<Position>,
    resolutions: u64,
}

impl GridMap {
    pub fn from_layout(layout: &MapLayout) -> Self {
        let dimensions = layout.dimensions();
        let mut map = Self {
            dimensions,
            tiles: layout.tiles().to_vec(),
            edges: vec![Edges::empty(); layout.tiles().len()],
            mines: layout.mines().iter().copied().collect(),
            resolutions: 0,
        };
        for y in 0..dimensions.height as i32 {
            for x in 0..dimensions.width as i32 {
                map.recompute(Position::new(x, y));
            }
        }
        map
    }

    /// Resource harvestable at `tile`, if any.
    pub fn resource_at(&self, tile: Position) -> Option<ResourceType> {
        if self.mines.contains(&tile) {
            return Some(ResourceType::Gold);
        }
        self.terrain(tile)
            .filter(|terrain| terrain.is_tree())
            .map(|_| ResourceType::Wood)
    }

    /// Units may stand on passable terrain that is not a mine.
    pub fn is_walkable(&self, tile: Position) -> bool {
        !self.mines.contains(&tile) && self.terrain(tile).is_some_and(TerrainKind::is_passable)
    }

    pub fn edges(&self, tile: Position) -> Option<Edges> {
        self.index(tile).map(|index| self.edges[index])
    }

    /// Number of transition resolutions requested so far.
    pub fn resolutions(&self) -> u64 {
        self.resolutions
    }

    pub fn count(&self, terrain: TerrainKind) -> usize {
        self.tiles.iter().filter(|tile| **tile == terrain).count()
    }

    pub fn rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.dimensions.width.max(1) as usize)
            .map(|row| row.iter().map(|terrain| terrain.glyph()).collect())
            .collect()
    }

    fn index(&self, tile: Position) -> Option<usize> {
        self.dimensions
            .contains(tile)
            .then(|| tile.y as usize * self.dimensions.width as usize + tile.x as usize)
    }

    fn recompute(&mut self, tile: Position) {
        let Some(index) = self.index(tile) else {
            return;
        };
        let forest = self.tiles[index].is_tree();
        let mut edges = Edges::empty();
        for (side, neighbour) in SIDES.into_iter().zip(tile.neighbours()) {
            if let Some(other) = self.terrain(neighbour)
                && other.is_tree() != forest
            {
                edges |= side;
            }
        }
        self.edges[index] = edges;
    }
}

impl TerrainMap for GridMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn terrain(&self, tile: Position) -> Option<TerrainKind> {
        self.index(tile).map(|index| self.tiles[index])
    }

    fn set_terrain(&mut self, tile: Position, terrain: TerrainKind) {
        if let Some(index) = self.index(tile) {
            self.tiles[index] = terrain;
        }
    }

    fn resolve_transitions(&mut self, tile: Position) {
        self.resolutions += 1;
        self.recompute(tile);
        for neighbour in tile.neighbours() {
            self.recompute(neighbour);
        }
    }
}
