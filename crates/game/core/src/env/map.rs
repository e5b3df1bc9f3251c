use crate::common::Position;

/// Mutable terrain shared by every unit on the map.
pub trait TerrainMap: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    /// Terrain at `tile`, or `None` outside the map.
    fn terrain(&self, tile: Position) -> Option<TerrainKind>;

    fn set_terrain(&mut self, tile: Position, terrain: TerrainKind);

    /// Recomputes the transition (edge) tiles around `tile` after it changed.
    fn resolve_transitions(&mut self, tile: Position);

    fn contains(&self, tile: Position) -> bool {
        self.dimensions().contains(tile)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, tile: Position) -> bool {
        tile.x >= 0 && tile.y >= 0 && tile.x < self.width as i32 && tile.y < self.height as i32
    }
}

/// Terrain classes for map tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Ground,
    Tree,
    /// Stump left behind once a tree has been harvested.
    TreeCut,
    Water,
    Mountain,
    Custom(u16),
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        matches!(self, TerrainKind::Ground | TerrainKind::TreeCut)
    }

    pub fn is_tree(self) -> bool {
        matches!(self, TerrainKind::Tree)
    }

    /// Map-file glyph for this terrain.
    pub fn glyph(self) -> char {
        match self {
            TerrainKind::Ground => '.',
            TerrainKind::Tree => 'T',
            TerrainKind::TreeCut => 't',
            TerrainKind::Water => '~',
            TerrainKind::Mountain => '^',
            TerrainKind::Custom(_) => '?',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(TerrainKind::Ground),
            'T' => Some(TerrainKind::Tree),
            't' => Some(TerrainKind::TreeCut),
            '~' => Some(TerrainKind::Water),
            '^' => Some(TerrainKind::Mountain),
            _ => None,
        }
    }
}

/// Fells the tree at `tile` and resolves the surrounding transitions.
///
/// Returns false, leaving the map untouched, if `tile` no longer holds a tree.
/// The check and the mutation happen under the same exclusive borrow, so two
/// units harvesting the same tree cannot both fell it.
pub fn cut_tree<M: TerrainMap + ?Sized>(map: &mut M, tile: Position) -> bool {
    if map.terrain(tile) != Some(TerrainKind::Tree) {
        return false;
    }
    map.set_terrain(tile, TerrainKind::TreeCut);
    map.resolve_transitions(tile);
    true
}

/// Finds the next tree to harvest after the one at `around`.
///
/// Candidates are tree tiles within `radius` of `around` (excluding `around`
/// itself) with at least one passable orthogonal neighbour to stand on. The
/// candidate nearest to `from` wins; ties go to the lower row, then the lower
/// column.
pub fn closest_tree<M: TerrainMap + ?Sized>(
    map: &M,
    around: Position,
    from: Position,
    radius: u32,
) -> Option<Position> {
    let dimensions = map.dimensions();
    let radius = i32::try_from(radius.min(dimensions.width.max(dimensions.height)))
        .unwrap_or(i32::MAX);
    (-radius..=radius)
        .flat_map(|dy| (-radius..=radius).map(move |dx| around.offset(dx, dy)))
        .filter(|&tile| tile != around)
        .filter(|&tile| map.terrain(tile).is_some_and(TerrainKind::is_tree))
        .filter(|&tile| is_reachable(map, tile))
        .min_by_key(|tile| (tile.distance_squared(from), tile.y, tile.x))
}

fn is_reachable<M: TerrainMap + ?Sized>(map: &M, tile: Position) -> bool {
    tile.neighbours()
        .into_iter()
        .any(|neighbour| map.terrain(neighbour).is_some_and(TerrainKind::is_passable))
}
