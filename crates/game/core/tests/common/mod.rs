//! Fake collaborators shared by the integration tests.
#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use skirmish_core::{
    Animator, Attacker, Collidable, CoreConfig, Economy, EntityId, Extractor, Hud, MapDimensions,
    Pathfindable, Position, Race, ResourceType, Selectable, Services, TerrainKind, TerrainMap,
    Unit, UnitBuilder, unit_graph,
};

/// What the fake parts of one unit have been asked to do.
#[derive(Debug)]
pub struct Record {
    pub tile: Position,
    pub moving: bool,
    pub destination: Option<Position>,
    pub facing: Option<Position>,
    pub moves_stopped: u32,
    pub attacks_stopped: u32,
    pub resource: Option<(ResourceType, Position)>,
    pub extractions_stopped: u32,
    pub collidable: bool,
    pub selectable: bool,
    pub highlighted: bool,
    pub animations: Vec<&'static str>,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            tile: Position::ORIGIN,
            moving: false,
            destination: None,
            facing: None,
            moves_stopped: 0,
            attacks_stopped: 0,
            resource: None,
            extractions_stopped: 0,
            collidable: true,
            selectable: true,
            highlighted: false,
            animations: Vec::new(),
        }
    }
}

/// Handle implementing every unit part on top of one shared [`Record`].
#[derive(Clone, Default)]
pub struct Rig(Arc<Mutex<Record>>);

impl Rig {
    pub fn at(tile: Position) -> Self {
        let rig = Self::default();
        rig.get().tile = tile;
        rig
    }

    pub fn get(&self) -> MutexGuard<'_, Record> {
        self.0.lock().unwrap()
    }

    pub fn set_moving(&self, moving: bool) {
        self.get().moving = moving;
    }

    pub fn set_resource(&self, kind: ResourceType, tile: Position) {
        self.get().resource = Some((kind, tile));
    }
}

impl Pathfindable for Rig {
    fn tile(&self) -> Position {
        self.get().tile
    }

    fn set_destination(&mut self, tile: Position) {
        let mut record = self.get();
        record.destination = Some(tile);
        record.moving = true;
    }

    fn point_to(&mut self, tile: Position) {
        self.get().facing = Some(tile);
    }

    fn is_moving(&self) -> bool {
        self.get().moving
    }

    fn stop_moves(&mut self) {
        let mut record = self.get();
        record.moving = false;
        record.moves_stopped += 1;
    }
}

impl Attacker for Rig {
    fn stop_attack(&mut self) {
        self.get().attacks_stopped += 1;
    }
}

impl Extractor for Rig {
    fn resource_location(&self) -> Option<Position> {
        self.get().resource.map(|(_, tile)| tile)
    }

    fn set_resource(&mut self, kind: ResourceType, tile: Position) {
        self.get().resource = Some((kind, tile));
    }

    fn stop_extraction(&mut self) {
        let mut record = self.get();
        record.resource = None;
        record.extractions_stopped += 1;
    }
}

impl Collidable for Rig {
    fn set_enabled(&mut self, enabled: bool) {
        self.get().collidable = enabled;
    }
}

impl Selectable for Rig {
    fn on_selection(&mut self, selected: bool) {
        self.get().highlighted = selected;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.get().selectable = enabled;
    }
}

impl Animator for Rig {
    fn play(&mut self, animation: &'static str) {
        self.get().animations.push(animation);
    }
}

pub struct Grid {
    pub width: u32,
    pub tiles: Vec<TerrainKind>,
    pub resolved: Vec<Position>,
}

impl Grid {
    pub fn parse(rows: &[&str]) -> Self {
        Self {
            width: rows[0].len() as u32,
            tiles: rows
                .iter()
                .flat_map(|row| row.chars())
                .map(|glyph| TerrainKind::from_glyph(glyph).unwrap())
                .collect(),
            resolved: Vec::new(),
        }
    }

    fn index(&self, tile: Position) -> Option<usize> {
        self.contains(tile)
            .then(|| tile.y as usize * self.width as usize + tile.x as usize)
    }
}

impl TerrainMap for Grid {
    fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.width, self.tiles.len() as u32 / self.width)
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
        self.resolved.push(tile);
    }
}

#[derive(Default)]
pub struct Ledger {
    pub stock: BTreeMap<ResourceType, u32>,
    pub warehouses: BTreeMap<Race, Position>,
    pub owned: BTreeSet<EntityId>,
}

impl Ledger {
    pub fn stock(&self, kind: ResourceType) -> u32 {
        self.stock.get(&kind).copied().unwrap_or(0)
    }
}

impl Economy for Ledger {
    fn increase_resource(&mut self, kind: ResourceType, amount: u32) {
        *self.stock.entry(kind).or_default() += amount;
    }

    fn warehouse(&self, race: Race) -> Option<Position> {
        self.warehouses.get(&race).copied()
    }

    fn owns(&self, entity: EntityId) -> bool {
        self.owned.contains(&entity)
    }
}

#[derive(Default)]
pub struct Panel {
    pub selection: BTreeSet<EntityId>,
    pub menu_clears: u32,
    pub carry_label: Option<bool>,
}

impl Hud for Panel {
    fn remove_from_selection(&mut self, entity: EntityId) -> bool {
        self.selection.remove(&entity)
    }

    fn clear_menus(&mut self) {
        self.menu_clears += 1;
    }

    fn switch_extract_carry(&mut self, carry: bool) {
        self.carry_label = Some(carry);
    }
}

/// Shared services for a test.
pub struct World {
    pub map: Grid,
    pub economy: Ledger,
    pub hud: Panel,
}

impl World {
    pub fn new(rows: &[&str]) -> Self {
        Self {
            map: Grid::parse(rows),
            economy: Ledger::default(),
            hud: Panel::default(),
        }
    }

    /// A world where humans have a warehouse and the player owns unit #1.
    pub fn with_warehouse(rows: &[&str], warehouse: Position) -> Self {
        let mut world = Self::new(rows);
        world.economy.warehouses.insert(Race::Human, warehouse);
        world.economy.owned.insert(EntityId(1));
        world
    }

    pub fn services(&mut self) -> Services<'_> {
        Services::new(&mut self.map, &mut self.economy, &mut self.hud)
    }
}

pub fn spawn(id: u32, rig: &Rig) -> Unit {
    spawn_with(id, rig, CoreConfig::default())
}

pub fn spawn_with(id: u32, rig: &Rig, config: CoreConfig) -> Unit {
    UnitBuilder::new(EntityId(id), Race::Human)
        .max_health(40)
        .config(config)
        .pathfinder(rig.clone())
        .attacker(rig.clone())
        .extractor(rig.clone())
        .collidable(rig.clone())
        .selectable(rig.clone())
        .animator(rig.clone())
        .build(Arc::new(unit_graph().unwrap()))
        .unwrap()
}
