//! Tile-stepping movement.
use skirmish_core::{Pathfindable, Position};

use crate::services::GridMap;
use crate::shared::Shared;

#[derive(Clone, Debug)]
pub struct Mover {
    tile: Position,
    destination: Option<Position>,
    facing: Option<Position>,
    /// Tiles per second.
    speed: f64,
    progress: f64,
}

impl Mover {
    pub fn new(tile: Position, speed: f64) -> Self {
        Self {
            tile,
            destination: None,
            facing: None,
            speed,
            progress: 0.0,
        }
    }

    pub fn tile(&self) -> Position {
        self.tile
    }

    pub fn destination(&self) -> Option<Position> {
        self.destination
    }

    pub fn facing(&self) -> Option<Position> {
        self.facing
    }

    pub fn is_moving(&self) -> bool {
        self.destination.is_some()
    }

    /// Teleports to `tile` and forgets any route.
    pub fn place(&mut self, tile: Position) {
        self.tile = tile;
        self.destination = None;
        self.facing = None;
        self.progress = 0.0;
    }

    /// Retargeting while already walking keeps the progress made toward the
    /// next tile.
    pub fn set_destination(&mut self, tile: Position) {
        if self.destination.is_none() {
            self.progress = 0.0;
        }
        self.destination = (tile != self.tile).then_some(tile);
    }

    pub fn stop(&mut self) {
        self.destination = None;
        self.progress = 0.0;
    }

    /// Walks toward the destination.
    ///
    /// Steps go diagonally when possible and fall back to a single axis when
    /// the diagonal is blocked. An unwalkable destination (a tree, a mine) is
    /// reached by standing next to it. A unit with no way forward gives up.
    pub fn advance(&mut self, delta: f64, map: &GridMap) {
        let Some(destination) = self.destination else {
            return;
        };
        self.progress += self.speed * delta;

        while self.progress >= 1.0 {
            if self.has_reached(destination, map) {
                break;
            }
            match self.next_step(destination, map) {
                Some(next) => {
                    self.facing = Some(next);
                    self.tile = next;
                    self.progress -= 1.0;
                }
                None => {
                    tracing::debug!(tile = ?self.tile, to = ?destination, "path blocked");
                    break;
                }
            }
        }

        if self.has_reached(destination, map) || self.next_step(destination, map).is_none() {
            self.stop();
        }
    }

    fn has_reached(&self, destination: Position, map: &GridMap) -> bool {
        self.tile == destination
            || (!map.is_walkable(destination) && self.tile.chebyshev(destination) <= 1)
    }

    fn next_step(&self, destination: Position, map: &GridMap) -> Option<Position> {
        let dx = (destination.x - self.tile.x).signum();
        let dy = (destination.y - self.tile.y).signum();
        [
            self.tile.offset(dx, dy),
            self.tile.offset(dx, 0),
            self.tile.offset(0, dy),
        ]
        .into_iter()
        .filter(|next| *next != self.tile)
        .find(|next| map.is_walkable(*next))
    }
}

impl Pathfindable for Shared<Mover> {
    fn tile(&self) -> Position {
        self.lock().tile
    }

    fn set_destination(&mut self, tile: Position) {
        self.lock().set_destination(tile);
    }

    fn point_to(&mut self, tile: Position) {
        self.lock().facing = Some(tile);
    }

    fn is_moving(&self) -> bool {
        self.lock().is_moving()
    }

    fn stop_moves(&mut self) {
        self.lock().stop();
    }
}
