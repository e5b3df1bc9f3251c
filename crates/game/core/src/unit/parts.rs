//! Per-unit collaborators.
//!
//! Each unit owns one handle of every part. The handles are thin: the actual
//! subsystems (pathfinding, combat, extraction, collision, selection,
//! animation) live outside the core and only need to honour these contracts.

use crate::common::Position;
use crate::kinds::ResourceType;

/// Movement along computed routes.
pub trait Pathfindable: Send {
    /// Tile the unit currently stands on.
    fn tile(&self) -> Position;

    /// Starts walking to `tile`.
    fn set_destination(&mut self, tile: Position);

    /// Turns to face `tile` without moving.
    fn point_to(&mut self, tile: Position);

    fn is_moving(&self) -> bool;

    fn stop_moves(&mut self);
}

pub trait Attacker: Send {
    fn stop_attack(&mut self);
}

/// Resource extraction driver.
pub trait Extractor: Send {
    /// Tile of the resource currently targeted, if any.
    fn resource_location(&self) -> Option<Position>;

    /// Retargets the ongoing extraction cycle.
    fn set_resource(&mut self, kind: ResourceType, tile: Position);

    fn stop_extraction(&mut self);
}

pub trait Collidable: Send {
    fn set_enabled(&mut self, enabled: bool);
}

pub trait Selectable: Send {
    /// Shows or hides the selection highlight.
    fn on_selection(&mut self, selected: bool);

    /// Allows or forbids the unit from being picked.
    fn set_enabled(&mut self, enabled: bool);
}

/// Presentation hook for the per-state animation.
pub trait Animator: Send {
    fn play(&mut self, animation: &'static str);
}

/// Animator for units nobody draws.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAnimation;

impl Animator for NoAnimation {
    fn play(&mut self, _animation: &'static str) {}
}

pub(crate) struct UnitParts {
    pub(crate) pathfinder: Box<dyn Pathfindable>,
    pub(crate) attacker: Box<dyn Attacker>,
    pub(crate) extractor: Box<dyn Extractor>,
    pub(crate) collidable: Box<dyn Collidable>,
    pub(crate) selectable: Box<dyn Selectable>,
    pub(crate) animator: Box<dyn Animator>,
}

impl UnitParts {
    /// Halts every in-flight action.
    pub(crate) fn stop_all(&mut self) {
        self.attacker.stop_attack();
        self.pathfinder.stop_moves();
        self.extractor.stop_extraction();
    }
}
