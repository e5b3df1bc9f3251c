//! The extraction cycle: go to a resource, extract a load, carry it to the
//! warehouse, drop it off, and go back.
//!
//! The harvester only reports progress as [`UnitEvent`]s. It is the unit that
//! reacts by walking, felling trees and crediting the player.
use skirmish_content::HarvestProfile;
use skirmish_core::{Extractor, Position, ResourceType, UnitEvent};

use crate::shared::Shared;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    GotoResource,
    Extracting { remaining: f64 },
    Carrying,
    DroppingOff { remaining: f64 },
}

/// What the harvester needs to know about its unit each tick.
#[derive(Clone, Copy, Debug)]
pub struct Progress {
    pub tile: Position,
    pub moving: bool,
    pub carrying: bool,
    /// Drop-off tile of the unit's race, if it has one.
    pub warehouse: Option<Position>,
}

#[derive(Clone, Debug)]
pub struct Harvester {
    profile: Option<HarvestProfile>,
    kind: Option<ResourceType>,
    location: Option<Position>,
    phase: Phase,
    stopping: bool,
}

impl Harvester {
    pub fn new(profile: Option<HarvestProfile>) -> Self {
        Self {
            profile,
            kind: None,
            location: None,
            phase: Phase::Idle,
            stopping: false,
        }
    }

    pub fn can_harvest(&self) -> bool {
        self.profile.is_some()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn location(&self) -> Option<Position> {
        self.location
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Starts a new cycle on the resource at `location`.
    pub fn start(&mut self, kind: ResourceType, location: Position) -> Option<UnitEvent> {
        self.profile?;
        self.kind = Some(kind);
        self.location = Some(location);
        self.phase = Phase::GotoResource;
        self.stopping = false;
        Some(UnitEvent::StartGotoResource { kind, location })
    }

    /// Abandons the cycle on the spot.
    ///
    /// A load still being carried is dropped where the unit stands and never
    /// reaches the warehouse.
    pub fn cancel(&mut self) -> Vec<UnitEvent> {
        let mut events = Vec::new();
        if let (Some(kind), Phase::Carrying | Phase::DroppingOff { .. }) = (self.kind, self.phase) {
            events.push(UnitEvent::DroppedOff { kind, remaining: 0 });
        }
        if self.is_active() {
            events.push(UnitEvent::ExtractionStopped);
        }
        self.reset();
        events
    }

    pub fn reset(&mut self) {
        self.kind = None;
        self.location = None;
        self.phase = Phase::Idle;
        self.stopping = false;
    }

    /// Advances the cycle by `delta` seconds.
    ///
    /// `has_resource` tells whether the targeted tile still holds something
    /// to extract.
    pub fn advance(
        &mut self,
        delta: f64,
        unit: Progress,
        has_resource: impl Fn(Position) -> bool,
    ) -> Vec<UnitEvent> {
        let (Some(profile), Some(kind)) = (self.profile, self.kind) else {
            return Vec::new();
        };

        match self.phase {
            Phase::Idle => Vec::new(),
            Phase::GotoResource | Phase::Extracting { .. } if self.stopping => self.halt(),
            Phase::GotoResource => {
                if unit.moving {
                    return Vec::new();
                }
                match self.location {
                    Some(location)
                        if unit.tile.chebyshev(location) <= 1 && has_resource(location) =>
                    {
                        self.phase = Phase::Extracting {
                            remaining: profile.extraction_time,
                        };
                        vec![UnitEvent::StartExtraction { kind, location }]
                    }
                    _ => self.halt(),
                }
            }
            Phase::Extracting { remaining } => {
                let remaining = remaining - delta;
                if remaining > 0.0 {
                    self.phase = Phase::Extracting { remaining };
                    return Vec::new();
                }
                self.phase = Phase::Carrying;
                vec![UnitEvent::StartCarry {
                    kind,
                    quantity: profile.capacity,
                }]
            }
            Phase::Carrying => {
                if !unit.carrying {
                    // Nothing was loaded: the tree fell under another unit.
                    return match self.location {
                        Some(location) if !self.stopping => {
                            self.phase = Phase::GotoResource;
                            vec![UnitEvent::StartGotoResource { kind, location }]
                        }
                        _ => self.halt(),
                    };
                }
                if unit.moving {
                    return Vec::new();
                }
                let at_warehouse = unit
                    .warehouse
                    .is_some_and(|warehouse| unit.tile.chebyshev(warehouse) <= 1);
                if !at_warehouse {
                    tracing::debug!(
                        tile = ?unit.tile,
                        warehouse = ?unit.warehouse,
                        "load dropped short of the warehouse"
                    );
                    let mut events = vec![UnitEvent::DroppedOff { kind, remaining: 0 }];
                    events.extend(self.halt());
                    return events;
                }
                self.phase = Phase::DroppingOff {
                    remaining: profile.drop_off_time,
                };
                vec![UnitEvent::StartDropOff {
                    kind,
                    quantity: profile.capacity,
                }]
            }
            Phase::DroppingOff { remaining } => {
                let remaining = remaining - delta;
                if remaining > 0.0 {
                    self.phase = Phase::DroppingOff { remaining };
                    return Vec::new();
                }
                let dropped = UnitEvent::DroppedOff { kind, remaining: 0 };
                match self.location {
                    Some(location) if !self.stopping => {
                        self.phase = Phase::GotoResource;
                        vec![dropped, UnitEvent::StartGotoResource { kind, location }]
                    }
                    _ => {
                        let mut events = vec![dropped];
                        events.extend(self.halt());
                        events
                    }
                }
            }
        }
    }

    fn halt(&mut self) -> Vec<UnitEvent> {
        tracing::debug!(resource = ?self.kind, tile = ?self.location, "extraction stopped");
        self.reset();
        vec![UnitEvent::ExtractionStopped]
    }
}

impl Extractor for Shared<Harvester> {
    fn resource_location(&self) -> Option<Position> {
        self.lock().location
    }

    fn set_resource(&mut self, kind: ResourceType, tile: Position) {
        let mut harvester = self.lock();
        harvester.kind = Some(kind);
        harvester.location = Some(tile);
    }

    /// Ends the cycle. A load already on its way is still delivered.
    fn stop_extraction(&mut self) {
        let mut harvester = self.lock();
        harvester.location = None;
        harvester.stopping = harvester.is_active();
    }
}
