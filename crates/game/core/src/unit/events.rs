//! Subsystem notifications a unit reacts to.
//!
//! Each subsystem talks to a unit through one listener trait. Runtimes that
//! prefer to queue notifications and flush them once per tick can use
//! [`UnitEvent`], which dispatches to the same listener methods.

use crate::common::{EntityId, Position};
use crate::env::Services;
use crate::kinds::ResourceType;

/// Callbacks from the combat subsystem.
pub trait AttackerListener {
    fn on_attack_started(&mut self, target: EntityId);

    fn on_attack_stopped(&mut self);
}

/// Callbacks from the production subsystem.
pub trait ProducibleListener {
    /// The unit being produced by `producer` is ready.
    fn on_production_ended(&mut self, producer: EntityId);
}

/// Callbacks from the extraction subsystem.
///
/// These may touch shared world state, so they receive the services.
pub trait ExtractorListener {
    fn on_start_goto_resource(
        &mut self,
        kind: ResourceType,
        location: Position,
        services: &mut Services<'_>,
    );

    fn on_start_extraction(
        &mut self,
        kind: ResourceType,
        location: Position,
        services: &mut Services<'_>,
    );

    fn on_start_carry(&mut self, kind: ResourceType, quantity: u32, services: &mut Services<'_>);

    fn on_start_drop_off(
        &mut self,
        kind: ResourceType,
        quantity: u32,
        services: &mut Services<'_>,
    );

    fn on_dropped_off(&mut self, kind: ResourceType, remaining: u32, services: &mut Services<'_>);

    fn on_extraction_stopped(&mut self, services: &mut Services<'_>);
}

/// A queued subsystem notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitEvent {
    AttackStarted { target: EntityId },
    AttackStopped,
    ProductionEnded { producer: EntityId },
    StartGotoResource { kind: ResourceType, location: Position },
    StartExtraction { kind: ResourceType, location: Position },
    StartCarry { kind: ResourceType, quantity: u32 },
    StartDropOff { kind: ResourceType, quantity: u32 },
    DroppedOff { kind: ResourceType, remaining: u32 },
    ExtractionStopped,
}

impl UnitEvent {
    /// Invokes the listener method matching this event.
    pub fn deliver<L>(self, listener: &mut L, services: &mut Services<'_>)
    where
        L: AttackerListener + ProducibleListener + ExtractorListener + ?Sized,
    {
        match self {
            UnitEvent::AttackStarted { target } => listener.on_attack_started(target),
            UnitEvent::AttackStopped => listener.on_attack_stopped(),
            UnitEvent::ProductionEnded { producer } => listener.on_production_ended(producer),
            UnitEvent::StartGotoResource { kind, location } => {
                listener.on_start_goto_resource(kind, location, services)
            }
            UnitEvent::StartExtraction { kind, location } => {
                listener.on_start_extraction(kind, location, services)
            }
            UnitEvent::StartCarry { kind, quantity } => {
                listener.on_start_carry(kind, quantity, services)
            }
            UnitEvent::StartDropOff { kind, quantity } => {
                listener.on_start_drop_off(kind, quantity, services)
            }
            UnitEvent::DroppedOff { kind, remaining } => {
                listener.on_dropped_off(kind, remaining, services)
            }
            UnitEvent::ExtractionStopped => listener.on_extraction_stopped(services),
        }
    }

    /// Returns the event name used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            UnitEvent::AttackStarted { .. } => "attack_started",
            UnitEvent::AttackStopped => "attack_stopped",
            UnitEvent::ProductionEnded { .. } => "production_ended",
            UnitEvent::StartGotoResource { .. } => "start_goto_resource",
            UnitEvent::StartExtraction { .. } => "start_extraction",
            UnitEvent::StartCarry { .. } => "start_carry",
            UnitEvent::StartDropOff { .. } => "start_drop_off",
            UnitEvent::DroppedOff { .. } => "dropped_off",
            UnitEvent::ExtractionStopped => "extraction_stopped",
        }
    }
}
