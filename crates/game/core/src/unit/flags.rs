//! Transient signals written by subsystem callbacks.

use bitflags::bitflags;

use crate::kinds::ResourceType;

bitflags! {
    /// Boolean signals raised by the combat, production, and extraction subsystems.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Signals: u8 {
        const ATTACK_STARTED   = 1 << 0;
        const PRODUCIBLE_ENDED = 1 << 1;
        const GOTO_RESOURCE    = 1 << 2;
    }
}

/// What the unit is doing with a resource.
///
/// A unit is either extracting or hauling, never both, so the two roles share
/// one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Haul {
    #[default]
    Empty,
    Extracting(ResourceType),
    Carrying(ResourceType),
}

/// Per-unit signal set read by the state machine.
///
/// Every read is total: unset signals read as `false` or `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FlagStore {
    signals: Signals,
    haul: Haul,
}

impl FlagStore {
    pub fn signals(&self) -> Signals {
        self.signals
    }

    pub fn haul(&self) -> Haul {
        self.haul
    }

    pub fn is_attack_started(&self) -> bool {
        self.signals.contains(Signals::ATTACK_STARTED)
    }

    pub fn is_produced(&self) -> bool {
        self.signals.contains(Signals::PRODUCIBLE_ENDED)
    }

    pub fn is_goto_resource(&self) -> bool {
        self.signals.contains(Signals::GOTO_RESOURCE)
    }

    pub fn extract_resource(&self) -> Option<ResourceType> {
        match self.haul {
            Haul::Extracting(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn carry_resource(&self) -> Option<ResourceType> {
        match self.haul {
            Haul::Carrying(kind) => Some(kind),
            _ => None,
        }
    }

    /// Returns true if nothing is set.
    pub fn is_clear(&self) -> bool {
        self.signals.is_empty() && self.haul == Haul::Empty
    }

    pub(crate) fn set_attack_started(&mut self, started: bool) {
        self.signals.set(Signals::ATTACK_STARTED, started);
    }

    pub(crate) fn mark_produced(&mut self) {
        self.signals.insert(Signals::PRODUCIBLE_ENDED);
    }

    pub(crate) fn set_goto_resource(&mut self, going: bool) {
        self.signals.set(Signals::GOTO_RESOURCE, going);
    }

    pub(crate) fn start_extracting(&mut self, kind: ResourceType) {
        self.haul = Haul::Extracting(kind);
    }

    /// Replaces any extraction in progress.
    pub(crate) fn start_carrying(&mut self, kind: ResourceType) {
        self.haul = Haul::Carrying(kind);
    }

    pub(crate) fn clear_extract(&mut self) {
        if matches!(self.haul, Haul::Extracting(_)) {
            self.haul = Haul::Empty;
        }
    }

    pub(crate) fn clear_carry(&mut self) {
        if matches!(self.haul, Haul::Carrying(_)) {
            self.haul = Haul::Empty;
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
