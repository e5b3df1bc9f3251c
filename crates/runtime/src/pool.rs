//! Reuse of destroyed units.
use std::collections::BTreeMap;

use skirmish_core::{Race, Unit};

use crate::kit::UnitKit;

/// Destroyed units waiting to be recycled, by template and race.
#[derive(Debug, Default)]
pub struct UnitPool {
    idle: BTreeMap<(String, Race), Vec<(Unit, UnitKit)>>,
}

impl UnitPool {
    pub fn put(&mut self, race: Race, unit: Unit, kit: UnitKit) {
        self.idle
            .entry((kit.template.clone(), race))
            .or_default()
            .push((unit, kit));
    }

    pub fn take(&mut self, template: &str, race: Race) -> Option<(Unit, UnitKit)> {
        self.idle.get_mut(&(template.to_owned(), race))?.pop()
    }

    pub fn len(&self) -> usize {
        self.idle.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
