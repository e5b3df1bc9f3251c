//! Melee and ranged attacks on other units.
use skirmish_content::AttackProfile;
use skirmish_core::{Attacker, EntityId};

use crate::shared::Shared;

#[derive(Clone, Debug, Default)]
pub struct Combat {
    profile: Option<AttackProfile>,
    target: Option<EntityId>,
    cooldown: f64,
}

impl Combat {
    pub fn new(profile: Option<AttackProfile>) -> Self {
        Self {
            profile,
            target: None,
            cooldown: 0.0,
        }
    }

    pub fn can_attack(&self) -> bool {
        self.profile.is_some()
    }

    pub fn profile(&self) -> Option<AttackProfile> {
        self.profile
    }

    pub fn target(&self) -> Option<EntityId> {
        self.target
    }

    /// Locks onto `target`. The first hit lands as soon as it is in range.
    pub fn engage(&mut self, target: EntityId) {
        self.target = Some(target);
        self.cooldown = 0.0;
    }

    /// Drops the current target, returning it if there was one.
    pub fn disengage(&mut self) -> Option<EntityId> {
        self.cooldown = 0.0;
        self.target.take()
    }

    /// Counts down to the next hit. Returns the damage dealt this tick.
    pub fn swing(&mut self, delta: f64) -> Option<u32> {
        let profile = self.profile?;
        self.target?;
        self.cooldown -= delta;
        if self.cooldown > 0.0 {
            return None;
        }
        self.cooldown += profile.interval;
        Some(profile.damage)
    }

    pub fn range(&self) -> u32 {
        self.profile.map_or(0, |profile| profile.range)
    }
}

impl Attacker for Shared<Combat> {
    fn stop_attack(&mut self) {
        self.lock().disengage();
    }
}
