use crate::kinds::Race;

/// Health and allegiance of a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitStats {
    race: Race,
    life: u32,
    max_life: u32,
}

impl UnitStats {
    pub fn new(race: Race, max_life: u32) -> Self {
        Self {
            race,
            life: max_life,
            max_life,
        }
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn life(&self) -> u32 {
        self.life
    }

    pub fn max_life(&self) -> u32 {
        self.max_life
    }

    pub fn is_dead(&self) -> bool {
        self.life == 0
    }

    /// Sets the current life, clamped to the maximum.
    pub fn set_life(&mut self, life: u32) {
        self.life = life.min(self.max_life);
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.life = self.life.saturating_sub(amount);
    }

    /// Back to full health.
    pub fn restore(&mut self) {
        self.life = self.max_life;
    }
}
