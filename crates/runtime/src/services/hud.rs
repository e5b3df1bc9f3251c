use std::collections::BTreeSet;

use skirmish_core::{EntityId, Hud};

/// Label of the contextual harvest button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ActionLabel {
    #[default]
    Extract,
    Carry,
}

/// Headless HUD: remembers the selection and what the menus were told.
#[derive(Clone, Debug, Default)]
pub struct HudLog {
    selection: BTreeSet<EntityId>,
    menu_clears: u32,
    label: ActionLabel,
}

impl HudLog {
    pub fn select(&mut self, entity: EntityId) {
        self.selection.insert(entity);
    }

    pub fn selection(&self) -> &BTreeSet<EntityId> {
        &self.selection
    }

    pub fn is_selected(&self, entity: EntityId) -> bool {
        self.selection.contains(&entity)
    }

    /// How many times the menus were closed.
    pub fn menu_clears(&self) -> u32 {
        self.menu_clears
    }

    pub fn label(&self) -> ActionLabel {
        self.label
    }
}

impl Hud for HudLog {
    fn remove_from_selection(&mut self, entity: EntityId) -> bool {
        self.selection.remove(&entity)
    }

    fn clear_menus(&mut self) {
        self.menu_clears += 1;
    }

    fn switch_extract_carry(&mut self, carry: bool) {
        self.label = if carry {
            ActionLabel::Carry
        } else {
            ActionLabel::Extract
        };
    }
}
