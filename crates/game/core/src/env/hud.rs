use crate::common::EntityId;

/// Presentation hooks. Fire-and-forget except for the selection query.
pub trait Hud: Send + Sync {
    /// Drops `entity` from the current selection.
    ///
    /// Returns true if it was selected.
    fn remove_from_selection(&mut self, entity: EntityId) -> bool;

    /// Closes the menus opened for the current selection.
    fn clear_menus(&mut self);

    /// Relabels the active action buttons between "extract" and "carry".
    fn switch_extract_carry(&mut self, carry: bool);
}
