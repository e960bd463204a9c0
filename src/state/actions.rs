/// Derived enablement of the control panel actions
///
/// A pure function of the selection size, the number of visible Normal
/// tiles, and whether a folder is open. Recomputed after every mutation
/// so the buttons can never go stale.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionStates {
    pub select_all: bool,
    pub deselect_all: bool,
    pub move_selected: bool,
    pub delete_selected: bool,
}

/// Derive button enablement. Idempotent, no side effects.
pub fn derive_action_states(
    selected_count: usize,
    visible_normal_count: usize,
    has_working_folder: bool,
) -> ActionStates {
    let has_any_selection = selected_count > 0;
    ActionStates {
        // 'Select All' only makes sense with a folder open and assets visible
        select_all: visible_normal_count > 0 && has_working_folder,
        deselect_all: has_any_selection,
        move_selected: has_any_selection,
        delete_selected: has_any_selection,
    }
}
