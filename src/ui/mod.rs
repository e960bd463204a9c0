/// Presentation layer
///
/// Pure view code: the control panel (buttons, star filter row, slider)
/// and the wrapped tile gallery. Everything here reads controller
/// snapshots and emits messages; no state lives in this module.

pub mod control_panel;
pub mod gallery;
