/// State management module
///
/// This module holds everything that changes while the browser runs:
/// - Asset records and the folder-backed store (data.rs, store.rs)
/// - Selection and star filter state (selection.rs, filter.rs)
/// - The filtering algorithm and the grid projection (engine.rs, grid.rs)
/// - Derived button enablement (actions.rs)
/// - The controller that ties the above together (controller.rs)
/// - Configuration and file operations (config.rs, ops.rs)

pub mod actions;
pub mod config;
pub mod controller;
pub mod data;
pub mod engine;
pub mod filter;
pub mod grid;
pub mod ops;
pub mod selection;
pub mod store;

#[cfg(test)]
pub mod testutil;
