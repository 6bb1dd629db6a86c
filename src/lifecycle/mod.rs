//! Startup orchestration and observability setup.
//!
//! # Main Components
//!
//! - [`bootstrap`] - Builds the inventory the session starts with
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod tracing;

pub use self::tracing::*;

use ::tracing::info;

use crate::config::InventoryConfig;
use crate::inventory::{Inventory, InventoryError};

/// Builds the starting inventory described by `config`.
///
/// 1. Loads `config.data_file` when it is set and exists; a missing file
///    yields an empty inventory so a first run can create it with "save".
/// 2. Runs the expiry sweep when `config.sweep_expired_on_start` is set.
///
/// # Errors
/// Any [`InventoryError`] from reading an existing data file.
pub fn bootstrap(config: &InventoryConfig) -> Result<Inventory, InventoryError> {
    let mut inventory = match &config.data_file {
        Some(path) if path.exists() => Inventory::from_file(path)?,
        Some(path) => {
            info!(path = %path.display(), "Data file absent, starting empty");
            Inventory::new()
        }
        None => Inventory::new(),
    };

    if config.sweep_expired_on_start {
        inventory.remove_expired();
    }

    info!(size = inventory.len(), "Inventory ready");
    Ok(inventory)
}
