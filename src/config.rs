//! Startup configuration.
//!
//! There is no config file: the binary fills this in from its command-line
//! flags (see [`Cli`](crate::cli::Cli)) and log filtering is left to `RUST_LOG`.

use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Inventory file to preload at startup.
    pub data_file: Option<PathBuf>,
    /// Drop expired groceries right after the preload.
    pub sweep_expired_on_start: bool,
}
