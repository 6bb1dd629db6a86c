//! The text-menu front end.
//!
//! Nothing in the inventory core depends on this module; it only calls the
//! public [`Inventory`](crate::inventory::Inventory) API and renders results.

pub mod menu;

pub use menu::Menu;

use clap::Parser;
use std::path::PathBuf;

use crate::config::InventoryConfig;

/// Interactive product inventory manager.
#[derive(Parser, Debug, Default)]
#[command(version)]
pub struct Cli {
    /// Inventory file to load before showing the menu.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Remove expired groceries after loading.
    #[arg(long)]
    pub sweep_expired: bool,
}

impl From<&Cli> for InventoryConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            data_file: cli.file.clone(),
            sweep_expired_on_start: cli.sweep_expired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_config() {
        let cli = Cli::parse_from(["inventory-recipe", "--file", "stock.json", "--sweep-expired"]);
        let config = InventoryConfig::from(&cli);
        assert_eq!(config.data_file, Some(PathBuf::from("stock.json")));
        assert!(config.sweep_expired_on_start);

        let bare = Cli::parse_from(["inventory-recipe"]);
        assert_eq!(InventoryConfig::from(&bare), InventoryConfig::default());
    }
}
