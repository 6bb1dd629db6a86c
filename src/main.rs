use clap::Parser;
use inventory_recipe::cli::{Cli, Menu};
use inventory_recipe::config::InventoryConfig;
use inventory_recipe::lifecycle::{bootstrap, setup_tracing};
use std::io;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup tracing once for the entire application
    setup_tracing();

    let config = InventoryConfig::from(&cli);
    info!(?config, "Starting inventory manager");
    let inventory = bootstrap(&config)?;

    let mut menu = Menu::new(inventory, io::stdin().lock(), io::stdout().lock());
    menu.run()?;

    info!(size = menu.inventory().len(), "Session ended");
    Ok(())
}
