//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the inventory manager.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Every store mutation is logged with the entity type, the id and the resulting store size,
//! and persistence operations open a span carrying the file path.
//!
//! ## Configuration
//!
//! - **Configurable log levels** via `RUST_LOG` environment variable (default `warn`)
//! - **Compact format** without the crate/module prefix (`with_target(false)`)
//! - **stderr output**, so log lines never interleave with the menu on stdout
//!
//! ## Usage Examples
//!
//! ```bash
//! # Quiet (default): only rejected operations and missing ids
//! cargo run
//!
//! # Every create / delete / action with store sizes
//! RUST_LOG=info cargo run
//!
//! # Full payloads
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## Trace Example
//!
//! **With `RUST_LOG=info`**, adding a product and selling two units:
//!
//! ```text
//! INFO Created entity_type="Product" id=E1 size=1
//! INFO Action ok entity_type="Product" id=E1 outcome=Sell(3)
//! ```
//!
//! **With `RUST_LOG=debug`**, the same session also shows:
//!
//! ```text
//! DEBUG Create entity_type="Product" item=Product { id: "E1", name: "TV", .. }
//! DEBUG Action entity_type="Product" id=E1 action=Sell(2)
//! ```
//!
//! Selling an id that is not stocked is not an error, but it is visible:
//!
//! ```text
//! WARN Not found entity_type="Product" id=E9
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
