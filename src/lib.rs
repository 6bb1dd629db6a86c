//! # Inventory Recipe
//!
//! > **An in-memory product inventory with typed variants and JSON persistence.**
//!
//! Products come in three variants (electronics, groceries, clothing) that share
//! an id, a name, a price and a stock level. The [`Inventory`](inventory::Inventory)
//! owns them, enforces unique ids, sells and restocks stock, searches, values the
//! stock, sweeps expired groceries and saves or loads the whole set as JSON.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Sum Type Instead of a Class Tree
//! A [`Product`](model::Product) is one struct with a [`ProductKind`](model::ProductKind)
//! payload. Variant behavior (rendering, expiry, the persisted tag) is a `match`,
//! so adding a variant is a compile error everywhere it must be handled.
//!
//! ### Generic Store, Domain Wrapper
//! The bookkeeping (unique keys, insertion order, mutation logging) lives once in
//! the generic [`ResourceStore`](framework::ResourceStore). The inventory wraps it
//! and speaks in domain terms.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Every failure is an [`InventoryError`](inventory::InventoryError) variant:
//! `DuplicateProduct`, `OutOfStock`, `InvalidProductData`, plus overflow and file errors.
//! Selling, restocking or removing an id that is not held is a logged no-op, not an error.
//!
//! ### 2. Atomic Loads
//! [`Inventory::load`](inventory::Inventory::load) decodes the whole file into a
//! staging inventory before replacing anything, so a bad record never leaves a
//! half-loaded inventory behind.
//!
//! ### 3. Observability
//! We use `tracing` with structured fields for every store mutation.
//! See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`Entity`](framework::Entity) trait and [`ResourceStore`](framework::ResourceStore).
//!
//! ### 2. The Data ([`model`], [`product`])
//! Product records, variant payloads, and the stock actions a product handles.
//!
//! ### 3. The Inventory ([`inventory`], [`codec`])
//! Domain operations and the tagged JSON record format.
//!
//! ### 4. The Shell ([`lifecycle`], [`config`], [`cli`])
//! Startup, logging and the numbered text menu. The core never depends on these.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Start empty
//! cargo run
//!
//! # Preload a file and drop expired groceries, with info logs
//! RUST_LOG=info cargo run -- --file inventory.json --sweep-expired
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod framework;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod product;
