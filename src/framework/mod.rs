//! Generic store framework for resource management.
//!
//! This module provides the core building blocks for owning a collection of
//! typed resource entities with CRUD operations and custom actions.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that resource types implement to be managed by a store
//! - [`ResourceStore`] - Generic insertion-ordered store that owns entities
//! - [`StoreError`] - Common error types

pub mod core;

// Re-export core types for convenience
pub use core::*;
