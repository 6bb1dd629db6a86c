//! Custom actions for products held in a store.
//!
//! This module defines the stock operations (Actions) that can be performed
//! on a [`Product`](crate::model::Product) entity, such as checking or selling stock.
//! These actions are handled by the [`Entity::handle_action`](crate::framework::Entity::handle_action) method.
//!
//! See [`impl Entity for Product`](crate::model::Product#impl-Entity-for-Product) for the implementation details.

/// Custom actions for Product entities.
///
/// These actions represent stock operations that can be performed
/// on a product beyond standard CRUD operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    /// Checks the current stock level without modifying it.
    CheckStock,
    /// Sells a specified amount of stock.
    ///
    /// # Errors
    /// Will fail if the requested amount exceeds available stock.
    Sell(u32),
    /// Adds a specified amount of stock.
    ///
    /// # Errors
    /// Will fail if the new stock level overflows.
    Restock(u32),
}

/// Results from StockActions - variants match 1:1 with StockAction.
///
/// Each carries the stock level after the action ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockActionResult {
    CheckStock(u32),
    Sell(u32),
    Restock(u32),
}
