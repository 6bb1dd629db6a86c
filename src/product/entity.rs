//! Entity trait implementation for the Product domain type.
//!
//! This module contains the [`Entity`] trait implementation
//! that enables [`Product`] to be owned by the generic [`crate::framework::ResourceStore`].
//!
//! Includes support for stock actions like checking, selling and restocking.

use super::actions::{StockAction, StockActionResult};
use crate::framework::Entity;
use crate::inventory::InventoryError;
use crate::model::Product;

impl Entity for Product {
    type Id = String;
    type Action = StockAction;
    type ActionResult = StockActionResult;
    type Error = InventoryError;

    fn id(&self) -> &String {
        self.key()
    }

    /// Handles stock actions for the Product entity.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current stock level
    /// - `Sell`: Decrements stock if available
    /// - `Restock`: Increments stock unless it would overflow
    fn handle_action(&mut self, action: StockAction) -> Result<StockActionResult, InventoryError> {
        match action {
            StockAction::CheckStock => Ok(StockActionResult::CheckStock(self.quantity())),
            StockAction::Sell(quantity) => {
                self.sell(quantity)?;
                Ok(StockActionResult::Sell(self.quantity()))
            }
            StockAction::Restock(amount) => {
                self.restock(amount)?;
                Ok(StockActionResult::Restock(self.quantity()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_report_stock_level() {
        let mut shirt = Product::clothing("C1", "Shirt", 20.0, 4, "M", "Cotton");

        assert_eq!(shirt.handle_action(StockAction::CheckStock).unwrap(), StockActionResult::CheckStock(4));
        assert_eq!(shirt.handle_action(StockAction::Sell(3)).unwrap(), StockActionResult::Sell(1));
        assert_eq!(shirt.handle_action(StockAction::Restock(9)).unwrap(), StockActionResult::Restock(10));
        assert!(shirt.handle_action(StockAction::Sell(11)).is_err());
        assert_eq!(shirt.quantity(), 10);
    }
}
