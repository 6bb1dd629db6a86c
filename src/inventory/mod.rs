//! The product inventory: an owning, insertion-ordered id → product store.
//!
//! [`Inventory`] wraps a generic [`ResourceStore`] and speaks in domain
//! terms: adding products, selling and restocking stock, searching, valuing
//! and sweeping expired groceries. Persistence lives in [`storage`].
//!
//! Operations that name an id the inventory does not hold (`remove`, `sell`,
//! `restock`) are no-ops: they log a warning and report success.

pub mod error;
pub mod storage;

pub use error::*;

use chrono::{Local, NaiveDate};
use tracing::{info, instrument};

use crate::codec::validate_price;
use crate::framework::ResourceStore;
use crate::model::{Product, ProductType};
use crate::product::StockAction;

/// The inventory. Owns every product it holds.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    inner: ResourceStore<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.inner.get(&id.to_string())
    }

    /// Adds a product under its id.
    ///
    /// # Errors
    /// - [`InventoryError::DuplicateProduct`] if the id is already held.
    /// - [`InventoryError::InvalidProductData`] if the price is negative or not finite.
    ///
    /// The inventory is unchanged on error.
    pub fn add(&mut self, product: Product) -> Result<(), InventoryError> {
        validate_price(product.id(), product.price)?;
        self.inner.insert(product)?;
        Ok(())
    }

    /// Removes and returns the product, or `None` if the id is not held.
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        self.inner.remove(&id.to_string())
    }

    /// Products whose name contains `needle`, ignoring case.
    pub fn search_by_name(&self, needle: &str) -> Vec<&Product> {
        let needle = needle.to_lowercase();
        self.inner
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Products whose variant tag equals `type_name`, ignoring case.
    /// A name that is not a known tag matches nothing.
    pub fn search_by_type(&self, type_name: &str) -> Vec<&Product> {
        match type_name.parse::<ProductType>() {
            Ok(wanted) => self.of_type(wanted),
            Err(_) => Vec::new(),
        }
    }

    pub fn of_type(&self, wanted: ProductType) -> Vec<&Product> {
        self.inner
            .iter()
            .filter(|p| p.product_type() == wanted)
            .collect()
    }

    pub fn list_all(&self) -> Vec<&Product> {
        self.inner.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.inner.iter()
    }

    /// Sells `quantity` units of a product.
    ///
    /// # Errors
    /// [`InventoryError::OutOfStock`] if fewer units are held; stock is unchanged.
    pub fn sell(&mut self, id: &str, quantity: u32) -> Result<(), InventoryError> {
        self.stock_action(id, StockAction::Sell(quantity))
    }

    /// Adds `quantity` units to a product.
    ///
    /// # Errors
    /// [`InventoryError::StockOverflow`] if the level would overflow; stock is unchanged.
    pub fn restock(&mut self, id: &str, quantity: u32) -> Result<(), InventoryError> {
        self.stock_action(id, StockAction::Restock(quantity))
    }

    fn stock_action(&mut self, id: &str, action: StockAction) -> Result<(), InventoryError> {
        match self.inner.perform_action(&id.to_string(), action) {
            Some(result) => result.map(|_| ()),
            None => Ok(()),
        }
    }

    /// Sum of price × stock over every product.
    pub fn total_value(&self) -> f64 {
        self.inner.iter().map(Product::total_value).sum()
    }

    /// Removes groceries that expired before today, returning them.
    pub fn remove_expired(&mut self) -> Vec<Product> {
        self.remove_expired_on(Local::now().date_naive())
    }

    /// Removes groceries that expired before `today`, returning them.
    /// Other variants are never touched.
    #[instrument(skip(self))]
    pub fn remove_expired_on(&mut self, today: NaiveDate) -> Vec<Product> {
        let removed = self.inner.retain(|p| !p.is_expired_on(today));
        info!(removed = removed.len(), remaining = self.inner.len(), "Expiry sweep done");
        removed
    }

    /// Builds an inventory by adding each product in turn.
    ///
    /// # Errors
    /// The first error [`add`](Self::add) reports.
    pub fn try_from_products(
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self, InventoryError> {
        let mut inventory = Self::new();
        for product in products {
            inventory.add(product)?;
        }
        Ok(inventory)
    }
}
