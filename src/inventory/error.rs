//! Error types for the inventory.

use std::path::PathBuf;
use thiserror::Error;

use crate::framework::StoreError;

/// Errors that can occur during inventory operations.
///
/// Callers can match on the kind; the message is suitable for display as-is.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A product with the same id is already stocked.
    #[error("Product ID already exists: {0}")]
    DuplicateProduct(String),

    /// The requested quantity exceeds the available stock.
    #[error("Only {available} items of {id} in stock, requested {requested}")]
    OutOfStock {
        id: String,
        requested: u32,
        available: u32,
    },

    /// A record could not be turned into a product, or a product failed validation.
    #[error("Invalid product data: {0}")]
    InvalidProductData(String),

    /// The restocked level does not fit the stock counter.
    #[error("Restocking {amount} onto {current} items of {id} overflows the stock counter")]
    StockOverflow { id: String, current: u32, amount: u32 },

    /// The inventory file could not be opened, read or written.
    #[error("Inventory file error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The inventory file is not a JSON array.
    #[error("Malformed inventory file: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl InventoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InventoryError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<StoreError> for InventoryError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::AlreadyExists(id) => InventoryError::DuplicateProduct(id),
        }
    }
}
