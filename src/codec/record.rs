//! The tagged record a product is persisted as.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::inventory::InventoryError;
use crate::model::{Product, ProductKind};

/// One persisted product.
///
/// ```json
/// { "type": "Grocery", "expiry_date": "2024-03-10",
///   "product_id": "G1", "name": "Milk", "price": 1.5, "quantity_in_stock": 10 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(flatten)]
    pub details: DetailsRecord,
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity_in_stock: u32,
}

/// Variant fields, discriminated by the `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DetailsRecord {
    Electronics { warranty_years: u32, brand: String },
    Grocery { expiry_date: NaiveDate },
    Clothing { size: String, material: String },
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        let details = match &product.kind {
            ProductKind::Electronics {
                warranty_years,
                brand,
            } => DetailsRecord::Electronics {
                warranty_years: *warranty_years,
                brand: brand.clone(),
            },
            ProductKind::Grocery { expiry_date } => DetailsRecord::Grocery {
                expiry_date: *expiry_date,
            },
            ProductKind::Clothing { size, material } => DetailsRecord::Clothing {
                size: size.clone(),
                material: material.clone(),
            },
        };
        Self {
            details,
            product_id: product.id().to_string(),
            name: product.name.clone(),
            price: product.price,
            quantity_in_stock: product.quantity(),
        }
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = InventoryError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        validate_price(&record.product_id, record.price)?;
        let kind = match record.details {
            DetailsRecord::Electronics {
                warranty_years,
                brand,
            } => ProductKind::Electronics {
                warranty_years,
                brand,
            },
            DetailsRecord::Grocery { expiry_date } => ProductKind::Grocery { expiry_date },
            DetailsRecord::Clothing { size, material } => ProductKind::Clothing { size, material },
        };
        Ok(Product::new(
            record.product_id,
            record.name,
            record.price,
            record.quantity_in_stock,
            kind,
        ))
    }
}

/// Prices must be finite and non-negative.
pub(crate) fn validate_price(id: &str, price: f64) -> Result<(), InventoryError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(InventoryError::InvalidProductData(format!(
            "price of {id} must be a non-negative number, got {price}"
        )))
    }
}

impl Product {
    /// The tagged record this product is persisted as.
    pub fn to_record(&self) -> ProductRecord {
        ProductRecord::from(self)
    }
}
