use chrono::{Local, NaiveDate};
use std::fmt::{self, Display};

use super::kind::{ProductKind, ProductType};
use crate::inventory::InventoryError;

/// Represents a product in the inventory.
///
/// # Store Framework
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be owned by a [`ResourceStore`](crate::framework::ResourceStore).
///
/// See [`impl Entity for Product`](#impl-Entity-for-Product) for details on:
/// - The stored key ([`Product::id`])
/// - Custom actions ([`StockAction`](crate::product::StockAction))
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    pub name: String,
    pub price: f64,
    quantity: u32,
    pub kind: ProductKind,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, fixed for the product's lifetime
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `quantity` - Initial stock quantity
    /// * `kind` - Variant payload
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: u32,
        kind: ProductKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
            kind,
        }
    }

    pub fn electronics(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: u32,
        warranty_years: u32,
        brand: impl Into<String>,
    ) -> Self {
        let kind = ProductKind::Electronics {
            warranty_years,
            brand: brand.into(),
        };
        Self::new(id, name, price, quantity, kind)
    }

    pub fn grocery(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: u32,
        expiry_date: NaiveDate,
    ) -> Self {
        Self::new(id, name, price, quantity, ProductKind::Grocery { expiry_date })
    }

    pub fn clothing(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: u32,
        size: impl Into<String>,
        material: impl Into<String>,
    ) -> Self {
        let kind = ProductKind::Clothing {
            size: size.into(),
            material: material.into(),
        };
        Self::new(id, name, price, quantity, kind)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The owned store key; [`Product::id`] is the borrowed view.
    pub(crate) fn key(&self) -> &String {
        &self.id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn product_type(&self) -> ProductType {
        self.kind.product_type()
    }

    /// Adds `amount` units to the stock.
    ///
    /// # Errors
    /// [`InventoryError::StockOverflow`] if the new level does not fit a `u32`.
    pub fn restock(&mut self, amount: u32) -> Result<(), InventoryError> {
        self.quantity = self
            .quantity
            .checked_add(amount)
            .ok_or_else(|| InventoryError::StockOverflow {
                id: self.id.clone(),
                current: self.quantity,
                amount,
            })?;
        Ok(())
    }

    /// Removes `quantity` units from the stock.
    ///
    /// # Errors
    /// [`InventoryError::OutOfStock`] if fewer than `quantity` units are held.
    /// The stock is left unchanged in that case.
    pub fn sell(&mut self, quantity: u32) -> Result<(), InventoryError> {
        if quantity > self.quantity {
            return Err(InventoryError::OutOfStock {
                id: self.id.clone(),
                requested: quantity,
                available: self.quantity,
            });
        }
        self.quantity -= quantity;
        Ok(())
    }

    /// Price times units in stock.
    pub fn total_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Only groceries expire. `today` is the reference calendar date.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        match &self.kind {
            ProductKind::Grocery { expiry_date } => today > *expiry_date,
            _ => false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_on(Local::now().date_naive())
    }

    /// Human-readable one-line listing.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, id, qty, price) = (&self.name, &self.id, self.quantity, self.price);
        match &self.kind {
            ProductKind::Electronics {
                warranty_years,
                brand,
            } => write!(
                f,
                "[Electronics] {name} ({id}) - Brand: {brand}, Warranty: {warranty_years} yrs, Stock: {qty}, Price: {price:.2}"
            ),
            ProductKind::Grocery { expiry_date } => {
                let status = if self.is_expired() { "Expired" } else { "Fresh" };
                write!(
                    f,
                    "[Grocery] {name} ({id}) - Expires: {expiry_date} ({status}), Stock: {qty}, Price: {price:.2}"
                )
            }
            ProductKind::Clothing { size, material } => write!(
                f,
                "[Clothing] {name} ({id}) - Size: {size}, Material: {material}, Stock: {qty}, Price: {price:.2}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_sell_decrements_stock() {
        let mut tv = Product::electronics("E1", "TV", 100.0, 5, 2, "Acme");
        tv.sell(2).unwrap();
        assert_eq!(tv.quantity(), 3);
        assert_eq!(tv.total_value(), 300.0);
    }

    #[test]
    fn test_sell_more_than_stock_fails() {
        let mut tv = Product::electronics("E1", "TV", 100.0, 5, 2, "Acme");
        let err = tv.sell(6).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::OutOfStock { requested: 6, available: 5, .. }
        ));
        assert_eq!(tv.quantity(), 5);
    }

    #[test]
    fn test_restock_overflow_is_rejected() {
        let mut shirt = Product::clothing("C1", "Shirt", 20.0, u32::MAX - 1, "M", "Cotton");
        shirt.restock(1).unwrap();
        assert!(matches!(
            shirt.restock(1),
            Err(InventoryError::StockOverflow { .. })
        ));
        assert_eq!(shirt.quantity(), u32::MAX);
    }

    #[test]
    fn test_grocery_expiry() {
        let milk = Product::grocery("G1", "Milk", 1.5, 10, date("2024-03-10"));
        assert!(!milk.is_expired_on(date("2024-03-09")));
        assert!(!milk.is_expired_on(date("2024-03-10")), "expires after the date, not on it");
        assert!(milk.is_expired_on(date("2024-03-11")));

        let tv = Product::electronics("E1", "TV", 100.0, 5, 2, "Acme");
        assert!(!tv.is_expired_on(date("2999-01-01")));
    }

    #[test]
    fn test_render() {
        let tv = Product::electronics("E1", "TV", 100.0, 5, 2, "Acme");
        assert_eq!(
            tv.render(),
            "[Electronics] TV (E1) - Brand: Acme, Warranty: 2 yrs, Stock: 5, Price: 100.00"
        );

        let shirt = Product::clothing("C1", "Shirt", 19.99, 3, "M", "Cotton");
        assert_eq!(
            shirt.render(),
            "[Clothing] Shirt (C1) - Size: M, Material: Cotton, Stock: 3, Price: 19.99"
        );

        let old = Product::grocery("G1", "Bread", 2.0, 1, date("2000-01-01"));
        assert_eq!(
            old.render(),
            "[Grocery] Bread (G1) - Expires: 2000-01-01 (Expired), Stock: 1, Price: 2.00"
        );

        let fresh = Product::grocery("G2", "Honey", 8.0, 1, date("9999-12-31"));
        assert!(fresh.render().contains("(Fresh)"));
    }
}
