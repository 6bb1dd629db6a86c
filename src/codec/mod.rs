//! JSON persistence codec.
//!
//! Products travel as a JSON array of [`ProductRecord`]s. Decoding goes
//! through [`serde_json::Value`] first so that one bad record is reported as
//! [`InventoryError::InvalidProductData`] with its position, while a file that
//! is not an array at all is [`InventoryError::Malformed`].

mod record;

pub use record::*;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::io::{Read, Write};

use crate::inventory::InventoryError;
use crate::model::Product;

const INDENT: &[u8] = b"    ";

pub fn encode<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<ProductRecord> {
    products.into_iter().map(Product::to_record).collect()
}

/// Rebuilds products from raw JSON values, stopping at the first bad record.
pub fn decode(values: Vec<Value>) -> Result<Vec<Product>, InventoryError> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let record: ProductRecord = serde_json::from_value(value).map_err(|e| {
                InventoryError::InvalidProductData(format!("record {index}: {e}"))
            })?;
            Product::try_from(record)
        })
        .collect()
}

pub fn write_records<W: Write>(writer: W, records: &[ProductRecord]) -> Result<(), serde_json::Error> {
    let mut serializer = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)
}

pub fn read_records<R: Read>(reader: R) -> Result<Vec<Value>, serde_json::Error> {
    serde_json::from_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_record_shape() {
        let tv = Product::electronics("E1", "TV", 499.5, 3, 2, "Acme");
        let value = serde_json::to_value(tv.to_record()).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "Electronics",
                "product_id": "E1",
                "name": "TV",
                "price": 499.5,
                "quantity_in_stock": 3,
                "warranty_years": 2,
                "brand": "Acme"
            })
        );

        let milk = Product::grocery("G1", "Milk", 1.25, 10, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        let value = serde_json::to_value(milk.to_record()).unwrap();
        assert_eq!(value["type"], "Grocery");
        assert_eq!(value["expiry_date"], "2024-03-10");
    }

    #[test]
    fn test_decode_each_variant() {
        let values = vec![
            json!({"type": "Clothing", "product_id": "C1", "name": "Scarf", "price": 12, "quantity_in_stock": 4, "size": "L", "material": "Wool"}),
            json!({"type": "Grocery", "product_id": "G1", "name": "Milk", "price": 1.5, "quantity_in_stock": 10, "expiry_date": "2024-03-10"}),
        ];
        let products = decode(values).unwrap();

        assert_eq!(products[0], Product::clothing("C1", "Scarf", 12.0, 4, "L", "Wool"));
        assert_eq!(
            products[1],
            Product::grocery("G1", "Milk", 1.5, 10, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
        );
    }

    #[test]
    fn test_decode_rejects_unknown_type() {
        let values = vec![json!({"type": "Toy", "product_id": "T1", "name": "Yo-yo", "price": 3.0, "quantity_in_stock": 1})];
        let err = decode(values).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidProductData(_)), "got {err:?}");
    }

    #[test]
    fn test_decode_rejects_missing_and_invalid_fields() {
        let cases = vec![
            json!({"type": "Electronics", "product_id": "E1", "name": "TV", "price": 1.0, "quantity_in_stock": 1, "brand": "Acme"}),
            json!({"product_id": "E1", "name": "TV", "price": 1.0, "quantity_in_stock": 1}),
            json!({"type": "Grocery", "product_id": "G1", "name": "Milk", "price": 1.0, "quantity_in_stock": 1, "expiry_date": "10/03/2024"}),
            json!({"type": "Clothing", "product_id": "C1", "name": "Hat", "price": 1.0, "quantity_in_stock": -1, "size": "S", "material": "Felt"}),
            json!({"type": "Clothing", "product_id": "C1", "name": "Hat", "price": -1.0, "quantity_in_stock": 1, "size": "S", "material": "Felt"}),
            json!("not a record"),
        ];
        for case in cases {
            let err = decode(vec![case.clone()]).unwrap_err();
            assert!(matches!(err, InventoryError::InvalidProductData(_)), "{case} gave {err:?}");
        }
    }

    #[test]
    fn test_write_uses_four_space_indent() {
        let records = encode([&Product::clothing("C1", "Hat", 5.0, 1, "S", "Felt")]);
        let mut out = Vec::new();
        write_records(&mut out, &records).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("[\n    {\n        \""), "{text}");

        let values = read_records(text.as_bytes()).unwrap();
        assert_eq!(decode(values).unwrap()[0].id(), "C1");
    }
}
