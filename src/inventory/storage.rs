//! Saving and loading the inventory as a JSON file.
//!
//! Loads are atomic: every record is decoded into a staging inventory first,
//! and the live one is replaced only when the whole file was accepted.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, instrument, warn};

use super::{Inventory, InventoryError};
use crate::codec;

impl Inventory {
    /// Writes every product to `path` as a pretty-printed JSON array.
    ///
    /// # Errors
    /// [`InventoryError::Io`] when the file cannot be created or written.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), InventoryError> {
        let path = path.as_ref();
        let records = codec::encode(self.iter());

        let file = File::create(path).map_err(|e| InventoryError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        codec::write_records(&mut writer, &records).map_err(|e| {
            if e.is_io() {
                InventoryError::io(path, e.into())
            } else {
                InventoryError::Malformed(e)
            }
        })?;
        writer.flush().map_err(|e| InventoryError::io(path, e))?;

        info!(count = records.len(), "Inventory saved");
        Ok(())
    }

    /// Replaces the contents with the products stored at `path`.
    ///
    /// # Errors
    /// - [`InventoryError::Io`] / [`InventoryError::Malformed`] if the file
    ///   cannot be read or is not a JSON array.
    /// - [`InventoryError::InvalidProductData`] for an unknown `type` tag or a
    ///   missing or ill-typed field.
    /// - [`InventoryError::DuplicateProduct`] if an id repeats within the file.
    ///
    /// On error the inventory keeps its previous contents.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), InventoryError> {
        let staged = Self::from_file(path).inspect_err(|e| {
            warn!(error = %e, "Load rejected, keeping current inventory");
        })?;
        *self = staged;
        info!(count = self.len(), "Inventory loaded");
        Ok(())
    }

    /// Reads a new inventory from the products stored at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| InventoryError::io(path, e))?;
        let values = codec::read_records(BufReader::new(file)).map_err(|e| {
            if e.is_io() {
                InventoryError::io(path, e.into())
            } else {
                InventoryError::Malformed(e)
            }
        })?;
        let products = codec::decode(values)?;
        Self::try_from_products(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use chrono::NaiveDate;
    use std::fs;

    fn sample() -> Inventory {
        Inventory::try_from_products([
            Product::electronics("E1", "Laptop", 999.99, 3, 2, "Acme"),
            Product::grocery("G1", "Cheese", 4.5, 12, NaiveDate::from_ymd_opt(2031, 5, 17).unwrap()),
            Product::clothing("C1", "Jacket", 80.0, 1, "XL", "Leather"),
        ])
        .unwrap()
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let original = sample();
        original.save(&path).unwrap();

        let mut loaded = Inventory::new();
        loaded.load(&path).unwrap();
        assert_eq!(loaded.list_all(), original.list_all());
    }

    #[test]
    fn test_failed_load_keeps_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"[
                {"type": "Clothing", "product_id": "C9", "name": "Sock", "price": 2, "quantity_in_stock": 5, "size": "S", "material": "Wool"},
                {"type": "Toy", "product_id": "T1", "name": "Yo-yo", "price": 3, "quantity_in_stock": 1}
            ]"#,
        )
        .unwrap();

        let mut inventory = sample();
        let err = inventory.load(&path).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidProductData(_)), "got {err:?}");
        assert_eq!(inventory.len(), 3);
        assert!(inventory.get("C9").is_none());
        assert!(inventory.get("T1").is_none());
    }

    #[test]
    fn test_duplicate_ids_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dupes.json");
        let record = r#"{"type": "Clothing", "product_id": "C1", "name": "Sock", "price": 2, "quantity_in_stock": 5, "size": "S", "material": "Wool"}"#;
        fs::write(&path, format!("[{record}, {record}]")).unwrap();

        let err = Inventory::from_file(&path).unwrap_err();
        assert!(matches!(err, InventoryError::DuplicateProduct(ref id) if id == "C1"));
    }

    #[test]
    fn test_unreadable_or_malformed_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert!(matches!(Inventory::from_file(&missing), Err(InventoryError::Io { .. })));

        let object = dir.path().join("object.json");
        fs::write(&object, r#"{"type": "Clothing"}"#).unwrap();
        assert!(matches!(Inventory::from_file(&object), Err(InventoryError::Malformed(_))));

        let garbage = dir.path().join("garbage.json");
        fs::write(&garbage, "not json").unwrap();
        assert!(matches!(Inventory::from_file(&garbage), Err(InventoryError::Malformed(_))));
    }

    #[test]
    fn test_empty_inventory_saves_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        Inventory::new().save(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
