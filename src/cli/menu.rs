//! Numbered text menu driving an [`Inventory`].
//!
//! The menu reads from any [`BufRead`] and writes to any [`Write`], so a
//! session can be scripted in tests exactly as a user would type it.

use anyhow::Context;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::inventory::{Inventory, InventoryError};
use crate::model::{Product, ProductKind, ProductType};

const MENU: &str = "
========= Inventory Menu ========

1. Add Product
2. Sell Product
3. Search by Name
4. List All Products
5. Restock Product
6. Remove Expired Products
7. Save to File
8. Load from File
9. Total Inventory Value
0. Exit";

/// Input ran out while the menu was waiting for an answer.
#[derive(Debug, thiserror::Error)]
#[error("end of input")]
struct EndOfInput;

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<R, W> {
    inventory: Inventory,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Runs until the user picks "0" or the input ends.
    ///
    /// Inventory errors print as `Error: ...` and any other failure of a
    /// single command (bad number, bad date) as `Unexpected error: ...`;
    /// both return to the menu. Only I/O failures on the terminal itself end
    /// the loop with an error.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let choice = match self.ask("Enter choice: ") {
                Ok(choice) => choice,
                Err(e) if e.is::<EndOfInput>() => return Ok(()),
                Err(e) => return Err(e),
            };
            debug!(choice = choice.trim(), "Menu choice");

            match self.dispatch(choice.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if e.is::<EndOfInput>() => return Ok(()),
                Err(e) if e.is::<std::io::Error>() => return Err(e),
                Err(e) => match e.downcast_ref::<InventoryError>() {
                    Some(inventory_error) => writeln!(self.output, "Error: {inventory_error}")?,
                    None => writeln!(self.output, "Unexpected error: {e:#}")?,
                },
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> anyhow::Result<Flow> {
        match choice {
            "1" => self.add_product()?,
            "2" => {
                let id = self.ask("Product ID to sell: ")?;
                let quantity = self.ask_number("Quantity: ")?;
                self.inventory.sell(&id, quantity)?;
                writeln!(self.output, "Product sold.")?;
            }
            "3" => {
                let name = self.ask("Enter product name to search: ")?;
                let found = self.inventory.search_by_name(&name);
                for product in found {
                    writeln!(self.output, "{product}")?;
                }
            }
            "4" => {
                for product in self.inventory.iter() {
                    writeln!(self.output, "{product}")?;
                }
            }
            "5" => {
                let id = self.ask("Product ID to restock: ")?;
                let quantity = self.ask_number("Quantity to add: ")?;
                self.inventory.restock(&id, quantity)?;
                writeln!(self.output, "Product restocked.")?;
            }
            "6" => {
                self.inventory.remove_expired();
                writeln!(self.output, "Expired groceries removed.")?;
            }
            "7" => {
                let filename = self.ask("Filename to save: ")?;
                self.inventory.save(filename.trim())?;
                writeln!(self.output, "Inventory saved.")?;
            }
            "8" => {
                let filename = self.ask("Filename to load: ")?;
                self.inventory.load(filename.trim())?;
                writeln!(self.output, "Inventory loaded.")?;
            }
            "9" => {
                let value = self.inventory.total_value();
                writeln!(self.output, "Total inventory value: {value:.2}")?;
            }
            "0" => {
                writeln!(self.output, "Exiting...")?;
                return Ok(Flow::Exit);
            }
            _ => writeln!(self.output, "Invalid choice. Try again.")?,
        }
        Ok(Flow::Continue)
    }

    fn add_product(&mut self) -> anyhow::Result<()> {
        let type_name = self.ask("Type (Electronics/Grocery/Clothing): ")?;
        let id = self.ask("Product ID: ")?;
        let name = self.ask("Name: ")?;
        let price: f64 = self.ask_number("Price: ")?;
        let quantity: u32 = self.ask_number("Quantity: ")?;

        let Ok(product_type) = type_name.parse::<ProductType>() else {
            writeln!(self.output, "Invalid product type.")?;
            return Ok(());
        };

        let kind = match product_type {
            ProductType::Electronics => {
                let brand = self.ask("Brand: ")?;
                let warranty_years = self.ask_number("Warranty (years): ")?;
                ProductKind::Electronics {
                    warranty_years,
                    brand,
                }
            }
            ProductType::Grocery => {
                let raw = self.ask("Expiry Date (YYYY-MM-DD): ")?;
                let expiry_date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .with_context(|| format!("invalid expiry date {raw:?}"))?;
                ProductKind::Grocery { expiry_date }
            }
            ProductType::Clothing => {
                let size = self.ask("Size: ")?;
                let material = self.ask("Material: ")?;
                ProductKind::Clothing { size, material }
            }
        };

        self.inventory
            .add(Product::new(id, name, price, quantity, kind))?;
        writeln!(self.output, "Product added.")?;
        Ok(())
    }

    /// Prints `prompt` and reads one line, without its line ending.
    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EndOfInput.into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask_number<N>(&mut self, prompt: &str) -> anyhow::Result<N>
    where
        N: std::str::FromStr,
        N::Err: std::error::Error + Send + Sync + 'static,
    {
        let raw = self.ask(prompt)?;
        raw.trim()
            .parse()
            .with_context(|| format!("invalid number {raw:?}"))
    }
}
