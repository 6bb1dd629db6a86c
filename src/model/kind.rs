//! Variant payloads and the tags that name them.

use chrono::NaiveDate;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Variant-specific fields of a [`Product`](super::Product).
#[derive(Debug, Clone, PartialEq)]
pub enum ProductKind {
    Electronics { warranty_years: u32, brand: String },
    Grocery { expiry_date: NaiveDate },
    Clothing { size: String, material: String },
}

impl ProductKind {
    pub fn product_type(&self) -> ProductType {
        match self {
            ProductKind::Electronics { .. } => ProductType::Electronics,
            ProductKind::Grocery { .. } => ProductType::Grocery,
            ProductKind::Clothing { .. } => ProductType::Clothing,
        }
    }
}

/// The variant tag, as written in the persisted `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    Electronics,
    Grocery,
    Clothing,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [
        ProductType::Electronics,
        ProductType::Grocery,
        ProductType::Clothing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Electronics => "Electronics",
            ProductType::Grocery => "Grocery",
            ProductType::Clothing => "Clothing",
        }
    }
}

impl Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known product type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown product type: {0}")]
pub struct UnknownProductType(pub String);

impl FromStr for ProductType {
    type Err = UnknownProductType;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownProductType(s.to_string()))
    }
}
