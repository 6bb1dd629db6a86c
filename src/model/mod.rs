//! Pure data structures; [`Product`] implements the [`Entity`](crate::framework::Entity) trait.

pub mod kind;
pub mod product;

pub use kind::*;
pub use product::*;
