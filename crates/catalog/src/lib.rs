//! Product catalog: value types and the append-only registry.
//!
//! This crate provides:
//! - `Money` for cent-precise prices
//! - `Product` with category-specific attributes (`ProductKind`)
//! - `Catalog`, the append-only arena that owns every product and hands
//!   out `ProductId` handles to carts and order histories
//! - percentage discount application with validated bounds

pub mod error;
pub mod product;
pub mod registry;
pub mod value_objects;

pub use error::CatalogError;
pub use product::{Product, ProductKind, apply_discount};
pub use registry::Catalog;
pub use value_objects::{Money, ProductId};
