//! Menu layer for the restaurant order pipeline.
//!
//! This crate provides the orderable item abstraction and everything
//! composed from it:
//! - [`Orderable`] capability shared by leaves, decorators and bundles
//! - [`MenuItem`] leaf items, the standard catalog and a recipe builder
//! - [`AddOn`] and [`Discounted`] decorators
//! - [`Bundle`] composite with an optional aggregate discount
//! - [`Money`] and [`Percent`] value objects

pub mod bundle;
pub mod decorator;
pub mod error;
pub mod item;
pub mod kitchen;
pub mod orderable;
pub mod summary;
pub mod value_objects;

pub use bundle::Bundle;
pub use decorator::{AddOn, Discounted};
pub use error::{MenuError, Result};
pub use item::{MenuItem, MenuItemBuilder, Recipe};
pub use kitchen::{KitchenLog, KitchenStep, Station};
pub use orderable::{Orderable, OrderableExt};
pub use summary::{BundleLine, BundleSummary, ItemSummary};
pub use value_objects::{Money, Percent};
