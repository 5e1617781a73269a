//! Ingredient and spec collections.
//!
//! The stores are plain owned values: the caller mutates them and takes a
//! [`BarSnapshot`] whenever it wants to plan. Nothing here is shared or
//! observed; re-snapshot after every edit.

pub mod error;

mod dex;
mod inventory;
mod snapshot;

pub use dex::Dex;
pub use error::StoreError;
pub use inventory::Inventory;
pub use snapshot::{Bar, BarSnapshot};
