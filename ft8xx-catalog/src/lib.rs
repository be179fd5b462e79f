//! FT8xx address catalog
//!
//! Raw memory-map and register addresses for the FTDI/Bridgetek EVE display
//! controller family, grouped by silicon variant exactly as the datasheets
//! list them:
//!
//! - [`Variant`] - the supported chips (FT800, FT81x, BT81x)
//! - [`MemorySlot`], [`RegisterSlot`], [`Slot`] - every named region or
//!   register any variant defines
//! - [`Catalog`] - one variant's `(slot, address)` table, with a `const`
//!   consistency check
//! - [`tables`] - the built-in catalogs
//!
//! Nothing here resolves addresses; `ft8xx-memory` normalizes these tables
//! into per-variant maps.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod slot;
pub mod tables;
pub mod variant;

pub use catalog::{Catalog, CatalogEntry, CatalogError, DOCUMENTED_ALIASES};
pub use slot::{MemorySlot, RegisterSlot, Slot, SlotKind, UnknownSlot};
pub use variant::{AddressWindow, UnknownVariant, Variant};
