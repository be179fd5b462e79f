//! Variant-indexed address resolution for EVE display controllers
//!
//! Turns a symbolic memory region or register into the bus address the
//! transport layer should use on the selected chip:
//!
//! - [`VariantAddressMap`] - one chip's total slot table
//! - [`AddressMaps`] - every variant's map, built once from the catalog
//! - [`Chip`] - handle for the configured variant
//! - [`config`] - chip selection and required-feature checks
//!
//! Resolution never fails; a slot the chip lacks resolves to
//! [`ResolvedAddress::Absent`], which callers branch on. No I/O happens
//! here.
//!
//! ```
//! use ft8xx_memory::{resolve, is_supported, MemorySlot, RegisterSlot, ResolvedAddress, Variant};
//!
//! assert_eq!(resolve(Variant::Ft81x, RegisterSlot::CmdWrite), ResolvedAddress::Concrete(0x3020FC));
//! assert_eq!(resolve(Variant::Ft800, MemorySlot::Flash), ResolvedAddress::Absent);
//! assert!(is_supported(Variant::Bt81x, RegisterSlot::TouchTag4));
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod address;
pub mod chip;
pub mod config;
pub mod map;
pub mod resolver;

pub use address::{ResolvedAddress, UnsupportedFeature};
pub use chip::Chip;
pub use config::{load_chip, parse_config, ChipConfig, ConfigError, ParseError};
pub use map::{ConstructionError, VariantAddressMap};
pub use resolver::{first_supported, is_supported, resolve, AddressMaps};

pub use ft8xx_catalog::{MemorySlot, RegisterSlot, Slot, SlotKind, Variant};
