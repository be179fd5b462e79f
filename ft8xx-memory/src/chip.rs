//! Handle for the configured chip
//!
//! The variant is chosen once at configuration time. A [`Chip`] borrows that
//! variant's map so the transport layer can resolve slots without passing
//! the variant around.

use ft8xx_catalog::{Slot, Variant};

use crate::address::{ResolvedAddress, UnsupportedFeature};
use crate::map::VariantAddressMap;
use crate::resolver::AddressMaps;

/// Resolver bound to one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Chip<'m> {
    map: &'m VariantAddressMap,
}

impl Chip<'static> {
    /// Bind to `variant` in the built-in maps
    pub fn new(variant: Variant) -> Self {
        Self::with_maps(AddressMaps::builtin(), variant)
    }
}

impl<'m> Chip<'m> {
    /// Bind to `variant` in a specific set of maps
    pub fn with_maps(maps: &'m AddressMaps, variant: Variant) -> Self {
        Self {
            map: maps.variant(variant),
        }
    }

    pub fn variant(&self) -> Variant {
        self.map.variant()
    }

    pub fn map(&self) -> &'m VariantAddressMap {
        self.map
    }

    pub fn resolve(&self, slot: impl Into<Slot>) -> ResolvedAddress {
        self.map.resolve(slot)
    }

    pub fn is_supported(&self, slot: impl Into<Slot>) -> bool {
        self.map.is_supported(slot)
    }

    /// Address of `slot`, or a capability error if this chip lacks it
    pub fn require(&self, slot: impl Into<Slot>) -> Result<u32, UnsupportedFeature> {
        let slot = slot.into();
        self.map.require(slot).map_err(|e| {
            debug!("{} lacks {}", e.variant, e.slot);
            e
        })
    }

    /// Check that every slot in `slots` is implemented
    ///
    /// Reports the first missing slot, in the order given.
    pub fn require_all(&self, slots: &[Slot]) -> Result<(), UnsupportedFeature> {
        for &slot in slots {
            self.require(slot)?;
        }
        Ok(())
    }
}
