//! Per-variant address map
//!
//! A [`VariantAddressMap`] holds one [`ResolvedAddress`] for every [`Slot`],
//! indexed densely by [`Slot::index`]. It is built from a validated
//! [`Catalog`]: catalog entries become `Concrete`, every other slot is
//! `Absent`. Once built it is never modified.

use core::fmt;
use core::ops::Index;

use ft8xx_catalog::{Catalog, CatalogError, Slot, Variant};

use crate::address::{ResolvedAddress, UnsupportedFeature};

/// Reasons a map cannot be built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConstructionError {
    /// A catalog failed validation
    Catalog(CatalogError),
    /// Two catalogs were supplied for one variant
    DuplicateVariant(Variant),
    /// No catalog was supplied for a variant
    MissingVariant(Variant),
}

impl From<CatalogError> for ConstructionError {
    fn from(e: CatalogError) -> Self {
        ConstructionError::Catalog(e)
    }
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::Catalog(e) => write!(f, "inconsistent catalog: {}", e),
            ConstructionError::DuplicateVariant(v) => write!(f, "{} catalog supplied twice", v),
            ConstructionError::MissingVariant(v) => write!(f, "no catalog for {}", v),
        }
    }
}

/// Total slot table for one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VariantAddressMap {
    variant: Variant,
    table: [ResolvedAddress; Slot::COUNT],
}

impl VariantAddressMap {
    /// Map with every slot absent
    pub(crate) const fn absent(variant: Variant) -> Self {
        Self {
            variant,
            table: [ResolvedAddress::Absent; Slot::COUNT],
        }
    }

    /// Validate `catalog` and fill the table from it
    pub const fn build(catalog: &Catalog<'_>) -> Result<Self, ConstructionError> {
        if let Err(e) = catalog.validate() {
            return Err(ConstructionError::Catalog(e));
        }

        let mut map = Self::absent(catalog.variant());
        let entries = catalog.entries();
        let mut i = 0;
        while i < entries.len() {
            let entry = entries[i];
            map.table[entry.slot.index()] = ResolvedAddress::Concrete(entry.address);
            i += 1;
        }
        Ok(map)
    }

    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Address of `slot` on this variant, or `Absent`
    pub fn resolve(&self, slot: impl Into<Slot>) -> ResolvedAddress {
        self.table[slot.into().index()]
    }

    /// `true` iff [`resolve`](Self::resolve) yields `Concrete`
    pub fn is_supported(&self, slot: impl Into<Slot>) -> bool {
        self.resolve(slot).is_concrete()
    }

    /// Resolve, turning `Absent` into a capability error
    pub fn require(&self, slot: impl Into<Slot>) -> Result<u32, UnsupportedFeature> {
        let slot = slot.into();
        self.resolve(slot).ok_or_unsupported(self.variant, slot)
    }

    /// Every slot with its resolution, in [`Slot::index`] order
    pub fn iter(&self) -> impl Iterator<Item = (Slot, ResolvedAddress)> + '_ {
        (0..Slot::COUNT).map(move |i| (Slot::ALL[i], self.table[i]))
    }

    /// Slots this variant implements, with their addresses
    pub fn supported(&self) -> impl Iterator<Item = (Slot, u32)> + '_ {
        self.iter()
            .filter_map(|(slot, resolved)| resolved.address().map(|addr| (slot, addr)))
    }

    /// Number of slots this variant implements
    pub fn supported_count(&self) -> usize {
        self.table.iter().filter(|r| r.is_concrete()).count()
    }
}

impl Index<Slot> for VariantAddressMap {
    type Output = ResolvedAddress;

    fn index(&self, slot: Slot) -> &ResolvedAddress {
        &self.table[slot.index()]
    }
}
