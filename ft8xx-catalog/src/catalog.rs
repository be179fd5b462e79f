//! Per-variant catalog tables
//!
//! A [`Catalog`] is a plain list of `(slot, address)` pairs for one variant.
//! [`Catalog::validate`] is a `const fn`, so a table declared as a `const`
//! item can be checked at compile time.

use core::fmt;

use crate::slot::{MemorySlot, RegisterSlot, Slot};
use crate::variant::Variant;

/// Slot pairs that legitimately share an address on one variant
///
/// The register file base is, by definition, the address of its first
/// register.
pub const DOCUMENTED_ALIASES: &[(Slot, Slot)] = &[(
    Slot::Memory(MemorySlot::Reg),
    Slot::Register(RegisterSlot::Id),
)];

/// Check whether two slots are listed in [`DOCUMENTED_ALIASES`] (either order)
pub const fn is_documented_alias(a: Slot, b: Slot) -> bool {
    let mut i = 0;
    while i < DOCUMENTED_ALIASES.len() {
        let (x, y) = DOCUMENTED_ALIASES[i];
        if (x.same(a) && y.same(b)) || (x.same(b) && y.same(a)) {
            return true;
        }
        i += 1;
    }
    false
}

/// One documented address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CatalogEntry {
    pub slot: Slot,
    pub address: u32,
}

impl CatalogEntry {
    /// Memory region entry
    pub const fn memory(slot: MemorySlot, address: u32) -> Self {
        Self {
            slot: Slot::Memory(slot),
            address,
        }
    }

    /// Register entry
    pub const fn register(slot: RegisterSlot, address: u32) -> Self {
        Self {
            slot: Slot::Register(slot),
            address,
        }
    }
}

/// Inconsistencies detected in a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// The same slot is listed more than once
    DuplicateSlot { variant: Variant, slot: Slot },
    /// Address lies outside the window the slot must live in
    AddressOutOfRange {
        variant: Variant,
        slot: Slot,
        address: u32,
    },
    /// Two different slots share one address without a documented alias
    AddressConflict {
        variant: Variant,
        first: Slot,
        second: Slot,
        address: u32,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateSlot { variant, slot } => {
                write!(f, "{}: {} listed more than once", variant, slot)
            }
            CatalogError::AddressOutOfRange {
                variant,
                slot,
                address,
            } => write!(
                f,
                "{}: {} at {:#08x} is outside the address space",
                variant, slot, address
            ),
            CatalogError::AddressConflict {
                variant,
                first,
                second,
                address,
            } => write!(
                f,
                "{}: {} and {} both at {:#08x}",
                variant, first, second, address
            ),
        }
    }
}

/// Raw address table for one variant
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    variant: Variant,
    entries: &'a [CatalogEntry],
}

impl<'a> Catalog<'a> {
    /// Wrap a table of entries; nothing is checked until [`Catalog::validate`]
    pub const fn new(variant: Variant, entries: &'a [CatalogEntry]) -> Self {
        Self { variant, entries }
    }

    pub const fn variant(&self) -> Variant {
        self.variant
    }

    pub const fn entries(&self) -> &'a [CatalogEntry] {
        self.entries
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw documented address for `slot`, if this variant lists it
    pub const fn lookup(&self, slot: Slot) -> Option<u32> {
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].slot.same(slot) {
                return Some(self.entries[i].address);
            }
            i += 1;
        }
        None
    }

    /// Check the table for duplicates, range violations and address clashes
    ///
    /// Entries are checked in order; the first problem found is returned.
    pub const fn validate(&self) -> Result<(), CatalogError> {
        let variant = self.variant;
        let mut i = 0;
        while i < self.entries.len() {
            let entry = self.entries[i];
            if !variant.accepts(entry.slot, entry.address) {
                return Err(CatalogError::AddressOutOfRange {
                    variant,
                    slot: entry.slot,
                    address: entry.address,
                });
            }

            let mut j = i + 1;
            while j < self.entries.len() {
                let other = self.entries[j];
                if entry.slot.same(other.slot) {
                    return Err(CatalogError::DuplicateSlot {
                        variant,
                        slot: entry.slot,
                    });
                }
                if entry.address == other.address
                    && !is_documented_alias(entry.slot, other.slot)
                {
                    return Err(CatalogError::AddressConflict {
                        variant,
                        first: entry.slot,
                        second: other.slot,
                        address: entry.address,
                    });
                }
                j += 1;
            }
            i += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn m(slot: MemorySlot, address: u32) -> CatalogEntry {
        CatalogEntry::memory(slot, address)
    }

    fn r(slot: RegisterSlot, address: u32) -> CatalogEntry {
        CatalogEntry::register(slot, address)
    }

    #[test]
    fn test_valid_catalog() {
        let entries = [
            m(MemorySlot::RamG, 0x000000),
            m(MemorySlot::Reg, 0x302000),
            r(RegisterSlot::Id, 0x302000),
            r(RegisterSlot::Frames, 0x302004),
        ];
        let catalog = Catalog::new(Variant::Ft81x, &entries);
        assert_eq!(catalog.validate(), Ok(()));
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.lookup(Slot::Register(RegisterSlot::Frames)), Some(0x302004));
        assert_eq!(catalog.lookup(Slot::Register(RegisterSlot::Clock)), None);
    }

    #[test]
    fn test_duplicate_slot() {
        let entries = [
            r(RegisterSlot::HCycle, 0x30202C),
            r(RegisterSlot::HCycle, 0x302040),
        ];
        let catalog = Catalog::new(Variant::Ft81x, &entries);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateSlot {
                variant: Variant::Ft81x,
                slot: Slot::Register(RegisterSlot::HCycle),
            })
        );
    }

    #[test]
    fn test_vcycle_aliased_to_hcycle_is_rejected() {
        let entries = [
            r(RegisterSlot::HCycle, 0x102428),
            r(RegisterSlot::VCycle, 0x102428),
        ];
        let catalog = Catalog::new(Variant::Ft800, &entries);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::AddressConflict {
                variant: Variant::Ft800,
                first: Slot::Register(RegisterSlot::HCycle),
                second: Slot::Register(RegisterSlot::VCycle),
                address: 0x102428,
            })
        );
    }

    #[test]
    fn test_spi_width_aliased_to_trim_is_rejected() {
        let entries = [
            r(RegisterSlot::Trim, 0x302180),
            r(RegisterSlot::SpiWidth, 0x302180),
        ];
        let catalog = Catalog::new(Variant::Bt81x, &entries);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::AddressConflict { .. })
        ));
    }

    #[test]
    fn test_out_of_range() {
        let entries = [r(RegisterSlot::Tracker, 0x40_0000)];
        let catalog = Catalog::new(Variant::Ft81x, &entries);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::AddressOutOfRange { address: 0x40_0000, .. })
        ));

        // Flash slot on a chip without flash
        let entries = [m(MemorySlot::Flash, 0x800000)];
        let catalog = Catalog::new(Variant::Ft81x, &entries);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::AddressOutOfRange { .. })
        ));

        // Flash slot outside the flash window
        let entries = [m(MemorySlot::FlashMax, 0x200000)];
        let catalog = Catalog::new(Variant::Bt81x, &entries);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::AddressOutOfRange { .. })
        ));
    }

    #[test]
    fn test_documented_alias() {
        let reg = Slot::Memory(MemorySlot::Reg);
        let id = Slot::Register(RegisterSlot::Id);
        assert!(is_documented_alias(reg, id));
        assert!(is_documented_alias(id, reg));
        assert!(!is_documented_alias(
            Slot::Register(RegisterSlot::HCycle),
            Slot::Register(RegisterSlot::VCycle)
        ));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Variant::Ft800, &[]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.validate(), Ok(()));
    }

    /// Distinct host-window slots paired with distinct addresses
    fn distinct_entries() -> impl Strategy<Value = Vec<CatalogEntry>> {
        // No flash slots and no aliased register file base
        let pool: Vec<Slot> = Slot::ALL
            .iter()
            .copied()
            .filter(|s| !s.is_flash() && !s.same(Slot::Memory(MemorySlot::Reg)))
            .collect();
        (
            prop::sample::subsequence(pool, 2..32),
            prop::collection::btree_set(0u32..=0x3F_FFFF, 32),
        )
            .prop_map(|(slots, addresses)| {
                slots
                    .into_iter()
                    .zip(addresses)
                    .map(|(slot, address)| CatalogEntry { slot, address })
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn prop_distinct_entries_validate(entries in distinct_entries()) {
            let catalog = Catalog::new(Variant::Ft81x, &entries);
            prop_assert_eq!(catalog.validate(), Ok(()));
            for entry in &entries {
                prop_assert_eq!(catalog.lookup(entry.slot), Some(entry.address));
            }
        }

        #[test]
        fn prop_repeated_slot_rejected(entries in distinct_entries(), pick in any::<prop::sample::Index>()) {
            let mut entries = entries;
            let repeated = entries[pick.index(entries.len())];
            entries.push(repeated);

            let catalog = Catalog::new(Variant::Ft81x, &entries);
            prop_assert_eq!(
                catalog.validate(),
                Err(CatalogError::DuplicateSlot {
                    variant: Variant::Ft81x,
                    slot: repeated.slot,
                })
            );
        }

        #[test]
        fn prop_shared_address_rejected(
            entries in distinct_entries(),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let mut entries = entries;
            let (i, j) = (a.index(entries.len()), b.index(entries.len()));
            prop_assume!(i != j);
            let (first, second) = (i.min(j), i.max(j));
            entries[second].address = entries[first].address;

            let catalog = Catalog::new(Variant::Ft81x, &entries);
            prop_assert_eq!(
                catalog.validate(),
                Err(CatalogError::AddressConflict {
                    variant: Variant::Ft81x,
                    first: entries[first].slot,
                    second: entries[second].slot,
                    address: entries[first].address,
                })
            );
        }
    }
}
