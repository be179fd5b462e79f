//! Cross-variant resolver
//!
//! [`AddressMaps`] holds one [`VariantAddressMap`] per [`Variant`]. The
//! built-in instance is evaluated at compile time from the vendor catalogs
//! and lives in a `static`, so every reader shares one immutable table
//! without locking. Rebuilding (for example from an updated catalog) goes
//! through [`AddressMaps::build`] and yields a fresh value; an existing
//! instance is never patched in place.

use core::ops::Index;

use ft8xx_catalog::{tables, Catalog, Slot, Variant};

use crate::address::ResolvedAddress;
use crate::map::{ConstructionError, VariantAddressMap};

static BUILTIN: AddressMaps = match AddressMaps::build(&tables::BUILTIN) {
    Ok(maps) => maps,
    Err(_) => panic!("built-in FT8xx catalog failed to build"),
};

/// Address maps for every supported variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressMaps {
    maps: [VariantAddressMap; Variant::COUNT],
}

impl AddressMaps {
    /// Shared maps built from the vendor catalogs
    pub fn builtin() -> &'static AddressMaps {
        &BUILTIN
    }

    /// Build maps from one catalog per variant, in any order
    ///
    /// Every variant needs exactly one catalog and every catalog must pass
    /// validation.
    pub const fn build(catalogs: &[Catalog<'_>]) -> Result<Self, ConstructionError> {
        let mut built: [Option<VariantAddressMap>; Variant::COUNT] = [None; Variant::COUNT];

        let mut i = 0;
        while i < catalogs.len() {
            let variant = catalogs[i].variant();
            if built[variant.index()].is_some() {
                return Err(ConstructionError::DuplicateVariant(variant));
            }
            match VariantAddressMap::build(&catalogs[i]) {
                Ok(map) => built[variant.index()] = Some(map),
                Err(e) => return Err(e),
            }
            i += 1;
        }

        let mut maps = [VariantAddressMap::absent(Variant::Ft800); Variant::COUNT];
        let mut v = 0;
        while v < Variant::COUNT {
            match built[v] {
                Some(map) => maps[v] = map,
                None => return Err(ConstructionError::MissingVariant(Variant::ALL[v])),
            }
            v += 1;
        }
        Ok(Self { maps })
    }

    /// Map for one variant
    pub const fn variant(&self, variant: Variant) -> &VariantAddressMap {
        &self.maps[variant.index()]
    }

    /// Address of `slot` on `variant`, or `Absent`
    pub fn resolve(&self, variant: Variant, slot: impl Into<Slot>) -> ResolvedAddress {
        self.variant(variant).resolve(slot)
    }

    pub fn is_supported(&self, variant: Variant, slot: impl Into<Slot>) -> bool {
        self.resolve(variant, slot).is_concrete()
    }

    /// Oldest variant that implements `slot`
    pub fn first_supported(&self, slot: impl Into<Slot>) -> Option<Variant> {
        let slot = slot.into();
        Variant::ALL
            .iter()
            .copied()
            .find(|&v| self.is_supported(v, slot))
    }

    /// Iterate over every variant's map, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &VariantAddressMap> {
        self.maps.iter()
    }
}

impl Index<Variant> for AddressMaps {
    type Output = VariantAddressMap;

    fn index(&self, variant: Variant) -> &VariantAddressMap {
        self.variant(variant)
    }
}

/// Resolve `slot` on `variant` using the built-in maps
pub fn resolve(variant: Variant, slot: impl Into<Slot>) -> ResolvedAddress {
    AddressMaps::builtin().resolve(variant, slot)
}

/// Whether `variant` implements `slot`, per the built-in maps
pub fn is_supported(variant: Variant, slot: impl Into<Slot>) -> bool {
    resolve(variant, slot).is_concrete()
}

/// Oldest variant implementing `slot`, per the built-in maps
pub fn first_supported(slot: impl Into<Slot>) -> Option<Variant> {
    AddressMaps::builtin().first_supported(slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ft8xx_catalog::variant::{FLASH_WINDOW, HOST_WINDOW};
    use ft8xx_catalog::{CatalogEntry, MemorySlot, RegisterSlot};
    use proptest::prelude::*;

    use crate::address::ResolvedAddress::{Absent, Concrete};

    #[test]
    fn test_main_graphics_ram() {
        assert_eq!(resolve(Variant::Ft800, MemorySlot::RamG), Concrete(0x000000));
        assert_eq!(resolve(Variant::Ft800, MemorySlot::Flash), Absent);
    }

    #[test]
    fn test_flash_window_on_bt81x() {
        assert_eq!(resolve(Variant::Bt81x, MemorySlot::Flash), Concrete(0x800000));
        assert_eq!(resolve(Variant::Bt81x, MemorySlot::FlashMax), Concrete(0x107_FFFF));
        assert_eq!(resolve(Variant::Ft81x, MemorySlot::FlashMax), Absent);
    }

    #[test]
    fn test_palette_ram() {
        assert_eq!(resolve(Variant::Ft800, MemorySlot::RamPal), Concrete(0x102000));
        assert_eq!(resolve(Variant::Ft81x, MemorySlot::RamPal), Absent);
        assert_eq!(resolve(Variant::Bt81x, MemorySlot::RamPal), Absent);
    }

    #[test]
    fn test_extended_touch_tags() {
        assert!(!is_supported(Variant::Ft800, RegisterSlot::TouchTag4));
        assert!(is_supported(Variant::Ft81x, RegisterSlot::TouchTag4));
        assert!(is_supported(Variant::Bt81x, RegisterSlot::TouchTag4));
    }

    #[test]
    fn test_command_buffer_pointers() {
        assert_eq!(resolve(Variant::Ft800, RegisterSlot::CmdWrite), Concrete(0x1024E8));
        assert_eq!(resolve(Variant::Ft81x, RegisterSlot::CmdWrite), Concrete(0x3020FC));
        assert_eq!(resolve(Variant::Bt81x, RegisterSlot::CmdRead), Concrete(0x3020F8));
    }

    #[test]
    fn test_first_supported() {
        assert_eq!(first_supported(RegisterSlot::Id), Some(Variant::Ft800));
        assert_eq!(first_supported(RegisterSlot::CmdbWrite), Some(Variant::Ft81x));
        assert_eq!(first_supported(MemorySlot::Flash), Some(Variant::Bt81x));
        assert_eq!(first_supported(RegisterSlot::EhostTouchAck), Some(Variant::Bt81x));
    }

    #[test]
    fn test_no_unexpected_aliasing() {
        for map in AddressMaps::builtin().iter() {
            let supported: Vec<_> = map.supported().collect();
            for (i, (a, addr_a)) in supported.iter().enumerate() {
                for (b, addr_b) in &supported[i + 1..] {
                    if addr_a == addr_b {
                        assert!(
                            ft8xx_catalog::catalog::is_documented_alias(*a, *b),
                            "{}: {} and {} both at {:#x}",
                            map.variant(),
                            a,
                            b,
                            addr_a
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_vcycle_not_hcycle() {
        for v in Variant::ALL {
            assert_ne!(
                resolve(*v, RegisterSlot::VCycle),
                resolve(*v, RegisterSlot::HCycle)
            );
        }
    }

    #[test]
    fn test_build_requires_every_variant() {
        let result = AddressMaps::build(&[tables::FT800, tables::BT81X]);
        assert_eq!(result, Err(ConstructionError::MissingVariant(Variant::Ft81x)));

        let result = AddressMaps::build(&[tables::FT800, tables::FT81X, tables::FT81X]);
        assert_eq!(result, Err(ConstructionError::DuplicateVariant(Variant::Ft81x)));
    }

    #[test]
    fn test_build_order_independent() {
        let shuffled = AddressMaps::build(&[tables::BT81X, tables::FT800, tables::FT81X]).unwrap();
        assert_eq!(&shuffled, AddressMaps::builtin());
    }

    #[test]
    fn test_rebuild_yields_new_instance() {
        // Reloaded FT800 table without the tracker register
        let entries: Vec<CatalogEntry> = tables::FT800
            .entries()
            .iter()
            .copied()
            .filter(|e| e.slot != Slot::Register(RegisterSlot::Tracker))
            .collect();
        let ft800 = Catalog::new(Variant::Ft800, &entries);
        let reloaded = AddressMaps::build(&[ft800, tables::FT81X, tables::BT81X]).unwrap();

        assert_eq!(reloaded.resolve(Variant::Ft800, RegisterSlot::Tracker), Absent);
        assert_eq!(
            AddressMaps::builtin().resolve(Variant::Ft800, RegisterSlot::Tracker),
            Concrete(0x109000)
        );
    }

    #[test]
    fn test_concurrent_readers() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    Variant::ALL
                        .iter()
                        .map(|&v| resolve(v, RegisterSlot::CmdWrite))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                vec![Concrete(0x1024E8), Concrete(0x3020FC), Concrete(0x3020FC)]
            );
        }
    }

    fn any_variant() -> impl Strategy<Value = Variant> {
        prop::sample::select(Variant::ALL.to_vec())
    }

    fn any_slot() -> impl Strategy<Value = Slot> {
        prop::sample::select(Slot::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_resolution_is_total(variant in any_variant(), slot in any_slot()) {
            let resolved = resolve(variant, slot);
            prop_assert!(resolved.is_concrete() ^ resolved.is_absent());
        }

        #[test]
        fn prop_resolution_is_deterministic(variant in any_variant(), slot in any_slot()) {
            prop_assert_eq!(resolve(variant, slot), resolve(variant, slot));
        }

        #[test]
        fn prop_supported_iff_concrete(variant in any_variant(), slot in any_slot()) {
            prop_assert_eq!(
                is_supported(variant, slot),
                matches!(resolve(variant, slot), Concrete(_))
            );
        }

        #[test]
        fn prop_supported_addresses_in_bounds(variant in any_variant(), slot in any_slot()) {
            if let Concrete(addr) = resolve(variant, slot) {
                if slot.is_flash() {
                    prop_assert_eq!(variant, Variant::Bt81x);
                    prop_assert!(FLASH_WINDOW.contains(addr));
                } else {
                    prop_assert!(HOST_WINDOW.contains(addr));
                }
            }
        }

        #[test]
        fn prop_matches_catalog(variant in any_variant(), slot in any_slot()) {
            let raw = tables::catalog(variant).lookup(slot);
            prop_assert_eq!(resolve(variant, slot).address(), raw);
        }
    }
}
