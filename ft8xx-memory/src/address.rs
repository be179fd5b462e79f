//! Resolution results

use core::fmt;

use ft8xx_catalog::{Slot, Variant};

/// Outcome of resolving a slot on one variant
///
/// `Absent` is an explicit case rather than a zero sentinel: address 0 is
/// the legitimate base of `RAM_G`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResolvedAddress {
    /// Absolute bus address
    Concrete(u32),
    /// The variant does not implement this slot
    Absent,
}

impl ResolvedAddress {
    pub const fn is_concrete(self) -> bool {
        matches!(self, ResolvedAddress::Concrete(_))
    }

    pub const fn is_absent(self) -> bool {
        matches!(self, ResolvedAddress::Absent)
    }

    /// The address, if present
    pub const fn address(self) -> Option<u32> {
        match self {
            ResolvedAddress::Concrete(addr) => Some(addr),
            ResolvedAddress::Absent => None,
        }
    }

    /// Convert into a capability result for `slot` on `variant`
    pub const fn ok_or_unsupported(
        self,
        variant: Variant,
        slot: Slot,
    ) -> Result<u32, UnsupportedFeature> {
        match self {
            ResolvedAddress::Concrete(addr) => Ok(addr),
            ResolvedAddress::Absent => Err(UnsupportedFeature { variant, slot }),
        }
    }
}

impl From<ResolvedAddress> for Option<u32> {
    fn from(resolved: ResolvedAddress) -> Self {
        resolved.address()
    }
}

/// A slot was needed but the active variant does not implement it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnsupportedFeature {
    pub variant: Variant,
    pub slot: Slot,
}

impl fmt::Display for UnsupportedFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not implemented on {}", self.slot, self.variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ft8xx_catalog::MemorySlot;

    #[test]
    fn test_zero_is_not_absent() {
        let zero = ResolvedAddress::Concrete(0);
        assert!(zero.is_concrete());
        assert!(!zero.is_absent());
        assert_eq!(zero.address(), Some(0));
        assert_ne!(zero, ResolvedAddress::Absent);
    }

    #[test]
    fn test_ok_or_unsupported() {
        let slot = Slot::Memory(MemorySlot::Flash);
        assert_eq!(
            ResolvedAddress::Concrete(0x800000).ok_or_unsupported(Variant::Bt81x, slot),
            Ok(0x800000)
        );
        assert_eq!(
            ResolvedAddress::Absent.ok_or_unsupported(Variant::Ft800, slot),
            Err(UnsupportedFeature {
                variant: Variant::Ft800,
                slot
            })
        );
    }

    #[test]
    fn test_unsupported_display() {
        let err = UnsupportedFeature {
            variant: Variant::Ft81x,
            slot: Slot::Memory(MemorySlot::RamPal),
        };
        assert_eq!(err.to_string(), "RAM_PAL is not implemented on ft81x");
    }
}
