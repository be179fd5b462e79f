//! Chip variants and their address spaces

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::slot::Slot;

/// Inclusive range of bus addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressWindow {
    /// First address in the window
    pub start: u32,
    /// Last address in the window (inclusive)
    pub end: u32,
}

impl AddressWindow {
    /// Create a window covering `start..=end`
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Check whether `address` falls inside the window
    pub const fn contains(&self, address: u32) -> bool {
        address >= self.start && address <= self.end
    }
}

/// Host-accessible window shared by every variant (22-bit SPI address)
pub const HOST_WINDOW: AddressWindow = AddressWindow::new(0x000000, 0x3F_FFFF);

/// External NOR flash window, BT81x only
pub const FLASH_WINDOW: AddressWindow = AddressWindow::new(0x800000, 0x107_FFFF);

/// Supported display-controller silicon
///
/// Ordered by generation: a later variant is newer silicon. The variant is
/// picked once from board configuration and never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Variant {
    /// FT800/FT801, 256 KiB RAM_G with separate palette RAM
    Ft800 = 0,
    /// FT810/FT811/FT812/FT813, 1 MiB RAM_G
    Ft81x = 1,
    /// BT815/BT816/BT817/BT818, adds external flash
    Bt81x = 2,
}

impl Variant {
    /// All variants, oldest first
    pub const ALL: &'static [Variant] = &[Variant::Ft800, Variant::Ft81x, Variant::Bt81x];

    /// Number of variants
    pub const COUNT: usize = Self::ALL.len();

    /// Dense index for per-variant tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Generation ordinal; higher is newer silicon
    pub const fn generation(self) -> u8 {
        self as u8
    }

    /// Lowercase name used in configuration files
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Ft800 => "ft800",
            Variant::Ft81x => "ft81x",
            Variant::Bt81x => "bt81x",
        }
    }

    /// Window the host can address directly over SPI
    pub const fn host_window(self) -> AddressWindow {
        HOST_WINDOW
    }

    /// External flash window, if the chip has a flash interface
    pub const fn flash_window(self) -> Option<AddressWindow> {
        match self {
            Variant::Bt81x => Some(FLASH_WINDOW),
            Variant::Ft800 | Variant::Ft81x => None,
        }
    }

    /// Check that `address` is a legal location for `slot` on this variant
    ///
    /// Flash slots must sit inside the flash window; everything else inside
    /// the host window.
    pub const fn accepts(self, slot: Slot, address: u32) -> bool {
        if slot.is_flash() {
            match self.flash_window() {
                Some(window) => window.contains(address),
                None => false,
            }
        } else {
            self.host_window().contains(address)
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a chip name does not match any variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownVariant;

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown chip variant")
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    /// Parse a configuration name, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownVariant)
    }
}
