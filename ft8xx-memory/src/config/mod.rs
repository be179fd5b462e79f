//! Chip selection
//!
//! The display chip is board configuration: picked once, before any bus
//! traffic, together with the features the application cannot run without.
//! [`ChipConfig::validate`] turns that into a [`Chip`] or fails fast with
//! the first missing feature.
//!
//! Configuration arrives as TOML text (see [`parse_config`]) or, with the
//! `serde` feature, as postcard binary.

pub mod toml;

pub use self::toml::{parse_config, ParseError};

use core::fmt;

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use ft8xx_catalog::{Slot, Variant};

use crate::address::UnsupportedFeature;
use crate::chip::Chip;
use crate::resolver::AddressMaps;

/// Maximum number of required slots in one config
pub const MAX_REQUIRED_SLOTS: usize = 16;

/// Maximum serialized config size (binary)
pub const MAX_CONFIG_SIZE: usize = 64;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML parsing failed
    Parse(ParseError),
    /// Too many required slots
    TooManyRequirements,
    /// A required slot is absent on the selected chip
    Unsupported(UnsupportedFeature),
    /// Serialization failed
    Serialize,
    /// Deserialization failed
    Deserialize,
}

impl From<ParseError> for ConfigError {
    fn from(e: ParseError) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<UnsupportedFeature> for ConfigError {
    fn from(e: UnsupportedFeature) -> Self {
        ConfigError::Unsupported(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::TooManyRequirements => write!(
                f,
                "more than {} required slots",
                MAX_REQUIRED_SLOTS
            ),
            ConfigError::Unsupported(e) => write!(f, "{}", e),
            ConfigError::Serialize => f.write_str("failed to serialize config"),
            ConfigError::Deserialize => f.write_str("failed to deserialize config"),
        }
    }
}

/// Display chip configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChipConfig {
    /// Selected silicon
    pub variant: Variant,
    /// Slots the application needs, checked by [`ChipConfig::validate`]
    pub require: Vec<Slot, MAX_REQUIRED_SLOTS>,
}

impl ChipConfig {
    /// Config for `variant` with no requirements
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            require: Vec::new(),
        }
    }

    /// Add a required slot; duplicates are ignored
    pub fn with_requirement(mut self, slot: impl Into<Slot>) -> Result<Self, ConfigError> {
        let slot = slot.into();
        if !self.require.contains(&slot) {
            self.require
                .push(slot)
                .map_err(|_| ConfigError::TooManyRequirements)?;
        }
        Ok(self)
    }

    /// Bind the built-in maps to the configured chip, checking requirements
    pub fn validate(&self) -> Result<Chip<'static>, UnsupportedFeature> {
        self.validate_with(AddressMaps::builtin())
    }

    /// Like [`validate`](Self::validate), against a specific set of maps
    pub fn validate_with<'m>(&self, maps: &'m AddressMaps) -> Result<Chip<'m>, UnsupportedFeature> {
        let chip = Chip::with_maps(maps, self.variant);
        info!("Display chip: {}", self.variant);

        if let Err(e) = chip.require_all(&self.require) {
            warn!("{} not available on {}", e.slot, e.variant);
            return Err(e);
        }

        debug!(
            "{} of {} slots available",
            chip.map().supported_count(),
            Slot::COUNT
        );
        Ok(chip)
    }

    /// Serialize to postcard binary, returning the number of bytes written
    #[cfg(feature = "serde")]
    pub fn to_bytes(&self, buffer: &mut [u8]) -> Result<usize, ConfigError> {
        postcard::to_slice(self, buffer)
            .map(|used| used.len())
            .map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize from postcard binary
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)
    }
}

/// Parse TOML configuration and bind the configured chip
pub fn load_chip(input: &str) -> Result<Chip<'static>, ConfigError> {
    let config = parse_config(input)?;
    Ok(config.validate()?)
}
