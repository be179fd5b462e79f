//! Minimal TOML parser for chip configuration
//!
//! Handles only the subset the display section needs; it is NOT a general
//! TOML parser.
//!
//! ```toml
//! [display]
//! chip = "bt81x"                          # ft800, ft81x or bt81x
//! require = ["FLASH", "REG_TOUCH_TAG4"]   # vendor symbols
//! ```
//!
//! Supported:
//! - `key = value` pairs with quoted or bare strings
//! - Single-line arrays of strings
//! - `[display]` section header
//! - Comments (`# ...`), including trailing ones
//!
//! Everything else is rejected rather than skipped, so a typo in a key
//! cannot silently drop a requirement.

use core::fmt;

use heapless::Vec;

use ft8xx_catalog::{Slot, Variant};

use super::{ChipConfig, MAX_REQUIRED_SLOTS};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Section header other than `[display]`
    InvalidSection,
    /// `[display]` appears more than once
    DuplicateSection,
    /// Line is not a `key = value` pair
    InvalidLine,
    /// Key outside a section or not recognised
    UnknownKey,
    /// Key given more than once
    DuplicateKey,
    /// Malformed value (e.g. unterminated array)
    InvalidValue,
    /// `chip` names no known variant
    UnknownChip,
    /// `require` lists an unknown symbol
    UnknownSlot,
    /// Too many items (exceeded heapless capacity)
    TooManyItems,
    /// No `chip` key was given
    MissingChip,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseError::InvalidSection => "unknown section",
            ParseError::DuplicateSection => "duplicate section",
            ParseError::InvalidLine => "expected key = value",
            ParseError::UnknownKey => "unknown key",
            ParseError::DuplicateKey => "duplicate key",
            ParseError::InvalidValue => "invalid value",
            ParseError::UnknownChip => "unknown chip",
            ParseError::UnknownSlot => "unknown memory region or register",
            ParseError::TooManyItems => "too many required slots",
            ParseError::MissingChip => "missing chip",
        };
        f.write_str(msg)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
}

/// Parse TOML configuration into a [`ChipConfig`]
pub fn parse_config(input: &str) -> Result<ChipConfig, ParseError> {
    let mut section = Section::Root;
    let mut seen_display = false;
    let mut variant: Option<Variant> = None;
    let mut require: Option<Vec<Slot, MAX_REQUIRED_SLOTS>> = None;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') && !line.contains('=') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            if section == Section::Display {
                if seen_display {
                    return Err(ParseError::DuplicateSection);
                }
                seen_display = true;
            }
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        match (section, key) {
            (Section::Display, "chip") => {
                if variant.is_some() {
                    return Err(ParseError::DuplicateKey);
                }
                let name = parse_string(value)?;
                variant = Some(name.parse().map_err(|_| ParseError::UnknownChip)?);
            }
            (Section::Display, "require") => {
                if require.is_some() {
                    return Err(ParseError::DuplicateKey);
                }
                require = Some(parse_slots(value)?);
            }
            _ => return Err(ParseError::UnknownKey),
        }
    }

    Ok(ChipConfig {
        variant: variant.ok_or(ParseError::MissingChip)?,
        require: require.unwrap_or_default(),
    })
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "display" => Ok(Section::Display),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else if value.contains('"') {
        Err(ParseError::InvalidValue)
    } else {
        // Allow unquoted strings for simple values
        Ok(value)
    }
}

/// Parse an array of slot symbols like `["FLASH", "REG_TOUCH_TAG4"]`
fn parse_slots(value: &str) -> Result<Vec<Slot, MAX_REQUIRED_SLOTS>, ParseError> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or(ParseError::InvalidValue)?;

    let mut slots = Vec::new();
    for item in inner.split(',') {
        let item = item.trim();
        // Trailing comma
        if item.is_empty() {
            continue;
        }
        let slot: Slot = parse_string(item)?
            .parse()
            .map_err(|_| ParseError::UnknownSlot)?;
        if !slots.contains(&slot) {
            slots.push(slot).map_err(|_| ParseError::TooManyItems)?;
        }
    }
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ft8xx_catalog::{MemorySlot, RegisterSlot};

    #[test]
    fn test_parse_key_value() {
        assert_eq!(parse_key_value("chip = \"ft81x\""), Some(("chip", "\"ft81x\"")));
        assert_eq!(
            parse_key_value("chip = ft800 # the old one"),
            Some(("chip", "ft800"))
        );
        assert_eq!(parse_key_value("chip ="), None);
        assert_eq!(parse_key_value("chip"), None);
    }

    #[test]
    fn test_parse_string() {
        assert_eq!(parse_string("\"bt81x\""), Ok("bt81x"));
        assert_eq!(parse_string("bt81x"), Ok("bt81x"));
        assert_eq!(parse_string("\"bt81x"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_parse_slots() {
        let slots = parse_slots(r#"["FLASH", "REG_TOUCH_TAG4",]"#).unwrap();
        assert_eq!(
            slots.as_slice(),
            &[
                Slot::Memory(MemorySlot::Flash),
                Slot::Register(RegisterSlot::TouchTag4)
            ]
        );

        assert!(parse_slots("[]").unwrap().is_empty());
        assert_eq!(parse_slots(r#"["REG_BOGUS"]"#), Err(ParseError::UnknownSlot));
        assert_eq!(parse_slots(r#""FLASH""#), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("[display]\nchip = \"ft800\"\n").unwrap();
        assert_eq!(config.variant, Variant::Ft800);
        assert!(config.require.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
# Board: BT815 with 16 MB NOR flash
[display]
chip = "BT81X"   # case-insensitive
require = ["FLASH", "REG_FLASH_STATUS", "REG_CMDB_WRITE"]
"#;

        let config = parse_config(config_str).unwrap();
        assert_eq!(config.variant, Variant::Bt81x);
        assert_eq!(config.require.len(), 3);
        assert_eq!(config.require[1], Slot::Register(RegisterSlot::FlashStatus));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_config(""), Err(ParseError::MissingChip));
        assert_eq!(
            parse_config("chip = \"ft800\""),
            Err(ParseError::UnknownKey)
        );
        assert_eq!(
            parse_config("[stepper spin]\nchip = \"ft800\""),
            Err(ParseError::InvalidSection)
        );
        assert_eq!(
            parse_config("[display]\nchips = \"ft800\""),
            Err(ParseError::UnknownKey)
        );
        assert_eq!(
            parse_config("[display]\nchip \"ft800\""),
            Err(ParseError::InvalidLine)
        );
        assert_eq!(
            parse_config("[display]\nchip = \"ft801\""),
            Err(ParseError::UnknownChip)
        );
    }

    #[test]
    fn test_repeated_keys_rejected() {
        // A second list must not replace the first
        assert_eq!(
            parse_config("[display]\nchip = \"ft800\"\nrequire = [\"FLASH\"]\nrequire = [\"RAM_G\"]\n"),
            Err(ParseError::DuplicateKey)
        );
        assert_eq!(
            parse_config("[display]\nchip = \"ft800\"\nchip = \"bt81x\"\n"),
            Err(ParseError::DuplicateKey)
        );
        assert_eq!(
            parse_config("[display]\nrequire = []\nrequire = [\"FLASH\"]\nchip = \"bt81x\"\n"),
            Err(ParseError::DuplicateKey)
        );
        assert_eq!(
            parse_config("[display]\nchip = \"ft800\"\n[display]\nrequire = [\"RAM_G\"]\n"),
            Err(ParseError::DuplicateSection)
        );
    }
}
