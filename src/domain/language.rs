//! Language - Catalog of Selectable Languages
//!
//! The catalog is compiled in and immutable once constructed. Its order is
//! the display order of the grid.

use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, Result};

/// 24-bit RGB color (`0xRRGGBB`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor(pub u32);

impl RgbColor {
    /// Parse a `#RRGGBB` hex string (digits are case-insensitive)
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor {
            value: value.to_string(),
        };

        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        u32::from_str_radix(hex, 16).map(Self).map_err(|_| invalid())
    }

    /// Raw `0xRRGGBB` value
    pub fn hex(self) -> u32 {
        self.0
    }

    /// Reject values wider than 24 bits
    pub fn validate(self) -> Result<Self> {
        if self.0 > 0xFF_FFFF {
            return Err(Error::InvalidColor {
                value: self.to_string(),
            });
        }
        Ok(self)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Two-stop linear gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start: RgbColor,
    pub end: RgbColor,
}

impl Gradient {
    pub const fn new(start: u32, end: u32) -> Self {
        Self {
            start: RgbColor(start),
            end: RgbColor(end),
        }
    }
}

/// One selectable language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRecord {
    /// Stable key, e.g. a language code ("en")
    pub identifier: String,
    /// Display name ("English")
    pub label: String,
    /// Card background gradient
    pub gradient: Gradient,
}

impl LanguageRecord {
    pub fn new(identifier: impl Into<String>, label: impl Into<String>, gradient: Gradient) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
            gradient,
        }
    }

    /// Build a record from `#RRGGBB` gradient stops
    pub fn parse(identifier: &str, label: &str, start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            identifier: identifier.to_string(),
            label: label.to_string(),
            gradient: Gradient {
                start: RgbColor::parse(start)?,
                end: RgbColor::parse(end)?,
            },
        })
    }
}

/// Built-in languages: (identifier, label, gradient)
const DEFAULT_LANGUAGES: [(&str, &str, Gradient); 5] = [
    ("en", "English", Gradient::new(0x667EEA, 0x764BA2)),
    ("hi", "Hindi", Gradient::new(0xF6D365, 0xFDA085)),
    ("mr", "Marathi", Gradient::new(0x84FAB0, 0x8FD3F4)),
    ("gu", "Gujarati", Gradient::new(0xFBD786, 0xF7797D)),
    ("bn", "Bengali", Gradient::new(0xFF9A9E, 0xFAD0C4)),
];

/// Immutable, ordered list of languages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCatalog {
    records: Vec<LanguageRecord>,
}

impl LanguageCatalog {
    /// Create a catalog, rejecting empty or duplicate identifiers and
    /// gradient stops outside `0x000000..=0xFFFFFF`
    pub fn new(records: Vec<LanguageRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.identifier.is_empty() {
                return Err(Error::Invalid {
                    message: format!("language {:?} has an empty identifier", record.label),
                });
            }
            record.gradient.start.validate()?;
            record.gradient.end.validate()?;
            if !seen.insert(record.identifier.as_str()) {
                return Err(Error::DuplicateIdentifier {
                    identifier: record.identifier.clone(),
                });
            }
        }
        Ok(Self { records })
    }

    /// Iterate records in display order
    pub fn iter(&self) -> impl Iterator<Item = &LanguageRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[LanguageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by identifier
    pub fn get(&self, identifier: &str) -> Option<&LanguageRecord> {
        self.records.iter().find(|r| r.identifier == identifier)
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self {
            records: DEFAULT_LANGUAGES
                .iter()
                .map(|(id, label, gradient)| LanguageRecord::new(*id, *label, *gradient))
                .collect(),
        }
    }
}
