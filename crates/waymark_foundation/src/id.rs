//! Checksum-derived identifiers for areas and locations.

use std::fmt;

/// Identifier of an area or location.
///
/// Ids are a pure function of the label text, see [`identifier`]. The value
/// always fits in 31 bits so it survives storage in signed 32-bit columns.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Id(u64);

impl Id {
    /// Wraps a raw id value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.0)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Id> for u64 {
    fn from(id: Id) -> Self {
        id.0
    }
}

/// Derives the id of a label.
///
/// Takes the CRC-32 of the label's bytes, its absolute value (the checksum is
/// unsigned, so this is the identity) and halves it. Distinct labels may
/// collide; nothing here detects that.
#[must_use]
pub fn identifier(label: &str) -> Id {
    let checksum = crc32fast::hash(label.as_bytes());
    Id(u64::from(checksum) / 2)
}
