//! # Protocol Constants
//!
//! Version identifiers and header limits shared by every message type. These
//! values are part of the wire format and must stay stable for compatibility
//! with deployed JAUS 3.x components.

use std::fmt;

/// Largest body a single-packet message can carry (12-bit data size field)
pub const MAX_DATA_SIZE: usize = 4079;

/// Header size in bytes
pub const HEADER_SIZE: usize = 16;

/// JAUS protocol version as carried in the 6-bit header version field
///
/// Versions 3.2 and 3.3 share the same wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct JausVersion(u8);

impl JausVersion {
    /// JAUS RA 2.0 / 2.1
    pub const V2_0: Self = Self(0);
    /// JAUS RA 3.0 / 3.1
    pub const V3_0: Self = Self(1);
    /// JAUS RA 3.2 / 3.3
    pub const V3_3: Self = Self(2);
    /// JAUS RA 3.4
    pub const V3_4: Self = Self(3);
    /// Newest version this library speaks
    pub const MAX: Self = Self::V3_4;

    /// Wrap a raw header value (only the low 6 bits are representable)
    pub const fn new(raw: u8) -> Self {
        Self(raw & 0x3F)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    /// True when this library can encode and decode bodies for the version
    pub fn is_supported(self) -> bool {
        self <= Self::MAX
    }
}

impl fmt::Display for JausVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::V2_0 => write!(f, "2.0"),
            Self::V3_0 => write!(f, "3.0"),
            Self::V3_3 => write!(f, "3.3"),
            Self::V3_4 => write!(f, "3.4"),
            Self(raw) => write!(f, "unknown({raw})"),
        }
    }
}

impl From<JausVersion> for u8 {
    fn from(version: JausVersion) -> Self {
        version.0
    }
}
