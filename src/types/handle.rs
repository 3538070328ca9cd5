//! Handle type for DXF records
//!
//! Handles are hexadecimal identifiers written in group code 5 (and 105 for
//! DIMSTYLE), referenced by owner (330) and pointer (3xx) codes.

use std::fmt;

/// A unique identifier for DXF records
///
/// Handle 0 is reserved and means "no handle".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Handle(u64);

impl Handle {
    /// The null/invalid handle (0)
    pub const NULL: Handle = Handle(0);

    /// Create a new handle from a u64 value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Handle(value)
    }

    /// Parse a hexadecimal handle string as written in DXF files
    pub fn parse(text: &str) -> Option<Self> {
        u64::from_str_radix(text.trim(), 16).ok().map(Handle)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is a null/invalid handle
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle(value)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}
