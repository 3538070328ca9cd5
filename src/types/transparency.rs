//! Transparency representation for DXF entities

use std::fmt;

/// Entity transparency from group code 440
///
/// Stored as an alpha value where 0 is fully opaque and 255 fully
/// transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Transparency(u8);

impl Transparency {
    /// Fully opaque (0% transparent)
    pub const OPAQUE: Transparency = Transparency(0);

    /// Fully transparent (100% transparent)
    pub const TRANSPARENT: Transparency = Transparency(255);

    /// Create a new transparency from an alpha value (0-255)
    pub const fn new(alpha: u8) -> Self {
        Transparency(alpha)
    }

    /// Create transparency from the raw 32-bit value of group code 440
    ///
    /// The high byte holds the type:
    /// - 0 = BYLAYER
    /// - 1 = BYBLOCK
    /// - 2 = the low byte is the opacity (255 = opaque)
    pub fn from_dxf_value(value: i64) -> Self {
        let value = value as u32;
        match value >> 24 {
            2 => Transparency(255 - (value & 0xFF) as u8),
            _ => Transparency::OPAQUE,
        }
    }

    /// Get the raw alpha value (0-255)
    pub const fn alpha(&self) -> u8 {
        self.0
    }

    /// Get transparency as a fraction (0.0 = opaque, 1.0 = transparent)
    pub fn as_percent(&self) -> f64 {
        self.0 as f64 / 255.0
    }

    /// Check if fully opaque
    pub const fn is_opaque(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Transparency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.as_percent() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dxf_value() {
        // 0x020000FF: explicit, fully opaque
        assert_eq!(Transparency::from_dxf_value(0x020000FF), Transparency::OPAQUE);
        // 0x02000000: explicit, fully transparent
        assert_eq!(Transparency::from_dxf_value(0x02000000), Transparency::TRANSPARENT);
        // BYLAYER / BYBLOCK
        assert!(Transparency::from_dxf_value(0).is_opaque());
        assert!(Transparency::from_dxf_value(0x01000000).is_opaque());
    }

    #[test]
    fn test_transparency_display() {
        assert_eq!(Transparency::OPAQUE.to_string(), "0.0%");
        assert_eq!(Transparency::TRANSPARENT.to_string(), "100.0%");
    }
}
