//! Color representation for DXF entities

use std::fmt;

/// Represents an entity or layer color
///
/// Colors can be represented in multiple ways:
/// - By index (1-255): AutoCAD Color Index (ACI), group code 62
/// - By RGB values: true color, group code 420
/// - By layer (256) or by block (0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (index 256)
    #[default]
    ByLayer,
    /// Color by block (index 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
    /// True color with RGB values
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create a color from an AutoCAD Color Index
    ///
    /// Negative indices (a switched-off layer) map to their absolute value.
    pub fn from_index(index: i64) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            _ if index < 0 => Color::Index(index.unsigned_abs().min(255) as u8),
            _ => Color::ByLayer,
        }
    }

    /// Create a true color from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create a true color from the packed 0x00RRGGBB value of group code 420
    pub const fn from_true_color(value: i64) -> Self {
        Color::Rgb {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Get the color index (if applicable)
    pub fn index(&self) -> Option<u16> {
        match self {
            Color::ByBlock => Some(0),
            Color::Index(i) => Some(*i as u16),
            Color::ByLayer => Some(256),
            Color::Rgb { .. } => None,
        }
    }

    /// Get RGB values (if applicable)
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Rgb { r, g, b } => Some((*r, *g, *b)),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
            Color::Rgb { r, g, b } => write!(f, "RGB({}, {}, {})", r, g, b),
        }
    }
}
