//! Line weight representation for DXF entities

use std::fmt;

/// Line weight from group code 370
///
/// Line weights are specified in 1/100 mm or are one of the special values
/// ByLayer (-1), ByBlock (-2) or Default (-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LineWeight {
    /// Use the layer's line weight
    #[default]
    ByLayer,
    /// Use the block's line weight
    ByBlock,
    /// Default line weight
    Default,
    /// Specific line weight in 1/100 mm
    Value(i16),
}

impl LineWeight {
    /// Create a line weight from a raw value
    pub fn from_value(value: i64) -> Self {
        match value {
            -1 => LineWeight::ByLayer,
            -2 => LineWeight::ByBlock,
            -3 => LineWeight::Default,
            v => LineWeight::Value(v.clamp(i16::MIN as i64, i16::MAX as i64) as i16),
        }
    }

    /// Get the raw value
    pub fn value(&self) -> i16 {
        match self {
            LineWeight::ByLayer => -1,
            LineWeight::ByBlock => -2,
            LineWeight::Default => -3,
            LineWeight::Value(v) => *v,
        }
    }

    /// Get the line weight in millimeters
    pub fn millimeters(&self) -> Option<f64> {
        match self {
            LineWeight::Value(v) => Some(*v as f64 / 100.0),
            _ => None,
        }
    }
}

impl fmt::Display for LineWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineWeight::ByLayer => write!(f, "ByLayer"),
            LineWeight::ByBlock => write!(f, "ByBlock"),
            LineWeight::Default => write!(f, "Default"),
            LineWeight::Value(v) => write!(f, "{:.2}mm", *v as f64 / 100.0),
        }
    }
}
