//! DXF file version ($ACADVER)

use std::fmt;

/// DXF version as written in the `$ACADVER` header variable
///
/// Variants are ordered chronologically so versions compare with `<` / `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum DxfVersion {
    /// Version string not recognized
    Unknown,
    /// R12 (also the default for header-less files)
    #[default]
    AC1009,
    /// R13
    AC1012,
    /// R14
    AC1014,
    /// AutoCAD 2000
    AC1015,
    /// AutoCAD 2004
    AC1018,
    /// AutoCAD 2007, first version written as UTF-8
    AC1021,
    /// AutoCAD 2010
    AC1024,
    /// AutoCAD 2013, first version storing ACIS data in ACDSDATA
    AC1027,
    /// AutoCAD 2018
    AC1032,
}

impl DxfVersion {
    /// Parse a `$ACADVER` value such as `"AC1015"`
    pub fn from_version_string(version: &str) -> Self {
        match version.trim().to_ascii_uppercase().as_str() {
            "AC1009" => DxfVersion::AC1009,
            "AC1012" => DxfVersion::AC1012,
            "AC1014" => DxfVersion::AC1014,
            "AC1015" => DxfVersion::AC1015,
            "AC1018" => DxfVersion::AC1018,
            "AC1021" => DxfVersion::AC1021,
            "AC1024" => DxfVersion::AC1024,
            "AC1027" => DxfVersion::AC1027,
            "AC1032" => DxfVersion::AC1032,
            _ => DxfVersion::Unknown,
        }
    }

    /// The `$ACADVER` string of this version
    pub fn as_str(&self) -> &'static str {
        match self {
            DxfVersion::Unknown => "UNKNOWN",
            DxfVersion::AC1009 => "AC1009",
            DxfVersion::AC1012 => "AC1012",
            DxfVersion::AC1014 => "AC1014",
            DxfVersion::AC1015 => "AC1015",
            DxfVersion::AC1018 => "AC1018",
            DxfVersion::AC1021 => "AC1021",
            DxfVersion::AC1024 => "AC1024",
            DxfVersion::AC1027 => "AC1027",
            DxfVersion::AC1032 => "AC1032",
        }
    }

    /// Files of this version are always UTF-8, whatever `$DWGCODEPAGE` says
    pub fn is_unicode(&self) -> bool {
        *self >= DxfVersion::AC1021
    }
}

impl fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(DxfVersion::from_version_string("AC1015"), DxfVersion::AC1015);
        assert_eq!(DxfVersion::from_version_string("ac1032"), DxfVersion::AC1032);
        assert_eq!(DxfVersion::from_version_string("R12"), DxfVersion::Unknown);
    }

    #[test]
    fn test_version_ordering() {
        assert!(DxfVersion::AC1009 < DxfVersion::AC1027);
        assert!(DxfVersion::AC1032 >= DxfVersion::AC1027);
        assert!(DxfVersion::AC1021.is_unicode());
        assert!(!DxfVersion::AC1018.is_unicode());
    }
}
