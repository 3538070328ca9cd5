//! Group code → value type table
//!
//! The type of a DXF value is determined solely by its group code. The ranges
//! below follow the DXF reference; codes not listed are read as text.

/// Value type of a group code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupCodeValueType {
    /// Text, names, handles, hex-encoded binary chunks
    String,
    /// Double precision floating point
    Double,
    /// Any integer width (16/32/64 bit, byte, boolean)
    Integer,
    /// First axis of a point; the Y (and optional Z) axis follow in code+10
    /// and code+20
    Point,
}

impl GroupCodeValueType {
    /// Resolve the value type of a group code
    pub const fn from_code(code: i32) -> Self {
        if is_point_code(code) {
            return GroupCodeValueType::Point;
        }
        match code {
            0..=9 => GroupCodeValueType::String,
            10..=59 => GroupCodeValueType::Double,
            60..=99 => GroupCodeValueType::Integer,
            100..=109 => GroupCodeValueType::String,
            110..=149 => GroupCodeValueType::Double,
            160..=179 => GroupCodeValueType::Integer,
            210..=239 => GroupCodeValueType::Double,
            270..=299 => GroupCodeValueType::Integer,
            300..=369 => GroupCodeValueType::String,
            370..=389 => GroupCodeValueType::Integer,
            390..=399 => GroupCodeValueType::String,
            400..=409 => GroupCodeValueType::Integer,
            410..=419 => GroupCodeValueType::String,
            420..=429 => GroupCodeValueType::Integer,
            430..=439 => GroupCodeValueType::String,
            440..=459 => GroupCodeValueType::Integer,
            460..=469 => GroupCodeValueType::Double,
            470..=481 => GroupCodeValueType::String,
            999..=1009 => GroupCodeValueType::String,
            1010..=1059 => GroupCodeValueType::Double,
            1060..=1071 => GroupCodeValueType::Integer,
            _ => GroupCodeValueType::String,
        }
    }
}

/// Group codes that start a multi-tag point (X axis)
///
/// 10-18 are primary/secondary coordinates, 110-112 UCS origin and axes,
/// 210 the extrusion direction and 1010-1018 extended-data points.
pub const fn is_point_code(code: i32) -> bool {
    matches!(code, 10..=18 | 110..=112 | 210 | 1010..=1018)
}

/// Comment lines, skipped by the lexer
pub const COMMENT_CODE: i32 = 999;

/// Subclass marker (`AcDbEntity`, `AcDbCircle`, ...)
pub const SUBCLASS_MARKER: i32 = 100;

/// App-data brackets: `{APPID` ... `}`
pub const APP_DATA_MARKER: i32 = 102;

/// Start of an extended-data block (`1001 APPID`)
pub const XDATA_MARKER: i32 = 1001;
