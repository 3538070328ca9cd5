//! Typed DXF tags

use crate::types::{Handle, Vector2, Vector3};
use std::fmt;

/// Typed value of a DXF tag
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// Text value
    Text(String),
    /// Floating-point value
    Float(f64),
    /// Integer value (all integer widths and booleans)
    Integer(i64),
    /// Point without Z axis
    Point2(Vector2),
    /// Point with Z axis
    Point3(Vector3),
}

impl TagValue {
    /// Text content, `None` for non-text values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value as float (integers are widened)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TagValue::Float(v) => Some(*v),
            TagValue::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Numeric value as integer (floats are truncated)
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TagValue::Integer(v) => Some(*v),
            TagValue::Float(v) if v.is_finite() => Some(*v as i64),
            _ => None,
        }
    }

    /// Integer value as boolean (non-zero is `true`)
    pub fn as_bool(&self) -> Option<bool> {
        self.as_i64().map(|v| v != 0)
    }

    /// Point value; 2D points get Z = 0
    pub fn as_point(&self) -> Option<Vector3> {
        match self {
            TagValue::Point2(p) => Some(Vector3::from(*p)),
            TagValue::Point3(p) => Some(*p),
            _ => None,
        }
    }

    /// Point value projected onto the XY plane
    pub fn as_point2(&self) -> Option<Vector2> {
        match self {
            TagValue::Point2(p) => Some(*p),
            TagValue::Point3(p) => Some(p.xy()),
            _ => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Text(s) => f.write_str(s),
            TagValue::Float(v) => write!(f, "{v}"),
            TagValue::Integer(v) => write!(f, "{v}"),
            TagValue::Point2(p) => write!(f, "{p}"),
            TagValue::Point3(p) => write!(f, "{p}"),
        }
    }
}

/// A group code with its typed value
///
/// `line` is the 1-based line number of the group code in the source, or 0
/// for tags built in memory. It does not take part in equality.
#[derive(Debug, Clone)]
pub struct Tag {
    /// DXF group code
    pub code: i32,
    /// Typed value
    pub value: TagValue,
    /// Source line of the group code
    pub line: usize,
}

impl Tag {
    /// Create a tag without source position
    pub fn new(code: i32, value: TagValue) -> Self {
        Self { code, value, line: 0 }
    }

    /// Create a text tag
    pub fn text(code: i32, value: impl Into<String>) -> Self {
        Self::new(code, TagValue::Text(value.into()))
    }

    /// Create a float tag
    pub fn float(code: i32, value: f64) -> Self {
        Self::new(code, TagValue::Float(value))
    }

    /// Create an integer tag
    pub fn int(code: i32, value: i64) -> Self {
        Self::new(code, TagValue::Integer(value))
    }

    /// Create a 3D point tag
    pub fn point(code: i32, point: Vector3) -> Self {
        Self::new(code, TagValue::Point3(point))
    }

    /// Attach a source line number
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// `true` if this tag has the given code and text value
    pub fn is(&self, code: i32, value: &str) -> bool {
        self.code == code && self.value.as_str() == Some(value)
    }

    /// Text value, or "" for non-text tags
    pub fn str(&self) -> &str {
        self.value.as_str().unwrap_or("")
    }

    /// Owned text value, numbers are formatted
    pub fn string(&self) -> String {
        self.value.to_string()
    }

    /// See [`TagValue::as_f64`]
    pub fn f64(&self) -> Option<f64> {
        self.value.as_f64()
    }

    /// See [`TagValue::as_i64`]
    pub fn i64(&self) -> Option<i64> {
        self.value.as_i64()
    }

    /// See [`TagValue::as_bool`]
    pub fn bool(&self) -> Option<bool> {
        self.value.as_bool()
    }

    /// See [`TagValue::as_point`]
    pub fn point3(&self) -> Option<Vector3> {
        self.value.as_point()
    }

    /// See [`TagValue::as_point2`]
    pub fn point2(&self) -> Option<Vector2> {
        self.value.as_point2()
    }

    /// Hex handle value
    pub fn handle(&self) -> Option<Handle> {
        self.value.as_str().and_then(Handle::parse)
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.value == other.value
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.code, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_line() {
        assert_eq!(Tag::text(0, "LINE").at_line(7), Tag::text(0, "LINE"));
        assert_ne!(Tag::text(0, "LINE"), Tag::text(0, "ARC"));
    }

    #[test]
    fn test_numeric_accessors() {
        assert_eq!(Tag::int(70, 3).f64(), Some(3.0));
        assert_eq!(Tag::float(40, 2.9).i64(), Some(2));
        assert_eq!(Tag::int(66, 1).bool(), Some(true));
        assert_eq!(Tag::text(1, "x").f64(), None);
    }

    #[test]
    fn test_point_accessors() {
        let p2 = Tag::new(10, TagValue::Point2(Vector2::new(1.0, 2.0)));
        assert_eq!(p2.point3(), Some(Vector3::new(1.0, 2.0, 0.0)));
        let p3 = Tag::point(10, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(p3.point2(), Some(Vector2::new(1.0, 2.0)));
    }

    #[test]
    fn test_handle() {
        assert_eq!(Tag::text(5, "1F").handle(), Some(Handle::new(0x1F)));
        assert_eq!(Tag::int(5, 1).handle(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tag::text(0, "LINE").to_string(), "(0, LINE)");
        assert_eq!(Tag::int(70, 1).to_string(), "(70, 1)");
    }
}
