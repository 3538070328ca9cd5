//! Line type table entry

use super::TableEntry;
use crate::io::dxf::Tags;
use crate::types::Handle;

/// A line type table entry
///
/// The dash pattern holds one length per element: positive is a dash,
/// negative a gap and zero a dot. Embedded shapes and text are not read.
#[derive(Debug, Clone)]
pub struct Linetype {
    /// Unique handle (5)
    pub handle: Handle,
    /// Line type name (2)
    pub name: String,
    /// Description (3)
    pub description: String,
    /// Total pattern length (40)
    pub length: f64,
    /// Dash, gap and dot lengths (49)
    pub pattern: Vec<f64>,
}

impl Linetype {
    /// Create a new, solid line type
    pub fn new(name: impl Into<String>) -> Self {
        Linetype {
            handle: Handle::NULL,
            name: name.into(),
            description: String::new(),
            length: 0.0,
            pattern: Vec::new(),
        }
    }

    /// `true` for a continuous line without pattern
    pub fn is_continuous(&self) -> bool {
        self.pattern.is_empty()
    }
}

impl TableEntry for Linetype {
    const TABLE_NAME: &'static str = "LTYPE";

    fn from_tags(tags: &Tags) -> Self {
        let mut linetype = Linetype::new("");
        for tag in tags {
            match tag.code {
                5 | 105 => linetype.handle = tag.handle().unwrap_or_default(),
                2 => linetype.name = tag.string(),
                3 => linetype.description = tag.string(),
                40 => linetype.length = tag.f64().unwrap_or(0.0),
                49 => linetype.pattern.push(tag.f64().unwrap_or(0.0)),
                _ => {}
            }
        }
        linetype
    }

    fn handle(&self) -> Handle {
        self.handle
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::Tag;

    #[test]
    fn test_linetype_from_tags() {
        let linetype = Linetype::from_tags(&Tags::new(vec![
            Tag::text(0, "LTYPE"),
            Tag::text(2, "DASHDOT"),
            Tag::text(3, "Dash dot __ . __ . __"),
            Tag::int(72, 65),
            Tag::int(73, 4),
            Tag::float(40, 1.4),
            Tag::float(49, 1.0),
            Tag::float(49, -0.2),
            Tag::float(49, 0.0),
            Tag::float(49, -0.2),
        ]));
        assert_eq!(linetype.name, "DASHDOT");
        assert_eq!(linetype.length, 1.4);
        assert_eq!(linetype.pattern, vec![1.0, -0.2, 0.0, -0.2]);
        assert!(!linetype.is_continuous());
    }
}
