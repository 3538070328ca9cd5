//! Insert entity (block reference)

use super::binding::{bind_common, Bind, Pass};
use super::{Attrib, Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::types::Vector3;

/// A block reference, optionally repeated in a rectangular array
#[derive(Debug, Clone)]
pub struct Insert {
    /// Common entity data
    pub common: EntityCommon,
    /// Name of the referenced block (2)
    pub name: String,
    /// Insertion point (10)
    pub insertion_point: Vector3,
    /// Scale factors (41, 42, 43)
    pub scale: Vector3,
    /// Rotation angle in degrees (50)
    pub rotation: f64,
    /// Array column count (70)
    pub column_count: i64,
    /// Array row count (71)
    pub row_count: i64,
    /// Array column spacing (44)
    pub column_spacing: f64,
    /// Array row spacing (45)
    pub row_spacing: f64,
    /// An ATTRIB sequence follows this record (66)
    pub attribs_follow: bool,
    /// Attributes, in file order
    pub attribs: Vec<Attrib>,
}

impl Insert {
    /// First attribute with the given tag
    pub fn find_attrib(&self, tag: &str) -> Option<&Attrib> {
        self.attribs.iter().find(|a| a.tag == tag)
    }

    /// `true` for an array insert
    pub fn is_array(&self) -> bool {
        self.column_count > 1 || self.row_count > 1
    }

    fn bind_fields(&mut self, tag: &Tag) -> bool {
        match tag.code {
            2 => self.name = tag.string(),
            10 => self.insertion_point = tag.point3().unwrap_or_default(),
            41 => self.scale.x = tag.f64().unwrap_or(1.0),
            42 => self.scale.y = tag.f64().unwrap_or(1.0),
            43 => self.scale.z = tag.f64().unwrap_or(1.0),
            50 => self.rotation = tag.f64().unwrap_or(0.0),
            70 => self.column_count = tag.i64().unwrap_or(1),
            71 => self.row_count = tag.i64().unwrap_or(1),
            44 => self.column_spacing = tag.f64().unwrap_or(0.0),
            45 => self.row_spacing = tag.f64().unwrap_or(0.0),
            66 => self.attribs_follow = tag.bool().unwrap_or(false),
            _ => return false,
        }
        true
    }
}

impl Default for Insert {
    fn default() -> Self {
        Insert {
            common: EntityCommon::new(),
            name: String::new(),
            insertion_point: Vector3::ZERO,
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: 0.0,
            column_count: 1,
            row_count: 1,
            column_spacing: 0.0,
            row_spacing: 0.0,
            attribs_follow: false,
            attribs: Vec::new(),
        }
    }
}

impl Entity for Insert {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "INSERT"
    }
}

impl Bind for Insert {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::binding::bind;
    use crate::io::dxf::ClassifiedTags;

    #[test]
    fn test_bind_insert() {
        let record = ClassifiedTags::new(vec![
            Tag::text(0, "INSERT"),
            Tag::int(66, 1),
            Tag::text(2, "DOOR"),
            Tag::point(10, Vector3::new(5.0, 5.0, 0.0)),
            Tag::float(42, 2.0),
        ])
        .unwrap();
        let insert: Insert = bind(record);
        assert_eq!(insert.name, "DOOR");
        assert!(insert.attribs_follow);
        assert_eq!(insert.scale, Vector3::new(1.0, 2.0, 1.0));
        assert!(!insert.is_array());
    }

    #[test]
    fn test_find_attrib() {
        let mut insert = Insert::default();
        let mut attrib = Attrib::default();
        attrib.tag = "NUMBER".into();
        attrib.text.value = "7".into();
        insert.attribs.push(attrib);
        assert_eq!(insert.find_attrib("NUMBER").map(Attrib::value), Some("7"));
        assert!(insert.find_attrib("MISSING").is_none());
    }
}
