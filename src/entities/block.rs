//! Block definition entities: BLOCK and ENDBLK

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon, EntityType};
use crate::io::dxf::Tag;
use crate::types::Vector3;
use bitflags::bitflags;

bitflags! {
    /// Block type flags (70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BlockFlags: i16 {
        /// Anonymous block, generated by hatching or dimensioning
        const ANONYMOUS = 1;
        /// Has non-constant attribute definitions
        const NON_CONSTANT_ATTRIBUTES = 2;
        /// External reference
        const XREF = 4;
        /// Overlaid external reference
        const XREF_OVERLAY = 8;
        /// Externally dependent
        const EXTERNAL = 16;
        /// Resolved external reference
        const RESOLVED = 32;
        /// Referenced external reference
        const REFERENCED = 64;
    }
}

/// A block definition with the entities it contains
///
/// Built from the BLOCK record; the entities between BLOCK and ENDBLK are
/// appended in file order.
#[derive(Debug, Clone, Default)]
pub struct Block {
    /// Common entity data of the BLOCK record
    pub common: EntityCommon,
    /// Block name (2, or 3 when 2 is missing)
    pub name: String,
    /// Base point (10)
    pub base_point: Vector3,
    /// Block type flags (70)
    pub flags: BlockFlags,
    /// External reference path (1)
    pub xref_path: String,
    /// Description (4)
    pub description: String,
    /// Block content in file order
    pub entities: Vec<EntityType>,
}

impl Block {
    /// `true` for anonymous blocks (`*U`, `*D`, ...)
    pub fn is_anonymous(&self) -> bool {
        self.flags.contains(BlockFlags::ANONYMOUS)
    }

    /// `true` if the block is an external reference
    pub fn is_xref(&self) -> bool {
        self.flags.intersects(BlockFlags::XREF | BlockFlags::XREF_OVERLAY)
    }

    /// `true` if the block has attribute definitions
    pub fn has_attributes(&self) -> bool {
        self.flags.contains(BlockFlags::NON_CONSTANT_ATTRIBUTES)
    }

    /// Number of entities in the block
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// `true` if the block contains no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over the block content
    pub fn iter(&self) -> std::slice::Iter<'_, EntityType> {
        self.entities.iter()
    }

    fn bind_fields(&mut self, tag: &Tag) -> bool {
        match tag.code {
            2 => self.name = tag.string(),
            3 => {
                if self.name.is_empty() {
                    self.name = tag.string();
                }
            }
            10 => self.base_point = tag.point3().unwrap_or_default(),
            70 => self.flags = BlockFlags::from_bits_truncate(tag.i64().unwrap_or(0) as i16),
            1 => self.xref_path = tag.string(),
            4 => self.description = tag.string(),
            _ => return false,
        }
        true
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a EntityType;
    type IntoIter = std::slice::Iter<'a, EntityType>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

impl Entity for Block {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "BLOCK"
    }
}

impl Bind for Block {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}

/// End of a block definition (ENDBLK)
#[derive(Debug, Clone, Default)]
pub struct BlockEnd {
    /// Common entity data
    pub common: EntityCommon,
}

impl Entity for BlockEnd {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "ENDBLK"
    }
}

impl Bind for BlockEnd {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common)];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::binding::bind;
    use crate::io::dxf::ClassifiedTags;

    #[test]
    fn test_bind_block() {
        let record = ClassifiedTags::new(vec![
            Tag::text(0, "BLOCK"),
            Tag::text(8, "0"),
            Tag::text(2, "DOOR"),
            Tag::int(70, 2),
            Tag::point(10, Vector3::new(1.0, 1.0, 0.0)),
            Tag::text(3, "DOOR"),
            Tag::text(1, ""),
            Tag::text(4, "A door"),
        ])
        .unwrap();
        let block: Block = bind(record);
        assert_eq!(block.name, "DOOR");
        assert_eq!(block.base_point, Vector3::new(1.0, 1.0, 0.0));
        assert!(block.has_attributes());
        assert!(!block.is_xref());
        assert_eq!(block.description, "A door");
        assert!(block.is_empty());
    }

    #[test]
    fn test_name_from_code_3() {
        let record = ClassifiedTags::new(vec![Tag::text(0, "BLOCK"), Tag::text(3, "*U1"), Tag::int(70, 1)]).unwrap();
        let block: Block = bind(record);
        assert_eq!(block.name, "*U1");
        assert!(block.is_anonymous());
    }
}
