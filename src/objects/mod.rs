//! Non-graphical objects (OBJECTS and ACDSDATA sections)
//!
//! Objects are kept generic: their type, handle, owner and the classified
//! tags, without a typed model per object kind.

mod acdsdata;

pub use acdsdata::{AcDsData, AcDsRecord};

use crate::io::dxf::{ClassifiedTags, Tags};
use crate::types::Handle;

/// An object of the OBJECTS section
#[derive(Debug, Clone)]
pub struct DxfObject {
    /// Object type name (0)
    pub dxftype: String,
    /// Unique handle (5)
    pub handle: Handle,
    /// Owner handle (330)
    pub owner: Handle,
    /// All tags of the record, partitioned
    pub tags: ClassifiedTags,
}

impl DxfObject {
    /// Build an object from its record
    pub fn from_tags(tags: Tags) -> crate::Result<Self> {
        let tags = ClassifiedTags::new(tags)?;
        let dxftype = tags.dxftype().unwrap_or_default().to_string();
        let handle = tags.handle().unwrap_or_default();
        let owner = tags
            .noclass()
            .find_first(330)
            .and_then(|tag| tag.handle())
            .unwrap_or_default();
        Ok(DxfObject {
            dxftype,
            handle,
            owner,
            tags,
        })
    }

    /// Tags of the named subclass
    pub fn get_subclass(&self, name: &str) -> Option<&Tags> {
        self.tags.get_subclass(name)
    }
}
