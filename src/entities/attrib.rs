//! ATTRIB and ATTDEF entities

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon, Text};
use crate::io::dxf::Tag;
use bitflags::bitflags;

bitflags! {
    /// Attribute flags (70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AttributeFlags: i16 {
        /// Not displayed
        const INVISIBLE = 1;
        /// Value is constant
        const CONSTANT = 2;
        /// Verification required on input
        const VERIFY = 4;
        /// Value is preset, no prompt
        const PRESET = 8;
    }
}

/// A block attribute instance, attached to an INSERT
///
/// The text part is a full [`Text`]; its common data is the attribute's
/// common data.
#[derive(Debug, Clone, Default)]
pub struct Attrib {
    /// Text properties and common entity data
    pub text: Text,
    /// Attribute tag (2)
    pub tag: String,
    /// Attribute flags (70)
    pub flags: AttributeFlags,
    /// Field length (73)
    pub field_length: i64,
}

impl Attrib {
    /// Attribute value
    pub fn value(&self) -> &str {
        &self.text.value
    }

    /// `true` if the attribute is not displayed
    pub fn is_invisible(&self) -> bool {
        self.flags.contains(AttributeFlags::INVISIBLE)
    }

    /// TEXT fields; 73 is the field length here and 74 the vertical alignment
    fn bind_text(&mut self, tag: &Tag) -> bool {
        tag.code != 73 && self.text.bind_text(tag, 74)
    }

    fn bind_fields(&mut self, tag: &Tag) -> bool {
        match tag.code {
            2 => self.tag = tag.string(),
            70 => self.flags = AttributeFlags::from_bits_truncate(tag.i64().unwrap_or(0) as i16),
            73 => self.field_length = tag.i64().unwrap_or(0),
            _ => return false,
        }
        true
    }
}

impl Entity for Attrib {
    fn common(&self) -> &EntityCommon {
        &self.text.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.text.common
    }

    fn dxftype(&self) -> &'static str {
        "ATTRIB"
    }
}

impl Bind for Attrib {
    const PASSES: &'static [Pass<Self>] = &[
        Pass::new(bind_common),
        Pass::new(Self::bind_text),
        Pass::new(Self::bind_fields),
    ];

    fn finish(&mut self) {
        self.text.finish_text();
    }
}

/// A block attribute definition, found inside BLOCK definitions
#[derive(Debug, Clone, Default)]
pub struct AttDef {
    /// Attribute data; the text value is the default value
    pub attrib: Attrib,
    /// Prompt shown when inserting the block (3)
    pub prompt: String,
}

impl AttDef {
    /// Attribute tag
    pub fn tag(&self) -> &str {
        &self.attrib.tag
    }

    fn bind_text(&mut self, tag: &Tag) -> bool {
        self.attrib.bind_text(tag)
    }

    fn bind_attrib(&mut self, tag: &Tag) -> bool {
        self.attrib.bind_fields(tag)
    }

    fn bind_fields(&mut self, tag: &Tag) -> bool {
        match tag.code {
            3 => self.prompt = tag.string(),
            _ => return false,
        }
        true
    }
}

impl Entity for AttDef {
    fn common(&self) -> &EntityCommon {
        &self.attrib.text.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.attrib.text.common
    }

    fn dxftype(&self) -> &'static str {
        "ATTDEF"
    }
}

impl Bind for AttDef {
    const PASSES: &'static [Pass<Self>] = &[
        Pass::new(bind_common),
        Pass::new(Self::bind_text),
        Pass::new(Self::bind_attrib),
        Pass::new(Self::bind_fields),
    ];

    fn finish(&mut self) {
        self.attrib.text.finish_text();
    }
}
