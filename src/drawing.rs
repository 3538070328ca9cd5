//! Drawing structure, the result of reading a DXF stream

use crate::entities::{Block, EntityType};
use crate::error::{DxfError, Result};
use crate::io::dxf::{code_page, DxfReader, TagValue, Tags};
use crate::notification::NotificationCollection;
use crate::objects::{AcDsData, DxfObject};
use crate::tables::{Layer, Linetype, Table, TextStyle};
use crate::types::DxfVersion;
use indexmap::IndexMap;
use std::path::PathBuf;
use std::str::FromStr;

/// HEADER section variables, in file order
///
/// `$ACADVER` and `$DWGCODEPAGE` are always present: a file without HEADER
/// reads as an R12 drawing in code page `ANSI_1252`.
#[derive(Debug, Clone)]
pub struct Header {
    variables: IndexMap<String, TagValue>,
}

impl Header {
    /// Header holding only the `$ACADVER` and `$DWGCODEPAGE` defaults
    pub fn new() -> Self {
        let mut variables = IndexMap::new();
        variables.insert("$ACADVER".to_string(), TagValue::Text("AC1009".to_string()));
        variables.insert("$DWGCODEPAGE".to_string(), TagValue::Text("ANSI_1252".to_string()));
        Header { variables }
    }

    /// Value of a header variable, e.g. `"$INSBASE"`
    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.variables.get(name)
    }

    /// Set a header variable, replacing an earlier value
    pub fn set(&mut self, name: impl Into<String>, value: TagValue) {
        self.variables.insert(name.into(), value);
    }

    /// `true` if the variable is present
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// `true` if there are no variables
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterate over name/value pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// DXF version named by `$ACADVER`
    pub fn version(&self) -> DxfVersion {
        self.get("$ACADVER")
            .and_then(TagValue::as_str)
            .map(DxfVersion::from_version_string)
            .unwrap_or_default()
    }

    /// Code page named by `$DWGCODEPAGE`
    pub fn code_page(&self) -> Option<&str> {
        self.get("$DWGCODEPAGE").and_then(TagValue::as_str)
    }

    /// Codec name the rest of the file is written in
    pub fn encoding(&self) -> &'static str {
        if self.version().is_unicode() {
            code_page::UTF8_ENCODING
        } else {
            code_page::encoding_name(self.code_page())
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<&str> for Header {
    type Output = TagValue;

    fn index(&self, name: &str) -> &TagValue {
        &self.variables[name]
    }
}

/// A DXF drawing
#[derive(Debug, Clone)]
pub struct Drawing {
    /// HEADER variables
    pub header: Header,
    /// LAYER table
    pub layers: Table<Layer>,
    /// STYLE table
    pub styles: Table<TextStyle>,
    /// LTYPE table
    pub linetypes: Table<Linetype>,
    /// Block definitions by name, in file order
    pub blocks: IndexMap<String, Block>,
    /// ENTITIES section content in file order
    pub entities: Vec<EntityType>,
    /// OBJECTS section content in file order
    pub objects: Vec<DxfObject>,
    /// ACDSDATA section content, if the file has one
    pub acdsdata: Option<AcDsData>,
    /// Sections without a typed model, kept as read
    pub raw_sections: IndexMap<String, Tags>,
    /// Non-fatal issues met while reading
    pub notifications: NotificationCollection,
    /// DXF version from the header
    pub version: DxfVersion,
    /// Codec name the text was decoded with
    ///
    /// For a file this is what [`Header::encoding`] derives from the
    /// header. A stream without `$DWGCODEPAGE` stays `"utf-8"`, the stream
    /// default, while the pre-seeded header still names `cp1252`.
    pub encoding: String,
    /// Path of the file, when read from one
    pub filename: Option<PathBuf>,
    sections: Vec<String>,
}

impl Drawing {
    /// Create an empty drawing
    pub fn new() -> Self {
        Drawing {
            header: Header::new(),
            layers: Table::new(),
            styles: Table::new(),
            linetypes: Table::new(),
            blocks: IndexMap::new(),
            entities: Vec::new(),
            objects: Vec::new(),
            acdsdata: None,
            raw_sections: IndexMap::new(),
            notifications: NotificationCollection::new(),
            version: DxfVersion::AC1009,
            encoding: code_page::DEFAULT_ENCODING.to_string(),
            filename: None,
            sections: Vec::new(),
        }
    }

    /// Names of the sections read into typed models, in file order
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(String::as_str)
    }

    /// Block definition by name
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.get(name)
    }

    /// Entities in model space
    pub fn modelspace(&self) -> impl Iterator<Item = &EntityType> {
        self.entities.iter().filter(|e| !e.is_paperspace())
    }

    /// Entities in paper space
    pub fn paperspace(&self) -> impl Iterator<Item = &EntityType> {
        self.entities.iter().filter(|e| e.is_paperspace())
    }

    pub(crate) fn add_section(&mut self, name: impl Into<String>) {
        self.sections.push(name.into());
    }

    /// Every entity, top level and inside block definitions
    fn all_entities_mut(&mut self) -> impl Iterator<Item = &mut EntityType> {
        self.entities
            .iter_mut()
            .chain(self.blocks.values_mut().flat_map(|block| block.entities.iter_mut()))
    }

    /// Hand the ACDSDATA binary ACIS data to the modeler entities
    ///
    /// Only AC1027+ drawings store the data there; entities whose handle has
    /// no record keep `sab` unset.
    pub(crate) fn attach_sab_data(&mut self) {
        if self.version < DxfVersion::AC1027 {
            return;
        }
        let Some(acdsdata) = self.acdsdata.take() else {
            return;
        };
        for entity in self.all_entities_mut() {
            let handle = entity.handle();
            if let (Some(geometry), Some(data)) = (entity.modeler_geometry_mut(), acdsdata.get(handle)) {
                geometry.sab = Some(data.to_vec());
            }
        }
        self.acdsdata = Some(acdsdata);
    }

    /// Fill unset text properties from the STYLE table
    pub(crate) fn resolve_text_styles(&mut self) {
        let styles = std::mem::take(&mut self.styles);
        for entity in self.all_entities_mut() {
            entity.resolve_text_style(&styles);
        }
        self.styles = styles;
    }
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Drawing {
    type Err = DxfError;

    /// Read a drawing from DXF text
    fn from_str(text: &str) -> Result<Self> {
        DxfReader::from_reader(std::io::Cursor::new(text.as_bytes().to_vec())).read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Body, BodyKind, Line, Text};
    use crate::types::Handle;

    #[test]
    fn test_header_defaults() {
        let header = Header::new();
        assert_eq!(header.version(), DxfVersion::AC1009);
        assert_eq!(header.code_page(), Some("ANSI_1252"));
        assert_eq!(header.encoding(), "cp1252");
        assert_eq!(header.len(), 2);
    }

    #[test]
    fn test_header_encoding_follows_version() {
        let mut header = Header::new();
        header.set("$DWGCODEPAGE", TagValue::Text("ANSI_1251".into()));
        assert_eq!(header.encoding(), "cp1251");
        header.set("$ACADVER", TagValue::Text("AC1021".into()));
        assert_eq!(header.encoding(), "utf-8");
        assert_eq!(header["$ACADVER"], TagValue::Text("AC1021".into()));
    }

    #[test]
    fn test_space_filters() {
        let mut drawing = Drawing::new();
        let mut paper = Line::default();
        paper.common.paperspace = true;
        drawing.entities.push(EntityType::Line(Line::default()));
        drawing.entities.push(EntityType::Line(paper));
        assert_eq!(drawing.modelspace().count(), 1);
        assert_eq!(drawing.paperspace().count(), 1);
    }

    #[test]
    fn test_attach_sab_data() {
        let mut drawing = Drawing::new();
        drawing.version = DxfVersion::AC1027;
        let mut body = Body::new(BodyKind::Solid3D);
        body.common.handle = Handle::new(0x2B);
        drawing.entities.push(EntityType::Body(body));
        let mut acdsdata = AcDsData::default();
        acdsdata.sab.insert(Handle::new(0x2B), b"ACIS".to_vec());
        drawing.acdsdata = Some(acdsdata);

        drawing.attach_sab_data();
        let geometry = drawing.entities[0].modeler_geometry().unwrap();
        assert_eq!(geometry.sab.as_deref(), Some(&b"ACIS"[..]));
        assert!(drawing.acdsdata.is_some());
    }

    #[test]
    fn test_attach_sab_data_needs_ac1027() {
        let mut drawing = Drawing::new();
        drawing.version = DxfVersion::AC1024;
        let mut body = Body::default();
        body.common.handle = Handle::new(1);
        drawing.entities.push(EntityType::Body(body));
        let mut acdsdata = AcDsData::default();
        acdsdata.sab.insert(Handle::new(1), vec![1, 2, 3]);
        drawing.acdsdata = Some(acdsdata);

        drawing.attach_sab_data();
        assert!(drawing.entities[0].modeler_geometry().unwrap().sab.is_none());
    }

    #[test]
    fn test_resolve_text_styles_in_blocks() {
        let mut drawing = Drawing::new();
        let mut style = TextStyle::new("NARROW");
        style.width_factor = 0.7;
        drawing.styles.insert(style);
        let mut text = Text::new();
        text.style = "narrow".into();
        let mut block = Block {
            name: "TITLE".into(),
            ..Block::default()
        };
        block.entities.push(EntityType::Text(text));
        drawing.blocks.insert(block.name.clone(), block);

        drawing.resolve_text_styles();
        let Some(EntityType::Text(text)) = drawing.blocks["TITLE"].entities.first() else {
            panic!("expected TEXT");
        };
        assert_eq!(text.width_factor, 0.7);
        assert_eq!(drawing.styles.len(), 1);
    }
}
