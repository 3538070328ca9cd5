//! ACDSDATA section content: binary ACIS (SAB) data of modeler entities

use crate::io::dxf::{TagGroups, Tags};
use crate::types::Handle;
use ahash::AHashMap;
use indexmap::IndexMap;

/// One ACDSRECORD, split into its named sections (code 2)
#[derive(Debug, Clone, Default)]
pub struct AcDsRecord {
    /// Sections by name, in file order
    pub sections: IndexMap<String, Tags>,
}

impl AcDsRecord {
    /// Split a record run at its code-2 section names
    pub fn from_tags(tags: Tags) -> Self {
        let groups = TagGroups::new(tags, 2);
        let sections = groups
            .into_iter()
            .map(|section| {
                let name = section.dxftype().unwrap_or_default().to_string();
                (name, section)
            })
            .collect();
        AcDsRecord { sections }
    }

    /// Tags of the named section
    pub fn get_section(&self, name: &str) -> Option<&Tags> {
        self.sections.get(name)
    }

    /// Handle of the entity this record belongs to (`AcDbDs::ID`, code 320)
    pub fn entity_handle(&self) -> Option<Handle> {
        self.get_section("AcDbDs::ID")?.find_first(320)?.handle()
    }

    /// SAB bytes of the `ASM_Data` section, cut to the length in code 94
    pub fn sab_data(&self) -> Option<Vec<u8>> {
        let section = self.get_section("ASM_Data")?;
        let mut data: Vec<u8> = section.find_all(310).flat_map(|tag| decode_hex(tag.str())).collect();
        if let Some(length) = section.find_first(94).and_then(|tag| tag.i64()) {
            data.truncate(length.max(0) as usize);
        }
        Some(data)
    }
}

/// The ACDSDATA section, reduced to the entity handle → SAB map
#[derive(Debug, Clone, Default)]
pub struct AcDsData {
    /// SAB data by entity handle
    pub sab: AHashMap<Handle, Vec<u8>>,
}

impl AcDsData {
    /// Add a record; records other than ACDSRECORD, or without ACIS data, are ignored
    pub fn add_record(&mut self, tags: Tags) {
        if tags.dxftype() != Some("ACDSRECORD") {
            return;
        }
        let record = AcDsRecord::from_tags(tags);
        if let (Some(handle), Some(data)) = (record.entity_handle(), record.sab_data()) {
            self.sab.insert(handle, data);
        }
    }

    /// SAB data of the entity with `handle`
    pub fn get(&self, handle: Handle) -> Option<&[u8]> {
        self.sab.get(&handle).map(Vec::as_slice)
    }

    /// Number of entities with SAB data
    pub fn len(&self) -> usize {
        self.sab.len()
    }

    /// `true` if no SAB data was found
    pub fn is_empty(&self) -> bool {
        self.sab.is_empty()
    }
}

fn decode_hex(text: &str) -> impl Iterator<Item = u8> + '_ {
    (0..text.len())
        .step_by(2)
        .filter_map(move |i| text.get(i..(i + 2).min(text.len())))
        .filter_map(|pair| u8::from_str_radix(pair, 16).ok())
}
