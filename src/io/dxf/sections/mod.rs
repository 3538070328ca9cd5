//! Section builders
//!
//! Each builder receives one whole section chunk, from `(0, "SECTION")` up
//! to and including `(0, "ENDSEC")`, and fills its part of the [`Drawing`].

mod acdsdata;
mod blocks;
mod entities;
mod header;
mod objects;
mod tables;

use super::reader::DxfReaderConfiguration;
use super::tag::Tag;
use super::tags::Tags;
use crate::drawing::Drawing;
use crate::error::{DxfError, Result};

/// Builds the model of one section from its chunk
pub(crate) type SectionBuilder = fn(&mut Drawing, Tags, &DxfReaderConfiguration) -> Result<()>;

/// Sections with a typed model, by name
const BUILDERS: &[(&str, SectionBuilder)] = &[
    ("HEADER", header::build),
    ("TABLES", tables::build),
    ("BLOCKS", blocks::build),
    ("ENTITIES", entities::build),
    ("OBJECTS", objects::build),
    ("ACDSDATA", acdsdata::build),
];

/// Builder for a section name, `None` for sections kept raw
pub(crate) fn builder_for(name: &str) -> Option<SectionBuilder> {
    BUILDERS
        .iter()
        .find(|(section, _)| *section == name)
        .map(|(_, builder)| *builder)
}

/// Name of a section chunk
///
/// The chunk must start with `(0, "SECTION")` followed by `(2, name)`.
pub(crate) fn section_name(chunk: &Tags) -> Result<String> {
    let mut tags = chunk.iter();
    match tags.next() {
        Some(tag) if tag.is(0, "SECTION") => {}
        Some(tag) => {
            return Err(DxfError::structure_at(
                format!("expected (0, SECTION), found {tag}"),
                tag.line,
            ))
        }
        None => return Err(DxfError::structure("empty section")),
    }
    match tags.next() {
        Some(tag) if tag.code == 2 => Ok(tag.string()),
        Some(tag) => Err(DxfError::structure_at(
            format!("expected section name (2, ...), found {tag}"),
            tag.line,
        )),
        None => Err(DxfError::structure("section without name")),
    }
}

/// The section content without the SECTION/name head and ENDSEC
pub(crate) fn section_body(chunk: Tags) -> impl Iterator<Item = Tag> {
    let mut tags = chunk.into_vec();
    if tags.last().is_some_and(|tag| tag.is(0, "ENDSEC")) {
        tags.pop();
    }
    tags.into_iter().skip(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(tags: Vec<Tag>) -> Tags {
        Tags::new(tags)
    }

    #[test]
    fn test_section_name() {
        let tags = chunk(vec![Tag::text(0, "SECTION"), Tag::text(2, "ENTITIES"), Tag::text(0, "ENDSEC")]);
        assert_eq!(section_name(&tags).unwrap(), "ENTITIES");
    }

    #[test]
    fn test_section_name_errors() {
        let missing_head = chunk(vec![Tag::text(0, "TABLE").at_line(3), Tag::text(2, "LAYER")]);
        let err = section_name(&missing_head).unwrap_err();
        assert_eq!(err.line(), Some(3));

        let missing_name = chunk(vec![Tag::text(0, "SECTION"), Tag::int(70, 1).at_line(4)]);
        assert_eq!(section_name(&missing_name).unwrap_err().line(), Some(4));
    }

    #[test]
    fn test_section_body() {
        let tags = chunk(vec![
            Tag::text(0, "SECTION"),
            Tag::text(2, "ENTITIES"),
            Tag::text(0, "LINE"),
            Tag::text(0, "ENDSEC"),
        ]);
        let body: Vec<Tag> = section_body(tags).collect();
        assert_eq!(body, vec![Tag::text(0, "LINE")]);
    }

    #[test]
    fn test_builder_table() {
        for name in ["HEADER", "TABLES", "BLOCKS", "ENTITIES", "OBJECTS", "ACDSDATA"] {
            assert!(builder_for(name).is_some(), "{name}");
        }
        assert!(builder_for("CLASSES").is_none());
        assert!(builder_for("THUMBNAILIMAGE").is_none());
    }
}
