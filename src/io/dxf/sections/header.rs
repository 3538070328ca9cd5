//! HEADER section

use super::section_body;
use crate::drawing::Drawing;
use crate::error::Result;
use crate::io::dxf::reader::DxfReaderConfiguration;
use crate::io::dxf::tags::{TagGroups, Tags};

/// Read header variables as `$NAME` → value; a point variable is one
/// merged point tag
pub(crate) fn build(drawing: &mut Drawing, chunk: Tags, _config: &DxfReaderConfiguration) -> Result<()> {
    for group in TagGroups::new(section_body(chunk), 9) {
        let mut tags = group.into_iter();
        let (Some(name), Some(value)) = (tags.next(), tags.next()) else {
            continue;
        };
        drawing.header.set(name.string(), value.value);
    }
    drawing.version = drawing.header.version();
    drawing.encoding = drawing.header.encoding().to_string();
    log::debug!("header: {} variables, {} / {}", drawing.header.len(), drawing.version, drawing.encoding);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::{Tag, TagValue};
    use crate::types::{DxfVersion, Vector3};

    #[test]
    fn test_build_header() {
        let chunk = Tags::new(vec![
            Tag::text(0, "SECTION"),
            Tag::text(2, "HEADER"),
            Tag::text(9, "$ACADVER"),
            Tag::text(1, "AC1015"),
            Tag::text(9, "$DWGCODEPAGE"),
            Tag::text(3, "ANSI_1251"),
            Tag::text(9, "$INSBASE"),
            Tag::point(10, Vector3::new(1.0, 2.0, 3.0)),
            Tag::text(9, "$EMPTY"),
            Tag::text(0, "ENDSEC"),
        ]);
        let mut drawing = Drawing::new();
        build(&mut drawing, chunk, &DxfReaderConfiguration::default()).unwrap();

        assert_eq!(drawing.version, DxfVersion::AC1015);
        assert_eq!(drawing.encoding, "cp1251");
        assert_eq!(
            drawing.header.get("$INSBASE"),
            Some(&TagValue::Point3(Vector3::new(1.0, 2.0, 3.0)))
        );
        assert!(!drawing.header.contains("$EMPTY"));
        let names: Vec<&str> = drawing.header.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["$ACADVER", "$DWGCODEPAGE", "$INSBASE"]);
    }

    #[test]
    fn test_unicode_version_ignores_code_page() {
        let chunk = Tags::new(vec![
            Tag::text(0, "SECTION"),
            Tag::text(2, "HEADER"),
            Tag::text(9, "$ACADVER"),
            Tag::text(1, "AC1024"),
            Tag::text(9, "$DWGCODEPAGE"),
            Tag::text(3, "ANSI_1251"),
            Tag::text(0, "ENDSEC"),
        ]);
        let mut drawing = Drawing::new();
        build(&mut drawing, chunk, &DxfReaderConfiguration::default()).unwrap();
        assert_eq!(drawing.encoding, "utf-8");
    }
}
