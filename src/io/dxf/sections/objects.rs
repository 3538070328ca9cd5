//! OBJECTS section

use super::section_body;
use crate::drawing::Drawing;
use crate::error::Result;
use crate::io::dxf::reader::DxfReaderConfiguration;
use crate::io::dxf::tags::{TagGroups, Tags};
use crate::objects::DxfObject;

pub(crate) fn build(drawing: &mut Drawing, chunk: Tags, _config: &DxfReaderConfiguration) -> Result<()> {
    for group in TagGroups::new(section_body(chunk), 0) {
        drawing.objects.push(DxfObject::from_tags(group)?);
    }
    Ok(())
}
