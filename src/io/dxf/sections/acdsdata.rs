//! ACDSDATA section

use super::section_body;
use crate::drawing::Drawing;
use crate::error::Result;
use crate::io::dxf::reader::DxfReaderConfiguration;
use crate::io::dxf::tags::{TagGroups, Tags};
use crate::objects::AcDsData;

/// Collect the binary ACIS data of the ACDSRECORD records by entity handle
pub(crate) fn build(drawing: &mut Drawing, chunk: Tags, _config: &DxfReaderConfiguration) -> Result<()> {
    let mut acdsdata = AcDsData::default();
    for group in TagGroups::new(section_body(chunk), 0) {
        acdsdata.add_record(group);
    }
    log::debug!("acdsdata: {} entities with SAB data", acdsdata.len());
    drawing.acdsdata = Some(acdsdata);
    Ok(())
}
