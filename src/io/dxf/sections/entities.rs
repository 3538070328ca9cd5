//! ENTITIES section

use super::section_body;
use crate::drawing::Drawing;
use crate::entities::factory::EntityCollector;
use crate::error::Result;
use crate::io::dxf::reader::DxfReaderConfiguration;
use crate::io::dxf::tags::{TagGroups, Tags};

pub(crate) fn build(drawing: &mut Drawing, chunk: Tags, _config: &DxfReaderConfiguration) -> Result<()> {
    let mut collector = EntityCollector::new();
    for group in TagGroups::new(section_body(chunk), 0) {
        collector.push_tags(group)?;
    }
    let entities = collector.finish(&mut drawing.notifications);
    log::debug!("entities: {} records", entities.len());
    drawing.entities.extend(entities);
    Ok(())
}
