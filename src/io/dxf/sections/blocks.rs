//! BLOCKS section

use super::section_body;
use crate::drawing::Drawing;
use crate::entities::binding::bind;
use crate::entities::factory::EntityCollector;
use crate::entities::Block;
use crate::error::Result;
use crate::io::dxf::reader::DxfReaderConfiguration;
use crate::io::dxf::tags::{ClassifiedTags, TagGroups, Tags};
use crate::notification::{NotificationCollection, NotificationType};

/// Read BLOCK ... ENDBLK definitions with their entities
pub(crate) fn build(drawing: &mut Drawing, chunk: Tags, config: &DxfReaderConfiguration) -> Result<()> {
    if !config.grab_blocks {
        log::debug!("skipping block definitions");
        return Ok(());
    }
    let mut current: Option<(Block, EntityCollector)> = None;
    for group in TagGroups::new(section_body(chunk), 0) {
        let line = group.line();
        match group.dxftype() {
            Some("BLOCK") => {
                if let Some((block, collector)) = current.take() {
                    let message = format!("block {:?} not closed by ENDBLK", block.name);
                    warn(&mut drawing.notifications, message, line);
                    close_block(drawing, block, collector, line);
                }
                let block: Block = bind(ClassifiedTags::new(group)?);
                current = Some((block, EntityCollector::new()));
            }
            Some("ENDBLK") => match current.take() {
                Some((block, collector)) => close_block(drawing, block, collector, line),
                None => warn(&mut drawing.notifications, "dropped ENDBLK outside of a block".to_string(), line),
            },
            _ => match current.as_mut() {
                Some((_, collector)) => collector.push_tags(group)?,
                None => {
                    let message = format!("dropped {} outside of a block", group.dxftype().unwrap_or_default());
                    warn(&mut drawing.notifications, message, line);
                }
            },
        }
    }
    if let Some((block, collector)) = current {
        warn(&mut drawing.notifications, format!("block {:?} not closed by ENDBLK", block.name), 0);
        close_block(drawing, block, collector, 0);
    }
    Ok(())
}

fn close_block(drawing: &mut Drawing, mut block: Block, collector: EntityCollector, line: usize) {
    block.entities = collector.finish(&mut drawing.notifications);
    if let Some(previous) = drawing.blocks.insert(block.name.clone(), block) {
        warn(&mut drawing.notifications, format!("duplicate block {:?} replaced", previous.name), line);
    }
}

fn warn(notifications: &mut NotificationCollection, message: String, line: usize) {
    log::warn!("{message}");
    notifications.notify_at(NotificationType::Warning, message, line);
}
