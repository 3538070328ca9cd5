//! TABLES section

use super::section_body;
use crate::drawing::Drawing;
use crate::error::Result;
use crate::io::dxf::chunks::Chunks;
use crate::io::dxf::reader::DxfReaderConfiguration;
use crate::io::dxf::tag::Tag;
use crate::io::dxf::tags::{TagGroups, Tags};
use crate::notification::{NotificationCollection, NotificationType};
use crate::tables::{Layer, Linetype, Table, TableEntry, TextStyle};

/// Read the LAYER, STYLE and LTYPE tables; other tables are skipped
pub(crate) fn build(drawing: &mut Drawing, chunk: Tags, _config: &DxfReaderConfiguration) -> Result<()> {
    let mut tags = section_body(chunk).map(Ok);
    let table_chunks = Chunks::new(&mut tags, Tag::text(0, "ENDTAB"), Tag::text(0, "ENDSEC"));
    for table_chunk in table_chunks {
        let mut groups = TagGroups::new(table_chunk?, 0)
            .into_iter()
            .filter(|group| group.dxftype() != Some("ENDTAB"));
        let Some(head) = groups.next() else {
            continue;
        };
        let name = head.get_value(2).map(ToString::to_string).unwrap_or_default();
        let handle = head.handle().unwrap_or_default();
        match name.as_str() {
            Layer::TABLE_NAME => {
                drawing.layers = build_table(handle, groups, &mut drawing.notifications);
            }
            TextStyle::TABLE_NAME => {
                drawing.styles = build_table(handle, groups, &mut drawing.notifications);
            }
            Linetype::TABLE_NAME => {
                drawing.linetypes = build_table(handle, groups, &mut drawing.notifications);
            }
            _ => log::debug!("skipping table {name:?}"),
        }
    }
    Ok(())
}

fn build_table<T: TableEntry>(
    handle: crate::types::Handle,
    entries: impl Iterator<Item = Tags>,
    notifications: &mut NotificationCollection,
) -> Table<T> {
    let mut table = Table::with_handle(handle);
    for tags in entries {
        let line = tags.line();
        let entry = T::from_tags(&tags.plain_tags());
        if let Some(previous) = table.insert(entry) {
            let message = format!("duplicate {} entry {:?} replaced", T::TABLE_NAME, previous.name());
            log::warn!("{message}");
            notifications.notify_at(NotificationType::Warning, message, line);
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Handle};

    fn tables_chunk() -> Tags {
        Tags::new(vec![
            Tag::text(0, "SECTION"),
            Tag::text(2, "TABLES"),
            Tag::text(0, "TABLE"),
            Tag::text(2, "VPORT"),
            Tag::text(0, "VPORT"),
            Tag::text(2, "*ACTIVE"),
            Tag::text(0, "ENDTAB"),
            Tag::text(0, "TABLE"),
            Tag::text(2, "LAYER"),
            Tag::text(5, "2"),
            Tag::int(70, 2),
            Tag::text(0, "LAYER"),
            Tag::text(2, "0"),
            Tag::int(62, 7),
            Tag::text(0, "LAYER"),
            Tag::text(2, "Walls"),
            Tag::text(102, "{ACAD_XDICTIONARY"),
            Tag::text(360, "1A"),
            Tag::text(102, "}"),
            Tag::int(62, -1),
            Tag::text(1001, "APP"),
            Tag::text(1000, "ignored"),
            Tag::text(0, "ENDTAB"),
            Tag::text(0, "TABLE"),
            Tag::text(2, "LTYPE"),
            Tag::text(0, "LTYPE"),
            Tag::text(2, "DASHED"),
            Tag::float(40, 0.75),
            Tag::float(49, 0.5),
            Tag::float(49, -0.25),
            Tag::text(0, "ENDTAB"),
            Tag::text(0, "ENDSEC"),
        ])
    }

    #[test]
    fn test_build_tables() {
        let mut drawing = Drawing::new();
        build(&mut drawing, tables_chunk(), &DxfReaderConfiguration::default()).unwrap();

        assert_eq!(drawing.layers.len(), 2);
        assert_eq!(drawing.layers.handle(), Handle::new(2));
        let walls = drawing.layers.get("WALLS").unwrap();
        assert!(!walls.on);
        assert_eq!(walls.color, Color::Index(1));

        let dashed = drawing.linetypes.get("dashed").unwrap();
        assert_eq!(dashed.pattern, vec![0.5, -0.25]);
        assert!(drawing.styles.is_empty());
        assert!(drawing.notifications.is_empty());
    }

    #[test]
    fn test_duplicate_entry_warns() {
        let chunk = Tags::new(vec![
            Tag::text(0, "SECTION"),
            Tag::text(2, "TABLES"),
            Tag::text(0, "TABLE"),
            Tag::text(2, "STYLE"),
            Tag::text(0, "STYLE"),
            Tag::text(2, "Standard"),
            Tag::text(0, "STYLE"),
            Tag::text(2, "STANDARD"),
            Tag::float(41, 0.8),
            Tag::text(0, "ENDTAB"),
            Tag::text(0, "ENDSEC"),
        ]);
        let mut drawing = Drawing::new();
        build(&mut drawing, chunk, &DxfReaderConfiguration::default()).unwrap();
        assert_eq!(drawing.styles.len(), 1);
        assert_eq!(drawing.styles.get("standard").unwrap().width_factor, 0.8);
        assert!(drawing.notifications.has_type(NotificationType::Warning));
    }
}
