//! Layered field binding
//!
//! An entity kind declares an ordered list of passes, base kind first. Each
//! pass claims the tags it knows, writing them into the entity, and leaves
//! the rest to the next pass. Tags no pass claims are dropped.

use super::{Entity, EntityCommon};
use crate::io::dxf::{ClassifiedTags, Tag};
use crate::types::{Color, Handle, LineWeight, Transparency};

/// Binds one tag into an entity; returns `false` if the tag is not claimed
pub(crate) type BindFn<E> = fn(&mut E, &Tag) -> bool;

/// One step of an entity's binding chain
pub(crate) struct Pass<E> {
    subclass: Option<&'static str>,
    bind: BindFn<E>,
}

impl<E> Pass<E> {
    /// Pass that sees every tag of the record
    pub(crate) const fn new(bind: BindFn<E>) -> Self {
        Pass { subclass: None, bind }
    }

    /// Pass that only sees tags of the named subclass
    ///
    /// Records without subclass markers (R12 layout) are visible in full.
    pub(crate) const fn in_subclass(subclass: &'static str, bind: BindFn<E>) -> Self {
        Pass {
            subclass: Some(subclass),
            bind,
        }
    }

    fn accepts(&self, subclass: &str, has_markers: bool) -> bool {
        match self.subclass {
            None => true,
            Some(name) => !has_markers || subclass == name,
        }
    }
}

/// Entity kinds built by the binding chain
pub(crate) trait Bind: Entity + Default + Sized + 'static {
    /// Passes in binding order, [`bind_common`] first
    const PASSES: &'static [Pass<Self>];

    /// Derive fields after all tags are bound
    fn finish(&mut self) {}
}

/// Build an entity of kind `E` from a classified record
pub(crate) fn bind<E: Bind>(record: ClassifiedTags) -> E {
    let mut entity = E::default();
    let has_markers = record.has_subclass_markers();

    let unclaimed = {
        let fields: Vec<(&str, &Tag)> = record
            .all_subclass_tags()
            .filter(|(_, tag)| tag.code != 0)
            .collect();
        E::PASSES
            .iter()
            .fold(fields, |remaining, pass| {
                remaining
                    .into_iter()
                    .filter(|(subclass, tag)| {
                        !(pass.accepts(subclass, has_markers) && (pass.bind)(&mut entity, tag))
                    })
                    .collect()
            })
            .len()
    };
    if unclaimed > 0 {
        log::trace!("{}: {} unclaimed tags", entity.dxftype(), unclaimed);
    }

    let (_, app_data, xdata) = record.into_parts();
    let common = entity.common_mut();
    common.app_data = app_data;
    common.xdata = xdata
        .into_iter()
        .map(|block| (block.dxftype().unwrap_or_default().to_string(), block))
        .collect();

    entity.finish();
    entity
}

/// Base pass shared by every entity kind
pub(crate) fn bind_common<E: Entity>(entity: &mut E, tag: &Tag) -> bool {
    let common: &mut EntityCommon = entity.common_mut();
    match tag.code {
        5 => common.handle = tag.handle().unwrap_or_default(),
        330 => common.owner = tag.handle().unwrap_or_default(),
        67 => common.paperspace = tag.bool().unwrap_or(false),
        8 => common.layer = tag.string(),
        6 => common.linetype = Some(tag.string()),
        39 => common.thickness = tag.f64().unwrap_or(0.0),
        48 => common.ltscale = tag.f64().unwrap_or(1.0),
        60 => common.invisible = tag.bool().unwrap_or(false),
        62 => common.color = Color::from_index(tag.i64().unwrap_or(256)),
        420 => common.true_color = tag.i64().map(Color::from_true_color),
        440 => common.transparency = tag.i64().map(Transparency::from_dxf_value),
        284 => common.shadow_mode = tag.i64().map(|v| v as i16),
        370 => common.line_weight = LineWeight::from_value(tag.i64().unwrap_or(-1)),
        210 => common.extrusion = tag.point3().unwrap_or(common.extrusion),
        _ => return false,
    }
    true
}

/// Parse a handle-valued tag, null when malformed
pub(crate) fn handle_of(tag: &Tag) -> Handle {
    tag.handle().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Line;
    use crate::types::Vector3;

    fn classify(tags: Vec<Tag>) -> ClassifiedTags {
        ClassifiedTags::new(tags).unwrap()
    }

    #[test]
    fn test_common_fields() {
        let record = classify(vec![
            Tag::text(0, "LINE"),
            Tag::text(5, "3F"),
            Tag::text(8, "WALLS"),
            Tag::int(62, 3),
            Tag::int(67, 1),
            Tag::text(6, "DASHED"),
            Tag::int(370, 25),
            Tag::int(440, 0x0200_0000),
        ]);
        let line: Line = bind(record);
        assert_eq!(line.common.handle, Handle::new(0x3F));
        assert_eq!(line.common.layer, "WALLS");
        assert_eq!(line.common.color, Color::from_index(3));
        assert!(line.common.paperspace);
        assert_eq!(line.common.linetype.as_deref(), Some("DASHED"));
        assert_eq!(line.common.line_weight, LineWeight::Value(25));
        assert_eq!(line.common.transparency, Some(Transparency::TRANSPARENT));
        assert_eq!(line.common.extrusion, Vector3::UNIT_Z);
    }

    #[test]
    fn test_unclaimed_tags_are_dropped() {
        let record = classify(vec![
            Tag::text(0, "LINE"),
            Tag::int(999_999, 1),
            Tag::point(10, Vector3::new(1.0, 0.0, 0.0)),
        ]);
        let line: Line = bind(record);
        assert_eq!(line.start, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_app_data_and_xdata_kept() {
        let record = classify(vec![
            Tag::text(0, "LINE"),
            Tag::text(102, "{ACAD_REACTORS"),
            Tag::text(330, "1A"),
            Tag::text(102, "}"),
            Tag::text(1001, "MYAPP"),
            Tag::text(1000, "hello"),
        ]);
        let line: Line = bind(record);
        assert!(line.common.get_app_data("ACAD_REACTORS").is_some());
        assert_eq!(line.common.xdata["MYAPP"].len(), 2);
        assert!(line.common.owner.is_null());
    }

    #[test]
    fn test_subclass_scoped_pass() {
        let pass: Pass<Line> = Pass::in_subclass("AcDbLine", bind_common::<Line>);
        assert!(pass.accepts("AcDbLine", true));
        assert!(!pass.accepts("AcDbEntity", true));
        assert!(pass.accepts("", false));
        assert!(Pass::<Line>::new(bind_common::<Line>).accepts("AcDbEntity", true));
    }
}
