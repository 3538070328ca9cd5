//! TRACE and SOLID: filled quadrilaterals

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::types::Vector3;

/// Corner points 10-13 of a quadrilateral
pub(crate) fn bind_corners(points: &mut [Vector3; 4], tag: &Tag) -> bool {
    match tag.code {
        10..=13 => {
            points[(tag.code - 10) as usize] = tag.point3().unwrap_or_default();
            true
        }
        _ => false,
    }
}

/// A 2D filled quadrilateral or triangle
///
/// Corners are stored in file order; the third and fourth point are equal
/// for a triangle. Note that DXF orders the corners in a zig-zag, so the
/// outline is 0-1-3-2.
#[derive(Debug, Clone, Default)]
pub struct Solid {
    /// Common entity data
    pub common: EntityCommon,
    /// Corner points (10-13)
    pub points: [Vector3; 4],
}

impl Solid {
    /// `true` if the fourth corner repeats the third
    pub fn is_triangle(&self) -> bool {
        self.points[2] == self.points[3]
    }

    fn bind_fields(&mut self, tag: &Tag) -> bool {
        bind_corners(&mut self.points, tag)
    }
}

impl Entity for Solid {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "SOLID"
    }
}

impl Bind for Solid {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}

/// A wide line segment, same layout as [`Solid`]
#[derive(Debug, Clone, Default)]
pub struct Trace {
    /// Common entity data
    pub common: EntityCommon,
    /// Corner points (10-13)
    pub points: [Vector3; 4],
}

impl Trace {
    fn bind_fields(&mut self, tag: &Tag) -> bool {
        bind_corners(&mut self.points, tag)
    }
}

impl Entity for Trace {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "TRACE"
    }
}

impl Bind for Trace {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::binding::bind;
    use crate::io::dxf::ClassifiedTags;

    #[test]
    fn test_triangle() {
        let record = ClassifiedTags::new(vec![
            Tag::text(0, "SOLID"),
            Tag::point(10, Vector3::new(0.0, 0.0, 0.0)),
            Tag::point(11, Vector3::new(1.0, 0.0, 0.0)),
            Tag::point(12, Vector3::new(0.0, 1.0, 0.0)),
            Tag::point(13, Vector3::new(0.0, 1.0, 0.0)),
        ])
        .unwrap();
        let solid: Solid = bind(record);
        assert!(solid.is_triangle());
        assert_eq!(solid.points[1], Vector3::UNIT_X);
    }
}
