//! Lightweight polyline entity

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::types::Vector2;

/// A vertex of a lightweight polyline
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LwVertex {
    /// Location in object coordinates (10)
    pub location: Vector2,
    /// Start width (40)
    pub start_width: f64,
    /// End width (41)
    pub end_width: f64,
    /// Bulge to the next vertex (42)
    pub bulge: f64,
}

/// A 2D polyline stored in a single record
#[derive(Debug, Clone, Default)]
pub struct LwPolyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Flags (70); bit 1 closed, bit 128 continuous linetype
    pub flags: i16,
    /// Constant width (43)
    pub const_width: f64,
    /// Elevation (38)
    pub elevation: f64,
    /// Vertices in file order
    pub vertices: Vec<LwVertex>,
}

impl LwPolyline {
    /// `true` if the last vertex connects back to the first
    pub fn is_closed(&self) -> bool {
        self.flags & 1 != 0
    }

    /// Vertex locations
    pub fn points(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.vertices.iter().map(|v| v.location)
    }

    fn bind_fields(&mut self, tag: &Tag) -> bool {
        match tag.code {
            10 => self.vertices.push(LwVertex {
                location: tag.point2().unwrap_or_default(),
                ..LwVertex::default()
            }),
            40 | 41 | 42 => {
                let Some(vertex) = self.vertices.last_mut() else {
                    return false;
                };
                let value = tag.f64().unwrap_or(0.0);
                match tag.code {
                    40 => vertex.start_width = value,
                    41 => vertex.end_width = value,
                    _ => vertex.bulge = value,
                }
            }
            70 => self.flags = tag.i64().unwrap_or(0) as i16,
            43 => self.const_width = tag.f64().unwrap_or(0.0),
            38 => self.elevation = tag.f64().unwrap_or(0.0),
            // vertex count, implied by the 10 tags
            90 => {}
            _ => return false,
        }
        true
    }
}

impl Entity for LwPolyline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "LWPOLYLINE"
    }
}

impl Bind for LwPolyline {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::binding::bind;
    use crate::io::dxf::{ClassifiedTags, TagValue};

    fn point(x: f64, y: f64) -> Tag {
        Tag::new(10, TagValue::Point2(Vector2::new(x, y)))
    }

    #[test]
    fn test_vertices_with_widths() {
        let record = ClassifiedTags::new(vec![
            Tag::text(0, "LWPOLYLINE"),
            Tag::int(90, 3),
            Tag::int(70, 1),
            Tag::float(43, 0.0),
            point(0.0, 0.0),
            Tag::float(40, 0.5),
            Tag::float(41, 1.0),
            point(10.0, 0.0),
            Tag::float(42, 1.0),
            point(10.0, 10.0),
        ])
        .unwrap();
        let polyline: LwPolyline = bind(record);
        assert!(polyline.is_closed());
        assert_eq!(polyline.vertices.len(), 3);
        assert_eq!(polyline.vertices[0].start_width, 0.5);
        assert_eq!(polyline.vertices[0].end_width, 1.0);
        assert_eq!(polyline.vertices[1].bulge, 1.0);
        assert_eq!(polyline.points().last(), Some(Vector2::new(10.0, 10.0)));
    }
}
