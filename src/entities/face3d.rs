//! 3DFACE entity

use super::binding::{bind_common, Bind, Pass};
use super::solid::bind_corners;
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::types::Vector3;
use bitflags::bitflags;

bitflags! {
    /// Invisible edge flags of a 3D face (70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InvisibleEdgeFlags: i16 {
        /// First edge is invisible
        const FIRST = 1;
        /// Second edge is invisible
        const SECOND = 2;
        /// Third edge is invisible
        const THIRD = 4;
        /// Fourth edge is invisible
        const FOURTH = 8;
    }
}

/// A three- or four-sided face in 3D space
#[derive(Debug, Clone, Default)]
pub struct Face3D {
    /// Common entity data
    pub common: EntityCommon,
    /// Corner points (10-13)
    pub points: [Vector3; 4],
    /// Invisible edges (70)
    pub invisible_edges: InvisibleEdgeFlags,
}

impl Face3D {
    /// `true` if edge `index` (0-3) is drawn
    pub fn is_edge_visible(&self, index: usize) -> bool {
        match InvisibleEdgeFlags::from_bits(1 << index.min(3)) {
            Some(edge) => !self.invisible_edges.contains(edge),
            None => true,
        }
    }

    fn bind_fields(&mut self, tag: &Tag) -> bool {
        if tag.code == 70 {
            self.invisible_edges =
                InvisibleEdgeFlags::from_bits_truncate(tag.i64().unwrap_or(0) as i16);
            return true;
        }
        bind_corners(&mut self.points, tag)
    }
}

impl Entity for Face3D {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "3DFACE"
    }
}

impl Bind for Face3D {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}
