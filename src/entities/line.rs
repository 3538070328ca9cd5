//! Line entity

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::types::Vector3;

/// A line entity defined by two endpoints
#[derive(Debug, Clone, Default)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point of the line (10)
    pub start: Vector3,
    /// End point of the line (11)
    pub end: Vector3,
}

impl Line {
    /// Get the length of the line
    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    fn bind_fields(&mut self, tag: &Tag) -> bool {
        match tag.code {
            10 => self.start = tag.point3().unwrap_or_default(),
            11 => self.end = tag.point3().unwrap_or_default(),
            _ => return false,
        }
        true
    }
}

impl Entity for Line {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "LINE"
    }
}

impl Bind for Line {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}
