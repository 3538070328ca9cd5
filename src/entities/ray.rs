//! RAY and XLINE entities

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::types::Vector3;

fn bind_start_direction(start: &mut Vector3, direction: &mut Vector3, tag: &Tag) -> bool {
    match tag.code {
        10 => *start = tag.point3().unwrap_or_default(),
        11 => *direction = tag.point3().unwrap_or(Vector3::UNIT_X),
        _ => return false,
    }
    true
}

/// A semi-infinite line
#[derive(Debug, Clone)]
pub struct Ray {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point (10)
    pub start: Vector3,
    /// Unit direction vector (11)
    pub unit_vector: Vector3,
}

impl Ray {
    fn bind_fields(&mut self, tag: &Tag) -> bool {
        bind_start_direction(&mut self.start, &mut self.unit_vector, tag)
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray {
            common: EntityCommon::new(),
            start: Vector3::ZERO,
            unit_vector: Vector3::UNIT_X,
        }
    }
}

impl Entity for Ray {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "RAY"
    }
}

impl Bind for Ray {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}

/// An infinite construction line through `start`
#[derive(Debug, Clone)]
pub struct XLine {
    /// Common entity data
    pub common: EntityCommon,
    /// A point on the line (10)
    pub start: Vector3,
    /// Unit direction vector (11)
    pub unit_vector: Vector3,
}

impl XLine {
    fn bind_fields(&mut self, tag: &Tag) -> bool {
        bind_start_direction(&mut self.start, &mut self.unit_vector, tag)
    }
}

impl Default for XLine {
    fn default() -> Self {
        XLine {
            common: EntityCommon::new(),
            start: Vector3::ZERO,
            unit_vector: Vector3::UNIT_X,
        }
    }
}

impl Entity for XLine {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "XLINE"
    }
}

impl Bind for XLine {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}
