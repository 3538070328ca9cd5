//! Point entity

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::types::Vector3;

/// A point entity
#[derive(Debug, Clone, Default)]
pub struct Point {
    /// Common entity data
    pub common: EntityCommon,
    /// Location (10)
    pub location: Vector3,
    /// Angle of the X axis of the UCS in effect when drawn (50)
    pub x_axis_angle: f64,
}

impl Point {
    fn bind_fields(&mut self, tag: &Tag) -> bool {
        match tag.code {
            10 => self.location = tag.point3().unwrap_or_default(),
            50 => self.x_axis_angle = tag.f64().unwrap_or(0.0),
            _ => return false,
        }
        true
    }
}

impl Entity for Point {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "POINT"
    }
}

impl Bind for Point {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}
