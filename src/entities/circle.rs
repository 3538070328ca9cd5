//! Circle entity

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::types::Vector3;

/// A circle entity
#[derive(Debug, Clone)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point of the circle (10), in object coordinates
    pub center: Vector3,
    /// Radius of the circle (40)
    pub radius: f64,
}

impl Circle {
    /// Create a new circle at the origin with radius 1
    pub fn new() -> Self {
        Circle {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            radius: 1.0,
        }
    }

    /// Get the diameter of the circle
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    fn bind_fields(&mut self, tag: &Tag) -> bool {
        bind_center_radius(&mut self.center, &mut self.radius, tag)
    }
}

/// Center (10) and radius (40), shared by CIRCLE and ARC
pub(crate) fn bind_center_radius(center: &mut Vector3, radius: &mut f64, tag: &Tag) -> bool {
    match tag.code {
        10 => *center = tag.point3().unwrap_or_default(),
        40 => *radius = tag.f64().unwrap_or(1.0),
        _ => return false,
    }
    true
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Circle {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "CIRCLE"
    }
}

impl Bind for Circle {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}
