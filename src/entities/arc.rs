//! Arc entity

use super::binding::{bind_common, Bind, Pass};
use super::circle::bind_center_radius;
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::types::Vector3;

/// A circular arc; angles in degrees, counter-clockwise
#[derive(Debug, Clone)]
pub struct Arc {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point (10)
    pub center: Vector3,
    /// Radius (40)
    pub radius: f64,
    /// Start angle in degrees (50)
    pub start_angle: f64,
    /// End angle in degrees (51)
    pub end_angle: f64,
}

impl Arc {
    /// Sweep angle in degrees, always in (0, 360]
    pub fn sweep_angle(&self) -> f64 {
        let sweep = (self.end_angle - self.start_angle).rem_euclid(360.0);
        if sweep == 0.0 {
            360.0
        } else {
            sweep
        }
    }

    fn bind_circle(&mut self, tag: &Tag) -> bool {
        bind_center_radius(&mut self.center, &mut self.radius, tag)
    }

    fn bind_fields(&mut self, tag: &Tag) -> bool {
        match tag.code {
            50 => self.start_angle = tag.f64().unwrap_or(0.0),
            51 => self.end_angle = tag.f64().unwrap_or(360.0),
            _ => return false,
        }
        true
    }
}

impl Default for Arc {
    fn default() -> Self {
        Arc {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            radius: 1.0,
            start_angle: 0.0,
            end_angle: 360.0,
        }
    }
}

impl Entity for Arc {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "ARC"
    }
}

impl Bind for Arc {
    const PASSES: &'static [Pass<Self>] = &[
        Pass::new(bind_common),
        Pass::new(Self::bind_circle),
        Pass::new(Self::bind_fields),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_angle() {
        let arc = Arc {
            start_angle: 270.0,
            end_angle: 90.0,
            ..Arc::default()
        };
        assert_eq!(arc.sweep_angle(), 180.0);
        assert_eq!(Arc::default().sweep_angle(), 360.0);
    }
}
