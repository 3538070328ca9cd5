//! Ellipse entity

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::types::Vector3;
use std::f64::consts::TAU;

/// An ellipse or elliptical arc
#[derive(Debug, Clone)]
pub struct Ellipse {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point in world coordinates (10)
    pub center: Vector3,
    /// Endpoint of the major axis, relative to the center (11)
    pub major_axis: Vector3,
    /// Minor to major axis ratio (40)
    pub ratio: f64,
    /// Start parameter in radians (41)
    pub start_param: f64,
    /// End parameter in radians (42)
    pub end_param: f64,
}

impl Ellipse {
    /// `true` if start and end parameter cover the whole ellipse
    pub fn is_full(&self) -> bool {
        ((self.end_param - self.start_param).abs() - TAU).abs() < 1e-10
    }

    /// Length of the major semi-axis
    pub fn major_radius(&self) -> f64 {
        self.major_axis.length()
    }

    fn bind_fields(&mut self, tag: &Tag) -> bool {
        match tag.code {
            10 => self.center = tag.point3().unwrap_or_default(),
            11 => self.major_axis = tag.point3().unwrap_or(Vector3::UNIT_X),
            40 => self.ratio = tag.f64().unwrap_or(1.0),
            41 => self.start_param = tag.f64().unwrap_or(0.0),
            42 => self.end_param = tag.f64().unwrap_or(TAU),
            _ => return false,
        }
        true
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Ellipse {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            major_axis: Vector3::UNIT_X,
            ratio: 1.0,
            start_param: 0.0,
            end_param: TAU,
        }
    }
}

impl Entity for Ellipse {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "ELLIPSE"
    }
}

impl Bind for Ellipse {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}
