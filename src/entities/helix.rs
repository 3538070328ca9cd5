//! Helix entity

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon, Spline};
use crate::io::dxf::Tag;
use crate::types::Vector3;

/// A helix, stored as a spline plus its construction parameters
#[derive(Debug, Clone)]
pub struct Helix {
    /// Spline approximation, including the common entity data
    pub spline: Spline,
    /// Axis base point (10)
    pub axis_base_point: Vector3,
    /// Start point (11)
    pub start_point: Vector3,
    /// Axis vector (12)
    pub axis_vector: Vector3,
    /// Radius (40)
    pub radius: f64,
    /// Number of turns (41)
    pub turns: f64,
    /// Turn height (42)
    pub turn_height: f64,
    /// Handedness (290): `true` right handed, `false` left handed
    pub handedness: bool,
    /// Constrained parameter (280): 0 turn height, 1 turns, 2 height
    pub constrain: i64,
}

impl Default for Helix {
    fn default() -> Self {
        Helix {
            spline: Spline::default(),
            axis_base_point: Vector3::ZERO,
            start_point: Vector3::ZERO,
            axis_vector: Vector3::UNIT_Z,
            radius: 0.0,
            turns: 1.0,
            turn_height: 0.0,
            handedness: true,
            constrain: 0,
        }
    }
}

impl Helix {
    fn bind_spline(&mut self, tag: &Tag) -> bool {
        self.spline.bind_spline(tag)
    }

    fn bind_helix(&mut self, tag: &Tag) -> bool {
        match tag.code {
            10 => self.axis_base_point = tag.point3().unwrap_or_default(),
            11 => self.start_point = tag.point3().unwrap_or_default(),
            12 => self.axis_vector = tag.point3().unwrap_or(Vector3::UNIT_Z),
            40 => self.radius = tag.f64().unwrap_or(0.0),
            41 => self.turns = tag.f64().unwrap_or(1.0),
            42 => self.turn_height = tag.f64().unwrap_or(0.0),
            290 => self.handedness = tag.bool().unwrap_or(true),
            280 => self.constrain = tag.i64().unwrap_or(0),
            // major and maintenance release numbers
            90 | 91 => {}
            _ => return false,
        }
        true
    }
}

impl Entity for Helix {
    fn common(&self) -> &EntityCommon {
        &self.spline.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.spline.common
    }

    fn dxftype(&self) -> &'static str {
        "HELIX"
    }
}

impl Bind for Helix {
    const PASSES: &'static [Pass<Self>] = &[
        Pass::new(bind_common),
        Pass::in_subclass("AcDbSpline", Self::bind_spline),
        Pass::in_subclass("AcDbHelix", Self::bind_helix),
    ];
}
