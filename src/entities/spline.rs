//! Spline entity

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::types::Vector3;
use bitflags::bitflags;

bitflags! {
    /// Spline flags (70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SplineFlags: i16 {
        /// Closed spline
        const CLOSED = 1;
        /// Periodic spline
        const PERIODIC = 2;
        /// Rational spline
        const RATIONAL = 4;
        /// Planar spline
        const PLANAR = 8;
        /// Linear (planar bit is also set)
        const LINEAR = 16;
    }
}

/// A NURBS curve
///
/// The plane normal (210) of a planar spline is read into the common
/// extrusion; see [`normal`](Self::normal).
#[derive(Debug, Clone)]
pub struct Spline {
    /// Common entity data
    pub common: EntityCommon,
    /// Spline flags (70)
    pub flags: SplineFlags,
    /// Degree of the curve (71)
    pub degree: i64,
    /// Knot tolerance (42)
    pub knot_tolerance: f64,
    /// Control point tolerance (43)
    pub control_point_tolerance: f64,
    /// Fit tolerance (44)
    pub fit_tolerance: f64,
    /// Start tangent (12)
    pub start_tangent: Option<Vector3>,
    /// End tangent (13)
    pub end_tangent: Option<Vector3>,
    /// Knot values (40)
    pub knots: Vec<f64>,
    /// Control point weights (41), empty for non-rational splines
    pub weights: Vec<f64>,
    /// Control points (10)
    pub control_points: Vec<Vector3>,
    /// Fit points (11)
    pub fit_points: Vec<Vector3>,
}

impl Default for Spline {
    fn default() -> Self {
        Spline {
            common: EntityCommon::new(),
            flags: SplineFlags::empty(),
            degree: 3,
            knot_tolerance: 1e-10,
            control_point_tolerance: 1e-10,
            fit_tolerance: 1e-10,
            start_tangent: None,
            end_tangent: None,
            knots: Vec::new(),
            weights: Vec::new(),
            control_points: Vec::new(),
            fit_points: Vec::new(),
        }
    }
}

impl Spline {
    /// Plane normal of a planar spline
    pub fn normal(&self) -> Vector3 {
        self.common.extrusion
    }

    /// `true` if the spline is closed
    pub fn is_closed(&self) -> bool {
        self.flags.contains(SplineFlags::CLOSED)
    }

    /// `true` if the spline is periodic
    pub fn is_periodic(&self) -> bool {
        self.flags.contains(SplineFlags::PERIODIC)
    }

    /// `true` if the spline is rational
    pub fn is_rational(&self) -> bool {
        self.flags.contains(SplineFlags::RATIONAL)
    }

    /// `true` if the spline is planar
    pub fn is_planar(&self) -> bool {
        self.flags.contains(SplineFlags::PLANAR)
    }

    pub(crate) fn bind_spline(&mut self, tag: &Tag) -> bool {
        match tag.code {
            70 => self.flags = SplineFlags::from_bits_truncate(tag.i64().unwrap_or(0) as i16),
            71 => self.degree = tag.i64().unwrap_or(3),
            // knot, control point and fit point counts, implied by the lists
            72..=74 => {}
            42 => self.knot_tolerance = tag.f64().unwrap_or(1e-10),
            43 => self.control_point_tolerance = tag.f64().unwrap_or(1e-10),
            44 => self.fit_tolerance = tag.f64().unwrap_or(1e-10),
            12 => self.start_tangent = tag.point3(),
            13 => self.end_tangent = tag.point3(),
            40 => self.knots.push(tag.f64().unwrap_or(0.0)),
            41 => self.weights.push(tag.f64().unwrap_or(1.0)),
            10 => self.control_points.push(tag.point3().unwrap_or_default()),
            11 => self.fit_points.push(tag.point3().unwrap_or_default()),
            _ => return false,
        }
        true
    }
}

impl Entity for Spline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "SPLINE"
    }
}

impl Bind for Spline {
    const PASSES: &'static [Pass<Self>] = &[
        Pass::new(bind_common),
        Pass::in_subclass("AcDbSpline", Self::bind_spline),
    ];
}
