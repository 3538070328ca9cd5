//! POLYLINE and VERTEX entities
//!
//! A POLYLINE record is followed by its VERTEX records and closed by SEQEND.
//! Depending on its flags the same structure stores a 2D polyline, a 3D
//! polyline, a polyface mesh or a polygon mesh; [`Polyline::mode`] tells
//! which, and [`Polyline::as_polyface`] / [`Polyline::as_polymesh`] give
//! borrowed views for the mesh forms.

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::types::Vector3;
use bitflags::bitflags;

bitflags! {
    /// Polyline flags (70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: i16 {
        /// Closed polyline, or mesh closed in M direction
        const CLOSED = 1;
        /// Curve-fit vertices added
        const CURVE_FIT = 2;
        /// Spline-fit vertices added
        const SPLINE_FIT = 4;
        /// 3D polyline
        const POLYLINE_3D = 8;
        /// 3D polygon mesh
        const POLYGON_MESH = 16;
        /// Polygon mesh closed in N direction
        const CLOSED_N = 32;
        /// Polyface mesh
        const POLYFACE_MESH = 64;
        /// Linetype pattern generated continuously around the vertices
        const CONTINUOUS_LINETYPE = 128;
    }
}

bitflags! {
    /// Vertex flags (70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct VertexFlags: i16 {
        /// Extra vertex created by curve fitting
        const EXTRA_VERTEX = 1;
        /// Curve-fit tangent defined
        const CURVE_FIT_TANGENT = 2;
        /// Spline vertex created by spline fitting
        const SPLINE_VERTEX = 8;
        /// Spline frame control point
        const SPLINE_CONTROL = 16;
        /// 3D polyline vertex
        const POLYLINE_3D = 32;
        /// 3D polygon mesh or polyface mesh vertex
        const POLYGON_MESH = 64;
        /// Polyface mesh face record
        const POLYFACE_FACE = 128;
    }
}

/// Smooth surface type (75)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmoothSurfaceType {
    /// No smooth surface fitted
    #[default]
    None,
    /// Quadratic B-spline surface
    QuadraticBSpline,
    /// Cubic B-spline surface
    CubicBSpline,
    /// Bezier surface
    Bezier,
}

impl SmoothSurfaceType {
    /// Create from the DXF value
    pub fn from_value(value: i64) -> Self {
        match value {
            5 => SmoothSurfaceType::QuadraticBSpline,
            6 => SmoothSurfaceType::CubicBSpline,
            8 => SmoothSurfaceType::Bezier,
            _ => SmoothSurfaceType::None,
        }
    }
}

/// What a POLYLINE record represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolylineMode {
    /// 2D polyline with widths and bulges
    Polyline2D,
    /// 3D polyline
    Polyline3D,
    /// Polyface mesh
    PolyFace,
    /// M x N polygon mesh
    PolyMesh,
}

/// A polyline vertex or polyface face record
#[derive(Debug, Clone, Default)]
pub struct Vertex {
    /// Common entity data
    pub common: EntityCommon,
    /// Location (10)
    pub location: Vector3,
    /// Start width (40)
    pub start_width: f64,
    /// End width (41)
    pub end_width: f64,
    /// Bulge (42)
    pub bulge: f64,
    /// Vertex flags (70)
    pub flags: VertexFlags,
    /// Curve fit tangent direction in degrees (50)
    pub tangent: Option<f64>,
    /// Polyface face vertex indices (71-74); 1-based, negative means the
    /// edge starting at that vertex is invisible, 0 means unused
    pub face_indices: [i64; 4],
}

impl Vertex {
    /// `true` for a polyface face record
    pub fn is_face_record(&self) -> bool {
        self.flags.contains(VertexFlags::POLYFACE_FACE)
            && !self.flags.contains(VertexFlags::POLYGON_MESH)
    }

    fn bind_fields(&mut self, tag: &Tag) -> bool {
        match tag.code {
            10 => self.location = tag.point3().unwrap_or_default(),
            40 => self.start_width = tag.f64().unwrap_or(0.0),
            41 => self.end_width = tag.f64().unwrap_or(0.0),
            42 => self.bulge = tag.f64().unwrap_or(0.0),
            70 => self.flags = VertexFlags::from_bits_truncate(tag.i64().unwrap_or(0) as i16),
            50 => self.tangent = tag.f64(),
            71..=74 => self.face_indices[(tag.code - 71) as usize] = tag.i64().unwrap_or(0),
            _ => return false,
        }
        true
    }
}

impl Entity for Vertex {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "VERTEX"
    }
}

impl Bind for Vertex {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}

/// A heavy polyline with its vertices
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Polyline flags (70)
    pub flags: PolylineFlags,
    /// Elevation point (10); only Z is meaningful
    pub elevation: Vector3,
    /// Default start width (40)
    pub default_start_width: f64,
    /// Default end width (41)
    pub default_end_width: f64,
    /// Mesh vertex count in M direction (71)
    pub m_count: i64,
    /// Mesh vertex count in N direction (72)
    pub n_count: i64,
    /// Smooth surface density in M direction (73)
    pub m_smooth_density: i64,
    /// Smooth surface density in N direction (74)
    ///
    /// Some readers test code 73 twice and never fill this field; here it is
    /// read from 74 as the DXF reference defines.
    pub n_smooth_density: i64,
    /// Smooth surface type (75)
    pub smooth_type: SmoothSurfaceType,
    /// Vertices in file order
    pub vertices: Vec<Vertex>,
}

impl Polyline {
    /// Kind of geometry stored in this record
    pub fn mode(&self) -> PolylineMode {
        if self.flags.contains(PolylineFlags::POLYGON_MESH) {
            PolylineMode::PolyMesh
        } else if self.flags.contains(PolylineFlags::POLYFACE_MESH) {
            PolylineMode::PolyFace
        } else if self.flags.contains(PolylineFlags::POLYLINE_3D) {
            PolylineMode::Polyline3D
        } else {
            PolylineMode::Polyline2D
        }
    }

    /// `true` if closed (in M direction for meshes)
    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }

    /// Vertex locations in file order
    pub fn points(&self) -> impl Iterator<Item = Vector3> + '_ {
        self.vertices.iter().map(|v| v.location)
    }

    /// Polyface view, `None` unless [`mode`](Self::mode) is `PolyFace`
    pub fn as_polyface(&self) -> Option<PolyFace<'_>> {
        (self.mode() == PolylineMode::PolyFace).then_some(PolyFace { polyline: self })
    }

    /// Polygon mesh view, `None` unless [`mode`](Self::mode) is `PolyMesh`
    pub fn as_polymesh(&self) -> Option<PolyMesh<'_>> {
        (self.mode() == PolylineMode::PolyMesh).then_some(PolyMesh { polyline: self })
    }

    fn bind_fields(&mut self, tag: &Tag) -> bool {
        match tag.code {
            70 => self.flags = PolylineFlags::from_bits_truncate(tag.i64().unwrap_or(0) as i16),
            10 => self.elevation = tag.point3().unwrap_or_default(),
            40 => self.default_start_width = tag.f64().unwrap_or(0.0),
            41 => self.default_end_width = tag.f64().unwrap_or(0.0),
            71 => self.m_count = tag.i64().unwrap_or(0),
            72 => self.n_count = tag.i64().unwrap_or(0),
            73 => self.m_smooth_density = tag.i64().unwrap_or(0),
            74 => self.n_smooth_density = tag.i64().unwrap_or(0),
            75 => self.smooth_type = SmoothSurfaceType::from_value(tag.i64().unwrap_or(0)),
            // vertices-follow flag, always set
            66 => {}
            _ => return false,
        }
        true
    }
}

impl Entity for Polyline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "POLYLINE"
    }
}

impl Bind for Polyline {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}

/// Borrowed polyface mesh view of a [`Polyline`]
#[derive(Debug, Clone, Copy)]
pub struct PolyFace<'a> {
    polyline: &'a Polyline,
}

impl<'a> PolyFace<'a> {
    /// Mesh vertices (records that are not face records)
    pub fn vertices(&self) -> impl Iterator<Item = &'a Vertex> {
        let polyline = self.polyline;
        polyline.vertices.iter().filter(|v| !v.is_face_record())
    }

    /// Faces as lists of their vertices, unused indices dropped
    pub fn faces(&self) -> impl Iterator<Item = Vec<&'a Vertex>> + 'a {
        let vertices: Vec<&'a Vertex> = self.vertices().collect();
        let polyline = self.polyline;
        polyline
            .vertices
            .iter()
            .filter(|v| v.is_face_record())
            .map(move |face| {
                face.face_indices
                    .iter()
                    .filter(|&&i| i != 0)
                    .filter_map(|i| vertices.get(i.unsigned_abs() as usize - 1).copied())
                    .collect()
            })
    }

    /// Number of face records
    pub fn face_count(&self) -> usize {
        self.polyline.vertices.iter().filter(|v| v.is_face_record()).count()
    }
}

/// Borrowed M x N polygon mesh view of a [`Polyline`]
#[derive(Debug, Clone, Copy)]
pub struct PolyMesh<'a> {
    polyline: &'a Polyline,
}

impl PolyMesh<'_> {
    /// Vertex count in M and N direction
    pub fn size(&self) -> (usize, usize) {
        (
            self.polyline.m_count.max(0) as usize,
            self.polyline.n_count.max(0) as usize,
        )
    }

    /// Location of mesh vertex (m, n)
    pub fn location(&self, m: usize, n: usize) -> Option<Vector3> {
        let (m_count, n_count) = self.size();
        if m >= m_count || n >= n_count {
            return None;
        }
        let index = m.checked_mul(n_count)?.checked_add(n)?;
        self.polyline.vertices.get(index).map(|v| v.location)
    }

    /// Closed in M direction
    pub fn is_closed_m(&self) -> bool {
        self.polyline.flags.contains(PolylineFlags::CLOSED)
    }

    /// Closed in N direction
    pub fn is_closed_n(&self) -> bool {
        self.polyline.flags.contains(PolylineFlags::CLOSED_N)
    }
}
