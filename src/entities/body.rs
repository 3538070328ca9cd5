//! ACIS based entities: BODY, REGION, 3DSOLID and the SURFACE family
//!
//! The geometry is kept as the raw ACIS payload. Before AutoCAD 2013 it is
//! stored as obfuscated SAT text in the entity record; from 2013 on the text
//! is empty and the binary SAB data lives in the ACDSDATA section, keyed by
//! the entity's handle.

use super::binding::{bind_common, handle_of, Bind, Pass};
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::types::Handle;

// ============================================================================
// Modeler geometry
// ============================================================================

/// ACIS payload shared by all modeler-geometry entities
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelerGeometry {
    /// Modeler format version (70)
    pub version: i64,
    /// Encoded SAT lines (1, continued by 3)
    pub acis: Vec<String>,
    /// Binary SAB data from ACDSDATA, if any
    pub sab: Option<Vec<u8>>,
}

impl ModelerGeometry {
    /// `true` if neither SAT text nor SAB data is present
    pub fn is_empty(&self) -> bool {
        self.acis.iter().all(String::is_empty) && self.sab.is_none()
    }

    /// SAT lines with the DXF obfuscation removed
    pub fn decoded_lines(&self) -> Vec<String> {
        self.acis.iter().map(|line| decode_acis_line(line)).collect()
    }

    /// Decoded SAT text, one ACIS record per line
    pub fn acis_text(&self) -> String {
        self.decoded_lines().join("\n")
    }

    fn bind(&mut self, tag: &Tag) -> bool {
        match tag.code {
            70 => self.version = tag.i64().unwrap_or(1),
            1 => self.acis.push(tag.string()),
            3 => match self.acis.last_mut() {
                Some(line) => line.push_str(tag.str()),
                None => self.acis.push(tag.string()),
            },
            _ => return false,
        }
        true
    }
}

/// Undo the DXF SAT obfuscation of one line
fn decode_acis_line(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            ' ' => result.push(' '),
            '@' => result.push('_'),
            '_' => result.push('@'),
            'A'..='^' => {
                result.push(char::from(0x41 + 0x5E - c as u8));
                // '^' encodes 'A' followed by a filler space
                if c == '^' && chars.as_str().starts_with(' ') {
                    chars.next();
                }
            }
            _ => result.push(char::from_u32(c as u32 ^ 0x5F).unwrap_or(c)),
        }
    }
    result
}

// ============================================================================
// BODY, REGION, 3DSOLID
// ============================================================================

/// Which DXF type a [`Body`] was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyKind {
    /// BODY
    #[default]
    Body,
    /// REGION
    Region,
    /// 3DSOLID
    Solid3D,
}

impl BodyKind {
    /// DXF type name
    pub fn dxftype(&self) -> &'static str {
        match self {
            BodyKind::Body => "BODY",
            BodyKind::Region => "REGION",
            BodyKind::Solid3D => "3DSOLID",
        }
    }
}

/// BODY, REGION or 3DSOLID entity
#[derive(Debug, Clone, Default)]
pub struct Body {
    /// Common entity data
    pub common: EntityCommon,
    /// DXF type
    pub kind: BodyKind,
    /// ACIS payload
    pub geometry: ModelerGeometry,
    /// History object (350), 3DSOLID only
    pub history: Handle,
}

impl Body {
    /// Create an empty body of the given kind
    pub fn new(kind: BodyKind) -> Self {
        Body {
            kind,
            ..Default::default()
        }
    }

    fn bind_geometry(&mut self, tag: &Tag) -> bool {
        self.geometry.bind(tag)
    }

    fn bind_history(&mut self, tag: &Tag) -> bool {
        match tag.code {
            350 => self.history = handle_of(tag),
            _ => return false,
        }
        true
    }
}

impl Entity for Body {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        self.kind.dxftype()
    }
}

impl Bind for Body {
    const PASSES: &'static [Pass<Self>] = &[
        Pass::new(bind_common),
        Pass::in_subclass("AcDbModelerGeometry", Self::bind_geometry),
        Pass::in_subclass("AcDb3dSolid", Self::bind_history),
    ];
}

// ============================================================================
// SURFACE
// ============================================================================

/// Which DXF type a [`Surface`] was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceType {
    /// SURFACE
    #[default]
    Generic,
    /// EXTRUDEDSURFACE
    Extruded,
    /// LOFTEDSURFACE
    Lofted,
    /// REVOLVEDSURFACE
    Revolved,
    /// SWEPTSURFACE
    Swept,
    /// PLANESURFACE
    Plane,
}

impl SurfaceType {
    /// DXF type name
    pub fn dxftype(&self) -> &'static str {
        match self {
            SurfaceType::Generic => "SURFACE",
            SurfaceType::Extruded => "EXTRUDEDSURFACE",
            SurfaceType::Lofted => "LOFTEDSURFACE",
            SurfaceType::Revolved => "REVOLVEDSURFACE",
            SurfaceType::Swept => "SWEPTSURFACE",
            SurfaceType::Plane => "PLANESURFACE",
        }
    }
}

/// SURFACE entity and its specialized kinds
///
/// Kind specific data of the specialized surfaces (extrusion path, loft
/// cross sections, ...) is not bound.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    /// Common entity data
    pub common: EntityCommon,
    /// DXF type
    pub surface_type: SurfaceType,
    /// ACIS payload
    pub geometry: ModelerGeometry,
    /// Number of U isolines (71)
    pub u_isolines: i64,
    /// Number of V isolines (72)
    pub v_isolines: i64,
}

impl Surface {
    fn bind_geometry(&mut self, tag: &Tag) -> bool {
        self.geometry.bind(tag)
    }

    fn bind_isolines(&mut self, tag: &Tag) -> bool {
        match tag.code {
            71 => self.u_isolines = tag.i64().unwrap_or(0),
            72 => self.v_isolines = tag.i64().unwrap_or(0),
            _ => return false,
        }
        true
    }
}

impl Entity for Surface {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        self.surface_type.dxftype()
    }
}

impl Bind for Surface {
    const PASSES: &'static [Pass<Self>] = &[
        Pass::new(bind_common),
        Pass::in_subclass("AcDbModelerGeometry", Self::bind_geometry),
        Pass::in_subclass("AcDbSurface", Self::bind_isolines),
    ];
}
