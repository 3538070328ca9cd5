//! MESH entity (subdivision mesh)

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::types::Vector3;

/// Which count-prefixed list the next tags belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum MeshSection {
    #[default]
    Header,
    Vertices(usize),
    Faces { entries: usize, open: usize },
    Edges { values: usize, first: Option<i64> },
    Creases(usize),
}

/// A subdivision mesh
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Common entity data
    pub common: EntityCommon,
    /// Version (71)
    pub version: i64,
    /// Blend crease (72)
    pub blend_crease: bool,
    /// Subdivision level (91)
    pub subdivision_level: i64,
    /// Vertex locations, count in 92
    pub vertices: Vec<Vector3>,
    /// Faces as vertex index lists, from the 93 list
    pub faces: Vec<Vec<i64>>,
    /// Edges as vertex index pairs, count in 94
    pub edges: Vec<(i64, i64)>,
    /// Edge crease values (140), count in 95
    pub creases: Vec<f64>,
    section: MeshSection,
}

impl Default for Mesh {
    fn default() -> Self {
        Mesh {
            common: EntityCommon::new(),
            version: 2,
            blend_crease: false,
            subdivision_level: 0,
            vertices: Vec::new(),
            faces: Vec::new(),
            edges: Vec::new(),
            creases: Vec::new(),
            section: MeshSection::Header,
        }
    }
}

/// List length from the file; only steers the list state, never allocates
fn count_of(tag: &Tag) -> usize {
    tag.i64().map_or(0, |n| n.max(0) as usize)
}

impl Mesh {
    fn bind_fields(&mut self, tag: &Tag) -> bool {
        match (tag.code, self.section) {
            (71, _) => self.version = tag.i64().unwrap_or(2),
            (72, _) => self.blend_crease = tag.bool().unwrap_or(false),
            (91, _) => self.subdivision_level = tag.i64().unwrap_or(0),
            (92, _) => self.section = MeshSection::Vertices(count_of(tag)),
            (93, _) => self.section = MeshSection::Faces { entries: count_of(tag), open: 0 },
            (94, _) => {
                let values = count_of(tag).saturating_mul(2);
                self.section = MeshSection::Edges { values, first: None };
            }
            (95, _) => self.section = MeshSection::Creases(count_of(tag)),
            (10, MeshSection::Vertices(remaining)) if remaining > 0 => {
                self.vertices.push(tag.point3().unwrap_or_default());
                self.section = MeshSection::Vertices(remaining - 1);
            }
            (90, MeshSection::Faces { entries, open }) if entries > 0 => {
                let value = tag.i64().unwrap_or(0);
                let open = if open == 0 {
                    self.faces.push(Vec::new());
                    value.max(0) as usize
                } else {
                    if let Some(face) = self.faces.last_mut() {
                        face.push(value);
                    }
                    open - 1
                };
                self.section = MeshSection::Faces { entries: entries - 1, open };
            }
            (90, MeshSection::Edges { values, first }) if values > 0 => {
                let value = tag.i64().unwrap_or(0);
                let first = match first {
                    Some(start) => {
                        self.edges.push((start, value));
                        None
                    }
                    None => Some(value),
                };
                self.section = MeshSection::Edges { values: values - 1, first };
            }
            (140, MeshSection::Creases(remaining)) if remaining > 0 => {
                self.creases.push(tag.f64().unwrap_or(0.0));
                self.section = MeshSection::Creases(remaining - 1);
            }
            _ => return false,
        }
        true
    }
}

impl Entity for Mesh {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "MESH"
    }
}

impl Bind for Mesh {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];

    fn finish(&mut self) {
        self.section = MeshSection::Header;
    }
}
