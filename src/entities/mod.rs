//! DXF entity types and traits

use crate::io::dxf::Tags;
use crate::tables::{Table, TextStyle};
use crate::types::{Color, Handle, LineWeight, Transparency, Vector3};
use indexmap::IndexMap;

pub(crate) mod binding;
pub(crate) mod factory;

pub mod arc;
pub mod attrib;
pub mod block;
pub mod body;
pub mod circle;
pub mod ellipse;
pub mod face3d;
pub mod helix;
pub mod insert;
pub mod light;
pub mod line;
pub mod lwpolyline;
pub mod mesh;
pub mod mtext;
pub mod point;
pub mod polyline;
pub mod ray;
pub mod seqend;
pub mod solid;
pub mod spline;
pub mod text;

pub use arc::Arc;
pub use attrib::{AttDef, Attrib, AttributeFlags};
pub use block::{Block, BlockEnd, BlockFlags};
pub use body::{Body, BodyKind, ModelerGeometry, Surface, SurfaceType};
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use face3d::{Face3D, InvisibleEdgeFlags};
pub use factory::EntityKind;
pub use helix::Helix;
pub use insert::Insert;
pub use light::{Light, LightType};
pub use line::Line;
pub use lwpolyline::{LwPolyline, LwVertex};
pub use mesh::Mesh;
pub use mtext::{AttachmentPoint, MText};
pub use point::Point;
pub use polyline::{
    PolyFace, PolyMesh, Polyline, PolylineFlags, PolylineMode, SmoothSurfaceType, Vertex,
    VertexFlags,
};
pub use ray::{Ray, XLine};
pub use seqend::SeqEnd;
pub use solid::{Solid, Trace};
pub use spline::{Spline, SplineFlags};
pub use text::{Text, TextGenerationFlags, TextHorizontalAlignment, TextVerticalAlignment};

/// Base trait for all DXF entities
pub trait Entity {
    /// Common entity data
    fn common(&self) -> &EntityCommon;

    /// Mutable common entity data
    fn common_mut(&mut self) -> &mut EntityCommon;

    /// DXF type name (`"LINE"`, `"3DSOLID"`, ...)
    fn dxftype(&self) -> &'static str;

    /// The entity's handle
    fn handle(&self) -> Handle {
        self.common().handle
    }

    /// The entity's layer name
    fn layer(&self) -> &str {
        &self.common().layer
    }

    /// The entity's color, true color taking precedence
    fn color(&self) -> Color {
        let common = self.common();
        common.true_color.unwrap_or(common.color)
    }

    /// `true` if the entity lives in paper space
    fn is_paperspace(&self) -> bool {
        self.common().paperspace
    }
}

/// Common entity data shared by all entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Unique handle (5)
    pub handle: Handle,
    /// Owner handle (330)
    pub owner: Handle,
    /// Paper space flag (67)
    pub paperspace: bool,
    /// Layer name (8)
    pub layer: String,
    /// Linetype name (6), `None` means BYLAYER
    pub linetype: Option<String>,
    /// Thickness (39)
    pub thickness: f64,
    /// Linetype scale (48)
    pub ltscale: f64,
    /// Visibility flag (60)
    pub invisible: bool,
    /// ACI color (62)
    pub color: Color,
    /// True color (420)
    pub true_color: Option<Color>,
    /// Transparency (440), `None` means BYLAYER
    pub transparency: Option<Transparency>,
    /// Shadow mode (284)
    pub shadow_mode: Option<i16>,
    /// Line weight (370)
    pub line_weight: LineWeight,
    /// Extrusion direction (210)
    pub extrusion: Vector3,
    /// App-data blocks (`{APPID` ... `}`) in source order
    pub app_data: Vec<Tags>,
    /// Extended data keyed by APPID
    pub xdata: IndexMap<String, Tags>,
}

impl EntityCommon {
    /// Create new common entity data with defaults
    pub fn new() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            owner: Handle::NULL,
            paperspace: false,
            layer: "0".to_string(),
            linetype: None,
            thickness: 0.0,
            ltscale: 1.0,
            invisible: false,
            color: Color::ByLayer,
            true_color: None,
            transparency: None,
            shadow_mode: None,
            line_weight: LineWeight::ByLayer,
            extrusion: Vector3::UNIT_Z,
            app_data: Vec::new(),
            xdata: IndexMap::new(),
        }
    }

    /// App-data block of an application, brackets included
    pub fn get_app_data(&self, appid: &str) -> Option<&Tags> {
        self.app_data
            .iter()
            .find(|block| block.dxftype().and_then(|v| v.strip_prefix('{')) == Some(appid))
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Enumeration of all entity types for type-safe storage
#[derive(Debug, Clone)]
pub enum EntityType {
    /// LINE
    Line(Line),
    /// POINT
    Point(Point),
    /// CIRCLE
    Circle(Circle),
    /// ARC
    Arc(Arc),
    /// TRACE
    Trace(Trace),
    /// SOLID (2D filled quadrilateral)
    Solid(Solid),
    /// 3DFACE
    Face3D(Face3D),
    /// TEXT
    Text(Text),
    /// ATTRIB (block attribute instance)
    Attrib(Attrib),
    /// ATTDEF (block attribute definition)
    AttDef(AttDef),
    /// INSERT (block reference)
    Insert(Insert),
    /// POLYLINE with its vertices
    Polyline(Polyline),
    /// VERTEX, only seen while a POLYLINE is being collected
    Vertex(Vertex),
    /// LWPOLYLINE
    LwPolyline(LwPolyline),
    /// ELLIPSE
    Ellipse(Ellipse),
    /// RAY
    Ray(Ray),
    /// XLINE
    XLine(XLine),
    /// MTEXT
    MText(MText),
    /// LIGHT
    Light(Light),
    /// BODY, REGION or 3DSOLID
    Body(Body),
    /// SURFACE and its specialized kinds
    Surface(Surface),
    /// MESH
    Mesh(Mesh),
    /// SPLINE
    Spline(Spline),
    /// HELIX
    Helix(Helix),
    /// BLOCK (block definition start)
    Block(Block),
    /// ENDBLK (block definition end)
    BlockEnd(BlockEnd),
    /// SEQEND
    SeqEnd(SeqEnd),
}

impl EntityType {
    /// Get a reference to the entity trait object
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Line(e) => e,
            EntityType::Point(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Trace(e) => e,
            EntityType::Solid(e) => e,
            EntityType::Face3D(e) => e,
            EntityType::Text(e) => e,
            EntityType::Attrib(e) => e,
            EntityType::AttDef(e) => e,
            EntityType::Insert(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::Vertex(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::Ray(e) => e,
            EntityType::XLine(e) => e,
            EntityType::MText(e) => e,
            EntityType::Light(e) => e,
            EntityType::Body(e) => e,
            EntityType::Surface(e) => e,
            EntityType::Mesh(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Helix(e) => e,
            EntityType::Block(e) => e,
            EntityType::BlockEnd(e) => e,
            EntityType::SeqEnd(e) => e,
        }
    }

    /// DXF type name
    pub fn dxftype(&self) -> &'static str {
        self.as_entity().dxftype()
    }

    /// Common entity data
    pub fn common(&self) -> &EntityCommon {
        self.as_entity().common()
    }

    /// The entity's handle
    pub fn handle(&self) -> Handle {
        self.as_entity().handle()
    }

    /// The entity's layer name
    pub fn layer(&self) -> &str {
        self.as_entity().layer()
    }

    /// `true` if the entity lives in paper space
    pub fn is_paperspace(&self) -> bool {
        self.as_entity().is_paperspace()
    }

    /// ACIS container of BODY, REGION, 3DSOLID and SURFACE
    pub fn modeler_geometry(&self) -> Option<&ModelerGeometry> {
        match self {
            EntityType::Body(e) => Some(&e.geometry),
            EntityType::Surface(e) => Some(&e.geometry),
            _ => None,
        }
    }

    pub(crate) fn modeler_geometry_mut(&mut self) -> Option<&mut ModelerGeometry> {
        match self {
            EntityType::Body(e) => Some(&mut e.geometry),
            EntityType::Surface(e) => Some(&mut e.geometry),
            _ => None,
        }
    }

    /// Fill unset text properties from the entity's text style
    ///
    /// Applies to TEXT, ATTRIB, ATTDEF, MTEXT and the attributes of an
    /// INSERT; other kinds are left untouched.
    pub fn resolve_text_style(&mut self, styles: &Table<TextStyle>) {
        match self {
            EntityType::Text(e) => e.resolve_style(styles),
            EntityType::Attrib(e) => e.text.resolve_style(styles),
            EntityType::AttDef(e) => e.attrib.text.resolve_style(styles),
            EntityType::MText(e) => e.resolve_style(styles),
            EntityType::Insert(e) => {
                for attrib in &mut e.attribs {
                    attrib.text.resolve_style(styles);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_defaults() {
        let common = EntityCommon::default();
        assert_eq!(common.layer, "0");
        assert_eq!(common.extrusion, Vector3::UNIT_Z);
        assert_eq!(common.ltscale, 1.0);
        assert!(common.linetype.is_none());
    }

    #[test]
    fn test_true_color_precedence() {
        let mut line = Line::default();
        line.common.color = Color::from_index(1);
        assert_eq!(line.color(), Color::from_index(1));
        line.common.true_color = Some(Color::from_rgb(1, 2, 3));
        assert_eq!(line.color(), Color::from_rgb(1, 2, 3));
    }

    #[test]
    fn test_entity_type_delegation() {
        let mut circle = Circle::default();
        circle.common.layer = "WALLS".into();
        circle.common.paperspace = true;
        let entity = EntityType::Circle(circle);
        assert_eq!(entity.dxftype(), "CIRCLE");
        assert_eq!(entity.layer(), "WALLS");
        assert!(entity.is_paperspace());
        assert!(entity.modeler_geometry().is_none());
    }
}
