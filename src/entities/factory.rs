//! Entity factory and composite collector
//!
//! The factory turns one record (the tags from a `0` tag up to the next) into
//! a typed entity. The collector sits behind it and folds VERTEX / ATTRIB
//! runs into the POLYLINE or INSERT that precedes them, up to the closing
//! SEQEND.

use super::binding::bind;
use super::{Body, BodyKind, Entity, EntityType, Surface, SurfaceType};
use crate::error::Result;
use crate::io::dxf::{ClassifiedTags, Tags};
use crate::notification::{NotificationCollection, NotificationType};
use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Every DXF entity type the factory understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Line,
    Point,
    Circle,
    Arc,
    Trace,
    Solid,
    Face3D,
    Text,
    Attrib,
    AttDef,
    Insert,
    Polyline,
    Vertex,
    LwPolyline,
    Ellipse,
    Ray,
    XLine,
    MText,
    Light,
    Body,
    Region,
    Solid3D,
    Surface,
    ExtrudedSurface,
    LoftedSurface,
    RevolvedSurface,
    SweptSurface,
    PlaneSurface,
    Mesh,
    Spline,
    Helix,
    Block,
    BlockEnd,
    SeqEnd,
}

impl EntityKind {
    /// All kinds, in no particular order
    pub const ALL: &'static [EntityKind] = &[
        EntityKind::Line,
        EntityKind::Point,
        EntityKind::Circle,
        EntityKind::Arc,
        EntityKind::Trace,
        EntityKind::Solid,
        EntityKind::Face3D,
        EntityKind::Text,
        EntityKind::Attrib,
        EntityKind::AttDef,
        EntityKind::Insert,
        EntityKind::Polyline,
        EntityKind::Vertex,
        EntityKind::LwPolyline,
        EntityKind::Ellipse,
        EntityKind::Ray,
        EntityKind::XLine,
        EntityKind::MText,
        EntityKind::Light,
        EntityKind::Body,
        EntityKind::Region,
        EntityKind::Solid3D,
        EntityKind::Surface,
        EntityKind::ExtrudedSurface,
        EntityKind::LoftedSurface,
        EntityKind::RevolvedSurface,
        EntityKind::SweptSurface,
        EntityKind::PlaneSurface,
        EntityKind::Mesh,
        EntityKind::Spline,
        EntityKind::Helix,
        EntityKind::Block,
        EntityKind::BlockEnd,
        EntityKind::SeqEnd,
    ];

    /// DXF type name
    pub fn dxftype(&self) -> &'static str {
        match self {
            EntityKind::Line => "LINE",
            EntityKind::Point => "POINT",
            EntityKind::Circle => "CIRCLE",
            EntityKind::Arc => "ARC",
            EntityKind::Trace => "TRACE",
            EntityKind::Solid => "SOLID",
            EntityKind::Face3D => "3DFACE",
            EntityKind::Text => "TEXT",
            EntityKind::Attrib => "ATTRIB",
            EntityKind::AttDef => "ATTDEF",
            EntityKind::Insert => "INSERT",
            EntityKind::Polyline => "POLYLINE",
            EntityKind::Vertex => "VERTEX",
            EntityKind::LwPolyline => "LWPOLYLINE",
            EntityKind::Ellipse => "ELLIPSE",
            EntityKind::Ray => "RAY",
            EntityKind::XLine => "XLINE",
            EntityKind::MText => "MTEXT",
            EntityKind::Light => "LIGHT",
            EntityKind::Body => "BODY",
            EntityKind::Region => "REGION",
            EntityKind::Solid3D => "3DSOLID",
            EntityKind::Surface => "SURFACE",
            EntityKind::ExtrudedSurface => "EXTRUDEDSURFACE",
            EntityKind::LoftedSurface => "LOFTEDSURFACE",
            EntityKind::RevolvedSurface => "REVOLVEDSURFACE",
            EntityKind::SweptSurface => "SWEPTSURFACE",
            EntityKind::PlaneSurface => "PLANESURFACE",
            EntityKind::Mesh => "MESH",
            EntityKind::Spline => "SPLINE",
            EntityKind::Helix => "HELIX",
            EntityKind::Block => "BLOCK",
            EntityKind::BlockEnd => "ENDBLK",
            EntityKind::SeqEnd => "SEQEND",
        }
    }

    /// Look up a kind by its DXF type name
    pub fn from_dxftype(name: &str) -> Option<EntityKind> {
        KINDS.get(name).copied()
    }

    /// Build an entity of this kind from a classified record
    pub(crate) fn build(self, record: ClassifiedTags) -> EntityType {
        match self {
            EntityKind::Line => EntityType::Line(bind(record)),
            EntityKind::Point => EntityType::Point(bind(record)),
            EntityKind::Circle => EntityType::Circle(bind(record)),
            EntityKind::Arc => EntityType::Arc(bind(record)),
            EntityKind::Trace => EntityType::Trace(bind(record)),
            EntityKind::Solid => EntityType::Solid(bind(record)),
            EntityKind::Face3D => EntityType::Face3D(bind(record)),
            EntityKind::Text => EntityType::Text(bind(record)),
            EntityKind::Attrib => EntityType::Attrib(bind(record)),
            EntityKind::AttDef => EntityType::AttDef(bind(record)),
            EntityKind::Insert => EntityType::Insert(bind(record)),
            EntityKind::Polyline => EntityType::Polyline(bind(record)),
            EntityKind::Vertex => EntityType::Vertex(bind(record)),
            EntityKind::LwPolyline => EntityType::LwPolyline(bind(record)),
            EntityKind::Ellipse => EntityType::Ellipse(bind(record)),
            EntityKind::Ray => EntityType::Ray(bind(record)),
            EntityKind::XLine => EntityType::XLine(bind(record)),
            EntityKind::MText => EntityType::MText(bind(record)),
            EntityKind::Light => EntityType::Light(bind(record)),
            EntityKind::Body => body(record, BodyKind::Body),
            EntityKind::Region => body(record, BodyKind::Region),
            EntityKind::Solid3D => body(record, BodyKind::Solid3D),
            EntityKind::Surface => surface(record, SurfaceType::Generic),
            EntityKind::ExtrudedSurface => surface(record, SurfaceType::Extruded),
            EntityKind::LoftedSurface => surface(record, SurfaceType::Lofted),
            EntityKind::RevolvedSurface => surface(record, SurfaceType::Revolved),
            EntityKind::SweptSurface => surface(record, SurfaceType::Swept),
            EntityKind::PlaneSurface => surface(record, SurfaceType::Plane),
            EntityKind::Mesh => EntityType::Mesh(bind(record)),
            EntityKind::Spline => EntityType::Spline(bind(record)),
            EntityKind::Helix => EntityType::Helix(bind(record)),
            EntityKind::Block => EntityType::Block(bind(record)),
            EntityKind::BlockEnd => EntityType::BlockEnd(bind(record)),
            EntityKind::SeqEnd => EntityType::SeqEnd(bind(record)),
        }
    }
}

static KINDS: Lazy<AHashMap<&'static str, EntityKind>> =
    Lazy::new(|| EntityKind::ALL.iter().map(|kind| (kind.dxftype(), *kind)).collect());

fn body(record: ClassifiedTags, kind: BodyKind) -> EntityType {
    let mut body: Body = bind(record);
    body.kind = kind;
    EntityType::Body(body)
}

fn surface(record: ClassifiedTags, surface_type: SurfaceType) -> EntityType {
    let mut surface: Surface = bind(record);
    surface.surface_type = surface_type;
    EntityType::Surface(surface)
}

/// Build one entity record; `None` for unknown types
pub(crate) fn build_entity(tags: Tags) -> Result<Option<EntityType>> {
    let Some(kind) = tags.dxftype().and_then(EntityKind::from_dxftype) else {
        return Ok(None);
    };
    let record = ClassifiedTags::new(tags)?;
    Ok(Some(kind.build(record)))
}

enum CollectorState {
    Idle,
    Collecting {
        parent: EntityType,
        children: Vec<EntityType>,
    },
}

/// Folds POLYLINE/VERTEX/SEQEND and INSERT/ATTRIB/SEQEND runs into
/// composite entities
///
/// One collector serves one entity list: the ENTITIES section or a single
/// block definition.
pub(crate) struct EntityCollector {
    state: CollectorState,
    entities: Vec<EntityType>,
    notifications: NotificationCollection,
    /// Source line of the record being pushed
    line: usize,
}

impl EntityCollector {
    pub(crate) fn new() -> Self {
        EntityCollector {
            state: CollectorState::Idle,
            entities: Vec::new(),
            notifications: NotificationCollection::new(),
            line: 0,
        }
    }

    /// Build a record and feed it to the collector; unknown types are skipped
    pub(crate) fn push_tags(&mut self, tags: Tags) -> Result<()> {
        let dxftype = tags.dxftype().unwrap_or_default().to_string();
        self.line = tags.line();
        match build_entity(tags)? {
            Some(entity) => self.push(entity),
            None => {
                log::debug!("skipping unsupported entity type {dxftype:?} at line {}", self.line);
                self.notifications.notify_at(
                    NotificationType::NotSupported,
                    format!("entity type {dxftype} is not supported"),
                    self.line,
                );
            }
        }
        Ok(())
    }

    pub(crate) fn push(&mut self, entity: EntityType) {
        match entity {
            EntityType::Vertex(_) | EntityType::Attrib(_) => match &mut self.state {
                CollectorState::Collecting { children, .. } => children.push(entity),
                CollectorState::Idle => self.warn(format!(
                    "dropped {} {} outside of a POLYLINE or INSERT",
                    entity.dxftype(),
                    entity.handle()
                )),
            },
            EntityType::SeqEnd(_) => match self.state {
                CollectorState::Collecting { .. } => self.close(),
                CollectorState::Idle => self.warn(format!("dropped stray SEQEND {}", entity.handle())),
            },
            entity => {
                if let CollectorState::Collecting { parent, .. } = &self.state {
                    let message = format!("{} {} not closed by SEQEND", parent.dxftype(), parent.handle());
                    self.warn(message);
                    self.close();
                }
                if opens_sequence(&entity) {
                    self.state = CollectorState::Collecting {
                        parent: entity,
                        children: Vec::new(),
                    };
                } else {
                    self.entities.push(entity);
                }
            }
        }
    }

    /// Flush a pending composite, hand over the notifications and return
    /// the collected entities
    pub(crate) fn finish(mut self, notifications: &mut NotificationCollection) -> Vec<EntityType> {
        self.close();
        notifications.extend(self.notifications);
        self.entities
    }

    fn close(&mut self) {
        if let CollectorState::Collecting { mut parent, children } =
            std::mem::replace(&mut self.state, CollectorState::Idle)
        {
            self.append_data(&mut parent, children);
            self.entities.push(parent);
        }
    }

    fn append_data(&mut self, parent: &mut EntityType, children: Vec<EntityType>) {
        for child in children {
            match (&mut *parent, child) {
                (EntityType::Polyline(polyline), EntityType::Vertex(vertex)) => polyline.vertices.push(vertex),
                (EntityType::Insert(insert), EntityType::Attrib(attrib)) => insert.attribs.push(attrib),
                (parent, child) => {
                    let message = format!("dropped {} {} inside {}", child.dxftype(), child.handle(), parent.dxftype());
                    self.warn(message);
                }
            }
        }
    }

    fn warn(&mut self, message: String) {
        log::warn!("line {}: {message}", self.line);
        self.notifications.notify_at(NotificationType::Warning, message, self.line);
    }
}

fn opens_sequence(entity: &EntityType) -> bool {
    match entity {
        EntityType::Polyline(_) => true,
        EntityType::Insert(insert) => insert.attribs_follow,
        _ => false,
    }
}
