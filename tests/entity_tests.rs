//! Entity reading through the full pipeline

mod common;

use common::{entity_type_histogram, read_str, DxfBuilder};
use dxfgrab::entities::{AttachmentPoint, BodyKind, PolylineMode, SurfaceType};
use dxfgrab::{EntityType, Handle, Vector2, Vector3};

fn entities(records: &[(&str, &[(i32, &str)])]) -> String {
    records
        .iter()
        .fold(DxfBuilder::new().section("ENTITIES"), |builder, (kind, tags)| {
            builder.entity(kind, tags)
        })
        .end_section()
        .build()
}

#[test]
fn test_common_fields() {
    let drawing = read_str(&entities(&[(
        "LINE",
        &[
            (5, "2F"),
            (330, "1F"),
            (100, "AcDbEntity"),
            (8, "Walls"),
            (6, "DASHED"),
            (62, "1"),
            (370, "25"),
            (100, "AcDbLine"),
            (39, "2.0"),
            (10, "0"),
            (20, "0"),
            (30, "0"),
            (11, "3"),
            (21, "4"),
            (31, "0"),
            (210, "0"),
            (220, "0"),
            (230, "-1"),
        ],
    )]));
    let EntityType::Line(line) = &drawing.entities[0] else {
        panic!("expected LINE");
    };
    assert_eq!(line.common.handle, Handle::new(0x2F));
    assert_eq!(line.common.owner, Handle::new(0x1F));
    assert_eq!(line.common.layer, "Walls");
    assert_eq!(line.common.linetype.as_deref(), Some("DASHED"));
    assert_eq!(line.common.thickness, 2.0);
    assert_eq!(line.common.extrusion, Vector3::new(0.0, 0.0, -1.0));
    assert_eq!(line.length(), 5.0);
}

#[test]
fn test_app_data_and_xdata_are_kept() {
    let drawing = read_str(&entities(&[(
        "CIRCLE",
        &[
            (5, "30"),
            (102, "{ACAD_REACTORS"),
            (330, "31"),
            (102, "}"),
            (8, "0"),
            (40, "1.0"),
            (1001, "MYAPP"),
            (1000, "note"),
        ],
    )]));
    let EntityType::Circle(circle) = &drawing.entities[0] else {
        panic!("expected CIRCLE");
    };
    assert!(circle.common.get_app_data("ACAD_REACTORS").is_some());
    assert!(circle.common.xdata.contains_key("MYAPP"));
    assert!(circle.common.owner.is_null());
}

#[test]
fn test_lwpolyline_vertices() {
    let drawing = read_str(&entities(&[(
        "LWPOLYLINE",
        &[
            (90, "3"),
            (70, "1"),
            (10, "0"),
            (20, "0"),
            (42, "0.5"),
            (10, "1"),
            (20, "0"),
            (10, "1"),
            (20, "1"),
        ],
    )]));
    let EntityType::LwPolyline(polyline) = &drawing.entities[0] else {
        panic!("expected LWPOLYLINE");
    };
    assert!(polyline.is_closed());
    let points: Vec<Vector2> = polyline.points().collect();
    assert_eq!(points, vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), Vector2::new(1.0, 1.0)]);
    assert_eq!(polyline.vertices[0].bulge, 0.5);
    assert_eq!(polyline.vertices[1].bulge, 0.0);
}

#[test]
fn test_polyface_mesh() {
    let drawing = read_str(&entities(&[
        ("POLYLINE", &[(66, "1"), (70, "64"), (71, "3"), (72, "1")]),
        ("VERTEX", &[(10, "0"), (20, "0"), (30, "0"), (70, "192")]),
        ("VERTEX", &[(10, "1"), (20, "0"), (30, "0"), (70, "192")]),
        ("VERTEX", &[(10, "0"), (20, "1"), (30, "0"), (70, "192")]),
        ("VERTEX", &[(10, "0"), (20, "0"), (30, "0"), (70, "128"), (71, "1"), (72, "2"), (73, "3")]),
        ("SEQEND", &[]),
    ]));
    let EntityType::Polyline(polyline) = &drawing.entities[0] else {
        panic!("expected POLYLINE");
    };
    assert_eq!(polyline.mode(), PolylineMode::PolyFace);
    let polyface = polyline.as_polyface().unwrap();
    assert_eq!(polyface.face_count(), 1);
    let face: Vec<Vector3> = polyface.faces().next().unwrap().iter().map(|v| v.location).collect();
    assert_eq!(face, vec![Vector3::ZERO, Vector3::UNIT_X, Vector3::new(0.0, 1.0, 0.0)]);
}

#[test]
fn test_insert_without_attribs_does_not_collect() {
    let drawing = read_str(&entities(&[
        ("INSERT", &[(2, "DOOR"), (10, "1"), (20, "2"), (30, "0"), (41, "2")]),
        ("LINE", &[]),
    ]));
    assert_eq!(drawing.entities.len(), 2);
    let EntityType::Insert(insert) = &drawing.entities[0] else {
        panic!("expected INSERT");
    };
    assert_eq!(insert.name, "DOOR");
    assert_eq!(insert.scale, Vector3::new(2.0, 1.0, 1.0));
    assert!(insert.attribs.is_empty());
}

#[test]
fn test_mtext() {
    let drawing = read_str(&entities(&[(
        "MTEXT",
        &[
            (10, "0"),
            (20, "0"),
            (71, "5"),
            (3, "{\\fArial|b1;First}\\P"),
            (1, "Second line"),
            (11, "0"),
            (21, "1"),
            (31, "0"),
        ],
    )]));
    let EntityType::MText(mtext) = &drawing.entities[0] else {
        panic!("expected MTEXT");
    };
    assert_eq!(mtext.attachment_point, AttachmentPoint::MiddleCenter);
    assert_eq!(mtext.lines(), vec!["First", "Second line"]);
    assert!((mtext.rotation_angle() - 90.0).abs() < 1e-9);
    assert_eq!(mtext.height, 1.0);
    assert_eq!(mtext.font.as_deref(), Some("txt"));
}

#[test]
fn test_text_style_resolution() {
    let text = DxfBuilder::new()
        .table(
            "STYLE",
            &[&[(2, "Narrow"), (70, "0"), (40, "0"), (41, "0.75"), (50, "15"), (71, "2"), (3, "romans.shx")]],
        )
        .section("ENTITIES")
        .entity("TEXT", &[(10, "0"), (20, "0"), (40, "3"), (1, "A"), (7, "NARROW")])
        .entity("TEXT", &[(10, "0"), (20, "0"), (1, "B"), (7, "MISSING")])
        .end_section()
        .build();
    let drawing = read_str(&text);

    let EntityType::Text(narrow) = &drawing.entities[0] else {
        panic!("expected TEXT");
    };
    assert_eq!(narrow.height, 3.0);
    assert_eq!(narrow.width_factor, 0.75);
    assert_eq!(narrow.oblique_angle, Some(15.0));
    assert_eq!(narrow.is_backwards, Some(true));
    assert_eq!(narrow.is_upside_down, Some(false));
    assert_eq!(narrow.font.as_deref(), Some("romans.shx"));

    let EntityType::Text(fallback) = &drawing.entities[1] else {
        panic!("expected TEXT");
    };
    assert_eq!(fallback.height, 1.0);
    assert_eq!(fallback.width_factor, 1.0);
    assert_eq!(fallback.font.as_deref(), Some("txt"));

    let mut again = narrow.clone();
    again.resolve_style(&drawing.styles);
    assert_eq!(format!("{again:?}"), format!("{narrow:?}"));
}

#[test]
fn test_text_style_resolution_disabled() {
    let text = entities(&[("TEXT", &[(1, "A")])]);
    let config = dxfgrab::DxfReaderConfiguration {
        resolve_text_styles: false,
        ..Default::default()
    };
    let drawing = common::read_bytes_with(text.into_bytes(), config).unwrap();
    let EntityType::Text(text) = &drawing.entities[0] else {
        panic!("expected TEXT");
    };
    assert_eq!(text.height, 0.0);
    assert!(text.font.is_none());
}

#[test]
fn test_spline() {
    let drawing = read_str(&entities(&[(
        "SPLINE",
        &[
            (100, "AcDbEntity"),
            (8, "0"),
            (100, "AcDbSpline"),
            (210, "0"),
            (220, "0"),
            (230, "1"),
            (70, "8"),
            (71, "3"),
            (72, "8"),
            (73, "4"),
            (74, "0"),
            (40, "0"),
            (40, "0"),
            (40, "0"),
            (40, "0"),
            (40, "1"),
            (40, "1"),
            (40, "1"),
            (40, "1"),
            (10, "0"),
            (20, "0"),
            (30, "0"),
            (10, "1"),
            (20, "1"),
            (30, "0"),
            (10, "2"),
            (20, "1"),
            (30, "0"),
            (10, "3"),
            (20, "0"),
            (30, "0"),
        ],
    )]));
    let EntityType::Spline(spline) = &drawing.entities[0] else {
        panic!("expected SPLINE");
    };
    assert!(spline.is_planar());
    assert!(!spline.is_closed());
    assert_eq!(spline.degree, 3);
    assert_eq!(spline.knots.len(), 8);
    assert_eq!(spline.control_points.len(), 4);
    assert_eq!(spline.normal(), Vector3::UNIT_Z);
}

#[test]
fn test_mesh() {
    let drawing = read_str(&entities(&[(
        "MESH",
        &[
            (100, "AcDbEntity"),
            (8, "0"),
            (100, "AcDbSubDMesh"),
            (71, "2"),
            (72, "0"),
            (91, "0"),
            (92, "3"),
            (10, "0"),
            (20, "0"),
            (30, "0"),
            (10, "1"),
            (20, "0"),
            (30, "0"),
            (10, "0"),
            (20, "1"),
            (30, "0"),
            (93, "4"),
            (90, "3"),
            (90, "0"),
            (90, "1"),
            (90, "2"),
            (94, "1"),
            (90, "0"),
            (90, "1"),
            (95, "1"),
            (140, "0.5"),
        ],
    )]));
    let EntityType::Mesh(mesh) = &drawing.entities[0] else {
        panic!("expected MESH");
    };
    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.faces, vec![vec![0, 1, 2]]);
    assert_eq!(mesh.edges, vec![(0, 1)]);
    assert_eq!(mesh.creases, vec![0.5]);
}

#[test]
fn test_region_acis_text() {
    let drawing = read_str(&entities(&[(
        "REGION",
        &[
            (5, "40"),
            (100, "AcDbEntity"),
            (8, "0"),
            (100, "AcDbModelerGeometry"),
            (70, "1"),
            (1, "koo o n o"),
            (3, "  "),
        ],
    )]));
    let EntityType::Body(region) = &drawing.entities[0] else {
        panic!("expected REGION");
    };
    assert_eq!(region.kind, BodyKind::Region);
    assert_eq!(region.geometry.version, 1);
    assert_eq!(region.geometry.acis_text(), "400 0 1 0  ");
}

#[test]
fn test_sab_data_attached_from_acdsdata() {
    let text = DxfBuilder::new()
        .version_header("AC1027", "ANSI_1252")
        .section("BLOCKS")
        .entity("BLOCK", &[(2, "SOLIDS")])
        .entity("3DSOLID", &[(5, "2C"), (100, "AcDbEntity"), (8, "0"), (100, "AcDbModelerGeometry"), (70, "1")])
        .entity("ENDBLK", &[])
        .end_section()
        .section("ENTITIES")
        .entity("3DSOLID", &[(5, "2B"), (100, "AcDbEntity"), (8, "0"), (100, "AcDbModelerGeometry"), (70, "1")])
        .entity("EXTRUDEDSURFACE", &[(5, "2D"), (100, "AcDbEntity"), (8, "0"), (100, "AcDbModelerGeometry"), (70, "1")])
        .end_section()
        .section("ACDSDATA")
        .tag(70, 2)
        .tag(71, 2)
        .entity("ACDSRECORD", &[(90, "1"), (2, "AcDbDs::ID"), (280, "10"), (320, "2B"), (2, "ASM_Data"), (280, "15"), (94, "4"), (310, "53414220")])
        .entity("ACDSRECORD", &[(90, "1"), (2, "AcDbDs::ID"), (280, "10"), (320, "2C"), (2, "ASM_Data"), (280, "15"), (94, "2"), (310, "FFEE")])
        .end_section()
        .build();
    let drawing = read_str(&text);

    let EntityType::Body(solid) = &drawing.entities[0] else {
        panic!("expected 3DSOLID");
    };
    assert_eq!(solid.kind, BodyKind::Solid3D);
    assert_eq!(solid.geometry.sab.as_deref(), Some(&b"SAB "[..]));

    let EntityType::Surface(surface) = &drawing.entities[1] else {
        panic!("expected EXTRUDEDSURFACE");
    };
    assert_eq!(surface.surface_type, SurfaceType::Extruded);
    assert!(surface.geometry.sab.is_none());

    let in_block = drawing.block("SOLIDS").unwrap();
    assert_eq!(in_block.entities[0].modeler_geometry().and_then(|g| g.sab.clone()), Some(vec![0xFF, 0xEE]));
}

#[test]
fn test_every_kind_reads() {
    let drawing = read_str(&entities(&[
        ("POINT", &[(10, "1"), (20, "1")]),
        ("ARC", &[(40, "1"), (50, "0"), (51, "90")]),
        ("TRACE", &[]),
        ("SOLID", &[]),
        ("3DFACE", &[]),
        ("ELLIPSE", &[(40, "0.5")]),
        ("RAY", &[]),
        ("XLINE", &[]),
        ("LIGHT", &[(1, "Sun"), (70, "1")]),
        ("BODY", &[]),
        ("HELIX", &[(100, "AcDbSpline"), (71, "3"), (100, "AcDbHelix"), (40, "2"), (41, "5")]),
        ("PLANESURFACE", &[]),
    ]));
    let histogram = entity_type_histogram(&drawing);
    assert_eq!(histogram.len(), 12);
    assert!(histogram.values().all(|count| *count == 1));
    assert!(drawing.notifications.is_empty());
}
