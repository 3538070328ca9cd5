//! # dxfgrab
//!
//! Read ASCII DXF files into a structured [`Drawing`]: header variables,
//! LAYER / STYLE / LTYPE tables, block definitions, entities and objects.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! let drawing = dxfgrab::readfile("sample.dxf")?;
//!
//! println!("{} / {}", drawing.version, drawing.encoding);
//! for entity in drawing.modelspace() {
//!     println!("{} on layer {}", entity.dxftype(), entity.layer());
//! }
//! # Ok::<(), dxfgrab::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`io::dxf::TagLexer`] - typed tags from the raw line stream
//! - [`io::dxf::Tags`], [`io::dxf::TagGroups`], [`io::dxf::ClassifiedTags`] - tag runs and records
//! - [`entities`] - entity model, bound from classified records
//! - [`Drawing`] - the assembled result, with the notifications raised while reading
//!
//! Reading never writes: the drawing is a snapshot of the file content.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod drawing;
pub mod entities;
pub mod error;
pub mod io;
pub mod notification;
pub mod objects;
pub mod tables;
pub mod types;

pub use drawing::{Drawing, Header};
pub use error::{DxfError, Result};
pub use io::dxf::{DxfReader, DxfReaderConfiguration};
pub use notification::{Notification, NotificationCollection, NotificationType};

pub use types::{Color, DxfVersion, Handle, LineWeight, Transparency, Vector2, Vector3};

pub use entities::{
    Arc, AttDef, Attrib, Block, Body, Circle, Ellipse, Entity, EntityKind, EntityType, Face3D, Helix, Insert, Light,
    Line, LwPolyline, MText, Mesh, Point, Polyline, Ray, Solid, Spline, Surface, Text, Trace, XLine,
};

pub use tables::{Layer, Linetype, Table, TableEntry, TextStyle};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read a drawing from a byte stream
///
/// The stream is decoded as UTF-8 until the HEADER section names its code
/// page. See [`DxfReader::from_reader`].
pub fn read<R: std::io::Read + 'static>(reader: R) -> Result<Drawing> {
    DxfReader::from_reader(reader).read()
}

/// Read a drawing from a file
pub fn readfile<P: AsRef<std::path::Path>>(path: P) -> Result<Drawing> {
    DxfReader::from_file(path)?.read()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_read_empty_stream() {
        let drawing = read(std::io::empty()).unwrap();
        assert_eq!(drawing.version, DxfVersion::AC1009);
        assert!(drawing.entities.is_empty());
        assert_eq!(drawing.sections().count(), 0);
    }

    #[test]
    fn test_read_eof_only() {
        let drawing: Drawing = "0\nEOF\n".parse().unwrap();
        assert!(drawing.notifications.is_empty());
        assert_eq!(drawing.encoding, "utf-8");
    }
}
