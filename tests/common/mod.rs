//! Shared test utilities for dxfgrab integration tests.
//!
//! Test crates import them via `mod common;`: the [`builders::DxfBuilder`]
//! fixture writer, read helpers and entity counting.

#![allow(dead_code)]

pub mod builders;

pub use builders::DxfBuilder;

use dxfgrab::{Drawing, DxfReader, DxfReaderConfiguration, EntityType};
use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::PathBuf;

// ===========================================================================
// Paths
// ===========================================================================

/// Path in the system temp directory, unique per process and name.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dxfgrab-{}-{name}", std::process::id()))
}

// ===========================================================================
// Read helpers
// ===========================================================================

/// Read DXF text with the default configuration.
pub fn read_str(text: &str) -> Drawing {
    text.parse()
        .unwrap_or_else(|e| panic!("Failed to read DXF: {e:?}"))
}

/// Read DXF bytes with the given configuration.
pub fn read_bytes_with(data: Vec<u8>, config: DxfReaderConfiguration) -> dxfgrab::Result<Drawing> {
    DxfReader::from_reader(Cursor::new(data))
        .with_configuration(config)
        .read()
}

/// Write `data` to a temp file, read it through the file entry point and
/// delete the file again.
pub fn read_via_file(name: &str, data: &[u8]) -> Drawing {
    let path = temp_path(name);
    std::fs::write(&path, data).unwrap_or_else(|e| panic!("Cannot write {}: {e}", path.display()));
    let result = dxfgrab::readfile(&path);
    let _ = std::fs::remove_file(&path);
    result.unwrap_or_else(|e| panic!("Failed to read {name}: {e:?}"))
}

// ===========================================================================
// Entity utilities
// ===========================================================================

/// DXF type names of the drawing's entities, in order.
pub fn entity_types(drawing: &Drawing) -> Vec<&'static str> {
    drawing.entities.iter().map(EntityType::dxftype).collect()
}

/// Build a sorted frequency map of entity type names.
pub fn entity_type_histogram(drawing: &Drawing) -> BTreeMap<&'static str, usize> {
    let mut map = BTreeMap::new();
    for e in &drawing.entities {
        *map.entry(e.dxftype()).or_insert(0) += 1;
    }
    map
}
