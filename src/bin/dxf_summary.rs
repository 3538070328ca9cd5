//! Diagnostic: print what dxfgrab reads out of a DXF file.
//!
//! Usage: `dxf-summary <file.dxf> [--no-blocks]`

use anyhow::{bail, Context, Result};
use dxfgrab::{DxfReader, DxfReaderConfiguration, EntityType};
use indexmap::IndexMap;
use std::env;

fn count_types<'a>(entities: impl Iterator<Item = &'a EntityType>) -> IndexMap<&'static str, usize> {
    let mut counts = IndexMap::new();
    for entity in entities {
        *counts.entry(entity.dxftype()).or_insert(0) += 1;
    }
    counts.sort_by(|a, _, b, _| a.cmp(b));
    counts
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        bail!("usage: {} <file.dxf> [--no-blocks]", args.first().map_or("dxf-summary", String::as_str));
    };
    let config = DxfReaderConfiguration {
        grab_blocks: !args.iter().any(|arg| arg == "--no-blocks"),
        ..Default::default()
    };

    let drawing = DxfReader::from_file(path)
        .and_then(|reader| reader.with_configuration(config).read())
        .with_context(|| format!("failed to read {path}"))?;

    println!("file:      {path}");
    println!("version:   {}", drawing.version);
    println!("encoding:  {}", drawing.encoding);
    println!("sections:  {}", drawing.sections().collect::<Vec<_>>().join(", "));
    if !drawing.raw_sections.is_empty() {
        let raw: Vec<&str> = drawing.raw_sections.keys().map(String::as_str).collect();
        println!("raw:       {}", raw.join(", "));
    }
    println!("header:    {} variables", drawing.header.len());
    println!("layers:    {}", drawing.layers.len());
    println!("styles:    {}", drawing.styles.len());
    println!("linetypes: {}", drawing.linetypes.len());
    println!("objects:   {}", drawing.objects.len());

    let block_entities: usize = drawing.blocks.values().map(|block| block.len()).sum();
    println!("blocks:    {} ({block_entities} entities)", drawing.blocks.len());

    println!(
        "entities:  {} ({} model space, {} paper space)",
        drawing.entities.len(),
        drawing.modelspace().count(),
        drawing.paperspace().count()
    );
    for (dxftype, count) in count_types(drawing.entities.iter()) {
        println!("  {dxftype:<12} {count:>6}");
    }

    if !drawing.notifications.is_empty() {
        println!("notifications: {}", drawing.notifications.len());
        for notification in &drawing.notifications {
            println!("  {notification}");
        }
    }
    Ok(())
}
