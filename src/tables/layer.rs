//! Layer table entry

use super::TableEntry;
use crate::io::dxf::Tags;
use crate::types::{Color, Handle, LineWeight};
use bitflags::bitflags;

bitflags! {
    /// Layer flags (70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayerFlags: i16 {
        /// Frozen in all viewports
        const FROZEN = 1;
        /// Frozen by default in new viewports
        const FROZEN_IN_NEW_VIEWPORTS = 2;
        /// Locked
        const LOCKED = 4;
    }
}

/// A layer table entry
#[derive(Debug, Clone)]
pub struct Layer {
    /// Unique handle (5)
    pub handle: Handle,
    /// Layer name (2)
    pub name: String,
    /// Layer flags (70)
    pub flags: LayerFlags,
    /// Layer color (62); the sign of the raw value is the on/off state
    pub color: Color,
    /// True color (420)
    pub true_color: Option<Color>,
    /// Layer is switched on
    pub on: bool,
    /// Line type name (6)
    pub linetype: String,
    /// Line weight (370)
    pub line_weight: LineWeight,
    /// Is this layer plottable? (290)
    pub plot: bool,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            handle: Handle::NULL,
            name: name.into(),
            flags: LayerFlags::empty(),
            color: Color::Index(7),
            true_color: None,
            on: true,
            linetype: "Continuous".to_string(),
            line_weight: LineWeight::Default,
            plot: true,
        }
    }

    /// Check if the layer is frozen
    pub fn is_frozen(&self) -> bool {
        self.flags.contains(LayerFlags::FROZEN)
    }

    /// Check if the layer is locked
    pub fn is_locked(&self) -> bool {
        self.flags.contains(LayerFlags::LOCKED)
    }

    /// Check if the layer is off
    pub fn is_off(&self) -> bool {
        !self.on
    }

    /// Check if the layer is visible (on and not frozen)
    pub fn is_visible(&self) -> bool {
        self.on && !self.is_frozen()
    }
}

impl TableEntry for Layer {
    const TABLE_NAME: &'static str = "LAYER";

    fn from_tags(tags: &Tags) -> Self {
        let mut layer = Layer::new("");
        for tag in tags {
            match tag.code {
                5 | 105 => layer.handle = tag.handle().unwrap_or_default(),
                2 => layer.name = tag.string(),
                70 => layer.flags = LayerFlags::from_bits_truncate(tag.i64().unwrap_or(0) as i16),
                62 => {
                    let index = tag.i64().unwrap_or(7);
                    layer.on = index >= 0;
                    layer.color = Color::from_index(index);
                }
                420 => layer.true_color = tag.i64().map(Color::from_true_color),
                6 => layer.linetype = tag.string(),
                370 => layer.line_weight = LineWeight::from_value(tag.i64().unwrap_or(-3)),
                290 => layer.plot = tag.bool().unwrap_or(true),
                _ => {}
            }
        }
        layer
    }

    fn handle(&self) -> Handle {
        self.handle
    }

    fn name(&self) -> &str {
        &self.name
    }
}
