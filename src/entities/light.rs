//! Light entity

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::types::Vector3;

/// Kind of light source (70)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightType {
    /// Distant light, parallel rays
    Distant,
    /// Point light, radiating in all directions
    #[default]
    Point,
    /// Spot light, cone shaped
    Spot,
}

impl LightType {
    /// Create from the DXF value
    pub fn from_value(value: i64) -> Self {
        match value {
            1 => LightType::Distant,
            3 => LightType::Spot,
            _ => LightType::Point,
        }
    }
}

/// A light source
#[derive(Debug, Clone)]
pub struct Light {
    /// Common entity data
    pub common: EntityCommon,
    /// Version number (90)
    pub version: i64,
    /// Light name (1)
    pub name: String,
    /// Light type (70)
    pub light_type: LightType,
    /// Light is switched on (290)
    pub status: bool,
    /// Glyph is plotted (291)
    pub plot_glyph: bool,
    /// Intensity (40)
    pub intensity: f64,
    /// Light position (10)
    pub position: Vector3,
    /// Target location (11)
    pub target: Vector3,
    /// Attenuation type (72): 0 none, 1 inverse linear, 2 inverse square
    pub attenuation_type: i64,
    /// Attenuation limits are used (292)
    pub use_attenuation_limits: bool,
    /// Attenuation start limit (41)
    pub attenuation_start_limit: f64,
    /// Attenuation end limit (42)
    pub attenuation_end_limit: f64,
    /// Hotspot angle in degrees (50)
    pub hotspot_angle: f64,
    /// Falloff angle in degrees (51)
    pub falloff_angle: f64,
    /// Light casts shadows (293)
    pub cast_shadows: bool,
    /// Shadow type (73): 0 ray traced, 1 shadow maps
    pub shadow_type: i64,
    /// Shadow map size (91)
    pub shadow_map_size: i64,
    /// Shadow map softness (280)
    pub shadow_softness: i64,
}

impl Default for Light {
    fn default() -> Self {
        Light {
            common: EntityCommon::new(),
            version: 0,
            name: String::new(),
            light_type: LightType::Point,
            status: true,
            plot_glyph: false,
            intensity: 1.0,
            position: Vector3::ZERO,
            target: Vector3::ZERO,
            attenuation_type: 0,
            use_attenuation_limits: false,
            attenuation_start_limit: 0.0,
            attenuation_end_limit: 0.0,
            hotspot_angle: 0.0,
            falloff_angle: 0.0,
            cast_shadows: false,
            shadow_type: 0,
            shadow_map_size: 0,
            shadow_softness: 0,
        }
    }
}

impl Light {
    fn bind_fields(&mut self, tag: &Tag) -> bool {
        match tag.code {
            90 => self.version = tag.i64().unwrap_or(0),
            1 => self.name = tag.string(),
            70 => self.light_type = LightType::from_value(tag.i64().unwrap_or(2)),
            290 => self.status = tag.bool().unwrap_or(true),
            291 => self.plot_glyph = tag.bool().unwrap_or(false),
            40 => self.intensity = tag.f64().unwrap_or(1.0),
            10 => self.position = tag.point3().unwrap_or_default(),
            11 => self.target = tag.point3().unwrap_or_default(),
            72 => self.attenuation_type = tag.i64().unwrap_or(0),
            292 => self.use_attenuation_limits = tag.bool().unwrap_or(false),
            41 => self.attenuation_start_limit = tag.f64().unwrap_or(0.0),
            42 => self.attenuation_end_limit = tag.f64().unwrap_or(0.0),
            50 => self.hotspot_angle = tag.f64().unwrap_or(0.0),
            51 => self.falloff_angle = tag.f64().unwrap_or(0.0),
            293 => self.cast_shadows = tag.bool().unwrap_or(false),
            73 => self.shadow_type = tag.i64().unwrap_or(0),
            91 => self.shadow_map_size = tag.i64().unwrap_or(0),
            280 => self.shadow_softness = tag.i64().unwrap_or(0),
            _ => return false,
        }
        true
    }
}

impl Entity for Light {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "LIGHT"
    }
}

impl Bind for Light {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}
