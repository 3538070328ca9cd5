//! Text style table entry

use super::TableEntry;
use crate::entities::TextGenerationFlags;
use crate::io::dxf::Tags;
use crate::types::Handle;
use once_cell::sync::Lazy;

/// Style used for text whose style name has no STYLE entry
pub static DEFAULT_TEXT_STYLE: Lazy<TextStyle> = Lazy::new(|| TextStyle {
    height: 1.0,
    ..TextStyle::new("STANDARD")
});

/// A text style table entry
#[derive(Debug, Clone)]
pub struct TextStyle {
    /// Unique handle (5)
    pub handle: Handle,
    /// Style name (2)
    pub name: String,
    /// Standard flags (70); bit 1 marks a shape file, not a text style
    pub flags: i16,
    /// Text generation flags (71)
    pub generation_flags: TextGenerationFlags,
    /// Fixed text height (40); 0 means variable
    pub height: f64,
    /// Width factor (41)
    pub width_factor: f64,
    /// Oblique angle in degrees (50)
    pub oblique_angle: f64,
    /// Last height used (42)
    pub last_height: f64,
    /// Primary font file name (3)
    pub font_file: String,
    /// Big font file name (4)
    pub big_font_file: String,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(name: impl Into<String>) -> Self {
        TextStyle {
            handle: Handle::NULL,
            name: name.into(),
            flags: 0,
            generation_flags: TextGenerationFlags::empty(),
            height: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            last_height: 1.0,
            font_file: "txt".to_string(),
            big_font_file: String::new(),
        }
    }

    /// Text is mirrored in X
    pub fn is_backward(&self) -> bool {
        self.generation_flags.contains(TextGenerationFlags::BACKWARD)
    }

    /// Text is mirrored in Y
    pub fn is_upside_down(&self) -> bool {
        self.generation_flags.contains(TextGenerationFlags::UPSIDE_DOWN)
    }

    /// Entry describes a shape file
    pub fn is_shape_file(&self) -> bool {
        self.flags & 1 != 0
    }
}

impl TableEntry for TextStyle {
    const TABLE_NAME: &'static str = "STYLE";

    fn from_tags(tags: &Tags) -> Self {
        let mut style = TextStyle::new("");
        for tag in tags {
            match tag.code {
                5 | 105 => style.handle = tag.handle().unwrap_or_default(),
                2 => style.name = tag.string(),
                70 => style.flags = tag.i64().unwrap_or(0) as i16,
                71 => {
                    style.generation_flags =
                        TextGenerationFlags::from_bits_truncate(tag.i64().unwrap_or(0) as i16)
                }
                40 => style.height = tag.f64().unwrap_or(0.0),
                41 => style.width_factor = tag.f64().unwrap_or(1.0),
                50 => style.oblique_angle = tag.f64().unwrap_or(0.0),
                42 => style.last_height = tag.f64().unwrap_or(1.0),
                3 => style.font_file = tag.string(),
                4 => style.big_font_file = tag.string(),
                _ => {}
            }
        }
        style
    }

    fn handle(&self) -> Handle {
        self.handle
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::Tag;

    #[test]
    fn test_style_from_tags() {
        let style = TextStyle::from_tags(&Tags::new(vec![
            Tag::text(0, "STYLE"),
            Tag::text(2, "ROMANS"),
            Tag::int(70, 0),
            Tag::float(40, 2.5),
            Tag::float(41, 0.8),
            Tag::float(50, 15.0),
            Tag::int(71, 2),
            Tag::float(42, 2.5),
            Tag::text(3, "romans.shx"),
            Tag::text(4, "bigfont.shx"),
        ]));
        assert_eq!(style.name, "ROMANS");
        assert_eq!(style.height, 2.5);
        assert_eq!(style.width_factor, 0.8);
        assert_eq!(style.oblique_angle, 15.0);
        assert!(style.is_backward());
        assert!(!style.is_upside_down());
        assert_eq!(style.font_file, "romans.shx");
        assert_eq!(style.big_font_file, "bigfont.shx");
        assert!(!style.is_shape_file());
    }

    #[test]
    fn test_default_style() {
        assert_eq!(DEFAULT_TEXT_STYLE.name, "STANDARD");
        assert_eq!(DEFAULT_TEXT_STYLE.height, 1.0);
        assert_eq!(DEFAULT_TEXT_STYLE.width_factor, 1.0);
        assert_eq!(DEFAULT_TEXT_STYLE.oblique_angle, 0.0);
        assert_eq!(DEFAULT_TEXT_STYLE.font_file, "txt");
        assert_eq!(DEFAULT_TEXT_STYLE.big_font_file, "");
    }
}
