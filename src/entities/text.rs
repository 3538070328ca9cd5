//! Text entity

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::tables::{Table, TextStyle, DEFAULT_TEXT_STYLE};
use crate::types::Vector3;
use bitflags::bitflags;

bitflags! {
    /// Text generation flags (71), shared with the STYLE table
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextGenerationFlags: i16 {
        /// Mirrored in X
        const BACKWARD = 2;
        /// Mirrored in Y
        const UPSIDE_DOWN = 4;
    }
}

/// Text horizontal alignment (72)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextHorizontalAlignment {
    /// Left aligned
    #[default]
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
    /// Aligned (fit between two points)
    Aligned,
    /// Middle (centered horizontally and vertically)
    Middle,
    /// Fit (fit between two points, adjust height)
    Fit,
}

impl TextHorizontalAlignment {
    /// Create from the DXF value
    pub fn from_value(value: i64) -> Self {
        match value {
            1 => TextHorizontalAlignment::Center,
            2 => TextHorizontalAlignment::Right,
            3 => TextHorizontalAlignment::Aligned,
            4 => TextHorizontalAlignment::Middle,
            5 => TextHorizontalAlignment::Fit,
            _ => TextHorizontalAlignment::Left,
        }
    }
}

/// Text vertical alignment (73, 74 for attributes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVerticalAlignment {
    /// Baseline
    #[default]
    Baseline,
    /// Bottom
    Bottom,
    /// Middle
    Middle,
    /// Top
    Top,
}

impl TextVerticalAlignment {
    /// Create from the DXF value
    pub fn from_value(value: i64) -> Self {
        match value {
            1 => TextVerticalAlignment::Bottom,
            2 => TextVerticalAlignment::Middle,
            3 => TextVerticalAlignment::Top,
            _ => TextVerticalAlignment::Baseline,
        }
    }
}

/// A single-line text entity
///
/// Height and width factor of 0, and `None` for the other style-derived
/// fields, mean "take it from the text style". They are filled in by
/// [`resolve_style`](Self::resolve_style) when the drawing is read with text
/// style resolution enabled.
#[derive(Debug, Clone)]
pub struct Text {
    /// Common entity data
    pub common: EntityCommon,
    /// Text content (1)
    pub value: String,
    /// Insertion point (10)
    pub insertion_point: Vector3,
    /// Second alignment point (11)
    pub alignment_point: Option<Vector3>,
    /// Text height (40)
    pub height: f64,
    /// Width scale factor (41)
    pub width_factor: f64,
    /// Rotation angle in degrees (50)
    pub rotation: f64,
    /// Oblique angle in degrees (51)
    pub oblique_angle: Option<f64>,
    /// Text style name (7)
    pub style: String,
    /// Raw generation flags (71)
    pub generation_flags: Option<TextGenerationFlags>,
    /// Mirrored in X
    pub is_backwards: Option<bool>,
    /// Mirrored in Y
    pub is_upside_down: Option<bool>,
    /// Horizontal alignment (72)
    pub horizontal_alignment: TextHorizontalAlignment,
    /// Vertical alignment (73)
    pub vertical_alignment: TextVerticalAlignment,
    /// Font file of the text style
    pub font: Option<String>,
    /// Big font file of the text style
    pub big_font: Option<String>,
}

impl Text {
    /// Create a new, empty text entity
    pub fn new() -> Self {
        Text {
            common: EntityCommon::new(),
            value: String::new(),
            insertion_point: Vector3::ZERO,
            alignment_point: None,
            height: 0.0,
            width_factor: 0.0,
            rotation: 0.0,
            oblique_angle: None,
            style: "STANDARD".to_string(),
            generation_flags: None,
            is_backwards: None,
            is_upside_down: None,
            horizontal_alignment: TextHorizontalAlignment::Left,
            vertical_alignment: TextVerticalAlignment::Baseline,
            font: None,
            big_font: None,
        }
    }

    /// Text with `%%` control codes resolved
    ///
    /// `%%c` diameter, `%%d` degree, `%%p` plus/minus, `%%%` percent and
    /// `%%nnn` a character code. Underline/overline toggles are dropped.
    pub fn plain_text(&self) -> String {
        plain_text(&self.value)
    }

    /// Fill unset style-derived fields from `styles`, or the default style if
    /// the named style does not exist
    pub fn resolve_style(&mut self, styles: &Table<TextStyle>) {
        let style = styles.get(&self.style).unwrap_or(&DEFAULT_TEXT_STYLE);
        if self.height == 0.0 {
            self.height = style.height;
        }
        if self.width_factor == 0.0 {
            self.width_factor = style.width_factor;
        }
        self.oblique_angle.get_or_insert(style.oblique_angle);
        self.is_backwards.get_or_insert(style.is_backward());
        self.is_upside_down.get_or_insert(style.is_upside_down());
        self.font.get_or_insert_with(|| style.font_file.clone());
        self.big_font.get_or_insert_with(|| style.big_font_file.clone());
    }

    /// TEXT fields, vertical alignment read from `valign_code`
    pub(crate) fn bind_text(&mut self, tag: &Tag, valign_code: i32) -> bool {
        match tag.code {
            1 => self.value = tag.string(),
            10 => self.insertion_point = tag.point3().unwrap_or_default(),
            11 => self.alignment_point = tag.point3(),
            40 => self.height = tag.f64().unwrap_or(0.0),
            41 => self.width_factor = tag.f64().unwrap_or(0.0),
            50 => self.rotation = tag.f64().unwrap_or(0.0),
            51 => self.oblique_angle = tag.f64(),
            7 => self.style = tag.string(),
            71 => {
                self.generation_flags = tag
                    .i64()
                    .map(|v| TextGenerationFlags::from_bits_truncate(v as i16))
            }
            72 => self.horizontal_alignment = TextHorizontalAlignment::from_value(tag.i64().unwrap_or(0)),
            code if code == valign_code => {
                self.vertical_alignment = TextVerticalAlignment::from_value(tag.i64().unwrap_or(0))
            }
            _ => return false,
        }
        true
    }

    /// Derive backwards/upside-down from the generation flags
    pub(crate) fn finish_text(&mut self) {
        if let Some(flags) = self.generation_flags {
            self.is_backwards = Some(flags.contains(TextGenerationFlags::BACKWARD));
            self.is_upside_down = Some(flags.contains(TextGenerationFlags::UPSIDE_DOWN));
        }
    }

    fn bind_fields(&mut self, tag: &Tag) -> bool {
        self.bind_text(tag, 73)
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Text {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "TEXT"
    }
}

impl Bind for Text {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];

    fn finish(&mut self) {
        self.finish_text();
    }
}

/// Resolve `%%` control codes of single-line text
pub(crate) fn plain_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("%%") {
        result.push_str(&rest[..pos]);
        rest = &rest[pos + 2..];
        let mut chars = rest.chars();
        match chars.next().map(|c| c.to_ascii_lowercase()) {
            Some('c') => result.push('\u{2300}'),
            Some('d') => result.push('\u{00B0}'),
            Some('p') => result.push('\u{00B1}'),
            Some('%') => result.push('%'),
            Some('u') | Some('o') | Some('k') => {}
            Some(c) if c.is_ascii_digit() => {
                let digits: String = rest.chars().take(3).take_while(char::is_ascii_digit).collect();
                if let Some(ch) = digits.parse::<u32>().ok().and_then(char::from_u32) {
                    result.push(ch);
                }
                rest = &rest[digits.len()..];
                continue;
            }
            Some(c) => {
                result.push_str("%%");
                result.push(c);
            }
            None => {
                result.push_str("%%");
                break;
            }
        }
        rest = chars.as_str();
    }
    result.push_str(rest);
    result
}
