//! Multi-line text entity

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon};
use crate::io::dxf::Tag;
use crate::tables::{Table, TextStyle, DEFAULT_TEXT_STYLE};
use crate::types::Vector3;

/// Attachment point of multi-line text (71)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentPoint {
    /// Top left
    #[default]
    TopLeft,
    /// Top center
    TopCenter,
    /// Top right
    TopRight,
    /// Middle left
    MiddleLeft,
    /// Middle center
    MiddleCenter,
    /// Middle right
    MiddleRight,
    /// Bottom left
    BottomLeft,
    /// Bottom center
    BottomCenter,
    /// Bottom right
    BottomRight,
}

impl AttachmentPoint {
    /// Create from the DXF value (1-9)
    pub fn from_value(value: i64) -> Self {
        match value {
            2 => AttachmentPoint::TopCenter,
            3 => AttachmentPoint::TopRight,
            4 => AttachmentPoint::MiddleLeft,
            5 => AttachmentPoint::MiddleCenter,
            6 => AttachmentPoint::MiddleRight,
            7 => AttachmentPoint::BottomLeft,
            8 => AttachmentPoint::BottomCenter,
            9 => AttachmentPoint::BottomRight,
            _ => AttachmentPoint::TopLeft,
        }
    }
}

/// A multi-line text entity with inline formatting codes
#[derive(Debug, Clone)]
pub struct MText {
    /// Common entity data
    pub common: EntityCommon,
    /// Insertion point (10)
    pub insertion_point: Vector3,
    /// Nominal character height (40); 0 means "from the style"
    pub height: f64,
    /// Reference rectangle width (41)
    pub reference_width: f64,
    /// Attachment point (71)
    pub attachment_point: AttachmentPoint,
    /// Drawing direction (72): 1 left to right, 3 top to bottom, 5 by style
    pub flow_direction: i64,
    /// Raw text with formatting codes, joined from the 3 and 1 tags
    pub text: String,
    /// Text style name (7)
    pub style: String,
    /// X-axis direction (11), overrides `rotation` when present
    pub x_direction: Option<Vector3>,
    /// Rotation angle in degrees (50)
    pub rotation: f64,
    /// Line spacing factor (44)
    pub line_spacing: f64,
    /// Font file of the text style
    pub font: Option<String>,
    /// Big font file of the text style
    pub big_font: Option<String>,
}

impl MText {
    /// Effective rotation in degrees, derived from the x-direction if set
    pub fn rotation_angle(&self) -> f64 {
        match self.x_direction {
            Some(dir) => dir.y.atan2(dir.x).to_degrees(),
            None => self.rotation,
        }
    }

    /// Text with inline formatting removed; paragraphs become `\n`
    pub fn plain_text(&self) -> String {
        strip_formatting(&self.text)
    }

    /// Text split at paragraph breaks, formatting removed
    pub fn lines(&self) -> Vec<String> {
        self.plain_text().split('\n').map(str::to_string).collect()
    }

    /// Fill unset height and fonts from the text style
    pub fn resolve_style(&mut self, styles: &Table<TextStyle>) {
        let style = styles.get(&self.style).unwrap_or(&DEFAULT_TEXT_STYLE);
        if self.height == 0.0 {
            self.height = style.height;
        }
        self.font.get_or_insert_with(|| style.font_file.clone());
        self.big_font.get_or_insert_with(|| style.big_font_file.clone());
    }

    fn bind_fields(&mut self, tag: &Tag) -> bool {
        match tag.code {
            10 => self.insertion_point = tag.point3().unwrap_or_default(),
            40 => self.height = tag.f64().unwrap_or(0.0),
            41 => self.reference_width = tag.f64().unwrap_or(0.0),
            71 => self.attachment_point = AttachmentPoint::from_value(tag.i64().unwrap_or(1)),
            72 => self.flow_direction = tag.i64().unwrap_or(1),
            1 | 3 => self.text.push_str(tag.str()),
            7 => self.style = tag.string(),
            11 => self.x_direction = tag.point3(),
            50 => self.rotation = tag.f64().unwrap_or(0.0),
            44 => self.line_spacing = tag.f64().unwrap_or(1.0),
            _ => return false,
        }
        true
    }
}

impl Default for MText {
    fn default() -> Self {
        MText {
            common: EntityCommon::new(),
            insertion_point: Vector3::ZERO,
            height: 0.0,
            reference_width: 0.0,
            attachment_point: AttachmentPoint::TopLeft,
            flow_direction: 1,
            text: String::new(),
            style: "STANDARD".to_string(),
            x_direction: None,
            rotation: 0.0,
            line_spacing: 1.0,
            font: None,
            big_font: None,
        }
    }
}

impl Entity for MText {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "MTEXT"
    }
}

impl Bind for MText {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common), Pass::new(Self::bind_fields)];
}

/// Remove MTEXT inline codes
fn strip_formatting(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' | '}' => {}
            '\\' => match chars.next() {
                Some('P') | Some('X') => result.push('\n'),
                Some('~') => result.push('\u{00A0}'),
                Some(c @ ('\\' | '{' | '}')) => result.push(c),
                Some('L' | 'l' | 'O' | 'o' | 'K' | 'k') => {}
                Some('S') => {
                    // stacked fraction: \Snum^den; or \Snum/den; or \Snum#den;
                    for c in chars.by_ref() {
                        match c {
                            ';' => break,
                            '^' | '#' => result.push('/'),
                            _ => result.push(c),
                        }
                    }
                }
                Some('A' | 'C' | 'c' | 'F' | 'f' | 'H' | 'Q' | 'T' | 'W' | 'p') => {
                    for c in chars.by_ref() {
                        if c == ';' {
                            break;
                        }
                    }
                }
                Some(other) => {
                    result.push('\\');
                    result.push(other);
                }
                None => result.push('\\'),
            },
            _ => result.push(c),
        }
    }
    result
}
