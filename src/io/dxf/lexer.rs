//! DXF ASCII tag lexer
//!
//! Turns the line stream of an ASCII DXF file into typed [`Tag`]s. Multi-tag
//! points are merged into one tag, comments are dropped and every value is
//! cast according to its group code.

use super::tag::{Tag, TagValue};
use super::value_type::{GroupCodeValueType, COMMENT_CODE};
use crate::error::{DxfError, Result};
use crate::types::{Vector2, Vector3};
use encoding_rs::Encoding;
use std::borrow::Cow;
use std::io::BufRead;

/// A code/value line pair before typing
#[derive(Debug, Clone)]
struct RawPair {
    code: i32,
    value: String,
    line: usize,
}

/// Pull-based tag reader over any buffered line source
///
/// Iteration ends after the `(0, "EOF")` tag or at end of input.
pub struct TagLexer<R: BufRead> {
    reader: R,
    line_number: usize,
    pushed_back: Option<RawPair>,
    encoding: &'static Encoding,
    assure_3d: bool,
    finished: bool,
    buffer: Vec<u8>,
}

impl<R: BufRead> TagLexer<R> {
    /// Create a lexer decoding lines as UTF-8
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            pushed_back: None,
            encoding: encoding_rs::UTF_8,
            assure_3d: false,
            finished: false,
            buffer: Vec::with_capacity(256),
        }
    }

    /// Decode lines with the given encoding
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Emit every point as 3D, with Z = 0 where the file has none
    pub fn with_assure_3d(mut self, assure_3d: bool) -> Self {
        self.assure_3d = assure_3d;
        self
    }

    /// Switch the encoding for all following lines
    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = encoding;
    }

    /// Encoding currently used to decode lines
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read one line without its terminator
    fn read_line(&mut self) -> Result<Option<String>> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        while matches!(self.buffer.last(), Some(b'\n' | b'\r')) {
            self.buffer.pop();
        }
        let mut bytes = self.buffer.as_slice();
        if self.line_number == 1 {
            bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        }
        Ok(Some(decode_line(bytes, self.encoding).into_owned()))
    }

    /// Read the next code/value pair, skipping comments
    fn read_pair(&mut self) -> Result<Option<RawPair>> {
        if let Some(pair) = self.pushed_back.take() {
            return Ok(Some(pair));
        }
        loop {
            let code_line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };
            let line = self.line_number;
            let code = code_line.trim().parse::<i32>().map_err(|_| {
                DxfError::structure_at(format!("invalid group code '{}'", code_line.trim()), line)
            })?;
            let value = self.read_line()?.ok_or_else(|| {
                DxfError::structure_at(format!("missing value for group code {code}"), line)
            })?;
            if code == COMMENT_CODE {
                continue;
            }
            return Ok(Some(RawPair { code, value, line }));
        }
    }

    /// Read the pair that must carry the next axis of a point
    fn read_axis(&mut self, start: &RawPair, code: i32) -> Result<f64> {
        match self.read_pair()? {
            Some(pair) if pair.code == code => parse_float(&pair),
            Some(pair) => Err(DxfError::structure_at(
                format!(
                    "point starting with group code {} expects group code {}, found {}",
                    start.code, code, pair.code
                ),
                pair.line,
            )),
            None => Err(DxfError::structure_at(
                format!("point starting with group code {} is truncated", start.code),
                start.line,
            )),
        }
    }

    fn read_point(&mut self, start: RawPair) -> Result<Tag> {
        let x = parse_float(&start)?;
        let y = self.read_axis(&start, start.code + 10)?;

        let z = match self.read_pair()? {
            Some(pair) if pair.code == start.code + 20 => Some(parse_float(&pair)?),
            Some(pair) => {
                self.pushed_back = Some(pair);
                None
            }
            None => None,
        };

        let value = match (z, self.assure_3d) {
            (Some(z), _) => TagValue::Point3(Vector3::new(x, y, z)),
            (None, true) => TagValue::Point3(Vector3::new(x, y, 0.0)),
            (None, false) => TagValue::Point2(Vector2::new(x, y)),
        };
        Ok(Tag::new(start.code, value).at_line(start.line))
    }

    fn next_tag(&mut self) -> Result<Option<Tag>> {
        let pair = match self.read_pair()? {
            Some(pair) => pair,
            None => return Ok(None),
        };
        let tag = match GroupCodeValueType::from_code(pair.code) {
            GroupCodeValueType::Point => self.read_point(pair)?,
            GroupCodeValueType::Double => Tag::float(pair.code, parse_float(&pair)?).at_line(pair.line),
            GroupCodeValueType::Integer => Tag::int(pair.code, parse_int(&pair)?).at_line(pair.line),
            GroupCodeValueType::String => {
                Tag::text(pair.code, decode_control_chars(pair.value)).at_line(pair.line)
            }
        };
        Ok(Some(tag))
    }
}

impl<R: BufRead> Iterator for TagLexer<R> {
    type Item = Result<Tag>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_tag() {
            Ok(Some(tag)) => {
                if tag.is(0, "EOF") {
                    self.finished = true;
                }
                Some(Ok(tag))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Decode one line, retrying as lossy UTF-8 if the encoding rejects it
fn decode_line<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Cow<'a, str> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .unwrap_or_else(|| String::from_utf8_lossy(bytes))
}

/// Resolve the caret escapes DXF uses for control characters
fn decode_control_chars(value: String) -> String {
    if !value.contains('^') {
        return value;
    }
    value
        .replace("^J", "\n")
        .replace("^M", "\r")
        .replace("^I", "\t")
        .replace("^ ", "^")
}

fn parse_float(pair: &RawPair) -> Result<f64> {
    pair.value.trim().parse::<f64>().map_err(|_| {
        DxfError::structure_at(
            format!("invalid float value '{}' for group code {}", pair.value.trim(), pair.code),
            pair.line,
        )
    })
}

fn parse_int(pair: &RawPair) -> Result<i64> {
    let text = pair.value.trim();
    if let Ok(value) = text.parse::<i64>() {
        return Ok(value);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value.trunc() as i64),
        _ => Err(DxfError::structure_at(
            format!("invalid integer value '{}' for group code {}", text, pair.code),
            pair.line,
        )),
    }
}
