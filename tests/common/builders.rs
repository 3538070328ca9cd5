//! DXF fixture builder.
//!
//! Writes tag pairs the way AutoCAD lays them out: the group code right
//! aligned in three columns, the value on the next line.

#![allow(dead_code)]

use std::fmt::Display;

/// Tag-pair writer for test fixtures.
///
/// ```ignore
/// let text = DxfBuilder::new()
///     .section("ENTITIES")
///     .entity("CIRCLE", &[(10, "0"), (20, "0"), (40, "2.5")])
///     .end_section()
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DxfBuilder {
    lines: Vec<String>,
}

impl DxfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one code/value pair.
    pub fn tag(mut self, code: i32, value: impl Display) -> Self {
        self.lines.push(format!("{code:>3}"));
        self.lines.push(value.to_string());
        self
    }

    /// Append several code/value pairs.
    pub fn tags(self, tags: &[(i32, &str)]) -> Self {
        tags.iter().fold(self, |builder, (code, value)| builder.tag(*code, value))
    }

    /// Append a comment (999) line pair.
    pub fn comment(self, text: &str) -> Self {
        self.tag(999, text)
    }

    pub fn section(self, name: &str) -> Self {
        self.tag(0, "SECTION").tag(2, name)
    }

    pub fn end_section(self) -> Self {
        self.tag(0, "ENDSEC")
    }

    /// A complete HEADER section from `(name, code, value)` variables.
    pub fn header(self, variables: &[(&str, i32, &str)]) -> Self {
        variables
            .iter()
            .fold(self.section("HEADER"), |builder, (name, code, value)| {
                builder.tag(9, name).tag(*code, value)
            })
            .end_section()
    }

    /// HEADER with `$ACADVER` and `$DWGCODEPAGE` only.
    pub fn version_header(self, version: &str, code_page: &str) -> Self {
        self.header(&[("$ACADVER", 1, version), ("$DWGCODEPAGE", 3, code_page)])
    }

    /// One record: `(0, kind)` followed by `tags`.
    pub fn entity(self, kind: &str, tags: &[(i32, &str)]) -> Self {
        self.tag(0, kind).tags(tags)
    }

    /// A TABLES section holding one table of `(entry kind, tags)` entries.
    pub fn table(self, name: &str, entries: &[&[(i32, &str)]]) -> Self {
        entries
            .iter()
            .fold(self.section("TABLES").tag(0, "TABLE").tag(2, name).tag(70, entries.len()), |builder, tags| {
                builder.entity(name, tags)
            })
            .tag(0, "ENDTAB")
            .end_section()
    }

    /// The DXF text, terminated by `(0, EOF)`.
    pub fn build(self) -> String {
        let mut text = self.tag(0, "EOF").lines.join("\n");
        text.push('\n');
        text
    }

    /// The DXF text encoded with `encoding`.
    pub fn build_encoded(self, encoding: &'static encoding_rs::Encoding) -> Vec<u8> {
        let text = self.build();
        let (bytes, _, had_errors) = encoding.encode(&text);
        assert!(!had_errors, "fixture not representable in {}", encoding.name());
        bytes.into_owned()
    }
}
