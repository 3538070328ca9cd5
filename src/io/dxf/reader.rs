//! DXF file reader

use super::chunks::read_chunk;
use super::code_page;
use super::lexer::TagLexer;
use super::sections::{builder_for, section_name};
use super::tag::{Tag, TagValue};
use crate::drawing::{Drawing, Header};
use crate::error::{DxfError, Result};
use crate::notification::NotificationType;
use encoding_rs::Encoding;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

/// Bytes scanned for `$ACADVER` / `$DWGCODEPAGE` before decoding a file
const SNIFF_LIMIT: usize = 64 * 1024;

/// Configuration for the DXF reader.
#[derive(Debug, Clone)]
pub struct DxfReaderConfiguration {
    /// Read block definitions; when `false` the BLOCKS section stays empty.
    pub grab_blocks: bool,
    /// Emit every point as 3D, with Z = 0 where the file has none.
    pub assure_3d_coords: bool,
    /// Fill unset text properties from the STYLE table after reading.
    pub resolve_text_styles: bool,
}

impl Default for DxfReaderConfiguration {
    fn default() -> Self {
        Self {
            grab_blocks: true,
            assure_3d_coords: false,
            resolve_text_styles: true,
        }
    }
}

/// DXF file reader
pub struct DxfReader {
    source: Box<dyn BufRead>,
    fixed_encoding: Option<&'static str>,
    config: DxfReaderConfiguration,
    filename: Option<PathBuf>,
}

impl DxfReader {
    /// Create a reader over any byte stream
    ///
    /// The stream is decoded as UTF-8 up to the end of the HEADER section,
    /// then with the encoding the header names.
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Self {
            source: Box::new(BufReader::new(reader)),
            fixed_encoding: None,
            config: DxfReaderConfiguration::default(),
            filename: None,
        }
    }

    /// Create a reader for a file
    ///
    /// The file is read completely and closed; its encoding is taken from
    /// the `$ACADVER` and `$DWGCODEPAGE` values near the start.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let encoding = sniff_encoding(&data);
        log::debug!("{}: decoding as {encoding}", path.display());
        Ok(Self {
            source: Box::new(Cursor::new(data)),
            fixed_encoding: Some(encoding),
            config: DxfReaderConfiguration::default(),
            filename: Some(path.to_path_buf()),
        })
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Read the stream into a [`Drawing`]
    ///
    /// Structure errors abort the read; unsupported content is recorded in
    /// [`Drawing::notifications`].
    pub fn read(self) -> Result<Drawing> {
        let DxfReader {
            source,
            fixed_encoding,
            config,
            filename,
        } = self;
        let encoding_name = fixed_encoding.unwrap_or(code_page::UTF8_ENCODING);
        let mut lexer = TagLexer::new(source)
            .with_encoding(lookup_encoding(encoding_name)?)
            .with_assure_3d(config.assure_3d_coords);

        let mut drawing = Drawing::new();
        drawing.filename = filename;
        drawing.encoding = encoding_name.to_string();

        let end = Tag::text(0, "ENDSEC");
        let stop = Tag::text(0, "EOF");
        while let Some(chunk) = read_chunk(&mut lexer, &end, &stop)? {
            let name = section_name(&chunk)?;
            let Some(builder) = builder_for(&name) else {
                log::debug!("keeping section {name} raw");
                drawing.notifications.notify_at(
                    NotificationType::NotImplemented,
                    format!("section {name} kept raw"),
                    chunk.line(),
                );
                drawing.raw_sections.insert(name, chunk);
                continue;
            };
            builder(&mut drawing, chunk, &config)?;
            if name == "HEADER" && fixed_encoding.is_none() {
                lexer.set_encoding(lookup_encoding(&drawing.encoding)?);
            }
            drawing.add_section(name);
        }

        drawing.attach_sab_data();
        if config.resolve_text_styles {
            drawing.resolve_text_styles();
        }
        Ok(drawing)
    }
}

fn lookup_encoding(name: &str) -> Result<&'static Encoding> {
    code_page::encoding_for_name(name).ok_or_else(|| DxfError::Encoding(format!("unknown encoding {name:?}")))
}

/// Codec name for raw file content, from the header values in its first bytes
///
/// A header value sits two lines after its `$NAME` line.
fn sniff_encoding(data: &[u8]) -> &'static str {
    let head = String::from_utf8_lossy(&data[..data.len().min(SNIFF_LIMIT)]);
    let lines: Vec<&str> = head.lines().map(str::trim).collect();
    let mut header = Header::new();
    for name in ["$ACADVER", "$DWGCODEPAGE"] {
        let value = lines
            .iter()
            .position(|line| *line == name)
            .and_then(|index| lines.get(index + 2));
        if let Some(value) = value {
            header.set(name, TagValue::Text(value.to_string()));
        }
    }
    header.encoding()
}
