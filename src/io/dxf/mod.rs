//! DXF tag stream reading
//!
//! Layers, from the bottom up: [`TagLexer`] turns lines into typed [`Tag`]s,
//! [`read_chunk`] cuts the tag stream into sections, the section builders
//! split sections into records, and [`DxfReader`] drives it all.

mod chunks;
pub mod code_page;
mod lexer;
mod reader;
mod sections;
mod tag;
mod tags;
mod value_type;

pub use chunks::{read_chunk, Chunks};
pub use lexer::TagLexer;
pub use reader::{DxfReader, DxfReaderConfiguration};
pub use tag::{Tag, TagValue};
pub use tags::{ClassifiedTags, TagGroups, Tags};
pub use value_type::GroupCodeValueType;
