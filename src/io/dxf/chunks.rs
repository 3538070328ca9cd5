//! Splitting a tag stream into section-level chunks

use super::tag::Tag;
use super::tags::Tags;
use crate::error::Result;

/// Read the next chunk from `tags`
///
/// Collects tags up to and including the first tag equal to `end`. Returns
/// `None` when the next tag equals `stop` or when the input is exhausted
/// before a chunk starts. Input ending inside a chunk yields the partial
/// chunk.
pub fn read_chunk<I>(tags: &mut I, end: &Tag, stop: &Tag) -> Result<Option<Tags>>
where
    I: Iterator<Item = Result<Tag>>,
{
    let mut chunk = Tags::default();
    for tag in tags {
        let tag = tag?;
        if chunk.is_empty() && tag == *stop {
            return Ok(None);
        }
        let is_end = tag == *end;
        chunk.push(tag);
        if is_end {
            return Ok(Some(chunk));
        }
    }
    Ok((!chunk.is_empty()).then_some(chunk))
}

/// Iterator over all chunks of a tag stream
pub struct Chunks<'a, I> {
    tags: &'a mut I,
    end: Tag,
    stop: Tag,
}

impl<'a, I> Chunks<'a, I>
where
    I: Iterator<Item = Result<Tag>>,
{
    /// Chunks ending at `end`, stopping at `stop`
    pub fn new(tags: &'a mut I, end: Tag, stop: Tag) -> Self {
        Self { tags, end, stop }
    }
}

impl<I> Iterator for Chunks<'_, I>
where
    I: Iterator<Item = Result<Tag>>,
{
    type Item = Result<Tags>;

    fn next(&mut self) -> Option<Self::Item> {
        read_chunk(self.tags, &self.end, &self.stop).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(tags: Vec<Tag>) -> impl Iterator<Item = Result<Tag>> {
        tags.into_iter().map(Ok)
    }

    fn sections() -> Vec<Tag> {
        vec![
            Tag::text(0, "SECTION"),
            Tag::text(2, "HEADER"),
            Tag::text(0, "ENDSEC"),
            Tag::text(0, "SECTION"),
            Tag::text(2, "ENTITIES"),
            Tag::text(0, "ENDSEC"),
            Tag::text(0, "EOF"),
        ]
    }

    #[test]
    fn test_top_level_chunks() {
        let mut tags = stream(sections());
        let chunks: Vec<Tags> = Chunks::new(&mut tags, Tag::text(0, "ENDSEC"), Tag::text(0, "EOF"))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1][1], Tag::text(2, "ENTITIES"));
        assert_eq!(chunks[1].len(), 3);
    }

    #[test]
    fn test_partial_chunk_at_end_of_input() {
        let mut tags = stream(vec![Tag::text(0, "SECTION"), Tag::text(2, "BLOCKS")]);
        let end = Tag::text(0, "ENDSEC");
        let stop = Tag::text(0, "EOF");
        let chunk = read_chunk(&mut tags, &end, &stop).unwrap().unwrap();
        assert_eq!(chunk.len(), 2);
        assert!(read_chunk(&mut tags, &end, &stop).unwrap().is_none());
    }

    #[test]
    fn test_stop_only_between_chunks() {
        let mut tags = stream(vec![Tag::text(0, "EOF")]);
        let result = read_chunk(&mut tags, &Tag::text(0, "ENDTAB"), &Tag::text(0, "EOF")).unwrap();
        assert!(result.is_none());
    }
}
