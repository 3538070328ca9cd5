//! Tag collections: plain runs, groups and classified records

use super::tag::{Tag, TagValue};
use super::value_type::{APP_DATA_MARKER, SUBCLASS_MARKER, XDATA_MARKER};
use crate::error::{DxfError, Result};
use crate::types::Handle;
use indexmap::IndexMap;

/// Ordered run of tags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tags(Vec<Tag>);

impl Tags {
    /// Wrap a list of tags
    pub fn new(tags: Vec<Tag>) -> Self {
        Tags(tags)
    }

    /// Append a tag
    pub fn push(&mut self, tag: Tag) {
        self.0.push(tag);
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if there are no tags
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the tags
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    /// Tags as a slice
    pub fn as_slice(&self) -> &[Tag] {
        &self.0
    }

    /// Unwrap into the tag list
    pub fn into_vec(self) -> Vec<Tag> {
        self.0
    }

    /// Value of the first tag, the record type for code-0 runs
    pub fn dxftype(&self) -> Option<&str> {
        self.0.first().and_then(|t| t.value.as_str())
    }

    /// Source line of the first tag, 0 when unknown
    pub fn line(&self) -> usize {
        self.0.first().map_or(0, |t| t.line)
    }

    /// Handle from code 5, or 105 for DIMSTYLE entries
    pub fn handle(&self) -> Option<Handle> {
        self.find_first(5)
            .or_else(|| self.find_first(105))
            .and_then(Tag::handle)
    }

    /// First tag with the given code
    pub fn find_first(&self, code: i32) -> Option<&Tag> {
        self.0.iter().find(|t| t.code == code)
    }

    /// All tags with the given code
    pub fn find_all(&self, code: i32) -> impl Iterator<Item = &Tag> + '_ {
        self.0.iter().filter(move |t| t.code == code)
    }

    /// Index of the first tag with the given code
    pub fn tag_index(&self, code: i32) -> Option<usize> {
        self.0.iter().position(|t| t.code == code)
    }

    /// Value of the first tag with the given code
    pub fn get_value(&self, code: i32) -> Option<&TagValue> {
        self.find_first(code).map(|t| &t.value)
    }

    /// Tags without extended data and without app-data spans
    pub fn plain_tags(&self) -> Tags {
        let mut in_app_data = false;
        let mut plain = Vec::with_capacity(self.0.len());
        for tag in &self.0 {
            if tag.code >= 1000 {
                continue;
            }
            if tag.code == APP_DATA_MARKER {
                in_app_data = !in_app_data;
                continue;
            }
            if !in_app_data {
                plain.push(tag.clone());
            }
        }
        Tags(plain)
    }

    /// Split [`plain_tags`](Self::plain_tags) on subclass markers
    ///
    /// Tags before the first marker are keyed `"noname"`.
    pub fn subclasses(&self) -> IndexMap<String, Tags> {
        let mut classes = IndexMap::new();
        let mut name = String::from("noname");
        let mut current = Tags::default();
        for tag in self.plain_tags().0 {
            if tag.code == SUBCLASS_MARKER {
                let next = tag.string();
                classes.insert(std::mem::replace(&mut name, next), std::mem::take(&mut current));
            } else {
                current.push(tag);
            }
        }
        classes.insert(name, current);
        classes
    }

    /// Extended data blocks keyed by APPID
    pub fn xdata(&self) -> IndexMap<String, Tags> {
        let mut blocks: IndexMap<String, Tags> = IndexMap::new();
        let mut current: Option<(String, Tags)> = None;
        for tag in self.0.iter().filter(|t| t.code >= 1000) {
            if tag.code == XDATA_MARKER {
                if let Some((appid, tags)) = current.take() {
                    blocks.insert(appid, tags);
                }
                current = Some((tag.string(), Tags::new(vec![tag.clone()])));
            } else if let Some((_, tags)) = current.as_mut() {
                tags.push(tag.clone());
            }
        }
        if let Some((appid, tags)) = current {
            blocks.insert(appid, tags);
        }
        blocks
    }
}

impl From<Vec<Tag>> for Tags {
    fn from(tags: Vec<Tag>) -> Self {
        Tags(tags)
    }
}

impl FromIterator<Tag> for Tags {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Tags(iter.into_iter().collect())
    }
}

impl IntoIterator for Tags {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Tags {
    type Output = Tag;

    fn index(&self, index: usize) -> &Tag {
        &self.0[index]
    }
}

/// Tags split into groups, each starting at a tag with the split code
///
/// Tags before the first split tag are discarded, so concatenating all groups
/// gives the input minus that prefix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagGroups(Vec<Tags>);

impl TagGroups {
    /// Split `tags` at every tag with `split_code`
    pub fn new(tags: impl IntoIterator<Item = Tag>, split_code: i32) -> Self {
        let mut groups: Vec<Tags> = Vec::new();
        for tag in tags {
            if tag.code == split_code {
                groups.push(Tags::new(vec![tag]));
            } else if let Some(group) = groups.last_mut() {
                group.push(tag);
            }
        }
        TagGroups(groups)
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if there are no groups
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the groups
    pub fn iter(&self) -> std::slice::Iter<'_, Tags> {
        self.0.iter()
    }

    /// Name of a group: the value of its split tag
    pub fn get_name(&self, index: usize) -> Option<&str> {
        self.0.get(index).and_then(Tags::dxftype)
    }
}

impl IntoIterator for TagGroups {
    type Item = Tags;
    type IntoIter = std::vec::IntoIter<Tags>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// One record partitioned into subclasses, app-data and extended data
///
/// `subclasses[0]` is the prefix before the first subclass marker; every
/// other subclass starts with its `(100, name)` marker. App-data blocks are
/// replaced in their subclass by a `(102, index)` placeholder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedTags {
    subclasses: Vec<Tags>,
    appdata: Vec<Tags>,
    xdata: Vec<Tags>,
}

impl ClassifiedTags {
    /// Classify one record in a single forward pass
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Result<Self> {
        let mut classified = ClassifiedTags::default();
        let mut stream = tags.into_iter();
        let mut current = Tags::default();
        let mut in_xdata = false;

        while let Some(tag) = stream.next() {
            if in_xdata {
                if tag.code == XDATA_MARKER {
                    classified.xdata.push(std::mem::take(&mut current));
                } else if tag.code < 1000 {
                    return Err(DxfError::structure_at(
                        format!("unexpected tag {tag} after extended data"),
                        tag.line,
                    ));
                }
                current.push(tag);
                continue;
            }

            match tag.code {
                APP_DATA_MARKER if tag.str().starts_with('{') => {
                    let index = classified.appdata.len();
                    current.push(Tag::int(APP_DATA_MARKER, index as i64).at_line(tag.line));
                    let block = collect_appdata(tag, &mut stream)?;
                    classified.appdata.push(block);
                }
                SUBCLASS_MARKER => {
                    classified.subclasses.push(std::mem::take(&mut current));
                    current.push(tag);
                }
                XDATA_MARKER => {
                    classified.subclasses.push(std::mem::take(&mut current));
                    in_xdata = true;
                    current.push(tag);
                }
                _ => current.push(tag),
            }
        }

        if in_xdata {
            classified.xdata.push(current);
        } else {
            classified.subclasses.push(current);
        }
        Ok(classified)
    }

    /// Record type, the value of the leading `(0, type)` tag
    pub fn dxftype(&self) -> Option<&str> {
        self.noclass().dxftype()
    }

    /// Record handle
    pub fn handle(&self) -> Option<Handle> {
        self.subclasses.iter().find_map(Tags::handle)
    }

    /// Tags before the first subclass marker
    pub fn noclass(&self) -> &Tags {
        &self.subclasses[0]
    }

    /// All subclasses, `noclass` first
    pub fn subclasses(&self) -> &[Tags] {
        &self.subclasses
    }

    /// `true` if the record carries subclass markers (R13+ layout)
    pub fn has_subclass_markers(&self) -> bool {
        self.subclasses.len() > 1
    }

    /// Subclass with the given marker name, marker tag included
    pub fn get_subclass(&self, name: &str) -> Option<&Tags> {
        self.subclasses[1..]
            .iter()
            .find(|s| s.dxftype() == Some(name))
    }

    /// App-data block opened by `{appid`, brackets included
    pub fn get_appdata(&self, appid: &str) -> Option<&Tags> {
        self.appdata
            .iter()
            .find(|block| block.dxftype().and_then(|v| v.strip_prefix('{')) == Some(appid))
    }

    /// All app-data blocks in source order
    pub fn appdata(&self) -> &[Tags] {
        &self.appdata
    }

    /// Extended data block of an application, `(1001, appid)` included
    pub fn get_xdata(&self, appid: &str) -> Option<&Tags> {
        self.xdata.iter().find(|block| block.dxftype() == Some(appid))
    }

    /// All extended data blocks in source order
    pub fn xdata(&self) -> &[Tags] {
        &self.xdata
    }

    /// Field-bearing tags of every subclass in source order, paired with the
    /// name of the subclass they belong to
    ///
    /// Subclass markers and app-data placeholders are left out. Prefix tags
    /// report the subclass name `""`.
    pub fn all_subclass_tags(&self) -> impl Iterator<Item = (&str, &Tag)> + '_ {
        self.subclasses.iter().enumerate().flat_map(|(index, subclass)| {
            let name = if index == 0 { "" } else { subclass.dxftype().unwrap_or("") };
            subclass
                .iter()
                .skip(usize::from(index > 0))
                .filter(|t| t.code != APP_DATA_MARKER)
                .map(move |t| (name, t))
        })
    }

    /// Consume into `(subclasses, appdata, xdata)`
    pub fn into_parts(self) -> (Vec<Tags>, Vec<Tags>, Vec<Tags>) {
        (self.subclasses, self.appdata, self.xdata)
    }
}

fn collect_appdata(start: Tag, stream: &mut impl Iterator<Item = Tag>) -> Result<Tags> {
    let line = start.line;
    let name = start.string();
    let mut block = Tags::new(vec![start]);
    for tag in stream {
        let closes = tag.code == APP_DATA_MARKER;
        block.push(tag);
        if closes {
            return Ok(block);
        }
    }
    Err(DxfError::structure_at(format!("app-data block '{name}' is not closed"), line))
}
