//! Table entries and name-keyed tables

use crate::io::dxf::Tags;
use crate::types::Handle;
use indexmap::IndexMap;

pub mod layer;
pub mod linetype;
pub mod textstyle;

pub use layer::{Layer, LayerFlags};
pub use linetype::Linetype;
pub use textstyle::{TextStyle, DEFAULT_TEXT_STYLE};

/// Base trait for all table entries
pub trait TableEntry {
    /// DXF name of the table holding this entry type
    const TABLE_NAME: &'static str;

    /// Build an entry from its plain tags (app-data and xdata removed)
    fn from_tags(tags: &Tags) -> Self
    where
        Self: Sized;

    /// Get the entry's unique handle
    fn handle(&self) -> Handle;

    /// Get the entry's name
    fn name(&self) -> &str;
}

/// Name-keyed table, case-insensitive, in file order
#[derive(Debug, Clone)]
pub struct Table<T: TableEntry> {
    entries: IndexMap<String, T>,
    handle: Handle,
}

impl<T: TableEntry> Table<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Table {
            entries: IndexMap::new(),
            handle: Handle::NULL,
        }
    }

    /// Create a table with a specific handle
    pub fn with_handle(handle: Handle) -> Self {
        Table {
            entries: IndexMap::new(),
            handle,
        }
    }

    /// Get the table's handle
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Add an entry; an entry of the same name is replaced and returned
    pub fn insert(&mut self, entry: T) -> Option<T> {
        self.entries.insert(entry.name().to_uppercase(), entry)
    }

    /// Get an entry by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(&name.to_uppercase())
    }

    /// Check if an entry exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_uppercase())
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Get all entry names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|e| e.name())
    }
}

impl<T: TableEntry> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: TableEntry> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = indexmap::map::Values<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::Tag;

    fn layer(name: &str, color: i64) -> Layer {
        Layer::from_tags(&Tags::new(vec![
            Tag::text(0, "LAYER"),
            Tag::text(2, name),
            Tag::int(62, color),
        ]))
    }

    #[test]
    fn test_table_insert_and_get() {
        let mut table = Table::new();
        assert!(table.insert(layer("Walls", 1)).is_none());
        assert!(table.contains("Walls"));
        assert!(table.contains("WALLS"));
        assert_eq!(table.get("walls").map(|l| l.name.as_str()), Some("Walls"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_replaces_duplicate() {
        let mut table = Table::new();
        table.insert(layer("Test", 1));
        let replaced = table.insert(layer("TEST", 2));
        assert_eq!(replaced.map(|l| l.name), Some("Test".to_string()));
        assert_eq!(table.len(), 1);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["TEST"]);
    }

    #[test]
    fn test_table_keeps_file_order() {
        let mut table = Table::new();
        for name in ["0", "B", "A"] {
            table.insert(layer(name, 7));
        }
        let names: Vec<_> = (&table).into_iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["0", "B", "A"]);
    }
}
