//! The parsed form of a configuration file.
//!
//! A [`Document`] is an ordered sequence of sections, each holding an ordered
//! sequence of raw `key -> text` entries. It carries no type information; the
//! store decodes entries through its codecs.

use indexmap::IndexMap;

/// A raw entry value and the line it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The raw value text.
    pub value: String,
    /// 1-based source line, or 0 for entries built in memory.
    pub line: u32,
}

/// One `[section]` and its entries, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionBlock {
    name: String,
    line: u32,
    entries: IndexMap<String, Entry>,
}

impl SectionBlock {
    /// Creates an empty section.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::at_line(name, 0)
    }

    /// Creates an empty section that was read from `line`.
    #[must_use]
    pub fn at_line(name: impl Into<String>, line: u32) -> Self {
        Self {
            name: name.into(),
            line,
            entries: IndexMap::new(),
        }
    }

    /// Returns the section name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the line of the section header.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Inserts or replaces an entry built in memory.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<Entry> {
        self.insert_entry(key, Entry {
            value: value.into(),
            line: 0,
        })
    }

    /// Inserts or replaces an entry, returning the previous one.
    pub fn insert_entry(&mut self, key: impl Into<String>, entry: Entry) -> Option<Entry> {
        self.entries.insert(key.into(), entry)
    }

    /// Returns the raw text of an entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|e| e.value.as_str())
    }

    /// Returns true if the section has an entry for `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates entries in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the section has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An ordered collection of sections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    sections: IndexMap<String, SectionBlock>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section. Returns the previous section of that name, if any.
    pub fn push_section(&mut self, block: SectionBlock) -> Option<SectionBlock> {
        self.sections.insert(block.name.clone(), block)
    }

    /// Returns the section named `name`, appending an empty one if absent.
    pub fn section_mut(&mut self, name: &str) -> &mut SectionBlock {
        self.sections
            .entry(name.to_string())
            .or_insert_with(|| SectionBlock::new(name))
    }

    /// Returns the section named `name`.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&SectionBlock> {
        self.sections.get(name)
    }

    /// Returns true if a section named `name` exists.
    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Returns the raw text at `section` / `key`.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key)
    }

    /// Iterates sections in file order.
    pub fn sections(&self) -> impl Iterator<Item = &SectionBlock> {
        self.sections.values()
    }

    /// Iterates every `(section, key, entry)` triple in file order.
    pub fn triples(&self) -> impl Iterator<Item = (&str, &str, &Entry)> {
        self.sections().flat_map(|block| {
            block
                .entries()
                .map(move |(key, entry)| (block.name(), key, entry))
        })
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if the document has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
