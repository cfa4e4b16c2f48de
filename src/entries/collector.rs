use crate::value::TagEntry;

/// Ordered, tag-keyed collection of directory entries.
///
/// Holds at most one entry per tag at all times. Insertion order is
/// preserved for entries that are never replaced; a replaced entry moves to
/// the end. The serializer consumes the entries in this order.
#[derive(Debug, Clone, Default)]
pub struct EntriesCollector {
    entries: Vec<TagEntry>,
}

impl EntriesCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace: an existing entry with the same tag is removed
    /// first, then `entry` is appended.
    pub fn add(&mut self, entry: TagEntry) {
        if let Some(pos) = self.entries.iter().position(|e| e.tag() == entry.tag()) {
            self.entries.remove(pos);
        }
        self.entries.push(entry);
    }

    /// Append without a duplicate check.
    ///
    /// The caller must know the tag is not present yet; a duplicate breaks
    /// the uniqueness invariant the rest of the system relies on, so it is
    /// treated as a programming error.
    pub fn add_unconditional(&mut self, entry: TagEntry) {
        debug_assert!(
            !self.contains(entry.tag()),
            "duplicate tag {:#06x} added unconditionally",
            entry.tag()
        );
        self.entries.push(entry);
    }

    pub fn contains(&self, tag: impl Into<u16>) -> bool {
        let tag = tag.into();
        self.entries.iter().any(|e| e.tag() == tag)
    }

    pub fn get(&self, tag: impl Into<u16>) -> Option<&TagEntry> {
        let tag = tag.into();
        self.entries.iter().find(|e| e.tag() == tag)
    }

    /// The entries in their current order.
    pub fn entries(&self) -> &[TagEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TagEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
