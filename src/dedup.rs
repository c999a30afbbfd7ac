//! Exact-text deduplication of raw matches
//!
//! Equality is byte-for-byte: `Bob@x.com` and `bob@x.com` are distinct.

use ahash::RandomState;
use hashbrown::HashSet;

/// Set of unique email candidates plus the counts gathered while building it
#[derive(Debug, Clone)]
pub struct EmailSet {
    set: HashSet<String, RandomState>,
    raw_count: u64,
}

impl EmailSet {
    pub fn new() -> Self {
        Self {
            set: HashSet::with_hasher(RandomState::new()),
            raw_count: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            set: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
            raw_count: 0,
        }
    }

    /// Collapse a sequence of raw matches
    pub fn from_matches<'a, I>(matches: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let matches = matches.into_iter();
        let mut set = Self::with_capacity(matches.size_hint().0);
        for item in matches {
            set.insert(item);
        }
        set
    }

    /// Record one raw match. Returns true if it was not seen before
    pub fn insert(&mut self, item: &str) -> bool {
        self.raw_count += 1;
        if self.contains(item) {
            return false;
        }
        self.set.insert(item.to_string())
    }

    pub fn contains(&self, item: &str) -> bool {
        self.set.contains(item)
    }

    /// Raw matches seen, duplicates included
    pub fn raw_count(&self) -> u64 {
        self.raw_count
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Raw matches minus unique ones
    pub fn duplicate_count(&self) -> u64 {
        self.raw_count - self.set.len() as u64
    }

    /// Unique values in unspecified order
    pub fn into_vec(self) -> Vec<String> {
        self.set.into_iter().collect()
    }
}

impl Default for EmailSet {
    fn default() -> Self {
        Self::new()
    }
}
