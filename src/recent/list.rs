//! Recent List Module
//!
//! The bounded, duplicate-free, most-recent-first list of note ids and its
//! cache wire format.

use std::collections::VecDeque;

use crate::error::{CacheError, CacheResult};
use crate::notes::NoteId;

// == Recent List ==
/// Note ids ordered by recency of viewing.
///
/// - Front = Most recently viewed
/// - Back = Least recently viewed, first to be evicted
///
/// Never holds more than `capacity` ids and never holds an id twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentList {
    ids: VecDeque<NoteId>,
    capacity: usize,
}

impl RecentList {
    // == Constructor ==
    /// Creates an empty list bounded to `capacity` ids.
    pub fn new(capacity: usize) -> Self {
        Self {
            ids: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Builds a list from ids given most-recent-first.
    ///
    /// Repeated ids keep their first (most recent) position and anything past
    /// `capacity` is dropped.
    pub fn from_ids<I>(ids: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = NoteId>,
    {
        let mut list = Self::new(capacity);
        for id in ids {
            if list.ids.len() == capacity {
                break;
            }
            if !list.contains(id) {
                list.ids.push_back(id);
            }
        }
        list
    }

    // == Decode ==
    /// Parses the cached form, a JSON array of decimal strings such as
    /// `["5","3","1"]`.
    ///
    /// Any entry that is not a plain decimal string (digits only, no sign,
    /// no leading zeros) rejects the whole value.
    pub fn decode(raw: &str, capacity: usize) -> CacheResult<Self> {
        let entries: Vec<String> = serde_json::from_str(raw)?;
        let ids = entries
            .iter()
            .map(|entry| {
                let digits_only = !entry.is_empty() && entry.bytes().all(|b| b.is_ascii_digit());
                let canonical = digits_only && (entry == "0" || !entry.starts_with('0'));
                canonical
                    .then(|| entry.parse::<NoteId>().ok())
                    .flatten()
                    .ok_or_else(|| CacheError::Malformed(format!("invalid note id {:?}", entry)))
            })
            .collect::<CacheResult<Vec<NoteId>>>()?;

        Ok(Self::from_ids(ids, capacity))
    }

    // == Encode ==
    /// Serializes to the cached form.
    pub fn encode(&self) -> CacheResult<String> {
        let entries: Vec<String> = self.ids.iter().map(|id| id.to_string()).collect();
        Ok(serde_json::to_string(&entries)?)
    }

    // == Touch ==
    /// Marks `id` as the most recently viewed note.
    ///
    /// Existing occurrences are moved rather than duplicated. Returns the ids
    /// pushed off the back, oldest last.
    pub fn touch(&mut self, id: NoteId) -> Vec<NoteId> {
        self.remove(id);
        self.ids.push_front(id);

        let mut evicted = Vec::new();
        while self.ids.len() > self.capacity {
            if let Some(oldest) = self.ids.pop_back() {
                evicted.push(oldest);
            }
        }
        evicted
    }

    // == Remove ==
    /// Removes every occurrence of `id`, returning whether any was present.
    pub fn remove(&mut self, id: NoteId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&existing| existing != id);
        self.ids.len() != before
    }

    /// Ids most-recent-first.
    pub fn ids(&self) -> Vec<NoteId> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.ids.contains(&id)
    }
}
