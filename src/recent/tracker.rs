//! Recent Items Tracker
//!
//! Keeps the recent-notes list in the cache consistent with note views and
//! deletions, and resolves it into note records for the index.
//!
//! Every update is a plain read-modify-write of one key. Two requests racing
//! on it can lose an update; the last write wins.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::CacheTransport;
use crate::notes::{Note, NoteId, NoteStore};
use crate::recent::{RecentList, MAX_RECENT, RECENT_NOTES_KEY};

// == Recent Items Tracker ==
/// Maintains the recent-notes list stored under [`RECENT_NOTES_KEY`].
///
/// Cache failures never escape: a failed or garbled read is an empty list
/// and a failed write is logged and dropped.
#[derive(Clone)]
pub struct RecentItemsTracker {
    cache: Arc<dyn CacheTransport>,
}

impl RecentItemsTracker {
    /// Creates a tracker over the given cache handle.
    pub fn new(cache: Arc<dyn CacheTransport>) -> Self {
        Self { cache }
    }

    // == Record View ==
    /// Moves `id` to the front of the list, evicting the oldest entry once
    /// the list is full. The list is written back even if unchanged.
    pub async fn record_view(&self, id: NoteId) {
        let mut list = self
            .load()
            .await
            .unwrap_or_else(|| RecentList::new(MAX_RECENT));
        let evicted = list.touch(id);
        if !evicted.is_empty() {
            debug!(note_id = id, ?evicted, "Evicted notes from recent list");
        }
        self.store(&list).await;
    }

    // == Remove If Present ==
    /// Drops every occurrence of `id` from the list.
    ///
    /// Nothing is written when no list could be read, so a failed read never
    /// overwrites the ids of other notes.
    pub async fn remove_if_present(&self, id: NoteId) {
        let Some(mut list) = self.load().await else {
            return;
        };
        if list.remove(id) {
            debug!(note_id = id, "Removed deleted note from recent list");
        }
        self.store(&list).await;
    }

    // == Recent Ids ==
    /// Returns the current ids most-recent-first, deduplicated.
    pub async fn recent_ids(&self) -> Vec<NoteId> {
        self.load().await.map(|list| list.ids()).unwrap_or_default()
    }

    // == List Recent ==
    /// Resolves the list into note records with a single batch lookup.
    ///
    /// Ids whose note no longer exists are skipped. A storage failure yields
    /// an empty result so the caller can still render.
    pub async fn list_recent<S>(&self, notes: &S) -> Vec<Note>
    where
        S: NoteStore + ?Sized,
    {
        let ids = self.recent_ids().await;
        if ids.is_empty() {
            return Vec::new();
        }

        let wanted: HashSet<NoteId> = ids.iter().copied().collect();
        let mut found = match notes.get_many(&wanted).await {
            Ok(found) => found,
            Err(err) => {
                warn!(error = %err, "Failed to resolve recent notes");
                return Vec::new();
            }
        };

        ids.iter().filter_map(|id| found.remove(id)).collect()
    }

    /// Reads the stored list.
    ///
    /// `None` means no value could be read (missing key or failed read). A
    /// value that was read but cannot be decoded comes back as an empty list.
    async fn load(&self) -> Option<RecentList> {
        let raw = match self.cache.get(RECENT_NOTES_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(error = %err, "Failed to read recent notes; treating as empty");
                return None;
            }
        };

        Some(RecentList::decode(&raw, MAX_RECENT).unwrap_or_else(|err| {
            warn!(error = %err, "Discarding unreadable recent notes value");
            RecentList::new(MAX_RECENT)
        }))
    }

    async fn store(&self, list: &RecentList) {
        let result = match list.encode() {
            Ok(encoded) => self.cache.set(RECENT_NOTES_KEY, &encoded, None).await,
            Err(err) => Err(err),
        };

        if let Err(err) = result {
            warn!(error = %err, "Failed to write recent notes");
        }
    }
}
