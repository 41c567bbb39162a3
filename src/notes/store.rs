//! Note Store Module
//!
//! The persistence seam for note records and its in-memory implementation.

use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{AppError, Result};
use crate::notes::{Note, NoteId};

// == Note Store ==
/// CRUD access to note records addressed by integer id.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Stores a new note and returns it with its assigned id.
    async fn create(&self, title: String, content: String) -> Result<Note>;

    /// Fetches one note.
    async fn get(&self, id: NoteId) -> Result<Note>;

    /// Replaces a note's title and content.
    async fn update(&self, id: NoteId, title: String, content: String) -> Result<Note>;

    /// Permanently removes a note.
    async fn delete(&self, id: NoteId) -> Result<()>;

    /// Lists every note, newest first.
    async fn list_all(&self) -> Result<Vec<Note>>;

    /// Fetches a batch of notes in one call.
    ///
    /// The returned map only holds ids that exist; unknown ids are skipped.
    async fn get_many(&self, ids: &HashSet<NoteId>) -> Result<HashMap<NoteId, Note>>;
}

#[derive(Debug)]
struct NoteTable {
    notes: BTreeMap<NoteId, Note>,
    next_id: NoteId,
}

// == In-Memory Note Store ==
/// Note store held in process memory. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct InMemoryNoteStore {
    table: RwLock<NoteTable>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(NoteTable {
                notes: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn create(&self, title: String, content: String) -> Result<Note> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let now = Utc::now();
        let note = Note {
            id,
            title,
            content,
            created_at: now,
            updated_at: now,
        };
        table.notes.insert(id, note.clone());
        Ok(note)
    }

    async fn get(&self, id: NoteId) -> Result<Note> {
        self.table
            .read()
            .await
            .notes
            .get(&id)
            .cloned()
            .ok_or(AppError::NoteNotFound(id))
    }

    async fn update(&self, id: NoteId, title: String, content: String) -> Result<Note> {
        let mut table = self.table.write().await;
        let note = table.notes.get_mut(&id).ok_or(AppError::NoteNotFound(id))?;
        note.title = title;
        note.content = content;
        note.updated_at = Utc::now();
        Ok(note.clone())
    }

    async fn delete(&self, id: NoteId) -> Result<()> {
        self.table
            .write()
            .await
            .notes
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NoteNotFound(id))
    }

    async fn list_all(&self) -> Result<Vec<Note>> {
        let table = self.table.read().await;
        let mut notes: Vec<Note> = table.notes.values().cloned().collect();
        // Ids grow with creation time, so they break timestamp ties
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(notes)
    }

    async fn get_many(&self, ids: &HashSet<NoteId>) -> Result<HashMap<NoteId, Note>> {
        let table = self.table.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| table.notes.get(id).map(|note| (*id, note.clone())))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded(titles: &[&str]) -> InMemoryNoteStore {
        let store = InMemoryNoteStore::new();
        for title in titles {
            store
                .create(title.to_string(), format!("Content of {}", title))
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = seeded(&["First", "Second"]).await;

        assert_eq!(store.get(1).await.unwrap().title, "First");
        assert_eq!(store.get(2).await.unwrap().title, "Second");
    }

    #[tokio::test]
    async fn test_get_missing_note() {
        let store = InMemoryNoteStore::new();

        let result = store.get(999).await;
        assert!(matches!(result, Err(AppError::NoteNotFound(999))));
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let store = seeded(&["Draft"]).await;

        let updated = store
            .update(1, "Final".to_string(), "Done".to_string())
            .await
            .unwrap();

        assert_eq!(updated.title, "Final");
        assert_eq!(updated.content, "Done");
        assert!(updated.updated_at >= updated.created_at);
        assert_eq!(store.get(1).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_note() {
        let store = InMemoryNoteStore::new();

        let result = store.update(3, "t".to_string(), "c".to_string()).await;
        assert!(matches!(result, Err(AppError::NoteNotFound(3))));
    }

    #[tokio::test]
    async fn test_delete_then_get_fails() {
        let store = seeded(&["Doomed"]).await;

        store.delete(1).await.unwrap();

        assert!(matches!(store.get(1).await, Err(AppError::NoteNotFound(1))));
        assert!(matches!(store.delete(1).await, Err(AppError::NoteNotFound(1))));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = seeded(&["One", "Two"]).await;

        store.delete(2).await.unwrap();
        let note = store.create("Three".to_string(), String::new()).await.unwrap();

        assert_eq!(note.id, 3);
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let store = seeded(&["Old", "Middle", "New"]).await;

        let ids: Vec<NoteId> = store.list_all().await.unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_get_many_skips_unknown_ids() {
        let store = seeded(&["A", "B", "C"]).await;
        store.delete(2).await.unwrap();

        let ids: HashSet<NoteId> = [1, 2, 3, 42].into_iter().collect();
        let found = store.get_many(&ids).await.unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.contains_key(&1));
        assert!(found.contains_key(&3));
        assert!(!found.contains_key(&2));
    }
}
