//! Note Record Module

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Storage-assigned note identifier.
pub type NoteId = u64;

/// Maximum title length in characters
pub const MAX_TITLE_LENGTH: usize = 200;

// == Note ==
/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
