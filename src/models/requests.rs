//! Request DTOs for the notes API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::notes::MAX_TITLE_LENGTH;

/// Request body for creating (POST /notes) or editing (PUT /notes/:id) a note
///
/// # Fields
/// - `title`: Required, non-blank, at most 200 characters
/// - `content`: Free text, defaults to empty
#[derive(Debug, Clone, Deserialize)]
pub struct NoteRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl NoteRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Title cannot be empty".to_string());
        }
        if self.title.chars().count() > MAX_TITLE_LENGTH {
            return Some(format!(
                "Title exceeds maximum length of {} characters",
                MAX_TITLE_LENGTH
            ));
        }
        None
    }
}
