//! Response DTOs for the notes API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::notes::{Note, NoteId};

/// Response body for the index (GET /notes)
#[derive(Debug, Clone, Serialize)]
pub struct NoteIndexResponse {
    /// Every note, newest first
    pub notes: Vec<Note>,
    /// Recently viewed notes, most recent first
    pub recent_notes: Vec<Note>,
}

/// Response body for GET /recent
#[derive(Debug, Clone, Serialize)]
pub struct RecentNotesResponse {
    pub recent_notes: Vec<Note>,
}

/// Response body for the DELETE operation (DELETE /notes/:id)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The id that was deleted
    pub id: NoteId,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(id: NoteId) -> Self {
        Self {
            message: format!("Note {} deleted successfully", id),
            id,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the cache probe (GET /health/cache)
///
/// Failures are reported in the body rather than as an error status.
#[derive(Debug, Clone, Serialize)]
pub struct CacheProbeResponse {
    pub key: String,
    pub value_set: String,
    /// TTL in seconds the probe value was written with
    pub ttl: u64,
    pub set_success: bool,
    pub set_error: Option<String>,
    pub get_success: bool,
    pub get_error: Option<String>,
    pub retrieved_value: Option<String>,
}
