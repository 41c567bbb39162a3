//! API Handlers
//!
//! HTTP request handlers for each notes server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::cache::{CacheTransport, InMemoryCache};
use crate::error::{AppError, Result};
use crate::models::{
    CacheProbeResponse, DeleteResponse, HealthResponse, NoteIndexResponse, NoteRequest,
    RecentNotesResponse,
};
use crate::notes::{InMemoryNoteStore, Note, NoteId, NoteStore};
use crate::recent::RecentItemsTracker;

/// Key the cache probe writes to
pub const CACHE_PROBE_KEY: &str = "cache_probe_key";
/// Value the cache probe writes
pub const CACHE_PROBE_VALUE: &str = "Hello from the recent notes service!";
/// TTL in seconds for the probe value
pub const CACHE_PROBE_TTL: u64 = 60 * 5;

/// Application state shared across all handlers.
///
/// Holds the note store, the shared cache handle, and the tracker built on
/// that same handle.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteStore>,
    pub cache: Arc<dyn CacheTransport>,
    pub tracker: RecentItemsTracker,
}

impl AppState {
    /// Creates a new AppState over the given collaborators.
    pub fn new(notes: Arc<dyn NoteStore>, cache: Arc<dyn CacheTransport>) -> Self {
        Self {
            tracker: RecentItemsTracker::new(cache.clone()),
            notes,
            cache,
        }
    }

    /// Creates an AppState with in-memory notes over the given cache handle.
    pub fn with_cache(cache: Arc<dyn CacheTransport>) -> Self {
        Self::new(Arc::new(InMemoryNoteStore::new()), cache)
    }

    /// Creates an AppState with in-memory notes and an in-memory cache.
    pub fn in_memory() -> Self {
        Self::with_cache(Arc::new(InMemoryCache::new()))
    }
}

/// Handler for GET /notes
///
/// Lists every note newest first, together with the recently viewed ones.
pub async fn list_notes_handler(
    State(state): State<AppState>,
) -> Result<Json<NoteIndexResponse>> {
    let notes = state.notes.list_all().await?;
    let recent_notes = state.tracker.list_recent(&*state.notes).await;

    Ok(Json(NoteIndexResponse {
        notes,
        recent_notes,
    }))
}

/// Handler for POST /notes
pub async fn create_note_handler(
    State(state): State<AppState>,
    Json(req): Json<NoteRequest>,
) -> Result<(StatusCode, Json<Note>)> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let note = state.notes.create(req.title, req.content).await?;
    info!(note_id = note.id, "Created note");

    Ok((StatusCode::CREATED, Json(note)))
}

/// Handler for GET /notes/:id
///
/// A successful read is recorded as a view; a missing note is not.
pub async fn get_note_handler(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
) -> Result<Json<Note>> {
    let note = state.notes.get(id).await?;
    state.tracker.record_view(id).await;

    Ok(Json(note))
}

/// Handler for PUT /notes/:id
pub async fn update_note_handler(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
    Json(req): Json<NoteRequest>,
) -> Result<Json<Note>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let note = state.notes.update(id, req.title, req.content).await?;

    Ok(Json(note))
}

/// Handler for DELETE /notes/:id
///
/// The note is deleted first; cleaning it out of the recent list is best
/// effort and cannot fail the request.
pub async fn delete_note_handler(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
) -> Result<Json<DeleteResponse>> {
    state.notes.delete(id).await?;
    info!(note_id = id, "Deleted note");
    state.tracker.remove_if_present(id).await;

    Ok(Json(DeleteResponse::new(id)))
}

/// Handler for GET /recent
pub async fn recent_notes_handler(
    State(state): State<AppState>,
) -> Json<RecentNotesResponse> {
    let recent_notes = state.tracker.list_recent(&*state.notes).await;
    Json(RecentNotesResponse { recent_notes })
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /health/cache
///
/// Writes a short-lived probe value and reads it back, reporting each step.
pub async fn cache_probe_handler(
    State(state): State<AppState>,
) -> Json<CacheProbeResponse> {
    let (set_success, set_error) = match state
        .cache
        .set(CACHE_PROBE_KEY, CACHE_PROBE_VALUE, Some(CACHE_PROBE_TTL))
        .await
    {
        Ok(()) => (true, None),
        Err(err) => (false, Some(err.to_string())),
    };

    let (get_success, get_error, retrieved_value) = match state.cache.get(CACHE_PROBE_KEY).await {
        Ok(value) => (true, None, value),
        Err(err) => (false, Some(err.to_string()), None),
    };

    Json(CacheProbeResponse {
        key: CACHE_PROBE_KEY.to_string(),
        value_set: CACHE_PROBE_VALUE.to_string(),
        ttl: CACHE_PROBE_TTL,
        set_success,
        set_error,
        get_success,
        get_error,
        retrieved_value,
    })
}
