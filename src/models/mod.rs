//! Request and Response models for the notes API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::NoteRequest;
pub use responses::{
    CacheProbeResponse, DeleteResponse, HealthResponse, NoteIndexResponse, RecentNotesResponse,
};
