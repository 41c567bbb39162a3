//! Recent Notes - a note-taking server
//!
//! Serves note CRUD over HTTP and keeps a short, deduplicated list of the
//! most recently viewed notes in a key-value cache (Redis or in-process).

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod notes;
pub mod recent;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use recent::{RecentItemsTracker, MAX_RECENT, RECENT_NOTES_KEY};
pub use tasks::spawn_cleanup_task;
