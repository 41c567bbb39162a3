//! Recent Notes Module
//!
//! Tracks the few most recently viewed notes in the shared cache.

mod list;
mod tracker;

#[cfg(test)]
mod property_tests;

pub use list::RecentList;
pub use tracker::RecentItemsTracker;

// == Public Constants ==
/// Cache key the recent list is stored under
pub const RECENT_NOTES_KEY: &str = "recent_note_ids";

/// Maximum number of ids the recent list holds
pub const MAX_RECENT: usize = 3;
