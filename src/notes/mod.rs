//! Notes Module
//!
//! Note records and the storage they live in.

mod model;
mod store;

pub use model::{Note, NoteId, MAX_TITLE_LENGTH};
pub use store::{InMemoryNoteStore, NoteStore};
