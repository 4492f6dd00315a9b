//! Core note-store logic for the quicknote widget.
//! This crate is the single source of truth for collection invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod search;
pub mod storage;
pub mod store;
pub mod timefmt;

pub use logging::{default_log_level, init_logging};
pub use model::note::{Note, NoteId, NotePatch, UNTITLED_TITLE};
pub use model::theme::ThemePreference;
pub use search::query::{filter_notes, sort_for_display};
pub use storage::kv::{KvStore, SqliteKvStore, StorageError, StorageResult};
pub use storage::persistence::{PersistenceAdapter, NOTES_KEY, THEME_KEY};
pub use store::note_store::{NoteStore, SaveStatus, StoreTuning};
pub use timefmt::{clock_label, day_label};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
