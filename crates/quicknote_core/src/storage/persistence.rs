//! Collection persistence round-trip over the opaque key-value store.
//!
//! # Responsibility
//! - Encode/decode the full note collection as JSON under a fixed key.
//! - Normalize legacy record shapes on load.
//! - Keep the plain-string theme slot.
//!
//! # Invariants
//! - `save`/`load` never raise to the caller; failures go to the error
//!   channel and the in-memory collection stays authoritative.
//! - A load never yields a blank title, and records missing `starred`
//!   come back unstarred.

use crate::model::note::Note;
use crate::model::theme::ThemePreference;
use crate::storage::kv::{KvStore, StorageResult};
use log::{error, info, warn};

/// Fixed key for the serialized note collection.
pub const NOTES_KEY: &str = "notes-app-data";
/// Fixed key for the plain-string theme slot.
pub const THEME_KEY: &str = "notes-app-theme";

/// JSON round-trip adapter between the note collection and a [`KvStore`].
pub struct PersistenceAdapter<S: KvStore> {
    store: S,
}

impl<S: KvStore> PersistenceAdapter<S> {
    /// Creates an adapter owning the given backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persists the full collection under [`NOTES_KEY`].
    ///
    /// Failures are logged and swallowed; the in-memory collection remains
    /// the source of truth until the next successful save.
    pub fn save(&mut self, notes: &[Note]) {
        if let Err(err) = self.try_save(notes) {
            error!(
                "event=notes_save module=storage status=error count={} error={err}",
                notes.len()
            );
        }
    }

    /// Fallible save used by [`Self::save`] and by tests observing the
    /// error path.
    pub fn try_save(&mut self, notes: &[Note]) -> StorageResult<()> {
        let payload = serde_json::to_string(notes)?;
        self.store.set(NOTES_KEY, &payload)
    }

    /// Loads the collection from [`NOTES_KEY`].
    ///
    /// An absent key and a corrupt payload both degrade to an empty
    /// collection, the latter with an error-channel report, so the caller
    /// always starts in a valid state.
    pub fn load(&self) -> Vec<Note> {
        match self.try_load() {
            Ok(notes) => {
                info!(
                    "event=notes_load module=storage status=ok count={}",
                    notes.len()
                );
                notes
            }
            Err(err) => {
                error!("event=notes_load module=storage status=error error={err}");
                Vec::new()
            }
        }
    }

    /// Fallible load with legacy-shape normalization.
    pub fn try_load(&self) -> StorageResult<Vec<Note>> {
        let Some(raw) = self.store.get(NOTES_KEY)? else {
            return Ok(Vec::new());
        };

        let mut notes: Vec<Note> = serde_json::from_str(&raw)?;
        for note in &mut notes {
            note.normalize_title();
        }
        Ok(notes)
    }

    /// Persists the theme choice as a plain string under [`THEME_KEY`].
    pub fn save_theme(&mut self, theme: ThemePreference) {
        if let Err(err) = self.store.set(THEME_KEY, theme.as_str()) {
            error!("event=theme_save module=storage status=error error={err}");
        }
    }

    /// Loads the theme choice.
    ///
    /// `None` means "follow the system preference": either nothing was
    /// stored or the stored value is unrecognized.
    pub fn load_theme(&self) -> Option<ThemePreference> {
        let raw = match self.store.get(THEME_KEY) {
            Ok(value) => value?,
            Err(err) => {
                error!("event=theme_load module=storage status=error error={err}");
                return None;
            }
        };

        let parsed = ThemePreference::parse(&raw);
        if parsed.is_none() {
            warn!("event=theme_load module=storage status=ignored value={raw}");
        }
        parsed
    }
}
