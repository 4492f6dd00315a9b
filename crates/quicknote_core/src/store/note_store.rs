//! In-memory note store and debounced commit protocol.
//!
//! # Responsibility
//! - Own the authoritative note collection and the selected-note state.
//! - Decide when a pending edit is committed and persisted.
//!
//! # Invariants
//! - At most one pending commit exists at any moment; scheduling a new one
//!   supersedes the previous handle.
//! - A pending commit is resolved by firing (deadline or flush) or by losing
//!   its last dirty note to deletion, never silently dropped with edits left.
//! - Creations, deletions and star toggles persist immediately.

use crate::model::note::{Note, NoteId, NotePatch};
use crate::model::theme::ThemePreference;
use crate::search::query::{filter_notes, sort_for_display};
use crate::storage::kv::KvStore;
use crate::storage::persistence::PersistenceAdapter;
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::time::{Duration, Instant};

/// Quiet period after the last edit before the pending commit fires.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(1000);
/// How long [`SaveStatus::Saved`] is reported after a commit completes.
pub const SAVED_DISPLAY_WINDOW: Duration = Duration::from_millis(2000);

/// Timing knobs for the commit protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreTuning {
    /// Quiet period between the last edit and its commit.
    pub debounce_delay: Duration,
    /// Display window for the just-saved status.
    pub saved_display_window: Duration,
}

impl Default for StoreTuning {
    fn default() -> Self {
        Self {
            debounce_delay: DEBOUNCE_DELAY,
            saved_display_window: SAVED_DISPLAY_WINDOW,
        }
    }
}

/// Commit status derived purely from timer state, for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// No commit pending and nothing recently saved.
    Idle,
    /// An edit is waiting for its quiet period to elapse.
    Saving,
    /// A commit completed at the contained time, within the display window.
    Saved { at: DateTime<Utc> },
}

/// Cancellable deferred-commit handle. Replacing the deadline is the
/// cancel-then-schedule path.
#[derive(Debug)]
struct PendingCommit {
    deadline: Instant,
    dirty: Vec<NoteId>,
}

#[derive(Debug, Clone, Copy)]
struct LastCommit {
    at: DateTime<Utc>,
    finished: Instant,
}

/// Authoritative in-memory note collection plus its persistence protocol.
///
/// Held by the UI shell as an owned value; all mutation goes through these
/// methods on the single event-processing thread.
pub struct NoteStore<S: KvStore> {
    notes: Vec<Note>,
    selected: Option<NoteId>,
    pending: Option<PendingCommit>,
    last_commit: Option<LastCommit>,
    tuning: StoreTuning,
    adapter: PersistenceAdapter<S>,
}

impl<S: KvStore> NoteStore<S> {
    /// Opens a store over the given key-value backend, loading any
    /// previously persisted collection.
    pub fn open(store: S) -> Self {
        Self::open_with_tuning(store, StoreTuning::default())
    }

    /// Opens a store with custom commit timings.
    pub fn open_with_tuning(store: S, tuning: StoreTuning) -> Self {
        let adapter = PersistenceAdapter::new(store);
        let notes = adapter.load();
        Self {
            notes,
            selected: None,
            pending: None,
            last_commit: None,
            tuning,
            adapter,
        }
    }

    /// All notes in storage order, newest created first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Currently selected note id, if any.
    pub fn selected_id(&self) -> Option<&NoteId> {
        self.selected.as_ref()
    }

    /// Currently selected note, if it still exists in the collection.
    pub fn selected_note(&self) -> Option<&Note> {
        let id = self.selected.as_ref()?;
        self.notes.iter().find(|note| &note.id == id)
    }

    /// Creates a note at the front of the collection and persists
    /// immediately. Always succeeds; returns the new id.
    pub fn create(&mut self) -> NoteId {
        let note = Note::new(Utc::now());
        let id = note.id.clone();
        self.notes.insert(0, note);
        self.adapter.save(&self.notes);
        info!("event=note_create module=store status=ok id={id}");
        id
    }

    /// Selects `id`, committing any pending edit first so that switching
    /// away never loses work. Ids no longer in the collection clear the
    /// selection instead.
    pub fn select(&mut self, id: &NoteId) {
        self.flush();
        self.selected = self
            .notes
            .iter()
            .any(|note| &note.id == id)
            .then(|| id.clone());
    }

    /// Applies `patch` to the note in memory and (re)schedules the single
    /// pending commit. Unknown ids are a silent no-op.
    ///
    /// Reads reflect the patch instantly; normalization, the `updated_at`
    /// stamp and persistence wait for the commit.
    pub fn edit(&mut self, id: &NoteId, patch: NotePatch) {
        self.edit_at(id, patch, Instant::now());
    }

    fn edit_at(&mut self, id: &NoteId, patch: NotePatch, now: Instant) {
        let Some(note) = self.notes.iter_mut().find(|note| &note.id == id) else {
            debug!("event=note_edit module=store status=ignored id={id}");
            return;
        };

        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }

        let deadline = now + self.tuning.debounce_delay;
        match self.pending.as_mut() {
            Some(pending) => {
                pending.deadline = deadline;
                if !pending.dirty.contains(id) {
                    pending.dirty.push(id.clone());
                }
            }
            None => {
                self.pending = Some(PendingCommit {
                    deadline,
                    dirty: vec![id.clone()],
                });
            }
        }
    }

    /// Fires the pending commit once its quiet period has elapsed.
    ///
    /// The host event loop calls this to pump the deferred-commit timeline;
    /// a no-op while the window is still open or nothing is pending.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if due {
            self.commit_pending();
        }
    }

    /// Commits any pending edit synchronously and clears the handle.
    ///
    /// Idempotent when nothing is pending. Callers invoke this before
    /// selection switches, before teardown, and before reading a
    /// last-saved display.
    pub fn flush(&mut self) {
        self.commit_pending();
    }

    fn commit_pending(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        let now = Utc::now();
        let mut committed = 0usize;
        for id in &pending.dirty {
            if let Some(note) = self.notes.iter_mut().find(|note| &note.id == id) {
                note.normalize_title();
                note.updated_at = now;
                committed += 1;
            }
        }

        self.adapter.save(&self.notes);
        self.last_commit = Some(LastCommit {
            at: now,
            finished: Instant::now(),
        });
        info!("event=note_commit module=store status=ok count={committed}");
    }

    /// Flips the starred flag and persists immediately; starring is never
    /// debounced or coalesced away. Timestamps stay untouched. Unknown ids
    /// are a silent no-op.
    pub fn toggle_star(&mut self, id: &NoteId) {
        let Some(note) = self.notes.iter_mut().find(|note| &note.id == id) else {
            debug!("event=note_star module=store status=ignored id={id}");
            return;
        };
        note.starred = !note.starred;
        let starred = note.starred;

        self.adapter.save(&self.notes);
        info!("event=note_star module=store status=ok id={id} starred={starred}");
    }

    /// Hard-deletes the note and persists immediately. Deleting the
    /// selected note clears the selection; unknown ids leave the
    /// collection, selection and storage untouched.
    pub fn delete(&mut self, id: &NoteId) {
        let before = self.notes.len();
        self.notes.retain(|note| &note.id != id);
        if self.notes.len() == before {
            debug!("event=note_delete module=store status=ignored id={id}");
            return;
        }

        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        if let Some(pending) = self.pending.as_mut() {
            pending.dirty.retain(|dirty| dirty != id);
            if pending.dirty.is_empty() {
                self.pending = None;
            }
        }

        self.adapter.save(&self.notes);
        info!("event=note_delete module=store status=ok id={id}");
    }

    /// Case-insensitive substring search over title and content.
    ///
    /// Pure: collection order and contents are unaffected.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        filter_notes(&self.notes, query)
    }

    /// Full collection in display order: starred first, then most recently
    /// updated, stable on ties.
    pub fn list_sorted(&self) -> Vec<&Note> {
        sort_for_display(self.notes.iter().collect())
    }

    /// Commit status for the status line.
    pub fn save_status(&self) -> SaveStatus {
        self.status_at(Instant::now())
    }

    fn status_at(&self, now: Instant) -> SaveStatus {
        if self.pending.is_some() {
            return SaveStatus::Saving;
        }
        if let Some(last) = self.last_commit {
            if now.duration_since(last.finished) < self.tuning.saved_display_window {
                return SaveStatus::Saved { at: last.at };
            }
        }
        SaveStatus::Idle
    }

    /// Persisted theme choice, `None` meaning "follow the system".
    pub fn theme(&self) -> Option<ThemePreference> {
        self.adapter.load_theme()
    }

    /// Persists the theme choice in its own slot, independent of notes.
    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.adapter.save_theme(theme);
    }
}
