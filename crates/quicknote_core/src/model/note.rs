//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record shared by store, search and storage.
//! - Own title normalization and the list preview projection.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `created_at <= updated_at` for every committed note.
//! - A committed or displayed title is never blank.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Placeholder applied whenever a note would otherwise be blank-titled.
pub const UNTITLED_TITLE: &str = "Untitled Note";

const PREVIEW_MAX_CHARS: usize = 100;

/// Stable opaque identifier for a note.
///
/// Freshly generated ids are UUID v4 strings, but any unique string loaded
/// from storage is accepted so legacy records keep their identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a fresh unique id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Canonical note record.
///
/// The serde shape is the persisted wire layout: camelCase keys and ISO-8601
/// timestamps. `starred` is absent on legacy records and defaults to `false`
/// on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable opaque id assigned at creation.
    pub id: NoteId,
    /// Display title. Blank values normalize to [`UNTITLED_TITLE`].
    pub title: String,
    /// Free-form body text. No length limit is enforced.
    pub content: String,
    /// Starred notes sort ahead of unstarred ones in display order.
    #[serde(default)]
    pub starred: bool,
    /// Set once at creation, immutable afterwards.
    pub created_at: DateTime<Utc>,
    /// Stamped at creation and on every committed mutation.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a fresh note with the placeholder title and empty content.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: NoteId::generate(),
            title: UNTITLED_TITLE.to_string(),
            content: String::new(),
            starred: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces a blank or whitespace-only title with the placeholder.
    pub fn normalize_title(&mut self) {
        if self.title.trim().is_empty() {
            self.title = UNTITLED_TITLE.to_string();
        }
    }

    /// Derives the list preview: the first 100 characters of content with a
    /// trailing ellipsis when truncated. `None` for blank content.
    pub fn preview(&self) -> Option<String> {
        let trimmed = self.content.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut preview: String = trimmed.chars().take(PREVIEW_MAX_CHARS).collect();
        if trimmed.chars().count() > PREVIEW_MAX_CHARS {
            preview.push('…');
        }
        Some(preview)
    }
}

/// Partial update applied by a note edit. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}
