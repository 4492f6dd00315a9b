//! Domain model for the note widget core.
//!
//! # Responsibility
//! - Define the canonical data structures used by store, search and storage.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is a hard remove; there is no tombstone state.

pub mod note;
pub mod theme;
