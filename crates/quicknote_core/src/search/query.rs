//! Pure listing queries over in-memory notes.
//!
//! # Responsibility
//! - Substring filtering for type-as-you-search.
//! - Deterministic display ordering.
//!
//! # Invariants
//! - Neither function mutates or reorders the underlying collection.
//! - Sorting is stable: equal keys keep their input order.

use crate::model::note::Note;

/// Filters notes whose title or content contains `query`, ignoring case.
///
/// Blank and whitespace-only queries return the full input in order.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    if query.trim().is_empty() {
        return notes.iter().collect();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| {
            note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Orders notes for display: starred first, then most recently updated.
///
/// Ties on both keys keep the relative order of the input.
pub fn sort_for_display(mut notes: Vec<&Note>) -> Vec<&Note> {
    notes.sort_by(|a, b| {
        b.starred
            .cmp(&a.starred)
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });
    notes
}
