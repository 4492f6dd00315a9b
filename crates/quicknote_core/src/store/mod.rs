//! Note store orchestration layer.
//!
//! # Responsibility
//! - Own the in-memory collection and the debounced commit protocol.
//! - Keep UI shells decoupled from storage details.

pub mod note_store;
