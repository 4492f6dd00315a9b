//! Persistence layer: opaque key-value contract and collection round-trip.
//!
//! # Responsibility
//! - Define the durable string get/set primitive and its SQLite backend.
//! - Isolate storage encoding details from store orchestration.
//!
//! # Invariants
//! - Persistence failures go to the log error channel; the public save/load
//!   surface degrades instead of propagating.

pub mod kv;
pub mod persistence;
