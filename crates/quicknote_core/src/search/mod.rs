//! Listing query entry points.
//!
//! # Responsibility
//! - Expose the pure filter/sort functions used for note listings.
//! - Keep result shaping inside core.

pub mod query;
