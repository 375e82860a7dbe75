//! fatar-core
//!
//! Core library for merging many independently-built static `ar` archives
//! into one deduplicated "fat" archive.
//!
//! This crate defines the archive container parser and writer, the archive
//! selection rules, the content-hash deduplicator, and the merge pipeline
//! that ties them together.
//!
//! The goal is to keep all substantive logic here so it is fully testable
//! and reusable from multiple frontends (CLI, build scripts, etc.).

pub mod assemble;
pub mod dedup;
pub mod format;
pub mod merge;
pub mod select;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
