//! Best-effort key-value snapshot persistence for the matcha demo.
//!
//! One JSON file per key under a caller-chosen directory. Reads that fail
//! for any reason fall back to a default value with a logged warning: the
//! demo must keep working with absent, stale, or hand-mangled data.

pub mod error;
mod store;

pub use error::{Error, Result};
pub use store::SnapshotStore;

#[cfg(test)]
mod tests;
