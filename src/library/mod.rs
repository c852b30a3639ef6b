//! In-memory collections: the show catalog and the film watch stack.
//!
//! # Ordering
//!
//! ```text
//! ShowCatalog ── shows (newest first)
//!   └── Show ── seasons (newest first)
//!         └── Season ── episodes (arrival order)
//!
//! WatchStack ── films (top = last pushed)
//! ```

pub mod catalog;
pub mod watchstack;

pub use catalog::{CatalogError, MergeOutcome, ShowCatalog};
pub use watchstack::{WatchStack, WatchStackError};
