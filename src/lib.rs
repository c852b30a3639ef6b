//! uocplay - Show catalog and film watch history
//!
//! Keeps a catalog of episodic shows (show → seasons → episodes) and a LIFO
//! watch history of films, both as owned in-memory collections.
//!
//! # Modules
//!
//! - `domain`: Value types (Date, TimeOfDay, Episode, Season, Show, Film)
//! - `library`: Collections (ShowCatalog, WatchStack)
//! - `ingest`: Record parsing and file loading
//! - `config`: Paths and ingestion settings
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Print the whole catalog
//! uocplay shows --file shows.csv
//!
//! # Season statistics
//! uocplay season "Dark" 1
//!
//! # Watch history, dropping the two most recent films
//! uocplay films --pop 2
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod ingest;
pub mod library;

// Re-export main types at crate root for convenience
pub use domain::{Date, DomainError, Episode, Film, FilmGenre, Season, SeasonAdd, Show, TimeOfDay};
pub use ingest::{parse_film_record, parse_show_record, CsvEntry, LoadReport, ParseError};
pub use library::{CatalogError, MergeOutcome, ShowCatalog, WatchStack, WatchStackError};
