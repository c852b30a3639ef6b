//! Record ingestion.
//!
//! Turns delimited text records into domain values and feeds them into the
//! collections:
//!
//! 1. **Record**: split a line into typed fields
//! 2. **Shows / Films**: build a `Show` or `Film` from one record
//! 3. **Loader**: read a whole file and merge/push every record
//!
//! # Flow
//!
//! ```text
//! shows.csv → CsvEntry → Show (1 season, 1 episode) → ShowCatalog::merge
//! films.csv → CsvEntry → Film → WatchStack::push
//! ```

pub mod films;
pub mod loader;
pub mod record;
pub mod shows;

// Re-export key types
pub use films::{parse_film_record, NUM_FIELDS_FILM};
pub use loader::{load_films, load_films_from_str, load_shows, load_shows_from_str, LoadReport};
pub use record::{CsvEntry, ParseError};
pub use shows::{parse_show_record, NUM_FIELDS_SHOW};
