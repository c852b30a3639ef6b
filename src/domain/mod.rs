//! Domain types for the show catalog and watch history.
//!
//! - Time: `Date` and `TimeOfDay` value records
//! - Episode / Season / Show: the nested show hierarchy
//! - Film: entries of the watch stack

pub mod episode;
pub mod error;
pub mod film;
pub mod season;
pub mod show;
pub mod time;

// Re-export commonly used types
pub use episode::Episode;
pub use error::DomainError;
pub use film::{Film, FilmGenre};
pub use season::Season;
pub use show::{SeasonAdd, Show};
pub use time::{Date, TemporalParseError, TimeOfDay, DATE_LENGTH, TIME_LENGTH};
