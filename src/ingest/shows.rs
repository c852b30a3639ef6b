//! Show records: one line describes one episode of one season of a show.
//!
//! ```text
//! showName;seasonNumber;DD/MM/YYYY;episodeNumber;episodeTitle;HH:MM;rating
//! ```

use crate::domain::{Date, Episode, Season, Show, TimeOfDay};

use super::record::{CsvEntry, ParseError};

/// Number of fields in a show record
pub const NUM_FIELDS_SHOW: usize = 7;

/// Build a one-season, one-episode show from a record
pub fn parse_show_record(entry: &CsvEntry) -> Result<Show, ParseError> {
    entry.expect_fields(NUM_FIELDS_SHOW)?;

    let show_name = entry.field(0)?;
    let season_number = entry.get_as_i32(1)?;
    let release_date: Date = entry.field(2)?.parse().map_err(ParseError::InvalidDate)?;

    let episode_number = entry.get_as_i32(3)?;
    let episode_title = entry.field(4)?;
    let duration: TimeOfDay = entry.field(5)?.parse().map_err(ParseError::InvalidTime)?;
    let rating = entry.get_as_real(6)?;

    let episode = Episode::new(episode_number, episode_title, duration, rating)?;

    let mut season = Season::new(season_number, release_date);
    season.enqueue_episode(episode)?;

    let mut show = Show::new(show_name)?;
    show.add_season(&season)?;

    Ok(show)
}
