//! Film records.
//!
//! ```text
//! name;HH:MM;genreCode;DD/MM/YYYY;rating;isAdult
//! ```

use crate::domain::{Date, Film, FilmGenre, TimeOfDay};

use super::record::{CsvEntry, ParseError};

/// Number of fields in a film record
pub const NUM_FIELDS_FILM: usize = 6;

/// Build a film from a record
pub fn parse_film_record(entry: &CsvEntry) -> Result<Film, ParseError> {
    entry.expect_fields(NUM_FIELDS_FILM)?;

    let name = entry.field(0)?;
    let duration: TimeOfDay = entry.field(1)?.parse().map_err(ParseError::InvalidTime)?;
    let code = entry.get_as_integer(2)?;
    let genre = FilmGenre::from_code(code).ok_or(ParseError::UnknownGenre(code))?;
    let release: Date = entry.field(3)?.parse().map_err(ParseError::InvalidDate)?;
    let rating = entry.get_as_real(4)?;
    let is_adult = entry.get_as_bool(5)?;

    Ok(Film::new(name, duration, genre, release, rating, is_adult)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_film_record() {
        let entry = CsvEntry::parse("Alien;01:57;3;25/05/1979;8.5;1", ';');
        let film = parse_film_record(&entry).unwrap();

        assert_eq!(film.name, "Alien");
        assert_eq!(film.duration, TimeOfDay::new(1, 57));
        assert_eq!(film.genre, FilmGenre::Horror);
        assert_eq!(film.release, Date::new(25, 5, 1979));
        assert!(film.is_adult);
    }

    #[test]
    fn test_unknown_genre() {
        let entry = CsvEntry::parse("Alien;01:57;9;25/05/1979;8.5;1", ';');
        assert_eq!(parse_film_record(&entry), Err(ParseError::UnknownGenre(9)));
    }
}
